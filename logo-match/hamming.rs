use logo_core::Descriptor;

/// Bytes `8 * i .. 8 * i + 8` of a descriptor as one little-endian word
#[inline(always)]
fn word(d: &Descriptor, i: usize) -> u64 {
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&d[i * 8..i * 8 + 8]);
    u64::from_le_bytes(bytes)
}

/// Number of differing bits between two descriptors: popcount of the XOR
/// of their four 64-bit words
#[inline(always)]
pub fn hamming(a: &Descriptor, b: &Descriptor) -> u32 {
    (word(a, 0) ^ word(b, 0)).count_ones()
        + (word(a, 1) ^ word(b, 1)).count_ones()
        + (word(a, 2) ^ word(b, 2)).count_ones()
        + (word(a, 3) ^ word(b, 3)).count_ones()
}

/// Index and distance of the first nearest descriptor in `candidates`
pub fn nearest(descriptor: &Descriptor, candidates: &[Descriptor]) -> Option<(usize, u32)> {
    let mut best: Option<(usize, u32)> = None;
    for (idx, candidate) in candidates.iter().enumerate() {
        let distance = hamming(descriptor, candidate);
        if best.is_none_or(|(_, d)| distance < d) {
            best = Some((idx, distance));
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_hamming_identical() {
        assert_eq!(hamming(&[0u8; 32], &[0u8; 32]), 0);
    }

    #[test]
    fn test_hamming_all_different() {
        assert_eq!(hamming(&[0u8; 32], &[255u8; 32]), 256);
    }

    #[test]
    fn test_hamming_single_bit() {
        let mut b = [0u8; 32];
        b[31] = 0b1000_0000;
        assert_eq!(hamming(&[0u8; 32], &b), 1);
    }

    #[test]
    fn test_nearest_prefers_first_on_ties() {
        let query = [0u8; 32];
        let mut one = [0u8; 32];
        one[0] = 1;
        let mut other = [0u8; 32];
        other[5] = 4;
        assert_eq!(nearest(&query, &[one, other]), Some((0, 1)));
        assert_eq!(nearest(&query, &[]), None);
    }

    #[test]
    fn test_hamming_word_boundaries() {
        let mut b = [0u8; 32];
        for i in [7, 8, 15, 16, 23, 24] {
            b[i] = 0b1000_0001;
        }
        assert_eq!(hamming(&[0u8; 32], &b), 12);
        assert_eq!(word(&b, 0), 0x8100_0000_0000_0000);
        assert_eq!(word(&b, 1), 0x8100_0000_0000_0081);
    }

    proptest! {
        #[test]
        fn hamming_matches_bytewise_popcount(a in any::<[u8; 32]>(), b in any::<[u8; 32]>()) {
            let bytewise: u32 = a.iter().zip(b.iter()).map(|(x, y)| (x ^ y).count_ones()).sum();
            prop_assert_eq!(hamming(&a, &b), bytewise);
        }

        #[test]
        fn hamming_is_a_metric(a in any::<[u8; 32]>(), b in any::<[u8; 32]>(), c in any::<[u8; 32]>()) {
            prop_assert_eq!(hamming(&a, &a), 0);
            prop_assert_eq!(hamming(&a, &b), hamming(&b, &a));
            prop_assert!(hamming(&a, &b) <= 256);
            prop_assert!(hamming(&a, &c) <= hamming(&a, &b) + hamming(&b, &c));
        }
    }
}
