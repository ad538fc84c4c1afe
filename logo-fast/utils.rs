/// Circular run test on a 16-bit ring mask: true when at least `min_count`
/// consecutive bits (with wrap-around) are set.
pub fn has_consecutive_bits(mask: u16, min_count: usize) -> bool {
    if min_count > 16 || min_count == 0 {
        return false;
    }

    // mask & rotl(mask, 1) & ... & rotl(mask, n-1) keeps the start of each run of n
    let mut test_mask = mask;
    for i in 1..min_count {
        test_mask &= mask.rotate_left(i as u32);
        if test_mask == 0 {
            return false;
        }
    }

    test_mask != 0
}
