#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Row-major 8-bit grayscale image
pub type Image = Vec<u8>;

/// Key-point ≙ FAST corner + orientation (radians), in level-0 pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Keypoint {
    pub x: f32,
    pub y: f32,
    pub angle: f32,
    /// Pyramid level the corner was found on
    pub octave: usize,
    /// Harris corner response at the detection level
    pub response: f32,
}

/// 256-bit binary descriptor = 32 bytes
pub type Descriptor = [u8; 32];

/// Bits in one descriptor
pub const DESCRIPTOR_BITS: u32 = 256;

/// Descriptors of one image, in extraction order
pub type DescriptorSet = Vec<Descriptor>;

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct OrbConfig {
    /// FAST intensity threshold (1-127)
    pub threshold: u8,
    /// Side of the orientation and descriptor patch, odd
    pub patch_size: usize,
    /// Keypoint budget per image
    pub n_features: usize,
    pub scale_factor: f32,
    pub n_levels: usize,
    /// No corner is reported closer than this to a level border
    pub edge_threshold: usize,
    pub n_threads: usize,
}

impl Default for OrbConfig {
    fn default() -> Self {
        Self {
            threshold: 20,
            patch_size: 31,
            n_features: 500,
            scale_factor: 1.2,
            n_levels: 8,
            edge_threshold: 19,
            n_threads: num_cpus::get().max(1),
        }
    }
}

/// Initialize Rayon thread pool with the specified number of threads
pub fn init_thread_pool(n_threads: usize) -> Result<(), rayon::ThreadPoolBuildError> {
    rayon::ThreadPoolBuilder::new()
        .num_threads(n_threads)
        .build_global()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let cfg = OrbConfig::default();
        assert_eq!(cfg.threshold, 20);
        assert_eq!(cfg.patch_size, 31);
        assert_eq!(cfg.n_features, 500);
        assert_eq!(cfg.n_levels, 8);
        assert!(cfg.n_threads >= 1);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_partial_config_uses_defaults() {
        let cfg: OrbConfig = serde_json::from_str(r#"{ "threshold": 30 }"#).unwrap();
        assert_eq!(cfg.threshold, 30);
        assert_eq!(cfg.patch_size, 31);
        assert_eq!(cfg.scale_factor, 1.2);
    }
}
