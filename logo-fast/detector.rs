use logo_core::{Image, Keypoint, OrbConfig};
use crate::corner_detection::CornerDetector;
use crate::error::{FastError, FastResult};
use crate::pyramid::ImagePyramid;
use crate::refinement::KeypointRefinement;
use crate::types::{PyramidLevel, ScaleLevel};
use rayon::prelude::*;

/// Multi-scale FAST detector returning oriented, budgeted keypoints
#[derive(Debug, Clone)]
pub struct FastDetector {
    cfg: OrbConfig,
    w: usize,
    h: usize,
    scale_levels: Vec<ScaleLevel>,
}

impl FastDetector {
    /// Creates a new FAST detector with validation
    pub fn new(cfg: OrbConfig, width: usize, height: usize) -> FastResult<Self> {
        if width == 0 || height == 0 {
            return Err(FastError::InvalidImageSize { width, height });
        }
        Self::validate_config(&cfg)?;

        let scale_levels = ImagePyramid::generate_scale_levels(
            width,
            height,
            cfg.scale_factor,
            cfg.n_levels,
            cfg.edge_threshold,
        );

        Ok(Self {
            cfg,
            w: width,
            h: height,
            scale_levels,
        })
    }

    /// Checks detector parameters independently of any image
    pub fn validate_config(cfg: &OrbConfig) -> FastResult<()> {
        // 0 would accept every pixel, >127 breaks the signed comparisons
        if cfg.threshold == 0 || cfg.threshold > 127 {
            return Err(FastError::InvalidThreshold(cfg.threshold));
        }
        if cfg.patch_size % 2 == 0 || cfg.patch_size < 7 {
            return Err(FastError::InvalidPatchSize(cfg.patch_size));
        }
        if cfg.edge_threshold < 3 {
            return Err(FastError::InvalidEdgeThreshold(cfg.edge_threshold));
        }
        if !cfg.scale_factor.is_finite() || cfg.scale_factor <= 1.0 {
            return Err(FastError::InvalidScaleFactor(cfg.scale_factor));
        }
        if cfg.n_levels == 0 || cfg.n_levels > 32 {
            return Err(FastError::InvalidLevelCount(cfg.n_levels));
        }
        if cfg.n_features == 0 {
            return Err(FastError::InvalidFeatureCount(cfg.n_features));
        }
        Ok(())
    }

    /// Validates image data before processing
    fn validate_image(&self, img: &Image) -> FastResult<()> {
        let expected_len = self.w * self.h;
        if img.len() != expected_len {
            return Err(FastError::InvalidImageData {
                expected_len,
                actual_len: img.len(),
            });
        }
        Ok(())
    }

    /// Detect keypoints in level-0 coordinates
    pub fn detect_keypoints(&self, img: &Image) -> FastResult<Vec<Keypoint>> {
        Ok(self.detect_with_pyramid(img)?.1)
    }

    /// Detect keypoints and hand back the pyramid they were found on, so
    /// descriptors can be computed on the matching level.
    pub fn detect_with_pyramid(&self, img: &Image) -> FastResult<(Vec<PyramidLevel>, Vec<Keypoint>)> {
        self.validate_image(img)?;

        let pyramid = ImagePyramid::build_image_pyramid(img, self.w, self.h, &self.scale_levels)?;
        let budget = KeypointRefinement::features_per_level(
            self.cfg.n_features,
            self.cfg.scale_factor,
            pyramid.len(),
        );

        let per_level: Vec<Vec<Keypoint>> = pyramid
            .par_iter()
            .zip(budget.par_iter())
            .map(|(level, &limit)| self.detect_keypoints_at_scale(level, limit))
            .collect();

        Ok((pyramid, per_level.into_iter().flatten().collect()))
    }

    /// Oriented keypoints of one level, scaled back to level-0 coordinates
    pub fn detect_keypoints_at_scale(&self, level: &PyramidLevel, limit: usize) -> Vec<Keypoint> {
        let scale_level = &level.scale;
        let candidates = CornerDetector::detect_keypoints_at_scale(
            &level.image,
            scale_level,
            self.cfg.threshold,
            self.cfg.edge_threshold,
        );

        KeypointRefinement::retain_best(candidates, limit)
            .into_iter()
            .map(|sk| {
                let lx = sk.keypoint.x as usize;
                let ly = sk.keypoint.y as usize;
                let angle = KeypointRefinement::compute_orientation(
                    &level.image,
                    scale_level.width,
                    scale_level.height,
                    lx,
                    ly,
                    self.cfg.patch_size,
                );
                Keypoint {
                    x: sk.keypoint.x * scale_level.scale,
                    y: sk.keypoint.y * scale_level.scale,
                    angle,
                    octave: scale_level.level,
                    response: sk.response,
                }
            })
            .collect()
    }

    /// Get scale levels for this detector
    pub fn get_scale_levels(&self) -> &[ScaleLevel] {
        &self.scale_levels
    }

    /// Get detector configuration
    pub fn config(&self) -> &OrbConfig {
        &self.cfg
    }

    /// Get image dimensions
    pub fn dimensions(&self) -> (usize, usize) {
        (self.w, self.h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_config() -> OrbConfig {
        OrbConfig {
            n_threads: 1,
            ..OrbConfig::default()
        }
    }

    fn create_small_test_config() -> OrbConfig {
        OrbConfig {
            patch_size: 7,
            edge_threshold: 4,
            n_levels: 1,
            n_threads: 1,
            ..OrbConfig::default()
        }
    }

    /// Pseudo-random 8x8 blocks: plenty of corners, no repeated structure
    fn create_block_image(width: usize, height: usize, seed: u32) -> Image {
        let mut state = seed.max(1);
        let cols = width.div_ceil(8);
        let rows = height.div_ceil(8);
        let mut cells = Vec::with_capacity(cols * rows);
        for _ in 0..cols * rows {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            cells.push((state >> 24) as u8);
        }
        let mut img = vec![0; width * height];
        for y in 0..height {
            for x in 0..width {
                img[y * width + x] = cells[(y / 8) * cols + x / 8];
            }
        }
        img
    }

    #[test]
    fn test_valid_constructor() {
        let detector = FastDetector::new(create_test_config(), 100, 100);
        assert!(detector.is_ok());
    }

    #[test]
    fn test_invalid_dimensions() {
        let result = FastDetector::new(create_test_config(), 0, 100);
        assert!(matches!(result, Err(FastError::InvalidImageSize { .. })));

        let result = FastDetector::new(create_test_config(), 100, 0);
        assert!(matches!(result, Err(FastError::InvalidImageSize { .. })));
    }

    #[test]
    fn test_invalid_threshold() {
        let mut cfg = create_test_config();

        cfg.threshold = 0;
        let result = FastDetector::new(cfg.clone(), 100, 100);
        assert!(matches!(result, Err(FastError::InvalidThreshold(0))));

        cfg.threshold = 200;
        let result = FastDetector::new(cfg, 100, 100);
        assert!(matches!(result, Err(FastError::InvalidThreshold(200))));
    }

    #[test]
    fn test_invalid_patch_size() {
        let mut cfg = create_test_config();
        cfg.patch_size = 16;
        assert!(matches!(FastDetector::validate_config(&cfg), Err(FastError::InvalidPatchSize(16))));
    }

    #[test]
    fn test_invalid_pyramid_parameters() {
        let cfg = OrbConfig { scale_factor: 1.0, ..create_test_config() };
        assert!(matches!(FastDetector::validate_config(&cfg), Err(FastError::InvalidScaleFactor(_))));

        let cfg = OrbConfig { n_levels: 0, ..create_test_config() };
        assert!(matches!(FastDetector::validate_config(&cfg), Err(FastError::InvalidLevelCount(0))));

        let cfg = OrbConfig { n_features: 0, ..create_test_config() };
        assert!(matches!(FastDetector::validate_config(&cfg), Err(FastError::InvalidFeatureCount(0))));

        let cfg = OrbConfig { edge_threshold: 2, ..create_test_config() };
        assert!(matches!(FastDetector::validate_config(&cfg), Err(FastError::InvalidEdgeThreshold(2))));
    }

    #[test]
    fn test_invalid_image_data() {
        let detector = FastDetector::new(create_small_test_config(), 10, 10).unwrap();
        let img = vec![0; 50];
        let result = detector.detect_keypoints(&img);
        assert!(matches!(result, Err(FastError::InvalidImageData { .. })));
    }

    #[test]
    fn test_uniform_image_detection() {
        let detector = FastDetector::new(create_test_config(), 120, 120).unwrap();
        let keypoints = detector.detect_keypoints(&vec![128; 120 * 120]).unwrap();
        assert!(keypoints.is_empty());
    }

    #[test]
    fn test_image_smaller_than_border_yields_nothing() {
        let detector = FastDetector::new(create_test_config(), 30, 30).unwrap();
        assert!(detector.get_scale_levels().is_empty());
        let keypoints = detector.detect_keypoints(&create_block_image(30, 30, 3)).unwrap();
        assert!(keypoints.is_empty());
    }

    #[test]
    fn test_textured_image_detection() {
        let detector = FastDetector::new(create_test_config(), 200, 200).unwrap();
        let keypoints = detector.detect_keypoints(&create_block_image(200, 200, 7)).unwrap();
        assert!(keypoints.len() > 50, "only {} keypoints", keypoints.len());
        assert!(keypoints.len() <= 500);
        for kp in &keypoints {
            assert!(kp.x >= 0.0 && kp.x < 200.0 && kp.y >= 0.0 && kp.y < 200.0);
            assert!(kp.angle.is_finite());
        }
    }

    #[test]
    fn test_feature_budget_respected() {
        let cfg = OrbConfig { n_features: 40, ..create_test_config() };
        let detector = FastDetector::new(cfg, 200, 200).unwrap();
        let keypoints = detector.detect_keypoints(&create_block_image(200, 200, 11)).unwrap();
        assert!(keypoints.len() <= 40);
    }

    #[test]
    fn test_detection_is_deterministic() {
        let detector = FastDetector::new(create_test_config(), 160, 120).unwrap();
        let img = create_block_image(160, 120, 5);
        let first = detector.detect_keypoints(&img).unwrap();
        for _ in 0..5 {
            assert_eq!(detector.detect_keypoints(&img).unwrap(), first);
        }
    }

    #[test]
    fn test_configuration_access() {
        let cfg = create_test_config();
        let detector = FastDetector::new(cfg.clone(), 64, 48).unwrap();
        assert_eq!(detector.config(), &cfg);
        assert_eq!(detector.dimensions(), (64, 48));
    }
}
