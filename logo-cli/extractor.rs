use crate::error::{ExtractError, ExtractResult};
use image::{DynamicImage, GrayImage, ImageReader};
use logo_brief::BriefGenerator;
use logo_core::{DescriptorSet, Keypoint, OrbConfig};
use logo_fast::FastDetector;
use std::path::Path;

/// Keypoints and their descriptors, index-aligned
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Features {
    pub keypoints: Vec<Keypoint>,
    pub descriptors: DescriptorSet,
}

/// ORB-style feature extractor: oriented FAST keypoints + rotated BRIEF
#[derive(Debug, Clone)]
pub struct FeatureExtractor {
    cfg: OrbConfig,
}

impl Default for FeatureExtractor {
    fn default() -> Self {
        Self {
            cfg: OrbConfig::default(),
        }
    }
}

impl FeatureExtractor {
    pub fn new(cfg: OrbConfig) -> ExtractResult<Self> {
        FastDetector::validate_config(&cfg)?;
        Ok(Self { cfg })
    }

    pub fn config(&self) -> &OrbConfig {
        &self.cfg
    }

    /// Detect keypoints and describe them in one step. Images with no room
    /// for a single pyramid level produce empty features.
    pub fn detect_and_describe(&self, gray: &GrayImage) -> ExtractResult<Features> {
        let (w, h) = gray.dimensions();
        if w == 0 || h == 0 {
            return Ok(Features::default());
        }

        let detector = FastDetector::new(self.cfg.clone(), w as usize, h as usize)?;
        let (pyramid, keypoints) = detector.detect_with_pyramid(gray.as_raw())?;

        // keypoints come grouped by octave, in pyramid order
        let mut descriptors = Vec::with_capacity(keypoints.len());
        for level in &pyramid {
            let level_kps: Vec<Keypoint> = keypoints
                .iter()
                .filter(|kp| kp.octave == level.scale.level)
                .copied()
                .collect();
            let brief = BriefGenerator::new(level.scale.width, level.scale.height)?
                .with_patch_size(self.cfg.patch_size)
                .with_scale(level.scale.scale);
            descriptors.extend(brief.generate_descriptors(&level.image, &level_kps)?);
        }

        Ok(Features { keypoints, descriptors })
    }

    pub fn extract_gray(&self, gray: &GrayImage) -> ExtractResult<DescriptorSet> {
        Ok(self.detect_and_describe(gray)?.descriptors)
    }

    /// Colour input is converted to 8-bit luma first
    pub fn extract_image(&self, img: &DynamicImage) -> ExtractResult<DescriptorSet> {
        self.extract_gray(&img.to_luma8())
    }

    pub fn extract_bytes(&self, bytes: &[u8]) -> ExtractResult<DescriptorSet> {
        let img = image::load_from_memory(bytes)?;
        self.extract_image(&img)
    }

    pub fn extract_path(&self, path: impl AsRef<Path>) -> ExtractResult<DescriptorSet> {
        self.extract_image(&load_image(path.as_ref())?)
    }
}

/// Open and decode an image file, sniffing the format from its content
pub fn load_image(path: &Path) -> ExtractResult<DynamicImage> {
    let io_err = |source| ExtractError::Io {
        path: path.to_path_buf(),
        source,
    };
    let reader = ImageReader::open(path).map_err(io_err)?;
    let reader = reader.with_guessed_format().map_err(io_err)?;
    Ok(reader.decode()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Luma, Rgb, RgbImage};

    fn blocks(width: u32, height: u32, seed: u32) -> GrayImage {
        let mut state = seed.max(1);
        let cols = width.div_ceil(8);
        let cells: Vec<u8> = (0..cols * height.div_ceil(8))
            .map(|_| {
                state ^= state << 13;
                state ^= state >> 17;
                state ^= state << 5;
                (state >> 24) as u8
            })
            .collect();
        GrayImage::from_fn(width, height, |x, y| Luma([cells[((y / 8) * cols + x / 8) as usize]]))
    }

    #[test]
    fn test_descriptor_per_keypoint() {
        let features = FeatureExtractor::default().detect_and_describe(&blocks(200, 160, 3)).unwrap();
        assert!(!features.keypoints.is_empty());
        assert_eq!(features.keypoints.len(), features.descriptors.len());
        assert!(features.keypoints.len() <= 500);
    }

    #[test]
    fn test_extraction_is_deterministic() {
        let extractor = FeatureExtractor::default();
        let img = blocks(180, 180, 9);
        let first = extractor.extract_gray(&img).unwrap();
        assert_eq!(extractor.extract_gray(&img).unwrap(), first);
    }

    #[test]
    fn test_flat_image_has_no_descriptors() {
        let img = GrayImage::from_pixel(200, 200, Luma([140]));
        assert!(FeatureExtractor::default().extract_gray(&img).unwrap().is_empty());
    }

    #[test]
    fn test_tiny_and_empty_images() {
        let extractor = FeatureExtractor::default();
        assert!(extractor.extract_gray(&GrayImage::new(0, 0)).unwrap().is_empty());
        assert!(extractor.extract_gray(&blocks(24, 24, 1)).unwrap().is_empty());
    }

    #[test]
    fn test_colour_input_is_grayscaled() {
        let gray = blocks(160, 160, 4);
        let rgb = RgbImage::from_fn(160, 160, |x, y| {
            let v = gray.get_pixel(x, y)[0];
            Rgb([v, v, v])
        });
        let extractor = FeatureExtractor::default();
        assert_eq!(
            extractor.extract_image(&DynamicImage::ImageRgb8(rgb)).unwrap(),
            extractor.extract_gray(&gray).unwrap()
        );
    }

    #[test]
    fn test_undecodable_bytes() {
        let result = FeatureExtractor::default().extract_bytes(b"definitely not an image");
        assert!(matches!(result, Err(ExtractError::Decode(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = FeatureExtractor::default().extract_path("/nonexistent/logo.png");
        assert!(matches!(result, Err(ExtractError::Io { .. })));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let cfg = OrbConfig { threshold: 0, ..OrbConfig::default() };
        assert!(matches!(FeatureExtractor::new(cfg), Err(ExtractError::Detector(_))));
    }
}
