//! Rotated BRIEF descriptors.

pub mod pattern;

use image::GrayImage;
use imageproc::filter::gaussian_blur_f32;
use logo_core::{Descriptor, Image, Keypoint};
use pattern::{PATTERN, PATTERN_PATCH_SIZE};
use rayon::prelude::*;
use thiserror::Error;

const DESCRIPTOR_SIZE: usize = 32;

/// Smoothing applied before the intensity tests
pub const SMOOTHING_SIGMA: f32 = 0.6;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum BriefError {
    #[error("Invalid image size: {width}x{height}")]
    InvalidImageSize { width: usize, height: usize },
    #[error("Image data length mismatch: expected {expected_len}, got {actual_len}")]
    InvalidImageData { expected_len: usize, actual_len: usize },
}

pub type BriefResult<T> = Result<T, BriefError>;

/// Computes 256-bit rBRIEF descriptors on one pyramid level
pub struct BriefGenerator {
    w: usize,
    h: usize,
    patch_size: usize,
    scale: f32,
}

impl BriefGenerator {
    pub fn new(width: usize, height: usize) -> BriefResult<Self> {
        if width == 0 || height == 0 {
            return Err(BriefError::InvalidImageSize { width, height });
        }
        Ok(Self {
            w: width,
            h: height,
            patch_size: PATTERN_PATCH_SIZE,
            scale: 1.0,
        })
    }

    /// Patch the sampling pattern is stretched to
    pub fn with_patch_size(mut self, patch_size: usize) -> Self {
        self.patch_size = patch_size;
        self
    }

    /// Level scale; keypoint coordinates are divided by it before sampling
    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    /// One descriptor per keypoint, in keypoint order
    pub fn generate_descriptors(&self, img: &Image, kps: &[Keypoint]) -> BriefResult<Vec<Descriptor>> {
        if kps.is_empty() {
            return Ok(Vec::new());
        }

        let smoothed = self.smooth(img)?;
        let stretch = self.patch_size as f32 / PATTERN_PATCH_SIZE as f32;

        let descriptors = kps
            .par_iter()
            .map(|kp| {
                let (s, c) = kp.angle.sin_cos();
                let (cx, cy) = (kp.x / self.scale, kp.y / self.scale);
                let mut d = [0u8; DESCRIPTOR_SIZE];

                for (i, &(x1, y1, x2, y2)) in PATTERN.iter().enumerate() {
                    let (dx1, dy1) = (x1 as f32 * stretch, y1 as f32 * stretch);
                    let (dx2, dy2) = (x2 as f32 * stretch, y2 as f32 * stretch);

                    let (rx1, ry1) = (cx + c * dx1 - s * dy1, cy + s * dx1 + c * dy1);
                    let (rx2, ry2) = (cx + c * dx2 - s * dy2, cy + s * dx2 + c * dy2);

                    let val1 = self.bilinear_sample(&smoothed, rx1, ry1);
                    let val2 = self.bilinear_sample(&smoothed, rx2, ry2);

                    let bit = (val1 < val2) as u8;
                    d[i / 8] |= bit << (i % 8);
                }
                d
            })
            .collect();

        Ok(descriptors)
    }

    fn smooth(&self, img: &Image) -> BriefResult<Image> {
        let gray = GrayImage::from_raw(self.w as u32, self.h as u32, img.clone()).ok_or(
            BriefError::InvalidImageData {
                expected_len: self.w * self.h,
                actual_len: img.len(),
            },
        )?;
        Ok(gaussian_blur_f32(&gray, SMOOTHING_SIGMA).into_raw())
    }

    /// Bilinear interpolation for subpixel sampling
    fn bilinear_sample(&self, img: &[u8], x: f32, y: f32) -> f32 {
        let x0 = x.floor();
        let y0 = y.floor();
        let x1 = x0 + 1.0;
        let y1 = y0 + 1.0;

        if x0 < 0.0 || y0 < 0.0 || x1 >= self.w as f32 || y1 >= self.h as f32 {
            // Clamp to image bounds for boundary samples
            let cx = x.round().clamp(0.0, (self.w - 1) as f32) as usize;
            let cy = y.round().clamp(0.0, (self.h - 1) as f32) as usize;
            return img[cy * self.w + cx] as f32;
        }

        let dx = x - x0;
        let dy = y - y0;

        let x0_idx = x0 as usize;
        let y0_idx = y0 as usize;
        let x1_idx = x1 as usize;
        let y1_idx = y1 as usize;

        let p00 = img[y0_idx * self.w + x0_idx] as f32;
        let p10 = img[y0_idx * self.w + x1_idx] as f32;
        let p01 = img[y1_idx * self.w + x0_idx] as f32;
        let p11 = img[y1_idx * self.w + x1_idx] as f32;

        let top = p00 * (1.0 - dx) + p10 * dx;
        let bottom = p01 * (1.0 - dx) + p11 * dx;

        top * (1.0 - dy) + bottom * dy
    }
}
