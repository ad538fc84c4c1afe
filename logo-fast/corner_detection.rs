use logo_core::{Image, Keypoint};
use crate::types::{CornerType, ScaleLevel, ScoredKeypoint};
use crate::utils::has_consecutive_bits;
use rayon::prelude::*;

/// Arc length of the FAST-9/16 segment test
pub const FAST_ARC: usize = 9;

/// Corner detection algorithms (FAST and Harris)
pub struct CornerDetector;

impl CornerDetector {
    /// FAST circle offsets for corner detection
    pub const FAST_OFFSETS: [(i32, i32); 16] = [
        (0, -3), (1, -3), (2, -2), (3, -1),
        (3, 0), (3, 1), (2, 2), (1, 3),
        (0, 3), (-1, 3), (-2, 2), (-3, 1),
        (-3, 0), (-3, -1), (-2, -2), (-1, -3),
    ];

    /// Detect FAST corners inside the `border` margin of one level, scored
    /// with the Harris response and reduced to 3x3 local maxima.
    pub fn detect_keypoints_at_scale(
        img: &Image,
        scale_level: &ScaleLevel,
        threshold: u8,
        border: usize,
    ) -> Vec<ScoredKeypoint> {
        let width = scale_level.width;
        let height = scale_level.height;
        let border = border.max(3);
        if width <= 2 * border || height <= 2 * border {
            return Vec::new();
        }

        let candidates: Vec<ScoredKeypoint> = (border..height - border)
            .into_par_iter()
            .flat_map_iter(|y| {
                let mut row_keypoints = Vec::new();
                for x in border..width - border {
                    if Self::classify(img, width, x, y, threshold) != CornerType::None {
                        let response = Self::compute_harris_response(img, width, height, x, y);
                        row_keypoints.push(ScoredKeypoint {
                            keypoint: Keypoint {
                                x: x as f32,
                                y: y as f32,
                                angle: 0.0,
                                octave: scale_level.level,
                                response,
                            },
                            response,
                        });
                    }
                }
                row_keypoints
            })
            .collect();

        Self::local_maxima(&candidates, width, height)
    }

    /// FAST-9 segment test on the 16-pixel Bresenham circle of radius 3
    pub(crate) fn classify(img: &Image, width: usize, x: usize, y: usize, threshold: u8) -> CornerType {
        let p = img[y * width + x] as i16;
        let t = threshold as i16;
        let at = |i: usize| {
            let (dx, dy) = Self::FAST_OFFSETS[i];
            let px = (x as i32 + dx) as usize;
            let py = (y as i32 + dy) as usize;
            img[py * width + px] as i16
        };

        // Any arc of 9 covers at least two of the four compass pixels
        let mut bright_compass = 0;
        let mut dark_compass = 0;
        for i in [0, 4, 8, 12] {
            let q = at(i);
            if q > p + t {
                bright_compass += 1;
            } else if q < p - t {
                dark_compass += 1;
            }
        }
        if bright_compass < 2 && dark_compass < 2 {
            return CornerType::None;
        }

        let mut bright: u16 = 0;
        let mut dark: u16 = 0;
        for i in 0..16 {
            let q = at(i);
            if q > p + t {
                bright |= 1 << i;
            } else if q < p - t {
                dark |= 1 << i;
            }
        }

        if has_consecutive_bits(bright, FAST_ARC) {
            CornerType::Bright
        } else if has_consecutive_bits(dark, FAST_ARC) {
            CornerType::Dark
        } else {
            CornerType::None
        }
    }

    /// Keep candidates that no 8-neighbour candidate beats. Equal scores are
    /// resolved in raster order so the result does not depend on scheduling.
    fn local_maxima(candidates: &[ScoredKeypoint], width: usize, height: usize) -> Vec<ScoredKeypoint> {
        let mut scores = vec![f32::NEG_INFINITY; width * height];
        for c in candidates {
            scores[c.keypoint.y as usize * width + c.keypoint.x as usize] = c.response;
        }

        candidates
            .iter()
            .filter(|c| {
                let x = c.keypoint.x as usize;
                let y = c.keypoint.y as usize;
                let own = c.response;
                for ny in y.saturating_sub(1)..=(y + 1).min(height - 1) {
                    for nx in x.saturating_sub(1)..=(x + 1).min(width - 1) {
                        if nx == x && ny == y {
                            continue;
                        }
                        let other = scores[ny * width + nx];
                        let earlier = (ny, nx) < (y, x);
                        if other > own || (other == own && earlier) {
                            return false;
                        }
                    }
                }
                true
            })
            .copied()
            .collect()
    }

    /// Harris corner response over a 5x5 window of Sobel gradients
    pub fn compute_harris_response(img: &Image, width: usize, height: usize, x: usize, y: usize) -> f32 {
        if x < 3 || y < 3 || x + 3 >= width || y + 3 >= height {
            return 0.0;
        }

        let mut ixx = 0.0f64;
        let mut ixy = 0.0f64;
        let mut iyy = 0.0f64;

        for dy in -2..=2i32 {
            for dx in -2..=2i32 {
                let nx = (x as i32 + dx) as usize;
                let ny = (y as i32 + dy) as usize;
                let (gx, gy) = Self::compute_gradients(img, width, nx, ny);

                ixx += (gx * gx) as f64;
                ixy += (gx * gy) as f64;
                iyy += (gy * gy) as f64;
            }
        }

        // det(M) - k * trace(M)^2
        let k = 0.04f64;
        let det = ixx * iyy - ixy * ixy;
        let trace = ixx + iyy;
        (det - k * trace * trace) as f32
    }

    /// Sobel gradients; callers keep (x, y) at least one pixel inside the image
    fn compute_gradients(img: &Image, width: usize, x: usize, y: usize) -> (f32, f32) {
        let px = |xx: usize, yy: usize| img[yy * width + xx] as f32;

        let gx = px(x + 1, y - 1) + 2.0 * px(x + 1, y) + px(x + 1, y + 1)
            - px(x - 1, y - 1) - 2.0 * px(x - 1, y) - px(x - 1, y + 1);
        let gy = px(x - 1, y + 1) + 2.0 * px(x, y + 1) + px(x + 1, y + 1)
            - px(x - 1, y - 1) - 2.0 * px(x, y - 1) - px(x + 1, y - 1);

        (gx / 8.0, gy / 8.0)
    }
}
