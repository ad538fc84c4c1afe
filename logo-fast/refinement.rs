use logo_core::Image;
use crate::types::ScoredKeypoint;
use std::cmp::Ordering;

/// Orientation and keypoint budget handling
pub struct KeypointRefinement;

impl KeypointRefinement {
    /// Orientation by intensity centroid over the circular patch of radius
    /// `patch_size / 2` centred on (x, y). Samples outside the image are clamped.
    pub fn compute_orientation(img: &Image, width: usize, height: usize, x: usize, y: usize, patch_size: usize) -> f32 {
        let half = (patch_size / 2) as i32;
        let (cx, cy) = (x as i32, y as i32);
        let mut m10 = 0i64;
        let mut m01 = 0i64;

        for dy in -half..=half {
            let extent = (((half * half - dy * dy) as f32).sqrt()) as i32;
            let yy = (cy + dy).clamp(0, height as i32 - 1) as usize;
            for dx in -extent..=extent {
                let xx = (cx + dx).clamp(0, width as i32 - 1) as usize;
                let val = img[yy * width + xx] as i64;
                m10 += dx as i64 * val;
                m01 += dy as i64 * val;
            }
        }

        if m10 == 0 && m01 == 0 {
            0.0
        } else {
            (m01 as f32).atan2(m10 as f32)
        }
    }

    /// Strongest `limit` keypoints; ties fall back to raster order
    pub fn retain_best(mut keypoints: Vec<ScoredKeypoint>, limit: usize) -> Vec<ScoredKeypoint> {
        keypoints.sort_by(|a, b| {
            b.response
                .partial_cmp(&a.response)
                .unwrap_or(Ordering::Equal)
                .then(a.keypoint.y.total_cmp(&b.keypoint.y))
                .then(a.keypoint.x.total_cmp(&b.keypoint.x))
        });
        keypoints.truncate(limit);
        keypoints
    }

    /// Split `n_features` over `n_levels` levels, each level getting
    /// `1 / scale_factor` of the previous one; the last level takes the rest.
    pub fn features_per_level(n_features: usize, scale_factor: f32, n_levels: usize) -> Vec<usize> {
        if n_levels == 0 {
            return Vec::new();
        }

        let factor = 1.0 / scale_factor as f64;
        let mut desired = n_features as f64 * (1.0 - factor) / (1.0 - factor.powi(n_levels as i32));
        let mut budget = Vec::with_capacity(n_levels);
        let mut assigned = 0usize;

        for _ in 0..n_levels - 1 {
            let n = (desired.round() as usize).min(n_features - assigned);
            budget.push(n);
            assigned += n;
            desired *= factor;
        }
        budget.push(n_features - assigned);

        budget
    }
}
