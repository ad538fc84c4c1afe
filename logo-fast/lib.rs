//! Multi-scale oriented FAST keypoint detection.
//!
//! Corners are found with the FAST-9/16 segment test on every level of a
//! bilinear image pyramid, ranked by Harris response, thinned to 3x3 local
//! maxima and capped by a per-level budget. Each surviving corner gets an
//! intensity-centroid orientation and is reported in level-0 coordinates.

pub mod corner_detection;
pub mod detector;
pub mod error;
pub mod pyramid;
pub mod refinement;
pub mod types;
pub mod utils;

pub use detector::FastDetector;
pub use error::{FastError, FastResult};
pub use types::{PyramidLevel, ScaleLevel, ScoredKeypoint};
