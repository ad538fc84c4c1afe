use logo_core::{Image, Keypoint};

/// Keypoint with corner response score for NMS, in level coordinates
#[derive(Debug, Clone, Copy)]
pub struct ScoredKeypoint {
    pub keypoint: Keypoint,
    pub response: f32,
}

/// Scale information for pyramid levels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleLevel {
    pub level: usize,
    pub scale: f32,
    pub width: usize,
    pub height: usize,
}

/// One downsampled image of the pyramid
#[derive(Debug, Clone)]
pub struct PyramidLevel {
    pub scale: ScaleLevel,
    pub image: Image,
}

/// Segment-test outcome for a single pixel
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum CornerType {
    Bright,
    Dark,
    None,
}
