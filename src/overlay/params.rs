//! Parameter types configuring the overlay pipeline.

use crate::detect::DetectParams;
use crate::types::Rect;
use serde::{Deserialize, Serialize};

/// Pipeline-wide parameters.
///
/// The fusion and projection constants are fixed policy
/// ([`crate::fuse::RHO_TOL`], [`crate::fuse::THETA_TOL`],
/// [`crate::project::SEGMENT_EXTENT`]) and deliberately not configurable
/// here.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OverlayParams {
    /// Region of interest; detection is restricted to it. Clamped to the
    /// frame dimensions before use.
    pub roi: Rect,
    /// Detection front-end thresholds.
    pub detect: DetectParams,
    /// Overlay colors and stroke thickness.
    pub style: OverlayStyle,
}

impl Default for OverlayParams {
    fn default() -> Self {
        Self {
            roi: Rect::new(300, 150, 600, 400),
            detect: DetectParams::default(),
            style: OverlayStyle::default(),
        }
    }
}

/// Colors (RGB triples) and stroke thickness for the drawn overlay.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OverlayStyle {
    pub path_color: [u8; 3],
    pub centerline_color: [u8; 3],
    pub roi_color: [u8; 3],
    pub thickness: u32,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            path_color: [0, 255, 0],
            centerline_color: [255, 0, 0],
            roi_color: [255, 0, 0],
            thickness: 2,
        }
    }
}
