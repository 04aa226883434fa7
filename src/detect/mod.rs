//! Line detection front-end.
//!
//! Stages, in order:
//! - [`blur`] – separable Gaussian smoothing of the grayscale plane.
//! - [`edges`] – Sobel gradients, Canny-style non-maximum suppression, and
//!   hysteresis linking into a sparse edge-point set.
//! - [`hough`] – polar-space voting over the edge points inside the region
//!   of interest, emitting `(rho, theta)` line candidates.
//!
//! The front-end is deliberately simple: it feeds the fusion stage, which
//! de-duplicates whatever redundancy the voting produces.

pub mod blur;
pub mod edges;
pub mod hough;

use crate::frame::GrayF32;
use crate::types::{PolarLine, Rect};
use serde::{Deserialize, Serialize};

/// Knobs for the detection front-end. Defaults follow the reference capture
/// settings (Canny 50/200, Hough accumulator threshold 200).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DetectParams {
    /// Apply the Gaussian pre-blur before edge detection.
    pub blur: bool,
    /// Weak-edge gradient magnitude threshold for hysteresis linking.
    pub low_threshold: f32,
    /// Strong-edge gradient magnitude threshold seeding hysteresis.
    pub high_threshold: f32,
    /// Minimum accumulator votes for a Hough cell to become a candidate.
    pub vote_threshold: u32,
}

impl Default for DetectParams {
    fn default() -> Self {
        Self {
            blur: true,
            low_threshold: 50.0,
            high_threshold: 200.0,
            vote_threshold: 200,
        }
    }
}

/// Run the full front-end over a grayscale plane, restricted to `roi`.
pub fn detect_lines(gray: &GrayF32, roi: &Rect, params: &DetectParams) -> Vec<PolarLine> {
    let smoothed;
    let plane = if params.blur {
        smoothed = blur::gaussian_blur(gray);
        &smoothed
    } else {
        gray
    };
    let edge_points = edges::detect_edges(plane, params.low_threshold, params.high_threshold);
    hough::hough_lines(
        &edge_points,
        gray.w as u32,
        gray.h as u32,
        roi,
        params.vote_threshold,
    )
}
