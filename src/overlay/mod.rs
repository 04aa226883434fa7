//! Overlay pipeline orchestrating detection, fusion and centerline synthesis.
//!
//! Stages
//! - Detect: grayscale → blur → edges → Hough voting inside the ROI.
//! - Fuse: cluster polar detections into canonical path lines.
//! - Project: path lines → drawable segments.
//! - Synthesize: pair adjacent segments into centerlines.
//! - Draw: path segments, centerlines and the ROI rectangle onto the frame.
//!
//! Processing is frame-by-frame and synchronous; every intermediate product
//! is frame-local, so nothing carries over between frames.

mod params;
mod pipeline;
mod report;

pub use params::{OverlayParams, OverlayStyle};
pub use pipeline::PathOverlay;
pub use report::{OverlayReport, StageTiming, TimingBreakdown};
