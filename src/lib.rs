#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod centerline;
pub mod config;
pub mod overlay;
pub mod types;

// Pipeline internals – still public for tools and tests.
pub mod detect;
pub mod draw;
pub mod frame;
pub mod fuse;
pub mod geometry;
pub mod project;

// --- High-level re-exports -------------------------------------------------

// Main entry points: pipeline object + per-frame report.
pub use crate::overlay::{OverlayParams, OverlayReport, OverlayStyle, PathOverlay};

// Geometric core, usable without the detection front-end.
pub use crate::centerline::synthesize_centerlines;
pub use crate::fuse::{fuse_lines, PathLine};
pub use crate::project::{fuse_and_project, project_segments};
pub use crate::types::{Point, PolarLine, Rect, Segment};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use image::RgbImage;
/// use path_overlay::prelude::*;
///
/// # fn main() {
/// let overlay = PathOverlay::new(OverlayParams::default());
/// let mut frame = RgbImage::new(640, 480);
/// let report = overlay.process(&mut frame);
/// println!(
///     "paths={} latency_ms={:.3}",
///     report.path_segments.len(),
///     report.timing.total_ms
/// );
/// # }
/// ```
pub mod prelude {
    pub use crate::types::{Point, PolarLine, Rect, Segment};
    pub use crate::{OverlayParams, OverlayReport, PathOverlay};
}
