use super::params::{OverlayParams, OverlayStyle};
use super::report::{OverlayReport, TimingBreakdown};
use crate::centerline::synthesize_centerlines;
use crate::detect::{self, DetectParams};
use crate::draw;
use crate::frame::GrayF32;
use crate::fuse::fuse_lines;
use crate::project::project_segments;
use crate::types::{PolarLine, Rect};
use image::RgbImage;
use log::debug;
use std::time::Instant;

/// Overlay pipeline: detection, fusion, projection, centerline synthesis
/// and drawing, one frame at a time.
///
/// ```no_run
/// use image::RgbImage;
/// use path_overlay::{OverlayParams, PathOverlay};
///
/// let overlay = PathOverlay::new(OverlayParams::default());
/// let mut frame = RgbImage::new(1280, 720);
/// let report = overlay.process(&mut frame);
/// println!("paths={}", report.path_segments.len());
/// ```
pub struct PathOverlay {
    params: OverlayParams,
}

impl PathOverlay {
    /// Create a pipeline with the supplied parameters.
    pub fn new(params: OverlayParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &OverlayParams {
        &self.params
    }

    /// Update the region of interest.
    pub fn set_roi(&mut self, roi: Rect) {
        self.params.roi = roi;
    }

    /// Update the detection front-end thresholds.
    pub fn set_detect_params(&mut self, params: DetectParams) {
        self.params.detect = params;
    }

    /// Update overlay colors and stroke thickness.
    pub fn set_style(&mut self, style: OverlayStyle) {
        self.params.style = style;
    }

    /// Run the full pipeline on one frame, drawing the overlay in place.
    pub fn process(&self, frame: &mut RgbImage) -> OverlayReport {
        let total_start = Instant::now();
        let mut timing = TimingBreakdown::default();
        let roi = self.params.roi.clamped(frame.width(), frame.height());

        let detect_start = Instant::now();
        let gray = GrayF32::from_rgb(frame);
        let raw = detect::detect_lines(&gray, &roi, &self.params.detect);
        timing.record("detect", elapsed_ms(detect_start));

        self.overlay_tail(frame, raw, roi, timing, total_start)
    }

    /// Run the geometric tail of the pipeline on externally supplied
    /// detections (already clipped to the ROI by the caller's detector).
    pub fn annotate_detections(&self, frame: &mut RgbImage, raw: &[PolarLine]) -> OverlayReport {
        let total_start = Instant::now();
        let timing = TimingBreakdown::default();
        let roi = self.params.roi.clamped(frame.width(), frame.height());
        self.overlay_tail(frame, raw.to_vec(), roi, timing, total_start)
    }

    fn overlay_tail(
        &self,
        frame: &mut RgbImage,
        raw: Vec<PolarLine>,
        roi: Rect,
        mut timing: TimingBreakdown,
        total_start: Instant,
    ) -> OverlayReport {
        let fuse_start = Instant::now();
        let path_lines = fuse_lines(&raw);
        let path_segments = project_segments(&path_lines);
        timing.record("fuse", elapsed_ms(fuse_start));

        let synth_start = Instant::now();
        let centerlines = synthesize_centerlines(&path_segments);
        timing.record("synthesize", elapsed_ms(synth_start));

        let draw_start = Instant::now();
        let style = &self.params.style;
        for seg in &path_segments {
            draw::draw_segment(frame, seg, style.path_color, style.thickness);
        }
        for seg in &centerlines {
            draw::draw_segment(frame, seg, style.centerline_color, style.thickness);
        }
        draw::draw_roi(frame, &roi, style.roi_color, style.thickness);
        timing.record("draw", elapsed_ms(draw_start));

        timing.total_ms = elapsed_ms(total_start);
        debug!(
            "frame: {} raw -> {} paths -> {} centerlines in {:.3} ms",
            raw.len(),
            path_segments.len(),
            centerlines.len(),
            timing.total_ms
        );

        OverlayReport {
            raw_lines: raw,
            path_lines,
            path_segments,
            centerlines,
            timing,
        }
    }
}

fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}
