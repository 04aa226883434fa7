use crate::fuse::PathLine;
use crate::types::{PolarLine, Segment};
use serde::Serialize;

/// Timing entry for a single pipeline stage.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StageTiming {
    pub label: String,
    pub elapsed_ms: f64,
}

/// Per-frame timing trace.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingBreakdown {
    pub total_ms: f64,
    pub stages: Vec<StageTiming>,
}

impl TimingBreakdown {
    pub fn record(&mut self, label: impl Into<String>, elapsed_ms: f64) {
        self.stages.push(StageTiming {
            label: label.into(),
            elapsed_ms,
        });
    }
}

/// Everything the pipeline produced for one frame.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverlayReport {
    /// Raw polar detections that entered fusion.
    pub raw_lines: Vec<PolarLine>,
    /// Canonical path lines after fusion.
    pub path_lines: Vec<PathLine>,
    /// Projected path segments, in detection order.
    pub path_segments: Vec<Segment>,
    /// One centerline per consumed pair of path segments.
    pub centerlines: Vec<Segment>,
    pub timing: TimingBreakdown,
}
