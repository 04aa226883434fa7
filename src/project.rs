//! Polar-to-Cartesian projection of fused path lines.

use crate::fuse::{fuse_lines, PathLine};
use crate::types::{Point, PolarLine, Segment};

/// Half-length of a projected segment in pixels. Chosen to exceed any
/// expected frame dimension so the segment always crosses the visible frame.
pub const SEGMENT_EXTENT: f32 = 1000.0;

/// Project a path line to a drawable segment.
///
/// The foot point of the line is `(cos θ · rho, sin θ · rho)`; the segment
/// extends [`SEGMENT_EXTENT`] units along the tangent in both directions and
/// is truncated to integer pixel coordinates, so the endpoints are symmetric
/// about the foot point.
pub fn project_segment(path: &PathLine) -> Segment {
    let a = path.theta.cos();
    let b = path.theta.sin();
    let x0 = a * path.rho;
    let y0 = b * path.rho;
    Segment {
        p0: Point {
            x: (x0 - SEGMENT_EXTENT * b) as i32,
            y: (y0 + SEGMENT_EXTENT * a) as i32,
        },
        p1: Point {
            x: (x0 + SEGMENT_EXTENT * b) as i32,
            y: (y0 - SEGMENT_EXTENT * a) as i32,
        },
    }
}

/// Project every path line, preserving detection order.
pub fn project_segments(paths: &[PathLine]) -> Vec<Segment> {
    paths.iter().map(project_segment).collect()
}

/// Fuse raw detections and project the resulting path lines in one step.
pub fn fuse_and_project(raw: &[PolarLine]) -> Vec<Segment> {
    project_segments(&fuse_lines(raw))
}
