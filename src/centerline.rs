//! Centerline synthesis between paired path segments.
//!
//! Segments are consumed two at a time in detection order (indices 0&1,
//! 2&3, …); a trailing unpaired segment is dropped. Each pair yields one
//! centerline segment. The construction branches on endpoint distances:
//!
//! - If the pair's same-side endpoints are farther apart than the cross
//!   endpoints, the segments diverge or cross; the centerline runs from the
//!   intersection of the two carrier lines to the midpoint of the cross
//!   endpoints.
//! - Otherwise the segments run in consistent orientation and the
//!   centerline joins the two same-side endpoint midpoints.
//!
//! A diverging pair whose carrier lines turn out parallel falls back to the
//! consistent-orientation construction, so every consumed pair produces a
//! centerline.

use crate::geometry::{dist, line_intersection, midpoint};
use crate::types::Segment;
use log::debug;

/// Synthesize one centerline per adjacent pair of segments.
///
/// Fewer than two input segments yield an empty result; output length is
/// `floor(N / 2)`.
pub fn synthesize_centerlines(segments: &[Segment]) -> Vec<Segment> {
    segments
        .chunks_exact(2)
        .map(|pair| centerline_for_pair(&pair[0], &pair[1]))
        .collect()
}

fn centerline_for_pair(first: &Segment, second: &Segment) -> Segment {
    let same_side = dist(first.p0, second.p0);
    let cross = dist(first.p0, second.p1);

    if same_side > cross {
        if let Some(anchor) = line_intersection(first, second) {
            return Segment::new(anchor, midpoint(first.p0, second.p1));
        }
        debug!("diverging pair has parallel carriers, using midpoint construction");
    }

    Segment::new(midpoint(first.p0, second.p0), midpoint(first.p1, second.p1))
}
