//! Polar line fusion.
//!
//! Clusters noisy per-frame Hough detections into a small set of canonical
//! path lines. The pass is greedy and order-preserving: each incoming
//! detection is folded into the *first* existing path line within the rho
//! and theta tolerances, otherwise it seeds a new one. Folding replaces the
//! stored values with the pairwise mean of the stored and incoming values,
//! so the accumulated estimate is an incremental average in arrival order.
//!
//! Complexity is O(n·k) for n detections and k clusters; k is the handful of
//! dominant edges per frame, so a nearest-cluster index is not worth it.
//! Path lines are frame-local and discarded after projection.

use crate::types::PolarLine;
use log::debug;
use serde::Serialize;

/// Maximum |Δrho| (pixels) for a detection to join an existing path line.
pub const RHO_TOL: f32 = 20.0;
/// Maximum |Δtheta| (radians) for a detection to join an existing path line.
pub const THETA_TOL: f32 = std::f32::consts::PI / 36.0;

/// Accumulator for one cluster of matched detections.
///
/// `support` counts the raw lines folded in; it is diagnostic only and does
/// not enter the averaging rule.
#[derive(Clone, Debug, Serialize)]
pub struct PathLine {
    pub rho: f32,
    pub theta: f32,
    pub support: u32,
}

impl PathLine {
    fn seed(line: &PolarLine) -> Self {
        Self {
            rho: line.rho,
            theta: line.theta,
            support: 1,
        }
    }

    #[inline]
    fn matches(&self, line: &PolarLine) -> bool {
        (line.rho - self.rho).abs() < RHO_TOL && (line.theta - self.theta).abs() < THETA_TOL
    }

    fn absorb(&mut self, line: &PolarLine) {
        self.rho = 0.5 * (self.rho + line.rho);
        self.theta = 0.5 * (self.theta + line.theta);
        self.support += 1;
    }
}

/// Fuse raw polar detections into canonical path lines.
///
/// Detections are scanned in order; each one merges into the first path line
/// it matches (first match wins, not best match) or appends a new path line.
/// Empty input yields empty output.
pub fn fuse_lines(raw: &[PolarLine]) -> Vec<PathLine> {
    let mut paths: Vec<PathLine> = Vec::new();
    for line in raw {
        match paths.iter_mut().find(|p| p.matches(line)) {
            Some(path) => path.absorb(line),
            None => paths.push(PathLine::seed(line)),
        }
    }
    debug!("fused {} detections into {} path lines", raw.len(), paths.len());
    paths
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(fuse_lines(&[]).is_empty());
    }

    #[test]
    fn close_pair_merges_distant_line_stays_separate() {
        let raw = [
            PolarLine { rho: 100.0, theta: 0.0 },
            PolarLine { rho: 105.0, theta: 0.02 },
            PolarLine { rho: 100.0, theta: 1.57 },
        ];
        let paths = fuse_lines(&raw);
        assert_eq!(paths.len(), 2, "expected two clusters, got {paths:?}");

        assert!(approx_eq(paths[0].rho, 102.5));
        assert!(approx_eq(paths[0].theta, 0.01));
        assert_eq!(paths[0].support, 2);

        assert!(approx_eq(paths[1].rho, 100.0));
        assert!(approx_eq(paths[1].theta, 1.57));
        assert_eq!(paths[1].support, 1);
    }

    #[test]
    fn rho_at_tolerance_does_not_merge() {
        let raw = [
            PolarLine { rho: 0.0, theta: 0.0 },
            PolarLine { rho: RHO_TOL, theta: 0.0 },
        ];
        assert_eq!(fuse_lines(&raw).len(), 2);
    }

    #[test]
    fn theta_at_tolerance_does_not_merge() {
        let raw = [
            PolarLine { rho: 0.0, theta: 0.0 },
            PolarLine { rho: 0.0, theta: THETA_TOL },
        ];
        assert_eq!(fuse_lines(&raw).len(), 2);
    }

    #[test]
    fn averaging_is_pairwise_in_arrival_order() {
        let raw = [
            PolarLine { rho: 0.0, theta: 0.0 },
            PolarLine { rho: 10.0, theta: 0.0 },
            PolarLine { rho: 12.0, theta: 0.0 },
        ];
        let paths = fuse_lines(&raw);
        assert_eq!(paths.len(), 1);
        // ((0 + 10) / 2 + 12) / 2, not (0 + 10 + 12) / 3.
        assert!(approx_eq(paths[0].rho, 8.5));
        assert_eq!(paths[0].support, 3);
    }

    #[test]
    fn output_stays_within_input_bounds() {
        let raw = [
            PolarLine { rho: 90.0, theta: 0.10 },
            PolarLine { rho: 104.0, theta: 0.06 },
            PolarLine { rho: 97.0, theta: 0.12 },
        ];
        let paths = fuse_lines(&raw);
        assert_eq!(paths.len(), 1);
        let p = &paths[0];
        assert!(p.rho >= 90.0 && p.rho <= 104.0, "rho out of hull: {}", p.rho);
        assert!(
            p.theta >= 0.06 && p.theta <= 0.12,
            "theta out of hull: {}",
            p.theta
        );
    }

    #[test]
    fn first_match_wins_over_closer_cluster() {
        // The third line is closer to the second cluster, but the first
        // cluster already matches and the scan stops there.
        let raw = [
            PolarLine { rho: 0.0, theta: 0.0 },
            PolarLine { rho: 30.0, theta: 0.0 },
            PolarLine { rho: 18.0, theta: 0.0 },
        ];
        let paths = fuse_lines(&raw);
        assert_eq!(paths.len(), 2);
        assert!(approx_eq(paths[0].rho, 9.0));
        assert!(approx_eq(paths[1].rho, 30.0));
    }
}
