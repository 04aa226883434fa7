//! Hough transform over sparse edge points.
//!
//! Votes at 1-pixel rho and 1-degree theta resolution. Only edge points
//! inside the region of interest participate, which confines detections to
//! the ROI without touching the rest of the frame. A cell becomes a
//! candidate when it reaches the vote threshold and is a local maximum in
//! its 3×3 accumulator neighbourhood; candidates are emitted strongest
//! first.

use super::edges::EdgePoint;
use crate::types::{PolarLine, Rect};
use log::debug;

/// Theta bins covering [0, π) at 1-degree resolution.
pub const THETA_BINS: usize = 180;

struct Peak {
    votes: u32,
    rho_idx: usize,
    theta_idx: usize,
}

/// Detect polar lines among `edges` restricted to `roi`.
///
/// `frame_w`/`frame_h` bound the accumulator's rho range (the frame
/// diagonal). Returns candidates sorted by descending votes; ties keep
/// accumulator scan order.
pub fn hough_lines(
    edges: &[EdgePoint],
    frame_w: u32,
    frame_h: u32,
    roi: &Rect,
    vote_threshold: u32,
) -> Vec<PolarLine> {
    if frame_w == 0 || frame_h == 0 || vote_threshold == 0 {
        return Vec::new();
    }

    let diag = (frame_w as f32).hypot(frame_h as f32).ceil() as i32;
    let n_rho = (2 * diag + 1) as usize;

    let mut cos_tab = [0.0f32; THETA_BINS];
    let mut sin_tab = [0.0f32; THETA_BINS];
    for (t, (c, s)) in cos_tab.iter_mut().zip(sin_tab.iter_mut()).enumerate() {
        let theta = (t as f32).to_radians();
        *c = theta.cos();
        *s = theta.sin();
    }

    let mut acc = vec![0u32; THETA_BINS * n_rho];
    let mut voted = 0usize;
    for p in edges {
        if !roi.contains(p.x, p.y) {
            continue;
        }
        voted += 1;
        let x = p.x as f32;
        let y = p.y as f32;
        for t in 0..THETA_BINS {
            let rho = x * cos_tab[t] + y * sin_tab[t];
            let idx = rho.round() as i32 + diag;
            acc[t * n_rho + idx as usize] += 1;
        }
    }

    let mut peaks: Vec<Peak> = Vec::new();
    for t in 0..THETA_BINS {
        for r in 0..n_rho {
            let votes = acc[t * n_rho + r];
            if votes < vote_threshold {
                continue;
            }
            if is_local_maximum(&acc, n_rho, t, r, votes) {
                peaks.push(Peak {
                    votes,
                    rho_idx: r,
                    theta_idx: t,
                });
            }
        }
    }
    peaks.sort_by(|a, b| b.votes.cmp(&a.votes));

    debug!(
        "hough: {} voting points, {} candidates over threshold {}",
        voted,
        peaks.len(),
        vote_threshold
    );

    peaks
        .into_iter()
        .map(|p| PolarLine {
            rho: (p.rho_idx as i32 - diag) as f32,
            theta: (p.theta_idx as f32).to_radians(),
        })
        .collect()
}

/// A plateau of equal cells keeps only its first cell in scan order: the
/// candidate must beat every later neighbour strictly and every earlier
/// neighbour at least.
fn is_local_maximum(acc: &[u32], n_rho: usize, t: usize, r: usize, votes: u32) -> bool {
    for dt in -1isize..=1 {
        for dr in -1isize..=1 {
            if dt == 0 && dr == 0 {
                continue;
            }
            let nt = t as isize + dt;
            let nr = r as isize + dr;
            if nt < 0 || nr < 0 || nt >= THETA_BINS as isize || nr >= n_rho as isize {
                continue;
            }
            let neighbor = acc[nt as usize * n_rho + nr as usize];
            let later = (dt, dr) > (0, 0);
            if (later && neighbor >= votes) || (!later && neighbor > votes) {
                return false;
            }
        }
    }
    true
}
