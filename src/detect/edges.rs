//! Sobel gradients with non-maximum suppression and hysteresis linking.
//!
//! A simplified Canny detector:
//! - 3×3 Sobel convolution with border clamping produces per-pixel `gx`,
//!   `gy` and the L2 magnitude.
//! - Non-maximum suppression thins the response: a pixel survives only if
//!   its magnitude beats its two neighbors along the quantized gradient
//!   direction (4 bins at 0°, 45°, 90°, 135°). Ties break toward the first
//!   neighbor so a symmetric ridge keeps exactly one pixel.
//! - Double-threshold hysteresis: pixels at or above `high_thresh` seed a
//!   stack-based growth that links in 8-connected neighbors at or above
//!   `low_thresh`.
//!
//! The outermost 1-pixel frame is ignored by NMS to keep neighbor lookups
//! in bounds. Magnitudes are on the raw Sobel scale of a 0..255 plane, so
//! the conventional 50/200 thresholds apply directly.

use crate::frame::GrayF32;
use log::debug;

type Kernel3 = [[f32; 3]; 3];

const SOBEL_KERNEL_X: Kernel3 = [[-1.0, 0.0, 1.0], [-2.0, 0.0, 2.0], [-1.0, 0.0, 1.0]];
const SOBEL_KERNEL_Y: Kernel3 = [[-1.0, -2.0, -1.0], [0.0, 0.0, 0.0], [1.0, 2.0, 1.0]];

const TAN_22_5_DEG: f32 = 0.41421356237;

const NEIGH_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Per-pixel gradient buffers.
#[derive(Clone, Debug)]
pub struct Grad {
    pub gx: GrayF32,
    pub gy: GrayF32,
    pub mag: GrayF32,
}

/// Sparse edge sample surviving suppression and linking.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EdgePoint {
    pub x: u32,
    pub y: u32,
}

/// Compute Sobel gradients on a single-channel float plane.
pub fn sobel_gradients(l: &GrayF32) -> Grad {
    let w = l.w;
    let h = l.h;
    let mut gx = GrayF32::new(w, h);
    let mut gy = GrayF32::new(w, h);
    let mut mag = GrayF32::new(w, h);

    if w == 0 || h == 0 {
        return Grad { gx, gy, mag };
    }

    for y in 0..h {
        let y_idx = [y.saturating_sub(1), y, (y + 1).min(h - 1)];
        let rows = [l.row(y_idx[0]), l.row(y_idx[1]), l.row(y_idx[2])];
        let out_gx = gx.row_mut(y);
        let out_gy = gy.row_mut(y);
        let out_mag = mag.row_mut(y);
        for x in 0..w {
            let x_idx = [x.saturating_sub(1), x, (x + 1).min(w - 1)];

            let mut sum_x = 0.0;
            let mut sum_y = 0.0;
            for (ky, row) in rows.iter().enumerate() {
                let kx_taps = &SOBEL_KERNEL_X[ky];
                let ky_taps = &SOBEL_KERNEL_Y[ky];
                sum_x += row[x_idx[0]] * kx_taps[0]
                    + row[x_idx[1]] * kx_taps[1]
                    + row[x_idx[2]] * kx_taps[2];
                sum_y += row[x_idx[0]] * ky_taps[0]
                    + row[x_idx[1]] * ky_taps[1]
                    + row[x_idx[2]] * ky_taps[2];
            }

            out_gx[x] = sum_x;
            out_gy[x] = sum_y;
            out_mag[x] = (sum_x * sum_x + sum_y * sum_y).sqrt();
        }
    }

    Grad { gx, gy, mag }
}

const MASK_WEAK: u8 = 1;
const MASK_STRONG: u8 = 2;

/// Detect edges: Sobel → NMS → double-threshold hysteresis.
pub fn detect_edges(l: &GrayF32, low_thresh: f32, high_thresh: f32) -> Vec<EdgePoint> {
    let grad = sobel_gradients(l);
    let mask = suppress_non_maxima(&grad, low_thresh, high_thresh);
    let points = link_hysteresis(&mask, l.w, l.h);
    debug!(
        "edge detection kept {} points (low={low_thresh}, high={high_thresh})",
        points.len()
    );
    points
}

fn suppress_non_maxima(grad: &Grad, low_thresh: f32, high_thresh: f32) -> Vec<u8> {
    let w = grad.gx.w;
    let h = grad.gx.h;
    let mut mask = vec![0u8; w * h];
    if w < 3 || h < 3 {
        return mask;
    }

    for y in 1..h - 1 {
        let mag_prev = grad.mag.row(y - 1);
        let mag_row = grad.mag.row(y);
        let mag_next = grad.mag.row(y + 1);
        let gx_row = grad.gx.row(y);
        let gy_row = grad.gy.row(y);

        for x in 1..w - 1 {
            let mag = mag_row[x];
            if mag < low_thresh {
                continue;
            }

            let gx = gx_row[x];
            let gy = gy_row[x];
            let abs_gx = gx.abs();
            let abs_gy = gy.abs();
            let same_sign = (gx >= 0.0 && gy >= 0.0) || (gx <= 0.0 && gy <= 0.0);

            let (neighbor1, neighbor2) = if abs_gx >= abs_gy {
                if abs_gy <= abs_gx * TAN_22_5_DEG {
                    (mag_row[x - 1], mag_row[x + 1])
                } else if same_sign {
                    (mag_prev[x + 1], mag_next[x - 1])
                } else {
                    (mag_prev[x - 1], mag_next[x + 1])
                }
            } else if abs_gx <= abs_gy * TAN_22_5_DEG {
                (mag_prev[x], mag_next[x])
            } else if same_sign {
                (mag_prev[x + 1], mag_next[x - 1])
            } else {
                (mag_prev[x - 1], mag_next[x + 1])
            };

            // Asymmetric tie-break: a plateau of equal responses keeps its
            // first pixel along the gradient direction.
            if mag <= neighbor1 || mag < neighbor2 {
                continue;
            }

            mask[y * w + x] = if mag >= high_thresh {
                MASK_STRONG
            } else {
                MASK_WEAK
            };
        }
    }

    mask
}

fn link_hysteresis(mask: &[u8], w: usize, h: usize) -> Vec<EdgePoint> {
    let mut visited = vec![false; w * h];
    let mut stack: Vec<usize> = Vec::with_capacity(64);
    let mut points = Vec::new();

    for idx in 0..mask.len() {
        if mask[idx] != MASK_STRONG || visited[idx] {
            continue;
        }
        visited[idx] = true;
        stack.push(idx);

        while let Some(cur) = stack.pop() {
            let x = cur % w;
            let y = cur / w;
            points.push(EdgePoint {
                x: x as u32,
                y: y as u32,
            });

            for (dx, dy) in NEIGH_OFFSETS {
                let xn = x as isize + dx;
                let yn = y as isize + dy;
                if xn < 0 || yn < 0 || xn >= w as isize || yn >= h as isize {
                    continue;
                }
                let neighbor = yn as usize * w + xn as usize;
                if mask[neighbor] == 0 || visited[neighbor] {
                    continue;
                }
                visited[neighbor] = true;
                stack.push(neighbor);
            }
        }
    }

    points
}
