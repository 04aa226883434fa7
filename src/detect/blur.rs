//! Separable Gaussian smoothing with clamped borders.

use crate::frame::GrayF32;

/// Normalised 5-tap Gaussian kernel `[1, 4, 6, 4, 1] / 16`.
pub const GAUSSIAN_5TAP: [f32; 5] = [0.0625, 0.25, 0.375, 0.25, 0.0625];

/// Smooth a plane with the 5-tap Gaussian, horizontal then vertical pass.
/// Output has the same dimensions as the input.
pub fn gaussian_blur(src: &GrayF32) -> GrayF32 {
    if src.w == 0 || src.h == 0 {
        return src.clone();
    }
    let radius = (GAUSSIAN_5TAP.len() / 2) as isize;

    let mut horiz = GrayF32::new(src.w, src.h);
    for y in 0..src.h {
        let row = src.row(y);
        let out = horiz.row_mut(y);
        for (x, out_px) in out.iter_mut().enumerate() {
            let mut acc = 0.0f32;
            for (k, &tap) in GAUSSIAN_5TAP.iter().enumerate() {
                let idx = clamp_index(x as isize + k as isize - radius, src.w);
                acc += tap * row[idx];
            }
            *out_px = acc;
        }
    }

    let mut out = GrayF32::new(src.w, src.h);
    for y in 0..src.h {
        let rows: [&[f32]; 5] = std::array::from_fn(|k| {
            horiz.row(clamp_index(y as isize + k as isize - radius, src.h))
        });
        let dst = out.row_mut(y);
        for (x, dst_px) in dst.iter_mut().enumerate() {
            let mut acc = 0.0f32;
            for (k, &tap) in GAUSSIAN_5TAP.iter().enumerate() {
                acc += tap * rows[k][x];
            }
            *dst_px = acc;
        }
    }
    out
}

fn clamp_index(idx: isize, upper: usize) -> usize {
    if idx < 0 {
        0
    } else {
        (idx as usize).min(upper - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constant_plane_is_preserved() {
        let mut plane = GrayF32::new(16, 12);
        for y in 0..12 {
            for x in 0..16 {
                plane.set(x, y, 128.0);
            }
        }
        let blurred = gaussian_blur(&plane);
        for y in 0..12 {
            for x in 0..16 {
                assert!(
                    (blurred.get(x, y) - 128.0).abs() < 1e-3,
                    "value drifted at ({x}, {y}): {}",
                    blurred.get(x, y)
                );
            }
        }
    }

    #[test]
    fn impulse_spreads_with_kernel_weights() {
        let mut plane = GrayF32::new(9, 9);
        plane.set(4, 4, 16.0);
        let blurred = gaussian_blur(&plane);
        // Centre weight is (6/16)^2 of the impulse.
        assert!((blurred.get(4, 4) - 16.0 * 0.375 * 0.375).abs() < 1e-4);
        // Separable: horizontal and vertical neighbors get 6*4/256.
        assert!((blurred.get(3, 4) - 16.0 * 0.375 * 0.25).abs() < 1e-4);
        assert!((blurred.get(4, 3) - 16.0 * 0.375 * 0.25).abs() < 1e-4);
        // Mass is conserved away from borders.
        let total: f32 = (0..9)
            .flat_map(|y| (0..9).map(move |x| (x, y)))
            .map(|(x, y)| blurred.get(x, y))
            .sum();
        assert!((total - 16.0).abs() < 1e-3, "kernel not normalised: {total}");
    }
}
