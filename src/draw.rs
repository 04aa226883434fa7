//! Overlay drawing onto RGB frames.
//!
//! Frame and ROI are always explicit parameters; the module holds no state.
//! Stroke thickness is emulated by parallel 1-pixel strokes offset along
//! the segment normal.

use crate::types::{Rect, Segment};
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_hollow_rect_mut, draw_line_segment_mut};
use imageproc::rect::Rect as PixelRect;

/// Draw a segment with the given color and thickness. Out-of-frame portions
/// are clipped by the rasterizer.
pub fn draw_segment(frame: &mut RgbImage, seg: &Segment, color: [u8; 3], thickness: u32) {
    let p0 = (seg.p0.x as f32, seg.p0.y as f32);
    let p1 = (seg.p1.x as f32, seg.p1.y as f32);

    let dx = p1.0 - p0.0;
    let dy = p1.1 - p0.1;
    let len = (dx * dx + dy * dy).sqrt();
    if len < 1e-3 {
        draw_line_segment_mut(frame, p0, p1, Rgb(color));
        return;
    }

    let nx = -dy / len;
    let ny = dx / len;
    let strokes = thickness.max(1);
    for i in 0..strokes {
        let offset = i as f32 - (strokes as f32 - 1.0) * 0.5;
        draw_line_segment_mut(
            frame,
            (p0.0 + nx * offset, p0.1 + ny * offset),
            (p1.0 + nx * offset, p1.1 + ny * offset),
            Rgb(color),
        );
    }
}

/// Draw the ROI as a hollow rectangle, thickened inward.
pub fn draw_roi(frame: &mut RgbImage, roi: &Rect, color: [u8; 3], thickness: u32) {
    if roi.w == 0 || roi.h == 0 {
        return;
    }
    for i in 0..thickness.max(1) {
        let w = roi.w.saturating_sub(2 * i);
        let h = roi.h.saturating_sub(2 * i);
        if w == 0 || h == 0 {
            break;
        }
        let rect = PixelRect::at((roi.x + i) as i32, (roi.y + i) as i32).of_size(w, h);
        draw_hollow_rect_mut(frame, rect, Rgb(color));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Point;

    #[test]
    fn vertical_segment_paints_its_column() {
        let mut frame = RgbImage::new(64, 64);
        let seg = Segment::new(Point::new(32, -1000), Point::new(32, 1000));
        draw_segment(&mut frame, &seg, [0, 255, 0], 1);
        for y in 0..64 {
            assert_eq!(frame.get_pixel(32, y).0, [0, 255, 0], "row {y} unpainted");
        }
        assert_eq!(frame.get_pixel(0, 0).0, [0, 0, 0]);
    }

    #[test]
    fn thickness_widens_the_stroke() {
        let mut frame = RgbImage::new(64, 64);
        let seg = Segment::new(Point::new(32, 0), Point::new(32, 63));
        draw_segment(&mut frame, &seg, [255, 0, 0], 3);
        let painted: usize = (0..64)
            .filter(|&x| frame.get_pixel(x, 32).0 == [255, 0, 0])
            .count();
        assert!(painted >= 3, "expected a 3-wide stroke, got {painted}");
    }

    #[test]
    fn roi_rectangle_outlines_without_filling() {
        let mut frame = RgbImage::new(64, 64);
        let roi = Rect::new(10, 10, 20, 20);
        draw_roi(&mut frame, &roi, [255, 0, 0], 1);
        assert_eq!(frame.get_pixel(10, 10).0, [255, 0, 0]);
        assert_eq!(frame.get_pixel(29, 29).0, [255, 0, 0]);
        assert_eq!(frame.get_pixel(15, 15).0, [0, 0, 0], "interior painted");
    }
}
