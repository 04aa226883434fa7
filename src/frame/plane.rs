use image::RgbImage;

/// Owned single-channel float plane, tightly packed, values on the 0..255
/// scale.
#[derive(Clone, Debug, Default)]
pub struct GrayF32 {
    pub w: usize,
    pub h: usize,
    data: Vec<f32>,
}

impl GrayF32 {
    /// Allocate a zero-filled plane.
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            data: vec![0.0; w * h],
        }
    }

    /// Convert an RGB frame to luma using the BT.601 weights
    /// (`0.299 R + 0.587 G + 0.114 B`).
    pub fn from_rgb(frame: &RgbImage) -> Self {
        let w = frame.width() as usize;
        let h = frame.height() as usize;
        let mut data = Vec::with_capacity(w * h);
        for px in frame.pixels() {
            let [r, g, b] = px.0;
            data.push(0.299 * r as f32 + 0.587 * g as f32 + 0.114 * b as f32);
        }
        Self { w, h, data }
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> f32 {
        self.data[y * self.w + x]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, v: f32) {
        self.data[y * self.w + x] = v;
    }

    #[inline]
    pub fn row(&self, y: usize) -> &[f32] {
        &self.data[y * self.w..(y + 1) * self.w]
    }

    #[inline]
    pub fn row_mut(&mut self, y: usize) -> &mut [f32] {
        let start = y * self.w;
        &mut self.data[start..start + self.w]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn from_rgb_uses_luma_weights() {
        let mut frame = RgbImage::new(2, 1);
        frame.put_pixel(0, 0, Rgb([255, 255, 255]));
        frame.put_pixel(1, 0, Rgb([255, 0, 0]));
        let gray = GrayF32::from_rgb(&frame);
        assert!((gray.get(0, 0) - 255.0).abs() < 0.1);
        assert!((gray.get(1, 0) - 0.299 * 255.0).abs() < 0.1);
    }

    #[test]
    fn rows_are_tightly_packed() {
        let mut plane = GrayF32::new(3, 2);
        plane.set(2, 1, 7.0);
        assert_eq!(plane.row(1), &[0.0, 0.0, 7.0]);
        plane.row_mut(0)[1] = 3.0;
        assert_eq!(plane.get(1, 0), 3.0);
    }
}
