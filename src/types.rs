use serde::{Deserialize, Serialize};

/// A raw line detection in polar (Hesse normal) form: `rho` is the signed
/// perpendicular distance from the origin, `theta` the angle of the normal
/// vector in radians.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PolarLine {
    pub rho: f32,
    pub theta: f32,
}

/// Integer pixel coordinate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Finite drawable approximation of an infinite line, as an ordered endpoint
/// pair. Produced by the projector; endpoints are symmetric about the polar
/// foot point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub p0: Point,
    pub p1: Point,
}

impl Segment {
    pub const fn new(p0: Point, p1: Point) -> Self {
        Self { p0, p1 }
    }
}

/// Rectangular region of interest within a frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl Rect {
    pub const fn new(x: u32, y: u32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    #[inline]
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.x && x < self.x + self.w && y >= self.y && y < self.y + self.h
    }

    /// Intersects the rectangle with a `width`×`height` frame so callers can
    /// index pixel buffers without bounds checks.
    pub fn clamped(&self, width: u32, height: u32) -> Rect {
        let x = self.x.min(width);
        let y = self.y.min(height);
        Rect {
            x,
            y,
            w: self.w.min(width - x),
            h: self.h.min(height - y),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_contains_is_half_open() {
        let r = Rect::new(10, 20, 30, 40);
        assert!(r.contains(10, 20));
        assert!(r.contains(39, 59));
        assert!(!r.contains(40, 20));
        assert!(!r.contains(10, 60));
        assert!(!r.contains(9, 30));
    }

    #[test]
    fn rect_clamped_stays_inside_frame() {
        let r = Rect::new(300, 150, 600, 400);
        let c = r.clamped(640, 480);
        assert_eq!(c, Rect::new(300, 150, 340, 330));

        let oob = Rect::new(700, 500, 10, 10).clamped(640, 480);
        assert_eq!(oob.w, 0);
        assert_eq!(oob.h, 0);
    }
}
