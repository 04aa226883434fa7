//! Small planar geometry helpers shared by the centerline synthesizer.
//!
//! The intersection solver treats parallelism as a normal outcome (`None`),
//! never an error: near-zero determinants are classified with a small
//! epsilon rather than an exact float comparison to avoid instability on
//! near-parallel inputs.

use crate::types::{Point, Segment};
use nalgebra::Matrix2;

/// Determinant magnitude below which two lines are reported as parallel.
/// Segment endpoints are integer pixels, so a truly parallel pair produces
/// an exactly zero determinant; the epsilon only guards accumulated float
/// error in the conversion.
const PARALLEL_EPS: f64 = 1e-6;

/// Euclidean distance between two pixel coordinates.
#[inline]
pub fn dist(a: Point, b: Point) -> f32 {
    let dx = (a.x - b.x) as f32;
    let dy = (a.y - b.y) as f32;
    (dx * dx + dy * dy).sqrt()
}

/// Midpoint of two pixel coordinates, rounded down per component.
#[inline]
pub fn midpoint(a: Point, b: Point) -> Point {
    Point {
        x: (a.x + b.x).div_euclid(2),
        y: (a.y + b.y).div_euclid(2),
    }
}

/// Intersection of the two infinite lines carrying `l1` and `l2`, each given
/// by its two endpoints. Returns `None` when the lines are parallel.
///
/// Classic 2×2 determinant solve; the result is truncated to integer pixel
/// coordinates.
pub fn line_intersection(l1: &Segment, l2: &Segment) -> Option<Point> {
    let (x1, y1) = (l1.p0.x as f64, l1.p0.y as f64);
    let (x2, y2) = (l1.p1.x as f64, l1.p1.y as f64);
    let (x3, y3) = (l2.p0.x as f64, l2.p0.y as f64);
    let (x4, y4) = (l2.p1.x as f64, l2.p1.y as f64);

    let det = Matrix2::new(x1 - x2, x3 - x4, y1 - y2, y3 - y4).determinant();
    if det.abs() < PARALLEL_EPS {
        return None;
    }

    let c1 = x1 * y2 - y1 * x2;
    let c2 = x3 * y4 - y3 * x4;
    let x = (c1 * (x3 - x4) - (x1 - x2) * c2) / det;
    let y = (c1 * (y3 - y4) - (y1 - y2) * c2) / det;

    Some(Point {
        x: x as i32,
        y: y as i32,
    })
}
