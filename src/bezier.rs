//! The fitted cubic bezier value type and its evaluation.

use std::fmt;

use kurbo::{BezPath, CubicBez};

use crate::error::{FitError, Result};
use crate::geom::Point;

/// A cubic bezier: endpoint, two control points, endpoint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bezier {
    pub p0: Point,
    pub p1: Point,
    pub p2: Point,
    pub p3: Point,
}

impl Bezier {
    pub const fn new(p0: Point, p1: Point, p2: Point, p3: Point) -> Self {
        Self { p0, p1, p2, p3 }
    }

    /// Straight segment with each control point sitting on its endpoint.
    pub const fn line(a: Point, b: Point) -> Self {
        Self::new(a, a, b, b)
    }

    /// Evaluate the Bernstein blend at `t` in [0, 1].
    pub fn point_at(&self, t: f32) -> Result<Point> {
        if !(0.0..=1.0).contains(&t) {
            return Err(FitError::ParameterOutOfRange(t));
        }
        let mt = 1.0 - t;
        Ok(self.p0 * mt.powi(3)
            + self.p1 * (3.0 * mt * mt * t)
            + self.p2 * (3.0 * mt * t * t)
            + self.p3 * t.powi(3))
    }

    /// Flatten to `n` points at evenly spaced parameters, endpoints included.
    pub fn sample(&self, n: usize) -> Result<Vec<Point>> {
        if n < 2 {
            return Err(FitError::InsufficientPoints { got: n, min: 2 });
        }
        let step = 1.0 / (n - 1) as f32;
        (0..n)
            .map(|i| {
                // Pin the last sample so rounding cannot push t past 1.
                let t = if i == n - 1 { 1.0 } else { i as f32 * step };
                self.point_at(t)
            })
            .collect()
    }

    pub fn to_cubic_bez(&self) -> CubicBez {
        CubicBez::new(self.p0, self.p1, self.p2, self.p3)
    }

    pub fn to_bez_path(&self) -> BezPath {
        let mut path = BezPath::new();
        path.move_to(self.p0);
        path.curve_to(self.p1, self.p2, self.p3);
        path
    }

    /// SVG path data (`M … C …`).
    pub fn to_svg(&self) -> String {
        self.to_bez_path().to_svg()
    }
}

impl From<CubicBez> for Bezier {
    fn from(c: CubicBez) -> Self {
        Self::new(c.p0.into(), c.p1.into(), c.p2.into(), c.p3.into())
    }
}

impl fmt::Display for Bezier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P0 {}  P1 {}  P2 {}  P3 {}", self.p0, self.p1, self.p2, self.p3)
    }
}
