//! Least-squares cubic bezier fitting.
//!
//! Per stroke:
//! 1. Chord-length parameterize the samples
//! 2. Pin P0/P3 to the first and last sample
//! 3. Build the m×2 Bernstein design matrix for P1/P2
//! 4. QR-decompose it once, then back-substitute x and y separately

use rayon::prelude::*;

use crate::bezier::Bezier;
use crate::config::FitConfig;
use crate::error::{FitError, Result};
use crate::geom::Point;
use crate::linalg::{back_substitute, qr_decompose, Matrix, Vector};
use crate::param::chord_length_parameterize;

/// Fit a single cubic bezier to `points` with the default config.
pub fn fit_cubic_bezier(points: &[Point]) -> Result<Bezier> {
    fit_cubic_bezier_with(points, &FitConfig::default())
}

/// Fit a single cubic bezier to `points`.
///
/// Two points give a straight segment; three or more are fitted by
/// least squares with the endpoints interpolated exactly.
pub fn fit_cubic_bezier_with(points: &[Point], config: &FitConfig) -> Result<Bezier> {
    match points.len() {
        0 | 1 => Err(FitError::InsufficientPoints {
            got: points.len(),
            min: 2,
        }),
        2 => Ok(Bezier::line(points[0], points[1])),
        _ => fit_least_squares(points, config),
    }
}

/// Fit each stroke independently, in parallel.
pub fn fit_strokes(strokes: &[Vec<Point>], config: &FitConfig) -> Vec<Result<Bezier>> {
    strokes
        .par_iter()
        .map(|stroke| fit_cubic_bezier_with(stroke, config))
        .collect()
}

// ── Least squares ────────────────────────────────────────

fn fit_least_squares(points: &[Point], config: &FitConfig) -> Result<Bezier> {
    let t = match chord_length_parameterize(points) {
        Ok(t) => t,
        Err(err) => {
            crate::log::warn!(points = points.len(), "cannot parameterize stroke: {}", err);
            return Err(err);
        }
    };
    let p0 = points[0];
    let p3 = points[points.len() - 1];

    let m = points.len();
    let mut design = Vec::with_capacity(m * 2);
    let mut bx = Vec::with_capacity(m);
    let mut by = Vec::with_capacity(m);
    for (point, ti) in points.iter().zip(t.iter()) {
        let mt = 1.0 - ti;
        design.push(3.0 * mt * mt * ti);
        design.push(3.0 * mt * ti * ti);
        let known = p0 * mt.powi(3) + p3 * ti.powi(3);
        bx.push(point.x - known.x);
        by.push(point.y - known.y);
    }
    let a = Matrix::new(m, 2, design)?;

    let qr = qr_decompose(&a)?;
    let r = qr.r.subsection(0, Some(1), 0, Some(1))?;
    let qt = qr.q.transpose();
    crate::log::debug!(
        points = m,
        r00 = r.get(0, 0)?,
        r11 = r.get(1, 1)?,
        "decomposed design matrix"
    );

    let solve_axis = |rhs: Vec<f32>| -> Result<Vector> {
        let projected = qt.mul_vector(&Vector::new(rhs))?.subsection(0, Some(2))?;
        back_substitute(&r, &projected, config.epsilon)
    };
    let x = solve_axis(bx)?;
    let y = solve_axis(by)?;

    let p1 = Point::new(x.get(0)?, y.get(0)?);
    let p2 = Point::new(x.get(1)?, y.get(1)?);
    crate::log::debug!(%p1, %p2, "solved control points");

    Ok(Bezier::new(p0, p1, p2, p3))
}
