//! Fit-quality metrics for a fitted curve against its source samples.
//!
//! Residuals are measured at each sample's chord-length parameter, the
//! same parameter the fitter assigned it.

use std::fmt;

use crate::bezier::Bezier;
use crate::error::{FitError, Result};
use crate::geom::Point;
use crate::param::chord_length_parameterize;

/// Per-sample residuals and their aggregates.
#[derive(Debug, Clone, PartialEq)]
pub struct FitReport {
    /// Distance from each sample to the curve at the sample's parameter.
    pub residuals: Vec<f64>,
    /// Sum of residuals.
    pub total: f64,
    pub mean: f64,
    pub max: f64,
}

/// Sum of distances between each sample and the curve at its parameter.
///
/// Two or fewer points are an exact fit and score 0.
pub fn evaluate_bezier(bezier: &Bezier, points: &[Point]) -> Result<f64> {
    Ok(residuals(bezier, points)?.iter().sum())
}

/// Residual breakdown for diagnostics.
pub fn evaluate_report(bezier: &Bezier, points: &[Point]) -> Result<FitReport> {
    let residuals = residuals(bezier, points)?;
    let total: f64 = residuals.iter().sum();
    let mean = if residuals.is_empty() {
        0.0
    } else {
        total / residuals.len() as f64
    };
    let max = residuals.iter().copied().fold(0.0, f64::max);
    Ok(FitReport {
        residuals,
        total,
        mean,
        max,
    })
}

fn residuals(bezier: &Bezier, points: &[Point]) -> Result<Vec<f64>> {
    if points.len() <= 2 {
        return Ok(vec![0.0; points.len()]);
    }
    let t = chord_length_parameterize(points)?;
    if t.len() != points.len() {
        return Err(FitError::mismatch("evaluate", t.len(), points.len()));
    }

    points
        .iter()
        .zip(t.iter())
        .map(|(&p, ti)| -> Result<f64> { Ok(bezier.point_at(ti)?.distance(p) as f64) })
        .collect()
}

// ── Display ──────────────────────────────────────────────

impl fmt::Display for FitReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  Samples     {}", self.residuals.len())?;
        writeln!(f, "  Error sum   {:.6}", self.total)?;
        writeln!(f, "  Mean        {:.6}", self.mean)?;
        writeln!(f, "  Max         {:.6}", self.max)
    }
}
