//! Chord-length parameterization of an ordered point sequence.

use crate::error::{FitError, Result};
use crate::geom::Point;
use crate::linalg::Vector;

/// Assign each point a parameter proportional to the cumulative polyline
/// length up to it, normalized so the first is 0 and the last is 1.
///
/// All-coincident input has zero total length and is rejected as
/// `DegenerateInput` rather than producing NaN.
pub fn chord_length_parameterize(points: &[Point]) -> Result<Vector> {
    if points.len() < 2 {
        return Err(FitError::InsufficientPoints {
            got: points.len(),
            min: 2,
        });
    }

    let mut cumulative = Vec::with_capacity(points.len());
    cumulative.push(0.0f32);
    let mut total = 0.0f32;
    for pair in points.windows(2) {
        total += pair[0].distance(pair[1]);
        cumulative.push(total);
    }

    if total == 0.0 {
        return Err(FitError::DegenerateInput);
    }

    // Divide each entry (not multiply by a reciprocal) so the last is exactly 1.
    Ok(Vector::new(cumulative.into_iter().map(|c| c / total).collect()))
}
