//! Back-substitution for upper-triangular systems.

use super::matrix::Matrix;
use super::vector::Vector;
use crate::error::{FitError, Result};

/// Solve `R·x = b` for upper-triangular `r`.
///
/// No pivoting: a near-zero diagonal entry fails the triangularity
/// check and is reported as `SingularMatrix`.
pub fn back_substitute(r: &Matrix, b: &Vector, epsilon: f32) -> Result<Vector> {
    if r.rows() != b.len() {
        return Err(FitError::mismatch("back substitution", r.rows(), b.len()));
    }
    if r.rows() < r.cols() {
        return Err(FitError::mismatch("back substitution", r.rows(), r.cols()));
    }
    if !r.is_upper_triangular(epsilon) {
        return Err(FitError::SingularMatrix);
    }

    let n = r.cols();
    // Built bottom row first; `reversed[k]` holds x[n - 1 - k].
    let mut reversed: Vec<f32> = Vec::with_capacity(n);
    for idx in (0..n).rev() {
        let mut acc = b.get(idx)?;
        for j in idx + 1..n {
            acc -= r.get(idx, j)? * reversed[n - 1 - j];
        }
        reversed.push(acc / r.get(idx, idx)?);
    }
    Ok(Vector::new(reversed).reverse())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const EPS: f32 = f32::EPSILON;

    #[test]
    fn solves_triangular_system() {
        let r = Matrix::new(3, 3, vec![2.0, 1.0, -1.0, 0.0, 3.0, 2.0, 0.0, 0.0, 4.0]).unwrap();
        let b = Vector::new(vec![3.0, 13.0, 8.0]);
        let x = back_substitute(&r, &b, EPS).unwrap();
        assert_eq!(x.as_slice(), &[1.0, 3.0, 2.0]);

        let rx = r.mul_vector(&x).unwrap();
        for (got, want) in rx.iter().zip(b.iter()) {
            assert_abs_diff_eq!(got, want, epsilon = 1e-5);
        }
    }

    #[test]
    fn singular_or_lower_matrices_fail() {
        let b = Vector::new(vec![1.0, 1.0]);
        let zero_diag = Matrix::new(2, 2, vec![1.0, 1.0, 0.0, 0.0]).unwrap();
        assert!(matches!(
            back_substitute(&zero_diag, &b, EPS),
            Err(FitError::SingularMatrix)
        ));
        let lower = Matrix::new(2, 2, vec![1.0, 0.0, 1.0, 1.0]).unwrap();
        assert!(matches!(
            back_substitute(&lower, &b, EPS),
            Err(FitError::SingularMatrix)
        ));
    }

    #[test]
    fn rhs_length_must_match() {
        let r = Matrix::identity(2).unwrap();
        assert!(matches!(
            back_substitute(&r, &Vector::new(vec![1.0; 3]), EPS),
            Err(FitError::DimensionMismatch { .. })
        ));
    }
}
