//! QR decomposition by successive Householder reflections.
//!
//! Each step reflects the sub-column below the diagonal onto its first
//! axis, so after `n` steps the working matrix is upper triangular (R)
//! and the product of the transposed reflections is orthogonal (Q).

use super::matrix::Matrix;
use super::vector::Vector;
use crate::error::{FitError, Result};

/// Result of `qr_decompose`: `q` is m×m orthogonal, `r` is m×n upper triangular.
#[derive(Debug, Clone)]
pub struct QrDecomposition {
    pub q: Matrix,
    pub r: Matrix,
}

/// Sign with `sign(0) == 1`.
fn sign(v: f32) -> f32 {
    if v >= 0.0 {
        1.0
    } else {
        -1.0
    }
}

/// Reflector `I - 2·w·wᵗ` mapping `a` onto `±‖a‖·e₀`.
///
/// When `a` already lies on the first axis `w` is the zero vector and
/// the reflector degenerates to the identity.
pub fn householder_reflector(a: &Vector) -> Result<Matrix> {
    let mut target = vec![0.0; a.len()];
    target[0] = a.magnitude() * sign(a.get(0)?);
    let w = a.sub(&Vector::new(target))?.normalize();

    let outer = Matrix::from_column(&w).mul(&Matrix::from_row(&w))?;
    Matrix::identity(a.len())?.sub(&(2.0 * &outer))
}

/// One reflection step: returns the reflected matrix and the full-size reflector.
fn reflect_step(a: &Matrix, iteration: usize) -> Result<(Matrix, Matrix)> {
    let column = a
        .subsection(iteration, None, iteration, Some(iteration))?
        .column(0)?;
    let h = householder_reflector(&column)?;
    let h_full = Matrix::identity(a.rows())?.insert(&h, Some(iteration), Some(iteration))?;
    let next = h_full.mul(a)?;
    Ok((next, h_full))
}

/// Decompose `a` (m×n, m ≥ n) into `Q·R`.
pub fn qr_decompose(a: &Matrix) -> Result<QrDecomposition> {
    if a.rows() < a.cols() {
        return Err(FitError::mismatch("qr decompose", a.rows(), a.cols()));
    }

    let mut q = Matrix::identity(a.rows())?;
    let mut r = a.clone();
    for i in 0..a.cols() {
        let (next, h_full) = reflect_step(&r, i)?;
        q = q.mul(&h_full.transpose())?;
        r = next;
    }
    Ok(QrDecomposition { q, r })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn assert_matrix_eq(a: &Matrix, b: &Matrix, tol: f32) {
        assert_eq!((a.rows(), a.cols()), (b.rows(), b.cols()));
        for row in 0..a.rows() {
            for col in 0..a.cols() {
                assert_abs_diff_eq!(
                    a.get(row, col).unwrap(),
                    b.get(row, col).unwrap(),
                    epsilon = tol
                );
            }
        }
    }

    fn design_matrix() -> Matrix {
        Matrix::new(
            5,
            2,
            vec![0.0, 0.0, 0.42, 0.14, 0.375, 0.375, 0.14, 0.42, 0.0, 0.0],
        )
        .unwrap()
    }

    #[test]
    fn reflector_maps_onto_first_axis() {
        let a = Vector::new(vec![3.0, 4.0]);
        let h = householder_reflector(&a).unwrap();
        let reflected = h.mul_vector(&a).unwrap();
        assert_abs_diff_eq!(reflected.get(0).unwrap(), 5.0, epsilon = 1e-5);
        assert_abs_diff_eq!(reflected.get(1).unwrap(), 0.0, epsilon = 1e-5);
    }

    #[test]
    fn aligned_column_gives_identity() {
        let h = householder_reflector(&Vector::new(vec![2.0, 0.0, 0.0])).unwrap();
        assert_eq!(h, Matrix::identity(3).unwrap());
    }

    #[test]
    fn q_times_r_reconstructs_input() {
        let a = design_matrix();
        let QrDecomposition { q, r } = qr_decompose(&a).unwrap();
        assert_matrix_eq(&q.mul(&r).unwrap(), &a, 1e-4);
        for row in 1..r.rows() {
            for col in 0..r.cols().min(row) {
                assert_abs_diff_eq!(r.get(row, col).unwrap(), 0.0, epsilon = 1e-5);
            }
        }
        assert!(r.get(0, 0).unwrap().abs() > 1e-3);
        assert!(r.get(1, 1).unwrap().abs() > 1e-3);
    }

    #[test]
    fn q_is_orthogonal() {
        let a = Matrix::new(3, 2, vec![1.0, 2.0, -1.0, 0.5, 4.0, -3.0]).unwrap();
        let QrDecomposition { q, r } = qr_decompose(&a).unwrap();
        let qtq = q.transpose().mul(&q).unwrap();
        assert_matrix_eq(&qtq, &Matrix::identity(3).unwrap(), 1e-4);
        assert_matrix_eq(&q.mul(&r).unwrap(), &a, 1e-4);
    }

    #[test]
    fn nearly_aligned_column_reconstructs() {
        // First column almost lies on the first axis, so a - e cancels heavily.
        let a = Matrix::new(3, 2, vec![100.0, 50.0, 0.1, 200.0, 0.1, -100.0]).unwrap();
        let QrDecomposition { q, r } = qr_decompose(&a).unwrap();
        let qr = q.mul(&r).unwrap();
        for row in 0..3 {
            assert_abs_diff_eq!(qr.get(row, 0).unwrap(), a.get(row, 0).unwrap(), epsilon = 1e-4);
            assert_relative_eq!(
                qr.get(row, 1).unwrap(),
                a.get(row, 1).unwrap(),
                max_relative = 1e-5
            );
        }
        let qtq = q.transpose().mul(&q).unwrap();
        assert_matrix_eq(&qtq, &Matrix::identity(3).unwrap(), 1e-4);
    }

    #[test]
    fn wide_matrix_is_rejected() {
        let a = Matrix::new(1, 2, vec![1.0, 2.0]).unwrap();
        assert!(matches!(
            qr_decompose(&a),
            Err(FitError::DimensionMismatch { .. })
        ));
    }
}
