//! Fixed-length, immutable numeric vector.

use std::fmt;
use std::ops::{Div, Mul};

use crate::error::{FitError, Result};

/// An ordered sequence of scalars. Every operation returns a new `Vector`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Vector {
    contents: Vec<f32>,
}

impl Vector {
    pub fn new(contents: Vec<f32>) -> Self {
        Self { contents }
    }

    pub fn zeros(len: usize) -> Self {
        Self::new(vec![0.0; len])
    }

    /// Unit basis vector of length `len` with a one at `index`.
    pub fn basis(index: usize, len: usize) -> Result<Self> {
        if index >= len {
            return Err(FitError::IndexOutOfRange { index, len });
        }
        let mut contents = vec![0.0; len];
        contents[index] = 1.0;
        Ok(Self::new(contents))
    }

    pub fn len(&self) -> usize {
        self.contents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }

    pub fn get(&self, index: usize) -> Result<f32> {
        self.contents
            .get(index)
            .copied()
            .ok_or(FitError::IndexOutOfRange {
                index,
                len: self.len(),
            })
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.contents
    }

    pub fn iter(&self) -> impl Iterator<Item = f32> + '_ {
        self.contents.iter().copied()
    }

    pub fn into_inner(self) -> Vec<f32> {
        self.contents
    }

    /// Copy `count` elements starting at `start`. `None` runs to the end.
    pub fn subsection(&self, start: usize, count: Option<usize>) -> Result<Self> {
        if start >= self.len() {
            return Err(FitError::IndexOutOfRange {
                index: start,
                len: self.len(),
            });
        }
        let count = count.unwrap_or(self.len() - start);
        if start + count > self.len() {
            return Err(FitError::IndexOutOfRange {
                index: start + count,
                len: self.len(),
            });
        }
        Ok(Self::new(self.contents[start..start + count].to_vec()))
    }

    pub fn reverse(&self) -> Self {
        Self::new(self.contents.iter().rev().copied().collect())
    }

    pub fn add(&self, rhs: &Vector) -> Result<Self> {
        self.zip_with(rhs, "vector add", |a, b| a + b)
    }

    pub fn sub(&self, rhs: &Vector) -> Result<Self> {
        self.zip_with(rhs, "vector sub", |a, b| a - b)
    }

    /// Euclidean norm.
    pub fn magnitude(&self) -> f32 {
        self.contents.iter().map(|v| v * v).sum::<f32>().sqrt()
    }

    /// Unit vector in the same direction; a zero vector is returned unchanged.
    pub fn normalize(&self) -> Self {
        let magnitude = self.magnitude();
        if magnitude == 0.0 {
            return self.clone();
        }
        self / magnitude
    }

    fn zip_with(&self, rhs: &Vector, op: &'static str, f: impl Fn(f32, f32) -> f32) -> Result<Self> {
        if self.len() != rhs.len() {
            return Err(FitError::mismatch(op, self.len(), rhs.len()));
        }
        Ok(Self::new(
            self.contents
                .iter()
                .zip(&rhs.contents)
                .map(|(&a, &b)| f(a, b))
                .collect(),
        ))
    }
}

impl From<Vec<f32>> for Vector {
    fn from(contents: Vec<f32>) -> Self {
        Self::new(contents)
    }
}

impl Mul<f32> for &Vector {
    type Output = Vector;

    fn mul(self, rhs: f32) -> Vector {
        Vector::new(self.contents.iter().map(|v| v * rhs).collect())
    }
}

impl Mul<&Vector> for f32 {
    type Output = Vector;

    fn mul(self, rhs: &Vector) -> Vector {
        rhs * self
    }
}

impl Div<f32> for &Vector {
    type Output = Vector;

    fn div(self, rhs: f32) -> Vector {
        // One division, then multiply through.
        self * (1.0 / rhs)
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, v) in self.contents.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", v)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn mismatched_lengths_are_rejected() {
        let a = Vector::new(vec![1.0, 2.0]);
        let b = Vector::new(vec![1.0, 2.0, 3.0]);
        assert!(matches!(
            a.add(&b),
            Err(FitError::DimensionMismatch { .. })
        ));
        assert!(a.sub(&b).is_err());
        assert_eq!(a.add(&a).unwrap(), Vector::new(vec![2.0, 4.0]));
    }

    #[test]
    fn normalize_handles_zero_and_nonzero() {
        let zero = Vector::zeros(3);
        assert_eq!(zero.normalize(), zero);

        let v = Vector::new(vec![3.0, 4.0]).normalize();
        assert_relative_eq!(v.magnitude(), 1.0, epsilon = 1e-6);
        assert_relative_eq!(v.get(0).unwrap(), 0.6, epsilon = 1e-6);
    }

    #[test]
    fn subsection_runs_to_end_when_count_is_none() {
        let v = Vector::new(vec![1.0, 2.0, 3.0, 4.0]);
        assert_eq!(v.subsection(1, None).unwrap().as_slice(), &[2.0, 3.0, 4.0]);
        assert_eq!(v.subsection(0, Some(2)).unwrap().as_slice(), &[1.0, 2.0]);
        assert!(v.subsection(4, None).is_err());
        assert!(v.subsection(2, Some(3)).is_err());
    }

    #[test]
    fn reverse_and_scalar_ops() {
        let v = Vector::new(vec![1.0, 2.0, 4.0]);
        assert_eq!(v.reverse().as_slice(), &[4.0, 2.0, 1.0]);
        assert_eq!((&v * 2.0).as_slice(), &[2.0, 4.0, 8.0]);
        assert_eq!((2.0 * &v).as_slice(), &[2.0, 4.0, 8.0]);
        assert_eq!((&v / 2.0).as_slice(), &[0.5, 1.0, 2.0]);
        assert!(v.get(3).is_err());
        assert_eq!(Vector::basis(1, 3).unwrap().as_slice(), &[0.0, 1.0, 0.0]);
    }
}
