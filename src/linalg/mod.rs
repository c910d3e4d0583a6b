//! Minimal dense linear algebra: vectors, matrices, Householder QR,
//! and back-substitution.

mod householder;
mod matrix;
mod substitution;
mod vector;

pub use householder::{householder_reflector, qr_decompose, QrDecomposition};
pub use matrix::Matrix;
pub use substitution::back_substitute;
pub use vector::Vector;
