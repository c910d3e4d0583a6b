use thiserror::Error;

/// Errors that can occur while fitting or evaluating a curve.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum FitError {
    #[error("dimension mismatch in {op}: {left} vs {right}")]
    DimensionMismatch {
        op: &'static str,
        left: String,
        right: String,
    },

    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("too few points: got {got}, need at least {min}")]
    InsufficientPoints { got: usize, min: usize },

    /// Covers both a non-zero entry below the diagonal and a
    /// near-zero entry on it.
    #[error("matrix is not upper triangular with a non-zero diagonal")]
    SingularMatrix,

    #[error("curve parameter {0} is outside [0, 1]")]
    ParameterOutOfRange(f32),

    #[error("degenerate input: all points are coincident")]
    DegenerateInput,

    #[error("matrix must have at least one row and one column")]
    EmptyMatrix,

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, FitError>;

impl FitError {
    pub(crate) fn mismatch(op: &'static str, left: impl ToString, right: impl ToString) -> Self {
        FitError::DimensionMismatch {
            op,
            left: left.to_string(),
            right: right.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_condition() {
        let err = FitError::InsufficientPoints { got: 1, min: 2 };
        assert_eq!(err.to_string(), "too few points: got 1, need at least 2");

        let err = FitError::mismatch("add", 3, 4);
        assert_eq!(err.to_string(), "dimension mismatch in add: 3 vs 4");

        let err = FitError::ParameterOutOfRange(1.5);
        assert_eq!(err.to_string(), "curve parameter 1.5 is outside [0, 1]");
    }
}
