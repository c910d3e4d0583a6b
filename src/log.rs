//! Fitter diagnostics.
//!
//! The fitter reports the design-matrix size and R diagonal, then the
//! solved control points, at debug level; strokes it cannot parameterize
//! are reported at warn level. Without the `tracing` feature both macros
//! compile away and their arguments are never evaluated.

#[cfg(feature = "tracing")]
pub use tracing::{debug, warn};

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
pub use crate::{debug, warn};
