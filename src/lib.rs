//! strokefit: sampled 2D stroke → single cubic bezier.
//!
//! Fits the least-squares cubic bezier through an ordered point
//! sequence (endpoints pinned, interior control points solved by
//! Householder QR) and scores the fit.
//!
//! # Example
//!
//! ```
//! use strokefit::{evaluate_bezier, fit_cubic_bezier, Point};
//!
//! let points = [
//!     Point::new(0.0, 0.0),
//!     Point::new(1.0, 0.0),
//!     Point::new(2.0, 0.0),
//!     Point::new(3.0, 0.0),
//! ];
//! let curve = fit_cubic_bezier(&points)?;
//! let error = evaluate_bezier(&curve, &points)?;
//! assert!(error < 1e-3);
//! # Ok::<(), strokefit::FitError>(())
//! ```

#![forbid(unsafe_code)]

mod bezier;
mod config;
mod eval;
mod fit;
mod geom;
mod param;

pub mod error;
pub mod input;
pub mod linalg;
pub mod log;

// Re-export kurbo so downstream users get the same version
// used by `Bezier::to_cubic_bez`.
pub use kurbo;

pub use bezier::Bezier;
pub use config::FitConfig;
pub use error::{FitError, Result};
pub use eval::{evaluate_bezier, evaluate_report, FitReport};
pub use fit::{fit_cubic_bezier, fit_cubic_bezier_with, fit_strokes};
pub use geom::Point;
pub use param::chord_length_parameterize;
