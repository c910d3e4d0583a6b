/// Fitting parameters in one struct.
#[derive(Debug, Clone)]
pub struct FitConfig {
    /// Zero tolerance for the triangularity check before back-substitution.
    /// Entries with `|v| < epsilon` count as zero.
    pub epsilon: f32,
    /// Number of evenly spaced points when flattening a fitted curve.
    pub samples: usize,
}

impl Default for FitConfig {
    fn default() -> Self {
        Self {
            epsilon: f32::EPSILON,
            samples: 100,
        }
    }
}
