//! Error types for numeric operations.

/// Errors that can occur during numeric operations.
#[derive(Debug, thiserror::Error)]
pub enum MathError {
    /// Empty data.
    #[error("empty data provided")]
    EmptyData,

    /// Constant input: min == max, so min-max rescaling is undefined.
    #[error("degenerate range: all values equal {0}")]
    DegenerateRange(f64),

    /// Numerical instability (NaN or Inf).
    #[error("numerical instability: {0}")]
    NumericalInstability(String),
}
