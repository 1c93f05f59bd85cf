//! Error types for series utilities.

/// Errors that can occur during series alignment and normalization.
#[derive(Debug, thiserror::Error)]
pub enum AlignError {
    /// A series has no non-missing value at all.
    #[error("series is entirely missing: {name}")]
    AllMissing {
        /// Ratio name of the offending series.
        name: String,
    },

    /// A missing value inside the aligned window: the prefix-only
    /// missing-value invariant is violated and alignment cannot proceed.
    #[error("irregular missing value in {name} at {period}")]
    IrregularMissing {
        /// Ratio name of the offending series.
        name: String,
        /// Period label of the gap.
        period: String,
    },

    /// Series does not cover the canonical period list.
    #[error("series length mismatch for {name}: expected {expected}, got {actual}")]
    LengthMismatch {
        /// Ratio name of the offending series.
        name: String,
        /// Canonical period count.
        expected: usize,
        /// Actual series length.
        actual: usize,
    },

    /// Numeric error while normalizing an aligned window.
    #[error("math error: {0}")]
    Math(#[from] ratiolens_math::MathError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = AlignError::AllMissing { name: "Asset Turnover".to_string() };
        assert!(err.to_string().contains("Asset Turnover"));

        let err =
            AlignError::IrregularMissing { name: "TIE".to_string(), period: "Mar-21".to_string() };
        assert!(err.to_string().contains("Mar-21"));
    }
}
