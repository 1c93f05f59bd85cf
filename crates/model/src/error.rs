//! Error types for DuPont decomposition.

/// Errors that can occur during DuPont decomposition.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    /// One or more factors are missing for the requested period.
    ///
    /// Whether to substitute a fallback period's value is the caller's
    /// policy, not the decomposer's.
    #[error("incomplete factors for {period}: missing {}", missing.join(", "))]
    IncompleteFactors {
        /// Requested period label.
        period: String,
        /// Names of every missing factor.
        missing: Vec<String>,
    },

    /// A required series is absent from the profile.
    #[error("missing series: {0}")]
    MissingSeries(String),

    /// Period label not in the profile's canonical list.
    #[error("unknown period: {0}")]
    UnknownPeriod(String),

    /// Wrong number of factor values for an identity.
    #[error("factor count mismatch for {identity} identity: expected {expected}, got {actual}")]
    FactorCountMismatch {
        /// Identity name.
        identity: &'static str,
        /// Factor count the identity defines.
        expected: usize,
        /// Factor count supplied.
        actual: usize,
    },
}

impl ModelError {
    /// Returns whether this error is recoverable.
    ///
    /// Missing factors are recoverable: the caller can retry with a
    /// fallback period. The other variants indicate a malformed request.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::IncompleteFactors { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn incomplete_factors_lists_every_name() {
        let err = ModelError::IncompleteFactors {
            period: "Mar-17".to_string(),
            missing: vec!["Asset Turnover".to_string(), "Financial Leverage".to_string()],
        };
        let msg = err.to_string();
        assert!(msg.contains("Mar-17"));
        assert!(msg.contains("Asset Turnover"));
        assert!(msg.contains("Financial Leverage"));
    }

    #[test]
    fn error_is_recoverable() {
        let err = ModelError::IncompleteFactors { period: "Mar-17".to_string(), missing: vec![] };
        assert!(err.is_recoverable());

        let err = ModelError::UnknownPeriod("Mar-99".to_string());
        assert!(!err.is_recoverable());
    }
}
