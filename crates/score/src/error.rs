//! Error types for scoring and ranking.

/// Errors that can occur during scoring and ranking.
///
/// Configuration variants (`InvalidBandTable`, `InvalidWeights`) are
/// raised at construction time only; call-time paths never re-validate.
#[derive(Debug, thiserror::Error)]
pub enum ScoreError {
    /// Malformed band table configuration.
    #[error("invalid band table: {0}")]
    InvalidBandTable(String),

    /// Malformed composite weight configuration.
    #[error("invalid weights: {0}")]
    InvalidWeights(String),

    /// A weighted category has no sub-score.
    #[error("missing sub-score for category: {0}")]
    MissingSubScore(String),

    /// No comparison rule configured for a metric.
    #[error("unknown metric: {0}")]
    UnknownMetric(String),
}
