//! Metric-aware comparison of two companies' values.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::ScoreError;

/// Directional rule for a metric: which of two values is the more
/// favorable outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// The larger value wins (Current Ratio, ROE, ...).
    HigherIsBetter,
    /// The smaller value wins (Debt-to-Equity Ratio, Debt Ratio).
    LowerIsBetter,
}

/// Which side of a two-way comparison won.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contender {
    /// The first value.
    A,
    /// The second value.
    B,
}

/// Outcome of a two-way comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ranking {
    /// One side is strictly better under the metric's rule.
    Winner(Contender),
    /// Exactly equal values.
    Tie,
    /// At least one input is missing; no winner is ever guessed.
    Indeterminate,
}

/// Comparison rules keyed by metric name.
///
/// The rule table is configuration, not code: an unknown metric is an
/// explicit error because a silently wrong default in a financial
/// comparison is worse than no answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleTable {
    rules: BTreeMap<String, Direction>,
}

impl RuleTable {
    /// Build a rule table from explicit (metric, direction) pairs.
    #[must_use]
    pub fn new(rules: impl IntoIterator<Item = (impl Into<String>, Direction)>) -> Self {
        Self { rules: rules.into_iter().map(|(m, d)| (m.into(), d)).collect() }
    }

    /// The standard rule set for the ratios this engine works with.
    #[must_use]
    pub fn standard() -> Self {
        use Direction::{HigherIsBetter, LowerIsBetter};

        Self::new([
            ("Current Ratio", HigherIsBetter),
            ("Quick Ratio", HigherIsBetter),
            ("Cash Ratio", HigherIsBetter),
            ("Debt-to-Equity Ratio", LowerIsBetter),
            ("Debt Ratio", LowerIsBetter),
            ("Times Interest Earned", HigherIsBetter),
            ("Gross Profit Margin", HigherIsBetter),
            ("Operating Profit Margin", HigherIsBetter),
            ("Net Profit Margin", HigherIsBetter),
            ("Return on Assets", HigherIsBetter),
            ("Return on Equity", HigherIsBetter),
            ("Asset Turnover", HigherIsBetter),
        ])
    }

    /// The configured direction for a metric.
    ///
    /// # Errors
    /// Returns `ScoreError::UnknownMetric` if no rule is configured.
    pub fn direction(&self, metric: &str) -> Result<Direction, ScoreError> {
        self.rules
            .get(metric)
            .copied()
            .ok_or_else(|| ScoreError::UnknownMetric(metric.to_string()))
    }

    /// Decide the better performer for one metric.
    ///
    /// A missing or non-finite input makes the outcome `Indeterminate`;
    /// exact equality is a `Tie`.
    ///
    /// # Errors
    /// Returns `ScoreError::UnknownMetric` if no rule is configured for
    /// `metric`.
    pub fn rank(
        &self,
        metric: &str,
        a: Option<f64>,
        b: Option<f64>,
    ) -> Result<Ranking, ScoreError> {
        let direction = self.direction(metric)?;

        let (Some(a), Some(b)) = (a, b) else {
            return Ok(Ranking::Indeterminate);
        };
        if !a.is_finite() || !b.is_finite() {
            return Ok(Ranking::Indeterminate);
        }
        if a == b {
            return Ok(Ranking::Tie);
        }

        let a_wins = match direction {
            Direction::HigherIsBetter => a > b,
            Direction::LowerIsBetter => a < b,
        };
        Ok(Ranking::Winner(if a_wins { Contender::A } else { Contender::B }))
    }
}
