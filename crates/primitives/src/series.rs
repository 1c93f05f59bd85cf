//! Ratio series type definitions.

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Name of a financial ratio, e.g. `"Current Ratio"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Display, Serialize, Deserialize)]
pub struct RatioName(pub String);

impl RatioName {
    /// Create a new ratio name.
    #[must_use]
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RatioName {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for RatioName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Unit tag carried by every series.
///
/// Values stay raw; rendering a `Percent` value with a `%` suffix or a
/// `Multiple` with an `x` suffix is the presentation layer's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unit {
    /// Dimensionless ratio (e.g. Current Ratio 0.50).
    Ratio,
    /// Percentage points (e.g. Net Profit Margin 12.6).
    Percent,
    /// Turnover or leverage multiple (e.g. Equity Multiplier 2.87x).
    Multiple,
    /// Min-max rescaled output in [0, 1].
    Normalized,
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ratio => write!(f, "ratio"),
            Self::Percent => write!(f, "percent"),
            Self::Multiple => write!(f, "multiple"),
            Self::Normalized => write!(f, "normalized"),
        }
    }
}

/// A single ratio's values across fiscal periods, in chronological order.
///
/// One slot per canonical period of the owning profile; `None` marks an
/// explicitly missing value (historical data unavailable before the metric
/// started being reported), never a silent zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatioSeries {
    /// Ratio name.
    pub name: RatioName,
    /// Unit of the raw values.
    pub unit: Unit,
    values: Vec<Option<f64>>,
}

impl RatioSeries {
    /// Create a new ratio series.
    #[must_use]
    pub fn new(name: impl Into<RatioName>, unit: Unit, values: Vec<Option<f64>>) -> Self {
        Self { name: name.into(), unit, values }
    }

    /// Create a series with no missing values.
    #[must_use]
    pub fn dense(name: impl Into<RatioName>, unit: Unit, values: &[f64]) -> Self {
        Self::new(name, unit, values.iter().copied().map(Some).collect())
    }

    /// Number of periods covered (including missing slots).
    #[must_use]
    pub const fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the series covers no periods.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// All values in chronological order.
    #[must_use]
    pub fn values(&self) -> &[Option<f64>] {
        &self.values
    }

    /// Value at a period index; `None` if missing or out of range.
    #[must_use]
    pub fn value_at(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied().flatten()
    }

    /// The last chronological entry.
    ///
    /// Not guaranteed non-missing: a metric can stop being reported before
    /// the final period. Callers must handle `None`, e.g. by falling back
    /// to [`latest_known`](Self::latest_known) or a documented placeholder.
    #[must_use]
    pub fn latest(&self) -> Option<f64> {
        self.values.last().copied().flatten()
    }

    /// The most recent non-missing entry with its period index.
    #[must_use]
    pub fn latest_known(&self) -> Option<(usize, f64)> {
        self.values.iter().enumerate().rev().find_map(|(i, v)| v.map(|x| (i, x)))
    }

    /// Index of the first non-missing entry, if any.
    #[must_use]
    pub fn first_valid_index(&self) -> Option<usize> {
        self.values.iter().position(Option::is_some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(values: Vec<Option<f64>>) -> RatioSeries {
        RatioSeries::new("Current Ratio", Unit::Ratio, values)
    }

    #[test]
    fn dense_has_no_missing() {
        let s = RatioSeries::dense("ROE", Unit::Percent, &[1.0, 2.0, 3.0]);
        assert_eq!(s.len(), 3);
        assert_eq!(s.first_valid_index(), Some(0));
        assert_eq!(s.latest(), Some(3.0));
    }

    #[test]
    fn latest_is_last_slot_not_last_known() {
        let s = series(vec![Some(1.0), Some(2.0), None]);
        assert_eq!(s.latest(), None);
        assert_eq!(s.latest_known(), Some((1, 2.0)));
    }

    #[test]
    fn first_valid_index_skips_leading_gap() {
        let s = series(vec![None, None, Some(0.5), Some(0.6)]);
        assert_eq!(s.first_valid_index(), Some(2));
        assert_eq!(s.value_at(1), None);
        assert_eq!(s.value_at(2), Some(0.5));
    }

    #[test]
    fn all_missing_has_no_valid_index() {
        let s = series(vec![None, None]);
        assert_eq!(s.first_valid_index(), None);
        assert_eq!(s.latest_known(), None);
    }

    #[test]
    fn value_at_out_of_range_is_none() {
        let s = series(vec![Some(1.0)]);
        assert_eq!(s.value_at(5), None);
    }

    #[test]
    fn unit_display() {
        assert_eq!(Unit::Ratio.to_string(), "ratio");
        assert_eq!(Unit::Percent.to_string(), "percent");
        assert_eq!(Unit::Multiple.to_string(), "multiple");
        assert_eq!(Unit::Normalized.to_string(), "normalized");
    }
}
