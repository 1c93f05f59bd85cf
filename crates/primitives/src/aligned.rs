//! Aligned series window types.

use ndarray::Array1;

use crate::{FiscalPeriod, RatioName, Unit};

/// A gap-free window of one series, produced by alignment.
///
/// Unlike [`RatioSeries`](crate::RatioSeries) there are no missing slots;
/// values are dense and ready for numeric operations.
#[derive(Debug, Clone, PartialEq)]
pub struct AlignedSeries {
    /// Ratio name.
    pub name: RatioName,
    /// Unit of the values.
    pub unit: Unit,
    /// Dense values (n_periods,).
    pub values: Array1<f64>,
}

impl AlignedSeries {
    /// Create a new aligned series.
    #[must_use]
    pub const fn new(name: RatioName, unit: Unit, values: Array1<f64>) -> Self {
        Self { name, unit, values }
    }

    /// Number of periods in the window.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the window is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// A group of series aligned to a common start period.
///
/// Invariant: every member has `values.len() == periods.len()`, and the
/// period labels are the canonical labels sliced from `start_index`.
#[derive(Debug, Clone, PartialEq)]
pub struct AlignedGroup {
    /// Index into the canonical period list where the window starts.
    pub start_index: usize,
    /// Period labels of the window, shared by all members.
    pub periods: Vec<FiscalPeriod>,
    /// Aligned member series.
    pub series: Vec<AlignedSeries>,
}

impl AlignedGroup {
    /// Number of periods in the common window.
    #[must_use]
    pub const fn n_periods(&self) -> usize {
        self.periods.len()
    }

    /// Number of member series.
    #[must_use]
    pub const fn n_series(&self) -> usize {
        self.series.len()
    }

    /// Look up a member by ratio name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&AlignedSeries> {
        self.series.iter().find(|s| s.name.as_str() == name)
    }
}

#[cfg(test)]
mod tests {
    use ndarray::array;

    use super::*;

    #[test]
    fn group_lookup_by_name() {
        let group = AlignedGroup {
            start_index: 1,
            periods: vec!["Mar-18".into(), "Mar-19".into()],
            series: vec![
                AlignedSeries::new("ROE".into(), Unit::Ratio, array![0.1, 0.2]),
                AlignedSeries::new("Asset Turnover".into(), Unit::Multiple, array![0.4, 0.5]),
            ],
        };

        assert_eq!(group.n_periods(), 2);
        assert_eq!(group.n_series(), 2);
        assert!(group.get("ROE").is_some());
        assert!(group.get("Equity Multiplier").is_none());
    }
}
