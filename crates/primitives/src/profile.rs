//! Company profile type definitions.

use std::collections::BTreeMap;

use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::{FiscalPeriod, RatioName, RatioSeries, StoreError};

/// Company identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Display, Serialize, Deserialize)]
pub struct Company(pub String);

impl Company {
    /// Create a new company identifier.
    #[must_use]
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Company {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Company {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Category a ratio series belongs to within a profile.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum RatioCategory {
    /// Short-term payment capacity (current/quick/cash ratios).
    Liquidity,
    /// Capital structure and debt service (D/E, debt ratio, TIE).
    Solvency,
    /// Margins and returns (GPM, OPM, NPM, ROA, ROE).
    Profitability,
    /// 3-factor DuPont decomposition inputs plus reported ROE.
    Dupont3,
    /// 5-factor DuPont decomposition inputs plus reported ROE.
    Dupont5,
}

impl std::fmt::Display for RatioCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Liquidity => write!(f, "liquidity"),
            Self::Solvency => write!(f, "solvency"),
            Self::Profitability => write!(f, "profitability"),
            Self::Dupont3 => write!(f, "dupont_3"),
            Self::Dupont5 => write!(f, "dupont_5"),
        }
    }
}

/// All ratio series for one company, keyed by category and ratio name.
///
/// A profile is loaded once and read-only afterwards: every series shares
/// the profile's canonical period list, enforced at insertion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyProfile {
    /// Company this profile belongs to.
    pub company: Company,
    periods: Vec<FiscalPeriod>,
    categories: BTreeMap<RatioCategory, BTreeMap<RatioName, RatioSeries>>,
}

impl CompanyProfile {
    /// Create an empty profile with a canonical period list.
    #[must_use]
    pub fn new(company: impl Into<Company>, periods: Vec<FiscalPeriod>) -> Self {
        Self { company: company.into(), periods, categories: BTreeMap::new() }
    }

    /// Canonical period labels, oldest first.
    #[must_use]
    pub fn periods(&self) -> &[FiscalPeriod] {
        &self.periods
    }

    /// Number of canonical periods.
    #[must_use]
    pub const fn n_periods(&self) -> usize {
        self.periods.len()
    }

    /// Index of a period label in the canonical list.
    #[must_use]
    pub fn period_index(&self, period: &FiscalPeriod) -> Option<usize> {
        self.periods.iter().position(|p| p == period)
    }

    /// The last canonical period label.
    #[must_use]
    pub fn latest_period(&self) -> Option<&FiscalPeriod> {
        self.periods.last()
    }

    /// Insert a series under a category.
    ///
    /// # Errors
    /// Returns `StoreError::LengthMismatch` if the series does not cover
    /// exactly the canonical period list.
    pub fn insert_series(
        &mut self,
        category: RatioCategory,
        series: RatioSeries,
    ) -> Result<(), StoreError> {
        if series.len() != self.periods.len() {
            return Err(StoreError::LengthMismatch {
                name: series.name.to_string(),
                expected: self.periods.len(),
                actual: series.len(),
            });
        }
        self.categories.entry(category).or_default().insert(series.name.clone(), series);
        Ok(())
    }

    /// Look up a series by category and ratio name.
    #[must_use]
    pub fn series(&self, category: RatioCategory, name: &str) -> Option<&RatioSeries> {
        self.categories.get(&category)?.get(&RatioName::new(name))
    }

    /// All series under a category, keyed by ratio name.
    #[must_use]
    pub fn category(&self, category: RatioCategory) -> Option<&BTreeMap<RatioName, RatioSeries>> {
        self.categories.get(&category)
    }
}
