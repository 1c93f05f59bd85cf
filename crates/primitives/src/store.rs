//! Read-only storage of company profiles.

use std::collections::BTreeMap;

use crate::{Company, CompanyProfile, RatioCategory, RatioSeries};

/// Errors that can occur during series lookup and profile construction.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Unknown (company, category, ratio name) triple.
    #[error("series not found: {company} / {category} / {name}")]
    NotFound {
        /// Company part of the key.
        company: String,
        /// Category part of the key.
        category: RatioCategory,
        /// Ratio name part of the key.
        name: String,
    },

    /// Unknown company.
    #[error("unknown company: {0}")]
    UnknownCompany(String),

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
}

/// Holds named, year-indexed ratio series per company.
///
/// Pure storage: lookups return references into immutable profiles, and no
/// computation happens here. Historical series are never mutated or
/// deleted once loaded.
#[derive(Debug, Clone, Default)]
pub struct SeriesStore {
    profiles: BTreeMap<Company, CompanyProfile>,
}

impl SeriesStore {
    /// Create an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self { profiles: BTreeMap::new() }
    }

    /// Add a company profile, replacing any previous profile for the
    /// same company.
    pub fn insert_profile(&mut self, profile: CompanyProfile) {
        self.profiles.insert(profile.company.clone(), profile);
    }

    /// Companies with a loaded profile, in sorted order.
    pub fn companies(&self) -> impl Iterator<Item = &Company> {
        self.profiles.keys()
    }

    /// Look up a company's profile.
    ///
    /// # Errors
    /// Returns `StoreError::UnknownCompany` if no profile is loaded.
    pub fn profile(&self, company: &Company) -> Result<&CompanyProfile, StoreError> {
        self.profiles.get(company).ok_or_else(|| StoreError::UnknownCompany(company.to_string()))
    }

    /// Look up a single series by its full key.
    ///
    /// # Errors
    /// Returns `StoreError::UnknownCompany` or `StoreError::NotFound` if
    /// any part of the triple is unknown.
    pub fn get(
        &self,
        company: &Company,
        category: RatioCategory,
        name: &str,
    ) -> Result<&RatioSeries, StoreError> {
        self.profile(company)?.series(category, name).ok_or_else(|| StoreError::NotFound {
            company: company.to_string(),
            category,
            name: name.to_string(),
        })
    }
}
