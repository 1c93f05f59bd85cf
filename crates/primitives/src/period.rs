//! Fiscal period type definitions.

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Label of a fiscal period, e.g. `"Mar-25"`.
///
/// Period labels are opaque: they are never parsed as dates. Ordering is
/// defined solely by position in a profile's canonical period list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Display, Serialize, Deserialize)]
pub struct FiscalPeriod(pub String);

impl FiscalPeriod {
    /// Create a new fiscal period label.
    #[must_use]
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the label as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for FiscalPeriod {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for FiscalPeriod {
    fn from(s: String) -> Self {
        Self(s)
    }
}
