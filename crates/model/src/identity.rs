//! Declarative DuPont identity definitions.

use ratiolens_primitives::RatioCategory;

use crate::ModelError;

/// Name of the reported ROE series inside a DuPont category.
pub const ROE_SERIES: &str = "ROE";

/// A DuPont factorization: `ROE = factor_1 x factor_2 x ... x factor_n`.
///
/// Pure specification, no lifecycle: the two canonical variants are the
/// constants [`DUPONT_3`] and [`DUPONT_5`]. Factor order is meaningful
/// and fixed; sequential attribution depends on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DuPontIdentity {
    /// Identity name used in reports.
    pub name: &'static str,
    factors: &'static [&'static str],
    category: RatioCategory,
}

/// 3-factor identity: margin, efficiency, leverage.
pub const DUPONT_3: DuPontIdentity = DuPontIdentity {
    name: "3-factor",
    factors: &["Net Profit Margin", "Asset Turnover", "Equity Multiplier"],
    category: RatioCategory::Dupont3,
};

/// 5-factor identity: the 3-factor margin split into tax, interest and
/// operating components, with leverage measured as Financial Leverage.
pub const DUPONT_5: DuPontIdentity = DuPontIdentity {
    name: "5-factor",
    factors: &[
        "Tax Burden",
        "Interest Burden",
        "Operating Margin",
        "Asset Turnover",
        "Financial Leverage",
    ],
    category: RatioCategory::Dupont5,
};

impl DuPontIdentity {
    /// Ordered factor names.
    #[must_use]
    pub const fn factor_names(&self) -> &'static [&'static str] {
        self.factors
    }

    /// Number of factors.
    #[must_use]
    pub const fn n_factors(&self) -> usize {
        self.factors.len()
    }

    /// Profile category holding this identity's factor series.
    #[must_use]
    pub const fn category(&self) -> RatioCategory {
        self.category
    }

    /// Aggregate factor values into ROE: the plain product.
    ///
    /// # Errors
    /// Returns `ModelError::FactorCountMismatch` if `values` does not
    /// supply exactly one value per factor.
    pub fn product(&self, values: &[f64]) -> Result<f64, ModelError> {
        if values.len() != self.factors.len() {
            return Err(ModelError::FactorCountMismatch {
                identity: self.name,
                expected: self.factors.len(),
                actual: values.len(),
            });
        }
        Ok(values.iter().product())
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn canonical_factor_orders() {
        assert_eq!(DUPONT_3.n_factors(), 3);
        assert_eq!(DUPONT_3.factor_names()[0], "Net Profit Margin");
        assert_eq!(DUPONT_3.factor_names()[2], "Equity Multiplier");
        assert_eq!(DUPONT_3.category(), RatioCategory::Dupont3);

        assert_eq!(DUPONT_5.n_factors(), 5);
        assert_eq!(DUPONT_5.factor_names()[1], "Interest Burden");
        assert_eq!(DUPONT_5.category(), RatioCategory::Dupont5);
    }

    #[test]
    fn product_aggregates() {
        // Mar-25 values from a 3-factor table.
        let roe = DUPONT_3.product(&[0.126069, 0.481876, 2.866505]).unwrap();
        assert_relative_eq!(roe, 0.174139, epsilon = 1e-4);
    }

    #[test]
    fn product_rejects_wrong_arity() {
        let err = DUPONT_5.product(&[1.0, 2.0]).unwrap_err();
        assert!(matches!(
            err,
            ModelError::FactorCountMismatch { expected: 5, actual: 2, .. }
        ));
    }
}
