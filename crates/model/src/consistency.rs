//! DuPont identity consistency checking.

use ratiolens_primitives::{CompanyProfile, FiscalPeriod};

use crate::{DuPontIdentity, ModelError, ROE_SERIES};

/// Default relative tolerance for identity verification.
pub const DEFAULT_TOLERANCE: f64 = 1e-3;

/// One period where the factor product disagrees with the reported ROE.
///
/// Informational, not an error: factor ratios and reported ROE are
/// typically rounded independently at the source, so small disagreements
/// are expected. A large one points at inconsistent source data.
#[derive(Debug, Clone, PartialEq)]
pub struct ConsistencyWarning {
    /// Period with the mismatch.
    pub period: FiscalPeriod,
    /// ROE as reported in the profile.
    pub reported: f64,
    /// ROE recomputed as the factor product.
    pub derived: f64,
    /// `|derived - reported| / |reported|` (absolute difference when the
    /// reported value is zero).
    pub relative_error: f64,
}

impl std::fmt::Display for ConsistencyWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: reported ROE {:.6} vs derived {:.6} (relative error {:.2e})",
            self.period, self.reported, self.derived, self.relative_error
        )
    }
}

/// Verify an identity against a profile, period by period.
///
/// For every period where the reported ROE and all factors are present,
/// the factor product is recomputed and compared within `tolerance`.
/// Periods with any missing input are skipped: a gap is not a mismatch.
/// Warnings are collected and returned alongside-style, never thrown.
///
/// # Errors
/// Returns `ModelError::MissingSeries` if the profile lacks the reported
/// ROE series or any factor series for this identity.
pub fn check_identity(
    profile: &CompanyProfile,
    identity: &DuPontIdentity,
    tolerance: f64,
) -> Result<Vec<ConsistencyWarning>, ModelError> {
    let category = identity.category();
    let roe = profile
        .series(category, ROE_SERIES)
        .ok_or_else(|| ModelError::MissingSeries(ROE_SERIES.to_string()))?;

    let mut factor_series = Vec::with_capacity(identity.n_factors());
    for name in identity.factor_names() {
        let series = profile
            .series(category, name)
            .ok_or_else(|| ModelError::MissingSeries((*name).to_string()))?;
        factor_series.push(series);
    }

    let mut warnings = Vec::new();
    for (index, period) in profile.periods().iter().enumerate() {
        let Some(reported) = roe.value_at(index) else { continue };
        let values: Vec<f64> =
            factor_series.iter().filter_map(|s| s.value_at(index)).collect();
        if values.len() != factor_series.len() {
            continue;
        }

        let derived = identity.product(&values)?;
        let relative_error = if reported.abs() > f64::EPSILON {
            ((derived - reported) / reported).abs()
        } else {
            (derived - reported).abs()
        };
        if relative_error > tolerance {
            warnings.push(ConsistencyWarning {
                period: period.clone(),
                reported,
                derived,
                relative_error,
            });
        }
    }

    Ok(warnings)
}

#[cfg(test)]
mod tests {
    use ratiolens_primitives::{RatioCategory, RatioSeries, Unit};

    use crate::DUPONT_3;

    use super::*;

    fn profile(npm: Vec<Option<f64>>, at: Vec<Option<f64>>, em: Vec<Option<f64>>, roe: Vec<Option<f64>>) -> CompanyProfile {
        let n = npm.len();
        let periods = (0..n).map(|i| format!("Mar-{}", 20 + i).into()).collect();
        let mut profile = CompanyProfile::new("Apex Power", periods);
        let cat = RatioCategory::Dupont3;
        profile.insert_series(cat, RatioSeries::new("Net Profit Margin", Unit::Ratio, npm)).unwrap();
        profile.insert_series(cat, RatioSeries::new("Asset Turnover", Unit::Multiple, at)).unwrap();
        profile.insert_series(cat, RatioSeries::new("Equity Multiplier", Unit::Multiple, em)).unwrap();
        profile.insert_series(cat, RatioSeries::new("ROE", Unit::Ratio, roe)).unwrap();
        profile
    }

    #[test]
    fn consistent_profile_yields_no_warnings() {
        let profile = profile(
            vec![Some(0.10), Some(0.12)],
            vec![Some(0.45), Some(0.48)],
            vec![Some(3.0), Some(2.9)],
            vec![Some(0.10 * 0.45 * 3.0), Some(0.12 * 0.48 * 2.9)],
        );

        let warnings = check_identity(&profile, &DUPONT_3, DEFAULT_TOLERANCE).unwrap();
        assert!(warnings.is_empty());
    }

    #[test]
    fn rounded_roe_within_tolerance_passes() {
        // Reported ROE rounded to 4 decimals: inside the 1e-3 band.
        let profile = profile(
            vec![Some(0.126069)],
            vec![Some(0.481876)],
            vec![Some(2.866505)],
            vec![Some(0.1741)],
        );

        let warnings = check_identity(&profile, &DUPONT_3, DEFAULT_TOLERANCE).unwrap();
        assert!(warnings.is_empty());
    }

    #[test]
    fn mismatch_is_reported_not_thrown() {
        let profile = profile(
            vec![Some(0.10), Some(0.12)],
            vec![Some(0.45), Some(0.48)],
            vec![Some(3.0), Some(2.9)],
            vec![Some(0.135), Some(0.20)], // second period is off by ~20%
        );

        let warnings = check_identity(&profile, &DUPONT_3, DEFAULT_TOLERANCE).unwrap();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].period, "Mar-21".into());
        assert!(warnings[0].relative_error > 0.1);
        assert!(warnings[0].to_string().contains("Mar-21"));
    }

    #[test]
    fn periods_with_gaps_are_skipped() {
        // First period has no Asset Turnover and a bogus reported ROE;
        // a gap is not a mismatch.
        let profile = profile(
            vec![Some(0.10), Some(0.12)],
            vec![None, Some(0.48)],
            vec![Some(3.0), Some(2.9)],
            vec![Some(99.0), Some(0.12 * 0.48 * 2.9)],
        );

        let warnings = check_identity(&profile, &DUPONT_3, DEFAULT_TOLERANCE).unwrap();
        assert!(warnings.is_empty());
    }

    #[test]
    fn zero_reported_roe_uses_absolute_difference() {
        let profile = profile(
            vec![Some(0.0)],
            vec![Some(0.48)],
            vec![Some(2.9)],
            vec![Some(0.0)],
        );

        let warnings = check_identity(&profile, &DUPONT_3, DEFAULT_TOLERANCE).unwrap();
        assert!(warnings.is_empty());
    }

    #[test]
    fn five_factor_product_matches_reported_roe() {
        use crate::DUPONT_5;

        let mut profile = CompanyProfile::new("Apex Power", vec!["Mar-24".into(), "Mar-25".into()]);
        let cat = RatioCategory::Dupont5;
        let columns = [
            ("Tax Burden", [0.8880, 0.8665]),
            ("Interest Burden", [0.3228, 0.3888]),
            ("Operating Margin", [0.3544, 0.3743]),
            ("Asset Turnover", [0.4449, 0.4819]),
            ("Financial Leverage", [3.3459, 3.0197]),
        ];
        for (name, values) in columns {
            profile
                .insert_series(cat, RatioSeries::dense(name, Unit::Ratio, &values))
                .unwrap();
        }
        // Reported ROE rounded to 4 decimals from the factor product.
        profile
            .insert_series(cat, RatioSeries::dense("ROE", Unit::Ratio, &[0.1512, 0.1835]))
            .unwrap();

        let warnings = check_identity(&profile, &DUPONT_5, DEFAULT_TOLERANCE).unwrap();
        assert!(warnings.is_empty());
    }

    #[test]
    fn absent_factor_series_is_an_error() {
        let periods = vec!["Mar-25".into()];
        let mut profile = CompanyProfile::new("Apex Power", periods);
        profile
            .insert_series(
                RatioCategory::Dupont3,
                RatioSeries::dense("ROE", Unit::Ratio, &[0.17]),
            )
            .unwrap();

        let err = check_identity(&profile, &DUPONT_3, DEFAULT_TOLERANCE).unwrap_err();
        assert!(matches!(err, ModelError::MissingSeries(name) if name == "Net Profit Margin"));
    }
}
