//! Composite score aggregation.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

use crate::ScoreError;

/// Tolerance on the weight sum.
pub const WEIGHT_EPSILON: f64 = 1e-6;

/// Caller-supplied weights over scoring categories (liquidity, solvency,
/// profitability, efficiency, stability, ...).
///
/// Validated once at construction: weights must be finite, non-negative
/// and sum to `1 ± WEIGHT_EPSILON`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryWeights {
    weights: Vec<(String, f64)>,
}

impl CategoryWeights {
    /// Build weights, validating the configuration.
    ///
    /// # Errors
    /// Returns `ScoreError::InvalidWeights` on an empty set, a duplicate
    /// category, a negative or non-finite weight, or a sum off unity.
    pub fn new(
        weights: impl IntoIterator<Item = (impl Into<String>, f64)>,
    ) -> Result<Self, ScoreError> {
        let weights: Vec<(String, f64)> =
            weights.into_iter().map(|(c, w)| (c.into(), w)).collect();

        if weights.is_empty() {
            return Err(ScoreError::InvalidWeights("no categories configured".to_string()));
        }
        for (category, weight) in &weights {
            if !weight.is_finite() || *weight < 0.0 {
                return Err(ScoreError::InvalidWeights(format!(
                    "weight for {category} must be finite and non-negative, got {weight}"
                )));
            }
            if weights.iter().filter(|(c, _)| c == category).count() > 1 {
                return Err(ScoreError::InvalidWeights(format!(
                    "duplicate category: {category}"
                )));
            }
        }
        let sum: f64 = weights.iter().map(|(_, w)| w).sum();
        if (sum - 1.0).abs() > WEIGHT_EPSILON {
            return Err(ScoreError::InvalidWeights(format!("weights sum to {sum}, expected 1")));
        }

        Ok(Self { weights })
    }

    /// Weighted categories in configuration order.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.weights.iter().map(|(c, _)| c.as_str())
    }

    /// Weighted mean of per-category sub-scores.
    ///
    /// # Errors
    /// Returns `ScoreError::MissingSubScore` if a weighted category has
    /// no sub-score; the remaining weights are never silently
    /// renormalized over a partial set.
    pub fn composite(&self, sub_scores: &BTreeMap<String, f64>) -> Result<f64, ScoreError> {
        let mut total = 0.0;
        for (category, weight) in &self.weights {
            let score = sub_scores
                .get(category)
                .ok_or_else(|| ScoreError::MissingSubScore(category.clone()))?;
            total += weight * score;
        }
        Ok(total)
    }
}

// Same validation path for configuration loaded from data.
impl<'de> Deserialize<'de> for CategoryWeights {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Repr {
            weights: Vec<(String, f64)>,
        }

        let repr = Repr::deserialize(deserializer)?;
        Self::new(repr.weights).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn sub_scores(pairs: &[(&str, f64)]) -> BTreeMap<String, f64> {
        pairs.iter().map(|(c, s)| ((*c).to_string(), *s)).collect()
    }

    #[test]
    fn composite_is_the_weighted_mean() {
        let weights = CategoryWeights::new([
            ("liquidity", 0.3),
            ("solvency", 0.3),
            ("profitability", 0.4),
        ])
        .unwrap();
        let scores =
            sub_scores(&[("liquidity", 6.0), ("solvency", 7.5), ("profitability", 6.5)]);

        let composite = weights.composite(&scores).unwrap();
        assert_relative_eq!(composite, 0.3 * 6.0 + 0.3 * 7.5 + 0.4 * 6.5, epsilon = 1e-12);
    }

    #[test]
    fn uniform_sub_scores_pass_through() {
        let weights = CategoryWeights::new([
            ("liquidity", 0.2),
            ("solvency", 0.2),
            ("profitability", 0.2),
            ("efficiency", 0.2),
            ("stability", 0.2),
        ])
        .unwrap();
        let scores = sub_scores(&[
            ("liquidity", 8.08),
            ("solvency", 8.08),
            ("profitability", 8.08),
            ("efficiency", 8.08),
            ("stability", 8.08),
        ]);

        assert_relative_eq!(weights.composite(&scores).unwrap(), 8.08, epsilon = 1e-12);
    }

    #[test]
    fn missing_category_is_an_error() {
        let weights = CategoryWeights::new([("liquidity", 0.5), ("solvency", 0.5)]).unwrap();
        let scores = sub_scores(&[("liquidity", 6.0)]);

        let err = weights.composite(&scores).unwrap_err();
        assert!(matches!(err, ScoreError::MissingSubScore(c) if c == "solvency"));
    }

    #[test]
    fn sum_off_unity_is_rejected() {
        let err = CategoryWeights::new([("liquidity", 0.5), ("solvency", 0.6)]).unwrap_err();
        assert!(err.to_string().contains("sum"));
    }

    #[test]
    fn sum_within_epsilon_is_accepted() {
        assert!(CategoryWeights::new([("liquidity", 0.5), ("solvency", 0.5 + 1e-9)]).is_ok());
    }

    #[test]
    fn negative_weight_is_rejected() {
        assert!(CategoryWeights::new([("liquidity", -0.2), ("solvency", 1.2)]).is_err());
    }

    #[test]
    fn duplicate_category_is_rejected() {
        assert!(CategoryWeights::new([("liquidity", 0.5), ("liquidity", 0.5)]).is_err());
    }

    #[test]
    fn empty_weights_are_rejected() {
        assert!(CategoryWeights::new(Vec::<(String, f64)>::new()).is_err());
    }

    #[test]
    fn deserialization_validates() {
        let bad = r#"{"weights": [["liquidity", 0.9], ["solvency", 0.9]]}"#;
        assert!(serde_json::from_str::<CategoryWeights>(bad).is_err());

        let good = r#"{"weights": [["liquidity", 0.4], ["solvency", 0.6]]}"#;
        let weights: CategoryWeights = serde_json::from_str(good).unwrap();
        assert_eq!(weights.categories().count(), 2);
    }
}
