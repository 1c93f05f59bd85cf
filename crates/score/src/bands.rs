//! Threshold band tables for gauge-style health scoring.

use serde::{Deserialize, Deserializer, Serialize};

use crate::ScoreError;

/// One configured band: raw values in `[lower, upper)` map to a
/// sub-score and a qualitative label (typically a gauge color).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBand {
    /// Inclusive lower bound.
    pub lower: f64,
    /// Exclusive upper bound.
    pub upper: f64,
    /// Numeric sub-score for the band.
    pub score: f64,
    /// Qualitative label, e.g. `"orange"`.
    pub label: String,
}

impl ScoreBand {
    /// Create a new band.
    #[must_use]
    pub fn new(lower: f64, upper: f64, score: f64, label: impl Into<String>) -> Self {
        Self { lower, upper, score, label: label.into() }
    }
}

/// An ordered, contiguous table of score bands for one metric.
///
/// Validated once at construction; [`score`](Self::score) runs on the
/// assumption that the bands are ascending, non-overlapping and gap-free,
/// and never re-checks.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BandTable {
    bands: Vec<ScoreBand>,
}

impl BandTable {
    /// Build a table from bands, validating the configuration.
    ///
    /// # Errors
    /// Returns `ScoreError::InvalidBandTable` if the table is empty, a
    /// bound is non-finite or reversed, or consecutive bands leave a gap
    /// or overlap.
    pub fn new(bands: Vec<ScoreBand>) -> Result<Self, ScoreError> {
        if bands.is_empty() {
            return Err(ScoreError::InvalidBandTable("no bands configured".to_string()));
        }
        for band in &bands {
            if !band.lower.is_finite() || !band.upper.is_finite() {
                return Err(ScoreError::InvalidBandTable(format!(
                    "non-finite bounds in band \"{}\"",
                    band.label
                )));
            }
            if band.lower >= band.upper {
                return Err(ScoreError::InvalidBandTable(format!(
                    "reversed bounds in band \"{}\": [{}, {})",
                    band.label, band.lower, band.upper
                )));
            }
        }
        for pair in bands.windows(2) {
            if pair[0].upper != pair[1].lower {
                return Err(ScoreError::InvalidBandTable(format!(
                    "gap or overlap between \"{}\" and \"{}\" at {} vs {}",
                    pair[0].label, pair[1].label, pair[0].upper, pair[1].lower
                )));
            }
        }

        Ok(Self { bands })
    }

    /// The configured bands, ascending.
    #[must_use]
    pub fn bands(&self) -> &[ScoreBand] {
        &self.bands
    }

    /// The covered domain `[lower, upper)`.
    #[must_use]
    pub fn domain(&self) -> (f64, f64) {
        (self.bands[0].lower, self.bands[self.bands.len() - 1].upper)
    }

    /// Map a raw value to its `(sub_score, label)`.
    ///
    /// `value` must be finite. Values outside the configured domain clamp
    /// to the nearest boundary band: health scoring degrades gracefully
    /// for outliers instead of erroring mid-dashboard.
    #[must_use]
    pub fn score(&self, value: f64) -> (f64, &str) {
        debug_assert!(value.is_finite());

        for band in &self.bands {
            if value >= band.lower && value < band.upper {
                return (band.score, &band.label);
            }
        }
        // Outside the union: clamp to the nearest end.
        let band =
            if value < self.bands[0].lower { &self.bands[0] } else { &self.bands[self.bands.len() - 1] };
        (band.score, &band.label)
    }
}

impl TryFrom<Vec<ScoreBand>> for BandTable {
    type Error = ScoreError;

    fn try_from(bands: Vec<ScoreBand>) -> Result<Self, Self::Error> {
        Self::new(bands)
    }
}

// Deserialization routes through `new` so tables loaded from config data
// cannot bypass validation.
impl<'de> Deserialize<'de> for BandTable {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Repr {
            bands: Vec<ScoreBand>,
        }

        let repr = Repr::deserialize(deserializer)?;
        Self::new(repr.bands).map_err(serde::de::Error::custom)
    }
}
