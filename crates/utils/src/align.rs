//! Leading-gap alignment across related series.

use ndarray::Array1;
use ratiolens_primitives::{AlignedGroup, AlignedSeries, FiscalPeriod, RatioSeries};

use crate::AlignError;

/// Trim leading missing values consistently across a group of series.
///
/// Each series' first non-missing index is computed; the maximum of those
/// becomes the common start, and every series plus the period labels is
/// sliced from there. All returned series have identical length and share
/// the sliced labels.
///
/// Missing values are assumed to form a contiguous prefix (a metric that
/// started being reported late). That assumption is enforced, not trusted:
/// a gap inside the window fails with `AlignError::IrregularMissing`
/// instead of producing a silently misaligned chart.
///
/// # Errors
/// - `AlignError::LengthMismatch` if a series does not cover `periods`
/// - `AlignError::AllMissing` if a series has no value at all
/// - `AlignError::IrregularMissing` on a non-leading gap
pub fn align_leading_gaps(
    periods: &[FiscalPeriod],
    series: &[RatioSeries],
) -> Result<AlignedGroup, AlignError> {
    let mut start = 0;
    for s in series {
        if s.len() != periods.len() {
            return Err(AlignError::LengthMismatch {
                name: s.name.to_string(),
                expected: periods.len(),
                actual: s.len(),
            });
        }
        let first = s
            .first_valid_index()
            .ok_or_else(|| AlignError::AllMissing { name: s.name.to_string() })?;
        start = start.max(first);
    }

    let mut aligned = Vec::with_capacity(series.len());
    for s in series {
        let mut window = Vec::with_capacity(periods.len() - start);
        for (offset, slot) in s.values()[start..].iter().enumerate() {
            match slot {
                Some(v) => window.push(*v),
                None => {
                    return Err(AlignError::IrregularMissing {
                        name: s.name.to_string(),
                        period: periods[start + offset].to_string(),
                    });
                }
            }
        }
        aligned.push(AlignedSeries::new(s.name.clone(), s.unit, Array1::from_vec(window)));
    }

    Ok(AlignedGroup { start_index: start, periods: periods[start..].to_vec(), series: aligned })
}
