//! Series-level normalization wrappers for chart preparation.

use ratiolens_math::min_max_normalize;
use ratiolens_primitives::{AlignedGroup, AlignedSeries, Unit};

use crate::AlignError;

/// Min-max rescale one aligned series onto `[0, 1]`.
///
/// The output is tagged `Unit::Normalized`; the original unit is gone and
/// the values are only meaningful relative to each other.
///
/// # Errors
/// Returns `AlignError::Math` wrapping `DegenerateRange` for a flat
/// series; callers comparing several metrics typically omit the flat one.
pub fn normalize_series(series: &AlignedSeries) -> Result<AlignedSeries, AlignError> {
    let values = min_max_normalize(&series.values)?;
    Ok(AlignedSeries::new(series.name.clone(), Unit::Normalized, values))
}

/// Min-max rescale every member of an aligned group, per series.
///
/// Each series is rescaled against its own range, which is what puts
/// heterogeneous metrics (a margin near 0.1, a multiplier near 3.0) onto
/// one comparable axis.
///
/// # Errors
/// Fails on the first flat member; the group is normalized all-or-nothing
/// so a chart never silently drops a line.
pub fn normalize_group(group: &AlignedGroup) -> Result<AlignedGroup, AlignError> {
    let series =
        group.series.iter().map(normalize_series).collect::<Result<Vec<_>, AlignError>>()?;

    Ok(AlignedGroup { start_index: group.start_index, periods: group.periods.clone(), series })
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use ndarray::array;
    use ratiolens_primitives::{AlignedGroup, AlignedSeries, Unit};

    use super::*;

    #[test]
    fn normalized_series_is_tagged() {
        let s = AlignedSeries::new("ROE".into(), Unit::Ratio, array![0.05, 0.27, 0.17]);
        let n = normalize_series(&s).unwrap();

        assert_eq!(n.unit, Unit::Normalized);
        assert_eq!(n.name, s.name);
        assert_relative_eq!(n.values[0], 0.0);
        assert_relative_eq!(n.values[1], 1.0);
    }

    #[test]
    fn group_members_rescale_independently() {
        let group = AlignedGroup {
            start_index: 0,
            periods: vec!["Mar-24".into(), "Mar-25".into()],
            series: vec![
                AlignedSeries::new("NPM".into(), Unit::Ratio, array![0.10, 0.13]),
                AlignedSeries::new("EM".into(), Unit::Multiple, array![3.2, 2.9]),
            ],
        };

        let normed = normalize_group(&group).unwrap();
        // Both series span the full unit interval regardless of raw scale.
        for s in &normed.series {
            assert_relative_eq!(s.values.iter().copied().fold(f64::INFINITY, f64::min), 0.0);
            assert_relative_eq!(s.values.iter().copied().fold(f64::NEG_INFINITY, f64::max), 1.0);
        }
        assert_eq!(normed.periods, group.periods);
    }

    #[test]
    fn flat_member_fails_whole_group() {
        let group = AlignedGroup {
            start_index: 0,
            periods: vec!["Mar-24".into(), "Mar-25".into()],
            series: vec![
                AlignedSeries::new("NPM".into(), Unit::Ratio, array![0.10, 0.13]),
                AlignedSeries::new("Debt Ratio".into(), Unit::Ratio, array![0.39, 0.39]),
            ],
        };

        assert!(normalize_group(&group).is_err());
    }
}
