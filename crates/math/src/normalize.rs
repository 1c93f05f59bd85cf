//! Min-max normalization for cross-metric comparison.

use ndarray::Array1;

use crate::MathError;

/// Extreme values of a window.
///
/// # Errors
/// Returns `MathError::EmptyData` for an empty window and
/// `MathError::NumericalInstability` if any value is NaN or infinite.
pub fn min_max(data: &Array1<f64>) -> Result<(f64, f64), MathError> {
    if data.is_empty() {
        return Err(MathError::EmptyData);
    }
    if let Some(bad) = data.iter().find(|x| !x.is_finite()) {
        return Err(MathError::NumericalInstability(format!("non-finite value {bad}")));
    }

    let min = data.iter().copied().fold(f64::INFINITY, f64::min);
    let max = data.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    Ok((min, max))
}

/// Rescale a window onto `[0, 1]`.
///
/// `out[i] = (data[i] - min) / (max - min)`; the input extremes map
/// exactly to 0 and 1, and the result is invariant under positive affine
/// rescaling of the input.
///
/// # Errors
/// Returns `MathError::DegenerateRange` for a constant window: the
/// quotient is undefined there, and refusing is preferable to NaN or an
/// arbitrary midpoint. Empty and non-finite input fail as in [`min_max`].
pub fn min_max_normalize(data: &Array1<f64>) -> Result<Array1<f64>, MathError> {
    let (min, max) = min_max(data)?;
    let range = max - min;
    if range == 0.0 {
        return Err(MathError::DegenerateRange(min));
    }

    Ok(data.mapv(|x| (x - min) / range))
}
