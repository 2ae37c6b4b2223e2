use libm::sqrt;

use crate::error::StatsError;

/// Arithmetic mean of a slice of values.
pub fn mean(values: &[f64]) -> Result<f64, StatsError> {
    if values.is_empty() {
        return Err(StatsError::Empty);
    }
    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

/// Sample variance using Bessel's correction (divides by `n - 1`).
///
/// At least two values are required; a single value has no spread to
/// estimate from.
pub fn variance(values: &[f64]) -> Result<f64, StatsError> {
    let n = values.len();
    if n < 2 {
        return Err(StatsError::TooFewSamples { needed: 2, found: n });
    }

    let mean = mean(values)?;
    let squared_deviations = values
        .iter()
        .map(|value| {
            let diff = value - mean;
            diff * diff
        })
        .sum::<f64>();

    Ok(squared_deviations / (n - 1) as f64)
}

/// Square root of [`variance`], with the same failure conditions.
pub fn standard_deviation(values: &[f64]) -> Result<f64, StatsError> {
    variance(values).map(sqrt)
}

/// Median of the values. Sorts the slice in place.
///
/// Even lengths average the two central elements.
pub fn median(values: &mut [f64]) -> Result<f64, StatsError> {
    if values.is_empty() {
        return Err(StatsError::Empty);
    }

    values.sort_unstable_by(f64::total_cmp);
    let mid = values.len() / 2;

    if values.len() % 2 == 0 {
        Ok((values[mid - 1] + values[mid]) / 2.0)
    } else {
        Ok(values[mid])
    }
}

/// Largest value in the slice.
pub fn max(values: &[f64]) -> Result<f64, StatsError> {
    values
        .iter()
        .copied()
        .reduce(f64::max)
        .ok_or(StatsError::Empty)
}

/// Smallest value in the slice.
pub fn min(values: &[f64]) -> Result<f64, StatsError> {
    values
        .iter()
        .copied()
        .reduce(f64::min)
        .ok_or(StatsError::Empty)
}
