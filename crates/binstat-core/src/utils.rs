//! Utility functions for working with data slices

/// Sort data and return a new vector
///
/// Handles NaN values by placing them at the end.
///
/// # Examples
///
/// ```rust
/// use binstat_core::utils::sorted;
///
/// let data = vec![3.0, 1.0, 5.0, 2.0, 4.0];
/// assert_eq!(sorted(&data), vec![1.0, 2.0, 3.0, 4.0, 5.0]);
/// ```
pub fn sorted(data: &[f64]) -> Vec<f64> {
    let mut sorted = data.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    // total_cmp orders negative NaN first; move every NaN to the tail
    let (mut finite, nans): (Vec<f64>, Vec<f64>) = sorted.into_iter().partition(|x| !x.is_nan());
    finite.extend(nans);
    finite
}

/// Calculate the mean of a slice
///
/// Returns 0.0 for empty slices.
///
/// # Examples
///
/// ```rust
/// use binstat_core::utils::mean;
///
/// assert_eq!(mean(&[1.0, 2.0, 3.0]), 2.0);
/// assert_eq!(mean(&[]), 0.0);
/// ```
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let sum: f64 = data.iter().sum();
    sum / data.len() as f64
}

/// Population variance (divides by `n`, not `n - 1`)
///
/// Returns 0.0 for empty slices.
pub fn population_variance(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let m = mean(data);
    data.iter()
        .map(|&x| {
            let diff = x - m;
            diff * diff
        })
        .sum::<f64>()
        / data.len() as f64
}

/// Population standard deviation
///
/// # Examples
///
/// ```rust
/// use binstat_core::utils::population_std_dev;
///
/// let sd = population_std_dev(&[1.0, 3.0]);
/// assert_eq!(sd, 1.0);
/// ```
pub fn population_std_dev(data: &[f64]) -> f64 {
    population_variance(data).sqrt()
}

/// Weighted mean `Σ wᵢxᵢ / Σ wᵢ`
///
/// Returns `None` when the weights sum to zero.
pub fn weighted_mean(values: &[f64], weights: &[f64]) -> Option<f64> {
    debug_assert_eq!(values.len(), weights.len());
    let total: f64 = weights.iter().sum();
    if total == 0.0 {
        return None;
    }
    let sum: f64 = values.iter().zip(weights).map(|(x, w)| x * w).sum();
    Some(sum / total)
}

/// Weighted population variance around the weighted mean
///
/// Returns `None` when the weights sum to zero.
pub fn weighted_variance(values: &[f64], weights: &[f64]) -> Option<f64> {
    let m = weighted_mean(values, weights)?;
    let total: f64 = weights.iter().sum();
    let sum: f64 = values
        .iter()
        .zip(weights)
        .map(|(x, w)| {
            let diff = x - m;
            w * diff * diff
        })
        .sum();
    Some(sum / total)
}
