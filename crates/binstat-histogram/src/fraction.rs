//! Binomial fraction uncertainties

use binstat_core::{Error, Result};
use statrs::distribution::{Beta, ContinuousCDF};

/// Central confidence level of a one-sigma interval
pub const ONE_SIGMA: f64 = 0.682_689_492_137_086;

/// Clopper-Pearson (beta) interval for `k` successes out of `n` trials
///
/// Returns `(lower, upper)` bounds on the true fraction at the given central
/// confidence level.
pub fn clopper_pearson(k: u64, n: u64, confidence: f64) -> Result<(f64, f64)> {
    if n == 0 {
        return Err(Error::empty_input("clopper-pearson interval"));
    }
    if k > n {
        return Err(Error::InvalidParameter(format!(
            "successes ({k}) exceed trials ({n})"
        )));
    }
    if !(0.0..1.0).contains(&confidence) {
        return Err(Error::InvalidParameter(format!(
            "confidence {confidence} must be in [0, 1)"
        )));
    }

    let alpha = 1.0 - confidence;
    let (k_f, n_f) = (k as f64, n as f64);

    let lower = if k == 0 {
        0.0
    } else {
        beta(k_f, n_f - k_f + 1.0)?.inverse_cdf(alpha / 2.0)
    };
    let upper = if k == n {
        1.0
    } else {
        beta(k_f + 1.0, n_f - k_f)?.inverse_cdf(1.0 - alpha / 2.0)
    };

    Ok((lower, upper))
}

/// Symmetrized one-sigma error on the fraction `k / n`
///
/// The larger distance from the fraction to either Clopper-Pearson bound.
pub fn fraction_error(k: u64, n: u64) -> Result<f64> {
    let (lower, upper) = clopper_pearson(k, n, ONE_SIGMA)?;
    let fraction = k as f64 / n as f64;
    Ok((fraction - lower).abs().max((upper - fraction).abs()))
}

fn beta(shape_a: f64, shape_b: f64) -> Result<Beta> {
    Beta::new(shape_a, shape_b).map_err(|e| Error::Computation(format!("beta distribution: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_brackets_fraction() {
        let (lower, upper) = clopper_pearson(30, 100, ONE_SIGMA).unwrap();
        assert!(lower < 0.3 && 0.3 < upper);
        // Roughly binomial sigma sqrt(0.3 * 0.7 / 100) ~ 0.046 on each side
        assert!((0.3 - lower) > 0.03 && (0.3 - lower) < 0.07);
        assert!((upper - 0.3) > 0.03 && (upper - 0.3) < 0.07);
    }

    #[test]
    fn test_boundary_counts() {
        let (lower, upper) = clopper_pearson(0, 10, ONE_SIGMA).unwrap();
        assert_eq!(lower, 0.0);
        assert!(upper > 0.0 && upper < 1.0);

        let (lower, upper) = clopper_pearson(10, 10, ONE_SIGMA).unwrap();
        assert_eq!(upper, 1.0);
        assert!(lower > 0.0 && lower < 1.0);
    }

    #[test]
    fn test_invalid_arguments() {
        let err = clopper_pearson(0, 0, ONE_SIGMA).unwrap_err();
        assert!(matches!(err, Error::InsufficientData { .. }));
        assert!(err.to_string().contains("clopper-pearson interval"));
        assert!(matches!(clopper_pearson(5, 4, ONE_SIGMA), Err(Error::InvalidParameter(_))));
        assert!(matches!(clopper_pearson(1, 4, 1.0), Err(Error::InvalidParameter(_))));
    }

    #[test]
    fn test_fraction_error_shrinks_with_trials() {
        let small = fraction_error(5, 10).unwrap();
        let large = fraction_error(500, 1000).unwrap();
        assert!(large < small);
        assert!(large > 0.0);
    }
}
