//! Quantile estimation over edge magnitudes.
//!
//! Uses linear interpolation between the closest ranks: the order statistic
//! at zero-indexed position `q · (n − 1)`.

use crate::{Error, Result};

/// Interpolated quantile of `values`, sorting the slice in place.
///
/// Fails when `q` lies outside `[0, 1]`, the slice is empty, or any value is
/// NaN or infinite.
pub fn quantile(values: &mut [f64], q: f64) -> Result<f64> {
    if !(0.0..=1.0).contains(&q) {
        return Err(Error::InvalidParameter(format!(
            "quantile must be between 0 and 1, got {q}"
        )));
    }
    if values.is_empty() {
        return Err(Error::InvalidParameter(
            "cannot compute quantile of an empty collection".into(),
        ));
    }
    if let Some(bad) = values.iter().find(|v| !v.is_finite()) {
        return Err(Error::InvalidParameter(format!(
            "cannot compute quantile over non-finite value {bad}"
        )));
    }
    values.sort_unstable_by(|a, b| a.total_cmp(b));
    Ok(quantile_sorted(values, q))
}

/// Quantile of an already-sorted, non-empty slice. `q` must be in `[0, 1]`.
fn quantile_sorted(sorted: &[f64], q: f64) -> f64 {
    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }
    let pos = q * (n - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = (lo + 1).min(n - 1);
    let frac = pos - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-12;

    #[test]
    fn test_quantile_four_values() {
        for (q, expected) in [(0.5, 2.5), (0.0, 1.0), (1.0, 4.0)] {
            let mut data = [1.0, 2.0, 3.0, 4.0];
            assert!((quantile(&mut data, q).unwrap() - expected).abs() < TOL);
        }
    }

    #[test]
    fn test_quantile_unsorted_input_sorted_in_place() {
        let mut data = [4.0, 1.0, 3.0, 2.0];
        assert!((quantile(&mut data, 0.25).unwrap() - 1.75).abs() < TOL);
        assert_eq!(data, [1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_quantile_single_element() {
        for q in [0.0, 0.3, 0.99, 1.0] {
            assert_eq!(quantile(&mut [7.5], q).unwrap(), 7.5);
        }
    }

    #[test]
    fn test_quantile_invalid_q() {
        assert!(matches!(quantile(&mut [1.0], -0.1), Err(Error::InvalidParameter(_))));
        assert!(matches!(quantile(&mut [1.0], 1.1), Err(Error::InvalidParameter(_))));
        assert!(matches!(quantile(&mut [1.0], f64::NAN), Err(Error::InvalidParameter(_))));
    }

    #[test]
    fn test_quantile_empty() {
        let err = quantile(&mut [], 0.5).unwrap_err();
        assert!(err.to_string().contains("empty"));
    }

    #[test]
    fn test_quantile_rejects_non_finite_values() {
        let mut with_nan = [1.0, f64::NAN, 3.0];
        assert!(matches!(quantile(&mut with_nan, 1.0), Err(Error::InvalidParameter(_))));
        let mut with_inf = [1.0, f64::INFINITY];
        assert!(matches!(quantile(&mut with_inf, 0.5), Err(Error::InvalidParameter(_))));
    }
}
