//! Linear-interpolation quantile
//!
//! Same estimator as numpy's default (`method="linear"`): position
//! `h = (n - 1) * q` between order statistics, interpolated linearly.

/// Quantile `q` (0.0 - 1.0) of `values`. `None` for an empty slice.
///
/// NaN entries sort last (`total_cmp`); callers feed finite tree outputs.
pub fn quantile_linear(values: &[f64], q: f64) -> Option<f64> {
    if values.is_empty() {
        return None;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    Some(quantile_sorted(&sorted, q))
}

/// Same as [`quantile_linear`] on data that is already ascending and non-empty.
pub fn quantile_sorted(sorted: &[f64], q: f64) -> f64 {
    let last = sorted.len() - 1;
    let h = last as f64 * q.clamp(0.0, 1.0);
    let lo = h.floor() as usize;
    let hi = (lo + 1).min(last);
    let frac = h - lo as f64;

    sorted[lo] + frac * (sorted[hi] - sorted[lo])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn test_matches_numpy_linear() {
        // np.quantile([1, 2, 3, 4], [0.1, 0.9]) -> [1.3, 3.7]
        let v = [4.0, 1.0, 3.0, 2.0];
        assert!(close(quantile_linear(&v, 0.1).unwrap(), 1.3));
        assert!(close(quantile_linear(&v, 0.9).unwrap(), 3.7));

        // np.quantile([0.1, 0.3, 0.5], 0.9) -> 0.46
        assert!(close(quantile_linear(&[0.5, 0.1, 0.3], 0.9).unwrap(), 0.46));
    }

    #[test]
    fn test_endpoints_and_single_value() {
        let v = [2.0, 8.0, 5.0];
        assert!(close(quantile_linear(&v, 0.0).unwrap(), 2.0));
        assert!(close(quantile_linear(&v, 1.0).unwrap(), 8.0));
        assert!(close(quantile_linear(&v, 0.5).unwrap(), 5.0));
        assert!(close(quantile_linear(&[0.7], 0.1).unwrap(), 0.7));
    }

    #[test]
    fn test_empty() {
        assert_eq!(quantile_linear(&[], 0.5), None);
    }

    #[test]
    fn test_low_never_exceeds_high() {
        let v: Vec<f64> = (0..37).map(|i| ((i * 7919) % 101) as f64 / 13.0).collect();
        let lo = quantile_linear(&v, 0.1).unwrap();
        let hi = quantile_linear(&v, 0.9).unwrap();
        assert!(lo <= hi);
    }
}
