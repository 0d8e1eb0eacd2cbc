//! Descriptive statistics foundation.
//!
//! Small set of numerically careful primitives used by the metric modules.
//! Accumulation goes through compensated (Neumaier) summation so the error
//! stays O(ε) regardless of input length, and variance uses a two-pass
//! centered formula to avoid the catastrophic cancellation of the naive
//! `E[X²] − (E[X])²` form.
//!
//! These are low-level building blocks: invalid input (empty slices,
//! NaN/∞) yields `None`, and the caller decides how to surface that.

/// Neumaier compensated summation.
///
/// Improved Kahan variant that also captures low-order bits when the addend
/// is larger in magnitude than the running sum.
///
/// # References
///
/// Neumaier (1974). "Rundungsfehleranalyse einiger Verfahren zur Summation
/// endlicher Summen". ZAMM, 54(1), 39–51.
pub fn kahan_sum(data: &[f64]) -> f64 {
    let mut sum = 0.0_f64;
    let mut c = 0.0_f64;
    for &x in data {
        let t = sum + x;
        if sum.abs() >= x.abs() {
            c += (sum - t) + x;
        } else {
            c += (x - t) + sum;
        }
        sum = t;
    }
    sum + c
}

/// Arithmetic mean via compensated summation.
///
/// # Returns
///
/// `None` if `data` is empty or contains NaN/∞.
///
/// # Examples
///
/// ```
/// use modeleval::stats::mean;
/// let v = [1.0, 2.0, 3.0, 4.0, 5.0];
/// assert!((mean(&v).unwrap() - 3.0).abs() < 1e-15);
/// ```
pub fn mean(data: &[f64]) -> Option<f64> {
    if data.is_empty() || !data.iter().all(|x| x.is_finite()) {
        return None;
    }
    Some(kahan_sum(data) / data.len() as f64)
}

/// Sample variance (Bessel-corrected, `n − 1` denominator).
///
/// Two-pass algorithm: the mean first, then the centered sum of squares.
///
/// # Returns
///
/// `None` if `data.len() < 2` or `data` contains NaN/∞.
///
/// # Examples
///
/// ```
/// use modeleval::stats::variance;
/// let v = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
/// assert!((variance(&v).unwrap() - 4.571428571428571).abs() < 1e-10);
/// ```
pub fn variance(data: &[f64]) -> Option<f64> {
    if data.len() < 2 {
        return None;
    }
    let ss = centered_sum_of_squares(data)?;
    Some(ss / (data.len() - 1) as f64)
}

/// Population variance (`n` denominator).
///
/// # Returns
///
/// `None` if `data` is empty or contains NaN/∞.
pub fn population_variance(data: &[f64]) -> Option<f64> {
    if data.is_empty() {
        return None;
    }
    let ss = centered_sum_of_squares(data)?;
    Some(ss / data.len() as f64)
}

/// Sample standard deviation, `sqrt(variance(data))`.
///
/// # Returns
///
/// `None` if `data.len() < 2` or `data` contains NaN/∞.
pub fn std_dev(data: &[f64]) -> Option<f64> {
    variance(data).map(f64::sqrt)
}

/// Median without mutating the input (clones and sorts internally).
///
/// Even-length data returns the average of the two middle elements.
///
/// # Returns
///
/// `None` if `data` is empty or contains NaN.
///
/// # Examples
///
/// ```
/// use modeleval::stats::median;
/// assert_eq!(median(&[3.0, 1.0, 2.0]), Some(2.0));
/// assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), Some(2.5));
/// ```
pub fn median(data: &[f64]) -> Option<f64> {
    if data.is_empty() || data.iter().any(|x| x.is_nan()) {
        return None;
    }
    let mut sorted = data.to_vec();
    sorted.sort_unstable_by(|a, b| a.partial_cmp(b).expect("NaN filtered above"));
    let n = sorted.len();
    if n % 2 == 1 {
        Some(sorted[n / 2])
    } else {
        Some((sorted[n / 2 - 1] + sorted[n / 2]) / 2.0)
    }
}

// Σ(xᵢ − x̄)², compensated. None on empty or non-finite input.
fn centered_sum_of_squares(data: &[f64]) -> Option<f64> {
    let m = mean(data)?;
    let mut sum = 0.0_f64;
    let mut c = 0.0_f64;
    for &x in data {
        let d = x - m;
        let sq = d * d;
        let t = sum + sq;
        if sum.abs() >= sq {
            c += (sum - t) + sq;
        } else {
            c += (sq - t) + sum;
        }
        sum = t;
    }
    Some(sum + c)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_basic() {
        assert_eq!(mean(&[1.0, 2.0, 3.0, 4.0, 5.0]), Some(3.0));
        assert_eq!(mean(&[42.0]), Some(42.0));
    }

    #[test]
    fn test_mean_rejects_bad_input() {
        assert_eq!(mean(&[]), None);
        assert_eq!(mean(&[1.0, f64::NAN, 3.0]), None);
        assert_eq!(mean(&[1.0, f64::INFINITY, 3.0]), None);
    }

    #[test]
    fn test_kahan_sum_precision() {
        // Naive summation loses the 1.0 entirely here.
        let v = [1e16, 1.0, -1e16];
        assert!((kahan_sum(&v) - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_variance_known_value() {
        let v = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert!((variance(&v).unwrap() - 4.571428571428571).abs() < 1e-10);
        assert!((population_variance(&v).unwrap() - 4.0).abs() < 1e-10);
    }

    #[test]
    fn test_variance_edge_cases() {
        assert_eq!(variance(&[]), None);
        assert_eq!(variance(&[1.0]), None);
        assert!(variance(&[5.0; 100]).unwrap().abs() < 1e-15);
    }

    #[test]
    fn test_variance_large_offset() {
        // Data with a large mean offset; the naive formula would cancel.
        let data: Vec<f64> = (1..=5).map(|i| 1e9 + i as f64).collect();
        assert!((variance(&data).unwrap() - 2.5).abs() < 1e-5);
    }

    #[test]
    fn test_std_dev_is_sqrt_variance() {
        let v = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let sd = std_dev(&v).unwrap();
        assert!((sd * sd - variance(&v).unwrap()).abs() < 1e-10);
    }

    #[test]
    fn test_median() {
        assert_eq!(median(&[3.0, 1.0, 2.0]), Some(2.0));
        assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), Some(2.5));
        assert_eq!(median(&[7.0]), Some(7.0));
        assert_eq!(median(&[]), None);
        assert_eq!(median(&[1.0, f64::NAN]), None);
    }
}
