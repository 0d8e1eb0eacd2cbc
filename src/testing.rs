//! Non-parametric hypothesis testing.
//!
//! The Wilcoxon signed-rank statistic for one-sample location testing, plus
//! the paired two-sample form. The statistic is the output: comparing it
//! against a critical-value table (or approximating a p-value) is left to
//! the caller.
//!
//! # Examples
//!
//! ```
//! use modeleval::testing::signed_rank_test;
//!
//! // Delivery offsets against a promised time of 30 minutes.
//! let minutes = [31.0, 32.0, 27.0, 35.0, 36.0];
//! let r = signed_rank_test(&minutes, 30.0).unwrap();
//! assert_eq!(r.s_plus, 12.0);
//! assert_eq!(r.s_minus, 3.0);
//! ```

use crate::error::{EvalError, Result};
use crate::ranking::fractional_ranks;

/// Result of a Wilcoxon signed-rank test.
///
/// The invariant `s_plus + s_minus == rank_total()` always holds, where the
/// rank total is computed over the `n_used` observations that differ from
/// the hypothesized center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignedRankTest {
    /// Sum of ranks belonging to positive differences (s⁺, the test statistic).
    pub s_plus: f64,
    /// Sum of ranks belonging to negative differences (s⁻).
    pub s_minus: f64,
    /// Number of observations with a nonzero difference from the center.
    pub n_used: usize,
    /// Number of observations dropped because they equal the center exactly.
    pub n_zeros: usize,
}

impl SignedRankTest {
    /// Total rank sum over the ranked observations: `n_used (n_used + 1) / 2`.
    pub fn rank_total(&self) -> f64 {
        let n = self.n_used as f64;
        n * (n + 1.0) / 2.0
    }

    /// The smaller of s⁺ and s⁻, the form usually compared against
    /// two-sided critical-value tables.
    pub fn min_statistic(&self) -> f64 {
        self.s_plus.min(self.s_minus)
    }
}

/// One-sample Wilcoxon signed-rank statistic: H₀: median = `center`.
///
/// # Algorithm
///
/// 1. dᵢ = xᵢ − center for each observation.
/// 2. Observations with dᵢ = 0 are dropped from the ranked set (Wilcoxon's
///    convention), reducing the effective sample size.
/// 3. Rank |dᵢ| ascending; exact ties receive the mean of the ranks the
///    group spans (mid-rank convention).
/// 4. s⁺ = Σ ranks with dᵢ > 0, s⁻ = Σ ranks with dᵢ < 0.
///
/// # Errors
///
/// - [`EvalError::EmptyInput`] if `sample` is empty.
/// - [`EvalError::NonFiniteInput`] if `sample` or `center` contains NaN/∞.
/// - [`EvalError::AllTiedAtCenter`] if every observation equals `center`;
///   the statistic is undefined and is never silently reported as 0.
///
/// # References
///
/// Wilcoxon (1945). "Individual comparisons by ranking methods".
/// Biometrics Bulletin, 1(6), 80–83.
///
/// # Examples
///
/// ```
/// use modeleval::testing::signed_rank_test;
///
/// let sample = [31.0, 33.0, 26.0, 36.0];
/// let r = signed_rank_test(&sample, 30.0).unwrap();
/// // |d| = 1, 3, 4, 6 → ranks 1, 2, 3, 4; positives hold ranks 1, 2, 4.
/// assert_eq!(r.s_plus, 7.0);
/// assert_eq!(r.s_plus + r.s_minus, r.rank_total());
/// ```
pub fn signed_rank_test(sample: &[f64], center: f64) -> Result<SignedRankTest> {
    if sample.is_empty() {
        return Err(EvalError::EmptyInput);
    }
    if !center.is_finite() || sample.iter().any(|v| !v.is_finite()) {
        return Err(EvalError::NonFiniteInput);
    }

    let diffs: Vec<f64> = sample
        .iter()
        .map(|&x| x - center)
        .filter(|&d| d != 0.0)
        .collect();
    let n_zeros = sample.len() - diffs.len();

    if diffs.is_empty() {
        return Err(EvalError::AllTiedAtCenter);
    }

    let magnitudes: Vec<f64> = diffs.iter().map(|d| d.abs()).collect();
    let ranks = fractional_ranks(&magnitudes).expect("nonempty and finite");

    let mut s_plus = 0.0;
    let mut s_minus = 0.0;
    for (&d, &r) in diffs.iter().zip(ranks.iter()) {
        if d > 0.0 {
            s_plus += r;
        } else {
            s_minus += r;
        }
    }

    Ok(SignedRankTest {
        s_plus,
        s_minus,
        n_used: diffs.len(),
        n_zeros,
    })
}

/// Paired Wilcoxon signed-rank statistic: H₀: median of (xᵢ − yᵢ) = 0.
///
/// Computes pairwise differences and applies [`signed_rank_test`] with
/// center 0. Non-parametric alternative to the paired t-test.
///
/// # Errors
///
/// [`EvalError::LengthMismatch`] if the slices differ in length, plus any
/// error [`signed_rank_test`] reports for the differences.
///
/// # Examples
///
/// ```
/// use modeleval::testing::paired_signed_rank_test;
///
/// let before = [5.0, 6.0, 7.0, 8.0, 9.0];
/// let after  = [6.0, 7.5, 8.0, 9.5, 11.0];
/// let r = paired_signed_rank_test(&after, &before).unwrap();
/// assert_eq!(r.s_minus, 0.0); // every pair improved
/// ```
pub fn paired_signed_rank_test(x: &[f64], y: &[f64]) -> Result<SignedRankTest> {
    if x.len() != y.len() {
        return Err(EvalError::LengthMismatch {
            left: x.len(),
            right: y.len(),
        });
    }
    if x.iter().chain(y.iter()).any(|v| !v.is_finite()) {
        return Err(EvalError::NonFiniteInput);
    }

    let diffs: Vec<f64> = x.iter().zip(y.iter()).map(|(&a, &b)| a - b).collect();
    signed_rank_test(&diffs, 0.0)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
