//! Regression evaluation metrics.
//!
//! Error metrics over paired (actual, predicted) slices: MSE, RMSE, MAE,
//! median absolute error, R², and explained variance. All accumulation uses
//! compensated summation from [`crate::stats`].
//!
//! # Examples
//!
//! ```
//! use modeleval::regression::{mse, r_squared};
//!
//! let actual    = [3.0, -0.5, 2.0, 7.0];
//! let predicted = [2.5, 0.0, 2.0, 8.0];
//! assert!((mse(&actual, &predicted).unwrap() - 0.375).abs() < 1e-15);
//! assert!((r_squared(&actual, &predicted).unwrap() - 0.9486081370449679).abs() < 1e-12);
//! ```

use crate::error::{EvalError, Result};
use crate::stats;

/// Mean squared error: `Σ(yᵢ − ŷᵢ)² / n`.
///
/// # Errors
///
/// Empty, length-mismatched, or non-finite inputs.
pub fn mse(actual: &[f64], predicted: &[f64]) -> Result<f64> {
    let residuals = residuals(actual, predicted)?;
    let squared: Vec<f64> = residuals.iter().map(|&e| e * e).collect();
    Ok(stats::kahan_sum(&squared) / squared.len() as f64)
}

/// Root mean squared error: `sqrt(mse)`.
///
/// # Errors
///
/// Empty, length-mismatched, or non-finite inputs.
///
/// # Examples
///
/// ```
/// use modeleval::regression::rmse;
/// let r = rmse(&[3.0, -0.5, 2.0, 7.0], &[2.5, 0.0, 2.0, 8.0]).unwrap();
/// assert!((r - 0.375f64.sqrt()).abs() < 1e-15);
/// ```
pub fn rmse(actual: &[f64], predicted: &[f64]) -> Result<f64> {
    mse(actual, predicted).map(f64::sqrt)
}

/// Mean absolute error: `Σ|yᵢ − ŷᵢ| / n`.
///
/// Less sensitive to outliers than MSE.
///
/// # Errors
///
/// Empty, length-mismatched, or non-finite inputs.
pub fn mae(actual: &[f64], predicted: &[f64]) -> Result<f64> {
    let abs_errors: Vec<f64> = residuals(actual, predicted)?
        .iter()
        .map(|e| e.abs())
        .collect();
    Ok(stats::kahan_sum(&abs_errors) / abs_errors.len() as f64)
}

/// Median absolute error: `median(|yᵢ − ŷᵢ|)`.
///
/// Robust to outliers; a single wild prediction cannot move it.
///
/// # Errors
///
/// Empty, length-mismatched, or non-finite inputs.
pub fn median_absolute_error(actual: &[f64], predicted: &[f64]) -> Result<f64> {
    let abs_errors: Vec<f64> = residuals(actual, predicted)?
        .iter()
        .map(|e| e.abs())
        .collect();
    Ok(stats::median(&abs_errors).expect("nonempty and finite"))
}

/// Coefficient of determination: `R² = 1 − SS_res / SS_tot`.
///
/// 1.0 for a perfect fit, 0.0 for a model no better than predicting the
/// mean, negative for a model worse than that.
///
/// # Errors
///
/// Empty, length-mismatched, or non-finite inputs;
/// [`EvalError::ZeroVariance`] when `actual` is constant, which leaves
/// SS_tot = 0 and the ratio undefined.
///
/// # References
///
/// Draper & Smith (1998). "Applied Regression Analysis", 3rd edition.
///
/// # Examples
///
/// ```
/// use modeleval::regression::r_squared;
/// let y = [1.0, 2.0, 3.0, 4.0];
/// assert_eq!(r_squared(&y, &y).unwrap(), 1.0);
/// ```
pub fn r_squared(actual: &[f64], predicted: &[f64]) -> Result<f64> {
    let res = residuals(actual, predicted)?;
    let squared: Vec<f64> = res.iter().map(|&e| e * e).collect();
    let ss_res = stats::kahan_sum(&squared);

    let mean_y = stats::mean(actual).expect("validated above");
    let centered_sq: Vec<f64> = actual.iter().map(|&y| (y - mean_y) * (y - mean_y)).collect();
    let ss_tot = stats::kahan_sum(&centered_sq);

    if ss_tot <= 0.0 {
        return Err(EvalError::ZeroVariance);
    }
    Ok(1.0 - ss_res / ss_tot)
}

/// Explained variance score: `1 − Var(y − ŷ) / Var(y)`.
///
/// Unlike [`r_squared`], a constant bias in the predictions does not lower
/// the score, because the residual variance is taken about the residual
/// mean.
///
/// # Errors
///
/// Empty, length-mismatched, or non-finite inputs;
/// [`EvalError::ZeroVariance`] when `actual` is constant.
pub fn explained_variance(actual: &[f64], predicted: &[f64]) -> Result<f64> {
    let res = residuals(actual, predicted)?;
    let var_res = stats::population_variance(&res).expect("validated above");
    let var_y = stats::population_variance(actual).expect("validated above");
    if var_y <= 0.0 {
        return Err(EvalError::ZeroVariance);
    }
    Ok(1.0 - var_res / var_y)
}

// Validated residual vector yᵢ − ŷᵢ.
fn residuals(actual: &[f64], predicted: &[f64]) -> Result<Vec<f64>> {
    if actual.is_empty() {
        return Err(EvalError::EmptyInput);
    }
    if actual.len() != predicted.len() {
        return Err(EvalError::LengthMismatch {
            left: actual.len(),
            right: predicted.len(),
        });
    }
    if actual
        .iter()
        .chain(predicted.iter())
        .any(|v| !v.is_finite())
    {
        return Err(EvalError::NonFiniteInput);
    }
    Ok(actual
        .iter()
        .zip(predicted.iter())
        .map(|(&y, &yh)| y - yh)
        .collect())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
