//! # modeleval
//!
//! Model evaluation metrics and non-parametric hypothesis testing.
//!
//! This crate provides the numeric core behind model-evaluation workflows:
//! classification and regression metrics plus the Wilcoxon signed-rank
//! statistic for location testing. Everything is domain-agnostic — functions
//! operate on raw `f64` slices and integer labels without knowledge of any
//! particular model, dataset, or pipeline.
//!
//! ## Modules
//!
//! - [`testing`] — Wilcoxon signed-rank statistic (one-sample and paired)
//! - [`ranking`] — Fractional (mid-rank) rank assignment with tie handling
//! - [`classification`] — Confusion matrix, accuracy, precision/recall/F1, ROC/AUC
//! - [`regression`] — Error metrics (MSE, RMSE, MAE, R², explained variance)
//! - [`stats`] — Descriptive statistics foundation with numerical stability
//! - [`error`] — Crate error type
//!
//! ## Design Philosophy
//!
//! - **Pure computation**: No I/O, no state, no concurrency — every function
//!   recomputes its result fresh from its inputs
//! - **Explicit failure**: Degenerate inputs (empty, non-finite, all tied)
//!   are reported as errors, never coerced to a numeric default
//! - **Numerical care**: Compensated summation for accumulations, exact
//!   mid-rank tie handling for rank statistics

pub mod classification;
pub mod error;
pub mod ranking;
pub mod regression;
pub mod stats;
pub mod testing;

pub use error::{EvalError, Result};
