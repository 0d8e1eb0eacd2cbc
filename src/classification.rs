//! Classification evaluation metrics.
//!
//! Confusion matrix with per-class precision, recall, F1, and specificity;
//! overall and macro-averaged scores; ROC curve and AUC for binary scores.
//!
//! Absent denominators — a class that is never predicted, or never present —
//! yield `0.0` rather than NaN, so a missing category cannot poison an
//! aggregate score.
//!
//! # Examples
//!
//! ```
//! use modeleval::classification::ConfusionMatrix;
//!
//! let actual    = [0, 1, 1, 0, 1];
//! let predicted = [0, 1, 0, 0, 1];
//! let cm = ConfusionMatrix::from_labels(&actual, &predicted).unwrap();
//! assert!((cm.accuracy() - 0.8).abs() < 1e-15);
//! assert!((cm.recall(1) - 2.0 / 3.0).abs() < 1e-15);
//! ```

use crate::error::{EvalError, Result};

// ---------------------------------------------------------------------------
// Confusion matrix
// ---------------------------------------------------------------------------

/// Row-major confusion matrix for multi-class classification.
///
/// Entry `(i, j)` counts samples whose **actual** class is `i` and whose
/// **predicted** class is `j`. The number of classes is inferred as
/// `max(label) + 1` over both slices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfusionMatrix {
    counts: Vec<usize>,
    n_classes: usize,
}

impl ConfusionMatrix {
    /// Builds a confusion matrix from actual and predicted label slices.
    ///
    /// # Errors
    ///
    /// [`EvalError::EmptyInput`] if the slices are empty,
    /// [`EvalError::LengthMismatch`] if they differ in length.
    pub fn from_labels(actual: &[usize], predicted: &[usize]) -> Result<Self> {
        if actual.is_empty() {
            return Err(EvalError::EmptyInput);
        }
        if actual.len() != predicted.len() {
            return Err(EvalError::LengthMismatch {
                left: actual.len(),
                right: predicted.len(),
            });
        }

        let max_label = actual
            .iter()
            .chain(predicted.iter())
            .copied()
            .max()
            .unwrap_or(0);
        let nc = max_label + 1;

        let mut counts = vec![0usize; nc * nc];
        for (&a, &p) in actual.iter().zip(predicted.iter()) {
            counts[a * nc + p] += 1;
        }

        Ok(Self {
            counts,
            n_classes: nc,
        })
    }

    /// Number of classes.
    pub fn n_classes(&self) -> usize {
        self.n_classes
    }

    /// Count for a specific (actual, predicted) pair.
    #[inline]
    pub fn count(&self, actual: usize, predicted: usize) -> usize {
        self.counts[actual * self.n_classes + predicted]
    }

    /// Total number of samples.
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// True positives for `class`: on-diagonal count.
    pub fn true_positives(&self, class: usize) -> usize {
        self.count(class, class)
    }

    /// False positives for `class`: predicted as `class`, actually another.
    pub fn false_positives(&self, class: usize) -> usize {
        (0..self.n_classes)
            .filter(|&i| i != class)
            .map(|i| self.count(i, class))
            .sum()
    }

    /// False negatives for `class`: actually `class`, predicted as another.
    pub fn false_negatives(&self, class: usize) -> usize {
        (0..self.n_classes)
            .filter(|&j| j != class)
            .map(|j| self.count(class, j))
            .sum()
    }

    /// True negatives for `class`: neither actual nor predicted is `class`.
    pub fn true_negatives(&self, class: usize) -> usize {
        self.total() - self.true_positives(class) - self.false_positives(class)
            - self.false_negatives(class)
    }

    /// Number of samples whose actual class is `class`.
    pub fn support(&self, class: usize) -> usize {
        self.true_positives(class) + self.false_negatives(class)
    }

    /// Overall accuracy: correct predictions / total.
    pub fn accuracy(&self) -> f64 {
        let correct: usize = (0..self.n_classes).map(|c| self.count(c, c)).sum();
        correct as f64 / self.total() as f64
    }

    /// Precision for `class`: TP / (TP + FP). `0.0` if the class is never
    /// predicted.
    pub fn precision(&self, class: usize) -> f64 {
        ratio(self.true_positives(class), self.false_positives(class))
    }

    /// Recall (sensitivity) for `class`: TP / (TP + FN). `0.0` if the class
    /// never occurs.
    pub fn recall(&self, class: usize) -> f64 {
        ratio(self.true_positives(class), self.false_negatives(class))
    }

    /// F1 score for `class`: harmonic mean of precision and recall. `0.0`
    /// when both are zero.
    pub fn f1(&self, class: usize) -> f64 {
        let p = self.precision(class);
        let r = self.recall(class);
        if p + r == 0.0 {
            0.0
        } else {
            2.0 * p * r / (p + r)
        }
    }

    /// Specificity for `class`: TN / (TN + FP).
    pub fn specificity(&self, class: usize) -> f64 {
        ratio(self.true_negatives(class), self.false_positives(class))
    }
}

// numerator / (numerator + rest), guarding the empty denominator.
fn ratio(numerator: usize, rest: usize) -> f64 {
    let denom = numerator + rest;
    if denom == 0 {
        0.0
    } else {
        numerator as f64 / denom as f64
    }
}

// ---------------------------------------------------------------------------
// Standalone scalar metrics
// ---------------------------------------------------------------------------

/// Fraction of correct predictions.
///
/// # Errors
///
/// Empty or length-mismatched slices.
///
/// # Examples
///
/// ```
/// use modeleval::classification::accuracy;
/// let acc = accuracy(&[0, 1, 1, 0], &[0, 1, 0, 0]).unwrap();
/// assert!((acc - 0.75).abs() < 1e-15);
/// ```
pub fn accuracy(actual: &[usize], predicted: &[usize]) -> Result<f64> {
    Ok(ConfusionMatrix::from_labels(actual, predicted)?.accuracy())
}

/// Precision for a specific class.
///
/// # Errors
///
/// Empty or length-mismatched slices.
pub fn precision_score(actual: &[usize], predicted: &[usize], class: usize) -> Result<f64> {
    Ok(ConfusionMatrix::from_labels(actual, predicted)?.precision(class))
}

/// Recall for a specific class.
///
/// # Errors
///
/// Empty or length-mismatched slices.
pub fn recall_score(actual: &[usize], predicted: &[usize], class: usize) -> Result<f64> {
    Ok(ConfusionMatrix::from_labels(actual, predicted)?.recall(class))
}

/// F1 score for a specific class.
///
/// # Errors
///
/// Empty or length-mismatched slices.
///
/// # Examples
///
/// ```
/// use modeleval::classification::f1_score;
/// let f1 = f1_score(&[0, 1, 1, 0, 1], &[0, 1, 0, 0, 1], 1).unwrap();
/// assert!((f1 - 0.8).abs() < 1e-12);
/// ```
pub fn f1_score(actual: &[usize], predicted: &[usize], class: usize) -> Result<f64> {
    Ok(ConfusionMatrix::from_labels(actual, predicted)?.f1(class))
}

/// Macro-averaged F1: unweighted mean of per-class F1 scores.
///
/// # Errors
///
/// Empty or length-mismatched slices.
pub fn f1_macro(actual: &[usize], predicted: &[usize]) -> Result<f64> {
    let cm = ConfusionMatrix::from_labels(actual, predicted)?;
    let sum: f64 = (0..cm.n_classes()).map(|c| cm.f1(c)).sum();
    Ok(sum / cm.n_classes() as f64)
}

// ---------------------------------------------------------------------------
// ROC curve
// ---------------------------------------------------------------------------

/// A single point on the ROC curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RocPoint {
    /// Score threshold at which this point was computed.
    pub threshold: f64,
    /// False positive rate: FP / (FP + TN).
    pub fpr: f64,
    /// True positive rate (recall): TP / (TP + FN).
    pub tpr: f64,
}

/// ROC curve with its area under the curve.
#[derive(Debug, Clone, PartialEq)]
pub struct RocCurve {
    /// Points from (0, 0) to (1, 1), one per distinct score plus the origin.
    pub points: Vec<RocPoint>,
    /// Area under the curve (trapezoidal rule).
    pub auc: f64,
}

/// Computes the ROC curve from predicted scores and binary labels.
///
/// # Algorithm
///
/// Walks thresholds over descending scores, emitting one (FPR, TPR) point
/// per distinct score value; tied scores advance the counts together so tie
/// order cannot bias the curve. The origin (threshold +∞) is always the
/// first point. AUC is the trapezoidal area under the resulting polyline.
///
/// # Errors
///
/// - [`EvalError::EmptyInput`] / [`EvalError::LengthMismatch`] on malformed
///   slices, [`EvalError::NonFiniteInput`] on NaN/∞ scores.
/// - [`EvalError::NoPositiveLabels`] / [`EvalError::NoNegativeLabels`] when
///   the labels are single-class, which leaves a rate undefined.
///
/// # References
///
/// Fawcett (2006). "An introduction to ROC analysis". Pattern Recognition
/// Letters, 27(8), 861–874.
///
/// # Examples
///
/// ```
/// use modeleval::classification::roc_curve;
///
/// let scores = [0.9, 0.8, 0.7, 0.6, 0.55, 0.4];
/// let labels = [true, true, false, true, false, false];
/// let roc = roc_curve(&scores, &labels).unwrap();
/// assert!((roc.auc - 8.0 / 9.0).abs() < 1e-12);
/// ```
pub fn roc_curve(scores: &[f64], labels: &[bool]) -> Result<RocCurve> {
    if scores.is_empty() {
        return Err(EvalError::EmptyInput);
    }
    if scores.len() != labels.len() {
        return Err(EvalError::LengthMismatch {
            left: scores.len(),
            right: labels.len(),
        });
    }
    if scores.iter().any(|s| !s.is_finite()) {
        return Err(EvalError::NonFiniteInput);
    }

    let total_pos = labels.iter().filter(|&&l| l).count();
    let total_neg = labels.len() - total_pos;
    if total_pos == 0 {
        return Err(EvalError::NoPositiveLabels);
    }
    if total_neg == 0 {
        return Err(EvalError::NoNegativeLabels);
    }

    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by(|&a, &b| {
        scores[b]
            .partial_cmp(&scores[a])
            .expect("NaN filtered above")
    });

    let p = total_pos as f64;
    let n = total_neg as f64;

    let mut points = vec![RocPoint {
        threshold: f64::INFINITY,
        fpr: 0.0,
        tpr: 0.0,
    }];

    let mut tp = 0usize;
    let mut fp = 0usize;
    let mut i = 0;
    while i < order.len() {
        let threshold = scores[order[i]];
        // Consume the whole tie group before emitting a point.
        while i < order.len() && scores[order[i]] == threshold {
            if labels[order[i]] {
                tp += 1;
            } else {
                fp += 1;
            }
            i += 1;
        }
        points.push(RocPoint {
            threshold,
            fpr: fp as f64 / n,
            tpr: tp as f64 / p,
        });
    }

    let mut auc = 0.0;
    for w in points.windows(2) {
        auc += (w[1].fpr - w[0].fpr) * (w[1].tpr + w[0].tpr) / 2.0;
    }

    Ok(RocCurve { points, auc })
}

/// Area under the ROC curve; shorthand for `roc_curve(scores, labels)?.auc`.
pub fn roc_auc(scores: &[f64], labels: &[bool]) -> Result<f64> {
    Ok(roc_curve(scores, labels)?.auc)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn binary_fixture() -> (Vec<usize>, Vec<usize>) {
        // TP(1)=3, FN(1)=1, FP(1)=1, TN(1)=3
        let actual = vec![1, 1, 1, 1, 0, 0, 0, 0];
        let predicted = vec![1, 1, 1, 0, 1, 0, 0, 0];
        (actual, predicted)
    }

    #[test]
    fn test_confusion_counts() {
        let (actual, predicted) = binary_fixture();
        let cm = ConfusionMatrix::from_labels(&actual, &predicted).unwrap();
        assert_eq!(cm.n_classes(), 2);
        assert_eq!(cm.total(), 8);
        assert_eq!(cm.true_positives(1), 3);
        assert_eq!(cm.false_negatives(1), 1);
        assert_eq!(cm.false_positives(1), 1);
        assert_eq!(cm.true_negatives(1), 3);
        assert_eq!(cm.support(1), 4);
    }

    #[test]
    fn test_binary_metrics() {
        let (actual, predicted) = binary_fixture();
        let cm = ConfusionMatrix::from_labels(&actual, &predicted).unwrap();
        assert!((cm.accuracy() - 0.75).abs() < 1e-15);
        assert!((cm.precision(1) - 0.75).abs() < 1e-15);
        assert!((cm.recall(1) - 0.75).abs() < 1e-15);
        assert!((cm.f1(1) - 0.75).abs() < 1e-15);
        assert!((cm.specificity(1) - 0.75).abs() < 1e-15);
    }

    #[test]
    fn test_perfect_classifier() {
        let labels = [0, 1, 2, 1, 0, 2];
        let cm = ConfusionMatrix::from_labels(&labels, &labels).unwrap();
        assert_eq!(cm.accuracy(), 1.0);
        for c in 0..3 {
            assert_eq!(cm.precision(c), 1.0);
            assert_eq!(cm.recall(c), 1.0);
            assert_eq!(cm.f1(c), 1.0);
        }
        assert_eq!(f1_macro(&labels, &labels).unwrap(), 1.0);
    }

    #[test]
    fn test_absent_class_yields_zero_not_nan() {
        // Class 2 exists in the label space but is never predicted and
        // never actual; all its metrics must be 0.0, not NaN.
        let actual = [0, 0, 1, 2];
        let predicted = [0, 1, 1, 1];
        let cm = ConfusionMatrix::from_labels(&actual, &predicted).unwrap();
        assert_eq!(cm.precision(2), 0.0);
        assert_eq!(cm.recall(2), 0.0);
        assert_eq!(cm.f1(2), 0.0);
        assert!(f1_macro(&actual, &predicted).unwrap().is_finite());
    }

    #[test]
    fn test_standalone_scores_match_matrix() {
        let (actual, predicted) = binary_fixture();
        let cm = ConfusionMatrix::from_labels(&actual, &predicted).unwrap();
        assert_eq!(accuracy(&actual, &predicted).unwrap(), cm.accuracy());
        assert_eq!(
            precision_score(&actual, &predicted, 1).unwrap(),
            cm.precision(1)
        );
        assert_eq!(recall_score(&actual, &predicted, 1).unwrap(), cm.recall(1));
        assert_eq!(f1_score(&actual, &predicted, 1).unwrap(), cm.f1(1));
    }

    #[test]
    fn test_input_validation() {
        assert_eq!(
            ConfusionMatrix::from_labels(&[], &[]),
            Err(EvalError::EmptyInput)
        );
        assert_eq!(
            ConfusionMatrix::from_labels(&[0, 1], &[0]),
            Err(EvalError::LengthMismatch { left: 2, right: 1 })
        );
    }

    #[test]
    fn test_roc_perfect_separation() {
        let scores = [0.9, 0.8, 0.2, 0.1];
        let labels = [true, true, false, false];
        assert_eq!(roc_auc(&scores, &labels).unwrap(), 1.0);
    }

    #[test]
    fn test_roc_inverted_scores() {
        let scores = [0.9, 0.8, 0.2, 0.1];
        let labels = [false, false, true, true];
        assert_eq!(roc_auc(&scores, &labels).unwrap(), 0.0);
    }

    #[test]
    fn test_roc_random_scores_give_half() {
        // Identical scores everywhere: a single diagonal step, AUC 0.5.
        let scores = [0.5, 0.5, 0.5, 0.5];
        let labels = [true, false, true, false];
        let roc = roc_curve(&scores, &labels).unwrap();
        assert_eq!(roc.points.len(), 2);
        assert!((roc.auc - 0.5).abs() < 1e-15);
    }

    #[test]
    fn test_roc_endpoints() {
        let scores = [0.9, 0.8, 0.7, 0.6, 0.55, 0.4];
        let labels = [true, true, false, true, false, false];
        let roc = roc_curve(&scores, &labels).unwrap();
        let first = roc.points.first().unwrap();
        let last = roc.points.last().unwrap();
        assert_eq!((first.fpr, first.tpr), (0.0, 0.0));
        assert_eq!((last.fpr, last.tpr), (1.0, 1.0));
    }

    #[test]
    fn test_roc_single_class_errors() {
        assert_eq!(
            roc_auc(&[0.1, 0.2], &[true, true]),
            Err(EvalError::NoNegativeLabels)
        );
        assert_eq!(
            roc_auc(&[0.1, 0.2], &[false, false]),
            Err(EvalError::NoPositiveLabels)
        );
    }

    #[test]
    fn test_roc_rejects_nan_scores() {
        assert_eq!(
            roc_auc(&[0.1, f64::NAN], &[true, false]),
            Err(EvalError::NonFiniteInput)
        );
    }
}
