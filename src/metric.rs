//! Metric
//!
//! Evaluation of boolean predictions against labels.

/// Fraction of predictions equal to their label. Empty input scores 0.
///
/// Both slices must have the same length.
pub fn accuracy(y_true: &[bool], y_pred: &[bool]) -> f64 {
    debug_assert_eq!(y_true.len(), y_pred.len(), "y_true and y_pred differ in length");
    if y_true.is_empty() {
        return 0.0;
    }
    let correct = y_true.iter().zip(y_pred).filter(|(t, p)| t == p).count();
    correct as f64 / y_true.len() as f64
}
