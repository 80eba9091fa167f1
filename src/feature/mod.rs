//! Univariate feature ranking for classification.
//!
//! A ranking metric assigns one score per feature column; higher means the
//! feature separates the classes better. Scorers return raw scores and do
//! no sorting or selection themselves - callers rank and cut as they see
//! fit.
//!
//! # Available Metrics
//!
//! - [`SignalNoiseRatio`]: `|mean0 - mean1| / (sd0 + sd1)`, binary only

mod labels;
mod s2n;

pub use labels::ClassLabels;
pub use s2n::SignalNoiseRatio;

use ndarray::ArrayView2;

/// Errors raised by feature ranking metrics.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FeatureError {
    /// Matrix row count and label length must agree.
    #[error("the sizes of x and y don't match: {rows} != {labels}")]
    SizeMismatch { rows: usize, labels: usize },

    /// The metric applies to binary problems only.
    #[error("expected exactly 2 classes, got {n_classes}")]
    NotBinary { n_classes: usize },

    /// A normalized label fell outside the canonical {0, 1} coding.
    #[error("invalid class label: {label}")]
    InvalidLabel { label: i32 },
}

/// A univariate feature ranking metric.
pub trait FeatureRanking {
    /// Score every feature column of `x` against class labels `y`.
    ///
    /// The returned vector is index-aligned with the feature axis.
    fn rank(&self, x: ArrayView2<f64>, y: &[i32]) -> Result<Vec<f64>, FeatureError>;
}
