//! Sample-major matrix conventions and missing-value predicates.
//!
//! Shape is always `[n_samples, n_features]` - samples on rows. The axis
//! constants exist so algorithm code can say what it means instead of
//! repeating `Axis(0)` / `Axis(1)` literals.

use ndarray::{ArrayView1, ArrayView2};

/// Semantic axis constants for the sample-major layout.
pub mod axis {
    use ndarray::Axis;

    /// Samples axis: one row per instance.
    pub const SAMPLES: Axis = Axis(0);
    /// Features axis: one column per variable.
    pub const FEATURES: Axis = Axis(1);
}

/// Whether a cell holds the missing-value sentinel.
#[inline]
pub fn is_missing(value: f64) -> bool {
    value.is_nan()
}

/// Whether the matrix contains any missing values.
pub fn has_missing(x: ArrayView2<f64>) -> bool {
    x.iter().any(|&v| is_missing(v))
}

/// Number of missing cells in a single row.
#[inline]
pub fn missing_in_row(row: ArrayView1<f64>) -> usize {
    row.iter().filter(|&&v| is_missing(v)).count()
}

/// Number of missing cells in each column.
///
/// Returned vector is index-aligned with the feature axis.
pub fn missing_in_column(x: ArrayView2<f64>) -> Vec<usize> {
    x.axis_iter(axis::FEATURES)
        .map(|col| col.iter().filter(|&&v| is_missing(v)).count())
        .collect()
}
