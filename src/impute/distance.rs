//! Partial squared-Euclidean distance between rows with missing values.

use ndarray::ArrayView1;

use crate::data::is_missing;

/// Squared Euclidean distance over the columns present in both rows.
///
/// Returns `(raw, shared)`: the summed squared differences and the number
/// of columns that contributed. Rows with no overlap yield `(0.0, 0)`.
#[inline]
pub(crate) fn partial_sq_euclidean(x: ArrayView1<f64>, y: ArrayView1<f64>) -> (f64, usize) {
    let mut raw = 0.0;
    let mut shared = 0;
    for (&a, &b) in x.iter().zip(y.iter()) {
        if !is_missing(a) && !is_missing(b) {
            let d = a - b;
            raw += d * d;
            shared += 1;
        }
    }
    (raw, shared)
}

/// Scale a partial distance up to a full-row estimate, or exclude the
/// candidate from ranking.
///
/// With `missing` missing columns in the target row out of `n_features`
/// total, a candidate must share a strict majority of the target's present
/// columns to be usable: `shared > (n_features - missing) / 2` (integer
/// division). Usable candidates get `raw * n_features / shared`, keeping
/// distances comparable across different overlap counts. Unusable ones get
/// `f64::MAX`, which ranks them last without shrinking the candidate list.
#[inline]
pub(crate) fn corrected_distance(
    raw: f64,
    shared: usize,
    n_features: usize,
    missing: usize,
) -> f64 {
    if shared > (n_features - missing) / 2 {
        raw * n_features as f64 / shared as f64
    } else {
        f64::MAX
    }
}
