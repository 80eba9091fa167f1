//! K-nearest-neighbor imputation.

use std::cmp::Ordering;

use ndarray::{ArrayView2, ArrayViewMut2};

use super::distance::{corrected_distance, partial_sq_euclidean};
use super::{Imputation, ImputeError, validate_structure};
use crate::data::{is_missing, missing_in_row};
use crate::utils::Parallelism;

/// Missing-value imputation by k nearest neighbors.
///
/// For each row with missing cells, every other row is ranked by partial
/// squared-Euclidean distance over the columns both rows have present,
/// scaled up to a full-row estimate (see [`impute`](KnnImputer::impute)
/// for the policy). Each missing cell is then filled with the mean of the
/// first `k` ranked rows that have that column present.
///
/// # Example
///
/// ```
/// use imputers::{Imputation, KnnImputer};
/// use ndarray::array;
///
/// let mut data = array![[1.0, 2.0], [2.0, f64::NAN], [10.0, 20.0]];
/// KnnImputer::new(1).unwrap().impute(data.view_mut()).unwrap();
/// assert_eq!(data, array![[1.0, 2.0], [2.0, 2.0], [10.0, 20.0]]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct KnnImputer {
    /// Number of neighbors averaged per missing cell.
    k: usize,
}

impl KnnImputer {
    /// Create an imputer averaging `k` neighbors.
    ///
    /// # Errors
    ///
    /// Returns [`ImputeError::InvalidNeighborCount`] if `k < 1`.
    pub fn new(k: usize) -> Result<Self, ImputeError> {
        if k < 1 {
            return Err(ImputeError::InvalidNeighborCount(k));
        }
        Ok(Self { k })
    }

    /// Number of neighbors averaged per missing cell.
    #[inline]
    pub fn k(&self) -> usize {
        self.k
    }

    /// Fill the missing cells of `data`, optionally in parallel across rows.
    ///
    /// All fill values are computed against a snapshot of the matrix taken
    /// at call entry, then written in one pass. Rows therefore never observe
    /// each other's fills, and `Sequential` and `Parallel` produce
    /// bit-identical output.
    ///
    /// # Errors
    ///
    /// Fails before any mutation if a row or column is entirely missing.
    pub fn impute_with(
        &self,
        mut data: ArrayViewMut2<f64>,
        parallelism: Parallelism,
    ) -> Result<(), ImputeError> {
        validate_structure(data.view())?;

        let snapshot = data.to_owned();
        let snap = snapshot.view();

        let targets: Vec<usize> = snap
            .rows()
            .into_iter()
            .enumerate()
            .filter(|(_, row)| missing_in_row(*row) > 0)
            .map(|(i, _)| i)
            .collect();

        let k = self.k;
        let fills = parallelism.maybe_par_map(targets, |i| fill_row(snap, i, k));
        for (row, col, value) in fills.into_iter().flatten() {
            data[[row, col]] = value;
        }

        Ok(())
    }
}

impl Imputation for KnnImputer {
    fn impute(&self, data: ArrayViewMut2<f64>) -> Result<(), ImputeError> {
        self.impute_with(data, Parallelism::Sequential)
    }
}

/// Compute the fill values for one target row against the snapshot.
///
/// Returns `(row, column, value)` triples for the target's missing cells.
fn fill_row(x: ArrayView2<f64>, target: usize, k: usize) -> Vec<(usize, usize, f64)> {
    let n_features = x.ncols();
    let row = x.row(target);
    let missing = missing_in_row(row);

    // Rank every candidate, the target itself included. Corrected distances
    // are never NaN (raw sums only present cells), so the ordering is total;
    // the index tiebreak keeps it deterministic.
    let mut candidates: Vec<(f64, usize)> = x
        .rows()
        .into_iter()
        .enumerate()
        .map(|(j, y)| {
            let (raw, shared) = partial_sq_euclidean(row, y);
            (corrected_distance(raw, shared, n_features, missing), j)
        })
        .collect();
    candidates.sort_unstable_by(|a, b| {
        a.0.partial_cmp(&b.0)
            .unwrap_or(Ordering::Equal)
            .then(a.1.cmp(&b.1))
    });

    let mut fills = Vec::with_capacity(missing);
    for (col, &value) in row.iter().enumerate() {
        if !is_missing(value) {
            continue;
        }

        let mut sum = 0.0;
        let mut found = 0usize;
        for &(_, idx) in &candidates {
            if found == k {
                break;
            }
            let v = x[[idx, col]];
            if !is_missing(v) {
                sum += v;
                found += 1;
            }
        }

        // Structural validation guarantees at least one contributor per
        // column; a zero count would propagate NaN through the division.
        fills.push((target, col, sum / found as f64));
    }
    fills
}
