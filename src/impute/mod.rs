//! Missing-value imputation.
//!
//! Imputers fill `f64::NAN` cells of a sample-major matrix in place. The
//! caller keeps ownership of the matrix; on success every previously-missing
//! cell holds a finite value.
//!
//! # Available Imputers
//!
//! - [`KnnImputer`]: average of the k most similar rows, ranked by
//!   overlap-corrected partial squared-Euclidean distance
//! - [`MeanImputer`]: per-column mean of the present values
//!
//! # Validation
//!
//! Both imputers validate structure up front, before any mutation: a row or
//! a column that is entirely missing makes imputation impossible and fails
//! the whole call. Either the full matrix is imputed or nothing is written.

mod distance;
mod knn;
mod mean;

pub use knn::KnnImputer;
pub use mean::MeanImputer;

use ndarray::{ArrayView2, ArrayViewMut2};

use crate::data::{missing_in_column, missing_in_row};

/// Errors that can occur during imputation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ImputeError {
    /// Number of neighbors must be >= 1.
    #[error("invalid number of nearest neighbors for imputation: {0}")]
    InvalidNeighborCount(usize),

    /// A row with no present values cannot be compared to any other row.
    #[error("the whole row {row} is missing")]
    AllMissingRow { row: usize },

    /// A column with no present values can never receive a contribution.
    #[error("the whole column {column} is missing")]
    AllMissingColumn { column: usize },
}

/// A missing-value imputation algorithm.
///
/// Implementations mutate the matrix in place and must validate all
/// preconditions before the first write.
pub trait Imputation {
    /// Fill the missing cells of `data`.
    fn impute(&self, data: ArrayViewMut2<f64>) -> Result<(), ImputeError>;
}

/// Reject matrices with an entirely-missing row or column.
///
/// Shared precondition of every imputer; runs before any mutation so a
/// failed call leaves the matrix untouched.
pub(crate) fn validate_structure(x: ArrayView2<f64>) -> Result<(), ImputeError> {
    let n_features = x.ncols();
    for (i, row) in x.rows().into_iter().enumerate() {
        if missing_in_row(row) == n_features {
            return Err(ImputeError::AllMissingRow { row: i });
        }
    }

    let n_samples = x.nrows();
    for (j, count) in missing_in_column(x).into_iter().enumerate() {
        if count == n_samples {
            return Err(ImputeError::AllMissingColumn { column: j });
        }
    }

    Ok(())
}
