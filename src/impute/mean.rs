//! Column-mean imputation.

use ndarray::ArrayViewMut2;

use super::{Imputation, ImputeError, validate_structure};
use crate::data::{is_missing, stats};

/// Missing-value imputation by per-column mean of the present values.
///
/// Cheap baseline next to [`KnnImputer`](super::KnnImputer): ignores row
/// similarity entirely and fills every missing cell in a column with the
/// same value.
#[derive(Debug, Clone, Copy, Default)]
pub struct MeanImputer;

impl Imputation for MeanImputer {
    fn impute(&self, mut data: ArrayViewMut2<f64>) -> Result<(), ImputeError> {
        validate_structure(data.view())?;

        let means = stats::present_column_means(data.view());
        for mut row in data.rows_mut() {
            for (col, cell) in row.iter_mut().enumerate() {
                if is_missing(*cell) {
                    *cell = means[col];
                }
            }
        }

        Ok(())
    }
}
