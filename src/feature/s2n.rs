//! Signal-to-noise ratio feature ranking.

use ndarray::ArrayView2;

use super::labels::ClassLabels;
use super::{FeatureError, FeatureRanking};
use crate::data::{axis, stats};

/// Signal-to-noise (S2N) univariate ranking for binary classification.
///
/// For each feature the score is `|mu0 - mu1| / (sd0 + sd1)`, where `mu`
/// and `sd` are the per-class mean and sample standard deviation. Larger
/// scores mean better class separation.
///
/// Labels may use any two distinct integer codes; they are recoded through
/// [`ClassLabels`] before partitioning. Scores are symmetric under swapping
/// which class is called 0.
///
/// A column that is constant within both classes divides by zero and passes
/// through as `inf` or NaN, untouched.
///
/// # References
///
/// M. Shipp, et al. Diffuse large B-cell lymphoma outcome prediction by
/// gene-expression profiling and supervised machine learning. Nature
/// Medicine, 2002.
#[derive(Debug, Clone, Copy, Default)]
pub struct SignalNoiseRatio;

impl SignalNoiseRatio {
    /// Score every feature column of `x` against binary labels `y`.
    ///
    /// # Errors
    ///
    /// - [`FeatureError::SizeMismatch`] if `x` and `y` disagree on row count
    /// - [`FeatureError::NotBinary`] unless exactly two distinct labels occur
    /// - [`FeatureError::InvalidLabel`] if a recoded label escapes {0, 1}
    pub fn ratio(x: ArrayView2<f64>, y: &[i32]) -> Result<Vec<f64>, FeatureError> {
        if x.nrows() != y.len() {
            return Err(FeatureError::SizeMismatch {
                rows: x.nrows(),
                labels: y.len(),
            });
        }

        let labels = ClassLabels::fit(y);
        if labels.n_classes() != 2 {
            return Err(FeatureError::NotBinary {
                n_classes: labels.n_classes(),
            });
        }

        let mut group0 = Vec::new();
        let mut group1 = Vec::new();
        for (i, &code) in labels.codes().iter().enumerate() {
            match code {
                0 => group0.push(i),
                1 => group1.push(i),
                other => return Err(FeatureError::InvalidLabel { label: other }),
            }
        }

        let x0 = x.select(axis::SAMPLES, &group0);
        let x1 = x.select(axis::SAMPLES, &group1);

        let mu0 = stats::column_means(x0.view());
        let mu1 = stats::column_means(x1.view());
        let sd0 = stats::column_sds(x0.view());
        let sd1 = stats::column_sds(x1.view());

        let scores = (0..x.ncols())
            .map(|i| (mu0[i] - mu1[i]).abs() / (sd0[i] + sd1[i]))
            .collect();
        Ok(scores)
    }
}

impl FeatureRanking for SignalNoiseRatio {
    fn rank(&self, x: ArrayView2<f64>, y: &[i32]) -> Result<Vec<f64>, FeatureError> {
        Self::ratio(x, y)
    }
}
