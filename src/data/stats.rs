//! Column mean and standard deviation helpers.
//!
//! Two flavors: the plain versions fold every cell (NaN poisons the column,
//! matching standard floating-point semantics), and the `present_*` version
//! skips missing cells for use by the imputers.

use ndarray::ArrayView2;

use super::matrix::{axis, is_missing};

/// Per-column arithmetic mean over all cells.
pub fn column_means(x: ArrayView2<f64>) -> Vec<f64> {
    let n = x.nrows() as f64;
    x.axis_iter(axis::FEATURES)
        .map(|col| col.sum() / n)
        .collect()
}

/// Per-column sample standard deviation (n - 1 denominator).
///
/// A single-row matrix yields NaN per column (0/0); degenerate by
/// construction, passed through rather than special-cased.
pub fn column_sds(x: ArrayView2<f64>) -> Vec<f64> {
    let n = x.nrows() as f64;
    x.axis_iter(axis::FEATURES)
        .map(|col| {
            let mean = col.sum() / n;
            let ss: f64 = col.iter().map(|&v| (v - mean) * (v - mean)).sum();
            (ss / (n - 1.0)).sqrt()
        })
        .collect()
}

/// Per-column mean of the present (non-missing) cells.
///
/// A column with no present cells yields NaN.
pub fn present_column_means(x: ArrayView2<f64>) -> Vec<f64> {
    x.axis_iter(axis::FEATURES)
        .map(|col| {
            let (sum, count) = col
                .iter()
                .filter(|&&v| !is_missing(v))
                .fold((0.0f64, 0usize), |(s, c), &v| (s + v, c + 1));
            sum / count as f64
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_approx_eq;
    use ndarray::array;

    #[test]
    fn means_and_sds() {
        let x = array![[1.0, 10.0], [2.0, 20.0], [3.0, 30.0]];
        let means = column_means(x.view());
        assert_approx_eq!(means[0], 2.0, 1e-12);
        assert_approx_eq!(means[1], 20.0, 1e-12);

        let sds = column_sds(x.view());
        // sample sd of [1,2,3] = 1
        assert_approx_eq!(sds[0], 1.0, 1e-12);
        assert_approx_eq!(sds[1], 10.0, 1e-12);
    }

    #[test]
    fn nan_poisons_plain_mean() {
        let x = array![[1.0, f64::NAN], [3.0, 2.0]];
        let means = column_means(x.view());
        assert_approx_eq!(means[0], 2.0, 1e-12);
        assert!(means[1].is_nan());
    }

    #[test]
    fn present_means_skip_missing() {
        let x = array![[1.0, f64::NAN], [3.0, 2.0], [5.0, 4.0]];
        let means = present_column_means(x.view());
        assert_approx_eq!(means[0], 3.0, 1e-12);
        assert_approx_eq!(means[1], 3.0, 1e-12);
    }

    #[test]
    fn present_means_all_missing_column_is_nan() {
        let x = array![[1.0, f64::NAN], [3.0, f64::NAN]];
        let means = present_column_means(x.view());
        assert!(means[1].is_nan());
    }
}
