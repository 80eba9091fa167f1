//! Deterministic fixture builders.
//!
//! The fixtures the original test suites shared as ambient static data are
//! built here by explicit construction functions instead: each test calls
//! what it needs with a seed and gets an independent, reproducible value.

use ndarray::Array2;
use rand::prelude::*;

use crate::data::is_missing;

/// Generate a random sample-major matrix.
///
/// Values are uniform in `[min, max]`.
pub fn random_matrix_f64(rows: usize, cols: usize, seed: u64, min: f64, max: f64) -> Array2<f64> {
    assert!(max >= min);
    let mut rng = StdRng::seed_from_u64(seed);
    let width = max - min;
    let data: Vec<f64> = (0..rows * cols)
        .map(|_| min + rng.random::<f64>() * width)
        .collect();
    Array2::from_shape_vec((rows, cols), data).unwrap()
}

/// Punch missing cells into a matrix at the given rate.
///
/// Guarantees no row and no column ends up entirely missing, so the result
/// always satisfies the imputers' structural preconditions. Rate is clamped
/// per row: at least one cell per row is kept present.
pub fn punch_missing(matrix: &mut Array2<f64>, rate: f64, seed: u64) {
    assert!((0.0..1.0).contains(&rate));
    let mut rng = StdRng::seed_from_u64(seed);
    let cols = matrix.ncols();

    for mut row in matrix.rows_mut() {
        // Keep one randomly chosen cell present no matter what.
        let keep = rng.random_range(0..cols);
        for (j, cell) in row.iter_mut().enumerate() {
            if j != keep && rng.random::<f64>() < rate {
                *cell = f64::NAN;
            }
        }
    }

    // A fully punched column would be unimputable; restore its first cell.
    for j in 0..cols {
        if matrix.column(j).iter().all(|&v| is_missing(v)) {
            matrix[[0, j]] = rng.random::<f64>();
        }
    }
}

/// Generate a binary-class fixture: features plus labels.
///
/// Class 1 rows are shifted by `shift` in every feature, so every column
/// carries signal proportional to `shift`. Rows alternate between classes.
pub fn two_class_matrix(
    rows: usize,
    cols: usize,
    seed: u64,
    shift: f64,
) -> (Array2<f64>, Vec<i32>) {
    let mut matrix = random_matrix_f64(rows, cols, seed, 0.0, 1.0);
    let labels: Vec<i32> = (0..rows).map(|i| (i % 2) as i32).collect();
    for (i, mut row) in matrix.rows_mut().into_iter().enumerate() {
        if labels[i] == 1 {
            row.mapv_inplace(|v| v + shift);
        }
    }
    (matrix, labels)
}
