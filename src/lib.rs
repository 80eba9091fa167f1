//! imputers: missing-value imputation and feature scoring for tabular data.
//!
//! Two diagnostics over real-valued matrices that may contain missing
//! entries (represented as `f64::NAN`):
//!
//! - [`KnnImputer`] - fills missing cells from the k most similar rows,
//!   using partial squared-Euclidean distances with overlap correction
//! - [`SignalNoiseRatio`] - per-feature binary-class separability score,
//!   `|mean0 - mean1| / (sd0 + sd1)`
//!
//! # Data Model
//!
//! Matrices are sample-major `ndarray` arrays: shape `[n_samples, n_features]`.
//! Missing values are `f64::NAN`, the convention shared by both components.
//!
//! # Imputation
//!
//! ```
//! use imputers::{Imputation, KnnImputer};
//! use ndarray::array;
//!
//! let mut data = array![[1.0, 2.0], [2.0, f64::NAN], [10.0, 20.0]];
//! let imputer = KnnImputer::new(1).unwrap();
//! imputer.impute(data.view_mut()).unwrap();
//! assert_eq!(data[[1, 1]], 2.0);
//! ```
//!
//! # Feature Scoring
//!
//! ```
//! use imputers::{FeatureRanking, SignalNoiseRatio};
//! use ndarray::array;
//!
//! let x = array![[0.0, 1.0], [0.2, 2.0], [4.0, 1.5], [4.2, 2.5]];
//! let scores = SignalNoiseRatio.rank(x.view(), &[0, 0, 1, 1]).unwrap();
//! assert!(scores[0] > scores[1]);
//! ```

// Re-export approx traits for users who want to compare imputed matrices
pub use approx;

pub mod data;
pub mod feature;
pub mod impute;
pub mod testing;
pub mod utils;

// =============================================================================
// Convenience Re-exports
// =============================================================================

// Imputation types
pub use impute::{Imputation, ImputeError, KnnImputer, MeanImputer};

// Feature ranking types
pub use feature::{ClassLabels, FeatureError, FeatureRanking, SignalNoiseRatio};

// Shared utilities
pub use utils::Parallelism;
