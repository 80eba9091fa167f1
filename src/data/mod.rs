//! Matrix access helpers for tabular data.
//!
//! The crate works directly with `ndarray` arrays in sample-major layout:
//! shape `[n_samples, n_features]`, each sample's features contiguous.
//! The helpers here give the layout and the missing-value convention a
//! single home.
//!
//! # Missing Values
//!
//! Missing values are represented as `f64::NAN`. This is the modern standard
//! used by XGBoost and other libraries, and both the imputers and the
//! feature scorer recognize it identically.

mod matrix;
pub mod stats;

pub use matrix::{axis, has_missing, is_missing, missing_in_column, missing_in_row};
