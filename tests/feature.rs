//! Feature ranking integration tests.

use imputers::assert_approx_eq;
use imputers::testing::data::two_class_matrix;
use imputers::{FeatureError, FeatureRanking, SignalNoiseRatio};
use ndarray::array;

#[test]
fn known_scenario_scores_two() {
    // Means differ by 4, sample sds sum to 2.
    let x = array![[-1.0], [0.0], [1.0], [3.0], [4.0], [5.0]];
    let scores = SignalNoiseRatio.rank(x.view(), &[0, 0, 0, 1, 1, 1]).unwrap();
    assert_approx_eq!(scores[0], 2.0, 1e-12);
}

#[test]
fn scores_are_symmetric_under_label_swap() {
    let (x, labels) = two_class_matrix(20, 5, 77, 2.0);
    let swapped: Vec<i32> = labels.iter().map(|&l| 1 - l).collect();

    let a = SignalNoiseRatio.rank(x.view(), &labels).unwrap();
    let b = SignalNoiseRatio.rank(x.view(), &swapped).unwrap();
    assert_eq!(a, b);
}

#[test]
fn label_codes_are_canonicalized() {
    let (x, labels) = two_class_matrix(16, 3, 21, 1.5);
    let recoded: Vec<i32> = labels.iter().map(|&l| if l == 0 { -1 } else { 7 }).collect();

    let a = SignalNoiseRatio.rank(x.view(), &labels).unwrap();
    let b = SignalNoiseRatio.rank(x.view(), &recoded).unwrap();
    assert_eq!(a, b);
}

#[test]
fn shifted_features_carry_signal() {
    let (x, labels) = two_class_matrix(40, 4, 13, 5.0);
    let scores = SignalNoiseRatio.rank(x.view(), &labels).unwrap();
    // Every column was shifted by 5 between classes; uniform noise has
    // sd ~0.29, so each score should be comfortably above 1.
    for score in scores {
        assert!(score > 1.0);
    }
}

#[test]
fn three_class_labels_are_rejected() {
    let x = array![[1.0], [2.0], [3.0]];
    assert_eq!(
        SignalNoiseRatio.rank(x.view(), &[0, 1, 2]),
        Err(FeatureError::NotBinary { n_classes: 3 })
    );
}

#[test]
fn length_mismatch_is_rejected() {
    let x = array![[1.0], [2.0], [3.0]];
    assert_eq!(
        SignalNoiseRatio.rank(x.view(), &[0, 1]),
        Err(FeatureError::SizeMismatch { rows: 3, labels: 2 })
    );
}

#[test]
fn output_is_column_aligned() {
    let (x, labels) = two_class_matrix(10, 7, 3, 1.0);
    let scores = SignalNoiseRatio.rank(x.view(), &labels).unwrap();
    assert_eq!(scores.len(), x.ncols());
}
