//! Property-based tests for imputation invariants.

use imputers::testing::data::{punch_missing, random_matrix_f64};
use imputers::{Imputation, KnnImputer, Parallelism};
use ndarray::Array2;
use proptest::prelude::*;

/// Strategy for small complete matrices with finite values.
fn complete_matrix() -> impl Strategy<Value = Array2<f64>> {
    (1usize..8, 1usize..6).prop_flat_map(|(rows, cols)| {
        proptest::collection::vec(-100.0f64..100.0, rows * cols)
            .prop_map(move |data| Array2::from_shape_vec((rows, cols), data).unwrap())
    })
}

proptest! {
    #[test]
    fn complete_matrices_are_untouched(data in complete_matrix(), k in 1usize..5) {
        let mut imputed = data.clone();
        KnnImputer::new(k).unwrap().impute(imputed.view_mut()).unwrap();
        prop_assert_eq!(imputed, data);
    }

    #[test]
    fn punched_matrices_become_finite(
        seed in 0u64..1000,
        rate in 0.0f64..0.6,
        k in 1usize..5,
    ) {
        let mut data = random_matrix_f64(12, 4, seed, -5.0, 5.0);
        punch_missing(&mut data, rate, seed.wrapping_add(1));

        KnnImputer::new(k).unwrap().impute(data.view_mut()).unwrap();
        prop_assert!(data.iter().all(|v| v.is_finite()));
    }

    #[test]
    fn parallel_and_sequential_agree(seed in 0u64..500, k in 1usize..4) {
        let template = {
            let mut m = random_matrix_f64(10, 5, seed, 0.0, 50.0);
            punch_missing(&mut m, 0.4, seed.wrapping_add(99));
            m
        };

        let imputer = KnnImputer::new(k).unwrap();
        let mut seq = template.clone();
        let mut par = template.clone();
        imputer.impute_with(seq.view_mut(), Parallelism::Sequential).unwrap();
        imputer.impute_with(par.view_mut(), Parallelism::Parallel).unwrap();
        prop_assert_eq!(seq, par);
    }
}
