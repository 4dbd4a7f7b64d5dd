//! Property tests for frequency analysis invariants

use proptest::prelude::*;
use survey_freq::{analyze, chi_square_uniform};

proptest! {
    #[test]
    fn frequencies_sum_to_sample_size(
        values in prop::collection::vec(prop::option::of("[a-e]"), 0..200)
    ) {
        let analysis = analyze(values.clone()).unwrap();
        let n = values.iter().flatten().count() as u64;
        prop_assert_eq!(analysis.sample_size(), n);
        prop_assert_eq!(analysis.table().total_count(), n);
    }

    #[test]
    fn percents_sum_to_one_hundred(
        values in prop::collection::vec("[a-h]", 1..200)
    ) {
        let analysis = analyze(values.iter().map(Some)).unwrap();
        prop_assert!((analysis.table().percent_total() - 100.0).abs() < 0.1);
    }

    #[test]
    fn p_value_not_computable_iff_fewer_than_two_categories(
        values in prop::collection::vec(prop::option::of("[a-c]"), 0..100)
    ) {
        let analysis = analyze(values).unwrap();
        prop_assert_eq!(
            analysis.p_value().is_computable(),
            analysis.table().len() >= 2
        );
    }

    #[test]
    fn p_value_is_a_probability(
        counts in prop::collection::vec(1u64..100, 2..20)
    ) {
        let gof = chi_square_uniform(&counts).unwrap();
        prop_assert!((0.0..=1.0).contains(&gof.p_value()));
    }

    #[test]
    fn analysis_is_idempotent(
        values in prop::collection::vec(prop::option::of("[a-d]"), 0..100)
    ) {
        let first = analyze(values.clone()).unwrap();
        let second = analyze(values).unwrap();
        prop_assert_eq!(first, second);
    }
}
