//! Property tests over arbitrary valid two-group inputs.

use abtest::analysis::{cohens_h, ind_power, proportions_ztest, wald_interval};
use abtest::{AbTest, Alternative, GroupPair, GroupSummary};
use proptest::prelude::*;

fn group(label: &'static str) -> impl Strategy<Value = GroupSummary> {
    (1u64..20_000)
        .prop_flat_map(|sessions| (0..=sessions, Just(sessions)))
        .prop_map(move |(conversions, sessions)| GroupSummary::new(label, conversions, sessions))
}

fn pair() -> impl Strategy<Value = GroupPair> {
    (group("A"), group("B")).prop_map(|(a, b)| GroupPair::new(a, b))
}

proptest! {
    #[test]
    fn rates_are_exact_ratios(pair in pair()) {
        let rates = pair.rates().unwrap();
        prop_assert!((rates.a - pair.a.conversions as f64 / pair.a.sessions as f64).abs() < 1e-9);
        prop_assert!((rates.b - pair.b.conversions as f64 / pair.b.sessions as f64).abs() < 1e-9);
    }

    #[test]
    fn swapping_groups_negates_z(pair in pair()) {
        let forward = proportions_ztest(&pair, Alternative::TwoSided).unwrap();
        let backward = proportions_ztest(&pair.swapped(), Alternative::TwoSided).unwrap();

        prop_assume!(forward.z_score.is_finite());
        prop_assert!((forward.z_score + backward.z_score).abs() < 1e-9);
        prop_assert!((forward.p_value - backward.p_value).abs() < 1e-12);
    }

    #[test]
    fn interval_brackets_difference(pair in pair(), alpha in 0.001f64..0.5) {
        let ci = wald_interval(&pair, alpha).unwrap();
        prop_assert!(ci.z_critical >= 0.0);
        prop_assert!(ci.lower <= ci.diff && ci.diff <= ci.upper);
    }

    #[test]
    fn cohens_h_is_antisymmetric(pair in pair()) {
        let forward = cohens_h(&pair.rates().unwrap());
        let backward = cohens_h(&pair.swapped().rates().unwrap());
        prop_assert!((forward + backward).abs() < 1e-12);
    }

    #[test]
    fn power_grows_with_sample_size(
        h in prop_oneof![-1.0f64..-0.001, 0.001f64..1.0],
        n in 2.0f64..100_000.0,
        extra in 0.0f64..100_000.0,
        alpha in 0.01f64..0.2,
    ) {
        let small = ind_power(h, n, alpha, 1.0, Alternative::TwoSided);
        let large = ind_power(h, n + extra, alpha, 1.0, Alternative::TwoSided);
        prop_assert!(large >= small - 1e-12);
        prop_assert!((0.0..=1.0).contains(&small));
    }

    #[test]
    fn pipeline_never_panics_on_valid_counts(pair in pair()) {
        let report = AbTest::new().run_pair(&pair).unwrap();
        prop_assert!(report.effect.power >= 0.0);
    }
}

#[test]
fn equal_rates_have_zero_effect() {
    let pair = GroupPair::new(GroupSummary::new("A", 25, 100), GroupSummary::new("B", 50, 200));
    let report = AbTest::new().run_pair(&pair).unwrap();
    assert_eq!(report.effect.cohens_h, 0.0);
    assert_eq!(report.test.z_score, 0.0);
    assert!((report.test.p_value - 1.0).abs() < 1e-12);
    // A zero effect leaves power at the significance level of the power test.
    assert!((report.effect.power - 0.08).abs() < 1e-12);
}
