// =====================================================================
// File: index/proptests.rs
// Project: parcelindex
// Date: Oct 18, 2026
//
// Description:
//   Property tests for the parcel index, run over randomly generated
//   batches of parcels drawn from a small pool of country names.
//
// Notes:
//   * `validate_tree` checks the search-tree bound on every node: all
//     of a left subtree is lighter than its root, all of a right subtree
//     is at least as heavy.
//   * The country pool includes two colliding pairs so shared buckets
//     are exercised.
// =====================================================================
use super::*;
use crate::Parcel;

use proptest::prelude::*;

// Checks the BST ordering on every node: left strictly lighter, right at
// least as heavy, for the whole subtree.
fn validate_tree(tree: &BucketTree) {
    let mut stack: Vec<(&ParcelNode, f64, f64)> =
        vec![(tree.root(), f64::NEG_INFINITY, f64::INFINITY)];
    let mut seen = 0usize;

    while let Some((node, low, high)) = stack.pop() {
        let w = node.parcel.weight();
        assert!(w >= low, "node {w} below subtree floor {low}");
        assert!(w < high, "node {w} not below subtree ceiling {high}");
        seen += 1;

        if let Some(left) = node.left.as_deref() {
            stack.push((left, low, w));
        }
        if let Some(right) = node.right.as_deref() {
            stack.push((right, w, high));
        }
    }

    assert_eq!(seen, tree.len(), "reachable node count must match len");
}

fn country_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("canada".to_string()),
        Just("chad".to_string()),
        Just("peru".to_string()),
        Just("israel".to_string()),
        Just("sweden".to_string()),
        "[a-z]{1,12}",
    ]
}

fn parcels_strategy() -> impl Strategy<Value = Vec<(String, f64, f64)>> {
    // Integral weights so ties show up often
    let parcel = (country_strategy(), 100u32..=400, 10u32..=2000)
        .prop_map(|(c, w, v)| (c, f64::from(w), f64::from(v)));
    prop::collection::vec(parcel, 0..=300)
}

fn build(parcels: &[(String, f64, f64)]) -> ParcelIndex {
    let mut index = ParcelIndex::new();
    for (country, weight, value) in parcels {
        index.insert(country, *weight, *value);
    }
    index
}

fn sorted_pairs(mut pairs: Vec<(f64, f64)>) -> Vec<(f64, f64)> {
    pairs.sort_by(|a, b| a.partial_cmp(b).unwrap());
    pairs
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    #[test]
    fn prop_bucket_holds_exactly_its_inserts(parcels in parcels_strategy()) {
        let index = build(&parcels);
        prop_assert_eq!(index.len(), parcels.len());

        for (slot, tree) in index.buckets() {
            validate_tree(tree);

            let expected: Vec<(f64, f64)> = parcels
                .iter()
                .filter(|(c, _, _)| hash_country(c) == slot)
                .map(|(_, w, v)| (*w, *v))
                .collect();
            let actual: Vec<(f64, f64)> = tree.iter().map(|p| (p.weight(), p.value())).collect();
            prop_assert_eq!(sorted_pairs(actual), sorted_pairs(expected));

            // Every parcel reachable from a slot hashes to that slot
            prop_assert!(tree.iter().all(|p| hash_country(p.country()) == slot));
        }
    }

    #[test]
    fn prop_in_order_weights_non_decreasing(parcels in parcels_strategy()) {
        let index = build(&parcels);
        for (_, tree) in index.buckets() {
            let weights: Vec<f64> = tree.iter().map(Parcel::weight).collect();
            prop_assert!(weights.windows(2).all(|w| w[0] <= w[1]));
        }
    }

    #[test]
    fn prop_totals_independent_of_insert_order(parcels in parcels_strategy()) {
        let forward = build(&parcels);
        let reversed: Vec<_> = parcels.iter().cloned().rev().collect();
        let backward = build(&reversed);

        for (country, _, _) in &parcels {
            let a = forward.totals(country).unwrap();
            let b = backward.totals(country).unwrap();
            // Integral inputs keep the sums exact in either order
            prop_assert_eq!(a, b);
        }
    }

    #[test]
    fn prop_weight_filters_partition_listing(
        parcels in parcels_strategy(),
        threshold in 100u32..=400,
    ) {
        let index = build(&parcels);
        let t = f64::from(threshold);

        for (country, _, _) in &parcels {
            let all: Vec<f64> = index.list_all(country).unwrap().map(Parcel::weight).collect();
            let heavier: Vec<f64> = index
                .list_by_weight(country, t, WeightFilter::Heavier)
                .unwrap()
                .map(Parcel::weight)
                .collect();
            let lighter: Vec<f64> = index
                .list_by_weight(country, t, WeightFilter::Lighter)
                .unwrap()
                .map(Parcel::weight)
                .collect();
            let equal = all.iter().filter(|w| **w == t).count();

            prop_assert!(heavier.iter().all(|w| *w > t));
            prop_assert!(lighter.iter().all(|w| *w < t));
            prop_assert_eq!(heavier.len() + lighter.len() + equal, all.len());
        }
    }

    #[test]
    fn prop_extremes_bound_every_parcel(parcels in parcels_strategy()) {
        let index = build(&parcels);
        for (country, _, _) in &parcels {
            let by_weight = index.weight_extremes(country).unwrap();
            let by_value = index.value_extremes(country).unwrap();
            for p in index.list_all(country).unwrap() {
                prop_assert!(by_weight.lowest.weight() <= p.weight());
                prop_assert!(by_weight.highest.weight() >= p.weight());
                prop_assert!(by_value.lowest.value() <= p.value());
                prop_assert!(by_value.highest.value() >= p.value());
            }
        }
    }
}
