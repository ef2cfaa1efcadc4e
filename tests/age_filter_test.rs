// ABOUTME: Integration tests for age-based food and recipe filtering
// ABOUTME: Covers ordering, membership, monotonicity, and the shipped 7 and 8 month lists
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Weaning Guide Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{food_ids, init_test_logging, recipe_ids};
use std::collections::HashSet;
use weaning_guide::age_filter::{foods_for_age, recipes_for_age};
use weaning_guide::content::ContentStore;

const SEVEN_MONTHS: [&str; 12] = [
    "yogurt",
    "kefir",
    "egg-yolk",
    "bone-broth",
    "avocado",
    "butter",
    "cod-liver-oil",
    "zucchini",
    "carrots",
    "sweet-potato",
    "pear",
    "banana",
];

#[test]
fn test_first_foods_at_seven_months() {
    init_test_logging();
    assert_eq!(food_ids(&foods_for_age(7)), SEVEN_MONTHS);
}

#[test]
fn test_eight_months_adds_liver_salmon_and_basil() {
    init_test_logging();
    let eight = food_ids(&foods_for_age(8));
    assert_eq!(eight.len(), 15);

    let seven: HashSet<_> = SEVEN_MONTHS.into_iter().collect();
    let added: HashSet<_> = eight.iter().copied().filter(|id| !seven.contains(id)).collect();
    assert_eq!(
        added,
        HashSet::from(["chicken-liver", "wild-salmon", "basil"])
    );
}

#[test]
fn test_too_young_gets_nothing() {
    assert!(foods_for_age(6).is_empty());
    assert!(foods_for_age(0).is_empty());
    assert!(foods_for_age(-12).is_empty());
    assert!(recipes_for_age(6).is_empty());
}

#[test]
fn test_oldest_age_gets_everything() {
    let store = ContentStore::global();
    assert_eq!(foods_for_age(14).len(), store.foods().len());
    assert_eq!(foods_for_age(i64::MAX).len(), store.foods().len());
    assert_eq!(recipes_for_age(14).len(), store.recipes().len());
}

#[test]
fn test_membership_matches_age_start() {
    let store = ContentStore::global();
    for age in 5..=16 {
        let ids: HashSet<_> = food_ids(&foods_for_age(age)).into_iter().collect();
        for food in store.foods() {
            assert_eq!(
                ids.contains(food.id),
                age >= i64::from(food.age_start),
                "{} at {age} months",
                food.id
            );
        }
    }
}

#[test]
fn test_results_are_monotonic_in_age() {
    for younger in 5..=15 {
        for older in younger + 1..=16 {
            let a: HashSet<_> = food_ids(&foods_for_age(younger)).into_iter().collect();
            let b: HashSet<_> = food_ids(&foods_for_age(older)).into_iter().collect();
            assert!(a.is_subset(&b), "{younger} vs {older}");

            let a: HashSet<_> = recipe_ids(&recipes_for_age(younger)).into_iter().collect();
            let b: HashSet<_> = recipe_ids(&recipes_for_age(older)).into_iter().collect();
            assert!(a.is_subset(&b), "{younger} vs {older}");
        }
    }
}

#[test]
fn test_results_keep_table_order() {
    let table: Vec<_> = ContentStore::global().foods().iter().map(|f| f.id).collect();
    for age in 7..=14 {
        let ids = food_ids(&foods_for_age(age));
        let positions: Vec<_> = ids
            .iter()
            .map(|id| table.iter().position(|t| t == id).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}

#[test]
fn test_repeated_calls_are_identical() {
    for age in [7, 9, 12] {
        assert_eq!(foods_for_age(age), foods_for_age(age));
        assert_eq!(recipes_for_age(age), recipes_for_age(age));
    }
}

#[test]
fn test_recipe_counts_by_age() {
    let counts: Vec<_> = [7, 8, 9, 11, 13]
        .into_iter()
        .map(|age| recipes_for_age(age).len())
        .collect();
    assert_eq!(counts, [4, 5, 7, 9, 11]);
}

#[test]
fn test_newly_introduced_partitions_the_catalog() {
    let store = ContentStore::global();
    let total: usize = (7..=14).map(|age| store.newly_introduced_at(age).len()).sum();
    assert_eq!(total, store.foods().len());
    assert_eq!(
        food_ids(&store.newly_introduced_at(8)),
        ["chicken-liver", "wild-salmon", "basil"]
    );
}
