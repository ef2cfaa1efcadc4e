// ABOUTME: Age-based filtering of foods and recipes
// ABOUTME: Stable, pure filters treating the introduction age as an inclusive lower bound
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Weaning Guide Contributors

//! # Age Filter
//!
//! Given a baby's age in months, select the catalog entries that may be
//! offered. The filters accept any integer: ages below every introduction
//! age simply produce an empty list. Results keep table order, so repeated
//! calls with the same age return equal sequences.

use crate::content::ContentStore;
use weaning_core::models::{Food, Recipe};

/// Foods from the shipped catalog that may be offered at `age` months
///
/// Every food whose `age_start` is at most `age`, in catalog order.
#[must_use]
pub fn foods_for_age(age: i64) -> Vec<&'static Food> {
    ContentStore::global().foods_for_age(age)
}

/// Recipes from the shipped catalog that may be served at `age` months
#[must_use]
pub fn recipes_for_age(age: i64) -> Vec<&'static Recipe> {
    ContentStore::global().recipes_for_age(age)
}

/// Foods with `age_start <= age`, preserving slice order
#[must_use]
pub fn foods_appropriate_for(foods: &[Food], age: i64) -> Vec<&Food> {
    foods.iter().filter(|f| f.is_appropriate_for(age)).collect()
}

/// Recipes whose age label starts at or before `age`, preserving slice order
///
/// Labels that do not parse are left out rather than reported; table
/// validation is where malformed labels surface.
#[must_use]
pub fn recipes_appropriate_for(recipes: &[Recipe], age: i64) -> Vec<&Recipe> {
    recipes.iter().filter(|r| r.is_appropriate_for(age)).collect()
}

/// Foods first offered at exactly `age` months
#[must_use]
pub fn foods_introduced_at(foods: &[Food], age: i64) -> Vec<&Food> {
    foods
        .iter()
        .filter(|f| i64::from(f.age_start) == age)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use weaning_core::models::{FoodCategory, PillarId};

    const fn food(id: &'static str, age_start: u8) -> Food {
        Food {
            id,
            name: id,
            italian_name: id,
            category: FoodCategory::Vegetable,
            age_start,
            nutrients: &["Fiber"],
            dsi_rationale: None,
            preparation: None,
            safety_notes: &[],
            sourcing_italy: None,
        }
    }

    const fn recipe(id: &'static str, age_range: &'static str) -> Recipe {
        Recipe {
            id,
            title: id,
            description: "",
            age_range,
            prep_time: "5 minutes",
            tags: &[],
            ingredients: &[],
            instructions: &[],
            dsi_rationale: None,
            safety_notes: &[],
            pillar: PillarId::Gut,
        }
    }

    #[test]
    fn test_filter_keeps_table_order_not_age_order() {
        let foods = [food("late", 10), food("early", 7), food("middle", 8)];
        let ids: Vec<_> = foods_appropriate_for(&foods, 10).iter().map(|f| f.id).collect();
        assert_eq!(ids, ["late", "early", "middle"]);
    }

    #[test]
    fn test_filter_on_empty_table() {
        assert!(foods_appropriate_for(&[], 12).is_empty());
        assert!(recipes_appropriate_for(&[], 12).is_empty());
    }

    #[test]
    fn test_extreme_ages_never_fail() {
        let foods = [food("a", 7)];
        assert!(foods_appropriate_for(&foods, i64::MIN).is_empty());
        assert_eq!(foods_appropriate_for(&foods, i64::MAX).len(), 1);
    }

    #[test]
    fn test_recipe_filter_uses_lower_bound_and_skips_bad_labels() {
        let recipes = [
            recipe("span", "9-10"),
            recipe("open", "7+"),
            recipe("bad", "soon"),
            recipe("exact", "8"),
        ];
        let ids: Vec<_> = recipes_appropriate_for(&recipes, 8)
            .iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, ["open", "exact"]);

        let ids: Vec<_> = recipes_appropriate_for(&recipes, 14)
            .iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, ["span", "open", "exact"]);
    }

    #[test]
    fn test_introduced_at_is_exact_match() {
        let foods = [food("a", 7), food("b", 8), food("c", 8)];
        let ids: Vec<_> = foods_introduced_at(&foods, 8).iter().map(|f| f.id).collect();
        assert_eq!(ids, ["b", "c"]);
        assert!(foods_introduced_at(&foods, 9).is_empty());
    }
}
