// ABOUTME: Integration tests for the content store and catalog validation
// ABOUTME: Covers lookups, filters, shipped table invariants, and violation reporting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Weaning Guide Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{food_ids, init_test_logging, recipe_ids};
use std::collections::HashSet;
use weaning_guide::content::{CatalogTables, ContentStore, Violation, BUILTIN_TABLES};
use weaning_guide::errors::{AppError, ErrorCode};
use weaning_guide::models::{
    AgeRange, AgeStage, Food, FoodCategory, Pillar, PillarId, Recipe, RotationDay, Severity,
};

const BAD_RECIPE: Recipe = Recipe {
    id: "mystery-mash",
    title: "Mystery Mash",
    description: "",
    age_range: "soon",
    prep_time: "5 minutes",
    tags: &[],
    ingredients: &[],
    instructions: &[],
    dsi_rationale: None,
    safety_notes: &[],
    pillar: PillarId::Gut,
};

const EARLY_FOOD: Food = Food {
    id: "rice-cereal",
    name: "Rice Cereal",
    italian_name: "Crema di riso",
    category: FoodCategory::Grain,
    age_start: 4,
    nutrients: &[],
    dsi_rationale: None,
    preparation: None,
    safety_notes: &[],
    sourcing_italy: None,
};

#[test]
fn test_shipped_catalog_is_valid() {
    init_test_logging();
    assert_eq!(ContentStore::global().validate(), Ok(()));
}

#[test]
fn test_table_sizes() {
    let store = ContentStore::global();
    assert_eq!(store.foods().len(), 18);
    assert_eq!(store.recipes().len(), 11);
    assert_eq!(store.pillars().len(), 5);
    assert_eq!(store.weekly_rotation().len(), 7);
    assert_eq!(store.age_stages().len(), 8);
    assert_eq!(store.category_info_table().len(), FoodCategory::ALL.len());
}

#[test]
fn test_identifiers_are_unique() {
    let store = ContentStore::global();
    let foods: HashSet<_> = store.foods().iter().map(|f| f.id).collect();
    let recipes: HashSet<_> = store.recipes().iter().map(|r| r.id).collect();
    assert_eq!(foods.len(), store.foods().len());
    assert_eq!(recipes.len(), store.recipes().len());
}

#[test]
fn test_every_recipe_label_round_trips() {
    for recipe in ContentStore::global().recipes() {
        let range: AgeRange = recipe.age_range.parse().unwrap();
        assert_eq!(range.to_string(), recipe.age_range);
    }
}

#[test]
fn test_rotation_never_stacks_vitamin_a() {
    assert!(ContentStore::global()
        .weekly_rotation()
        .iter()
        .all(|day| !day.stacks_vitamin_a()));
}

#[test]
fn test_pillar_lookup_and_recipes() {
    let store = ContentStore::global();
    for id in PillarId::ALL {
        let pillar = store.pillar(id).unwrap();
        assert_eq!(pillar.number, id.number());
    }
    assert_eq!(
        recipe_ids(&store.recipes_for_pillar(PillarId::Dha)),
        ["salmon-broth-mash", "sardine-mash"]
    );
}

#[test]
fn test_category_filter_keeps_order() {
    let store = ContentStore::global();
    assert_eq!(
        food_ids(&store.foods_in_category(FoodCategory::Fermented)),
        ["yogurt", "kefir"]
    );
    assert!(store.foods_in_category(FoodCategory::Dairy).iter().all(|f| f.category == FoodCategory::Dairy));
}

#[test]
fn test_severity_filter_partitions_rules() {
    let store = ContentStore::global();
    let critical = store.safety_rules_with_severity(Severity::Critical);
    assert!(!critical.is_empty());
    assert!(critical.iter().all(|r| r.severity == Severity::Critical));
    let total: usize = [Severity::Critical, Severity::Important, Severity::Recommendation]
        .into_iter()
        .map(|s| store.safety_rules_with_severity(s).len())
        .sum();
    assert_eq!(total, store.safety_rules().len());
}

#[test]
fn test_validation_reports_every_violation() {
    static FOODS: [Food; 2] = [EARLY_FOOD, EARLY_FOOD];
    static RECIPES: [Recipe; 1] = [BAD_RECIPE];
    static ROTATION: [RotationDay; 1] = [RotationDay {
        day: "Monday",
        liver: true,
        clo: true,
        main_protein: "Liver",
    }];
    static STAGES: [AgeStage; 1] = [AgeStage {
        months: 8,
        label: "8 months",
        description: "",
    }];
    static PILLARS: [Pillar; 0] = [];

    let store = ContentStore::new(CatalogTables {
        foods: &FOODS,
        recipes: &RECIPES,
        weekly_rotation: &ROTATION,
        age_stages: &STAGES,
        pillars: &PILLARS,
        ..BUILTIN_TABLES
    });

    let violations = store.validate().unwrap_err().violations;
    assert!(violations.contains(&Violation::DuplicateFoodId("rice-cereal")));
    assert!(violations.contains(&Violation::FoodWithoutNutrients("rice-cereal")));
    assert!(violations.contains(&Violation::VitaminAStacking("Monday")));
    assert!(violations.iter().any(|v| matches!(
        v,
        Violation::FoodAgeOutOfRange { id: "rice-cereal", age_start: 4, .. }
    )));
    assert!(violations.iter().any(|v| matches!(
        v,
        Violation::RecipeAgeRange { id: "mystery-mash", .. }
    )));
    assert!(violations.iter().any(|v| matches!(v, Violation::AgeStageCount { found: 1, .. })));
    assert!(violations.iter().any(|v| matches!(
        v,
        Violation::AgeStageOrder { position: 0, expected: 7, found: 8 }
    )));
}

#[test]
fn test_duplicate_ids_resolve_to_first_entry() {
    static FOODS: [Food; 2] = [
        EARLY_FOOD,
        Food {
            name: "Second",
            ..EARLY_FOOD
        },
    ];
    let store = ContentStore::new(CatalogTables {
        foods: &FOODS,
        ..BUILTIN_TABLES
    });
    assert_eq!(store.food("rice-cereal").map(|f| f.name), Some("Rice Cereal"));
}

#[test]
fn test_validation_error_becomes_catalog_invalid() {
    static RECIPES: [Recipe; 1] = [BAD_RECIPE];
    let store = ContentStore::new(CatalogTables {
        recipes: &RECIPES,
        ..BUILTIN_TABLES
    });
    let error: AppError = store.validate().unwrap_err().into();
    assert_eq!(error.code, ErrorCode::CatalogInvalid);
    assert_eq!(error.exit_code(), 65);
    assert!(error.message.contains("mystery-mash"));
}
