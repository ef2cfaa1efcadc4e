// ABOUTME: Process-wide read-only content store over the compiled-in catalog tables
// ABOUTME: Exposes foods, recipes, and guidance tables with id lookups, stable filters, and validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Weaning Guide Contributors

//! # Content Store
//!
//! The catalog is static literal data compiled into the binary. The store
//! wraps those tables once per process, adds identifier indexes, and hands
//! out shared references; nothing is ever mutated after construction, so a
//! `&'static ContentStore` can be read from any thread.

mod foods;
mod guidance;
mod recipes;

pub use foods::FOODS;
pub use guidance::{
    AGE_STAGES, CATEGORY_INFO, FIVE_PILLARS, INTRODUCTION_SEQUENCE, SAFETY_RULES, VEGETABLE_INFO,
    WEEKLY_ROTATION,
};
pub use recipes::RECIPES;

use crate::age_filter;
use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;
use thiserror::Error;
use tracing::debug;
use weaning_core::constants::ages;
use weaning_core::errors::AppError;
use weaning_core::models::{
    AgeRangeError, AgeStage, CategoryInfo, Food, FoodCategory, IntroductionStep, Pillar,
    PillarId, Recipe, RotationDay, SafetyRule, Severity,
};

/// The set of tables a store is built from
#[derive(Debug, Clone, Copy)]
pub struct CatalogTables {
    /// Food database
    pub foods: &'static [Food],
    /// Recipe collection
    pub recipes: &'static [Recipe],
    /// Category display metadata
    pub categories: &'static [CategoryInfo],
    /// Five-pillar framework
    pub pillars: &'static [Pillar],
    /// Safety rules
    pub safety_rules: &'static [SafetyRule],
    /// Weekly rotation template
    pub weekly_rotation: &'static [RotationDay],
    /// First-weeks introduction plan
    pub introduction_sequence: &'static [IntroductionStep],
    /// Age slider descriptions
    pub age_stages: &'static [AgeStage],
}

/// Tables shipped with the crate
pub const BUILTIN_TABLES: CatalogTables = CatalogTables {
    foods: FOODS,
    recipes: RECIPES,
    categories: CATEGORY_INFO,
    pillars: FIVE_PILLARS,
    safety_rules: SAFETY_RULES,
    weekly_rotation: WEEKLY_ROTATION,
    introduction_sequence: INTRODUCTION_SEQUENCE,
    age_stages: AGE_STAGES,
};

/// A single catalog invariant violation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    /// Two foods share an identifier
    #[error("food id '{0}' appears more than once")]
    DuplicateFoodId(&'static str),

    /// Two recipes share an identifier
    #[error("recipe id '{0}' appears more than once")]
    DuplicateRecipeId(&'static str),

    /// Introduction age outside the supported window
    #[error("food '{id}' starts at {age_start} months, outside {min}-{max}")]
    FoodAgeOutOfRange {
        id: &'static str,
        age_start: u8,
        min: u8,
        max: u8,
    },

    /// Food with an empty nutrient list
    #[error("food '{0}' lists no nutrients")]
    FoodWithoutNutrients(&'static str),

    /// Recipe age label that does not parse
    #[error("recipe '{id}' has an unparseable age range: {source}")]
    RecipeAgeRange {
        id: &'static str,
        source: AgeRangeError,
    },

    /// Liver and cod liver oil on the same day
    #[error("rotation day {0} pairs liver with cod liver oil")]
    VitaminAStacking(&'static str),

    /// Pillar out of framework order
    #[error("pillar '{id}' is numbered {found}, expected {expected}")]
    PillarNumbering {
        id: PillarId,
        expected: u8,
        found: u8,
    },

    /// Category missing from the display table
    #[error("category '{0}' has no display metadata")]
    MissingCategoryInfo(FoodCategory),

    /// Age stage table of the wrong length
    #[error("age stages cover {found} months, expected {expected}")]
    AgeStageCount { expected: usize, found: usize },

    /// Age stage out of month order
    #[error("age stage at position {position} describes {found} months, expected {expected}")]
    AgeStageOrder {
        position: usize,
        expected: u8,
        found: u8,
    },
}

/// Catalog validation failure, listing every violation found
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("catalog has {} violation(s): {}", .violations.len(), summarize(.violations))]
pub struct ValidationError {
    /// Violations in table order
    pub violations: Vec<Violation>,
}

fn summarize(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl From<ValidationError> for AppError {
    fn from(error: ValidationError) -> Self {
        Self::catalog_invalid(error.to_string()).with_source(error)
    }
}

/// Read-only view over a set of catalog tables
#[derive(Debug)]
pub struct ContentStore {
    tables: CatalogTables,
    food_index: HashMap<&'static str, usize>,
    recipe_index: HashMap<&'static str, usize>,
}

static CONTENT_STORE: OnceLock<ContentStore> = OnceLock::new();

impl ContentStore {
    /// Get the process-wide store over the shipped tables
    pub fn global() -> &'static Self {
        CONTENT_STORE.get_or_init(|| Self::new(BUILTIN_TABLES))
    }

    /// Build a store over arbitrary tables
    ///
    /// Duplicate identifiers are tolerated here (the first entry wins for
    /// lookups) and reported by [`ContentStore::validate`].
    #[must_use]
    pub fn new(tables: CatalogTables) -> Self {
        let mut food_index = HashMap::with_capacity(tables.foods.len());
        for (position, food) in tables.foods.iter().enumerate() {
            food_index.entry(food.id).or_insert(position);
        }

        let mut recipe_index = HashMap::with_capacity(tables.recipes.len());
        for (position, recipe) in tables.recipes.iter().enumerate() {
            recipe_index.entry(recipe.id).or_insert(position);
        }

        debug!(
            foods = tables.foods.len(),
            recipes = tables.recipes.len(),
            "Content store initialized"
        );

        Self {
            tables,
            food_index,
            recipe_index,
        }
    }

    /// All foods in table order
    #[must_use]
    pub const fn foods(&self) -> &'static [Food] {
        self.tables.foods
    }

    /// All recipes in table order
    #[must_use]
    pub const fn recipes(&self) -> &'static [Recipe] {
        self.tables.recipes
    }

    /// Category display metadata
    #[must_use]
    pub const fn category_info_table(&self) -> &'static [CategoryInfo] {
        self.tables.categories
    }

    /// The five pillars in framework order
    #[must_use]
    pub const fn pillars(&self) -> &'static [Pillar] {
        self.tables.pillars
    }

    /// Safety rules
    #[must_use]
    pub const fn safety_rules(&self) -> &'static [SafetyRule] {
        self.tables.safety_rules
    }

    /// Weekly rotation template
    #[must_use]
    pub const fn weekly_rotation(&self) -> &'static [RotationDay] {
        self.tables.weekly_rotation
    }

    /// First-weeks introduction plan
    #[must_use]
    pub const fn introduction_sequence(&self) -> &'static [IntroductionStep] {
        self.tables.introduction_sequence
    }

    /// Age slider descriptions
    #[must_use]
    pub const fn age_stages(&self) -> &'static [AgeStage] {
        self.tables.age_stages
    }

    /// Look up a food by identifier
    #[must_use]
    pub fn food(&self, id: &str) -> Option<&'static Food> {
        let foods = self.tables.foods;
        self.food_index.get(id).and_then(|&i| foods.get(i))
    }

    /// Look up a recipe by identifier
    #[must_use]
    pub fn recipe(&self, id: &str) -> Option<&'static Recipe> {
        let recipes = self.tables.recipes;
        self.recipe_index.get(id).and_then(|&i| recipes.get(i))
    }

    /// Look up a pillar by key
    #[must_use]
    pub fn pillar(&self, id: PillarId) -> Option<&'static Pillar> {
        self.tables.pillars.iter().find(|p| p.id == id)
    }

    /// Foods of one category, in table order
    #[must_use]
    pub fn foods_in_category(&self, category: FoodCategory) -> Vec<&'static Food> {
        self.tables
            .foods
            .iter()
            .filter(|f| f.category == category)
            .collect()
    }

    /// Recipes classified under one pillar, in table order
    #[must_use]
    pub fn recipes_for_pillar(&self, pillar: PillarId) -> Vec<&'static Recipe> {
        self.tables
            .recipes
            .iter()
            .filter(|r| r.pillar == pillar)
            .collect()
    }

    /// Safety rules of one severity, in table order
    #[must_use]
    pub fn safety_rules_with_severity(&self, severity: Severity) -> Vec<&'static SafetyRule> {
        self.tables
            .safety_rules
            .iter()
            .filter(|r| r.severity == severity)
            .collect()
    }

    /// Foods that may be offered at `age` months, see [`age_filter::foods_appropriate_for`]
    #[must_use]
    pub fn foods_for_age(&self, age: i64) -> Vec<&'static Food> {
        age_filter::foods_appropriate_for(self.tables.foods, age)
    }

    /// Recipes that may be served at `age` months, see [`age_filter::recipes_appropriate_for`]
    #[must_use]
    pub fn recipes_for_age(&self, age: i64) -> Vec<&'static Recipe> {
        age_filter::recipes_appropriate_for(self.tables.recipes, age)
    }

    /// Foods first offered at exactly `age` months
    #[must_use]
    pub fn newly_introduced_at(&self, age: i64) -> Vec<&'static Food> {
        age_filter::foods_introduced_at(self.tables.foods, age)
    }

    /// Check every table invariant
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] listing all violations when any invariant
    /// does not hold.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut violations = Vec::new();

        let mut seen = HashSet::new();
        for food in self.tables.foods {
            if !seen.insert(food.id) {
                violations.push(Violation::DuplicateFoodId(food.id));
            }
            if !(ages::MIN_MONTHS..=ages::MAX_MONTHS).contains(&food.age_start) {
                violations.push(Violation::FoodAgeOutOfRange {
                    id: food.id,
                    age_start: food.age_start,
                    min: ages::MIN_MONTHS,
                    max: ages::MAX_MONTHS,
                });
            }
            if food.nutrients.is_empty() {
                violations.push(Violation::FoodWithoutNutrients(food.id));
            }
        }

        let mut seen = HashSet::new();
        for recipe in self.tables.recipes {
            if !seen.insert(recipe.id) {
                violations.push(Violation::DuplicateRecipeId(recipe.id));
            }
            if let Err(source) = recipe.parsed_age_range() {
                violations.push(Violation::RecipeAgeRange {
                    id: recipe.id,
                    source,
                });
            }
        }

        violations.extend(
            self.tables
                .weekly_rotation
                .iter()
                .filter(|day| day.stacks_vitamin_a())
                .map(|day| Violation::VitaminAStacking(day.day)),
        );

        for (position, pillar) in self.tables.pillars.iter().enumerate() {
            let expected = pillar.id.number();
            let in_order = usize::from(pillar.number) == position + 1;
            if pillar.number != expected || !in_order {
                violations.push(Violation::PillarNumbering {
                    id: pillar.id,
                    expected,
                    found: pillar.number,
                });
            }
        }

        violations.extend(
            FoodCategory::ALL
                .into_iter()
                .filter(|c| !self.tables.categories.iter().any(|i| i.category == *c))
                .map(Violation::MissingCategoryInfo),
        );

        let expected_stages = usize::from(ages::MAX_MONTHS - ages::MIN_MONTHS) + 1;
        if self.tables.age_stages.len() != expected_stages {
            violations.push(Violation::AgeStageCount {
                expected: expected_stages,
                found: self.tables.age_stages.len(),
            });
        }
        for (position, (stage, expected)) in self
            .tables
            .age_stages
            .iter()
            .zip(ages::MIN_MONTHS..=ages::MAX_MONTHS)
            .enumerate()
        {
            if stage.months != expected {
                violations.push(Violation::AgeStageOrder {
                    position,
                    expected,
                    found: stage.months,
                });
            }
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { violations })
        }
    }
}
