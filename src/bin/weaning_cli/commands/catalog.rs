// ABOUTME: Food and recipe commands: filtered listings and single-record lookups
// ABOUTME: Listings render as cards in text mode and as full records in structured formats
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Weaning Guide Contributors

use super::render;
use std::time::Instant;
use tracing::debug;
use weaning_guide::cards::{render_list, Card, FoodCardView, RecipeCardView};
use weaning_guide::content::ContentStore;
use weaning_guide::errors::{AppError, AppResult};
use weaning_guide::formatters::ReportFormat;
use weaning_guide::logging::CatalogLogger;
use weaning_guide::models::{Food, FoodCategory, PillarId, Recipe};

/// List foods, optionally restricted to an age and a category
pub fn list_foods(
    store: &ContentStore,
    format: ReportFormat,
    age: Option<i64>,
    category: Option<&str>,
) -> AppResult<String> {
    let started = Instant::now();
    let category = category.map(parse_category).transpose()?;

    let mut foods: Vec<&'static Food> = match age {
        Some(age) => store.foods_for_age(age),
        None => store.foods().iter().collect(),
    };
    if let Some(category) = category {
        foods.retain(|f| f.category == category);
    }
    CatalogLogger::log_query("foods", age, foods.len(), elapsed_us(started));

    render(format, &foods, || {
        let cards: Vec<_> = foods.iter().map(|f| FoodCardView::from_food(f)).collect();
        let heading = match age {
            Some(age) => {
                let new = store.newly_introduced_at(age).len();
                format!(
                    "{} foods suitable at {age} months ({new} new this month)",
                    cards.len()
                )
            }
            None => format!("{} foods", cards.len()),
        };
        format!("{heading}\n\n{}", render_list(&cards))
    })
}

/// Show one food in full
pub fn show_food(store: &ContentStore, format: ReportFormat, id: &str) -> AppResult<String> {
    let food = store.food(id).ok_or_else(|| {
        CatalogLogger::log_lookup_miss("food", id);
        AppError::not_found(format!("Food '{id}'")).with_resource_id(id)
    })?;
    render(format, food, || Card(food).to_string())
}

/// List recipes, optionally restricted to an age and a pillar
pub fn list_recipes(
    store: &ContentStore,
    format: ReportFormat,
    age: Option<i64>,
    pillar: Option<&str>,
) -> AppResult<String> {
    let started = Instant::now();
    let pillar = pillar.map(parse_pillar).transpose()?;

    let mut recipes: Vec<&'static Recipe> = match age {
        Some(age) => store.recipes_for_age(age),
        None => store.recipes().iter().collect(),
    };
    if let Some(pillar) = pillar {
        recipes.retain(|r| r.pillar == pillar);
    }
    CatalogLogger::log_query("recipes", age, recipes.len(), elapsed_us(started));

    render(format, &recipes, || {
        let cards: Vec<_> = recipes
            .iter()
            .map(|r| RecipeCardView::from_recipe(r))
            .collect();
        format!("{} recipes\n\n{}", cards.len(), render_list(&cards))
    })
}

/// Show one recipe in full
pub fn show_recipe(store: &ContentStore, format: ReportFormat, id: &str) -> AppResult<String> {
    let recipe = store.recipe(id).ok_or_else(|| {
        CatalogLogger::log_lookup_miss("recipe", id);
        AppError::not_found(format!("Recipe '{id}'")).with_resource_id(id)
    })?;
    render(format, recipe, || Card(recipe).to_string())
}

fn parse_category(key: &str) -> AppResult<FoodCategory> {
    FoodCategory::parse(key).ok_or_else(|| {
        debug!(category = key, "Rejected unknown category filter");
        AppError::invalid_input(format!(
            "unknown category '{key}', expected one of: {}",
            FoodCategory::ALL.map(|c| c.as_str()).join(", ")
        ))
    })
}

fn parse_pillar(key: &str) -> AppResult<PillarId> {
    PillarId::parse(key).ok_or_else(|| {
        AppError::invalid_input(format!(
            "unknown pillar '{key}', expected one of: {}",
            PillarId::ALL.map(|p| p.as_str()).join(", ")
        ))
    })
}

fn elapsed_us(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX)
}
