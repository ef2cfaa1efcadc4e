// ABOUTME: Card views of foods and recipes plus plain-text rendering of every catalog record
// ABOUTME: Card views trim lists the way the guide's cards do; TextCard renders records for terminals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Weaning Guide Contributors

//! # Cards
//!
//! A card is the compact form a record takes in a listing: a food card shows
//! its first three nutrients, a recipe card its first four tags followed by
//! a "+N more" count. Card views are serializable, so structured output of a
//! listing carries the same resolved icons and badge classes a text listing
//! shows.

use crate::display::{age_badge_class, card_style, category_info, food_age_tone, CardStyle};
use serde::Serialize;
use std::fmt;
use weaning_core::constants::cards;
use weaning_core::models::{
    AgeStage, CategoryInfo, Food, FoodCategory, IntroductionStep, Palette, Pillar, PillarId,
    Recipe, RotationDay, SafetyRule,
};

/// Food as shown in a listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FoodCardView {
    /// Food identifier
    pub id: &'static str,
    /// English name
    pub name: &'static str,
    /// Italian name
    pub italian_name: &'static str,
    /// Category key
    pub category: FoodCategory,
    /// Resolved card colors and icon
    pub style: CardStyle,
    /// Badge text, e.g. "7+ months"
    pub age_badge: String,
    /// Badge tone
    pub age_tone: Palette,
    /// Leading nutrients
    pub nutrients: &'static [&'static str],
    /// Whether the full record carries safety notes
    pub has_safety_notes: bool,
}

impl FoodCardView {
    /// Build the card for a food
    #[must_use]
    pub fn from_food(food: &'static Food) -> Self {
        Self {
            id: food.id,
            name: food.name,
            italian_name: food.italian_name,
            category: food.category,
            style: card_style(food.category.as_str()),
            age_badge: format!("{}+ months", food.age_start),
            age_tone: food_age_tone(food.age_start),
            nutrients: leading(food.nutrients, cards::FOOD_CARD_NUTRIENTS),
            has_safety_notes: food.has_safety_notes(),
        }
    }
}

/// Recipe as shown in a listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecipeCardView {
    /// Recipe identifier
    pub id: &'static str,
    /// Title
    pub title: &'static str,
    /// Summary
    pub description: &'static str,
    /// Badge text, e.g. "9-10 months"
    pub age_label: String,
    /// Badge class
    pub age_badge_class: &'static str,
    /// Preparation time label
    pub prep_time: &'static str,
    /// Leading tags
    pub tags: &'static [&'static str],
    /// Tags left off the card
    #[serde(skip_serializing_if = "is_zero")]
    pub more_tags: usize,
    /// Nutritional pillar
    pub pillar: PillarId,
}

impl RecipeCardView {
    /// Build the card for a recipe
    #[must_use]
    pub fn from_recipe(recipe: &'static Recipe) -> Self {
        let tags = leading(recipe.tags, cards::RECIPE_CARD_TAGS);
        Self {
            id: recipe.id,
            title: recipe.title,
            description: recipe.description,
            age_label: format!("{} months", recipe.age_range),
            age_badge_class: age_badge_class(recipe.age_range),
            prep_time: recipe.prep_time,
            tags,
            more_tags: recipe.tags.len().saturating_sub(tags.len()),
            pillar: recipe.pillar,
        }
    }
}

fn leading(items: &'static [&'static str], count: usize) -> &'static [&'static str] {
    items.get(..count).unwrap_or(items)
}

#[allow(clippy::trivially_copy_pass_by_ref)] // serde passes fields by reference
const fn is_zero(n: &usize) -> bool {
    *n == 0
}

/// Plain-text rendering for terminal output
pub trait TextCard {
    /// Write the record as a few lines of text, without a trailing newline
    ///
    /// # Errors
    ///
    /// Propagates errors from the underlying formatter
    fn write_text(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

/// Adapter that displays any [`TextCard`]
pub struct Card<'a, T: ?Sized>(pub &'a T);

impl<T: TextCard + ?Sized> fmt::Display for Card<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.write_text(f)
    }
}

/// Render a list of records separated by blank lines
#[must_use]
pub fn render_list<T: TextCard>(items: &[T]) -> String {
    items
        .iter()
        .map(|item| Card(item).to_string())
        .collect::<Vec<_>>()
        .join("\n\n")
}

impl<T: TextCard + ?Sized> TextCard for &T {
    fn write_text(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (**self).write_text(f)
    }
}

impl TextCard for FoodCardView {
    fn write_text(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} ({}) [{}]",
            self.style.icon, self.name, self.italian_name, self.age_badge
        )?;
        if self.has_safety_notes {
            f.write_str(" ⚠")?;
        }
        if !self.nutrients.is_empty() {
            write!(f, "\n   {}", self.nutrients.join(" · "))?;
        }
        Ok(())
    }
}

impl TextCard for RecipeCardView {
    fn write_text(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}] {}\n   {}",
            self.title, self.age_label, self.prep_time, self.description
        )?;
        if !self.tags.is_empty() {
            write!(f, "\n   #{}", self.tags.join(" #"))?;
            if self.more_tags > 0 {
                write!(f, " +{} more", self.more_tags)?;
            }
        }
        Ok(())
    }
}

/// Full record of a food, every field shown
impl TextCard for Food {
    fn write_text(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let info = category_info(self.category.as_str());
        write!(
            f,
            "{} {} ({})\n   {} · from {} months",
            info.icon, self.name, self.italian_name, info.label, self.age_start
        )?;
        write!(f, "\n   Nutrients: {}", self.nutrients.join(", "))?;
        if let Some(rationale) = self.dsi_rationale {
            write!(f, "\n   Why: {rationale}")?;
        }
        if let Some(preparation) = self.preparation {
            write!(f, "\n   Preparation: {preparation}")?;
        }
        for note in self.safety_notes {
            write!(f, "\n   ⚠ {note}")?;
        }
        if let Some(sourcing) = self.sourcing_italy {
            write!(f, "\n   Sourcing in Italy: {sourcing}")?;
        }
        Ok(())
    }
}

/// Full record of a recipe, every field shown
impl TextCard for Recipe {
    fn write_text(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\n   {} months · {} · pillar {} ({})\n   {}",
            self.title,
            self.age_range,
            self.prep_time,
            self.pillar.number(),
            self.pillar,
            self.description
        )?;
        f.write_str("\n\n   Ingredients:")?;
        for ingredient in self.ingredients {
            write!(f, "\n   - {ingredient}")?;
        }
        f.write_str("\n\n   Instructions:")?;
        for (step, instruction) in self.instructions.iter().enumerate() {
            write!(f, "\n   {}. {instruction}", step + 1)?;
        }
        if let Some(rationale) = self.dsi_rationale {
            write!(f, "\n\n   Why: {rationale}")?;
        }
        for note in self.safety_notes {
            write!(f, "\n   ⚠ {note}")?;
        }
        if !self.tags.is_empty() {
            write!(f, "\n\n   #{}", self.tags.join(" #"))?;
        }
        Ok(())
    }
}

impl TextCard for CategoryInfo {
    fn write_text(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({}, {})", self.icon, self.label, self.category, self.color)
    }
}

impl TextCard for Pillar {
    fn write_text(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}. {} {}\n   {}\n   Key foods: {}\n   When: {}\n   {}",
            self.number,
            self.icon,
            self.title,
            self.description,
            self.key_foods.join(", "),
            self.timing,
            self.dsi_connection
        )
    }
}

impl TextCard for SafetyRule {
    fn write_text(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}\n   {}",
            self.severity.as_str().to_uppercase(),
            self.rule,
            self.rationale
        )
    }
}

impl TextCard for RotationDay {
    fn write_text(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<9} {:<22} liver: {:<3}  cod liver oil: {}",
            self.day,
            self.main_protein,
            if self.liver { "yes" } else { "no" },
            if self.clo { "yes" } else { "no" }
        )
    }
}

impl TextCard for IntroductionStep {
    fn write_text(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Weeks {} ({} months): {}\n   Foods: {}\n   Amounts: {}\n   {}",
            self.weeks,
            self.age,
            self.focus,
            self.foods.join(", "),
            self.amounts,
            self.rationale
        )
    }
}

impl TextCard for AgeStage {
    fn write_text(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label, self.description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentStore;

    #[test]
    fn test_food_card_trims_nutrients() {
        let store = ContentStore::global();
        for food in store.foods() {
            let card = FoodCardView::from_food(food);
            assert!(card.nutrients.len() <= cards::FOOD_CARD_NUTRIENTS);
            assert!(food.nutrients.starts_with(card.nutrients));
        }
    }

    #[test]
    fn test_recipe_card_counts_hidden_tags() {
        for recipe in ContentStore::global().recipes() {
            let card = RecipeCardView::from_recipe(recipe);
            assert_eq!(card.tags.len() + card.more_tags, recipe.tags.len());
        }
    }

    #[test]
    fn test_food_card_text_has_badge() {
        let Some(food) = ContentStore::global().food("egg-yolk") else {
            panic!("egg-yolk missing from catalog");
        };
        let text = Card(&FoodCardView::from_food(food)).to_string();
        assert!(text.contains("Egg Yolk"));
        assert!(text.contains("[7+ months]"));
    }
}
