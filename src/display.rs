// ABOUTME: Display resolution for catalog keys: category metadata, card colors, age badges
// ABOUTME: Every lookup is total and degrades to a fixed default for unknown keys
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Weaning Guide Contributors

//! # Display Resolution
//!
//! Maps category keys and age labels to the descriptors the guide renders
//! with. Keys arrive as free text (from the command line or from other
//! tooling), so none of these functions fail: an unknown key resolves to
//! the vegetable descriptor or the 9-10 month badge.

use crate::content::{ContentStore, VEGETABLE_INFO};
use serde::Serialize;
use weaning_core::constants::ages;
use weaning_core::models::{AgeStage, CategoryInfo, FoodCategory, Palette};

/// Colors and glyph for a food card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CardStyle {
    /// Emoji glyph
    pub icon: &'static str,
    /// Background class
    pub bg: &'static str,
    /// Border class
    pub border: &'static str,
    /// Text class
    pub text: &'static str,
}

const VEGETABLE_CARD: CardStyle = CardStyle {
    icon: "🥕",
    bg: "bg-sage-50",
    border: "border-sage-200",
    text: "text-sage-700",
};

/// Card for keys without a palette: vegetable colors, generic salad glyph
const FALLBACK_CARD: CardStyle = CardStyle {
    icon: "🥗",
    ..VEGETABLE_CARD
};

/// Badge class used when a recipe's age label has no dedicated badge
pub const DEFAULT_AGE_BADGE: &str = "age-badge-9-10";

/// Category metadata for a key, or the vegetable entry when the key is unknown
///
/// Keys match exactly; `"Protein"` is unknown.
#[must_use]
pub fn category_info(key: &str) -> CategoryInfo {
    FoodCategory::from_key(key)
        .and_then(|category| {
            ContentStore::global()
                .category_info_table()
                .iter()
                .find(|info| info.category == category)
                .copied()
        })
        .unwrap_or(VEGETABLE_INFO)
}

/// Card colors for a category key
///
/// Fermented foods have no card palette of their own. They share the
/// fallback with unknown keys: vegetable colors and a 🥗 glyph.
#[must_use]
pub fn card_style(key: &str) -> CardStyle {
    FoodCategory::from_key(key)
        .and_then(category_card)
        .unwrap_or(FALLBACK_CARD)
}

const fn category_card(category: FoodCategory) -> Option<CardStyle> {
    let style = match category {
        FoodCategory::Fruit => CardStyle {
            icon: "🍎",
            bg: "bg-terracotta-50",
            border: "border-terracotta-200",
            text: "text-terracotta-700",
        },
        FoodCategory::Vegetable => VEGETABLE_CARD,
        FoodCategory::Grain => CardStyle {
            icon: "🌾",
            bg: "bg-cream-100",
            border: "border-cream-300",
            text: "text-cream-800",
        },
        FoodCategory::Protein => CardStyle {
            icon: "🥚",
            bg: "bg-terracotta-100",
            border: "border-terracotta-300",
            text: "text-terracotta-800",
        },
        FoodCategory::Dairy => CardStyle {
            icon: "🧀",
            bg: "bg-cream-50",
            border: "border-cream-200",
            text: "text-cream-700",
        },
        FoodCategory::Legume => CardStyle {
            icon: "🫘",
            bg: "bg-sage-100",
            border: "border-sage-300",
            text: "text-sage-800",
        },
        FoodCategory::Fat => CardStyle {
            icon: "🫒",
            bg: "bg-cream-200",
            border: "border-cream-400",
            text: "text-cream-900",
        },
        FoodCategory::Herb => CardStyle {
            icon: "🌿",
            bg: "bg-sage-50",
            border: "border-sage-200",
            text: "text-sage-600",
        },
        FoodCategory::Fermented => return None,
    };
    Some(style)
}

/// Badge class for a recipe age label
///
/// Matches the label exactly as written; anything without a dedicated
/// badge gets [`DEFAULT_AGE_BADGE`].
#[must_use]
pub fn age_badge_class(age_range: &str) -> &'static str {
    match age_range {
        "7-8" | "7+" => "age-badge-7-8",
        "11-12" => "age-badge-11-12",
        "13-14" | "12+" => "age-badge-13-14",
        _ => DEFAULT_AGE_BADGE,
    }
}

/// Badge tone for a food's introduction age
#[must_use]
pub const fn food_age_tone(age_start: u8) -> Palette {
    if age_start <= ages::EARLY_BADGE_MAX {
        Palette::Sage
    } else if age_start <= ages::MIDDLE_BADGE_MAX {
        Palette::Cream
    } else {
        Palette::Terracotta
    }
}

/// Clamp any age into the slider's month window
#[must_use]
pub fn clamp_age(age: i64) -> u8 {
    let clamped = age.clamp(i64::from(ages::MIN_MONTHS), i64::from(ages::MAX_MONTHS));
    u8::try_from(clamped).unwrap_or(ages::DEFAULT_MONTHS)
}

/// Position of an age along the slider track, 0.0 to 100.0
#[must_use]
pub fn slider_percent(age: i64) -> f64 {
    let offset = clamp_age(age) - ages::MIN_MONTHS;
    let span = ages::MAX_MONTHS - ages::MIN_MONTHS;
    f64::from(offset) / f64::from(span) * 100.0
}

/// Stage description for an age, `None` outside the slider window
#[must_use]
pub fn age_stage(age: i64) -> Option<&'static AgeStage> {
    ContentStore::global()
        .age_stages()
        .iter()
        .find(|stage| i64::from(stage.months) == age)
}
