// ABOUTME: Food record and food category definitions for the weaning catalog
// ABOUTME: Food carries its introduction age, nutrients, and optional guidance notes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Weaning Guide Contributors

use serde::Serialize;
use std::fmt;

/// Food group a catalog entry belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FoodCategory {
    /// Meat, fish, eggs, broths
    Protein,
    /// Butter, oils, avocado
    Fat,
    /// Vegetables
    Vegetable,
    /// Fruits
    Fruit,
    /// Cereals and flours
    Grain,
    /// Milk products other than ferments
    Dairy,
    /// Pulses
    Legume,
    /// Fresh herbs
    Herb,
    /// Yogurt, kefir and other ferments
    Fermented,
}

impl FoodCategory {
    /// Every category, in the order the catalog presents them
    pub const ALL: [Self; 9] = [
        Self::Fermented,
        Self::Protein,
        Self::Fat,
        Self::Vegetable,
        Self::Fruit,
        Self::Dairy,
        Self::Legume,
        Self::Grain,
        Self::Herb,
    ];

    /// Lowercase key used in tables and on the command line
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Protein => "protein",
            Self::Fat => "fat",
            Self::Vegetable => "vegetable",
            Self::Fruit => "fruit",
            Self::Grain => "grain",
            Self::Dairy => "dairy",
            Self::Legume => "legume",
            Self::Herb => "herb",
            Self::Fermented => "fermented",
        }
    }

    /// Parse user input, ignoring case and surrounding whitespace
    ///
    /// `None` for keys outside the enumeration. Display lookups use
    /// [`Self::from_key`] instead.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let key = s.trim().to_lowercase();
        Self::from_key(&key)
    }

    /// Exact table key match: `"Protein"` and `" fruit"` are not keys
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == key)
    }
}

impl fmt::Display for FoodCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A food that can be introduced during weaning
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Food {
    /// Stable identifier (kebab-case)
    pub id: &'static str,
    /// English display name
    pub name: &'static str,
    /// Italian name shown under the display name
    pub italian_name: &'static str,
    /// Food group
    pub category: FoodCategory,
    /// Age in months from which the food may be offered
    pub age_start: u8,
    /// Headline nutrients, most important first
    pub nutrients: &'static [&'static str],
    /// Link to the developmental-substrate framework
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dsi_rationale: Option<&'static str>,
    /// How to prepare and portion it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preparation: Option<&'static str>,
    /// Safety caveats; empty when there are none
    #[serde(skip_serializing_if = "super::is_empty_list")]
    pub safety_notes: &'static [&'static str],
    /// Where to buy it in Italy
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sourcing_italy: Option<&'static str>,
}

impl Food {
    /// Whether the food may be offered to a baby of `age` months
    ///
    /// `age_start` is an inclusive lower bound; there is no upper bound.
    #[must_use]
    pub fn is_appropriate_for(&self, age: i64) -> bool {
        i64::from(self.age_start) <= age
    }

    /// Whether the food carries safety caveats
    #[must_use]
    pub const fn has_safety_notes(&self) -> bool {
        !self.safety_notes.is_empty()
    }
}
