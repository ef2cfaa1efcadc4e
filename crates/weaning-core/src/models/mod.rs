// ABOUTME: Catalog data models for the weaning guide
// ABOUTME: Re-exports Food, Recipe, AgeRange, and the guidance records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Weaning Guide Contributors

//! # Data Models
//!
//! All catalog records are compiled-in constants, so string and list fields
//! borrow `'static` data instead of owning it. The models only implement
//! `Serialize`: nothing is ever read back in.

mod food;
mod guidance;
mod recipe;

pub use food::{Food, FoodCategory};
pub use guidance::{
    AgeStage, CategoryInfo, IntroductionStep, Palette, Pillar, RotationDay, SafetyRule, Severity,
};
pub use recipe::{AgeRange, AgeRangeError, PillarId, Recipe};

// Serde passes a reference to the field, hence the double reference.
pub(crate) const fn is_empty_list(list: &&[&str]) -> bool {
    list.is_empty()
}
