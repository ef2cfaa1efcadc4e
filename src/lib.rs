// ABOUTME: Main library entry point for the baby-led weaning guide catalog
// ABOUTME: Compiled-in foods, recipes, and guidance tables with age filtering and display lookups
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Weaning Guide Contributors

#![deny(unsafe_code)]

//! # Weaning Guide
//!
//! Read-only content catalog for a baby-led weaning guide covering seven to
//! fourteen months. The catalog is literal data compiled into the binary:
//! foods with the age they may first be offered, recipes, the five
//! nutritional pillars, safety rules, a weekly rotation, and the
//! first-weeks introduction plan.
//!
//! ## Architecture
//!
//! - **Content**: the static tables and the process-wide [`content::ContentStore`]
//! - **Age filter**: which foods and recipes suit a given age in months
//! - **Display**: total lookups from category keys and age labels to icons,
//!   colors, and badge classes
//! - **Cards**: listing views and plain-text rendering
//! - **Formatters**, **Config**, **Logging**: output, environment settings, tracing
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use weaning_guide::age_filter::foods_for_age;
//! use weaning_guide::display::category_info;
//!
//! for food in foods_for_age(8) {
//!     let info = category_info(food.category.as_str());
//!     println!("{} {} ({})", info.icon, food.name, food.italian_name);
//! }
//! ```

/// Compiled-in catalog tables and the content store
pub mod content;

/// Age-based filtering of foods and recipes
pub mod age_filter;

/// Category, card, and age badge display lookups
pub mod display;

/// Card views and plain-text rendering
pub mod cards;

/// Output format abstraction (JSON, YAML, TOON)
pub mod formatters;

/// Environment configuration
pub mod config;

/// Structured logging setup
pub mod logging;

pub use weaning_core::{constants, errors, models};
