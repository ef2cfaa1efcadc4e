// ABOUTME: Shared test utilities for integration tests
// ABOUTME: Quiet tracing setup and small catalog helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Weaning Guide Contributors
#![allow(dead_code, clippy::must_use_candidate, clippy::missing_panics_doc)]
//! Shared test utilities for `weaning_guide`

use std::env;
use std::sync::Once;
use tracing::Level;
use weaning_guide::models::{Food, Recipe};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // TEST_LOG raises the level when debugging a failing test
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        // Another test binary harness may already own the global subscriber
        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Identifiers of a food listing, in order
pub fn food_ids(foods: &[&Food]) -> Vec<&'static str> {
    foods.iter().map(|f| f.id).collect()
}

/// Identifiers of a recipe listing, in order
pub fn recipe_ids(recipes: &[&Recipe]) -> Vec<&'static str> {
    recipes.iter().map(|r| r.id).collect()
}
