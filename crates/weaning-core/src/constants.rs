// ABOUTME: Constants shared by the catalog crates
// ABOUTME: Age slider bounds, default age, and service naming
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Weaning Guide Contributors

/// Age bounds of the weaning window covered by the catalog (months)
pub mod ages {
    /// Youngest age shown on the age slider
    pub const MIN_MONTHS: u8 = 7;
    /// Oldest age shown on the age slider
    pub const MAX_MONTHS: u8 = 14;
    /// Age the slider starts at when nothing else is chosen
    pub const DEFAULT_MONTHS: u8 = 9;
    /// Food cards at or below this age use the early (sage) badge tone
    pub const EARLY_BADGE_MAX: u8 = 8;
    /// Food cards at or below this age use the middle (cream) badge tone
    pub const MIDDLE_BADGE_MAX: u8 = 10;
}

/// Display limits taken from the card layouts
pub mod cards {
    /// Nutrients shown on a food card
    pub const FOOD_CARD_NUTRIENTS: usize = 3;
    /// Tags shown on a recipe card before the "+N more" marker
    pub const RECIPE_CARD_TAGS: usize = 4;
}

/// Service names used in structured logs
pub mod service_names {
    /// Catalog CLI service name
    pub const WEANING_GUIDE: &str = "weaning_guide";
}
