// ABOUTME: Catalog validation command
// ABOUTME: Checks every table invariant and reports each violation found
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Weaning Guide Contributors

use weaning_guide::content::ContentStore;
use weaning_guide::errors::{AppError, AppResult};
use weaning_guide::logging::CatalogLogger;

/// Validate the tables behind `store`
///
/// Returns a one-line summary on success. On failure the error carries every
/// violation in its message.
pub fn run(store: &ContentStore) -> AppResult<String> {
    match store.validate() {
        Ok(()) => {
            CatalogLogger::log_validation(0);
            Ok(format!(
                "Catalog OK: {} foods, {} recipes, {} pillars, {} safety rules",
                store.foods().len(),
                store.recipes().len(),
                store.pillars().len(),
                store.safety_rules().len()
            ))
        }
        Err(error) => {
            CatalogLogger::log_validation(error.violations.len());
            Err(AppError::from(error))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use weaning_guide::content::{CatalogTables, BUILTIN_TABLES};
    use weaning_guide::errors::ErrorCode;
    use weaning_guide::models::{Food, FoodCategory};

    const PEAR: Food = Food {
        id: "pear",
        name: "Pear",
        italian_name: "Pera",
        category: FoodCategory::Fruit,
        age_start: 7,
        nutrients: &["Fiber"],
        dsi_rationale: None,
        preparation: None,
        safety_notes: &[],
        sourcing_italy: None,
    };

    #[test]
    fn test_builtin_catalog_passes() {
        let summary = run(ContentStore::global()).unwrap();
        assert!(summary.starts_with("Catalog OK: 18 foods, 11 recipes"));
    }

    #[test]
    fn test_duplicate_ids_fail_validation() {
        static DOUBLED: [Food; 2] = [PEAR, PEAR];
        let store = ContentStore::new(CatalogTables {
            foods: &DOUBLED,
            ..BUILTIN_TABLES
        });
        let error = run(&store).unwrap_err();
        assert_eq!(error.code, ErrorCode::CatalogInvalid);
    }
}
