// ABOUTME: Weaning CLI - browse the baby-led weaning catalog from the terminal
// ABOUTME: Lists foods and recipes by age, shows guidance tables, and validates the catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Weaning Guide Contributors
//!
//! Usage:
//! ```bash
//! # Foods that may be offered at 8 months
//! weaning-cli foods --age 8
//!
//! # Protein foods as JSON
//! weaning-cli --format json foods --category protein
//!
//! # One recipe in full
//! weaning-cli recipe liver-pate
//!
//! # What changes at 9 months
//! weaning-cli stage 9
//!
//! # Check the compiled-in tables
//! weaning-cli validate
//! ```

mod commands;

use anyhow::{Error, Result};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::process::ExitCode;
use tracing::{debug, error, info};
use weaning_guide::config::CatalogConfig;
use weaning_guide::content::ContentStore;
use weaning_guide::errors::{AppError, ErrorResponse};
use weaning_guide::formatters::{OutputFormat, ReportFormat};
use weaning_guide::logging::LoggingConfig;

#[derive(Parser)]
#[command(
    name = "weaning-cli",
    version,
    about = "Baby-led weaning guide catalog",
    long_about = "Browse the foods, recipes, and guidance of the baby-led weaning guide (7-14 months)."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Output format (defaults to WEANING_OUTPUT_FORMAT, then text)
    #[arg(long, short = 'f', value_enum, global = true)]
    format: Option<FormatArg>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(long, short = 'v', action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    Json,
    Yaml,
    Toon,
    Text,
}

impl From<FormatArg> for ReportFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Json => Self::Structured(OutputFormat::Json),
            FormatArg::Yaml => Self::Structured(OutputFormat::Yaml),
            FormatArg::Toon => Self::Structured(OutputFormat::Toon),
            FormatArg::Text => Self::Text,
        }
    }
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
enum Command {
    /// List foods, optionally only those suitable at an age
    Foods {
        /// Age in months
        #[arg(long, allow_negative_numbers = true)]
        age: Option<i64>,

        /// Category key (fermented, protein, fat, vegetable, fruit, dairy, legume, grain, herb)
        #[arg(long)]
        category: Option<String>,
    },

    /// Show one food in full
    Food {
        /// Food identifier, e.g. egg-yolk
        id: String,
    },

    /// List recipes, optionally only those suitable at an age
    Recipes {
        /// Age in months
        #[arg(long, allow_negative_numbers = true)]
        age: Option<i64>,

        /// Pillar key (gut, cholesterol, micronutrients, glycine, dha)
        #[arg(long)]
        pillar: Option<String>,
    },

    /// Show one recipe in full
    Recipe {
        /// Recipe identifier, e.g. liver-pate
        id: String,
    },

    /// Show category icons, labels, and colors
    Categories,

    /// Show the five nutritional pillars
    Pillars,

    /// Show safety rules
    Safety {
        /// Only rules of this severity (critical, important, recommendation)
        #[arg(long)]
        severity: Option<String>,
    },

    /// Show the weekly rotation template
    Rotation,

    /// Show the first-weeks introduction plan
    Introduction,

    /// Summarize one month (defaults to WEANING_DEFAULT_AGE)
    Stage {
        /// Age in months
        #[arg(allow_negative_numbers = true)]
        age: Option<i64>,
    },

    /// Check the catalog tables for invariant violations
    Validate,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = CatalogConfig::from_env();

    // A bad catalog setting is reported below; logging still starts on defaults
    let logging = config.as_ref().map_or_else(
        |_| LoggingConfig::from_config(&CatalogConfig::default()),
        LoggingConfig::from_config,
    );
    if let Err(e) = logging.with_verbosity(cli.verbose).init() {
        eprintln!("Failed to initialize logging: {e}");
    }

    match config
        .map_err(Error::from)
        .and_then(|config| run(cli, &config))
    {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => report_failure(&e),
    }
}

fn run(cli: Cli, config: &CatalogConfig) -> Result<String> {
    debug!("{}", config.summary());

    let format = cli.format.map_or(config.report_format, ReportFormat::from);
    let store = ContentStore::global();

    if config.validate_on_start && cli.command != Command::Validate {
        commands::validate::run(store)?;
    }

    info!(format = %format, "Running catalog command");

    let output = match cli.command {
        Command::Foods { age, category } => {
            commands::catalog::list_foods(store, format, age, category.as_deref())?
        }
        Command::Food { id } => commands::catalog::show_food(store, format, &id)?,
        Command::Recipes { age, pillar } => {
            commands::catalog::list_recipes(store, format, age, pillar.as_deref())?
        }
        Command::Recipe { id } => commands::catalog::show_recipe(store, format, &id)?,
        Command::Categories => commands::guidance::categories(store, format)?,
        Command::Pillars => commands::guidance::pillars(store, format)?,
        Command::Safety { severity } => {
            commands::guidance::safety(store, format, severity.as_deref())?
        }
        Command::Rotation => commands::guidance::rotation(store, format)?,
        Command::Introduction => commands::guidance::introduction(store, format)?,
        Command::Stage { age } => {
            let age = age.unwrap_or_else(|| i64::from(config.default_age));
            commands::guidance::stage(store, format, age)?
        }
        Command::Validate => commands::validate::run(store)?,
    };

    Ok(output)
}

/// Print the failure to stderr as a JSON error response and pick the exit status
fn report_failure(e: &Error) -> ExitCode {
    error!("Command failed: {e:#}");
    let (response, status) = failure_response(e);
    match serde_json::to_string(&response) {
        Ok(json) => eprintln!("{json}"),
        Err(_) => eprintln!("{e:#}"),
    }
    ExitCode::from(status)
}

/// Error response and sysexits status for a failed command
///
/// Errors that did not originate in the catalog are reported as internal.
fn failure_response(e: &Error) -> (ErrorResponse, u8) {
    e.downcast_ref::<AppError>().map_or_else(
        || {
            let internal = AppError::internal(format!("{e:#}"));
            let status = internal.exit_code();
            (ErrorResponse::from(internal), status)
        },
        |app_error| (ErrorResponse::from(app_error), app_error.exit_code()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use weaning_guide::errors::ErrorCode;

    fn failure_of(args: &[&str]) -> (ErrorResponse, u8) {
        let cli = Cli::try_parse_from(args).unwrap();
        let error = run(cli, &CatalogConfig::default()).unwrap_err();
        failure_response(&error)
    }

    #[test]
    fn test_unknown_food_exits_no_input() {
        let (response, status) = failure_of(&["weaning-cli", "food", "quinoa"]);
        assert_eq!(status, 66);
        assert_eq!(response.error.code, ErrorCode::ResourceNotFound);
        assert_eq!(response.error.resource_id.as_deref(), Some("quinoa"));

        let json: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&response).unwrap()).unwrap();
        assert_eq!(json["error"]["code"], "RESOURCE_NOT_FOUND");
    }

    #[test]
    fn test_unknown_filter_key_exits_usage() {
        let (response, status) = failure_of(&["weaning-cli", "foods", "--category", "candy"]);
        assert_eq!(status, 64);
        assert_eq!(response.error.code, ErrorCode::InvalidInput);

        let (_, status) = failure_of(&["weaning-cli", "safety", "--severity", "mild"]);
        assert_eq!(status, 64);
    }

    #[test]
    fn test_config_and_catalog_failures_keep_their_status() {
        let config = Error::from(AppError::config("Invalid WEANING_DEFAULT_AGE"));
        assert_eq!(failure_response(&config).1, 78);

        let catalog = Error::from(AppError::catalog_invalid("duplicate food id"));
        let (response, status) = failure_response(&catalog);
        assert_eq!(status, 65);
        assert_eq!(response.error.code, ErrorCode::CatalogInvalid);
    }

    #[test]
    fn test_foreign_errors_are_internal() {
        let error = anyhow!("disk on fire");
        let (response, status) = failure_response(&error);
        assert_eq!(status, 70);
        assert_eq!(response.error.code, ErrorCode::InternalError);
        assert_eq!(response.error.message, "disk on fire");
    }

    #[test]
    fn test_parse_foods_with_filters() {
        let cli = Cli::try_parse_from([
            "weaning-cli",
            "foods",
            "--age",
            "8",
            "--category",
            "protein",
        ])
        .unwrap();
        assert_eq!(
            cli.command,
            Command::Foods {
                age: Some(8),
                category: Some("protein".to_owned()),
            }
        );
        assert_eq!(cli.format, None);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["weaning-cli", "recipes", "--format", "toon", "-vv"])
            .unwrap();
        assert_eq!(cli.format, Some(FormatArg::Toon));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_negative_age_is_accepted() {
        let cli = Cli::try_parse_from(["weaning-cli", "stage", "-3"]).unwrap();
        assert_eq!(cli.command, Command::Stage { age: Some(-3) });
    }

    #[test]
    fn test_lookup_requires_id() {
        assert!(Cli::try_parse_from(["weaning-cli", "food"]).is_err());
        assert!(Cli::try_parse_from(["weaning-cli", "--format", "xml", "pillars"]).is_err());
    }

    #[test]
    fn test_text_format_maps_to_cards() {
        assert_eq!(ReportFormat::from(FormatArg::Text), ReportFormat::Text);
        assert_eq!(
            ReportFormat::from(FormatArg::Yaml),
            ReportFormat::Structured(OutputFormat::Yaml)
        );
    }
}
