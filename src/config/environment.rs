// ABOUTME: Environment configuration for the catalog tools
// ABOUTME: Strongly typed log level and environment enums plus CatalogConfig::from_env
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Weaning Guide Contributors

//! Environment-based configuration
//!
//! The catalog has no configuration file; every setting is an environment
//! variable with a default, read once at startup.

use crate::display::clamp_age;
use crate::formatters::ReportFormat;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use tracing::info;
use weaning_core::constants::ages;
use weaning_core::errors::{AppError, AppResult};

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    #[default]
    Warn,
    /// Informational events
    Info,
    /// Debugging detail
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Parse from string with fallback to `Warn`
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "error" => Self::Error,
            "info" => Self::Info,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Warn,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Test runs
    Testing,
}

impl Environment {
    /// Parse from string with fallback to `Development`
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if running in production
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Runtime settings for the catalog command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Age used when a command is not given one, clamped to the slider window
    pub default_age: u8,
    /// Output format used when `--format` is absent
    pub report_format: ReportFormat,
    /// Validate the compiled-in tables before running a command
    pub validate_on_start: bool,
    /// Base log level, used when `RUST_LOG` is unset
    pub log_level: LogLevel,
    /// Deployment environment; production logs carry source locations
    pub environment: Environment,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            default_age: ages::DEFAULT_MONTHS,
            report_format: ReportFormat::Text,
            validate_on_start: true,
            log_level: LogLevel::default(),
            environment: Environment::default(),
        }
    }
}

impl CatalogConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns a configuration error when `WEANING_DEFAULT_AGE` is not an
    /// integer or `WEANING_VALIDATE_ON_START` is not a boolean.
    pub fn from_env() -> AppResult<Self> {
        info!("Loading catalog configuration from environment variables");

        let default_age = env_var_or("WEANING_DEFAULT_AGE", &ages::DEFAULT_MONTHS.to_string());
        let default_age: i64 = default_age.trim().parse().map_err(|e| {
            AppError::config(format!("Invalid WEANING_DEFAULT_AGE value '{default_age}'"))
                .with_source(e)
        })?;

        let validate = env_var_or("WEANING_VALIDATE_ON_START", "true");
        let validate_on_start = validate.trim().parse().map_err(|e| {
            AppError::config(format!(
                "Invalid WEANING_VALIDATE_ON_START value '{validate}'"
            ))
            .with_source(e)
        })?;

        Ok(Self {
            default_age: clamp_age(default_age),
            report_format: ReportFormat::from_str_or_default(&env_var_or(
                "WEANING_OUTPUT_FORMAT",
                "text",
            )),
            validate_on_start,
            log_level: LogLevel::from_str_or_default(&env_var_or("LOG_LEVEL", "warn")),
            environment: Environment::from_str_or_default(&env_var_or(
                "ENVIRONMENT",
                "development",
            )),
        })
    }

    /// Human-readable configuration summary for startup logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Weaning Guide Configuration:\n\
             - Default Age: {} months\n\
             - Output Format: {}\n\
             - Validate On Start: {}\n\
             - Log Level: {}\n\
             - Environment: {}",
            self.default_age,
            self.report_format,
            if self.validate_on_start {
                "Enabled"
            } else {
                "Disabled"
            },
            self.log_level,
            self.environment,
        )
    }
}

fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}
