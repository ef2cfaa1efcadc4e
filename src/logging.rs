// ABOUTME: Logging configuration and structured logging setup for the catalog tools
// ABOUTME: Configures log levels, formatters, and a stderr writer so stdout stays machine-readable
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Weaning Guide Contributors

//! Structured logging configuration
//!
//! Catalog data is written to stdout, so every log line goes to stderr.
//! The base level and environment come from [`CatalogConfig`]; the
//! variables read here only shape the log output.

use crate::config::{CatalogConfig, Environment};
use anyhow::Result;
use serde_json::json;
use std::env;
use std::io;
use tracing::{info, warn, Level};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};
use weaning_core::constants::service_names;

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Filter directives: a level name, or a full `RUST_LOG` expression
    pub level: String,
    /// Output format (json, pretty, compact)
    pub format: LogFormat,
    /// Include source file and line numbers
    pub include_location: bool,
    /// Include span information for tracing
    pub include_spans: bool,
    /// Service name for structured logging
    pub service_name: String,
    /// Service version
    pub service_version: String,
    /// Deployment environment
    pub environment: Environment,
}

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// `JSON` format for log collectors
    Json,
    /// Pretty format for development
    Pretty,
    /// Compact format for interactive terminals
    Compact,
}

impl LogFormat {
    /// Parse a `LOG_FORMAT` value; unknown values select `Compact`
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "json" => Self::Json,
            "pretty" => Self::Pretty,
            _ => Self::Compact,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".into(),
            format: LogFormat::Compact,
            include_location: false,
            include_spans: false,
            service_name: service_names::WEANING_GUIDE.into(),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
            environment: Environment::default(),
        }
    }
}

impl LoggingConfig {
    /// Create logging configuration for a loaded catalog configuration
    ///
    /// `RUST_LOG`, when set, replaces the configured level with its own
    /// filter expression. `LOG_FORMAT`, `LOG_INCLUDE_LOCATION`,
    /// `LOG_INCLUDE_SPANS` and `SERVICE_NAME` are read from the environment.
    #[must_use]
    pub fn from_config(config: &CatalogConfig) -> Self {
        let level = env::var("RUST_LOG").unwrap_or_else(|_| config.log_level.to_string());

        let format = env::var("LOG_FORMAT")
            .map_or(LogFormat::Compact, |v| LogFormat::from_str_or_default(&v));

        Self {
            level,
            format,
            include_location: config.environment.is_production()
                || env::var("LOG_INCLUDE_LOCATION").is_ok(),
            include_spans: env::var("LOG_INCLUDE_SPANS").is_ok(),
            service_name: env::var("SERVICE_NAME")
                .unwrap_or_else(|_| service_names::WEANING_GUIDE.into()),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
            environment: config.environment,
        }
    }

    /// Raise the level for `-v` flags: one selects info, two debug, three or more trace
    #[must_use]
    pub fn with_verbosity(mut self, verbose: u8) -> Self {
        let level = match verbose {
            0 => return self,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        };
        self.level = level.as_str().to_lowercase();
        self
    }

    /// Build the filter from the configured directives
    ///
    /// A bare level name also gets a crate directive. A full filter
    /// expression is used as written.
    fn env_filter(&self) -> EnvFilter {
        let filter = EnvFilter::new(&self.level);
        let Ok(level) = self.level.trim().parse::<Level>() else {
            return filter;
        };
        let Ok(directive) = format!("weaning_guide={}", level.as_str().to_lowercase()).parse()
        else {
            return filter;
        };
        filter.add_directive(directive)
    }

    /// Initialize the global tracing subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed
    pub fn init(&self) -> Result<()> {
        let registry = tracing_subscriber::registry().with(self.env_filter());

        let span_events = if self.include_spans {
            FmtSpan::NEW | FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        };

        match self.format {
            LogFormat::Json => {
                let json_layer = fmt::layer()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_target(true)
                    .with_writer(io::stderr)
                    .with_span_events(span_events)
                    .json();

                registry.with(json_layer).try_init()?;
            }
            LogFormat::Pretty => {
                let pretty_layer = fmt::layer()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_target(true)
                    .with_writer(io::stderr)
                    .with_span_events(span_events);

                registry.with(pretty_layer).try_init()?;
            }
            LogFormat::Compact => {
                let compact_layer = fmt::layer()
                    .compact()
                    .with_file(false)
                    .with_line_number(false)
                    .with_target(false)
                    .with_writer(io::stderr)
                    .with_span_events(FmtSpan::NONE);

                registry.with(compact_layer).try_init()?;
            }
        }

        self.log_startup_info();

        Ok(())
    }

    fn log_startup_info(&self) {
        info!(
            service.name = %self.service_name,
            service.version = %self.service_version,
            environment = %self.environment,
            log.level = %self.level,
            log.format = ?self.format,
            "Weaning guide starting up"
        );

        let config_summary = json!({
            "service": {
                "name": self.service_name,
                "version": self.service_version,
                "environment": self.environment
            },
            "logging": {
                "level": self.level,
                "format": format!("{:?}", self.format),
                "location": self.include_location,
                "spans": self.include_spans
            }
        });

        info!("Logging configured: {config_summary}");
    }
}

/// Structured log events for catalog queries
pub struct CatalogLogger;

impl CatalogLogger {
    /// Log a filtered listing
    pub fn log_query(command: &str, age: Option<i64>, results: usize, duration_us: u64) {
        info!(
            catalog.command = %command,
            catalog.age = ?age,
            catalog.results = results,
            catalog.duration_us = duration_us,
            "Catalog query"
        );
    }

    /// Log an identifier that matched nothing
    pub fn log_lookup_miss(kind: &str, id: &str) {
        warn!(
            catalog.kind = %kind,
            catalog.id = %id,
            "Catalog lookup miss"
        );
    }

    /// Log the outcome of table validation
    pub fn log_validation(violations: usize) {
        if violations == 0 {
            info!(catalog.violations = 0, "Catalog tables validated");
        } else {
            warn!(catalog.violations = violations, "Catalog tables failed validation");
        }
    }
}
