// ABOUTME: Tests for environment-driven catalog configuration
// ABOUTME: Mutates process environment, so every test runs serially
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Weaning Guide Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use serial_test::serial;
use std::env;
use weaning_guide::config::{CatalogConfig, Environment, LogLevel};
use weaning_guide::errors::ErrorCode;
use weaning_guide::formatters::{OutputFormat, ReportFormat};
use weaning_guide::logging::{LogFormat, LoggingConfig};

const VARS: [&str; 9] = [
    "WEANING_DEFAULT_AGE",
    "WEANING_OUTPUT_FORMAT",
    "WEANING_VALIDATE_ON_START",
    "LOG_LEVEL",
    "ENVIRONMENT",
    "LOG_FORMAT",
    "RUST_LOG",
    "SERVICE_NAME",
    "LOG_INCLUDE_LOCATION",
];

fn clear_env() {
    for var in VARS {
        env::remove_var(var);
    }
}

#[test]
fn test_log_level_parsing() {
    assert_eq!(LogLevel::from_str_or_default("error"), LogLevel::Error);
    assert_eq!(LogLevel::from_str_or_default("WARN"), LogLevel::Warn);
    assert_eq!(LogLevel::from_str_or_default("Debug"), LogLevel::Debug);
    assert_eq!(LogLevel::from_str_or_default("invalid"), LogLevel::Warn); // Default fallback
    assert_eq!(LogLevel::Trace.to_string(), "trace");
}

#[test]
fn test_environment_parsing() {
    assert_eq!(
        Environment::from_str_or_default("PROD"),
        Environment::Production
    );
    assert_eq!(Environment::from_str_or_default("test"), Environment::Testing);
    assert_eq!(
        Environment::from_str_or_default("staging"),
        Environment::Development
    );
    assert!(Environment::Production.is_production());
}

#[test]
#[serial]
fn test_defaults_without_environment() {
    clear_env();
    let config = CatalogConfig::from_env().unwrap();
    assert_eq!(config, CatalogConfig::default());
    assert_eq!(config.default_age, 9);
    assert_eq!(config.report_format, ReportFormat::Text);
    assert!(config.validate_on_start);
}

#[test]
#[serial]
fn test_values_from_environment() {
    clear_env();
    env::set_var("WEANING_DEFAULT_AGE", "12");
    env::set_var("WEANING_OUTPUT_FORMAT", "yaml");
    env::set_var("WEANING_VALIDATE_ON_START", "false");
    env::set_var("LOG_LEVEL", "debug");
    env::set_var("ENVIRONMENT", "production");

    let config = CatalogConfig::from_env().unwrap();
    assert_eq!(config.default_age, 12);
    assert_eq!(
        config.report_format,
        ReportFormat::Structured(OutputFormat::Yaml)
    );
    assert!(!config.validate_on_start);
    assert_eq!(config.log_level, LogLevel::Debug);
    assert_eq!(config.environment, Environment::Production);

    let summary = config.summary();
    assert!(summary.contains("Default Age: 12 months"));
    assert!(summary.contains("Validate On Start: Disabled"));
    clear_env();
}

#[test]
#[serial]
fn test_default_age_is_clamped() {
    clear_env();
    env::set_var("WEANING_DEFAULT_AGE", "3");
    assert_eq!(CatalogConfig::from_env().unwrap().default_age, 7);
    env::set_var("WEANING_DEFAULT_AGE", "36");
    assert_eq!(CatalogConfig::from_env().unwrap().default_age, 14);
    clear_env();
}

#[test]
#[serial]
fn test_invalid_values_are_config_errors() {
    clear_env();
    env::set_var("WEANING_DEFAULT_AGE", "nine");
    let error = CatalogConfig::from_env().unwrap_err();
    assert_eq!(error.code, ErrorCode::ConfigError);
    assert!(error.message.contains("WEANING_DEFAULT_AGE"));

    clear_env();
    env::set_var("WEANING_VALIDATE_ON_START", "sometimes");
    let error = CatalogConfig::from_env().unwrap_err();
    assert_eq!(error.code, ErrorCode::ConfigError);
    assert_eq!(error.exit_code(), 78);
    clear_env();
}

#[test]
#[serial]
fn test_logging_config_from_environment() {
    clear_env();
    let config = LoggingConfig::from_config(&CatalogConfig::from_env().unwrap());
    assert_eq!(config.level, "warn");
    assert_eq!(config.format, LogFormat::Compact);
    assert_eq!(config.environment, Environment::Development);
    assert!(!config.include_location);
    assert_eq!(config.service_name, "weaning_guide");

    env::set_var("LOG_FORMAT", "json");
    env::set_var("SERVICE_NAME", "weaning-batch");
    let config = LoggingConfig::from_config(&CatalogConfig::from_env().unwrap());
    assert_eq!(config.format, LogFormat::Json);
    assert_eq!(config.service_name, "weaning-batch");
    clear_env();
}

#[test]
#[serial]
fn test_logging_follows_catalog_config() {
    clear_env();
    env::set_var("LOG_LEVEL", "debug");
    env::set_var("ENVIRONMENT", "production");
    let catalog = CatalogConfig::from_env().unwrap();
    let config = LoggingConfig::from_config(&catalog);
    assert_eq!(config.level, "debug");
    assert_eq!(config.environment, Environment::Production);
    assert!(config.include_location);

    env::set_var("RUST_LOG", "info,weaning_guide=trace");
    let config = LoggingConfig::from_config(&CatalogConfig::from_env().unwrap());
    assert_eq!(config.level, "info,weaning_guide=trace");
    clear_env();
}
