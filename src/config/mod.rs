// ABOUTME: Configuration module for the catalog tools
// ABOUTME: Environment-driven settings: default age, output format, validation, logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Weaning Guide Contributors
//! Configuration module
//!
//! - **Environment**: catalog settings read from environment variables

/// Environment configuration
pub mod environment;

pub use environment::{CatalogConfig, Environment, LogLevel};
