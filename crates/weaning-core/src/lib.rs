// ABOUTME: Core types for the baby-led weaning content catalog
// ABOUTME: Foundation crate with models, error handling, and age constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Weaning Guide Contributors

#![deny(unsafe_code)]

//! # Weaning Core
//!
//! Foundation crate providing the shared types of the weaning catalog. The
//! tables themselves live in the main crate; this crate only describes their
//! shape so it changes rarely and keeps incremental builds cheap.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Age bounds and service identifiers
//! - **models**: `Food`, `Recipe`, `AgeRange` and the guidance records

/// Unified error handling system with standard error codes
pub mod errors;

/// Age bounds and service identifiers
pub mod constants;

/// Catalog data models (foods, recipes, guidance tables)
pub mod models;
