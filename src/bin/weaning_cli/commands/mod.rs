// ABOUTME: Command implementations for weaning-cli
// ABOUTME: Each command returns its rendered output so main decides where it is printed
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Weaning Guide Contributors

pub mod catalog;
pub mod guidance;
pub mod validate;

use serde::Serialize;
use weaning_guide::errors::AppResult;
use weaning_guide::formatters::{format_output_pretty, ReportFormat};

/// Render `data` in a structured format, or call `text` for plain-text output
pub fn render<T: Serialize + ?Sized>(
    format: ReportFormat,
    data: &T,
    text: impl FnOnce() -> String,
) -> AppResult<String> {
    match format {
        ReportFormat::Structured(format) => Ok(format_output_pretty(data, format)?.data),
        ReportFormat::Text => Ok(text()),
    }
}
