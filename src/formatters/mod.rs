// ABOUTME: Output format abstraction for serializing catalog data to multiple formats
// ABOUTME: Supports JSON (default), YAML, and TOON (token-efficient for LLM prompts)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Weaning Guide Contributors

//! Output Format Abstraction Layer
//!
//! Catalog data is printed for two audiences: scripts that pipe the output
//! into other tools, and language models that are handed the food tables as
//! context. JSON serves the first, TOON (Token-Oriented Object Notation)
//! the second, and YAML sits in between for people reading the raw tables.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use weaning_guide::age_filter::foods_for_age;
//! use weaning_guide::formatters::{format_output, OutputFormat};
//!
//! let foods = foods_for_age(9);
//! if let Ok(output) = format_output(&foods, OutputFormat::Yaml) {
//!     println!("{}", output.data);
//! }
//! ```

use serde::Serialize;
use std::error::Error;
use std::fmt;
use weaning_core::errors::AppError;

/// Output serialization format selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// JSON format (default) - universal compatibility
    #[default]
    Json,
    /// YAML format - readable dumps of whole tables
    Yaml,
    /// TOON format - Token-Oriented Object Notation for LLM efficiency
    Toon,
}

impl OutputFormat {
    /// Parse format from string parameter (case-insensitive)
    /// Returns `Json` for unrecognized values
    #[must_use]
    pub fn from_str_param(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "toon" => Self::Toon,
            "yaml" | "yml" => Self::Yaml,
            _ => Self::Json,
        }
    }

    /// Get the MIME content type for this format
    #[must_use]
    pub const fn content_type(&self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::Yaml => "application/yaml",
            // TOON doesn't have an official MIME type yet, use vendor prefix
            Self::Toon => "application/vnd.toon",
        }
    }

    /// Get the format name as a string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
            Self::Toon => "toon",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// What the command line prints: a serialization format or plain-text cards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    /// Serialized through [`format_output_pretty`]
    Structured(OutputFormat),
    /// Human-readable cards
    #[default]
    Text,
}

impl ReportFormat {
    /// Parse a format name; `text` selects cards, anything else a serialization format
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        if s.trim().eq_ignore_ascii_case("text") {
            Self::Text
        } else {
            Self::Structured(OutputFormat::from_str_param(s))
        }
    }

    /// Format name as accepted by [`ReportFormat::from_str_or_default`]
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Structured(format) => format.as_str(),
            Self::Text => "text",
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Formatted output containing the serialized data and metadata
#[derive(Debug, Clone)]
pub struct FormattedOutput {
    /// The serialized data as a string
    pub data: String,
    /// The format used for serialization
    pub format: OutputFormat,
    /// The MIME content type
    pub content_type: &'static str,
}

/// Error type for formatting operations
#[derive(Debug, Clone)]
pub struct FormatError {
    /// Error message describing what went wrong
    pub message: String,
    /// The format that was being used when the error occurred
    pub format: OutputFormat,
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Format error ({}): {}", self.format, self.message)
    }
}

impl Error for FormatError {}

impl From<FormatError> for AppError {
    fn from(error: FormatError) -> Self {
        Self::serialization(error.to_string())
    }
}

/// Format serializable data to the specified output format
///
/// JSON output is compact; use [`format_output_pretty`] for indented JSON.
///
/// # Errors
/// Returns `FormatError` if:
/// - JSON or YAML serialization fails
/// - Converting to JSON value fails (for TOON format)
/// - TOON encoding fails, or TOON support was not compiled in
pub fn format_output<T: Serialize + ?Sized>(
    data: &T,
    format: OutputFormat,
) -> Result<FormattedOutput, FormatError> {
    let data = match format {
        OutputFormat::Json => serde_json::to_string(data).map_err(|e| FormatError {
            message: e.to_string(),
            format,
        })?,
        OutputFormat::Yaml => encode_yaml(data)?,
        OutputFormat::Toon => encode_toon(data)?,
    };

    Ok(FormattedOutput {
        data,
        format,
        content_type: format.content_type(),
    })
}

/// Format serializable data to pretty-printed output (for terminal display)
///
/// # Errors
/// Returns `FormatError` under the same conditions as [`format_output`].
pub fn format_output_pretty<T: Serialize + ?Sized>(
    data: &T,
    format: OutputFormat,
) -> Result<FormattedOutput, FormatError> {
    let data = match format {
        OutputFormat::Json => serde_json::to_string_pretty(data).map_err(|e| FormatError {
            message: e.to_string(),
            format,
        })?,
        // YAML and TOON are already human-readable, use standard formatting
        OutputFormat::Yaml => encode_yaml(data)?,
        OutputFormat::Toon => encode_toon(data)?,
    };

    Ok(FormattedOutput {
        data,
        format,
        content_type: format.content_type(),
    })
}

fn encode_yaml<T: Serialize + ?Sized>(data: &T) -> Result<String, FormatError> {
    serde_yaml::to_string(data).map_err(|e| FormatError {
        message: e.to_string(),
        format: OutputFormat::Yaml,
    })
}

#[cfg(feature = "toon")]
fn encode_toon<T: Serialize + ?Sized>(data: &T) -> Result<String, FormatError> {
    // Convert to serde_json::Value first, then to TOON
    let value = serde_json::to_value(data).map_err(|e| FormatError {
        message: format!("Failed to convert to JSON value: {e}"),
        format: OutputFormat::Toon,
    })?;
    let options = toon_format::EncodeOptions::default();
    toon_format::encode(&value, &options).map_err(|e| FormatError {
        message: e.to_string(),
        format: OutputFormat::Toon,
    })
}

#[cfg(not(feature = "toon"))]
fn encode_toon<T: Serialize + ?Sized>(_data: &T) -> Result<String, FormatError> {
    Err(FormatError {
        message: "built without the `toon` feature".to_owned(),
        format: OutputFormat::Toon,
    })
}
