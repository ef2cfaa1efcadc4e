// ABOUTME: Recipe record, nutritional pillar ids, and the recipe age-range grammar
// ABOUTME: AgeRange parses free-form labels like "7", "7-8", and "9+" into typed bounds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Weaning Guide Contributors

use crate::errors::AppError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One of the five nutritional pillars recipes are classified under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PillarId {
    /// Gut maturity first
    Gut,
    /// Cholesterol and stable fats
    Cholesterol,
    /// Bioavailable micronutrients
    Micronutrients,
    /// Glycine and collagen
    Glycine,
    /// Preformed DHA
    Dha,
}

impl PillarId {
    /// Pillars in framework order (pillar 1 first)
    pub const ALL: [Self; 5] = [
        Self::Gut,
        Self::Cholesterol,
        Self::Micronutrients,
        Self::Glycine,
        Self::Dha,
    ];

    /// Lowercase key used in tables and on the command line
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Gut => "gut",
            Self::Cholesterol => "cholesterol",
            Self::Micronutrients => "micronutrients",
            Self::Glycine => "glycine",
            Self::Dha => "dha",
        }
    }

    /// Position of the pillar in the framework, starting at 1
    #[must_use]
    pub const fn number(&self) -> u8 {
        match self {
            Self::Gut => 1,
            Self::Cholesterol => 2,
            Self::Micronutrients => 3,
            Self::Glycine => 4,
            Self::Dha => 5,
        }
    }

    /// Strict parse; `None` for unknown keys
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let key = s.trim().to_lowercase();
        Self::ALL.into_iter().find(|p| p.as_str() == key)
    }
}

impl fmt::Display for PillarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why an age-range label could not be parsed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AgeRangeError {
    /// Label was empty or whitespace
    #[error("age range is empty")]
    Empty,
    /// A bound was not a month count
    #[error("invalid month value '{0}'")]
    InvalidMonth(String),
    /// Span whose end precedes its start
    #[error("age range {from}-{to} ends before it starts")]
    Inverted {
        /// Lower bound as written
        from: u8,
        /// Upper bound as written
        to: u8,
    },
}

impl From<AgeRangeError> for AppError {
    fn from(error: AgeRangeError) -> Self {
        Self::invalid_format(error.to_string()).with_source(error)
    }
}

/// Typed form of a recipe age-range label
///
/// Grammar: `N` (a single month), `N-M` (inclusive span with `N <= M`) or
/// `N+` (from month `N` onwards). Surrounding whitespace is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AgeRange {
    /// Exactly one month, e.g. `"7"`
    Exact {
        /// The month
        month: u8,
    },
    /// Inclusive span, e.g. `"9-10"`
    Span {
        /// First month
        from: u8,
        /// Last month
        to: u8,
    },
    /// Open-ended, e.g. `"9+"`
    From {
        /// First month
        month: u8,
    },
}

impl AgeRange {
    /// Parse an age-range label
    ///
    /// # Errors
    ///
    /// Returns [`AgeRangeError`] when the label does not follow the grammar.
    pub fn parse(label: &str) -> Result<Self, AgeRangeError> {
        let label = label.trim();
        if label.is_empty() {
            return Err(AgeRangeError::Empty);
        }

        if let Some(start) = label.strip_suffix('+') {
            return Ok(Self::From {
                month: parse_month(start)?,
            });
        }

        if let Some((start, end)) = label.split_once('-') {
            let from = parse_month(start)?;
            let to = parse_month(end)?;
            if to < from {
                return Err(AgeRangeError::Inverted { from, to });
            }
            return Ok(Self::Span { from, to });
        }

        Ok(Self::Exact {
            month: parse_month(label)?,
        })
    }

    /// Youngest age the range covers
    #[must_use]
    pub const fn min_months(&self) -> u8 {
        match self {
            Self::Exact { month } | Self::From { month } => *month,
            Self::Span { from, .. } => *from,
        }
    }

    /// Whether a baby of `age` months has reached the start of the range
    #[must_use]
    pub fn has_started(&self, age: i64) -> bool {
        age >= i64::from(self.min_months())
    }
}

fn parse_month(token: &str) -> Result<u8, AgeRangeError> {
    let token = token.trim();
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AgeRangeError::InvalidMonth(token.to_owned()));
    }
    token
        .parse()
        .map_err(|_| AgeRangeError::InvalidMonth(token.to_owned()))
}

impl FromStr for AgeRange {
    type Err = AgeRangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for AgeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact { month } => write!(f, "{month}"),
            Self::Span { from, to } => write!(f, "{from}-{to}"),
            Self::From { month } => write!(f, "{month}+"),
        }
    }
}

/// A recipe from the collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recipe {
    /// Stable identifier (kebab-case)
    pub id: &'static str,
    /// Recipe title
    pub title: &'static str,
    /// One or two sentence summary
    pub description: &'static str,
    /// Age label as written, see [`AgeRange`] for its grammar
    pub age_range: &'static str,
    /// Preparation time label, free-form
    pub prep_time: &'static str,
    /// Search and display tags
    pub tags: &'static [&'static str],
    /// Ingredient lines
    pub ingredients: &'static [&'static str],
    /// Ordered instruction steps
    pub instructions: &'static [&'static str],
    /// Link to the developmental-substrate framework
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dsi_rationale: Option<&'static str>,
    /// Safety caveats; empty when there are none
    #[serde(skip_serializing_if = "super::is_empty_list")]
    pub safety_notes: &'static [&'static str],
    /// Nutritional pillar
    pub pillar: PillarId,
}

impl Recipe {
    /// Parse the recipe's age label
    ///
    /// # Errors
    ///
    /// Returns [`AgeRangeError`] when the label does not follow the grammar.
    pub fn parsed_age_range(&self) -> Result<AgeRange, AgeRangeError> {
        AgeRange::parse(self.age_range)
    }

    /// Whether the recipe may be served to a baby of `age` months
    ///
    /// Uses the lower bound of the age label, the same inclusive rule the
    /// food filter applies to `age_start`. Labels that do not parse never
    /// match.
    #[must_use]
    pub fn is_appropriate_for(&self, age: i64) -> bool {
        self.parsed_age_range()
            .is_ok_and(|range| range.has_started(age))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    #[test]
    fn test_parse_observed_labels() {
        assert_eq!(AgeRange::parse("7"), Ok(AgeRange::Exact { month: 7 }));
        assert_eq!(
            AgeRange::parse("9-10"),
            Ok(AgeRange::Span { from: 9, to: 10 })
        );
        assert_eq!(AgeRange::parse("12+"), Ok(AgeRange::From { month: 12 }));
        assert_eq!(
            AgeRange::parse(" 7 - 8 "),
            Ok(AgeRange::Span { from: 7, to: 8 })
        );
    }

    #[test]
    fn test_parse_rejects_malformed_labels() {
        assert_eq!(AgeRange::parse(""), Err(AgeRangeError::Empty));
        assert_eq!(AgeRange::parse("   "), Err(AgeRangeError::Empty));
        assert!(matches!(
            AgeRange::parse("nine"),
            Err(AgeRangeError::InvalidMonth(_))
        ));
        assert!(matches!(
            AgeRange::parse("+"),
            Err(AgeRangeError::InvalidMonth(_))
        ));
        assert!(matches!(
            AgeRange::parse("-3"),
            Err(AgeRangeError::InvalidMonth(_))
        ));
        assert!(matches!(
            AgeRange::parse("9 months"),
            Err(AgeRangeError::InvalidMonth(_))
        ));
        assert_eq!(
            AgeRange::parse("10-9"),
            Err(AgeRangeError::Inverted { from: 10, to: 9 })
        );
    }

    #[test]
    fn test_lower_bound_only() {
        let span = AgeRange::Span { from: 9, to: 10 };
        assert_eq!(span.min_months(), 9);
        assert!(!span.has_started(8));
        assert!(span.has_started(9));
        assert!(span.has_started(11));

        let open = AgeRange::From { month: 9 };
        assert!(open.has_started(30));
        assert!(!open.has_started(8));
    }

    #[test]
    fn test_display_matches_label_form() {
        for label in ["7", "7-8", "9+", "13-14"] {
            assert_eq!(AgeRange::parse(label).unwrap().to_string(), label);
        }
    }

    #[test]
    fn test_age_range_error_converts_to_invalid_format() {
        let error: AppError = AgeRangeError::Empty.into();
        assert_eq!(error.code, ErrorCode::InvalidFormat);
    }

    #[test]
    fn test_pillar_numbers_follow_framework_order() {
        for (index, pillar) in PillarId::ALL.iter().enumerate() {
            assert_eq!(usize::from(pillar.number()), index + 1);
            assert_eq!(PillarId::parse(pillar.as_str()), Some(*pillar));
        }
        assert_eq!(PillarId::parse("DHA"), Some(PillarId::Dha));
        assert_eq!(PillarId::parse("omega"), None);
    }
}
