// ABOUTME: Guidance records that frame the food and recipe tables
// ABOUTME: Category metadata, five pillars, safety rules, weekly rotation, introduction plan, age stages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Weaning Guide Contributors

use super::food::FoodCategory;
use super::recipe::PillarId;
use serde::Serialize;
use std::fmt;

/// Site palette families used for color tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Palette {
    /// Muted green
    Sage,
    /// Warm clay
    Terracotta,
    /// Off-white
    Cream,
}

impl Palette {
    /// Token prefix used in class names
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sage => "sage",
            Self::Terracotta => "terracotta",
            Self::Cream => "cream",
        }
    }
}

impl fmt::Display for Palette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display metadata for a food category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryInfo {
    /// Category described
    pub category: FoodCategory,
    /// Emoji glyph
    pub icon: &'static str,
    /// Plural section label
    pub label: &'static str,
    /// Palette family
    pub color: Palette,
}

/// One of the five pillars of the nutritional framework
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pillar {
    /// Pillar key
    pub id: PillarId,
    /// Position in the framework, 1-based
    pub number: u8,
    /// Heading
    pub title: &'static str,
    /// Emoji glyph
    pub icon: &'static str,
    /// Short summary
    pub description: &'static str,
    /// Foods that deliver the pillar
    pub key_foods: &'static [&'static str],
    /// When in the weaning journey it applies
    pub timing: &'static str,
    /// Link to the developmental-substrate framework
    pub dsi_connection: &'static str,
}

/// How strongly a safety rule is worded
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Must never be broken
    Critical,
    /// Should be followed
    Important,
    /// Advice
    Recommendation,
}

impl Severity {
    /// Lowercase key
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::Important => "important",
            Self::Recommendation => "recommendation",
        }
    }

    /// Strict parse; `None` for unknown keys
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "critical" => Some(Self::Critical),
            "important" => Some(Self::Important),
            "recommendation" => Some(Self::Recommendation),
            _ => None,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A safety rule with its rationale
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SafetyRule {
    /// Rule as shown to parents
    pub rule: &'static str,
    /// Why it matters
    pub rationale: &'static str,
    /// How strongly it is worded
    pub severity: Severity,
}

/// One day of the weekly rotation template
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RotationDay {
    /// Day name
    pub day: &'static str,
    /// Liver is served
    pub liver: bool,
    /// Cod liver oil is given
    pub clo: bool,
    /// Main protein of the day
    pub main_protein: &'static str,
}

impl RotationDay {
    /// Liver and cod liver oil on the same day stacks vitamin A
    #[must_use]
    pub const fn stacks_vitamin_a(&self) -> bool {
        self.liver && self.clo
    }
}

/// One step of the first-weeks introduction plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IntroductionStep {
    /// Weeks of weaning the step covers, as a label
    pub weeks: &'static str,
    /// Age in months at which the step happens
    pub age: u8,
    /// Focus of the step
    pub focus: &'static str,
    /// Foods introduced
    pub foods: &'static [&'static str],
    /// Portion progression
    pub amounts: &'static str,
    /// Why this step comes here
    pub rationale: &'static str,
}

/// Description of a month on the age slider
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AgeStage {
    /// Age in months
    pub months: u8,
    /// Heading, e.g. "9 months"
    pub label: &'static str,
    /// What eating looks like at this age
    pub description: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_parse() {
        assert_eq!(Severity::parse("Critical"), Some(Severity::Critical));
        assert_eq!(Severity::parse("recommendation"), Some(Severity::Recommendation));
        assert_eq!(Severity::parse("urgent"), None);
        assert!(Severity::Critical < Severity::Recommendation);
    }

    #[test]
    fn test_rotation_day_vitamin_a_stacking() {
        let day = RotationDay {
            day: "Monday",
            liver: true,
            clo: true,
            main_protein: "Liver",
        };
        assert!(day.stacks_vitamin_a());
    }
}
