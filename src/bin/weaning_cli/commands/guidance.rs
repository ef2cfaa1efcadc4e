// ABOUTME: Guidance commands: categories, pillars, safety rules, rotation, introduction plan, age stage
// ABOUTME: Renders the framing tables and the per-month summary shown on the age slider
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Weaning Guide Contributors

use super::render;
use serde::Serialize;
use weaning_guide::cards::{render_list, Card};
use weaning_guide::content::ContentStore;
use weaning_guide::display::{age_stage, clamp_age, slider_percent};
use weaning_guide::errors::{AppError, AppResult};
use weaning_guide::formatters::ReportFormat;
use weaning_guide::models::{AgeStage, Severity};

const SLIDER_WIDTH: usize = 14;

/// Category display metadata
pub fn categories(store: &ContentStore, format: ReportFormat) -> AppResult<String> {
    let table = store.category_info_table();
    render(format, table, || render_list(table))
}

/// The five pillars, each with its recipe count
pub fn pillars(store: &ContentStore, format: ReportFormat) -> AppResult<String> {
    let table = store.pillars();
    render(format, table, || {
        table
            .iter()
            .map(|pillar| {
                let recipes = store.recipes_for_pillar(pillar.id).len();
                format!("{}\n   Recipes: {recipes}", Card(pillar))
            })
            .collect::<Vec<_>>()
            .join("\n\n")
    })
}

/// Safety rules, optionally of one severity
pub fn safety(
    store: &ContentStore,
    format: ReportFormat,
    severity: Option<&str>,
) -> AppResult<String> {
    let rules = match severity {
        Some(key) => {
            let severity = Severity::parse(key).ok_or_else(|| {
                AppError::invalid_input(format!(
                    "unknown severity '{key}', expected critical, important, or recommendation"
                ))
            })?;
            store.safety_rules_with_severity(severity)
        }
        None => store.safety_rules().iter().collect(),
    };
    render(format, &rules, || render_list(&rules))
}

/// Weekly rotation template
pub fn rotation(store: &ContentStore, format: ReportFormat) -> AppResult<String> {
    let days = store.weekly_rotation();
    render(format, days, || {
        days.iter()
            .map(|day| Card(day).to_string())
            .collect::<Vec<_>>()
            .join("\n")
    })
}

/// First-weeks introduction plan
pub fn introduction(store: &ContentStore, format: ReportFormat) -> AppResult<String> {
    let steps = store.introduction_sequence();
    render(format, steps, || render_list(steps))
}

/// What a month on the age slider looks like
#[derive(Debug, Serialize)]
pub struct StageReport {
    /// Age asked for
    pub age: i64,
    /// Age after clamping to the slider window
    pub slider_age: u8,
    /// Slider position, 0 to 100
    pub slider_percent: f64,
    /// Stage description
    pub stage: Option<&'static AgeStage>,
    /// Names of foods first offered at this age
    pub new_foods: Vec<&'static str>,
    /// Foods that may be offered
    pub foods_available: usize,
    /// Recipes that may be served
    pub recipes_available: usize,
}

/// Summarize one age
pub fn stage(store: &ContentStore, format: ReportFormat, age: i64) -> AppResult<String> {
    let slider_age = clamp_age(age);
    let report = StageReport {
        age,
        slider_age,
        slider_percent: slider_percent(age),
        stage: age_stage(i64::from(slider_age)),
        new_foods: store
            .newly_introduced_at(age)
            .iter()
            .map(|f| f.name)
            .collect(),
        foods_available: store.foods_for_age(age).len(),
        recipes_available: store.recipes_for_age(age).len(),
    };
    render(format, &report, || stage_text(&report))
}

fn stage_text(report: &StageReport) -> String {
    let filled = (report.slider_percent / 100.0 * SLIDER_WIDTH as f64).round() as usize;
    let bar = format!(
        "[{}{}]",
        "=".repeat(filled),
        "-".repeat(SLIDER_WIDTH.saturating_sub(filled))
    );

    let mut lines = Vec::new();
    if let Some(stage) = report.stage {
        lines.push(Card(stage).to_string());
    }
    lines.push(format!("   {bar} {:.0}%", report.slider_percent));
    if !report.new_foods.is_empty() {
        lines.push(format!("   New this month: {}", report.new_foods.join(", ")));
    }
    lines.push(format!(
        "   {} foods and {} recipes available",
        report.foods_available, report.recipes_available
    ));
    lines.join("\n")
}
