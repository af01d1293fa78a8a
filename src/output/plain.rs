//! Human-readable renderers.

use std::fmt::Write;

use colored::*;

use crate::audit::{AuditItem, AuditReport, AuditStatus};
use crate::generator::GeneratedSchemaInfo;
use crate::rich_results::ToolLinks;
use crate::validator::AggregateValidation;

use super::TypeEntry;

fn status_badge(status: AuditStatus) -> ColoredString {
    match status {
        AuditStatus::Passed => "PASS".green(),
        AuditStatus::Failed => "FAIL".red(),
        AuditStatus::Warning => "WARN".yellow(),
        AuditStatus::NotApplicable => "N/A ".dimmed(),
    }
}

fn score_label(score: u8) -> ColoredString {
    let label = format!("{}/100", score);
    match score {
        90..=100 => label.green().bold(),
        50..=89 => label.yellow().bold(),
        _ => label.red().bold(),
    }
}

// `writeln!` into a String cannot fail, so results are discarded throughout.

pub(super) fn validation(url: &str, validation: &AggregateValidation) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} {}", "Structured data for".bold(), url);
    if validation.schema_results.is_empty() {
        let _ = writeln!(out, "  No JSON-LD schemas found.");
        return out;
    }
    for result in &validation.schema_results {
        let badge = if result.valid {
            "VALID".green()
        } else {
            "INVALID".red()
        };
        let _ = writeln!(out, "  {} {}", badge, result.schema_type.bold());
        for error in &result.errors {
            let _ = writeln!(out, "      - {}", error);
        }
    }
    let summary = if validation.valid {
        "All schemas valid".green()
    } else {
        "Validation failed".red()
    };
    let _ = writeln!(out, "{}", summary.bold());
    out
}

pub(super) fn types(url: &str, types: &[TypeEntry]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} {}", "Schema types on".bold(), url);
    if types.is_empty() {
        let _ = writeln!(out, "  No schema types found.");
    }
    for entry in types {
        let _ = writeln!(
            out,
            "  {:<20} {}",
            entry.schema_type.bold(),
            entry.documentation.dimmed()
        );
    }
    out
}

pub(super) fn generation(
    url: &str,
    generated: Option<&GeneratedSchemaInfo>,
    scripts: &str,
) -> String {
    let mut out = String::new();
    let Some(info) = generated else {
        let _ = writeln!(
            out,
            "No schema generated for {}: the page already declares one.",
            url
        );
        return out;
    };
    let _ = writeln!(
        out,
        "{} {} schema for {} (confidence {:.2})",
        "Generated".green().bold(),
        info.schema_type.bold(),
        url,
        info.confidence
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", scripts);
    out
}

pub(super) fn audit(report: &AuditReport, items: &[&AuditItem]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} {}  score {}",
        "SEO audit for".bold(),
        report.url,
        score_label(report.score)
    );
    let _ = writeln!(
        out,
        "  {} passed, {} failed, {} warnings, {} not applicable",
        report.passed, report.failed, report.warnings, report.not_applicable
    );
    let _ = writeln!(out);

    for item in items {
        let _ = writeln!(
            out,
            "[{}] {} ({}, {})",
            status_badge(item.status),
            item.title.bold(),
            item.id,
            item.category.as_str()
        );
        let _ = writeln!(out, "       {}", item.description);
        for recommendation in &item.recommendations {
            let _ = writeln!(out, "       -> {}", recommendation);
        }
        if let Some(impact) = item.impact {
            let _ = writeln!(out, "       impact: {}", impact.as_str());
        }
    }
    out
}

pub(super) fn tools(links: &ToolLinks) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} {}", "Testing tools for".bold(), links.url);
    let _ = writeln!(out, "  Rich Results Test:  {}", links.rich_results_test);
    let _ = writeln!(out, "  Schema validator:   {}", links.schema_validator);
    let _ = writeln!(out, "  PageSpeed Insights: {}", links.pagespeed_insights);
    out
}
