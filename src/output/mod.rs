//! Rendering of command results.
//!
//! Every renderer returns a `String` so the CLI decides where it goes. JSON
//! output is the serde form of the result types, pretty-printed; plain output
//! is a colored, human-oriented report.

mod plain;

use serde::Serialize;

use crate::audit::{AuditItem, AuditReport};
use crate::config::OutputFormat;
use crate::generator::GeneratedSchemaInfo;
use crate::rich_results::{schema_documentation_url, ToolLinks};
use crate::validator::AggregateValidation;

/// A schema type with its documentation link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeEntry {
    /// Schema `@type`
    #[serde(rename = "type")]
    pub schema_type: String,
    /// Documentation page for the type
    pub documentation: String,
}

impl TypeEntry {
    /// Pairs each type with its documentation page.
    pub fn from_types(types: &[String]) -> Vec<Self> {
        types
            .iter()
            .map(|t| Self {
                schema_type: t.clone(),
                documentation: schema_documentation_url(t),
            })
            .collect()
    }
}

#[derive(Serialize)]
struct GenerationOutput<'a> {
    generated: Option<&'a GeneratedSchemaInfo>,
    scripts: &'a str,
}

#[derive(Serialize)]
struct AuditOutput<'a> {
    url: &'a str,
    score: u8,
    passed: usize,
    failed: usize,
    warnings: usize,
    not_applicable: usize,
    items: &'a [&'a AuditItem],
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}

/// Renders an aggregate validation result.
///
/// # Errors
///
/// Returns an error only if JSON serialization fails.
pub fn render_validation(
    url: &str,
    validation: &AggregateValidation,
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Json => to_json(validation),
        OutputFormat::Plain => Ok(plain::validation(url, validation)),
    }
}

/// Renders the schema types found on a page.
///
/// # Errors
///
/// Returns an error only if JSON serialization fails.
pub fn render_types(
    url: &str,
    types: &[TypeEntry],
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Json => to_json(types),
        OutputFormat::Plain => Ok(plain::types(url, types)),
    }
}

/// Renders the outcome of auto-generation together with the injected
/// `<script>` tags.
///
/// # Errors
///
/// Returns an error only if JSON serialization fails.
pub fn render_generation(
    url: &str,
    generated: Option<&GeneratedSchemaInfo>,
    scripts: &str,
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Json => to_json(&GenerationOutput { generated, scripts }),
        OutputFormat::Plain => Ok(plain::generation(url, generated, scripts)),
    }
}

/// Renders an audit report, listing only `items` (a filtered view of
/// `report.items`). The score and tallies always cover the whole report.
///
/// # Errors
///
/// Returns an error only if JSON serialization fails.
pub fn render_audit(
    report: &AuditReport,
    items: &[&AuditItem],
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Json => to_json(&AuditOutput {
            url: &report.url,
            score: report.score,
            passed: report.passed,
            failed: report.failed,
            warnings: report.warnings,
            not_applicable: report.not_applicable,
            items,
        }),
        OutputFormat::Plain => Ok(plain::audit(report, items)),
    }
}

/// Renders external testing tool links.
///
/// # Errors
///
/// Returns an error only if JSON serialization fails.
pub fn render_tools(links: &ToolLinks, format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Json => to_json(links),
        OutputFormat::Plain => Ok(plain::tools(links)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::run_audit;
    use crate::document::DocumentSnapshot;
    use crate::validator::ValidationResult;
    use serde_json::Value;

    fn widget_report() -> AuditReport {
        let snap = DocumentSnapshot::parse(
            "<title>Widget</title><img src=\"w.png\">",
            "https://shop.example/widget",
        )
        .unwrap();
        run_audit(&snap)
    }

    #[test]
    fn test_validation_json_and_plain() {
        let validation = AggregateValidation::new(vec![ValidationResult {
            schema_type: "Product".to_string(),
            valid: false,
            errors: vec!["Missing required field: image".to_string()],
        }]);

        let json: Value =
            serde_json::from_str(&render_validation("https://shop.example/", &validation, OutputFormat::Json).unwrap())
                .unwrap();
        assert_eq!(json["valid"], false);
        assert_eq!(json["schema_results"][0]["type"], "Product");

        let text = render_validation("https://shop.example/", &validation, OutputFormat::Plain).unwrap();
        assert!(text.contains("Product"));
        assert!(text.contains("Missing required field: image"));
    }

    #[test]
    fn test_empty_validation_plain() {
        let text = render_validation(
            "https://shop.example/",
            &AggregateValidation::new(Vec::new()),
            OutputFormat::Plain,
        )
        .unwrap();
        assert!(text.contains("No JSON-LD schemas found"));
    }

    #[test]
    fn test_types_entries() {
        let entries = TypeEntry::from_types(&["Recipe".to_string()]);
        let json: Value =
            serde_json::from_str(&render_types("https://x.example/", &entries, OutputFormat::Json).unwrap())
                .unwrap();
        assert_eq!(json[0]["type"], "Recipe");
        assert!(json[0]["documentation"].as_str().unwrap().ends_with("/recipe"));

        let none = render_types("https://x.example/", &[], OutputFormat::Plain).unwrap();
        assert!(none.contains("No schema types"));
    }

    #[test]
    fn test_generation_none() {
        let json: Value = serde_json::from_str(
            &render_generation("https://x.example/", None, "", OutputFormat::Json).unwrap(),
        )
        .unwrap();
        assert!(json["generated"].is_null());

        let text = render_generation("https://x.example/", None, "", OutputFormat::Plain).unwrap();
        assert!(text.contains("No schema generated"));
    }

    #[test]
    fn test_audit_json_lists_filtered_items() {
        let report = widget_report();
        let issues = report.issues();
        let json: Value =
            serde_json::from_str(&render_audit(&report, &issues, OutputFormat::Json).unwrap()).unwrap();
        assert_eq!(json["score"], report.score);
        assert_eq!(json["failed"], report.failed);
        assert_eq!(json["items"].as_array().unwrap().len(), issues.len());
    }

    #[test]
    fn test_audit_plain_mentions_items() {
        let report = widget_report();
        let all: Vec<&AuditItem> = report.items.iter().collect();
        let text = render_audit(&report, &all, OutputFormat::Plain).unwrap();
        assert!(text.contains("meta-description"));
        assert!(text.contains(&format!("{}/100", report.score)));
        assert!(text.contains("Add a meta description"));
    }

    #[test]
    fn test_tools_plain() {
        let links = ToolLinks::for_url("https://x.example/");
        let text = render_tools(&links, OutputFormat::Plain).unwrap();
        assert!(text.contains(&links.rich_results_test));
        assert!(text.contains(&links.pagespeed_insights));
    }
}
