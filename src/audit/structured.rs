//! Structured data check, backed by the schema validator.

use crate::document::DocumentSnapshot;
use crate::rich_results::{extract_schema_types, rich_results_test_url};
use crate::validator::validate_all_schemas;

use super::types::{AuditCategory, AuditItem, AuditStatus, Impact};

/// One `structured-data` item summarizing every JSON-LD schema on the page.
///
/// Valid schemas are reported as a success; missing or invalid ones as a
/// warning-category item carrying the validator's errors as recommendations.
pub fn check_structured_data(snapshot: &DocumentSnapshot) -> Vec<AuditItem> {
    let validation = validate_all_schemas(snapshot);
    let types = extract_schema_types(snapshot);

    let item = if validation.schema_results.is_empty() {
        AuditItem::new(
            "structured-data",
            AuditCategory::Warning,
            "Structured data",
            AuditStatus::Warning,
            if types.is_empty() {
                "No structured data found.".to_string()
            } else {
                format!("Only microdata found: {}", types.join(", "))
            },
        )
        .recommend("Describe the page with Schema.org JSON-LD")
        .with_impact(Impact::Medium)
    } else if validation.valid {
        AuditItem::new(
            "structured-data",
            AuditCategory::Success,
            "Structured data",
            AuditStatus::Passed,
            format!(
                "{} valid schema(s): {}",
                validation.schema_results.len(),
                types.join(", ")
            ),
        )
    } else {
        let invalid: Vec<_> = validation
            .schema_results
            .iter()
            .filter(|r| !r.valid)
            .collect();
        let mut item = AuditItem::new(
            "structured-data",
            AuditCategory::Warning,
            "Structured data",
            AuditStatus::Failed,
            format!(
                "{} of {} schema(s) failed validation.",
                invalid.len(),
                validation.schema_results.len()
            ),
        )
        .with_impact(Impact::High);
        for result in invalid {
            for error in &result.errors {
                item = item.recommend(format!("{}: {}", result.schema_type, error));
            }
        }
        item.recommend(format!(
            "Re-test with {}",
            rich_results_test_url(snapshot.url().as_str())
        ))
    };

    vec![item]
}
