//! Schema.org JSON-LD validation.
//!
//! `validate_schema` checks one parsed object against the rule set for its
//! `@type`. `validate_all_schemas` runs it over every JSON-LD script of a
//! document. Rule violations are returned as strings; nothing here fails.

mod rules;
mod types;

use log::debug;
use serde_json::Value;

use crate::config::SCHEMA_CONTEXT;
use crate::document::DocumentSnapshot;

pub use types::{AggregateValidation, SchemaValidation, ValidationResult};

/// Primary `@type` of a schema: the string itself, or the first string of an array.
pub fn primary_type(schema: &Value) -> Option<&str> {
    match schema.get("@type")? {
        Value::String(t) => Some(t.as_str()),
        Value::Array(types) => types.iter().find_map(Value::as_str),
        _ => None,
    }
}

/// Validates one structured-data object.
///
/// Checks `@context` first, then `@type`. A missing `@type` stops validation
/// there; otherwise the type-specific rule set runs. Types without a rule set
/// produce a single "not implemented" error.
///
/// The result depends only on `schema`, so repeated calls return identical
/// error lists.
pub fn validate_schema(schema: &Value) -> SchemaValidation {
    let mut errors = Vec::new();

    if schema.get("@context").and_then(Value::as_str) != Some(SCHEMA_CONTEXT) {
        errors.push(format!(
            "Missing or invalid @context (expected \"{SCHEMA_CONTEXT}\")"
        ));
    }

    let Some(schema_type) = primary_type(schema) else {
        errors.push(rules::missing("@type"));
        return SchemaValidation::from_errors(errors);
    };

    match schema_type {
        "Product" => rules::product(schema, &mut errors),
        "Article" | "NewsArticle" | "BlogPosting" => rules::article(schema, &mut errors),
        "BreadcrumbList" => rules::breadcrumb_list(schema, &mut errors),
        "FAQPage" => rules::faq_page(schema, &mut errors),
        "LocalBusiness" => rules::local_business(schema, &mut errors),
        other => errors.push(format!("Validation not implemented for type: {other}")),
    }

    SchemaValidation::from_errors(errors)
}

/// Validates every `<script type="application/ld+json">` of the document,
/// including injected ones.
///
/// A script that is not valid JSON yields one failed result and the scan moves
/// on. A top-level JSON array is validated element by element. A page without
/// JSON-LD is vacuously valid.
pub fn validate_all_schemas(snapshot: &DocumentSnapshot) -> AggregateValidation {
    let mut results = Vec::new();

    for (index, raw) in snapshot.json_ld_scripts().iter().enumerate() {
        match serde_json::from_str::<Value>(raw) {
            Ok(Value::Array(items)) => results.extend(items.iter().map(validate_one)),
            Ok(value) => results.push(validate_one(&value)),
            Err(e) => {
                debug!("JSON-LD script #{} failed to parse: {}", index + 1, e);
                results.push(ValidationResult {
                    schema_type: "Unknown".to_string(),
                    valid: false,
                    errors: vec![format!("Invalid JSON in schema #{}: {}", index + 1, e)],
                });
            }
        }
    }

    let aggregate = AggregateValidation::new(results);
    debug!(
        "Validated {} schema(s) on {}: valid={}",
        aggregate.schema_results.len(),
        snapshot.url(),
        aggregate.valid
    );
    aggregate
}

fn validate_one(schema: &Value) -> ValidationResult {
    let SchemaValidation { valid, errors } = validate_schema(schema);
    ValidationResult {
        schema_type: primary_type(schema).unwrap_or("Unknown").to_string(),
        valid,
        errors,
    }
}

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
