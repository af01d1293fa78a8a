//! Validation result types.

use serde::Serialize;

/// Outcome of validating a single schema object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchemaValidation {
    /// `true` when `errors` is empty
    pub valid: bool,
    /// One entry per rule violation, in rule order
    pub errors: Vec<String>,
}

impl SchemaValidation {
    pub(crate) fn from_errors(errors: Vec<String>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }
}

/// Validation outcome for one schema found on a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    /// Primary `@type` of the schema, `Unknown` when it has none or did not parse
    #[serde(rename = "type")]
    pub schema_type: String,
    /// `true` when `errors` is empty
    pub valid: bool,
    /// Rule violations or the parse error
    pub errors: Vec<String>,
}

/// Validation outcome for every schema on a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AggregateValidation {
    /// `true` iff every member of `schema_results` is valid (vacuously true when empty)
    pub valid: bool,
    /// One result per schema, in document order
    pub schema_results: Vec<ValidationResult>,
}

impl AggregateValidation {
    /// Builds an aggregate, deriving `valid` from the members.
    pub fn new(schema_results: Vec<ValidationResult>) -> Self {
        Self {
            valid: schema_results.iter().all(|r| r.valid),
            schema_results,
        }
    }

    /// The single-result aggregate reported when the page itself could not be scanned.
    pub fn system_error(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            schema_results: vec![ValidationResult {
                schema_type: "System error".to_string(),
                valid: false,
                errors: vec![message.into()],
            }],
        }
    }
}
