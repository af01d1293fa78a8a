//! Automatic Schema.org generation.
//!
//! Detects the archetype of a page (product, article, FAQ, event, recipe, job
//! posting, or the WebSite fallback) and synthesizes a best-effort JSON-LD
//! object from what the DOM exposes. [`apply_auto_schema`] additionally scores
//! the result, optionally round-trips it through an external validation API,
//! and injects it into the snapshot.

mod apply;
mod article;
mod detect;
mod event;
mod faq;
mod fields;
mod job;
mod product;
mod recipe;
pub mod scanners;
mod website;

use serde::Serialize;
use serde_json::Value;

pub use apply::{
    apply_auto_schema, ApplyOptions, HttpValidationApi, PageValidation, ValidationApi,
};
pub use detect::{detect_page_type_and_generate_schema, generate_for, PageArchetype};

/// Where a schema came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SchemaSource {
    /// Synthesized from the DOM by the detector cascade
    AutoDetected,
    /// Filled in from a template
    Template,
    /// Supplied by the site author
    UserDefined,
}

/// A generated schema with its heuristic confidence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneratedSchemaInfo {
    /// The JSON-LD object
    pub schema: Value,
    /// Primary `@type` of `schema`
    pub schema_type: String,
    /// Heuristic confidence in `0.0..=1.0`
    pub confidence: f64,
    /// Provenance
    pub source: SchemaSource,
}

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
