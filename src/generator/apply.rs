//! Generate, optionally validate, and inject.

use std::future::Future;
use std::sync::Arc;

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::config::{ConfidenceConfig, AUTO_GENERATED_SOURCE, VALIDATION_PENDING_SOURCE};
use crate::document::DocumentSnapshot;
use crate::error_handling::ValidationApiError;
use crate::validator::primary_type;

use super::detect::detect_page_type_and_generate_schema;
use super::{GeneratedSchemaInfo, SchemaSource};

/// Verdict of the external page validation service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageValidation {
    /// Whether the page's structured data passed
    pub valid: bool,
    /// Optional 0-100 quality score
    #[serde(default)]
    pub score: Option<f64>,
    /// Human-readable problems, empty when clean
    #[serde(default)]
    pub issues: Vec<String>,
}

/// An external service that validates the structured data of a live page.
pub trait ValidationApi {
    /// Validates the page at `url`. Called at most once per
    /// [`apply_auto_schema`] run.
    fn validate_page(
        &self,
        url: &str,
    ) -> impl Future<Output = Result<PageValidation, ValidationApiError>> + Send;
}

/// [`ValidationApi`] over HTTP: `GET <endpoint>?url=<page>` answering
/// `{"valid": bool, "score": number?, "issues": [string]}`.
#[derive(Debug, Clone)]
pub struct HttpValidationApi {
    client: Arc<reqwest::Client>,
    endpoint: String,
}

impl HttpValidationApi {
    /// Client for the service at `endpoint`.
    pub fn new(client: Arc<reqwest::Client>, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    /// The configured endpoint.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl ValidationApi for HttpValidationApi {
    fn validate_page(
        &self,
        url: &str,
    ) -> impl Future<Output = Result<PageValidation, ValidationApiError>> + Send {
        let request = self.client.get(&self.endpoint).query(&[("url", url)]);
        async move {
            let response = request.send().await.map_err(ValidationApiError::Request)?;
            let status = response.status();
            if !status.is_success() {
                return Err(ValidationApiError::Status(status.as_u16()));
            }
            let body = response.text().await.map_err(ValidationApiError::Request)?;
            serde_json::from_str::<PageValidation>(&body)
                .map_err(|e| ValidationApiError::Decode(e.to_string()))
        }
    }
}

/// Options for [`apply_auto_schema`].
#[derive(Debug, Clone, Default)]
pub struct ApplyOptions {
    /// Round-trip the schema through the validation API before injecting
    pub validate: bool,
    /// URL sent to the validation API; defaults to the snapshot URL
    pub url: Option<String>,
    /// Base confidences and penalty factors
    pub confidence: ConfidenceConfig,
}

/// Detects, scores and injects a schema for the page.
///
/// Returns `None` when nothing was generated (an existing schema already
/// covers the page). Validation API failures lower the confidence but never
/// fail the call. On success the schema is injected into `snapshot` with
/// `data-source="auto-generated"`.
pub async fn apply_auto_schema<A: ValidationApi>(
    snapshot: &mut DocumentSnapshot,
    api: &A,
    options: &ApplyOptions,
) -> Option<GeneratedSchemaInfo> {
    let schema = detect_page_type_and_generate_schema(snapshot)?;
    let schema_type = primary_type(&schema).unwrap_or("Thing").to_string();
    let mut confidence = options.confidence.base_for(&schema_type);

    if options.validate {
        let pending = snapshot.inject_schema(&schema, VALIDATION_PENDING_SOURCE);
        let url = options
            .url
            .clone()
            .unwrap_or_else(|| snapshot.url().to_string());
        let outcome = api.validate_page(&url).await;
        snapshot.remove_injected(pending);

        match outcome {
            Ok(verdict) if !verdict.valid || !verdict.issues.is_empty() => {
                info!(
                    "Validation API reported {} issue(s) for {} (valid={})",
                    verdict.issues.len(),
                    url,
                    verdict.valid
                );
                confidence *= options.confidence.issues_factor;
            }
            Ok(verdict) => debug!("Validation API accepted {} (score={:?})", url, verdict.score),
            Err(e) => {
                warn!("Schema validation failed for {}: {}", url, e);
                confidence *= options.confidence.failure_factor;
            }
        }
    }

    snapshot.inject_schema(&schema, AUTO_GENERATED_SOURCE);
    info!(
        "Injected auto-generated {} schema into {} (confidence {:.2})",
        schema_type,
        snapshot.url(),
        confidence
    );

    Some(GeneratedSchemaInfo {
        schema,
        schema_type,
        confidence: confidence.clamp(0.0, 1.0),
        source: SchemaSource::AutoDetected,
    })
}
