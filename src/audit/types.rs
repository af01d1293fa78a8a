//! Audit item types.

use clap::ValueEnum;
use serde::Serialize;
use strum_macros::EnumIter as EnumIterMacro;

/// Severity class of a check. Drives the item's weight in the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ValueEnum, EnumIterMacro)]
#[serde(rename_all = "kebab-case")]
pub enum AuditCategory {
    /// Blocks or badly hurts indexing
    Critical,
    /// Worth fixing
    Warning,
    /// Nice to have
    Info,
    /// Already in good shape; does not count toward the score
    Success,
}

impl AuditCategory {
    /// Weight in the overall score.
    pub fn weight(&self) -> f64 {
        match self {
            AuditCategory::Critical => 3.0,
            AuditCategory::Warning => 2.0,
            AuditCategory::Info => 1.0,
            AuditCategory::Success => 0.0,
        }
    }

    /// Returns a human-readable string representation of the category.
    pub fn as_str(&self) -> &'static str {
        match self {
            AuditCategory::Critical => "critical",
            AuditCategory::Warning => "warning",
            AuditCategory::Info => "info",
            AuditCategory::Success => "success",
        }
    }
}

/// Outcome of a check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ValueEnum, EnumIterMacro)]
#[serde(rename_all = "kebab-case")]
pub enum AuditStatus {
    /// The page meets the check
    Passed,
    /// The page fails the check
    Failed,
    /// Partially met
    Warning,
    /// The check does not apply to this page
    NotApplicable,
}

impl AuditStatus {
    /// Contribution per unit of weight.
    pub fn score(&self) -> f64 {
        match self {
            AuditStatus::Passed => 1.0,
            AuditStatus::Warning => 0.5,
            AuditStatus::Failed => 0.0,
            AuditStatus::NotApplicable => 1.0,
        }
    }

    /// Returns a human-readable string representation of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            AuditStatus::Passed => "passed",
            AuditStatus::Failed => "failed",
            AuditStatus::Warning => "warning",
            AuditStatus::NotApplicable => "not-applicable",
        }
    }

    /// Failed or warning.
    pub fn is_issue(&self) -> bool {
        matches!(self, AuditStatus::Failed | AuditStatus::Warning)
    }
}

/// Expected effect of fixing a failed check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, EnumIterMacro)]
#[serde(rename_all = "kebab-case")]
pub enum Impact {
    /// Likely to change rankings or rich-result eligibility
    High,
    /// Noticeable but indirect
    Medium,
    /// Polish
    Low,
}

impl Impact {
    /// Returns a human-readable string representation of the impact.
    pub fn as_str(&self) -> &'static str {
        match self {
            Impact::High => "high",
            Impact::Medium => "medium",
            Impact::Low => "low",
        }
    }
}

/// One check result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuditItem {
    /// Stable identifier, e.g. `title-tag`
    pub id: String,
    /// Severity class
    pub category: AuditCategory,
    /// Short label
    pub title: String,
    /// What was found
    pub description: String,
    /// Outcome
    pub status: AuditStatus,
    /// Suggested fixes; empty when passed
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub recommendations: Vec<String>,
    /// Expected effect of fixing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub impact: Option<Impact>,
}

impl AuditItem {
    /// Creates an item without recommendations or impact.
    pub fn new(
        id: &str,
        category: AuditCategory,
        title: &str,
        status: AuditStatus,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.to_string(),
            category,
            title: title.to_string(),
            description: description.into(),
            status,
            recommendations: Vec::new(),
            impact: None,
        }
    }

    /// Adds a recommendation.
    pub fn recommend(mut self, recommendation: impl Into<String>) -> Self {
        self.recommendations.push(recommendation.into());
        self
    }

    /// Sets the impact.
    pub fn with_impact(mut self, impact: Impact) -> Self {
        self.impact = Some(impact);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_weights_and_scores() {
        let weights: Vec<f64> = AuditCategory::iter().map(|c| c.weight()).collect();
        assert_eq!(weights, vec![3.0, 2.0, 1.0, 0.0]);
        let scores: Vec<f64> = AuditStatus::iter().map(|s| s.score()).collect();
        assert_eq!(scores, vec![1.0, 0.0, 0.5, 1.0]);
    }

    #[test]
    fn test_serialized_names_match_as_str() {
        for status in AuditStatus::iter() {
            assert_eq!(serde_json::to_value(status).unwrap(), status.as_str());
        }
        for category in AuditCategory::iter() {
            assert_eq!(serde_json::to_value(category).unwrap(), category.as_str());
        }
        for impact in Impact::iter() {
            assert_eq!(serde_json::to_value(impact).unwrap(), impact.as_str());
        }
    }

    #[test]
    fn test_item_serialization_skips_empty_fields() {
        let item = AuditItem::new(
            "html-lang",
            AuditCategory::Warning,
            "HTML lang attribute",
            AuditStatus::Passed,
            "lang=\"en\"",
        );
        let value = serde_json::to_value(&item).unwrap();
        assert!(value.get("recommendations").is_none());
        assert!(value.get("impact").is_none());

        let failed = item
            .recommend("Declare the page language on <html>")
            .with_impact(Impact::Medium);
        let value = serde_json::to_value(&failed).unwrap();
        assert_eq!(value["recommendations"][0], "Declare the page language on <html>");
        assert_eq!(value["impact"], "medium");
    }

    #[test]
    fn test_is_issue() {
        assert!(AuditStatus::Failed.is_issue());
        assert!(AuditStatus::Warning.is_issue());
        assert!(!AuditStatus::Passed.is_issue());
        assert!(!AuditStatus::NotApplicable.is_issue());
    }
}
