//! SEO audit report.
//!
//! Seven independent passes each turn the snapshot into a handful of
//! [`AuditItem`]s. [`run_audit`] concatenates them in a fixed order, tallies
//! the statuses and computes the weighted score.

mod headings;
mod images;
mod links;
mod meta;
mod mobile;
mod performance;
mod score;
mod structured;
mod types;

use log::debug;
use serde::Serialize;

use crate::document::DocumentSnapshot;

pub use headings::check_headings;
pub use images::check_images;
pub use links::check_links;
pub use meta::check_meta_tags;
pub use mobile::check_mobile;
pub use performance::check_performance;
pub use score::calculate_score;
pub use structured::check_structured_data;
pub use types::{AuditCategory, AuditItem, AuditStatus, Impact};

/// Result of auditing one page.
#[derive(Debug, Clone, Serialize)]
pub struct AuditReport {
    /// Page URL
    pub url: String,
    /// Every check, in pass order
    pub items: Vec<AuditItem>,
    /// Weighted score in `0..=100`
    pub score: u8,
    /// Items with status `passed`
    pub passed: usize,
    /// Items with status `failed`
    pub failed: usize,
    /// Items with status `warning`
    pub warnings: usize,
    /// Items with status `not-applicable`
    pub not_applicable: usize,
}

impl AuditReport {
    /// Builds a report from finished items.
    pub fn new(url: impl Into<String>, items: Vec<AuditItem>) -> Self {
        let count = |status: AuditStatus| items.iter().filter(|i| i.status == status).count();
        Self {
            url: url.into(),
            score: calculate_score(&items),
            passed: count(AuditStatus::Passed),
            failed: count(AuditStatus::Failed),
            warnings: count(AuditStatus::Warning),
            not_applicable: count(AuditStatus::NotApplicable),
            items,
        }
    }

    /// Items matching both filters; `None` matches everything.
    pub fn filter(
        &self,
        category: Option<AuditCategory>,
        status: Option<AuditStatus>,
    ) -> Vec<&AuditItem> {
        self.items
            .iter()
            .filter(|item| category.is_none_or(|c| item.category == c))
            .filter(|item| status.is_none_or(|s| item.status == s))
            .collect()
    }

    /// Failed and warning items.
    pub fn issues(&self) -> Vec<&AuditItem> {
        self.items.iter().filter(|item| item.status.is_issue()).collect()
    }

    /// Looks up an item by id.
    pub fn item(&self, id: &str) -> Option<&AuditItem> {
        self.items.iter().find(|item| item.id == id)
    }
}

/// Runs every audit pass over `snapshot`.
pub fn run_audit(snapshot: &DocumentSnapshot) -> AuditReport {
    let passes: [fn(&DocumentSnapshot) -> Vec<AuditItem>; 7] = [
        check_meta_tags,
        check_structured_data,
        check_headings,
        check_images,
        check_links,
        check_performance,
        check_mobile,
    ];
    let items: Vec<AuditItem> = passes.iter().flat_map(|pass| pass(snapshot)).collect();
    let report = AuditReport::new(snapshot.url().as_str(), items);
    debug!(
        "Audited {}: score {}, {} passed, {} failed, {} warnings",
        report.url, report.score, report.passed, report.failed, report.warnings
    );
    report
}
