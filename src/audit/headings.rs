//! Heading structure checks.

use crate::document::DocumentSnapshot;
use crate::utils::{element_text, heading_level};

use super::types::{AuditCategory, AuditItem, AuditStatus, Impact};

fn h1_item(snapshot: &DocumentSnapshot) -> AuditItem {
    let h1s = snapshot.select_all("h1");
    match h1s.len() {
        0 => AuditItem::new(
            "h1-tag",
            AuditCategory::Critical,
            "H1 heading",
            AuditStatus::Failed,
            "The page has no <h1>.",
        )
        .recommend("Add exactly one <h1> describing the page's main topic")
        .with_impact(Impact::High),
        1 => AuditItem::new(
            "h1-tag",
            AuditCategory::Critical,
            "H1 heading",
            AuditStatus::Passed,
            format!("H1: \"{}\"", element_text(&h1s[0])),
        ),
        n => AuditItem::new(
            "h1-tag",
            AuditCategory::Critical,
            "H1 heading",
            AuditStatus::Warning,
            format!("The page has {} <h1> elements.", n),
        )
        .recommend("Keep a single <h1> and demote the others to <h2>")
        .with_impact(Impact::Medium),
    }
}

/// Heading transitions that skip a level, as `(from, to)` pairs.
fn skipped_levels(levels: &[u8]) -> Vec<(u8, u8)> {
    levels
        .windows(2)
        .filter(|w| w[1] > w[0] + 1)
        .map(|w| (w[0], w[1]))
        .collect()
}

fn hierarchy_item(snapshot: &DocumentSnapshot) -> AuditItem {
    let levels: Vec<u8> = snapshot
        .select_all("h1, h2, h3, h4, h5, h6")
        .iter()
        .filter_map(heading_level)
        .collect();

    if levels.is_empty() {
        return AuditItem::new(
            "heading-hierarchy",
            AuditCategory::Warning,
            "Heading hierarchy",
            AuditStatus::NotApplicable,
            "The page has no headings.",
        );
    }

    let skips = skipped_levels(&levels);
    if skips.is_empty() {
        return AuditItem::new(
            "heading-hierarchy",
            AuditCategory::Warning,
            "Heading hierarchy",
            AuditStatus::Passed,
            format!("{} headings in logical order.", levels.len()),
        );
    }

    let described: Vec<String> = skips
        .iter()
        .map(|(from, to)| format!("h{} → h{}", from, to))
        .collect();
    AuditItem::new(
        "heading-hierarchy",
        AuditCategory::Warning,
        "Heading hierarchy",
        AuditStatus::Warning,
        format!("Skipped heading levels: {}", described.join(", ")),
    )
    .recommend("Nest headings one level at a time (h1, then h2, then h3)")
    .with_impact(Impact::Low)
}

/// `h1-tag` and `heading-hierarchy`.
pub fn check_headings(snapshot: &DocumentSnapshot) -> Vec<AuditItem> {
    vec![h1_item(snapshot), hierarchy_item(snapshot)]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(html: &str) -> Vec<AuditItem> {
        let snap = DocumentSnapshot::parse(html, "https://deals.example/").unwrap();
        check_headings(&snap)
    }

    #[test]
    fn test_h1_counts() {
        assert_eq!(items("<p>x</p>")[0].status, AuditStatus::Failed);
        assert_eq!(items("<h1>Deals</h1>")[0].status, AuditStatus::Passed);
        assert_eq!(items("<h1>A</h1><h1>B</h1>")[0].status, AuditStatus::Warning);
    }

    #[test]
    fn test_hierarchy() {
        assert_eq!(items("<p>x</p>")[1].status, AuditStatus::NotApplicable);
        assert_eq!(
            items("<h1>A</h1><h2>B</h2><h3>C</h3><h2>D</h2>")[1].status,
            AuditStatus::Passed
        );

        let all = items("<h1>A</h1><h3>B</h3><h4>C</h4><h6>D</h6>");
        let skipped = &all[1];
        assert_eq!(skipped.status, AuditStatus::Warning);
        assert_eq!(skipped.description, "Skipped heading levels: h1 → h3, h4 → h6");
    }

    #[test]
    fn test_skipped_levels() {
        assert!(skipped_levels(&[2, 3, 1, 2]).is_empty());
        assert_eq!(skipped_levels(&[1, 4]), vec![(1, 4)]);
    }
}
