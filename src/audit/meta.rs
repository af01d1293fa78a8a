//! Title, meta description, canonical and Open Graph checks.

use crate::config::{
    META_DESCRIPTION_MAX_LENGTH, META_DESCRIPTION_MIN_LENGTH, TITLE_MAX_LENGTH, TITLE_MIN_LENGTH,
};
use crate::document::DocumentSnapshot;
use crate::utils::char_len;

use super::types::{AuditCategory, AuditItem, AuditStatus, Impact};

const OPEN_GRAPH_REQUIRED: &[&str] = &["og:title", "og:description", "og:image"];

fn title_items(snapshot: &DocumentSnapshot) -> Vec<AuditItem> {
    let Some(title) = snapshot.title() else {
        return vec![
            AuditItem::new(
                "title-tag",
                AuditCategory::Critical,
                "Title tag",
                AuditStatus::Failed,
                "The page has no <title>.",
            )
            .recommend("Add a unique, descriptive <title> to the page head")
            .with_impact(Impact::High),
            AuditItem::new(
                "title-length",
                AuditCategory::Warning,
                "Title length",
                AuditStatus::NotApplicable,
                "No title to measure.",
            ),
        ];
    };

    let len = char_len(&title);
    let tag = AuditItem::new(
        "title-tag",
        AuditCategory::Critical,
        "Title tag",
        AuditStatus::Passed,
        format!("Title: \"{}\"", title),
    );
    let length = if (TITLE_MIN_LENGTH..=TITLE_MAX_LENGTH).contains(&len) {
        AuditItem::new(
            "title-length",
            AuditCategory::Warning,
            "Title length",
            AuditStatus::Passed,
            format!("Title is {} characters.", len),
        )
    } else {
        AuditItem::new(
            "title-length",
            AuditCategory::Warning,
            "Title length",
            AuditStatus::Warning,
            format!(
                "Title is {} characters; {}-{} display best in search results.",
                len, TITLE_MIN_LENGTH, TITLE_MAX_LENGTH
            ),
        )
        .recommend(if len < TITLE_MIN_LENGTH {
            "Expand the title with the primary keyword and brand"
        } else {
            "Shorten the title so it is not truncated in search results"
        })
        .with_impact(Impact::Medium)
    };
    vec![tag, length]
}

fn meta_description_item(snapshot: &DocumentSnapshot) -> AuditItem {
    const ID: &str = "meta-description";
    const TITLE: &str = "Meta description";

    let Some(description) = snapshot.meta_description() else {
        return AuditItem::new(
            ID,
            AuditCategory::Critical,
            TITLE,
            AuditStatus::Failed,
            "The page has no meta description.",
        )
        .recommend(format!(
            "Add a meta description of {}-{} characters summarizing the page",
            META_DESCRIPTION_MIN_LENGTH, META_DESCRIPTION_MAX_LENGTH
        ))
        .with_impact(Impact::High);
    };

    let len = char_len(&description);
    if (META_DESCRIPTION_MIN_LENGTH..=META_DESCRIPTION_MAX_LENGTH).contains(&len) {
        AuditItem::new(
            ID,
            AuditCategory::Critical,
            TITLE,
            AuditStatus::Passed,
            format!("Meta description is {} characters.", len),
        )
    } else {
        AuditItem::new(
            ID,
            AuditCategory::Critical,
            TITLE,
            AuditStatus::Warning,
            format!(
                "Meta description is {} characters; aim for {}-{}.",
                len, META_DESCRIPTION_MIN_LENGTH, META_DESCRIPTION_MAX_LENGTH
            ),
        )
        .recommend("Rewrite the meta description to fit the recommended length")
        .with_impact(Impact::Medium)
    }
}

fn canonical_item(snapshot: &DocumentSnapshot) -> AuditItem {
    match snapshot.canonical() {
        Some(href) => AuditItem::new(
            "canonical-url",
            AuditCategory::Warning,
            "Canonical URL",
            AuditStatus::Passed,
            format!("Canonical: {}", snapshot.absolute_url(&href)),
        ),
        None => AuditItem::new(
            "canonical-url",
            AuditCategory::Warning,
            "Canonical URL",
            AuditStatus::Failed,
            "No <link rel=\"canonical\"> found.",
        )
        .recommend("Declare the preferred URL with <link rel=\"canonical\">")
        .with_impact(Impact::Medium),
    }
}

fn open_graph_item(snapshot: &DocumentSnapshot) -> AuditItem {
    let og = snapshot.open_graph();
    let missing: Vec<&str> = OPEN_GRAPH_REQUIRED
        .iter()
        .copied()
        .filter(|key| !og.contains_key(*key))
        .collect();

    let status = if missing.is_empty() {
        AuditStatus::Passed
    } else if missing.len() == OPEN_GRAPH_REQUIRED.len() {
        AuditStatus::Failed
    } else {
        AuditStatus::Warning
    };
    let description = if missing.is_empty() {
        "Open Graph title, description and image are set.".to_string()
    } else {
        format!("Missing Open Graph tags: {}", missing.join(", "))
    };

    let item = AuditItem::new(
        "open-graph",
        AuditCategory::Info,
        "Open Graph tags",
        status,
        description,
    );
    if missing.is_empty() {
        item
    } else {
        item.recommend("Add og:title, og:description and og:image for rich link previews")
            .with_impact(Impact::Low)
    }
}

/// Title, meta description, canonical URL and Open Graph checks.
pub fn check_meta_tags(snapshot: &DocumentSnapshot) -> Vec<AuditItem> {
    let mut items = title_items(snapshot);
    items.push(meta_description_item(snapshot));
    items.push(canonical_item(snapshot));
    items.push(open_graph_item(snapshot));
    items
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(html: &str) -> Vec<AuditItem> {
        let snap = DocumentSnapshot::parse(html, "https://deals.example/store").unwrap();
        check_meta_tags(&snap)
    }

    fn status(items: &[AuditItem], id: &str) -> AuditStatus {
        items.iter().find(|i| i.id == id).unwrap().status
    }

    #[test]
    fn test_missing_title() {
        let items = items("<html><head></head></html>");
        assert_eq!(status(&items, "title-tag"), AuditStatus::Failed);
        assert_eq!(status(&items, "title-length"), AuditStatus::NotApplicable);
    }

    #[test]
    fn test_title_length_bounds() {
        let fifty = "t".repeat(50);
        let html = format!("<title>{}</title>", fifty);
        assert_eq!(status(&items(&html), "title-length"), AuditStatus::Passed);

        let sixty_one = "t".repeat(61);
        let html = format!("<title>{}</title>", sixty_one);
        assert_eq!(status(&items(&html), "title-length"), AuditStatus::Warning);
    }

    #[test]
    fn test_meta_description_states() {
        assert_eq!(
            status(&items("<title>x</title>"), "meta-description"),
            AuditStatus::Failed
        );

        let short = r#"<meta name="description" content="Too short.">"#;
        assert_eq!(status(&items(short), "meta-description"), AuditStatus::Warning);

        let good = format!(r#"<meta name="description" content="{}">"#, "d".repeat(140));
        assert_eq!(status(&items(&good), "meta-description"), AuditStatus::Passed);
    }

    #[test]
    fn test_canonical_and_open_graph() {
        let html = r#"<head>
            <link rel="canonical" href="/store">
            <meta property="og:title" content="Deals">
        </head>"#;
        let items = items(html);
        assert_eq!(status(&items, "canonical-url"), AuditStatus::Passed);
        let og = items.iter().find(|i| i.id == "open-graph").unwrap();
        assert_eq!(og.status, AuditStatus::Warning);
        assert_eq!(og.description, "Missing Open Graph tags: og:description, og:image");
    }
}
