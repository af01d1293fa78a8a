//! Link checks: internal linking, `target="_blank"` safety, descriptive anchors.

use scraper::ElementRef;
use url::Url;

use crate::config::GENERIC_LINK_TEXTS;
use crate::document::DocumentSnapshot;
use crate::utils::element_text;

use super::types::{AuditCategory, AuditItem, AuditStatus, Impact};

/// A link with its resolved target, skipping `javascript:`, `mailto:`, `tel:`
/// and fragment-only hrefs.
struct Link<'a> {
    element: ElementRef<'a>,
    target: Url,
}

fn links(snapshot: &DocumentSnapshot) -> Vec<Link<'_>> {
    snapshot
        .select_all("a[href]")
        .into_iter()
        .filter_map(|element| {
            let href = element.value().attr("href")?.trim();
            if href.is_empty() || href.starts_with('#') {
                return None;
            }
            let target = snapshot.url().join(href).ok()?;
            if !matches!(target.scheme(), "http" | "https") {
                return None;
            }
            Some(Link { element, target })
        })
        .collect()
}

fn is_internal(snapshot: &DocumentSnapshot, link: &Link<'_>) -> bool {
    link.target.host_str() == snapshot.url().host_str()
}

/// Accessible name of a link: its text, else `aria-label`, else the alt of a
/// contained image.
fn link_label(link: &Link<'_>) -> String {
    let text = element_text(&link.element);
    if !text.is_empty() {
        return text;
    }
    if let Some(label) = link.element.value().attr("aria-label") {
        return label.trim().to_string();
    }
    link.element
        .descendants()
        .filter_map(ElementRef::wrap)
        .filter(|el| el.value().name() == "img")
        .find_map(|img| img.value().attr("alt").map(|alt| alt.trim().to_string()))
        .unwrap_or_default()
}

fn internal_links_item(snapshot: &DocumentSnapshot, links: &[Link<'_>]) -> AuditItem {
    let internal = links.iter().filter(|l| is_internal(snapshot, l)).count();
    let description = format!(
        "{} internal and {} external links.",
        internal,
        links.len() - internal
    );
    if internal > 0 {
        AuditItem::new(
            "internal-links",
            AuditCategory::Info,
            "Internal links",
            AuditStatus::Passed,
            description,
        )
    } else {
        AuditItem::new(
            "internal-links",
            AuditCategory::Info,
            "Internal links",
            AuditStatus::Warning,
            description,
        )
        .recommend("Link to related pages on the same site")
        .with_impact(Impact::Low)
    }
}

fn external_security_item(snapshot: &DocumentSnapshot, links: &[Link<'_>]) -> AuditItem {
    const ID: &str = "external-link-security";
    const TITLE: &str = "External link security";

    let new_window: Vec<&Link<'_>> = links
        .iter()
        .filter(|l| !is_internal(snapshot, l))
        .filter(|l| {
            l.element
                .value()
                .attr("target")
                .is_some_and(|t| t.eq_ignore_ascii_case("_blank"))
        })
        .collect();
    if new_window.is_empty() {
        return AuditItem::new(
            ID,
            AuditCategory::Warning,
            TITLE,
            AuditStatus::NotApplicable,
            "No external links open in a new window.",
        );
    }

    let unsafe_links: Vec<&str> = new_window
        .iter()
        .filter(|l| {
            let rel = l.element.value().attr("rel").unwrap_or("").to_lowercase();
            !rel.split_whitespace().any(|r| r == "noopener" || r == "noreferrer")
        })
        .map(|l| l.target.as_str())
        .collect();

    if unsafe_links.is_empty() {
        AuditItem::new(
            ID,
            AuditCategory::Warning,
            TITLE,
            AuditStatus::Passed,
            format!("{} new-window external links all set rel=\"noopener\".", new_window.len()),
        )
    } else {
        AuditItem::new(
            ID,
            AuditCategory::Warning,
            TITLE,
            AuditStatus::Warning,
            format!(
                "{} of {} new-window external links lack rel=\"noopener\": {}",
                unsafe_links.len(),
                new_window.len(),
                unsafe_links.join(", ")
            ),
        )
        .recommend("Add rel=\"noopener noreferrer\" to links with target=\"_blank\"")
        .with_impact(Impact::Medium)
    }
}

fn link_text_item(links: &[Link<'_>]) -> AuditItem {
    if links.is_empty() {
        return AuditItem::new(
            "link-text",
            AuditCategory::Info,
            "Descriptive link text",
            AuditStatus::NotApplicable,
            "The page has no links.",
        );
    }

    let vague: Vec<String> = links
        .iter()
        .map(link_label)
        .filter(|label| {
            label.is_empty() || GENERIC_LINK_TEXTS.contains(&label.to_lowercase().as_str())
        })
        .collect();

    if vague.is_empty() {
        AuditItem::new(
            "link-text",
            AuditCategory::Info,
            "Descriptive link text",
            AuditStatus::Passed,
            format!("All {} links have descriptive text.", links.len()),
        )
    } else {
        AuditItem::new(
            "link-text",
            AuditCategory::Info,
            "Descriptive link text",
            AuditStatus::Warning,
            format!(
                "{} of {} links have empty or generic text.",
                vague.len(),
                links.len()
            ),
        )
        .recommend("Replace \"click here\"-style anchors with text naming the destination")
        .with_impact(Impact::Low)
    }
}

/// `internal-links`, `external-link-security` and `link-text`.
pub fn check_links(snapshot: &DocumentSnapshot) -> Vec<AuditItem> {
    let links = links(snapshot);
    vec![
        internal_links_item(snapshot, &links),
        external_security_item(snapshot, &links),
        link_text_item(&links),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(html: &str) -> Vec<AuditItem> {
        let snap = DocumentSnapshot::parse(html, "https://deals.example/store").unwrap();
        check_links(&snap)
    }

    #[test]
    fn test_no_links() {
        let items = items("<p>no links</p>");
        assert_eq!(items[0].status, AuditStatus::Warning);
        assert_eq!(items[1].status, AuditStatus::NotApplicable);
        assert_eq!(items[2].status, AuditStatus::NotApplicable);
    }

    #[test]
    fn test_internal_and_external_counts() {
        let html = r##"
            <a href="/coupons">Coupons</a>
            <a href="https://deals.example/stores">All stores</a>
            <a href="https://partner.example/">Our partner</a>
            <a href="#top">Top</a>
            <a href="mailto:hi@deals.example">Email us</a>"##;
        let items = items(html);
        assert_eq!(items[0].status, AuditStatus::Passed);
        assert_eq!(items[0].description, "2 internal and 1 external links.");
        assert_eq!(items[2].status, AuditStatus::Passed);
    }

    #[test]
    fn test_new_window_links_need_noopener() {
        let html = r#"
            <a href="https://a.example/" target="_blank" rel="noopener">A site</a>
            <a href="https://b.example/" target="_blank">B site</a>
            <a href="/local" target="_blank">Local page</a>"#;
        let all = items(html);
        let item = &all[1];
        assert_eq!(item.status, AuditStatus::Warning);
        assert_eq!(
            item.description,
            "1 of 2 new-window external links lack rel=\"noopener\": https://b.example/"
        );

        let safe = r#"<a href="https://a.example/" target="_blank" rel="noreferrer nofollow">A</a>"#;
        assert_eq!(items(safe)[1].status, AuditStatus::Passed);
    }

    #[test]
    fn test_generic_link_text() {
        let html = r#"
            <a href="/deals">Click here</a>
            <a href="/stores"><img src="s.png" alt="Store directory"></a>
            <a href="/empty"></a>
            <a href="/labelled" aria-label="Weekly flyer"></a>"#;
        let all = items(html);
        let item = &all[2];
        assert_eq!(item.status, AuditStatus::Warning);
        assert_eq!(item.description, "2 of 4 links have empty or generic text.");
    }
}
