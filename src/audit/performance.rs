//! Static checks that correlate with load performance.

use crate::config::MAX_DOM_ELEMENTS;
use crate::document::DocumentSnapshot;

use super::types::{AuditCategory, AuditItem, AuditStatus, Impact};

fn render_blocking_item(snapshot: &DocumentSnapshot) -> AuditItem {
    let blocking: Vec<String> = snapshot
        .select_all("head script[src]")
        .into_iter()
        .filter(|script| {
            let el = script.value();
            el.attr("async").is_none()
                && el.attr("defer").is_none()
                && el.attr("type") != Some("module")
        })
        .filter_map(|script| script.value().attr("src").map(str::to_string))
        .collect();

    if blocking.is_empty() {
        AuditItem::new(
            "render-blocking-scripts",
            AuditCategory::Warning,
            "Render-blocking scripts",
            AuditStatus::Passed,
            "No synchronous external scripts in <head>.",
        )
    } else {
        AuditItem::new(
            "render-blocking-scripts",
            AuditCategory::Warning,
            "Render-blocking scripts",
            AuditStatus::Warning,
            format!(
                "{} synchronous script(s) in <head>: {}",
                blocking.len(),
                blocking.join(", ")
            ),
        )
        .recommend("Load head scripts with async or defer")
        .with_impact(Impact::Medium)
    }
}

fn html_lang_item(snapshot: &DocumentSnapshot) -> AuditItem {
    match snapshot.lang() {
        Some(lang) => AuditItem::new(
            "html-lang",
            AuditCategory::Warning,
            "HTML lang attribute",
            AuditStatus::Passed,
            format!("lang=\"{}\"", lang),
        ),
        None => AuditItem::new(
            "html-lang",
            AuditCategory::Warning,
            "HTML lang attribute",
            AuditStatus::Failed,
            "The <html> element has no lang attribute.",
        )
        .recommend("Declare the page language, e.g. <html lang=\"en\">")
        .with_impact(Impact::Medium),
    }
}

fn dom_size_item(snapshot: &DocumentSnapshot) -> AuditItem {
    let elements = snapshot.count("*");
    if elements <= MAX_DOM_ELEMENTS {
        AuditItem::new(
            "dom-size",
            AuditCategory::Info,
            "DOM size",
            AuditStatus::Passed,
            format!("{} elements.", elements),
        )
    } else {
        AuditItem::new(
            "dom-size",
            AuditCategory::Info,
            "DOM size",
            AuditStatus::Warning,
            format!(
                "{} elements, above the recommended {}.",
                elements, MAX_DOM_ELEMENTS
            ),
        )
        .recommend("Paginate or lazily render long lists to shrink the DOM")
        .with_impact(Impact::Low)
    }
}

/// `render-blocking-scripts`, `html-lang` and `dom-size`.
pub fn check_performance(snapshot: &DocumentSnapshot) -> Vec<AuditItem> {
    vec![
        render_blocking_item(snapshot),
        html_lang_item(snapshot),
        dom_size_item(snapshot),
    ]
}
