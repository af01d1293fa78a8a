//! Image checks: alt text, lazy loading, explicit dimensions.

use scraper::ElementRef;

use crate::config::{IMAGE_DIMENSIONS_MIN_RATIO, LAZY_LOADING_MIN_RATIO};
use crate::document::DocumentSnapshot;

use super::types::{AuditCategory, AuditItem, AuditStatus, Impact};

fn ratio(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64
    }
}

fn not_applicable(id: &str, category: AuditCategory, title: &str) -> AuditItem {
    AuditItem::new(id, category, title, AuditStatus::NotApplicable, "The page has no images.")
}

/// `alt=""` marks a decorative image and counts as present.
fn alt_text_item(images: &[ElementRef<'_>]) -> AuditItem {
    const ID: &str = "img-alt-text";
    const TITLE: &str = "Image alt text";
    if images.is_empty() {
        return not_applicable(ID, AuditCategory::Critical, TITLE);
    }

    let missing = images
        .iter()
        .filter(|img| img.value().attr("alt").is_none())
        .count();
    let description = format!("{} of {} images lack an alt attribute.", missing, images.len());
    let status = if missing == 0 {
        AuditStatus::Passed
    } else if missing == images.len() {
        AuditStatus::Failed
    } else {
        AuditStatus::Warning
    };

    let item = AuditItem::new(ID, AuditCategory::Critical, TITLE, status, description);
    match status {
        AuditStatus::Failed => item
            .recommend("Describe every meaningful image with an alt attribute")
            .with_impact(Impact::High),
        AuditStatus::Warning => item
            .recommend("Add alt text to the remaining images (alt=\"\" for decorative ones)")
            .with_impact(Impact::Medium),
        _ => item,
    }
}

fn lazy_loading_item(images: &[ElementRef<'_>]) -> AuditItem {
    const ID: &str = "img-lazy-loading";
    const TITLE: &str = "Lazy-loaded images";
    if images.is_empty() {
        return not_applicable(ID, AuditCategory::Info, TITLE);
    }

    let lazy = images
        .iter()
        .filter(|img| {
            img.value()
                .attr("loading")
                .is_some_and(|v| v.eq_ignore_ascii_case("lazy"))
        })
        .count();
    let description = format!("{} of {} images use loading=\"lazy\".", lazy, images.len());
    if ratio(lazy, images.len()) >= LAZY_LOADING_MIN_RATIO {
        AuditItem::new(ID, AuditCategory::Info, TITLE, AuditStatus::Passed, description)
    } else {
        AuditItem::new(ID, AuditCategory::Info, TITLE, AuditStatus::Warning, description)
            .recommend("Add loading=\"lazy\" to images below the fold")
            .with_impact(Impact::Low)
    }
}

fn dimensions_item(images: &[ElementRef<'_>]) -> AuditItem {
    const ID: &str = "img-dimensions";
    const TITLE: &str = "Image dimensions";
    if images.is_empty() {
        return not_applicable(ID, AuditCategory::Info, TITLE);
    }

    let sized = images
        .iter()
        .filter(|img| img.value().attr("width").is_some() && img.value().attr("height").is_some())
        .count();
    let description = format!(
        "{} of {} images declare width and height.",
        sized,
        images.len()
    );
    if ratio(sized, images.len()) >= IMAGE_DIMENSIONS_MIN_RATIO {
        AuditItem::new(ID, AuditCategory::Info, TITLE, AuditStatus::Passed, description)
    } else {
        AuditItem::new(ID, AuditCategory::Info, TITLE, AuditStatus::Warning, description)
            .recommend("Set width and height on images to avoid layout shift")
            .with_impact(Impact::Low)
    }
}

/// `img-alt-text`, `img-lazy-loading` and `img-dimensions`.
pub fn check_images(snapshot: &DocumentSnapshot) -> Vec<AuditItem> {
    let images = snapshot.select_all("img");
    vec![
        alt_text_item(&images),
        lazy_loading_item(&images),
        dimensions_item(&images),
    ]
}
