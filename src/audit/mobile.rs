//! Mobile-friendliness checks.
//!
//! No layout engine is involved: tap targets and font sizes are judged from
//! sizes declared in markup (`width`/`height` attributes and inline styles).

use std::sync::LazyLock;

use regex::Regex;
use scraper::ElementRef;

use crate::config::{MIN_FONT_SIZE_PX, MIN_TAP_TARGET_PX};
use crate::document::DocumentSnapshot;
use crate::utils::compile_regex_unsafe;

use super::types::{AuditCategory, AuditItem, AuditStatus, Impact};

static STYLE_WIDTH_RE: LazyLock<Regex> = LazyLock::new(|| {
    compile_regex_unsafe(r"(?i)(?:^|[;\s])width\s*:\s*(\d+(?:\.\d+)?)px", "STYLE_WIDTH_RE")
});
static STYLE_HEIGHT_RE: LazyLock<Regex> = LazyLock::new(|| {
    compile_regex_unsafe(r"(?i)(?:^|[;\s])height\s*:\s*(\d+(?:\.\d+)?)px", "STYLE_HEIGHT_RE")
});
static FONT_SIZE_RE: LazyLock<Regex> = LazyLock::new(|| {
    compile_regex_unsafe(r"(?i)font-size\s*:\s*(\d+(?:\.\d+)?)px", "FONT_SIZE_RE")
});

const TAP_TARGET_SELECTOR: &str =
    "a[href], button, input:not([type='hidden']), select, textarea";

/// `key=value` pairs of a viewport `content`, lowercased.
fn viewport_directives(content: &str) -> Vec<(String, String)> {
    content
        .split([',', ';'])
        .filter_map(|pair| {
            let (key, value) = pair.split_once('=')?;
            Some((key.trim().to_lowercase(), value.trim().to_lowercase()))
        })
        .collect()
}

fn viewport_item(snapshot: &DocumentSnapshot) -> AuditItem {
    const ID: &str = "viewport-meta";
    const TITLE: &str = "Viewport meta tag";

    let Some(viewport) = snapshot.meta("viewport") else {
        return AuditItem::new(
            ID,
            AuditCategory::Critical,
            TITLE,
            AuditStatus::Failed,
            "The page has no viewport meta tag.",
        )
        .recommend("Add <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">")
        .with_impact(Impact::High);
    };

    let directives = viewport_directives(&viewport);
    let directive = |key: &str| {
        directives
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    };

    if directive("width") != Some("device-width") {
        return AuditItem::new(
            ID,
            AuditCategory::Critical,
            TITLE,
            AuditStatus::Warning,
            format!("Viewport \"{}\" does not track the device width.", viewport),
        )
        .recommend("Use width=device-width in the viewport meta tag")
        .with_impact(Impact::High);
    }

    let zoom_disabled = matches!(directive("user-scalable"), Some("no" | "0"))
        || directive("maximum-scale")
            .and_then(|v| v.parse::<f64>().ok())
            .is_some_and(|scale| scale <= 1.0);
    if zoom_disabled {
        return AuditItem::new(
            ID,
            AuditCategory::Critical,
            TITLE,
            AuditStatus::Warning,
            format!("Viewport \"{}\" disables zooming.", viewport),
        )
        .recommend("Allow pinch-zoom: drop user-scalable=no and maximum-scale=1")
        .with_impact(Impact::Medium);
    }

    AuditItem::new(
        ID,
        AuditCategory::Critical,
        TITLE,
        AuditStatus::Passed,
        format!("Viewport: {}", viewport),
    )
}

fn style_px(element: &ElementRef<'_>, re: &Regex) -> Option<f64> {
    let style = element.value().attr("style")?;
    re.captures(style)?.get(1)?.as_str().parse().ok()
}

fn attr_px(element: &ElementRef<'_>, attr: &str) -> Option<f64> {
    element
        .value()
        .attr(attr)?
        .trim()
        .trim_end_matches("px")
        .parse()
        .ok()
}

/// Whether any declared dimension of `element` is below the tap target minimum.
fn is_undersized(element: &ElementRef<'_>) -> bool {
    let min = f64::from(MIN_TAP_TARGET_PX);
    let width = style_px(element, &STYLE_WIDTH_RE).or_else(|| attr_px(element, "width"));
    let height = style_px(element, &STYLE_HEIGHT_RE).or_else(|| attr_px(element, "height"));
    width.is_some_and(|w| w < min) || height.is_some_and(|h| h < min)
}

fn tap_targets_item(snapshot: &DocumentSnapshot) -> AuditItem {
    const ID: &str = "tap-targets";
    const TITLE: &str = "Tap target size";

    let targets = snapshot.select_all(TAP_TARGET_SELECTOR);
    if targets.is_empty() {
        return AuditItem::new(
            ID,
            AuditCategory::Info,
            TITLE,
            AuditStatus::NotApplicable,
            "The page has no interactive elements.",
        );
    }

    let small = targets.iter().filter(|el| is_undersized(el)).count();
    if small == 0 {
        AuditItem::new(
            ID,
            AuditCategory::Info,
            TITLE,
            AuditStatus::Passed,
            format!("No undersized tap targets among {} interactive elements.", targets.len()),
        )
    } else {
        AuditItem::new(
            ID,
            AuditCategory::Info,
            TITLE,
            AuditStatus::Warning,
            format!(
                "{} of {} interactive elements are declared smaller than {}x{} px.",
                small,
                targets.len(),
                MIN_TAP_TARGET_PX,
                MIN_TAP_TARGET_PX
            ),
        )
        .recommend(format!(
            "Make buttons and links at least {}x{} px",
            MIN_TAP_TARGET_PX, MIN_TAP_TARGET_PX
        ))
        .with_impact(Impact::Low)
    }
}

fn font_size_item(snapshot: &DocumentSnapshot) -> AuditItem {
    let sizes: Vec<f64> = snapshot
        .select_all("[style]")
        .iter()
        .filter_map(|el| style_px(el, &FONT_SIZE_RE))
        .collect();
    let tiny = sizes.iter().filter(|size| **size < MIN_FONT_SIZE_PX).count();

    if tiny == 0 {
        AuditItem::new(
            "font-size",
            AuditCategory::Info,
            "Legible font sizes",
            AuditStatus::Passed,
            format!("No inline font sizes below {} px.", MIN_FONT_SIZE_PX),
        )
    } else {
        AuditItem::new(
            "font-size",
            AuditCategory::Info,
            "Legible font sizes",
            AuditStatus::Warning,
            format!(
                "{} element(s) set a font size below {} px.",
                tiny, MIN_FONT_SIZE_PX
            ),
        )
        .recommend(format!("Use at least {} px for body text", MIN_FONT_SIZE_PX))
        .with_impact(Impact::Low)
    }
}

/// `viewport-meta`, `tap-targets` and `font-size`.
pub fn check_mobile(snapshot: &DocumentSnapshot) -> Vec<AuditItem> {
    vec![
        viewport_item(snapshot),
        tap_targets_item(snapshot),
        font_size_item(snapshot),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(html: &str) -> Vec<AuditItem> {
        let snap = DocumentSnapshot::parse(html, "https://deals.example/").unwrap();
        check_mobile(&snap)
    }

    #[test]
    fn test_viewport_states() {
        assert_eq!(items("<p>x</p>")[0].status, AuditStatus::Failed);
        assert_eq!(
            items(r#"<meta name="viewport" content="width=1024">"#)[0].status,
            AuditStatus::Warning
        );
        assert_eq!(
            items(r#"<meta name="viewport" content="width=device-width, user-scalable=no">"#)[0]
                .status,
            AuditStatus::Warning
        );
        assert_eq!(
            items(r#"<meta name="viewport" content="width=device-width, maximum-scale=1">"#)[0]
                .status,
            AuditStatus::Warning
        );
        assert_eq!(
            items(r#"<meta name="viewport" content="width=device-width, initial-scale=1">"#)[0]
                .status,
            AuditStatus::Passed
        );
    }

    #[test]
    fn test_viewport_directives() {
        assert_eq!(
            viewport_directives("Width=device-width; initial-scale = 1, bogus"),
            vec![
                ("width".to_string(), "device-width".to_string()),
                ("initial-scale".to_string(), "1".to_string()),
            ]
        );
    }

    #[test]
    fn test_tap_targets() {
        assert_eq!(items("<p>x</p>")[1].status, AuditStatus::NotApplicable);
        assert_eq!(
            items(r#"<a href="/deals">Deals</a><button>Go</button>"#)[1].status,
            AuditStatus::Passed
        );

        let html = r#"
            <a href="/x" style="display:block; width: 20px; height: 20px">x</a>
            <input type="image" src="go.png" width="24" height="48">
            <button style="min-width: 10px; width: 60px; height: 48px">OK</button>
            <input type="hidden" name="token" width="1">"#;
        let all = items(html);
        assert_eq!(all[1].status, AuditStatus::Warning);
        assert_eq!(
            all[1].description,
            "2 of 3 interactive elements are declared smaller than 48x48 px."
        );
    }

    #[test]
    fn test_font_size() {
        assert_eq!(
            items(r#"<p style="font-size: 14px">ok</p>"#)[2].status,
            AuditStatus::Passed
        );
        let all = items(r#"<p style="font-size:9px">fine print</p><p style="font-size: 11.5px">x</p>"#);
        assert_eq!(all[2].status, AuditStatus::Warning);
        assert_eq!(all[2].description, "2 element(s) set a font size below 12 px.");
    }
}
