//! Rich-results inspection helpers.
//!
//! Read-only utilities around the schemas present on a page: which `@type`
//! values exist, where each type is documented, and deep links into external
//! testing tools.

use serde::Serialize;
use serde_json::Value;
use url::form_urlencoded::byte_serialize;

use crate::config::{
    PAGESPEED_INSIGHTS_URL, RICH_RESULTS_TEST_URL, SCHEMA_VALIDATOR_URL,
    STRUCTURED_DATA_DOCS_BASE,
};
use crate::document::DocumentSnapshot;
use crate::parse::schema_types_of;

/// Every schema type declared on the page, in order of first appearance.
///
/// Includes `@type` values from JSON-LD (strings, arrays, top-level arrays and
/// `@graph` members) and microdata `itemtype` declarations. Unparseable
/// JSON-LD scripts are skipped.
pub fn extract_schema_types(snapshot: &DocumentSnapshot) -> Vec<String> {
    let mut types: Vec<String> = Vec::new();
    let mut push = |t: String| {
        if !types.contains(&t) {
            types.push(t);
        }
    };

    for raw in snapshot.json_ld_scripts() {
        if let Ok(value) = serde_json::from_str::<Value>(&raw) {
            schema_types_of(&value).into_iter().for_each(&mut push);
        }
    }
    snapshot
        .microdata_types()
        .into_iter()
        .for_each(&mut push);

    types
}

/// Whether any of `wanted` is among the page's schema types.
pub fn has_schema_type(snapshot: &DocumentSnapshot, wanted: &[&str]) -> bool {
    extract_schema_types(snapshot)
        .iter()
        .any(|t| wanted.contains(&t.as_str()))
}

/// Documentation page for a schema type.
///
/// Types with a Google rich-result feature link to its Search Central page;
/// everything else links to the schema.org definition.
pub fn schema_documentation_url(schema_type: &str) -> String {
    let slug = match schema_type {
        "Article" | "NewsArticle" | "BlogPosting" => "article",
        "BreadcrumbList" => "breadcrumb",
        "Event" => "event",
        "FAQPage" => "faqpage",
        "JobPosting" => "job-posting",
        "LocalBusiness" => "local-business",
        "Organization" => "organization",
        "Product" | "Offer" | "AggregateOffer" => "product",
        "Recipe" => "recipe",
        "Review" | "AggregateRating" => "review-snippet",
        "VideoObject" => "video",
        "WebSite" => "sitelinks-searchbox",
        _ => return format!("https://schema.org/{}", schema_type),
    };
    format!("{}/{}", STRUCTURED_DATA_DOCS_BASE, slug)
}

fn encode(url: &str) -> String {
    byte_serialize(url.as_bytes()).collect()
}

/// Google Rich Results Test for `url`.
pub fn rich_results_test_url(url: &str) -> String {
    format!("{}?url={}", RICH_RESULTS_TEST_URL, encode(url))
}

/// Schema.org validator for `url`.
pub fn schema_validator_url(url: &str) -> String {
    format!("{}#url={}", SCHEMA_VALIDATOR_URL, encode(url))
}

/// PageSpeed Insights report for `url`.
pub fn pagespeed_insights_url(url: &str) -> String {
    format!("{}?url={}", PAGESPEED_INSIGHTS_URL, encode(url))
}

/// Every external testing tool link for one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolLinks {
    /// Page the links point at
    pub url: String,
    /// Google Rich Results Test
    pub rich_results_test: String,
    /// Schema.org validator
    pub schema_validator: String,
    /// PageSpeed Insights
    pub pagespeed_insights: String,
}

impl ToolLinks {
    /// Builds the links for `url`.
    pub fn for_url(url: &str) -> Self {
        Self {
            url: url.to_string(),
            rich_results_test: rich_results_test_url(url),
            schema_validator: schema_validator_url(url),
            pagespeed_insights: pagespeed_insights_url(url),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn snapshot(html: &str) -> DocumentSnapshot {
        DocumentSnapshot::parse(html, "https://deals.example/").unwrap()
    }

    #[test]
    fn test_extract_schema_types_dedupes_in_order() {
        let html = r#"<html><head>
            <script type="application/ld+json">{"@type": "WebSite"}</script>
            <script type="application/ld+json">not json</script>
            <script type="application/ld+json">[{"@type": "Product"}, {"@type": "WebSite"}]</script>
        </head><body><div itemscope itemtype="https://schema.org/Offer"></div></body></html>"#;
        assert_eq!(
            extract_schema_types(&snapshot(html)),
            vec!["WebSite", "Product", "Offer"]
        );
    }

    #[test]
    fn test_extract_schema_types_includes_injected() {
        let mut snap = snapshot("<html></html>");
        assert!(extract_schema_types(&snap).is_empty());
        snap.inject_schema(&json!({"@type": "Recipe"}), "auto-generated");
        assert!(has_schema_type(&snap, &["Recipe"]));
        assert!(!has_schema_type(&snap, &["Product"]));
    }

    #[test]
    fn test_schema_documentation_url() {
        assert_eq!(
            schema_documentation_url("FAQPage"),
            "https://developers.google.com/search/docs/appearance/structured-data/faqpage"
        );
        assert_eq!(
            schema_documentation_url("BlogPosting"),
            "https://developers.google.com/search/docs/appearance/structured-data/article"
        );
        assert_eq!(
            schema_documentation_url("Coupon"),
            "https://schema.org/Coupon"
        );
    }

    #[test]
    fn test_tool_urls_encode_target() {
        let target = "https://deals.example/store?id=1&x=y";
        assert_eq!(
            rich_results_test_url(target),
            "https://search.google.com/test/rich-results?url=https%3A%2F%2Fdeals.example%2Fstore%3Fid%3D1%26x%3Dy"
        );
        assert_eq!(
            schema_validator_url(target),
            "https://validator.schema.org/#url=https%3A%2F%2Fdeals.example%2Fstore%3Fid%3D1%26x%3Dy"
        );
        assert!(pagespeed_insights_url(target).starts_with("https://pagespeed.web.dev/analysis?url=https%3A"));
    }

    #[test]
    fn test_tool_links_for_url() {
        let links = ToolLinks::for_url("https://deals.example/");
        assert_eq!(links.url, "https://deals.example/");
        assert_eq!(links.rich_results_test, rich_results_test_url("https://deals.example/"));
        let value = serde_json::to_value(&links).unwrap();
        assert!(value["pagespeed_insights"].as_str().unwrap().contains("deals.example"));
    }
}
