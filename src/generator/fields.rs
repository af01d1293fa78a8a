//! Field builders shared by the synthesizers.

use chrono::NaiveDate;
use serde_json::{json, Map, Value};

use crate::config::SCHEMA_CONTEXT;
use crate::document::DocumentSnapshot;

use super::scanners::extract_dates;

/// Starts a JSON-LD object with `@context` and `@type`.
pub(super) fn schema_object(schema_type: &str) -> Map<String, Value> {
    let mut map = Map::new();
    map.insert("@context".into(), Value::String(SCHEMA_CONTEXT.into()));
    map.insert("@type".into(), Value::String(schema_type.into()));
    map
}

/// Inserts `value` under `key` when present.
pub(super) fn insert_opt<V: Into<Value>>(map: &mut Map<String, Value>, key: &str, value: Option<V>) {
    if let Some(value) = value {
        map.insert(key.to_string(), value.into());
    }
}

/// Typed node (`{"@type": T, "name": N}`), e.g. a Person or Organization.
pub(super) fn named(schema_type: &str, name: &str) -> Value {
    json!({ "@type": schema_type, "name": name })
}

/// First image URL among `selectors` (`src`, then `content`), falling back to
/// `og:image`, made absolute against the page URL.
pub(super) fn image_url(snapshot: &DocumentSnapshot, selectors: &[&str]) -> Option<String> {
    snapshot
        .first_attr(selectors, "src")
        .or_else(|| snapshot.first_attr(selectors, "content"))
        .or_else(|| snapshot.meta_property("og:image"))
        .map(|src| snapshot.absolute_url(&src))
}

/// Machine-readable value of a date-like element: `content`, then `datetime`.
pub(super) fn date_attr(snapshot: &DocumentSnapshot, selectors: &[&str]) -> Option<String> {
    snapshot
        .first_attr(selectors, "content")
        .or_else(|| snapshot.first_attr(selectors, "datetime"))
}

/// Calendar date of an ISO-ish string (`2026-03-05`, `2026-03-05T10:00:00Z`),
/// falling back to a free-text scan.
pub(super) fn parse_date(text: &str) -> Option<NaiveDate> {
    text.get(..10)
        .and_then(|prefix| NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok())
        .or_else(|| extract_dates(text).into_iter().next())
}

/// Site-level name: `og:site_name`, else the host.
pub(super) fn site_name(snapshot: &DocumentSnapshot) -> Option<String> {
    snapshot
        .meta_property("og:site_name")
        .or_else(|| snapshot.url().host_str().map(str::to_string))
}

/// `scheme://host[:port]/` of the page.
pub(super) fn origin_url(snapshot: &DocumentSnapshot) -> String {
    let mut origin = snapshot.url().clone();
    origin.set_path("/");
    origin.set_query(None);
    origin.set_fragment(None);
    origin.to_string()
}
