//! WebSite fallback. Every page can be described this way.

use scraper::ElementRef;
use serde_json::{json, Value};

use crate::document::DocumentSnapshot;

use super::fields::{insert_opt, origin_url, schema_object, site_name};

/// `SearchAction` for a site search form, when the page has one.
fn search_action(snapshot: &DocumentSnapshot) -> Option<Value> {
    let form = snapshot
        .select_first("form[role='search']")
        .or_else(|| {
            snapshot
                .select_all("form")
                .into_iter()
                .find(|form| {
                    form.descendants()
                        .filter_map(ElementRef::wrap)
                        .any(|el| {
                            el.value().name() == "input" && el.value().attr("type") == Some("search")
                        })
                })
        })?;
    let action = snapshot.absolute_url(form.value().attr("action").unwrap_or("/search"));
    let field = form
        .descendants()
        .filter_map(ElementRef::wrap)
        .filter(|el| el.value().name() == "input")
        .find_map(|el| el.value().attr("name").map(str::to_string))
        .unwrap_or_else(|| "q".to_string());

    let separator = if action.contains('?') { '&' } else { '?' };
    Some(json!({
        "@type": "SearchAction",
        "target": format!("{}{}{}={{search_term_string}}", action, separator, field),
        "query-input": "required name=search_term_string",
    }))
}

pub(super) fn generate(snapshot: &DocumentSnapshot) -> Option<Value> {
    let mut schema = schema_object("WebSite");

    insert_opt(
        &mut schema,
        "name",
        snapshot
            .meta_property("og:site_name")
            .or_else(|| snapshot.title())
            .or_else(|| site_name(snapshot)),
    );
    insert_opt(
        &mut schema,
        "description",
        snapshot
            .meta_description()
            .or_else(|| snapshot.meta_property("og:description")),
    );
    let url = snapshot
        .canonical()
        .map(|href| snapshot.absolute_url(&href))
        .unwrap_or_else(|| origin_url(snapshot));
    schema.insert("url".into(), url.into());
    insert_opt(
        &mut schema,
        "image",
        snapshot
            .meta_property("og:image")
            .map(|src| snapshot.absolute_url(&src)),
    );
    insert_opt(&mut schema, "potentialAction", search_action(snapshot));

    Some(Value::Object(schema))
}
