//! Article, news and blog pages.

use serde_json::{json, Value};

use crate::config::{DEFAULT_ARTICLE_AUTHOR, MAX_HEADLINE_LENGTH};
use crate::document::DocumentSnapshot;
use crate::utils::contains_any;

use super::fields::{date_attr, image_url, insert_opt, named, schema_object, site_name};

/// NewsArticle, BlogPosting or plain Article, from the path and body wording.
fn article_type(snapshot: &DocumentSnapshot) -> &'static str {
    let path = snapshot.path();
    let body = snapshot.body_text();
    if path.contains("news") || contains_any(&body, &["breaking news"]) {
        "NewsArticle"
    } else if path.contains("blog") || contains_any(&body, &["blog post"]) {
        "BlogPosting"
    } else {
        "Article"
    }
}

fn truncate_headline(headline: String) -> String {
    if headline.chars().count() <= MAX_HEADLINE_LENGTH {
        headline
    } else {
        headline.chars().take(MAX_HEADLINE_LENGTH).collect::<String>().trim_end().to_string()
    }
}

fn author(snapshot: &DocumentSnapshot) -> Value {
    snapshot
        .first_text(&["[itemprop='author']", ".author"])
        .or_else(|| snapshot.meta("author"))
        .or_else(|| snapshot.first_text(&["[rel='author']"]))
        .map(|name| named("Person", &name))
        .unwrap_or_else(|| named("Organization", DEFAULT_ARTICLE_AUTHOR))
}

pub(super) fn generate(snapshot: &DocumentSnapshot) -> Option<Value> {
    let mut schema = schema_object(article_type(snapshot));

    let headline = snapshot
        .first_text(&["h1", "[itemprop='headline']", ".article-title"])
        .or_else(|| snapshot.meta_property("og:title"))
        .or_else(|| snapshot.title())
        .map(truncate_headline);
    insert_opt(&mut schema, "headline", headline);

    let description = snapshot
        .meta_description()
        .or_else(|| snapshot.meta_property("og:description"))
        .or_else(|| snapshot.first_text(&["article p", ".post-content p", "p"]));
    insert_opt(&mut schema, "description", description);

    insert_opt(
        &mut schema,
        "image",
        image_url(snapshot, &["[itemprop='image']", "article img", "img"]),
    );
    schema.insert("author".into(), author(snapshot));

    let last_modified = snapshot.last_modified().map(|t| t.to_rfc3339());
    let published = snapshot
        .meta_property("article:published_time")
        .or_else(|| date_attr(snapshot, &["[itemprop='datePublished']", "time[datetime]"]))
        .or_else(|| last_modified.clone())
        .unwrap_or_else(|| snapshot.now().to_rfc3339());
    let modified = snapshot
        .meta_property("article:modified_time")
        .or_else(|| date_attr(snapshot, &["[itemprop='dateModified']"]))
        .or(last_modified)
        .unwrap_or_else(|| published.clone());
    schema.insert("datePublished".into(), Value::String(published));
    schema.insert("dateModified".into(), Value::String(modified));

    insert_opt(
        &mut schema,
        "publisher",
        site_name(snapshot).map(|name| named("Organization", &name)),
    );
    schema.insert(
        "mainEntityOfPage".into(),
        json!({ "@type": "WebPage", "@id": snapshot.url().as_str() }),
    );

    Some(Value::Object(schema))
}
