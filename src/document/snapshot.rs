//! The `DocumentSnapshot` value object.

use chrono::{DateTime, Utc};
use scraper::{ElementRef, Html};
use serde_json::Value;
use std::collections::HashMap;
use url::Url;

use crate::error_handling::SnapshotError;
use crate::parse;
use crate::utils::{element_text, non_empty, normalize_whitespace, parse_selector_with_fallback};

/// A `<script type="application/ld+json">` added to the snapshot after parsing.
#[derive(Debug, Clone, PartialEq)]
pub struct InjectedScript {
    /// Handle used to remove the script again
    pub id: usize,
    /// Value of the `data-source` attribute
    pub source: String,
    /// Serialized JSON-LD body
    pub content: String,
}

/// A parsed page plus everything the audit and generator need to know about it.
///
/// Constructed once per invocation and passed explicitly to every check. The
/// parsed tree is immutable; schema injection appends to a separate list of
/// head scripts that every JSON-LD reader sees alongside the original ones.
#[derive(Debug, Clone)]
pub struct DocumentSnapshot {
    html: Html,
    url: Url,
    now: DateTime<Utc>,
    last_modified: Option<DateTime<Utc>>,
    injected: Vec<InjectedScript>,
    next_script_id: usize,
}

impl DocumentSnapshot {
    /// Parses `html` as the document served at `url`.
    pub fn new(html: &str, url: Url) -> Self {
        Self {
            html: Html::parse_document(html),
            url,
            now: Utc::now(),
            last_modified: None,
            injected: Vec::new(),
            next_script_id: 0,
        }
    }

    /// Parses `html` with a page URL given as a string.
    ///
    /// # Errors
    ///
    /// Returns `SnapshotError::InvalidUrl` when `url` is not an absolute URL.
    pub fn parse(html: &str, url: &str) -> Result<Self, SnapshotError> {
        let url = Url::parse(url).map_err(|_| SnapshotError::InvalidUrl(url.to_string()))?;
        Ok(Self::new(html, url))
    }

    /// Pins the clock used for date fallbacks.
    pub fn with_now(mut self, now: DateTime<Utc>) -> Self {
        self.now = now;
        self
    }

    /// Records when the document was last modified.
    pub fn with_last_modified(mut self, last_modified: Option<DateTime<Utc>>) -> Self {
        self.last_modified = last_modified;
        self
    }

    /// The parsed tree.
    pub fn html(&self) -> &Html {
        &self.html
    }

    /// The page URL.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Lowercased URL path, used for page-type hints.
    pub fn path(&self) -> String {
        self.url.path().to_lowercase()
    }

    /// The instant treated as "now" by date fallbacks.
    pub fn now(&self) -> DateTime<Utc> {
        self.now
    }

    /// Last modification time of the document, when known.
    pub fn last_modified(&self) -> Option<DateTime<Utc>> {
        self.last_modified
    }

    /// All elements matching `selector`, in document order.
    pub fn select_all(&self, selector: &str) -> Vec<ElementRef<'_>> {
        let parsed = parse_selector_with_fallback(selector, "document query");
        self.html.select(&parsed).collect()
    }

    /// First element matching `selector`.
    pub fn select_first(&self, selector: &str) -> Option<ElementRef<'_>> {
        let parsed = parse_selector_with_fallback(selector, "document query");
        self.html.select(&parsed).next()
    }

    /// Whether any element matches `selector`.
    pub fn exists(&self, selector: &str) -> bool {
        self.select_first(selector).is_some()
    }

    /// Number of elements matching `selector`.
    pub fn count(&self, selector: &str) -> usize {
        let parsed = parse_selector_with_fallback(selector, "document query");
        self.html.select(&parsed).count()
    }

    /// Text of the first element, across `selectors` tried in order, whose text is non-empty.
    pub fn first_text(&self, selectors: &[&str]) -> Option<String> {
        selectors.iter().find_map(|selector| {
            self.select_all(selector)
                .iter()
                .find_map(|el| non_empty(element_text(el)))
        })
    }

    /// First non-empty `attr` value, across `selectors` tried in order.
    pub fn first_attr(&self, selectors: &[&str], attr: &str) -> Option<String> {
        selectors.iter().find_map(|selector| {
            self.select_all(selector)
                .iter()
                .find_map(|el| el.value().attr(attr).and_then(non_empty))
        })
    }

    /// The `<title>` text.
    pub fn title(&self) -> Option<String> {
        parse::extract_title(&self.html)
    }

    /// `<meta name="description">` content.
    pub fn meta_description(&self) -> Option<String> {
        parse::extract_meta_description(&self.html)
    }

    /// `<meta name="{name}">` content.
    pub fn meta(&self, name: &str) -> Option<String> {
        parse::extract_meta_content(&self.html, name)
    }

    /// `<meta property="{property}">` content, e.g. `og:image`.
    pub fn meta_property(&self, property: &str) -> Option<String> {
        self.first_attr(&[&format!("meta[property='{}']", property)], "content")
    }

    /// `<link rel="canonical">` href.
    pub fn canonical(&self) -> Option<String> {
        parse::extract_canonical(&self.html)
    }

    /// `lang` attribute of `<html>`.
    pub fn lang(&self) -> Option<String> {
        parse::extract_lang(&self.html)
    }

    /// All `og:*` properties.
    pub fn open_graph(&self) -> HashMap<String, String> {
        parse::extract_open_graph(&self.html)
    }

    /// Microdata types declared through `itemtype`.
    pub fn microdata_types(&self) -> Vec<String> {
        parse::extract_microdata_types(&self.html)
    }

    /// Visible body text, whitespace-normalized. Script, style and noscript
    /// contents are excluded.
    pub fn body_text(&self) -> String {
        let Some(body) = self.select_first("body") else {
            return String::new();
        };
        let mut text = String::new();
        for node in body.descendants() {
            let Some(fragment) = node.value().as_text() else {
                continue;
            };
            let hidden = node.ancestors().any(|a| {
                a.value()
                    .as_element()
                    .is_some_and(|e| matches!(e.name(), "script" | "style" | "noscript"))
            });
            if !hidden {
                text.push_str(fragment);
                text.push(' ');
            }
        }
        normalize_whitespace(&text)
    }

    /// Resolves `href` against the page URL; unresolvable values are returned as-is.
    pub fn absolute_url(&self, href: &str) -> String {
        self.url
            .join(href)
            .map(|u| u.to_string())
            .unwrap_or_else(|_| href.to_string())
    }

    /// Raw bodies of every JSON-LD script: those parsed from the document,
    /// followed by injected ones in injection order.
    pub fn json_ld_scripts(&self) -> Vec<String> {
        let mut scripts = parse::extract_json_ld_scripts(&self.html);
        scripts.extend(self.injected.iter().map(|s| s.content.clone()));
        scripts
    }

    /// Appends a JSON-LD script tagged with `data-source="{source}"`.
    ///
    /// Returns the handle for `remove_injected`.
    pub fn inject_schema(&mut self, schema: &Value, source: &str) -> usize {
        let id = self.next_script_id;
        self.next_script_id += 1;
        self.injected.push(InjectedScript {
            id,
            source: source.to_string(),
            content: schema.to_string(),
        });
        log::debug!("Injected JSON-LD script #{} (data-source={})", id, source);
        id
    }

    /// Removes a previously injected script. Returns whether it was present.
    pub fn remove_injected(&mut self, id: usize) -> bool {
        let before = self.injected.len();
        self.injected.retain(|s| s.id != id);
        before != self.injected.len()
    }

    /// Scripts injected so far.
    pub fn injected_scripts(&self) -> &[InjectedScript] {
        &self.injected
    }

    /// Renders injected scripts as `<script>` tags ready for a document head.
    pub fn render_injected_scripts(&self) -> String {
        self.injected
            .iter()
            .map(|s| {
                format!(
                    "<script type=\"application/ld+json\" data-source=\"{}\">{}</script>",
                    s.source,
                    // A literal "</" would close the script element early
                    s.content.replace("</", "<\\/")
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
