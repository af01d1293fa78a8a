//! Page archetype detection.
//!
//! Detection walks `DETECTORS` in order. A detector fires when the URL path
//! contains one of its hints *and* the DOM carries one of its signatures.

use log::{debug, info};
use serde_json::Value;
use strum_macros::EnumIter as EnumIterMacro;

use crate::config::FAQ_ACCORDION_THRESHOLD;
use crate::document::DocumentSnapshot;
use crate::rich_results::has_schema_type;

use super::{article, event, faq, job, product, recipe, website};

/// Page archetypes the generator knows how to describe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum PageArchetype {
    /// A single product with an offer
    Product,
    /// News, blog or editorial content
    Article,
    /// Questions and answers
    Faq,
    /// Something happening at a time and place, or online
    Event,
    /// Cooking instructions
    Recipe,
    /// A job opening
    JobPosting,
    /// Fallback for any page
    WebSite,
}

impl PageArchetype {
    /// Schema.org type name generated for this archetype.
    pub fn as_str(&self) -> &'static str {
        match self {
            PageArchetype::Product => "Product",
            PageArchetype::Article => "Article",
            PageArchetype::Faq => "FAQPage",
            PageArchetype::Event => "Event",
            PageArchetype::Recipe => "Recipe",
            PageArchetype::JobPosting => "JobPosting",
            PageArchetype::WebSite => "WebSite",
        }
    }

    /// Existing types that count as "already described" for this archetype.
    pub fn existing_types(&self) -> &'static [&'static str] {
        match self {
            PageArchetype::Article => &["Article", "NewsArticle", "BlogPosting"],
            PageArchetype::Product => &["Product"],
            PageArchetype::Faq => &["FAQPage"],
            PageArchetype::Event => &["Event"],
            PageArchetype::Recipe => &["Recipe"],
            PageArchetype::JobPosting => &["JobPosting"],
            PageArchetype::WebSite => &["WebSite"],
        }
    }
}

struct Detector {
    archetype: PageArchetype,
    path_hints: &'static [&'static str],
    signatures: &'static [&'static str],
    extra_signature: Option<fn(&DocumentSnapshot) -> bool>,
    generate: fn(&DocumentSnapshot) -> Option<Value>,
}

impl Detector {
    fn matches(&self, snapshot: &DocumentSnapshot) -> bool {
        let path = snapshot.path();
        if !self.path_hints.iter().any(|hint| path.contains(hint)) {
            return false;
        }
        self.signatures.iter().any(|sel| snapshot.exists(sel))
            || self.extra_signature.is_some_and(|f| f(snapshot))
    }
}

fn has_accordion(snapshot: &DocumentSnapshot) -> bool {
    snapshot.count(".faq-item, .accordion-item, details") >= FAQ_ACCORDION_THRESHOLD
}

/// Detectors in priority order. WebSite is the fallback and is not listed.
static DETECTORS: &[Detector] = &[
    Detector {
        archetype: PageArchetype::Product,
        path_hints: &["product", "/item"],
        signatures: &[
            ".product",
            ".product-title",
            ".product-price",
            "[itemtype*='schema.org/Product']",
            "[itemprop='price']",
        ],
        extra_signature: None,
        generate: product::generate,
    },
    Detector {
        archetype: PageArchetype::Article,
        path_hints: &["blog", "news", "article", "post"],
        signatures: &[
            "article",
            ".article",
            ".blog-post",
            ".post-content",
            ".article-content",
            "[itemtype*='Article']",
        ],
        extra_signature: None,
        generate: article::generate,
    },
    Detector {
        archetype: PageArchetype::Faq,
        path_hints: &["faq", "help", "question"],
        signatures: &[".faq", "#faq", "[itemtype*='FAQPage']"],
        extra_signature: Some(has_accordion),
        generate: faq::generate,
    },
    Detector {
        archetype: PageArchetype::Event,
        path_hints: &["event", "webinar", "conference"],
        signatures: &[
            ".event",
            ".event-details",
            ".event-date",
            "[itemtype*='schema.org/Event']",
        ],
        extra_signature: None,
        generate: event::generate,
    },
    Detector {
        archetype: PageArchetype::Recipe,
        path_hints: &["recipe"],
        signatures: &[
            ".recipe",
            ".ingredients",
            "[itemtype*='Recipe']",
            "[itemprop='recipeIngredient']",
        ],
        extra_signature: None,
        generate: recipe::generate,
    },
    Detector {
        archetype: PageArchetype::JobPosting,
        path_hints: &["job", "career"],
        signatures: &[
            ".job-posting",
            ".job-details",
            ".job-title",
            "[itemtype*='JobPosting']",
        ],
        extra_signature: None,
        generate: job::generate,
    },
];

/// Runs the synthesizer for one archetype, bypassing detection.
pub fn generate_for(archetype: PageArchetype, snapshot: &DocumentSnapshot) -> Option<Value> {
    match archetype {
        PageArchetype::Product => product::generate(snapshot),
        PageArchetype::Article => article::generate(snapshot),
        PageArchetype::Faq => faq::generate(snapshot),
        PageArchetype::Event => event::generate(snapshot),
        PageArchetype::Recipe => recipe::generate(snapshot),
        PageArchetype::JobPosting => job::generate(snapshot),
        PageArchetype::WebSite => website::generate(snapshot),
    }
}

/// Detects the page archetype and synthesizes a schema for it.
///
/// Returns `None` when the matching archetype is already described on the
/// page, or when nothing matched and a WebSite schema already exists. A
/// detector whose synthesizer declines (an FAQ page with fewer than two
/// question/answer pairs) hands over to the next detector.
pub fn detect_page_type_and_generate_schema(snapshot: &DocumentSnapshot) -> Option<Value> {
    for detector in DETECTORS {
        if !detector.matches(snapshot) {
            continue;
        }
        let archetype = detector.archetype;
        if has_schema_type(snapshot, archetype.existing_types()) {
            info!(
                "{} schema already present on {}, nothing to generate",
                archetype.as_str(),
                snapshot.url()
            );
            return None;
        }
        match (detector.generate)(snapshot) {
            Some(schema) => {
                debug!("Detected {} page at {}", archetype.as_str(), snapshot.url());
                return Some(schema);
            }
            None => debug!(
                "{} detector matched {} but produced no schema",
                archetype.as_str(),
                snapshot.url()
            ),
        }
    }

    if has_schema_type(snapshot, PageArchetype::WebSite.existing_types()) {
        debug!("WebSite schema already present on {}", snapshot.url());
        return None;
    }
    website::generate(snapshot)
}
