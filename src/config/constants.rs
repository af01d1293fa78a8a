//! Configuration constants.
//!
//! This module defines all constants used throughout the application: SEO audit
//! thresholds, schema generation defaults, confidence scores and network settings.

// Schema.org
/// The only accepted `@context` value for JSON-LD documents.
pub const SCHEMA_CONTEXT: &str = "https://schema.org";
/// Maximum headline length accepted for Article-family schemas.
pub const MAX_HEADLINE_LENGTH: usize = 110;
/// `data-source` attribute value for permanently injected schemas.
pub const AUTO_GENERATED_SOURCE: &str = "auto-generated";
/// `data-source` attribute value for the temporary schema injected during validation.
pub const VALIDATION_PENDING_SOURCE: &str = "validation-pending";

// Generator defaults
/// Minimum number of question/answer pairs before an FAQPage schema is emitted.
pub const MIN_FAQ_PAIRS: usize = 2;
/// Number of accordion-like elements that marks a page as FAQ-shaped.
pub const FAQ_ACCORDION_THRESHOLD: usize = 3;
/// Days added to `datePosted` when a job posting has no `validThrough`.
pub const JOB_VALID_THROUGH_DAYS: i64 = 30;
/// Author used when an article names none.
pub const DEFAULT_ARTICLE_AUTHOR: &str = "Editorial Team";
/// Currency assumed when a price carries no currency marker.
pub const DEFAULT_CURRENCY: &str = "USD";
/// Placeholder ingredient emitted when a recipe page lists none.
pub const RECIPE_INGREDIENT_PLACEHOLDER: &str = "See recipe for ingredients";
/// Placeholder step emitted when a recipe page lists no instructions.
pub const RECIPE_INSTRUCTION_PLACEHOLDER: &str = "See recipe for instructions";

// Confidence scores (heuristic, tunable through ConfidenceConfig)
pub const CONFIDENCE_DEFAULT: f64 = 0.85;
pub const CONFIDENCE_WEBSITE: f64 = 0.95;
pub const CONFIDENCE_EVENT: f64 = 0.75;
pub const CONFIDENCE_RECIPE: f64 = 0.75;
/// Multiplier applied when the validation API reports issues.
pub const CONFIDENCE_ISSUES_FACTOR: f64 = 0.8;
/// Multiplier applied when the validation API call fails outright.
pub const CONFIDENCE_FAILURE_FACTOR: f64 = 0.7;

// SEO audit thresholds
pub const TITLE_MIN_LENGTH: usize = 50;
pub const TITLE_MAX_LENGTH: usize = 60;
pub const META_DESCRIPTION_MIN_LENGTH: usize = 120;
pub const META_DESCRIPTION_MAX_LENGTH: usize = 160;
/// Minimum share of images (0.0-1.0) that should be lazily loaded.
pub const LAZY_LOADING_MIN_RATIO: f64 = 0.5;
/// Minimum share of images (0.0-1.0) that should declare width and height.
pub const IMAGE_DIMENSIONS_MIN_RATIO: f64 = 0.8;
/// Minimum tap target edge in CSS pixels.
pub const MIN_TAP_TARGET_PX: u32 = 48;
/// Minimum legible font size in CSS pixels.
pub const MIN_FONT_SIZE_PX: f64 = 12.0;
/// Element count above which the DOM is considered oversized.
pub const MAX_DOM_ELEMENTS: usize = 1500;
/// Link texts that say nothing about the target.
pub const GENERIC_LINK_TEXTS: &[&str] = &[
    "click here",
    "here",
    "read more",
    "more",
    "learn more",
    "link",
    "this",
];

// External tools
pub const RICH_RESULTS_TEST_URL: &str = "https://search.google.com/test/rich-results";
pub const SCHEMA_VALIDATOR_URL: &str = "https://validator.schema.org/";
pub const PAGESPEED_INSIGHTS_URL: &str = "https://pagespeed.web.dev/analysis";
pub const STRUCTURED_DATA_DOCS_BASE: &str =
    "https://developers.google.com/search/docs/appearance/structured-data";

// Network
/// Default endpoint of the page validation API.
pub const DEFAULT_VALIDATION_ENDPOINT: &str = "https://api.schema-audit.dev/v1/validate";
/// Per-request timeout in seconds for document fetches and validation calls.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
/// Maximum document body size in bytes (2MB).
pub const MAX_RESPONSE_BODY_SIZE: usize = 2 * 1024 * 1024;

pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";
