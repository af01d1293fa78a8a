//! HTML parsing and data extraction.
//!
//! This module extracts head metadata and structured data from HTML content:
//! - Title, named meta tags, canonical link, document language
//! - JSON-LD script bodies, Open Graph tags, microdata types
//!
//! All parsing is done using CSS selectors via the `scraper` crate.

mod html;
mod structured;

// Re-export public API
pub use html::{
    extract_canonical, extract_lang, extract_meta_content, extract_meta_description,
    extract_title,
};
pub use structured::{
    extract_json_ld_scripts, extract_microdata_types, extract_open_graph, schema_types_of,
};
