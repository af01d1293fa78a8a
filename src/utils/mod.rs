//! Utility functions.
//!
//! This module provides:
//! - CSS selector parsing with a never-panicking fallback
//! - Static regex construction
//! - Text normalization helpers
//! - Sibling-walking helpers for heading-delimited sections

mod dom;
mod pattern;
mod selector;
mod text;

pub use dom::{heading_level, section_items, siblings_until_heading};
pub use pattern::compile_regex_unsafe;
pub use selector::parse_selector_with_fallback;
pub use text::{char_len, contains_any, element_text, non_empty, normalize_whitespace};
