//! Static regex construction.

use regex::Regex;

/// Compiles a static regex pattern, panicking with context if it is malformed.
///
/// Only for compile-time constant patterns held in `LazyLock` statics; a
/// failure here is a programming error, not a runtime condition.
pub fn compile_regex_unsafe(pattern: &str, context: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| {
        panic!(
            "Failed to compile regex pattern '{}' in {}: {}. This is a programming error.",
            pattern, context, e
        )
    })
}
