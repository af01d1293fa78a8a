//! Per-type rule sets.
//!
//! Each rule set appends one error string per violation. Nested fields are
//! reported with their path (`offers[1].price`, `address.postalCode`).

use serde_json::Value;

use crate::config::MAX_HEADLINE_LENGTH;
use crate::utils::char_len;

/// A field counts as present when it exists and is not null, an empty string
/// or an empty array.
pub(super) fn is_present(value: &Value, key: &str) -> bool {
    match value.get(key) {
        None | Some(Value::Null) => false,
        Some(Value::String(s)) => !s.trim().is_empty(),
        Some(Value::Array(a)) => !a.is_empty(),
        Some(_) => true,
    }
}

pub(super) fn missing(path: &str) -> String {
    format!("Missing required field: {path}")
}

fn require(value: &Value, prefix: &str, fields: &[&str], errors: &mut Vec<String>) {
    for field in fields {
        if !is_present(value, field) {
            errors.push(missing(&join_path(prefix, field)));
        }
    }
}

fn require_type(value: &Value, path: &str, expected: &str, errors: &mut Vec<String>) {
    if value.get("@type").and_then(Value::as_str) != Some(expected) {
        errors.push(format!("{path}.@type must be \"{expected}\""));
    }
}

fn join_path(prefix: &str, field: &str) -> String {
    if prefix.is_empty() {
        field.to_string()
    } else {
        format!("{prefix}.{field}")
    }
}

/// Object-or-array fields as a list of `(path, item)` pairs. A single object
/// keeps the bare field name as its path.
fn entries<'a>(value: &'a Value, field: &str) -> Vec<(String, &'a Value)> {
    match value.get(field) {
        Some(Value::Array(items)) => items
            .iter()
            .enumerate()
            .map(|(i, item)| (format!("{field}[{i}]"), item))
            .collect(),
        Some(Value::Null) | None => Vec::new(),
        Some(item) => vec![(field.to_string(), item)],
    }
}

pub(super) fn product(schema: &Value, errors: &mut Vec<String>) {
    require(schema, "", &["name", "image", "description"], errors);

    for (path, offer) in entries(schema, "offers") {
        require(offer, &path, &["price", "priceCurrency"], errors);
    }
}

pub(super) fn article(schema: &Value, errors: &mut Vec<String>) {
    require(
        schema,
        "",
        &["headline", "author", "datePublished", "image"],
        errors,
    );

    if let Some(headline) = schema.get("headline").and_then(Value::as_str) {
        let len = char_len(headline);
        if len > MAX_HEADLINE_LENGTH {
            errors.push(format!(
                "Headline exceeds {MAX_HEADLINE_LENGTH} characters (current: {len})"
            ));
        }
    }

    for (path, author) in entries(schema, "author") {
        if author.is_object() && !is_present(author, "name") {
            errors.push(missing(&format!("{path}.name")));
        }
    }
}

pub(super) fn breadcrumb_list(schema: &Value, errors: &mut Vec<String>) {
    let items = match schema.get("itemListElement") {
        Some(Value::Array(items)) => items,
        None | Some(Value::Null) => {
            errors.push(missing("itemListElement"));
            return;
        }
        Some(_) => {
            errors.push("itemListElement must be an array".to_string());
            return;
        }
    };

    for (i, element) in items.iter().enumerate() {
        let path = format!("itemListElement[{i}]");
        require_type(element, &path, "ListItem", errors);
        require(element, &path, &["position"], errors);

        match element.get("item") {
            Some(item) if item.is_object() => {
                if !is_present(item, "@id") && !is_present(item, "url") {
                    errors.push(missing(&format!("{path}.item.@id or {path}.item.url")));
                }
                require(item, &format!("{path}.item"), &["name"], errors);
            }
            _ => errors.push(missing(&format!("{path}.item"))),
        }
    }
}

pub(super) fn faq_page(schema: &Value, errors: &mut Vec<String>) {
    if !is_present(schema, "mainEntity") {
        errors.push(missing("mainEntity"));
        return;
    }

    for (path, question) in entries(schema, "mainEntity") {
        require_type(question, &path, "Question", errors);
        require(question, &path, &["name"], errors);

        match question.get("acceptedAnswer") {
            Some(answer) if answer.is_object() => {
                let answer_path = format!("{path}.acceptedAnswer");
                require_type(answer, &answer_path, "Answer", errors);
                require(answer, &answer_path, &["text"], errors);
            }
            _ => errors.push(missing(&format!("{path}.acceptedAnswer"))),
        }
    }
}

pub(super) fn local_business(schema: &Value, errors: &mut Vec<String>) {
    require(schema, "", &["name", "address", "telephone"], errors);

    if let Some(address) = schema.get("address").filter(|a| a.is_object()) {
        require_type(address, "address", "PostalAddress", errors);
        require(
            address,
            "address",
            &[
                "streetAddress",
                "addressLocality",
                "addressRegion",
                "postalCode",
            ],
            errors,
        );
    }

    for (path, spec) in entries(schema, "openingHoursSpecification") {
        require_type(spec, &path, "OpeningHoursSpecification", errors);
        require(spec, &path, &["dayOfWeek", "opens", "closes"], errors);
    }
}
