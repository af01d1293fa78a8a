//! FAQ pages.
//!
//! Question/answer pairs are collected from four DOM shapes: definition lists,
//! `<details>` disclosures, accordion items, and question headings followed by
//! paragraphs.

use std::collections::HashSet;

use scraper::ElementRef;
use serde_json::{json, Value};

use crate::config::MIN_FAQ_PAIRS;
use crate::document::DocumentSnapshot;
use crate::utils::{
    element_text, non_empty, normalize_whitespace, parse_selector_with_fallback,
    siblings_until_heading,
};

use super::fields::schema_object;

const ITEM_QUESTION_SELECTORS: &[&str] = &[
    ".faq-question",
    ".accordion-header",
    ".accordion-button",
    "summary",
    "h2",
    "h3",
    "h4",
    "h5",
    "h6",
    "dt",
];
const ITEM_ANSWER_SELECTORS: &[&str] = &[
    ".faq-answer",
    ".accordion-body",
    ".accordion-content",
    ".accordion-collapse",
    "dd",
    "p",
];

/// One question and its answer, whitespace-normalized.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct FaqPair {
    pub question: String,
    pub answer: String,
}

fn definition_list_pairs(snapshot: &DocumentSnapshot) -> Vec<FaqPair> {
    snapshot
        .select_all("dl dt")
        .into_iter()
        .filter_map(|dt| {
            let dd = dt
                .next_siblings()
                .filter_map(ElementRef::wrap)
                .find(|el| matches!(el.value().name(), "dd" | "dt"))
                .filter(|el| el.value().name() == "dd")?;
            pair(element_text(&dt), element_text(&dd))
        })
        .collect()
}

fn details_pairs(snapshot: &DocumentSnapshot) -> Vec<FaqPair> {
    snapshot
        .select_all("details")
        .into_iter()
        .filter_map(|details| {
            let summary = details
                .children()
                .filter_map(ElementRef::wrap)
                .find(|el| el.value().name() == "summary")?;
            let answer: String = details
                .children()
                .filter(|child| child.id() != summary.id())
                .filter_map(|child| {
                    ElementRef::wrap(child)
                        .map(|el| element_text(&el))
                        .or_else(|| child.value().as_text().map(|t| t.trim().to_string()))
                })
                .collect::<Vec<_>>()
                .join(" ");
            pair(element_text(&summary), normalize_whitespace(&answer))
        })
        .collect()
}

fn first_match_text(item: &ElementRef<'_>, selectors: &[&str]) -> Option<String> {
    selectors.iter().find_map(|sel| {
        let parsed = parse_selector_with_fallback(sel, "faq item");
        item.select(&parsed)
            .find_map(|el| non_empty(element_text(&el)))
    })
}

fn accordion_pairs(snapshot: &DocumentSnapshot) -> Vec<FaqPair> {
    snapshot
        .select_all(".faq-item, .accordion-item")
        .into_iter()
        .filter_map(|item| {
            let question = first_match_text(&item, ITEM_QUESTION_SELECTORS)?;
            let answer = first_match_text(&item, ITEM_ANSWER_SELECTORS)?;
            if answer == question {
                return None;
            }
            pair(question, answer)
        })
        .collect()
}

fn heading_pairs(snapshot: &DocumentSnapshot) -> Vec<FaqPair> {
    snapshot
        .select_all("h2, h3, h4, h5, h6")
        .into_iter()
        .filter_map(|heading| {
            let question = element_text(&heading);
            if !question.ends_with('?') {
                return None;
            }
            let answer = siblings_until_heading(heading)
                .iter()
                .filter(|el| matches!(el.value().name(), "p" | "div" | "ul" | "ol"))
                .map(element_text)
                .filter(|t| !t.is_empty())
                .collect::<Vec<_>>()
                .join(" ");
            pair(question, answer)
        })
        .collect()
}

fn pair(question: String, answer: String) -> Option<FaqPair> {
    Some(FaqPair {
        question: non_empty(question)?,
        answer: non_empty(answer)?,
    })
}

/// Every distinct question/answer pair on the page, in extraction order.
///
/// Questions that normalize to the same text (case and whitespace folded) are
/// kept once.
pub(super) fn extract_pairs(snapshot: &DocumentSnapshot) -> Vec<FaqPair> {
    let mut seen = HashSet::new();
    definition_list_pairs(snapshot)
        .into_iter()
        .chain(details_pairs(snapshot))
        .chain(accordion_pairs(snapshot))
        .chain(heading_pairs(snapshot))
        .filter(|p| seen.insert(normalize_whitespace(&p.question).to_lowercase()))
        .collect()
}

pub(super) fn generate(snapshot: &DocumentSnapshot) -> Option<Value> {
    let pairs = extract_pairs(snapshot);
    if pairs.len() < MIN_FAQ_PAIRS {
        log::debug!(
            "Only {} FAQ pair(s) on {}, need {}",
            pairs.len(),
            snapshot.url(),
            MIN_FAQ_PAIRS
        );
        return None;
    }

    let mut schema = schema_object("FAQPage");
    let questions: Vec<Value> = pairs
        .into_iter()
        .map(|p| {
            json!({
                "@type": "Question",
                "name": p.question,
                "acceptedAnswer": { "@type": "Answer", "text": p.answer },
            })
        })
        .collect();
    schema.insert("mainEntity".into(), Value::Array(questions));
    Some(Value::Object(schema))
}
