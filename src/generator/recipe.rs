//! Recipe pages. Always produces a schema; missing lists get placeholders.

use serde_json::{json, Value};

use crate::config::{RECIPE_INGREDIENT_PLACEHOLDER, RECIPE_INSTRUCTION_PLACEHOLDER};
use crate::document::DocumentSnapshot;
use crate::utils::{element_text, section_items};

use super::fields::{image_url, insert_opt, named, schema_object};
use super::scanners::duration_to_iso8601;

fn list_texts(snapshot: &DocumentSnapshot, selectors: &[&str]) -> Vec<String> {
    selectors
        .iter()
        .map(|sel| {
            snapshot
                .select_all(sel)
                .iter()
                .map(element_text)
                .filter(|t| !t.is_empty())
                .collect::<Vec<_>>()
        })
        .find(|items| !items.is_empty())
        .unwrap_or_default()
}

fn ingredients(snapshot: &DocumentSnapshot) -> Vec<String> {
    let mut items = list_texts(
        snapshot,
        &[
            "[itemprop='recipeIngredient']",
            ".ingredients li",
            ".recipe-ingredients li",
        ],
    );
    if items.is_empty() {
        items = section_items(snapshot.html(), &["ingredient"]);
    }
    if items.is_empty() {
        items.push(RECIPE_INGREDIENT_PLACEHOLDER.to_string());
    }
    items
}

fn instructions(snapshot: &DocumentSnapshot) -> Vec<String> {
    let mut steps = list_texts(
        snapshot,
        &[
            "[itemprop='recipeInstructions'] li",
            "[itemprop='recipeInstructions']",
            ".instructions li",
            ".directions li",
            ".recipe-instructions li",
        ],
    );
    if steps.is_empty() {
        steps = section_items(
            snapshot.html(),
            &["instruction", "direction", "steps", "method"],
        );
    }
    if steps.is_empty() {
        steps.push(RECIPE_INSTRUCTION_PLACEHOLDER.to_string());
    }
    steps
}

/// ISO-8601 duration from an `itemprop` (content or text) or a class-named element.
fn duration(snapshot: &DocumentSnapshot, itemprop: &str, class: &str) -> Option<String> {
    let prop = format!("[itemprop='{}']", itemprop);
    snapshot
        .first_attr(&[prop.as_str()], "content")
        .or_else(|| snapshot.first_attr(&[prop.as_str()], "datetime"))
        .or_else(|| snapshot.first_text(&[prop.as_str(), class]))
        .and_then(|text| duration_to_iso8601(&text))
}

pub(super) fn generate(snapshot: &DocumentSnapshot) -> Option<Value> {
    let mut schema = schema_object("Recipe");

    insert_opt(
        &mut schema,
        "name",
        snapshot
            .first_text(&["h1", ".recipe-title", "[itemprop='name']"])
            .or_else(|| snapshot.title()),
    );
    insert_opt(
        &mut schema,
        "description",
        snapshot
            .first_text(&["[itemprop='description']", ".recipe-description"])
            .or_else(|| snapshot.meta_description()),
    );
    insert_opt(
        &mut schema,
        "image",
        image_url(snapshot, &["[itemprop='image']", ".recipe-image img"]),
    );
    insert_opt(
        &mut schema,
        "author",
        snapshot
            .first_text(&["[itemprop='author']", ".recipe-author", ".author"])
            .map(|name| named("Person", &name)),
    );

    insert_opt(&mut schema, "prepTime", duration(snapshot, "prepTime", ".prep-time"));
    insert_opt(&mut schema, "cookTime", duration(snapshot, "cookTime", ".cook-time"));
    insert_opt(&mut schema, "totalTime", duration(snapshot, "totalTime", ".total-time"));
    insert_opt(
        &mut schema,
        "recipeYield",
        snapshot.first_text(&["[itemprop='recipeYield']", ".servings", ".yield"]),
    );

    schema.insert("recipeIngredient".into(), json!(ingredients(snapshot)));
    let steps: Vec<Value> = instructions(snapshot)
        .into_iter()
        .map(|text| json!({ "@type": "HowToStep", "text": text }))
        .collect();
    schema.insert("recipeInstructions".into(), Value::Array(steps));

    Some(Value::Object(schema))
}
