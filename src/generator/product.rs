//! Product pages.

use log::debug;
use serde_json::{json, Value};

use crate::config::DEFAULT_CURRENCY;
use crate::document::DocumentSnapshot;

use super::fields::{image_url, insert_opt, named, schema_object};
use super::scanners::{detect_availability, detect_currency, format_price, parse_price};

const PRICE_SELECTORS: &[&str] = &[".price", ".product-price", "[itemprop='price']"];

pub(super) fn generate(snapshot: &DocumentSnapshot) -> Option<Value> {
    let mut schema = schema_object("Product");

    let name = snapshot
        .first_text(&["h1", ".product-title", "[itemprop='name']"])
        .or_else(|| snapshot.title());
    insert_opt(&mut schema, "name", name);

    let description = snapshot
        .first_text(&[".product-description", "[itemprop='description']"])
        .or_else(|| snapshot.first_attr(&["[itemprop='description']"], "content"))
        .or_else(|| snapshot.meta_description());
    insert_opt(&mut schema, "description", description);

    let image = image_url(
        snapshot,
        &["[itemprop='image']", ".product-image img", "img"],
    );
    insert_opt(&mut schema, "image", image);

    insert_opt(
        &mut schema,
        "brand",
        snapshot
            .first_text(&[".brand", "[itemprop='brand']"])
            .map(|brand| named("Brand", &brand)),
    );
    insert_opt(
        &mut schema,
        "sku",
        snapshot
            .first_attr(&["[itemprop='sku']"], "content")
            .or_else(|| snapshot.first_text(&["[itemprop='sku']", ".sku"])),
    );

    if let Some(offer) = offer(snapshot) {
        schema.insert("offers".into(), offer);
    }

    Some(Value::Object(schema))
}

fn offer(snapshot: &DocumentSnapshot) -> Option<Value> {
    let price_text = snapshot
        .first_attr(&["[itemprop='price']"], "content")
        .or_else(|| snapshot.first_text(PRICE_SELECTORS))?;
    let Some(price) = parse_price(&price_text) else {
        debug!("No numeric price in {:?}", price_text);
        return None;
    };

    let displayed = snapshot.first_text(PRICE_SELECTORS).unwrap_or_default();
    let currency = snapshot
        .first_attr(&["[itemprop='priceCurrency']"], "content")
        .or_else(|| detect_currency(&displayed).map(str::to_string))
        .or_else(|| detect_currency(&price_text).map(str::to_string))
        .unwrap_or_else(|| DEFAULT_CURRENCY.to_string());

    let stock_text = snapshot
        .first_text(&[".availability", ".stock", "[itemprop='availability']"])
        .unwrap_or_else(|| snapshot.body_text());

    Some(json!({
        "@type": "Offer",
        "price": format_price(price),
        "priceCurrency": currency,
        "availability": detect_availability(&stock_text),
        "url": snapshot.url().as_str(),
    }))
}
