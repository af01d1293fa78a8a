//! Event and webinar pages.

use chrono::{Duration, NaiveDate};
use serde_json::{json, Map, Value};

use crate::config::DEFAULT_CURRENCY;
use crate::document::DocumentSnapshot;

use super::fields::{date_attr, image_url, insert_opt, named, schema_object};
use super::scanners::{detect_currency, extract_dates, format_price, is_virtual_event, parse_price};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Start and end dates as strings. Machine-readable attributes win; then
/// dates scanned from the event-date element and the body text; then
/// tomorrow and the day after.
fn event_dates(snapshot: &DocumentSnapshot) -> (String, Option<String>) {
    let start_attr = date_attr(
        snapshot,
        &["[itemprop='startDate']", ".event-date time", "time[datetime]"],
    );
    let end_attr = date_attr(snapshot, &["[itemprop='endDate']"]);
    if let Some(start) = start_attr {
        return (start, end_attr);
    }

    let scanned: Vec<NaiveDate> = snapshot
        .first_text(&[".event-date"])
        .map(|text| extract_dates(&text))
        .filter(|dates| !dates.is_empty())
        .unwrap_or_else(|| extract_dates(&snapshot.body_text()));

    match scanned.as_slice() {
        [start, end, ..] => (
            start.format(DATE_FORMAT).to_string(),
            Some(end.format(DATE_FORMAT).to_string()),
        ),
        [start] => (start.format(DATE_FORMAT).to_string(), end_attr),
        [] => {
            let now = snapshot.now();
            (
                (now + Duration::days(1)).format(DATE_FORMAT).to_string(),
                Some((now + Duration::days(2)).format(DATE_FORMAT).to_string()),
            )
        }
    }
}

fn in_person_location(snapshot: &DocumentSnapshot) -> Option<Value> {
    let venue = snapshot.first_text(&[".event-location", ".venue", "[itemprop='location']"]);
    let address = snapshot.first_text(&[".event-address", "[itemprop='address']", "address"]);
    if venue.is_none() && address.is_none() {
        return None;
    }

    let mut place = Map::new();
    place.insert("@type".into(), "Place".into());
    insert_opt(&mut place, "name", venue.or_else(|| address.clone()));
    insert_opt(
        &mut place,
        "address",
        address.map(|street| json!({ "@type": "PostalAddress", "streetAddress": street })),
    );
    Some(Value::Object(place))
}

fn ticket_offer(snapshot: &DocumentSnapshot) -> Option<Value> {
    let text = snapshot.first_text(&[".ticket-price", ".event-price", "[itemprop='price']"])?;
    let price = parse_price(&text).unwrap_or(0.0);
    Some(json!({
        "@type": "Offer",
        "price": format_price(price),
        "priceCurrency": detect_currency(&text).unwrap_or(DEFAULT_CURRENCY),
        "availability": "https://schema.org/InStock",
        "url": snapshot.url().as_str(),
    }))
}

pub(super) fn generate(snapshot: &DocumentSnapshot) -> Option<Value> {
    let mut schema = schema_object("Event");

    insert_opt(
        &mut schema,
        "name",
        snapshot
            .first_text(&["h1", ".event-title", "[itemprop='name']"])
            .or_else(|| snapshot.title()),
    );
    insert_opt(
        &mut schema,
        "description",
        snapshot
            .first_text(&[".event-description", "[itemprop='description']"])
            .or_else(|| snapshot.meta_description()),
    );
    insert_opt(
        &mut schema,
        "image",
        image_url(snapshot, &["[itemprop='image']", ".event-image img"]),
    );

    let (start, end) = event_dates(snapshot);
    schema.insert("startDate".into(), Value::String(start));
    insert_opt(&mut schema, "endDate", end);
    schema.insert(
        "eventStatus".into(),
        "https://schema.org/EventScheduled".into(),
    );

    if is_virtual_event(&snapshot.body_text()) {
        schema.insert(
            "eventAttendanceMode".into(),
            "https://schema.org/OnlineEventAttendanceMode".into(),
        );
        schema.insert(
            "location".into(),
            json!({ "@type": "VirtualLocation", "url": snapshot.url().as_str() }),
        );
    } else {
        schema.insert(
            "eventAttendanceMode".into(),
            "https://schema.org/OfflineEventAttendanceMode".into(),
        );
        insert_opt(&mut schema, "location", in_person_location(snapshot));
    }

    insert_opt(&mut schema, "offers", ticket_offer(snapshot));
    insert_opt(
        &mut schema,
        "organizer",
        snapshot
            .first_text(&[".organizer", "[itemprop='organizer']"])
            .map(|name| named("Organization", &name)),
    );

    Some(Value::Object(schema))
}
