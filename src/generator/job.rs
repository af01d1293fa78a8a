//! Job posting and careers pages.

use chrono::{Duration, NaiveDate};
use serde_json::{json, Value};

use crate::config::{DEFAULT_CURRENCY, JOB_VALID_THROUGH_DAYS};
use crate::document::DocumentSnapshot;
use crate::utils::section_items;

use super::fields::{date_attr, insert_opt, named, parse_date, schema_object, site_name};
use super::scanners::{
    detect_currency, detect_employment_type, is_remote_job, parse_salary, salary_unit,
    SalaryAmount,
};

const DATE_FORMAT: &str = "%Y-%m-%d";

fn date_posted(snapshot: &DocumentSnapshot) -> NaiveDate {
    date_attr(snapshot, &["[itemprop='datePosted']", ".date-posted time"])
        .or_else(|| snapshot.first_text(&[".date-posted", ".posted-date"]))
        .and_then(|text| parse_date(&text))
        .or_else(|| snapshot.last_modified().map(|t| t.date_naive()))
        .unwrap_or_else(|| snapshot.now().date_naive())
}

fn base_salary(snapshot: &DocumentSnapshot) -> Option<Value> {
    let text = snapshot.first_text(&[".salary", ".compensation", "[itemprop='baseSalary']"])?;
    let amount = parse_salary(&text)?;
    let unit = salary_unit(&text);
    let value = match amount {
        SalaryAmount::Single(value) => {
            json!({ "@type": "QuantitativeValue", "value": value, "unitText": unit })
        }
        SalaryAmount::Range { min, max } => json!({
            "@type": "QuantitativeValue",
            "minValue": min,
            "maxValue": max,
            "unitText": unit,
        }),
    };
    Some(json!({
        "@type": "MonetaryAmount",
        "currency": detect_currency(&text).unwrap_or(DEFAULT_CURRENCY),
        "value": value,
    }))
}

fn joined_section(snapshot: &DocumentSnapshot, keywords: &[&str]) -> Option<String> {
    let items = section_items(snapshot.html(), keywords);
    if items.is_empty() {
        None
    } else {
        Some(items.join("\n"))
    }
}

pub(super) fn generate(snapshot: &DocumentSnapshot) -> Option<Value> {
    let mut schema = schema_object("JobPosting");
    let body = snapshot.body_text();

    insert_opt(
        &mut schema,
        "title",
        snapshot
            .first_text(&["h1", ".job-title", "[itemprop='title']"])
            .or_else(|| snapshot.title()),
    );
    insert_opt(
        &mut schema,
        "description",
        snapshot
            .first_text(&[".job-description", "[itemprop='description']"])
            .or_else(|| snapshot.meta_description()),
    );

    let organization = snapshot
        .first_text(&[".company-name", ".company", "[itemprop='hiringOrganization']"])
        .or_else(|| site_name(snapshot));
    insert_opt(
        &mut schema,
        "hiringOrganization",
        organization.map(|name| named("Organization", &name)),
    );

    let location = snapshot.first_text(&[".job-location", ".location", "[itemprop='jobLocation']"]);
    insert_opt(
        &mut schema,
        "jobLocation",
        location.map(|place| {
            json!({
                "@type": "Place",
                "address": { "@type": "PostalAddress", "addressLocality": place },
            })
        }),
    );
    if is_remote_job(&body) {
        schema.insert("jobLocationType".into(), "TELECOMMUTE".into());
    }

    let employment_text = snapshot
        .first_text(&[".employment-type", ".job-type", "[itemprop='employmentType']"])
        .unwrap_or_else(|| body.clone());
    schema.insert(
        "employmentType".into(),
        detect_employment_type(&employment_text).into(),
    );

    insert_opt(&mut schema, "baseSalary", base_salary(snapshot));

    let posted = date_posted(snapshot);
    let valid_through = date_attr(snapshot, &["[itemprop='validThrough']"]).unwrap_or_else(|| {
        (posted + Duration::days(JOB_VALID_THROUGH_DAYS))
            .format(DATE_FORMAT)
            .to_string()
    });
    schema.insert(
        "datePosted".into(),
        posted.format(DATE_FORMAT).to_string().into(),
    );
    schema.insert("validThrough".into(), valid_through.into());

    insert_opt(
        &mut schema,
        "responsibilities",
        joined_section(snapshot, &["responsibilit", "what you'll do", "duties"]),
    );
    insert_opt(
        &mut schema,
        "qualifications",
        joined_section(snapshot, &["qualification", "requirement", "what you bring"]),
    );

    Some(Value::Object(schema))
}
