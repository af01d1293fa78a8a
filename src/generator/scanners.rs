//! Regex-based text scanners.
//!
//! Each scanner is a pure function of a string. They are best-effort: free
//! text on real pages is messy, and these only recognize the common shapes.

use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;

use crate::utils::{compile_regex_unsafe, contains_any};

static PRICE_RE: LazyLock<Regex> = LazyLock::new(|| compile_regex_unsafe(r"[\d,.]+", "PRICE_RE"));

static HOURS_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(r"(?i)(\d+)\s*h(?:ours?|rs?)?", "HOURS_RE"));
static MINUTES_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(r"(?i)(\d+)\s*m(?:inutes?|ins?)?", "MINUTES_RE"));

static ISO_DATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    compile_regex_unsafe(r"\b(\d{4})-(\d{2})-(\d{2})\b", "ISO_DATE_RE")
});
static NAMED_DATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    compile_regex_unsafe(
        r"(?i)\b(jan(?:uary)?|feb(?:ruary)?|mar(?:ch)?|apr(?:il)?|may|june?|july?|aug(?:ust)?|sep(?:t(?:ember)?)?|oct(?:ober)?|nov(?:ember)?|dec(?:ember)?)\.?\s+(\d{1,2})(?:st|nd|rd|th)?,?\s+(\d{4})\b",
        "NAMED_DATE_RE",
    )
});
static NUMERIC_DATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    compile_regex_unsafe(r"\b(\d{1,2})/(\d{1,2})/(\d{4})\b", "NUMERIC_DATE_RE")
});

static SALARY_RANGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    compile_regex_unsafe(
        r"(?i)(\d[\d,]*(?:\.\d+)?)\s*(k)?\s*(?:-|–|—|to)\s*[$€£]?\s*(\d[\d,]*(?:\.\d+)?)\s*(k)?",
        "SALARY_RANGE_RE",
    )
});
static SALARY_SINGLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    compile_regex_unsafe(r"(?i)(\d[\d,]*(?:\.\d+)?)\s*(k)?", "SALARY_SINGLE_RE")
});

static PART_TIME_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(r"(?i)\bpart[\s-]?time\b", "PART_TIME_RE"));
static CONTRACT_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(r"(?i)\bcontract(?:or)?\b", "CONTRACT_RE"));
static TEMPORARY_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(r"(?i)\btemp(?:orary)?\b", "TEMPORARY_RE"));
static INTERN_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(r"(?i)\bintern(?:ship)?s?\b", "INTERN_RE"));

const REMOTE_KEYWORDS: &[&str] = &["remote", "work from home", "work-from-home", "telecommute"];

const VIRTUAL_EVENT_KEYWORDS: &[&str] = &[
    "virtual event",
    "online event",
    "virtual conference",
    "webinar",
    "zoom",
    "livestream",
    "live stream",
    "google meet",
    "microsoft teams",
];

/// Parses the first numeric run (`[\d,.]+`) containing a digit.
///
/// Thousands separators are dropped: `"$1,299.00"` parses as `1299.0`.
pub fn parse_price(text: &str) -> Option<f64> {
    PRICE_RE
        .find_iter(text)
        .map(|m| m.as_str())
        .find(|s| s.chars().any(|c| c.is_ascii_digit()))
        .and_then(|s| s.replace(',', "").trim_end_matches('.').parse::<f64>().ok())
}

/// Formats a price with two decimals, the way offers carry it.
pub fn format_price(price: f64) -> String {
    format!("{:.2}", price)
}

/// ISO 4217 code for the first currency glyph in `text`.
pub fn detect_currency(text: &str) -> Option<&'static str> {
    text.chars().find_map(|c| match c {
        '$' => Some("USD"),
        '€' => Some("EUR"),
        '£' => Some("GBP"),
        _ => None,
    })
}

/// Schema.org availability URL inferred from stock wording. Defaults to InStock.
pub fn detect_availability(text: &str) -> &'static str {
    if contains_any(text, &["out of stock", "sold out"]) {
        "https://schema.org/OutOfStock"
    } else if contains_any(text, &["pre-order", "preorder"]) {
        "https://schema.org/PreOrder"
    } else {
        "https://schema.org/InStock"
    }
}

/// Converts a free-text duration ("1 hour 30 minutes", "45 mins", "2h") to
/// ISO-8601 (`PT1H30M`). Zero components are omitted; values already in ISO
/// form are returned unchanged. `None` when no hours or minutes are found.
pub fn duration_to_iso8601(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.len() > 2 && trimmed.get(..2).is_some_and(|p| p.eq_ignore_ascii_case("PT")) {
        return Some(trimmed.to_uppercase());
    }

    let capture = |re: &Regex| -> u32 {
        re.captures(trimmed)
            .and_then(|c| c.get(1))
            .and_then(|m| m.as_str().parse().ok())
            .unwrap_or(0)
    };
    let hours = capture(&HOURS_RE);
    let minutes = capture(&MINUTES_RE);

    if hours == 0 && minutes == 0 {
        return None;
    }

    let mut iso = String::from("PT");
    if hours > 0 {
        iso.push_str(&format!("{}H", hours));
    }
    if minutes > 0 {
        iso.push_str(&format!("{}M", minutes));
    }
    Some(iso)
}

fn month_number(name: &str) -> Option<u32> {
    let prefix: String = name.chars().take(3).collect::<String>().to_lowercase();
    let month = match prefix.as_str() {
        "jan" => 1,
        "feb" => 2,
        "mar" => 3,
        "apr" => 4,
        "may" => 5,
        "jun" => 6,
        "jul" => 7,
        "aug" => 8,
        "sep" => 9,
        "oct" => 10,
        "nov" => 11,
        "dec" => 12,
        _ => return None,
    };
    Some(month)
}

/// Dates found in free text, in order of appearance.
///
/// Recognizes `2026-05-01`, `May 1, 2026` (and abbreviations/ordinals), and
/// US-style `05/01/2026`. Impossible dates are skipped.
pub fn extract_dates(text: &str) -> Vec<NaiveDate> {
    let mut found: Vec<(usize, NaiveDate)> = Vec::new();
    let num = |s: &str| s.parse::<u32>().ok();

    for c in ISO_DATE_RE.captures_iter(text) {
        let date = c[1]
            .parse::<i32>()
            .ok()
            .zip(num(&c[2]))
            .zip(num(&c[3]))
            .and_then(|((y, m), d)| NaiveDate::from_ymd_opt(y, m, d));
        if let (Some(date), Some(m)) = (date, c.get(0)) {
            found.push((m.start(), date));
        }
    }
    for c in NAMED_DATE_RE.captures_iter(text) {
        let date = month_number(&c[1])
            .zip(num(&c[2]))
            .zip(c[3].parse::<i32>().ok())
            .and_then(|((m, d), y)| NaiveDate::from_ymd_opt(y, m, d));
        if let (Some(date), Some(m)) = (date, c.get(0)) {
            found.push((m.start(), date));
        }
    }
    for c in NUMERIC_DATE_RE.captures_iter(text) {
        let date = num(&c[1])
            .zip(num(&c[2]))
            .zip(c[3].parse::<i32>().ok())
            .and_then(|((m, d), y)| NaiveDate::from_ymd_opt(y, m, d));
        if let (Some(date), Some(m)) = (date, c.get(0)) {
            found.push((m.start(), date));
        }
    }

    found.sort_by_key(|(pos, _)| *pos);
    found.into_iter().map(|(_, date)| date).collect()
}

/// A salary figure parsed from text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SalaryAmount {
    /// One figure, e.g. "$85,000"
    Single(f64),
    /// A range, e.g. "$80k - $100k"
    Range {
        /// Lower bound
        min: f64,
        /// Upper bound
        max: f64,
    },
}

fn salary_figure(digits: &str, thousands: bool) -> Option<f64> {
    let value = digits.replace(',', "").parse::<f64>().ok()?;
    Some(if thousands { value * 1000.0 } else { value })
}

/// Parses a salary as a single value or a min–max range. A `k` suffix
/// multiplies by 1000; on a range, a `k` on the upper bound alone also
/// applies to a lower bound below 1000 ("80-100k").
pub fn parse_salary(text: &str) -> Option<SalaryAmount> {
    let single = SALARY_SINGLE_RE.captures(text)?;
    let first_start = single.get(0)?.start();

    // A range only counts when it opens at the first figure in the text
    if let Some(c) = SALARY_RANGE_RE
        .captures(text)
        .filter(|c| c.get(0).is_some_and(|m| m.start() == first_start))
    {
        let upper_k = c.get(4).is_some();
        let lower_raw = salary_figure(&c[1], c.get(2).is_some())?;
        let lower = if upper_k && c.get(2).is_none() && lower_raw < 1000.0 {
            lower_raw * 1000.0
        } else {
            lower_raw
        };
        let upper = salary_figure(&c[3], upper_k)?;
        let (min, max) = if lower <= upper {
            (lower, upper)
        } else {
            (upper, lower)
        };
        return Some(SalaryAmount::Range { min, max });
    }

    salary_figure(&single[1], single.get(2).is_some()).map(SalaryAmount::Single)
}

/// Schema.org `unitText` for the pay period named in `text`. Defaults to YEAR.
pub fn salary_unit(text: &str) -> &'static str {
    if contains_any(text, &["/hr", "/hour", "per hour", "hourly", "an hour"]) {
        "HOUR"
    } else if contains_any(text, &["/day", "per day", "daily"]) {
        "DAY"
    } else if contains_any(text, &["/week", "per week", "weekly"]) {
        "WEEK"
    } else if contains_any(text, &["/month", "per month", "monthly", "/mo"]) {
        "MONTH"
    } else {
        "YEAR"
    }
}

/// Schema.org employment type from keyword scan. Defaults to FULL_TIME.
pub fn detect_employment_type(text: &str) -> &'static str {
    if PART_TIME_RE.is_match(text) {
        "PART_TIME"
    } else if CONTRACT_RE.is_match(text) {
        "CONTRACTOR"
    } else if TEMPORARY_RE.is_match(text) {
        "TEMPORARY"
    } else if INTERN_RE.is_match(text) {
        "INTERN"
    } else {
        "FULL_TIME"
    }
}

/// Whether a job description mentions remote work.
pub fn is_remote_job(text: &str) -> bool {
    contains_any(text, REMOTE_KEYWORDS)
}

/// Whether an event description points at an online venue.
pub fn is_virtual_event(text: &str) -> bool {
    contains_any(text, VIRTUAL_EVENT_KEYWORDS)
}
