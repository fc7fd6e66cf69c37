//! Format hints for string values
//!
//! A detected format lets the rendering side pick a more specific widget
//! (date picker, email field, colour chooser) than a plain text box.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Detected string format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Format {
    /// Calendar date (YYYY-MM-DD)
    Date,
    /// Date and time, RFC 3339 or space separated
    DateTime,
    /// Time of day (HH:MM or HH:MM:SS)
    Time,
    Email,
    Uri,
    Uuid,
    /// Hex colour (#rgb or #rrggbb)
    Color,
    Ipv4,
}

impl Format {
    /// Name used in serialized metadata
    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Date => "date",
            Format::DateTime => "date-time",
            Format::Time => "time",
            Format::Email => "email",
            Format::Uri => "uri",
            Format::Uuid => "uuid",
            Format::Color => "color",
            Format::Ipv4 => "ipv4",
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap());

static URI_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(https?|ftp|file|mailto):(//)?[^\s/$.?#][^\s]*$").unwrap());

static COLOR_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#([0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").unwrap());

static IPV4_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^((25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\.){3}(25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)$",
    )
    .unwrap()
});

/// Detect the format of a string value
///
/// Dates and times are validated against the calendar, so `2024-02-30` is
/// not a date. Returns `None` for plain text, including otherwise
/// well-formed values padded with whitespace.
pub fn detect_format(value: &str) -> Option<Format> {
    if value.trim().is_empty() || value.trim() != value {
        return None;
    }

    if value.len() == 36 && Uuid::parse_str(value).is_ok() {
        return Some(Format::Uuid);
    }

    if is_date_time(value) {
        return Some(Format::DateTime);
    }

    if NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok() {
        return Some(Format::Date);
    }

    if NaiveTime::parse_from_str(value, "%H:%M:%S%.f").is_ok()
        || NaiveTime::parse_from_str(value, "%H:%M").is_ok()
    {
        return Some(Format::Time);
    }

    if EMAIL_REGEX.is_match(value) {
        return Some(Format::Email);
    }

    if URI_REGEX.is_match(value) {
        return Some(Format::Uri);
    }

    if COLOR_REGEX.is_match(value) {
        return Some(Format::Color);
    }

    if IPV4_REGEX.is_match(value) {
        return Some(Format::Ipv4);
    }

    None
}

fn is_date_time(value: &str) -> bool {
    DateTime::parse_from_rfc3339(value).is_ok()
        || NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f").is_ok()
        || NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S%.f").is_ok()
}
