// SPDX-License-Identifier: MPL-2.0
//! Serde adapter for `createdAt`.
//!
//! Accepted forms:
//! - RFC 3339 with offset (`2025-03-01T10:15:30Z`, `...+09:00`)
//! - zone-less ISO local date-time (`2025-03-01T10:15:30.123`, `2025-03-01T10:15`),
//!   interpreted in the local time zone
//! - epoch milliseconds as a JSON number

use chrono::{DateTime, Local, NaiveDateTime, Utc};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serializer};

pub fn serialize<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&value.to_rfc3339())
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Millis(i64),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Text(text) => {
            parse(&text).ok_or_else(|| D::Error::custom(format!("invalid timestamp: {text}")))
        }
        Raw::Millis(ms) => DateTime::from_timestamp_millis(ms)
            .ok_or_else(|| D::Error::custom(format!("timestamp out of range: {ms}"))),
    }
}

/// Parses any of the accepted textual forms.
pub fn parse(text: &str) -> Option<DateTime<Utc>> {
    let text = text.trim();
    if let Ok(with_offset) = DateTime::parse_from_rfc3339(text) {
        return Some(with_offset.with_timezone(&Utc));
    }

    let naive = text
        .parse::<NaiveDateTime>()
        .or_else(|_| NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M"))
        .ok()?;

    naive
        .and_local_timezone(Local)
        .earliest()
        .map(|local| local.with_timezone(&Utc))
}
