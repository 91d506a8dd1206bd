//! Text shown under a plant card.

use crate::types::Plant;
use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlantCaption {
    /// e.g. `Heart leaves`.
    pub leaves: String,
    /// e.g. `3 branches`.
    pub branches: String,
    /// `Today at 02:30 PM`, `Yesterday` or `Mar 5`; empty when the
    /// timestamp cannot be read.
    pub created: String,
}

impl PlantCaption {
    pub fn new<Tz: TimeZone>(plant: &Plant, now: &DateTime<Tz>) -> Self {
        Self {
            leaves: format!("{} leaves", capitalize(plant.leaf_type.as_str())),
            branches: format!("{} branches", plant.branches),
            created: relative_date(&plant.created_at, now),
        }
    }
}

fn capitalize(tag: &str) -> String {
    let mut chars = tag.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Parses a backend timestamp. Values without an offset are taken as UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

/// Formats `raw` relative to the calendar day of `now`, in `now`'s zone.
pub fn relative_date<Tz: TimeZone>(raw: &str, now: &DateTime<Tz>) -> String {
    let Some(created) = parse_timestamp(raw) else {
        if !raw.is_empty() {
            log::warn!("unreadable plant timestamp {raw:?}");
        }
        return String::new();
    };
    let created = created.with_timezone(&now.timezone());

    let today = now.date_naive();
    let day = created.date_naive();

    if day == today {
        format!("Today at {}", created.naive_local().format("%I:%M %p"))
    } else if today.pred_opt() == Some(day) {
        "Yesterday".to_owned()
    } else {
        created.naive_local().format("%b %-d").to_string()
    }
}
