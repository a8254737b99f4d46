//! Conversion of raw backend job records into the normalized domain shape.
//!
//! Pure functions, no I/O. Missing optional fields never error; each has a
//! stated default (empty list, empty string, or `"Remote"`).

use chrono::{DateTime, TimeZone, Utc};

use crate::gateway::raw::{ListOrString, RawJob};
use crate::models::job::{ApplicationInfo, CustomAttributes, Job};

/// Converts a raw job record into the domain `Job`, optionally folding in
/// the chat-session token returned by a detail fetch.
pub fn normalize(raw: RawJob, session: Option<String>) -> Job {
    let location = resolve_location(&raw);

    Job {
        name: raw.name,
        company: raw.company,
        requisition_id: raw.requisition_id,
        title: raw.title,
        description: raw.description,
        addresses: raw.addresses,
        application_info: ApplicationInfo {
            uris: raw.application_info.uris,
        },
        custom_attributes: CustomAttributes {
            experience_level: raw.custom_attributes.experience_level,
            responsibilities: normalize_list(raw.custom_attributes.responsibilities),
            preferred_qualifications: normalize_list(raw.custom_attributes.preferred_qualifications),
            minimum_qualifications: normalize_list(raw.custom_attributes.minimum_qualifications),
            location: raw.custom_attributes.location,
        },
        company_display_name: raw.company_display_name,
        derived_info: raw.derived_info,
        location,
        posting_date: epoch_seconds_to_utc(raw.posting_publish_time),
        expiry_date: epoch_seconds_to_utc(raw.posting_expire_time),
        session,
    }
}

/// Sorts jobs most-recent-first by posting date. The sort is stable, so
/// jobs with equal timestamps keep their backend order.
pub fn sort_newest_first(jobs: &mut [Job]) {
    jobs.sort_by(|a, b| b.posting_date.cmp(&a.posting_date));
}

/// Display-location policy, first match wins:
/// 1. first derived postal address, formatted `"{locality}, {administrative_area}"`
/// 2. first element of the custom location attribute, when it is a list
/// 3. the literal `"Remote"`
fn resolve_location(raw: &RawJob) -> String {
    if let Some(derived) = raw.derived_info.locations.first() {
        let postal = &derived.postal_address;
        return format!("{}, {}", postal.locality, postal.administrative_area);
    }

    if let Some(first) = raw
        .custom_attributes
        .location
        .as_array()
        .and_then(|list| list.first())
        .and_then(|value| value.as_str())
    {
        return first.to_string();
    }

    "Remote".to_string()
}

/// List-or-string normalization: lists pass through unchanged, strings are
/// split on newline with empty segments dropped, absent values become empty.
fn normalize_list(value: Option<ListOrString>) -> Vec<String> {
    match value {
        Some(ListOrString::List(items)) => items,
        Some(ListOrString::Text(text)) => text
            .split('\n')
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect(),
        None => Vec::new(),
    }
}

/// Backend timestamps are epoch seconds; the domain carries milliseconds
/// precision. No timezone adjustment.
fn epoch_seconds_to_utc(seconds: f64) -> DateTime<Utc> {
    let millis = (seconds * 1000.0) as i64;
    Utc.timestamp_millis_opt(millis)
        .single()
        .unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
}
