//! Domain-normalized job requisition, the shape the UI consumes.
//!
//! Raw backend records are converted into this shape by
//! `gateway::transform::normalize`; the list-or-string custom attributes are
//! always normalized to lists before reaching a consumer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A recruiting requisition with description, qualifications, and location.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    pub name: String,
    pub company: String,
    pub requisition_id: String,
    pub title: String,
    pub description: String,
    pub addresses: Vec<String>,
    pub application_info: ApplicationInfo,
    pub custom_attributes: CustomAttributes,
    pub company_display_name: String,
    pub derived_info: DerivedInfo,
    /// Display location resolved from derived postal info, the custom
    /// location attribute, or the literal `"Remote"`.
    pub location: String,
    pub posting_date: DateTime<Utc>,
    pub expiry_date: DateTime<Utc>,
    /// Opaque chat-session token forwarded from a detail fetch.
    /// `None` on list/search results.
    pub session: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApplicationInfo {
    #[serde(default)]
    pub uris: Vec<String>,
}

/// Custom requisition attributes. Every list field is guaranteed non-null:
/// absent backend values become empty lists.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomAttributes {
    pub experience_level: Vec<String>,
    pub responsibilities: Vec<String>,
    pub preferred_qualifications: Vec<String>,
    pub minimum_qualifications: Vec<String>,
    /// Raw location attribute; the backend sends varying shapes here, so the
    /// value is carried as-is and only interpreted by the location
    /// resolution policy.
    pub location: serde_json::Value,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DerivedInfo {
    #[serde(default)]
    pub locations: Vec<JobLocation>,
    #[serde(default)]
    pub job_categories: Vec<i64>,
}

/// Postal/geo record derived by the backend for a requisition.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobLocation {
    #[serde(default)]
    pub location_type: i64,
    #[serde(default)]
    pub postal_address: PostalAddress,
    #[serde(default)]
    pub lat_lng: LatLng,
    #[serde(default)]
    pub radius_miles: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostalAddress {
    #[serde(default)]
    pub region_code: String,
    #[serde(default)]
    pub postal_code: String,
    #[serde(default)]
    pub administrative_area: String,
    #[serde(default)]
    pub locality: String,
    #[serde(default)]
    pub address_lines: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct LatLng {
    #[serde(default)]
    pub latitude: f64,
    #[serde(default)]
    pub longitude: f64,
}
