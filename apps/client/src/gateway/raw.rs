//! Wire-shape structs for the backend payloads.
//!
//! Every body is decoded into one of these at the gateway boundary; a shape
//! mismatch surfaces as `ClientError::Schema` instead of flowing untyped
//! into the rest of the crate. Optional fields default rather than fail;
//! the domain transform supplies the stated fallbacks.

use serde::Deserialize;

use crate::models::job::DerivedInfo;
use crate::models::talent::Talent;

/// A raw job record as the jobs catalog returns it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawJob {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub requisition_id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub addresses: Vec<String>,
    #[serde(default)]
    pub application_info: RawApplicationInfo,
    #[serde(default)]
    pub custom_attributes: RawCustomAttributes,
    #[serde(default)]
    pub company_display_name: String,
    #[serde(default)]
    pub derived_info: DerivedInfo,
    /// Epoch seconds; may arrive fractional.
    #[serde(default)]
    pub posting_publish_time: f64,
    #[serde(default)]
    pub posting_expire_time: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawApplicationInfo {
    #[serde(default)]
    pub uris: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawCustomAttributes {
    #[serde(default)]
    pub experience_level: Vec<String>,
    #[serde(default)]
    pub responsibilities: Option<ListOrString>,
    #[serde(default)]
    pub preferred_qualifications: Option<ListOrString>,
    #[serde(default)]
    pub minimum_qualifications: Option<ListOrString>,
    /// Shape varies across backend versions; interpreted only by the
    /// location resolution policy.
    #[serde(default)]
    pub location: serde_json::Value,
}

/// The backend sends qualification fields either pre-split or as a single
/// newline-delimited string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ListOrString {
    List(Vec<String>),
    Text(String),
}

/// Response of `GET /jobs/{id}/talents`: the job description, the opaque
/// chat-session id, and the recommended-candidate envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRosterResponse {
    #[serde(rename = "jobDesc")]
    pub job_desc: RawJob,
    #[serde(default)]
    pub session_id: Option<String>,
    #[serde(default)]
    pub talents: RawTalentEnvelope,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawTalentEnvelope {
    #[serde(rename = "Message", default)]
    pub message: Vec<Talent>,
}

#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
}

#[derive(Debug, Deserialize)]
pub struct RegisterResponse {
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}

/// Error body shapes the backend uses: `detail` on register failures,
/// `"error message"` on login failures.
#[derive(Debug, Default, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub detail: Option<String>,
    #[serde(rename = "error message", default)]
    pub error_message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_or_string_accepts_list() {
        let parsed: ListOrString = serde_json::from_str(r#"["a", "b"]"#).unwrap();
        assert!(matches!(parsed, ListOrString::List(v) if v == vec!["a", "b"]));
    }

    #[test]
    fn test_list_or_string_accepts_string() {
        let parsed: ListOrString = serde_json::from_str(r#""a\nb""#).unwrap();
        assert!(matches!(parsed, ListOrString::Text(s) if s == "a\nb"));
    }

    #[test]
    fn test_raw_job_decodes_with_all_fields_absent() {
        let raw: RawJob = serde_json::from_str("{}").unwrap();
        assert!(raw.requisition_id.is_empty());
        assert!(raw.custom_attributes.responsibilities.is_none());
        assert!(raw.derived_info.locations.is_empty());
        assert_eq!(raw.posting_publish_time, 0.0);
    }

    #[test]
    fn test_roster_envelope_decodes_message_key() {
        let body = r#"{
            "jobDesc": { "requisition_id": "R-1", "title": "Engineer" },
            "session_id": "sess-42",
            "talents": { "Message": [
                { "employee_id": 7, "employee_name": "Sam", "match_score": 0.91 }
            ] }
        }"#;
        let roster: RawRosterResponse = serde_json::from_str(body).unwrap();
        assert_eq!(roster.job_desc.requisition_id, "R-1");
        assert_eq!(roster.session_id.as_deref(), Some("sess-42"));
        assert_eq!(roster.talents.message.len(), 1);
        assert_eq!(roster.talents.message[0].employee_name, "Sam");
        assert_eq!(roster.talents.message[0].match_score, 0.91);
    }

    #[test]
    fn test_roster_without_job_desc_is_a_schema_error() {
        let body = r#"{ "session_id": "sess-42" }"#;
        assert!(serde_json::from_str::<RawRosterResponse>(body).is_err());
    }

    #[test]
    fn test_error_body_reads_both_keys() {
        let register: ApiErrorBody =
            serde_json::from_str(r#"{"detail": "Email already registered"}"#).unwrap();
        assert_eq!(register.detail.as_deref(), Some("Email already registered"));

        let login: ApiErrorBody =
            serde_json::from_str(r#"{"error message": "Invalid credentials"}"#).unwrap();
        assert_eq!(login.error_message.as_deref(), Some("Invalid credentials"));
    }
}
