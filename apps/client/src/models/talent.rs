use serde::{Deserialize, Serialize};

use crate::models::job::Job;

/// A person recommended as a match for a job. Owned by the roster response
/// for that job; not persisted beyond the current screening view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Talent {
    pub employee_id: i64,
    #[serde(default)]
    pub employee_name: String,
    #[serde(default)]
    pub employee_department: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub education: String,
    /// Years of experience.
    #[serde(default)]
    pub experience: f64,
    /// Comma-joined skill list, as the backend sends it.
    #[serde(default)]
    pub skills: String,
    #[serde(default)]
    pub skill_area: String,
    #[serde(default)]
    pub professional_summary: String,
    #[serde(default)]
    pub certifications: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub email_id: String,
    #[serde(default)]
    pub current_availability: String,
    pub match_score: f64,
}

/// The talent roster fetched for a selected job: the normalized job
/// description, the chat-session id bound to this screening, and the
/// recommended candidates.
#[derive(Debug, Clone)]
pub struct TalentRoster {
    pub job: Job,
    pub session_id: Option<String>,
    pub talents: Vec<Talent>,
}
