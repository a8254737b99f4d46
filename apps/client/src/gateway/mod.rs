//! API Gateway: the single point of entry for all backend HTTP calls.
//!
//! The backend is split across three hosts (jobs catalog, auth/talents,
//! chat); all of them are reached through `ApiGateway`. Failures are never
//! retried here: transport errors, non-2xx statuses, and body-shape
//! mismatches each map to their own `ClientError` variant and are surfaced
//! to the caller unchanged.

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::json;
use tracing::debug;

pub mod raw;
pub mod transform;

use crate::config::Config;
use crate::errors::ClientError;
use crate::models::job::Job;
use crate::models::talent::TalentRoster;

use raw::{ApiErrorBody, ChatResponse, LoginResponse, RawJob, RawRosterResponse, RegisterResponse};

/// The gateway seam the session store and screening flow depend on.
/// Carried as `Arc<dyn Gateway>` so tests can substitute a canned backend.
///
/// Operations that need authorization take the bearer token explicitly; the
/// caller resolves it from the credential store and fails with
/// `Unauthenticated` before any request is issued.
#[async_trait]
pub trait Gateway: Send + Sync {
    /// Full job collection, normalized and sorted most-recent-first.
    async fn list_jobs(&self) -> Result<Vec<Job>, ClientError>;

    /// Server-side filtered jobs. Normalized but not re-sorted.
    async fn search_jobs(&self, query: &str) -> Result<Vec<Job>, ClientError>;

    /// Job description plus the chat-session token, folded into one `Job`.
    async fn job_detail(&self, requisition_id: &str, token: &str) -> Result<Job, ClientError>;

    /// The recommended-candidate roster for a job.
    async fn fetch_roster(
        &self,
        requisition_id: &str,
        token: &str,
    ) -> Result<TalentRoster, ClientError>;

    /// Exchanges credentials for an access token.
    async fn login(&self, email: &str, password: &str) -> Result<String, ClientError>;

    /// Creates an account; returns the backend confirmation message.
    async fn register(
        &self,
        email: &str,
        password: &str,
        name: &str,
    ) -> Result<String, ClientError>;

    /// Sends a chat query scoped to the given screening session.
    async fn chat(
        &self,
        token: &str,
        session_id: Option<&str>,
        query: &str,
    ) -> Result<String, ClientError>;
}

/// Reqwest-backed gateway over the three backend hosts.
pub struct ApiGateway {
    http: Client,
    jobs_url: String,
    auth_url: String,
    chat_url: String,
}

impl ApiGateway {
    pub fn new(config: &Config) -> Result<Self, ClientError> {
        let http = Client::builder().build()?;
        Ok(Self {
            http,
            jobs_url: config.jobs_url.trim_end_matches('/').to_string(),
            auth_url: config.auth_url.trim_end_matches('/').to_string(),
            chat_url: config.chat_url.trim_end_matches('/').to_string(),
        })
    }

    /// Reads the body, triages the status, and decodes into `T`.
    /// Non-2xx → `Api` with the extracted backend message; decode failure →
    /// `Schema`.
    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ClientError> {
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(ClientError::Api {
                status: status.as_u16(),
                message: extract_error_message(&body),
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl Gateway for ApiGateway {
    async fn list_jobs(&self) -> Result<Vec<Job>, ClientError> {
        let url = format!("{}/jobs", self.jobs_url);
        debug!(%url, "fetching job list");

        let response = self.http.get(&url).send().await?;
        let records: Vec<RawJob> = Self::decode(response).await?;

        let mut jobs: Vec<Job> = records
            .into_iter()
            .map(|raw| transform::normalize(raw, None))
            .collect();
        transform::sort_newest_first(&mut jobs);
        Ok(jobs)
    }

    async fn search_jobs(&self, query: &str) -> Result<Vec<Job>, ClientError> {
        let url = format!("{}/jobs", self.jobs_url);
        debug!(%url, query, "searching jobs");

        let response = self.http.get(&url).query(&[("q", query)]).send().await?;
        let records: Vec<RawJob> = Self::decode(response).await?;

        Ok(records
            .into_iter()
            .map(|raw| transform::normalize(raw, None))
            .collect())
    }

    async fn job_detail(&self, requisition_id: &str, token: &str) -> Result<Job, ClientError> {
        let url = format!("{}/jobs/{requisition_id}/talents", self.jobs_url);
        debug!(%url, "fetching job detail");

        let response = self.http.get(&url).bearer_auth(token).send().await?;
        let roster: RawRosterResponse = Self::decode(response).await?;

        Ok(transform::normalize(roster.job_desc, roster.session_id))
    }

    async fn fetch_roster(
        &self,
        requisition_id: &str,
        token: &str,
    ) -> Result<TalentRoster, ClientError> {
        let url = format!("{}/jobs/{requisition_id}/talents", self.auth_url);
        debug!(%url, "fetching talent roster");

        let response = self.http.get(&url).bearer_auth(token).send().await?;
        let roster: RawRosterResponse = Self::decode(response).await?;

        let session_id = roster.session_id;
        Ok(TalentRoster {
            job: transform::normalize(roster.job_desc, session_id.clone()),
            session_id,
            talents: roster.talents.message,
        })
    }

    async fn login(&self, email: &str, password: &str) -> Result<String, ClientError> {
        let url = format!("{}/login", self.auth_url);
        debug!(%url, email, "logging in");

        let response = self
            .http
            .post(&url)
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await?;
        let body: LoginResponse = Self::decode(response).await?;
        Ok(body.access_token)
    }

    async fn register(
        &self,
        email: &str,
        password: &str,
        name: &str,
    ) -> Result<String, ClientError> {
        let url = format!("{}/register", self.auth_url);
        debug!(%url, email, "registering account");

        let response = self
            .http
            .post(&url)
            .json(&json!({ "email": email, "password": password, "name": name }))
            .send()
            .await?;
        let body: RegisterResponse = Self::decode(response).await?;
        Ok(body.message)
    }

    async fn chat(
        &self,
        token: &str,
        session_id: Option<&str>,
        query: &str,
    ) -> Result<String, ClientError> {
        let url = format!("{}/chat", self.chat_url);
        debug!(%url, session_id, "sending chat query");

        let response = self
            .http
            .post(&url)
            .bearer_auth(token)
            .json(&json!({ "session_id": session_id, "query": query }))
            .send()
            .await?;
        let body: ChatResponse = Self::decode(response).await?;
        Ok(body.response)
    }
}

/// Pulls the human-readable message out of a backend error body. Falls back
/// to the raw body, then to a generic placeholder.
fn extract_error_message(body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<ApiErrorBody>(body) {
        if let Some(message) = parsed.detail.or(parsed.error_message) {
            return message;
        }
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "Unknown error".to_string()
    } else {
        trimmed.to_string()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_prefers_detail_field() {
        let message = extract_error_message(r#"{"detail": "Email already registered"}"#);
        assert_eq!(message, "Email already registered");
    }

    #[test]
    fn test_error_message_reads_login_error_key() {
        let message = extract_error_message(r#"{"error message": "Invalid credentials"}"#);
        assert_eq!(message, "Invalid credentials");
    }

    #[test]
    fn test_error_message_falls_back_to_raw_body() {
        assert_eq!(extract_error_message("upstream exploded"), "upstream exploded");
    }

    #[test]
    fn test_error_message_generic_when_body_empty() {
        assert_eq!(extract_error_message(""), "Unknown error");
        assert_eq!(extract_error_message("   "), "Unknown error");
    }

    #[test]
    fn test_gateway_trims_trailing_slashes() {
        let config = Config {
            jobs_url: "http://jobs.example/".to_string(),
            auth_url: "http://auth.example//".to_string(),
            chat_url: "http://chat.example".to_string(),
            state_dir: std::path::PathBuf::from(".talentreq"),
            rust_log: "info".to_string(),
        };
        let gateway = ApiGateway::new(&config).unwrap();
        assert_eq!(gateway.jobs_url, "http://jobs.example");
        assert_eq!(gateway.auth_url, "http://auth.example");
        assert_eq!(gateway.chat_url, "http://chat.example");
    }
}
