use std::path::PathBuf;

use anyhow::{Context, Result};

/// Client configuration loaded from environment variables.
///
/// The backend is split across three hosts (jobs catalog, auth/talents,
/// chat), so each base URL is configured separately.
#[derive(Debug, Clone)]
pub struct Config {
    pub jobs_url: String,
    pub auth_url: String,
    pub chat_url: String,
    /// Directory holding the persisted credential file.
    pub state_dir: PathBuf,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            jobs_url: require_env("TALENTREQ_JOBS_URL")?,
            auth_url: require_env("TALENTREQ_AUTH_URL")?,
            chat_url: require_env("TALENTREQ_CHAT_URL")?,
            state_dir: std::env::var("TALENTREQ_STATE_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(".talentreq")),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
