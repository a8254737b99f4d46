//! Process-wide session state: authentication lifecycle plus the active
//! job-screening bindings (chat-session id and talent roster).
//!
//! The source of record is one `SessionStore` instance injected into every
//! consumer; there is no ambient global. Construction rehydrates the user
//! from the credential store; `close` tears down the in-memory state.

pub mod storage;

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::errors::ClientError;
use crate::gateway::Gateway;
use crate::models::job::Job;
use crate::models::talent::TalentRoster;
use crate::models::user::User;

use storage::CredentialStore;

const MSG_INVALID_CREDENTIALS: &str = "Invalid credentials";
const MSG_LOGIN_FAILED: &str = "Login failed";
const MSG_REGISTRATION_FAILED: &str = "Registration failed";
const DETAIL_ALREADY_REGISTERED: &str = "Email already registered";

/// Authentication state of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthState {
    Anonymous,
    Authenticated,
}

/// Where the caller should route the UI after a session operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// The login/registration entry screen.
    Entry,
    /// The job listing page.
    JobBoard,
    /// The screening view for a selected job.
    Screening { requisition_id: String },
}

/// The session store. Single instance per app run; all mutation goes through
/// `&mut self`, matching the single-threaded event-driven execution model.
pub struct SessionStore {
    gateway: Arc<dyn Gateway>,
    credentials: CredentialStore,
    user: Option<User>,
    session_id: Option<String>,
    roster: Option<TalentRoster>,
    /// Monotonic counter identifying the most recent job selection. Results
    /// of superseded selections are dropped at commit time instead of
    /// overwriting newer state.
    generation: u64,
}

impl SessionStore {
    /// Opens the session, rehydrating the user from persisted credentials.
    /// The access token's validity is not re-checked against the backend
    /// here; an expired token surfaces as an API error on first use.
    pub fn open(gateway: Arc<dyn Gateway>, credentials: CredentialStore) -> Self {
        let user = match credentials.user() {
            Ok(user) => user,
            Err(err) => {
                warn!(error = %err, "failed to read persisted user; starting anonymous");
                None
            }
        };
        if let Some(user) = &user {
            info!(email = %user.email, "session rehydrated from persisted user");
        }

        Self {
            gateway,
            credentials,
            user,
            session_id: None,
            roster: None,
            generation: 0,
        }
    }

    /// Tears down in-memory session state. Persisted credentials are left
    /// untouched; use `logout` to clear those.
    pub fn close(&mut self) {
        self.user = None;
        self.session_id = None;
        self.roster = None;
    }

    pub fn auth_state(&self) -> AuthState {
        if self.user.is_some() {
            AuthState::Authenticated
        } else {
            AuthState::Anonymous
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.auth_state() == AuthState::Authenticated
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// The chat-session id bound by the most recent screening handoff.
    pub fn session_id(&self) -> Option<&str> {
        self.session_id.as_deref()
    }

    /// The talent roster fetched for the most recently selected job.
    pub fn roster(&self) -> Option<&TalentRoster> {
        self.roster.as_ref()
    }

    pub fn access_token(&self) -> Result<Option<String>, ClientError> {
        self.credentials.access_token()
    }

    pub(crate) fn require_token(&self) -> Result<String, ClientError> {
        match self.access_token()? {
            Some(token) => Ok(token),
            None => {
                warn!("authorized operation attempted with no stored access token");
                Err(ClientError::Unauthenticated)
            }
        }
    }

    /// Exchanges credentials for an access token, persists it together with
    /// a minimal user record, and transitions to `Authenticated`.
    ///
    /// On failure the state stays `Anonymous` and the error carries the
    /// message to show at the form: the backend-supplied one when available,
    /// else a generic fallback.
    pub async fn login(&mut self, email: &str, password: &str) -> Result<Navigation, ClientError> {
        let token = match self.gateway.login(email, password).await {
            Ok(token) => token,
            Err(ClientError::Api { message, .. }) => {
                let message = if message.is_empty() {
                    MSG_INVALID_CREDENTIALS.to_string()
                } else {
                    message
                };
                return Err(ClientError::Auth(message));
            }
            Err(err) => {
                warn!(error = %err, "login request failed");
                return Err(ClientError::Auth(MSG_LOGIN_FAILED.to_string()));
            }
        };

        self.credentials.store_token(&token)?;
        let user = User::from_email(email);
        self.credentials.store_user(&user)?;
        info!(email = %user.email, "login succeeded");
        self.user = Some(user);

        Ok(Navigation::JobBoard)
    }

    /// Creates an account. Independent of the current auth state; on success
    /// the caller is routed back to the entry screen to log in.
    pub async fn register(
        &mut self,
        email: &str,
        password: &str,
        name: &str,
    ) -> Result<Navigation, ClientError> {
        match self.gateway.register(email, password, name).await {
            Ok(message) => {
                info!(email, message = %message, "registration succeeded");
                Ok(Navigation::Entry)
            }
            Err(ClientError::Api { message, .. }) if message == DETAIL_ALREADY_REGISTERED => {
                Err(ClientError::AlreadyRegistered)
            }
            Err(err) => {
                warn!(error = %err, "registration request failed");
                Err(ClientError::Auth(MSG_REGISTRATION_FAILED.to_string()))
            }
        }
    }

    /// Clears the in-memory user and the persisted credentials, both the
    /// user record and the access token.
    pub fn logout(&mut self) -> Result<Navigation, ClientError> {
        self.user = None;
        self.session_id = None;
        self.roster = None;
        self.credentials.clear()?;
        info!("logged out");
        Ok(Navigation::Entry)
    }

    /// Unconditionally overwrites the stored chat-session id.
    pub fn update_session_id(&mut self, value: impl Into<String>) {
        self.session_id = Some(value.into());
    }

    /// Fetches the talent roster for a job and binds it as the active
    /// screening. Requires a stored access token: without one this fails
    /// with `Unauthenticated` and mutates nothing.
    ///
    /// Returns `Ok(None)` when a newer selection superseded this one while
    /// the roster was in flight.
    pub async fn select_job(&mut self, job: &Job) -> Result<Option<Navigation>, ClientError> {
        let token = self.require_token()?;
        let generation = self.begin_selection();

        let roster = self
            .gateway
            .fetch_roster(&job.requisition_id, &token)
            .await?;

        if !self.commit_roster(generation, roster) {
            return Ok(None);
        }
        Ok(Some(Navigation::Screening {
            requisition_id: job.requisition_id.clone(),
        }))
    }

    /// Marks the start of a new job selection and returns its generation.
    /// Any selection begun earlier becomes stale from this point on.
    pub fn begin_selection(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    /// Commits a fetched roster if the originating selection is still the
    /// current one. Stale results are dropped, preserving the invariant
    /// that the session holds at most the newest job's roster.
    pub fn commit_roster(&mut self, generation: u64, roster: TalentRoster) -> bool {
        if generation != self.generation {
            debug!(
                generation,
                current = self.generation,
                "dropping roster from superseded selection"
            );
            return false;
        }
        self.roster = Some(roster);
        true
    }
}
