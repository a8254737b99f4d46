//! Screening handoff: the sequence binding job selection to the talent
//! roster and the chat session.
//!
//! A screening view for a job is only produced after the detail fetch has
//! returned (establishing the chat-session id) and the roster has been
//! fetched and committed. Results of a selection superseded by a newer one
//! are dropped rather than committed.

use std::sync::Arc;

use tracing::debug;

use crate::errors::ClientError;
use crate::gateway::Gateway;
use crate::models::job::Job;
use crate::models::talent::Talent;
use crate::session::SessionStore;

/// Everything the screening page renders: the detailed job description and
/// the recommended candidates.
#[derive(Debug, Clone)]
pub struct ScreeningView {
    pub job: Job,
    pub talents: Vec<Talent>,
}

/// Orchestrates the job → roster → chat-session handoff over an injected
/// gateway and session store.
pub struct ScreeningFlow {
    gateway: Arc<dyn Gateway>,
}

impl ScreeningFlow {
    pub fn new(gateway: Arc<dyn Gateway>) -> Self {
        Self { gateway }
    }

    /// Opens the screening view for a job.
    ///
    /// Fetches the job detail (which carries the chat-session token), then
    /// the talent roster, and commits both to the session. Requires a stored
    /// access token. Returns `Ok(None)` when a newer selection superseded
    /// this one before its results could be committed.
    pub async fn open_job(
        &self,
        session: &mut SessionStore,
        job: &Job,
    ) -> Result<Option<ScreeningView>, ClientError> {
        let token = session.require_token()?;
        let generation = session.begin_selection();

        let detail = self
            .gateway
            .job_detail(&job.requisition_id, &token)
            .await?;
        let roster = self
            .gateway
            .fetch_roster(&job.requisition_id, &token)
            .await?;

        let talents = roster.talents.clone();
        if !session.commit_roster(generation, roster) {
            debug!(requisition_id = %job.requisition_id, "screening handoff superseded");
            return Ok(None);
        }
        if let Some(chat_session) = detail.session.clone() {
            session.update_session_id(chat_session);
        }

        Ok(Some(ScreeningView {
            job: detail,
            talents,
        }))
    }

    /// Sends a chat query. The session id is read from the store at send
    /// time, so the query is scoped to whichever job was most recently
    /// opened. Requires a stored access token.
    pub async fn send_chat(
        &self,
        session: &SessionStore,
        query: &str,
    ) -> Result<String, ClientError> {
        let token = session.require_token()?;
        self.gateway.chat(&token, session.session_id(), query).await
    }
}
