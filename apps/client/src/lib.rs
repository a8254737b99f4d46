//! Session and data-fetch layer for the TalentReq recruiting front end.
//!
//! The UI proper (rendering, routing, animation) lives elsewhere and
//! consumes the values produced here: normalized [`models::Job`]s, talent
//! rosters, [`session::Navigation`] signals, and chat replies. This crate
//! owns the authentication lifecycle, the typed HTTP gateway over the three
//! backend hosts, the raw-to-domain job transform, and the screening
//! handoff that binds a selected job to its candidate roster and chat
//! session.
//!
//! Typical wiring:
//!
//! ```no_run
//! use std::sync::Arc;
//! use talentreq_client::{
//!     ApiGateway, Config, CredentialStore, ScreeningFlow, SessionStore,
//! };
//!
//! # async fn run() -> anyhow::Result<()> {
//! let config = Config::from_env()?;
//! let gateway = Arc::new(ApiGateway::new(&config)?);
//! let credentials = CredentialStore::new(&config.state_dir);
//! let mut session = SessionStore::open(gateway.clone(), credentials);
//! let screening = ScreeningFlow::new(gateway);
//!
//! session.login("casey@example.com", "hunter2").await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod errors;
pub mod feed;
pub mod gateway;
pub mod logging;
pub mod models;
pub mod screening;
pub mod session;

pub use config::Config;
pub use errors::ClientError;
pub use feed::JobsFeed;
pub use gateway::{ApiGateway, Gateway};
pub use models::{Job, Talent, TalentRoster, User};
pub use screening::{ScreeningFlow, ScreeningView};
pub use session::storage::CredentialStore;
pub use session::{AuthState, Navigation, SessionStore};
