//! The authenticated session

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use domain_invoice::ports::{AuthPort, User};

use crate::error::CacheError;

/// An active session: the account plus the bearer token sent with every
/// collaborator request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user: User,
    pub token: String,
}

/// Holds the current session, if any
///
/// Caches are scoped to a session; callers clear them alongside
/// [`SessionState::logout`] so no records outlive the account they belong to.
pub struct SessionState {
    port: Arc<dyn AuthPort>,
    current: Option<Session>,
}

impl SessionState {
    pub fn new(port: Arc<dyn AuthPort>) -> Self {
        Self {
            port,
            current: None,
        }
    }

    /// Exchanges credentials for a session
    pub async fn login(&mut self, email: &str, password: &str) -> Result<Session, CacheError> {
        let auth = self.port.login(email, password).await?;
        info!(user = %auth.user.email, "session established");
        let session = Session {
            user: auth.user,
            token: auth.token,
        };
        self.current = Some(session.clone());
        Ok(session)
    }

    /// Restores a previously persisted session without a fresh login
    pub fn restore(&mut self, session: Session) {
        self.current = Some(session);
    }

    pub fn logout(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<&Session> {
        self.current.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    /// The active session, or [`CacheError::NotAuthenticated`]
    pub fn require(&self) -> Result<&Session, CacheError> {
        self.current.as_ref().ok_or(CacheError::NotAuthenticated)
    }
}
