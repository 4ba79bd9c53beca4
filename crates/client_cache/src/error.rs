//! Cache-layer errors

use thiserror::Error;

use core_kernel::PortError;

/// Errors surfaced by cache mutations
#[derive(Debug, Error)]
pub enum CacheError {
    /// The operation needs an authenticated session and none is active
    #[error("Not authenticated")]
    NotAuthenticated,

    /// The remote collaborator rejected or failed the operation
    #[error(transparent)]
    Port(#[from] PortError),
}

impl CacheError {
    /// True when retrying later could plausibly succeed
    pub fn is_transient(&self) -> bool {
        match self {
            CacheError::NotAuthenticated => false,
            CacheError::Port(err) => err.is_transient(),
        }
    }
}
