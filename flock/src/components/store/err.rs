use thiserror::Error;

/// Failure of the backing store itself. These are transport and backend
/// failures; a keyed lookup that finds nothing is `Ok(None)`, never a
/// `StoreError`. The core surfaces these to the caller and never retries.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store unavailable: {0:#}")]
    Unavailable(#[source] anyhow::Error),

    #[error("store access denied: {0}")]
    AccessDenied(String),

    #[error("store request timed out")]
    Timeout,
}

impl StoreError {
    /// Returns true if the store could not be reached.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable(_))
    }

    /// Returns true if the backend gave up on the request.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout)
    }
}
