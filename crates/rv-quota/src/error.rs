use rv_sync::SyncError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum QuotaError {
    #[error("invalid quota policy: {0}")]
    Policy(String),

    #[error("matcher closed before a group formed: {0}")]
    Closed(#[from] SyncError),
}

pub type QuotaResult<T> = Result<T, QuotaError>;
