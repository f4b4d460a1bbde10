use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SyncError {
    /// The primitive was closed while the caller was (or would be) blocked.
    #[error("{0} closed")]
    Closed(&'static str),
}

pub type SyncResult<T> = Result<T, SyncError>;
