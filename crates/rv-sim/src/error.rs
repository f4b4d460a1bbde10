use std::io;

use rv_core::RvError;
use rv_quota::QuotaError;
use rv_sync::SyncError;
use rv_transit::TransitError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Core(#[from] RvError),

    #[error(transparent)]
    Sync(#[from] SyncError),

    #[error(transparent)]
    Quota(#[from] QuotaError),

    #[error(transparent)]
    Transit(#[from] TransitError),

    #[error("failed to spawn thread `{name}`: {source}")]
    Spawn {
        name:   String,
        #[source]
        source: io::Error,
    },

    #[error("actor thread `{0}` panicked")]
    ActorPanicked(String),
}

pub type SimResult<T> = Result<T, SimError>;
