use rv_core::CycleId;
use rv_sync::SyncError;
use thiserror::Error;

use crate::Phase;

#[derive(Debug, Error)]
pub enum TransitError {
    #[error("only the coordinator of cycle {0} may operate the resource")]
    NotCoordinator(CycleId),

    #[error("cycle {cycle} cannot operate while the resource is {phase}")]
    NotReady { cycle: CycleId, phase: Phase },

    #[error("transit closed: {0}")]
    Closed(#[from] SyncError),
}

pub type TransitResult<T> = Result<T, TransitError>;
