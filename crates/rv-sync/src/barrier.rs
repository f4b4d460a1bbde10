//! `RendezvousBarrier` — wait until exactly K parties have arrived, then
//! release all K together.
//!
//! # Reuse
//!
//! A barrier cycle has two halves:
//!
//! ```text
//!   gathering   arrived: 0 → K      (K-th arrival flips the generation)
//!   departing   departing: K → 0    (each released party counts itself out)
//! ```
//!
//! Arrivals for the next cycle block until `departing` is back to zero, so a
//! fast thread can never lap the barrier and be counted twice in one cycle.

use std::sync::{Condvar, Mutex};

use tracing::trace;

use crate::guard::{lock, wait_while};
use crate::{SyncError, SyncResult};

struct BarrierState {
    arrived:    usize,
    departing:  usize,
    generation: u64,
    closed:     bool,
}

/// A reusable K-party barrier.
pub struct RendezvousBarrier {
    parties:  usize,
    state:    Mutex<BarrierState>,
    released: Condvar,
    drained:  Condvar,
}

impl RendezvousBarrier {
    /// # Panics
    /// Panics if `parties` is zero.
    pub fn new(parties: usize) -> Self {
        assert!(parties > 0, "a barrier needs at least one party");
        Self {
            parties,
            state: Mutex::new(BarrierState {
                arrived:    0,
                departing:  0,
                generation: 0,
                closed:     false,
            }),
            released: Condvar::new(),
            drained:  Condvar::new(),
        }
    }

    /// Arrive and block until the cycle completes.
    ///
    /// Returns `Ok(true)` to exactly one caller per cycle (the one whose
    /// arrival made the K-th party) and `Ok(false)` to the others.
    ///
    /// Returns `Err(SyncError::Closed)` if [`close`](Self::close) is called
    /// before this caller's cycle is released.
    pub fn arrive(&self) -> SyncResult<bool> {
        let state = lock(&self.state);
        let mut state = wait_while(&self.drained, state, |s| s.departing > 0 && !s.closed);
        if state.closed {
            return Err(SyncError::Closed("barrier"));
        }

        state.arrived += 1;
        let leader = state.arrived == self.parties;
        if leader {
            state.arrived = 0;
            state.departing = self.parties;
            state.generation += 1;
            trace!(parties = self.parties, generation = state.generation, "barrier released");
            self.released.notify_all();
        } else {
            let generation = state.generation;
            state = wait_while(&self.released, state, |s| s.generation == generation && !s.closed);
            if state.generation == generation {
                state.arrived -= 1;
                return Err(SyncError::Closed("barrier"));
            }
        }

        state.departing -= 1;
        if state.departing == 0 {
            self.drained.notify_all();
        }
        Ok(leader)
    }

    /// Fail every blocked and future [`arrive`](Self::arrive).
    ///
    /// Parties of an already-released cycle still leave normally.
    pub fn close(&self) {
        lock(&self.state).closed = true;
        self.released.notify_all();
        self.drained.notify_all();
    }

    #[inline]
    pub fn parties(&self) -> usize {
        self.parties
    }

    /// Parties currently gathered for the next release.
    pub fn waiting(&self) -> usize {
        lock(&self.state).arrived
    }

    /// Number of completed releases.
    pub fn cycles(&self) -> u64 {
        lock(&self.state).generation
    }
}
