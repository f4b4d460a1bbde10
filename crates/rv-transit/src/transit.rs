//! `TwoPhaseTransit` — an explicit phase machine bracketed by a board
//! barrier and a disembark barrier.

use std::sync::{Condvar, Mutex};

use rv_core::CycleId;
use rv_quota::Assignment;
use rv_sync::guard::{lock, wait_while};
use rv_sync::{RendezvousBarrier, SyncError};
use tracing::{debug, trace};

use crate::{Phase, TransitError, TransitResult};

struct TransitState {
    phase:     Phase,
    occupancy: usize,
    /// The only cycle currently allowed aboard.
    serving:   CycleId,
    completed: u64,
    closed:    bool,
}

/// A shared resource that carries exactly `capacity` actors per cycle.
///
/// Every member of a released group calls [`board`](Self::board) and then
/// [`disembark`](Self::disembark); the group's coordinator additionally
/// calls [`operate`](Self::operate) in between.  Cycles are served in
/// [`CycleId`] order starting from [`CycleId::FIRST`], matching the order in
/// which a `QuotaMatcher` hands them out.
pub struct TwoPhaseTransit {
    name:      &'static str,
    capacity:  usize,
    state:     Mutex<TransitState>,
    /// Signalled when `serving` advances.
    turn:      Condvar,
    /// Signalled on `Full → Draining`.
    operated:  Condvar,
    boarded:   RendezvousBarrier,
    landed:    RendezvousBarrier,
}

impl TwoPhaseTransit {
    /// # Panics
    /// Panics if `capacity` is zero.
    pub fn new(name: &'static str, capacity: usize) -> Self {
        assert!(capacity > 0, "transit `{name}` needs a capacity of at least one");
        Self {
            name,
            capacity,
            state: Mutex::new(TransitState {
                phase:     Phase::Empty,
                occupancy: 0,
                serving:   CycleId::FIRST,
                completed: 0,
                closed:    false,
            }),
            turn:     Condvar::new(),
            operated: Condvar::new(),
            boarded:  RendezvousBarrier::new(capacity),
            landed:   RendezvousBarrier::new(capacity),
        }
    }

    /// Take a seat for `assignment`'s cycle and block until the whole group
    /// is aboard.
    ///
    /// Waits first for the transit to be serving this cycle.  Returns the
    /// 1-based seat number in boarding order.
    pub fn board(&self, assignment: &Assignment) -> TransitResult<usize> {
        self.board_with(assignment, |_| ())
    }

    /// [`board`](Self::board), calling `seated` with the seat number once
    /// the seat is taken and before waiting for the rest of the group.
    ///
    /// Everything `seated` does happens-before any member of the group
    /// returns from boarding.
    pub fn board_with(&self, assignment: &Assignment, seated: impl FnOnce(usize)) -> TransitResult<usize> {
        let cycle = assignment.cycle();
        let state = lock(&self.state);
        let mut state = wait_while(&self.turn, state, |s| {
            !s.closed && !(s.serving == cycle && s.phase.admits_boarding())
        });
        if state.closed {
            return Err(SyncError::Closed(self.name).into());
        }

        state.occupancy += 1;
        let seat = state.occupancy;
        state.phase = if seat == self.capacity { Phase::Full } else { Phase::Filling };
        trace!(transit = self.name, %cycle, seat, phase = %state.phase, "boarded");
        drop(state);

        seated(seat);
        self.boarded.arrive()?;
        Ok(seat)
    }

    /// Run the privileged action `f` for a full group and open the
    /// disembark phase.
    ///
    /// Only the cycle's coordinator may call this, once, after its own
    /// [`board`](Self::board) has returned.  `f` runs without any lock held.
    pub fn operate<R>(&self, assignment: &Assignment, f: impl FnOnce() -> R) -> TransitResult<R> {
        let cycle = assignment.cycle();
        if !assignment.is_coordinator() {
            return Err(TransitError::NotCoordinator(cycle));
        }
        {
            let state = lock(&self.state);
            if state.closed {
                return Err(SyncError::Closed(self.name).into());
            }
            if state.serving != cycle || state.phase != Phase::Full {
                return Err(TransitError::NotReady { cycle, phase: state.phase });
            }
        }

        let out = f();

        let mut state = lock(&self.state);
        state.phase = Phase::Draining;
        debug!(transit = self.name, %cycle, "operated");
        drop(state);
        self.operated.notify_all();
        Ok(out)
    }

    /// Get off once the coordinator has operated, and block until the whole
    /// group is off.
    ///
    /// The coordinator's call then resets the transit to `Empty` and starts
    /// serving the next cycle.
    pub fn disembark(&self, assignment: &Assignment) -> TransitResult<()> {
        self.disembark_with(assignment, || ())
    }

    /// [`disembark`](Self::disembark), calling `stepped_off` after leaving
    /// the seat and before waiting for the rest of the group.
    ///
    /// Everything `stepped_off` does happens-before the next cycle boards.
    pub fn disembark_with(&self, assignment: &Assignment, stepped_off: impl FnOnce()) -> TransitResult<()> {
        let cycle = assignment.cycle();
        let state = lock(&self.state);
        let mut state = wait_while(&self.operated, state, |s| !s.closed && s.phase == Phase::Full);
        if state.closed {
            return Err(SyncError::Closed(self.name).into());
        }
        assert!(
            state.serving == cycle && state.phase == Phase::Draining,
            "cycle {cycle} disembarking from `{}` while serving {} ({})",
            self.name,
            state.serving,
            state.phase
        );
        state.occupancy -= 1;
        drop(state);

        stepped_off();
        self.landed.arrive()?;

        if assignment.is_coordinator() {
            let mut state = lock(&self.state);
            debug_assert_eq!(state.occupancy, 0);
            state.phase = Phase::Empty;
            state.serving = state.serving.next();
            state.completed += 1;
            debug!(transit = self.name, %cycle, next = %state.serving, "cycle drained");
            drop(state);
            self.turn.notify_all();
        }
        Ok(())
    }

    /// Fail every blocked and future call.
    pub fn close(&self) {
        lock(&self.state).closed = true;
        self.turn.notify_all();
        self.operated.notify_all();
        self.boarded.close();
        self.landed.close();
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn phase(&self) -> Phase {
        lock(&self.state).phase
    }

    pub fn occupancy(&self) -> usize {
        lock(&self.state).occupancy
    }

    /// The cycle currently allowed to board (the boat counter).
    pub fn serving(&self) -> CycleId {
        lock(&self.state).serving
    }

    /// Number of fully drained cycles.
    pub fn completed(&self) -> u64 {
        lock(&self.state).completed
    }
}
