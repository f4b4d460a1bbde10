//! `QuotaMatcher` — pending counters, the coordination lock, and one ticket
//! signal per class.

use std::sync::{Condvar, Mutex};

use rv_core::{ActorClass, CycleId};
use rv_sync::guard::{lock, wait_while};
use rv_sync::{SyncError, TicketSignal};
use tracing::{debug, trace, warn};

use crate::{Assignment, ClassCounts, QuotaPolicy, QuotaResult, RoleAssigner, Ticket, Wakeups};

struct MatchState<C: ActorClass> {
    pending:    ClassCounts<C>,
    roles:      RoleAssigner,
    /// Every `register` call that was counted.
    registered: usize,
    closed:     bool,
}

/// Outcome of a non-blocking [`QuotaMatcher::register`].
#[derive(Debug)]
pub enum Registration<C: ActorClass> {
    /// This arrival completed a group.  The caller is its coordinator; the
    /// listed wake-ups (which include the caller) were committed.
    Released {
        assignment: Assignment,
        wakeups:    Wakeups<C>,
    },
    /// No group yet.  The caller must [`await_turn`](QuotaMatcher::await_turn)
    /// on its class signal.
    Queued,
}

/// Stateful group former for one shared resource.
///
/// Share it between actor threads with an `Arc`.
pub struct QuotaMatcher<C: ActorClass, P: QuotaPolicy<C>> {
    policy:  P,
    state:   Mutex<MatchState<C>>,
    /// Signalled on every counted registration and on close.
    settled: Condvar,
    /// One FIFO signal per class, indexed by `ActorClass::index`.
    signals: Vec<TicketSignal<Ticket>>,
}

impl<C: ActorClass, P: QuotaPolicy<C>> QuotaMatcher<C, P> {
    pub fn new(policy: P) -> Self {
        Self {
            policy,
            state: Mutex::new(MatchState {
                pending:    ClassCounts::zero(),
                roles:      RoleAssigner::new(),
                registered: 0,
                closed:     false,
            }),
            settled: Condvar::new(),
            signals: C::ALL.iter().map(|c| TicketSignal::new(c.label())).collect(),
        }
    }

    /// Count one arrival of `class` and release a group if it completes one.
    ///
    /// The whole increment → check → decrement → post sequence runs under
    /// the coordination lock, and the lock is dropped before returning on
    /// both branches, so a coordinator never blocks while holding it.
    pub fn register(&self, class: C) -> QuotaResult<Registration<C>> {
        let mut state = lock(&self.state);
        if state.closed {
            return Err(SyncError::Closed("matcher").into());
        }

        state.pending.add(class, 1);
        state.registered += 1;
        self.settled.notify_all();
        trace!(%class, pending = ?state.pending, "registered");

        let Some(wakeups) = self.policy.release(&state.pending, class) else {
            return Ok(Registration::Queued);
        };
        assert_eq!(
            wakeups.total(),
            self.policy.group_size(),
            "policy released {wakeups}, expected a group of {}",
            self.policy.group_size()
        );

        state.pending.consume(&wakeups);
        let (assignment, members) = state.roles.open_cycle(&wakeups, class);
        for (member_class, n) in members {
            self.signals[member_class.index()].post_many(std::iter::repeat_n(assignment.ticket, n));
        }
        debug!(cycle = %assignment.cycle(), group = %wakeups, coordinator = %class, "group released");

        Ok(Registration::Released { assignment, wakeups })
    }

    /// Block on `class`'s signal until a released group claims this caller.
    pub fn await_turn(&self, class: C) -> QuotaResult<Assignment> {
        let ticket = self.signals[class.index()].wait()?;
        Ok(Assignment::member(ticket))
    }

    /// [`register`](Self::register), then [`await_turn`](Self::await_turn)
    /// if no group was released.
    pub fn arrive(&self, class: C) -> QuotaResult<Assignment> {
        match self.register(class)? {
            Registration::Released { assignment, .. } => Ok(assignment),
            Registration::Queued => self.await_turn(class),
        }
    }

    /// Refuse new registrations and fail every actor still waiting for a
    /// group.  Tickets already posted are still delivered.
    pub fn close(&self) {
        let mut state = lock(&self.state);
        if !state.closed && !state.pending.is_empty() {
            warn!(pending = ?state.pending, "closing matcher with actors still waiting");
        }
        state.closed = true;
        drop(state);
        self.settled.notify_all();
        for signal in &self.signals {
            signal.close();
        }
    }

    /// Block until `population` registrations have been counted and return
    /// the actors still pending at that point.
    ///
    /// Groups are only ever released by a registration, so once the whole
    /// population is in, whatever is still pending can never be matched.
    pub fn wait_registered(&self, population: usize) -> QuotaResult<ClassCounts<C>> {
        let state = lock(&self.state);
        let state = wait_while(&self.settled, state, |s| s.registered < population && !s.closed);
        if state.registered < population {
            return Err(SyncError::Closed("matcher").into());
        }
        Ok(state.pending.clone())
    }

    /// Actors of `class` counted but not yet part of a released group.
    pub fn pending(&self, class: C) -> usize {
        lock(&self.state).pending.of(class)
    }

    /// Groups released so far.
    pub fn releases(&self) -> u64 {
        lock(&self.state).roles.opened()
    }

    /// The cycle the next released group will get.
    pub fn next_cycle(&self) -> CycleId {
        CycleId(CycleId::FIRST.0 + self.releases())
    }
}
