//! `TicketSignal<T>` — a counting signal whose permits carry a value.
//!
//! A plain counting semaphore tells a woken thread *that* it may proceed.
//! Group formation also needs to tell it *which* group it belongs to, so each
//! post enqueues a ticket and each wait dequeues one, in FIFO order.  With
//! `T = ()` this degenerates to an ordinary semaphore.

use std::collections::VecDeque;
use std::sync::{Condvar, Mutex};

use crate::guard::{lock, wait_while};
use crate::{SyncError, SyncResult};

struct SignalState<T> {
    queue:  VecDeque<T>,
    closed: bool,
}

/// FIFO counting signal.  Only its owner posts; any number of threads wait.
pub struct TicketSignal<T> {
    name:  &'static str,
    state: Mutex<SignalState<T>>,
    ready: Condvar,
}

impl<T> TicketSignal<T> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            state: Mutex::new(SignalState { queue: VecDeque::new(), closed: false }),
            ready: Condvar::new(),
        }
    }

    /// Post one ticket, waking one waiter.
    pub fn post(&self, ticket: T) {
        lock(&self.state).queue.push_back(ticket);
        self.ready.notify_one();
    }

    /// Post several tickets atomically; no waiter observes a partial batch.
    pub fn post_many<I: IntoIterator<Item = T>>(&self, tickets: I) {
        let mut state = lock(&self.state);
        let before = state.queue.len();
        state.queue.extend(tickets);
        let added = state.queue.len() - before;
        drop(state);
        match added {
            0 => {}
            1 => self.ready.notify_one(),
            _ => self.ready.notify_all(),
        }
    }

    /// Block until a ticket is available and take it.
    ///
    /// Tickets already posted are still handed out after
    /// [`close`](Self::close); only an empty, closed signal fails.
    pub fn wait(&self) -> SyncResult<T> {
        let state = lock(&self.state);
        let mut state = wait_while(&self.ready, state, |s| s.queue.is_empty() && !s.closed);
        state.queue.pop_front().ok_or(SyncError::Closed(self.name))
    }

    /// Take a ticket if one is available.  Never blocks.
    pub fn try_wait(&self) -> Option<T> {
        lock(&self.state).queue.pop_front()
    }

    /// Wake every waiter; waits on an empty signal fail from now on.
    pub fn close(&self) {
        lock(&self.state).closed = true;
        self.ready.notify_all();
    }

    /// Tickets posted but not yet taken.
    pub fn pending(&self) -> usize {
        lock(&self.state).queue.len()
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }
}
