//! Simulation observer trait for progress reporting and data collection.

use std::sync::Arc;

use crate::SimEvent;

/// Callbacks invoked from every actor thread of a run.
///
/// One observer is shared by all threads, hence `Send + Sync` and `&self`.
/// Calls from different threads may interleave; calls from one thread arrive
/// in program order.  All methods have default no-op implementations so
/// implementors only need to override what they care about.
///
/// # Example — line counter
///
/// ```rust,ignore
/// struct Lines(AtomicUsize);
///
/// impl SimObserver for Lines {
///     fn on_event(&self, _event: &SimEvent) {
///         self.0.fetch_add(1, Ordering::Relaxed);
///     }
/// }
/// ```
pub trait SimObserver: Send + Sync {
    /// Called for every progress event, on the thread that produced it.
    fn on_event(&self, _event: &SimEvent) {}

    /// Called once on the run's own thread after every actor has been
    /// joined.  `cycles` is the number of completed group cycles (help
    /// sessions for the office).
    fn on_sim_end(&self, _cycles: u64) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

/// Lets a shared handle stand in wherever an observer is expected, so a
/// caller can keep its own `Arc` to inspect the observer after the run.
impl<O: SimObserver + ?Sized> SimObserver for Arc<O> {
    fn on_event(&self, event: &SimEvent) {
        (**self).on_event(event);
    }

    fn on_sim_end(&self, cycles: u64) {
        (**self).on_sim_end(cycles);
    }
}
