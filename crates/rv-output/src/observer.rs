//! `EventLogObserver<W>` — bridges `SimObserver` to an `EventWriter`.

use std::sync::{Mutex, PoisonError};

use rv_sim::{SimEvent, SimObserver};
use tracing::warn;

use crate::writer::EventWriter;
use crate::{EventRow, OutputError, OutputResult};

struct LogState<W> {
    writer:     W,
    seq:        u64,
    last_error: Option<OutputError>,
}

impl<W> LogState<W> {
    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                warn!(error = %e, "event log write failed");
                self.last_error = Some(e);
            }
        }
    }
}

/// A [`SimObserver`] that numbers events in arrival order and writes them
/// to any [`EventWriter`] backend.
///
/// Actor threads report concurrently, so the writer sits behind a mutex and
/// the sequence number is assigned under it: `seq` order is exactly the
/// order rows reach the file.
///
/// Errors from the writer are stored internally because `SimObserver`
/// methods have no return value.  After the run returns, check for errors
/// with [`take_error`][Self::take_error].
pub struct EventLogObserver<W: EventWriter> {
    state: Mutex<LogState<W>>,
}

impl<W: EventWriter> EventLogObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { state: Mutex::new(LogState { writer, seq: 0, last_error: None }) }
    }

    /// Take the stored write error (if any) after the run returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&self) -> Option<OutputError> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner).last_error.take()
    }

    /// Number of events received so far.
    pub fn rows(&self) -> u64 {
        self.state.lock().unwrap_or_else(PoisonError::into_inner).seq
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.state.into_inner().unwrap_or_else(PoisonError::into_inner).writer
    }
}

impl<W: EventWriter> SimObserver for EventLogObserver<W> {
    fn on_event(&self, event: &SimEvent) {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        state.seq += 1;
        let row = EventRow::from_event(state.seq, event);
        let result = state.writer.write_event(&row);
        state.store_err(result);
    }

    fn on_sim_end(&self, _cycles: u64) {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        let result = state.writer.finish();
        state.store_err(result);
    }
}
