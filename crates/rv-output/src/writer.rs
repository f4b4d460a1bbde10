//! The `EventWriter` trait implemented by backend writers.

use crate::{EventRow, OutputResult};

/// A sink for event rows.
///
/// Errors are stored by [`EventLogObserver`](crate::EventLogObserver) and
/// retrieved with its `take_error`.
pub trait EventWriter: Send {
    fn write_event(&mut self, row: &EventRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
