//! Named actor threads and their joins.

use std::io;
use std::thread::{self, Builder, JoinHandle};

use tracing::{error, trace};

use crate::{SimError, SimResult};

/// Produces the `thread::Builder` for a named actor thread.
pub(crate) type Launcher = Box<dyn FnMut(&str) -> io::Result<Builder>>;

/// The threads spawned by one run.
pub(crate) struct Crew<T> {
    handles: Vec<(String, JoinHandle<T>)>,
    launch:  Launcher,
}

impl<T: Send + 'static> Crew<T> {
    pub(crate) fn with_capacity(n: usize) -> Self {
        Self::with_launcher(n, |name| Ok(Builder::new().name(name.to_owned())))
    }

    /// A crew whose threads are configured by `launch`.  An `Err` from
    /// `launch` fails that spawn exactly like an OS refusal would.
    pub(crate) fn with_launcher<L>(n: usize, launch: L) -> Self
    where
        L: FnMut(&str) -> io::Result<Builder> + 'static,
    {
        Self { handles: Vec::with_capacity(n), launch: Box::new(launch) }
    }

    pub(crate) fn spawn<F>(&mut self, name: String, f: F) -> SimResult<()>
    where
        F: FnOnce() -> T + Send + 'static,
    {
        let handle = (self.launch)(&name)
            .and_then(|builder| builder.spawn(f))
            .map_err(|source| SimError::Spawn { name: name.clone(), source })?;
        trace!(thread = %name, "spawned");
        self.handles.push((name, handle));
        Ok(())
    }

    /// Join every thread, in spawn order.
    ///
    /// All threads are joined even if one of them panicked; the first panic
    /// is reported after the rest have finished.
    pub(crate) fn join(self) -> SimResult<Vec<T>> {
        let mut out = Vec::with_capacity(self.handles.len());
        let mut panicked = None;
        for (name, handle) in self.handles {
            match handle.join() {
                Ok(value) => out.push(value),
                Err(_) => {
                    error!(thread = %name, "actor thread panicked");
                    panicked.get_or_insert(name);
                }
            }
        }
        match panicked {
            Some(name) => Err(SimError::ActorPanicked(name)),
            None => Ok(out),
        }
    }

    /// Join every thread and discard the outcomes.  Used after a failed
    /// spawn, once the shared primitives have been closed.
    pub(crate) fn abandon(self) {
        for (_, handle) in self.handles {
            let _ = handle.join();
        }
    }
}

/// Runs its closure on drop, but only while the thread is unwinding.
///
/// Actor threads hold one of these over the shared primitives so that a
/// panic closes them and the rest of the crew fails out instead of waiting
/// for a party that will never arrive.
pub(crate) struct OnUnwind<F: FnMut()>(pub F);

impl<F: FnMut()> Drop for OnUnwind<F> {
    fn drop(&mut self) {
        if thread::panicking() {
            (self.0)();
        }
    }
}
