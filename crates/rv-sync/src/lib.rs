//! `rv-sync` — blocking synchronization primitives.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                   |
//! |---------------|------------------------------------------------------------|
//! | [`gate`]      | `CountingGate` (bounded occupancy), `GatePass` (RAII seat) |
//! | [`barrier`]   | `RendezvousBarrier` — release K parties together, reusable |
//! | [`signal`]    | `TicketSignal<T>` — counting signal that carries a value   |
//! | [`guard`]     | Poison-tolerant `lock` / `wait_while` / `wait` helpers     |
//! | [`error`]     | `SyncError`, `SyncResult<T>`                               |
//!
//! # Design notes
//!
//! Everything here is built on `std::sync::{Mutex, Condvar}` and atomics.
//! Waiting is always a condition wait; no primitive in this crate spins or
//! polls.  The only non-blocking entry point, [`CountingGate::try_enter`],
//! is a single compare-and-swap loop and never touches a lock.
//!
//! Misuse (leaving an empty gate, a barrier of size zero) is a programming
//! defect and panics; `SyncError` is reserved for orderly shutdown.

pub mod barrier;
pub mod error;
pub mod gate;
pub mod guard;
pub mod signal;

#[cfg(test)]
mod tests;

pub use barrier::RendezvousBarrier;
pub use error::{SyncError, SyncResult};
pub use gate::{CountingGate, GatePass};
pub use signal::TicketSignal;
