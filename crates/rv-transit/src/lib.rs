//! `rv-transit` — carry one released group at a time through a shared
//! resource (a boat, a reaction chamber).
//!
//! # Crate layout
//!
//! | Module        | Contents                                              |
//! |---------------|-------------------------------------------------------|
//! | [`phase`]     | `Phase` — `Empty → Filling → Full → Draining → Empty` |
//! | [`transit`]   | `TwoPhaseTransit` — `board`, `operate`, `disembark`   |
//! | [`error`]     | `TransitError`, `TransitResult<T>`                    |
//!
//! # Cycle
//!
//! ```text
//!             board ×K                 operate (coordinator)
//!   Empty ──────────────► Filling ─► Full ───────────────────► Draining
//!     ▲                                                          │
//!     └──────────────────── disembark ×K ────────────────────────┘
//! ```
//!
//! Only the cycle the transit is currently serving may board, so a group
//! released early by the matcher waits at the dock until the previous group
//! has fully drained.  No lock is held while any party is blocked.

pub mod error;
pub mod phase;
pub mod transit;

#[cfg(test)]
mod tests;

pub use error::{TransitError, TransitResult};
pub use phase::Phase;
pub use transit::TwoPhaseTransit;
