//! `rv-quota` — decide when enough actors of each class have gathered to
//! form a group, and wake exactly that group.
//!
//! # Crate layout
//!
//! | Module              | Contents                                               |
//! |---------------------|--------------------------------------------------------|
//! | [`policy`]          | `QuotaPolicy` trait, `ClassCounts<C>` / `Wakeups<C>`   |
//! | [`stoichiometric`]  | `Stoichiometric` — fixed ratio, e.g. 2 H : 1 O         |
//! | [`full_or_half`]    | `FullOrHalf` — K of one class, or K/2 of each          |
//! | [`role`]            | `RoleAssigner`, `Role`, `Ticket`, `Assignment`        |
//! | [`matcher`]         | `QuotaMatcher<C, P>` — counters, lock, class signals   |
//! | [`error`]           | `QuotaError`, `QuotaResult<T>`                         |
//!
//! # Protocol
//!
//! ```text
//! arrive(class):
//!   lock
//!     pending[class] += 1
//!     if policy.release(pending, class) = Some(wakeups):
//!         pending -= wakeups               (never below zero)
//!         cycle    = next_cycle++
//!         post one ticket(cycle) per woken member, except the caller
//!         caller  → Coordinator of `cycle`
//!   unlock                                  (on every branch)
//!   otherwise: block on signal[class] → Member of the dequeued cycle
//! ```
//!
//! Tickets are the only cross-thread wake mechanism and only the matcher
//! posts them, so no actor can proceed without being counted into a group.

pub mod error;
pub mod full_or_half;
pub mod matcher;
pub mod policy;
pub mod role;
pub mod stoichiometric;


pub use error::{QuotaError, QuotaResult};
pub use full_or_half::FullOrHalf;
pub use matcher::{QuotaMatcher, Registration};
pub use policy::{ClassCounts, QuotaPolicy, Wakeups};
pub use role::{Assignment, Role, RoleAssigner, Ticket};
pub use stoichiometric::Stoichiometric;
