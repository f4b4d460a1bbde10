//! `rv-core` — foundational types for the `rendezvous` simulations.
//!
//! This crate is a dependency of every other `rv-*` crate.  It has no `rv-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`ids`]     | `ActorId`, `CycleId`                                      |
//! | [`class`]   | `ActorClass` trait, `Element`, `Faction`, `Occupant`      |
//! | [`actor`]   | `Actor<C>`, `Badge` — immutable actor identity            |
//! | [`names`]   | Display-name lookup table                                 |
//! | [`rng`]     | `ActorRng` (per-actor), `SimRng` (global)                 |
//! | [`pace`]    | `Pace` (simulated work units → sleeps), `SimConfig`       |
//! | [`error`]   | `RvError`, `RvResult`                                     |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to ids, classes and config. |

pub mod actor;
pub mod class;
pub mod error;
pub mod ids;
pub mod names;
pub mod pace;
pub mod rng;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use actor::{Actor, Badge};
pub use class::{ActorClass, Element, Faction, Occupant};
pub use error::{RvError, RvResult};
pub use ids::{ActorId, CycleId};
pub use pace::{Pace, SimConfig};
pub use rng::{ActorRng, SimRng};
