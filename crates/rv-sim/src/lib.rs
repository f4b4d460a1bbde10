//! `rv-sim` — the three rendezvous simulations.
//!
//! | Module        | Contents                                                     |
//! |---------------|--------------------------------------------------------------|
//! | [`office`]    | Sleeping teacher: waiting-room gate, office door, help desk  |
//! | [`chamber`]   | Water: 2 H + 1 O through a reaction chamber                  |
//! | [`dock`]      | River crossing: 4 of a kind or 2 + 2 per boat                |
//! | [`config`]    | `OfficeConfig`, `ChamberConfig`, `DockConfig`                |
//! | [`event`]     | `SimEvent`, `EventKind` — the progress transcript            |
//! | [`observer`]  | `SimObserver` trait, `NoopObserver`                          |
//! | [`report`]    | Per-run reports returned by value from the thread joins      |
//! | [`error`]     | `SimError`, `SimResult<T>`                                   |
//!
//! # Threads
//!
//! Every actor runs on its own named OS thread.  All actor threads of a run
//! first meet at a start-line barrier sized to the population, then run
//! their script.  A run returns only after every thread it spawned has been
//! joined; each thread hands back its own outcome, and the run folds those
//! into a report.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use rv_core::SimConfig;
//! use rv_sim::{dock, DockConfig, NoopObserver};
//!
//! let report = dock::run(&SimConfig::default(), &DockConfig::default(), Arc::new(NoopObserver))?;
//! assert_eq!(report.cycles.len(), 3);
//! ```

pub mod chamber;
pub mod config;
pub mod dock;
pub mod error;
pub mod event;
pub mod observer;
pub mod office;
pub mod report;

mod crew;
mod group;


pub use config::{ChamberConfig, DockConfig, OfficeConfig};
pub use error::{SimError, SimResult};
pub use event::{EventKind, SimEvent};
pub use observer::{NoopObserver, SimObserver};
pub use report::{CycleRecord, OfficeReport, Ride, Rider, StudentReport, TeacherReport, TransitReport};
