//! `rv-output` — transcript and event-log observers for the rendezvous
//! simulations.
//!
//! | Type                  | Output                                                |
//! |-----------------------|-------------------------------------------------------|
//! | [`ConsoleObserver`]   | Colored progress lines on stdout                      |
//! | [`EventLogObserver`]  | One row per event through any [`EventWriter`]         |
//! | [`CsvEventWriter`]    | `events.csv` (`seq, cycle, actor, class, event`)      |
//! | [`Tee`]               | Forwards every callback to two observers              |
//!
//! # Usage
//!
//! ```rust,ignore
//! use rv_output::{ConsoleObserver, CsvEventWriter, EventLogObserver, Tee};
//!
//! let log = Arc::new(EventLogObserver::new(CsvEventWriter::new(Path::new("./output"))?));
//! let obs = Arc::new(Tee(ConsoleObserver::new(), log.clone()));
//! dock::run(&config, &DockConfig::default(), obs)?;
//! log.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod console;
pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod tee;
pub mod writer;

#[cfg(test)]
mod tests;

pub use console::ConsoleObserver;
pub use csv::CsvEventWriter;
pub use error::{OutputError, OutputResult};
pub use observer::EventLogObserver;
pub use row::EventRow;
pub use tee::Tee;
pub use writer::EventWriter;
