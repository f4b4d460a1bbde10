//! CSV output backend.
//!
//! Creates `events.csv` in the configured output directory.

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::EventWriter;
use crate::{EventRow, OutputResult};

pub const EVENTS_FILE: &str = "events.csv";

/// Writes one CSV row per simulation event.
pub struct CsvEventWriter {
    events:   Writer<File>,
    finished: bool,
}

impl CsvEventWriter {
    /// Open (or create) `events.csv` in `dir` and write the header row.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut events = Writer::from_path(dir.join(EVENTS_FILE))?;
        events.write_record(["seq", "cycle", "actor", "class", "event"])?;
        Ok(Self { events, finished: false })
    }
}

impl EventWriter for CsvEventWriter {
    fn write_event(&mut self, row: &EventRow) -> OutputResult<()> {
        self.events.write_record(&[
            row.seq.to_string(),
            row.cycle.map(|c| c.to_string()).unwrap_or_default(),
            row.actor.to_string(),
            row.class.to_owned(),
            row.event.to_owned(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.events.flush()?;
        Ok(())
    }
}
