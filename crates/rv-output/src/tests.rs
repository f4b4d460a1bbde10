//! Integration tests for rv-output.

use std::sync::Arc;

use rv_core::{ActorId, Badge, CycleId};
use rv_sim::{EventKind, SimEvent};

fn hacker(id: u32) -> Badge {
    Badge { id: ActorId(id), class: "HACKER", name: Some("Erik".into()) }
}

fn student(id: u32) -> Badge {
    Badge { id: ActorId(id), class: "STUDENT", name: Some("Sara".into()) }
}

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use super::*;
    use crate::csv::{CsvEventWriter, EVENTS_FILE};
    use crate::writer::EventWriter;
    use crate::EventRow;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvEventWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join(EVENTS_FILE)).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, ["seq", "cycle", "actor", "class", "event"]);
    }

    #[test]
    fn rows_written_with_optional_cycle() {
        let dir = tmp();
        let mut w = CsvEventWriter::new(dir.path()).unwrap();
        let boarding = SimEvent::in_cycle(hacker(3), CycleId(2), EventKind::Boarding);
        let working = SimEvent::new(student(1), EventKind::Working { progress: 40 });
        w.write_event(&EventRow::from_event(1, &boarding)).unwrap();
        w.write_event(&EventRow::from_event(2, &working)).unwrap();
        w.finish().unwrap();
        w.finish().unwrap(); // idempotent

        let mut rdr = csv::Reader::from_path(dir.path().join(EVENTS_FILE)).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][1], "2");        // cycle
        assert_eq!(&rows[0][2], "3");        // actor
        assert_eq!(&rows[0][3], "HACKER");
        assert_eq!(&rows[0][4], "boarding");
        assert_eq!(&rows[1][1], "");         // no cycle
        assert_eq!(&rows[1][4], "working");
    }
}

#[cfg(test)]
mod observer_tests {
    use std::collections::HashSet;
    use std::sync::Mutex;
    use std::thread;

    use rv_sim::SimObserver;

    use super::*;
    use crate::writer::EventWriter;
    use crate::{EventLogObserver, EventRow, OutputError, OutputResult, Tee};

    /// Keeps rows in memory; optionally fails every write.
    #[derive(Default)]
    struct MemWriter {
        rows:     Vec<EventRow>,
        finished: usize,
        broken:   bool,
    }

    impl EventWriter for MemWriter {
        fn write_event(&mut self, row: &EventRow) -> OutputResult<()> {
            if self.broken {
                return Err(OutputError::Io(std::io::Error::other("disk full")));
            }
            self.rows.push(row.clone());
            Ok(())
        }

        fn finish(&mut self) -> OutputResult<()> {
            self.finished += 1;
            Ok(())
        }
    }

    #[test]
    fn concurrent_events_get_unique_sequence_numbers() {
        let log = Arc::new(EventLogObserver::new(MemWriter::default()));
        let handles: Vec<_> = (1..=8)
            .map(|id| {
                let log = Arc::clone(&log);
                thread::spawn(move || {
                    for _ in 0..25 {
                        log.on_event(&SimEvent::new(hacker(id), EventKind::Boarding));
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }
        log.on_sim_end(0);

        assert_eq!(log.rows(), 200);
        let writer = Arc::try_unwrap(log).ok().unwrap().into_writer();
        let seqs: HashSet<u64> = writer.rows.iter().map(|r| r.seq).collect();
        assert_eq!(seqs, (1..=200).collect());
        assert_eq!(writer.finished, 1);
    }

    #[test]
    fn first_error_is_kept() {
        let log = EventLogObserver::new(MemWriter { broken: true, ..MemWriter::default() });
        log.on_event(&SimEvent::new(hacker(1), EventKind::Rowing));
        log.on_event(&SimEvent::new(hacker(2), EventKind::Rowing));
        assert!(matches!(log.take_error(), Some(OutputError::Io(_))));
        assert!(log.take_error().is_none());
    }

    #[test]
    fn tee_forwards_to_both() {
        #[derive(Default)]
        struct Count(Mutex<(usize, Option<u64>)>);
        impl SimObserver for Count {
            fn on_event(&self, _event: &SimEvent) {
                self.0.lock().unwrap().0 += 1;
            }
            fn on_sim_end(&self, cycles: u64) {
                self.0.lock().unwrap().1 = Some(cycles);
            }
        }

        let (a, b) = (Arc::new(Count::default()), Arc::new(Count::default()));
        let tee = Tee(a.clone(), b.clone());
        tee.on_event(&SimEvent::new(hacker(1), EventKind::Disembarked));
        tee.on_sim_end(4);
        assert_eq!(*a.0.lock().unwrap(), (1, Some(4)));
        assert_eq!(*b.0.lock().unwrap(), (1, Some(4)));
    }
}

#[cfg(test)]
mod console_tests {
    use super::*;
    use crate::ConsoleObserver;

    #[test]
    fn dock_lines() {
        let console = ConsoleObserver::plain();
        let line = |kind| console.format(&SimEvent::in_cycle(hacker(3), CycleId(2), kind));
        assert_eq!(line(EventKind::Boarding).unwrap(), "[HACKER 3: Erik] is boarding boat 2..");
        assert_eq!(line(EventKind::Rowing).unwrap(), "[HACKER 3: Erik] is rowing boat 2!");
    }

    #[test]
    fn office_lines() {
        let console = ConsoleObserver::plain();
        let teacher = Badge { id: ActorId(0), class: "TEACHER", name: None };
        assert_eq!(
            console.format(&SimEvent::new(student(4), EventKind::EnteredWaitingRoom { taken: 2, chairs: 5 })).unwrap(),
            "[Student 4 - Sara] Entered waiting room [2/5 chairs taken]"
        );
        assert_eq!(
            console.format(&SimEvent::new(teacher, EventKind::Helping { student: student(4) })).unwrap(),
            "|TEACHER| helping [Student 4 - Sara].."
        );
    }

    #[test]
    fn chamber_lines() {
        let console = ConsoleObserver::plain();
        let atom = Badge { id: ActorId(7), class: "HYDROGEN", name: None };
        assert_eq!(
            console.format(&SimEvent::in_cycle(atom.clone(), CycleId(1), EventKind::EnteredChamber)).unwrap(),
            "| HYDROGEN ATOM 7 | enters the reaction chamber.."
        );
        assert!(console.format(&SimEvent::in_cycle(atom, CycleId(1), EventKind::LeftChamber)).is_none());
    }

    #[test]
    fn color_wraps_in_escape_codes() {
        let line = ConsoleObserver::new()
            .format(&SimEvent::in_cycle(hacker(1), CycleId(1), EventKind::Rowing))
            .unwrap();
        assert!(line.starts_with("\x1b[0;34m"));
        assert!(line.ends_with("\x1b[0m"));
    }
}

#[cfg(test)]
mod end_to_end_tests {
    use rv_core::SimConfig;
    use rv_sim::{DockConfig, dock};

    use super::*;
    use crate::csv::EVENTS_FILE;
    use crate::{CsvEventWriter, EventLogObserver};

    #[test]
    fn dock_run_logs_every_event() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let log = Arc::new(EventLogObserver::new(CsvEventWriter::new(dir.path()).unwrap()));
        let config = SimConfig { seed: 21, unit_millis: 0 };
        dock::run(&config, &DockConfig::default(), log.clone()).unwrap();
        assert!(log.take_error().is_none());

        let mut rdr = csv::Reader::from_path(dir.path().join(EVENTS_FILE)).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len() as u64, log.rows());
        // 12 boardings, 3 rowings, 12 disembarks
        assert_eq!(rows.len(), 27);
        assert_eq!(rows.iter().filter(|r| &r[4] == "rowing").count(), 3);
    }
}
