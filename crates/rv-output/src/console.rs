//! Line-formatted progress transcript on stdout.

use std::io::{self, Write};

use rv_core::Badge;
use rv_sim::{EventKind, SimEvent, SimObserver};

const RESET:  &str = "\x1b[0m";
const RED:    &str = "\x1b[0;31m";
const GREEN:  &str = "\x1b[0;32m";
const YELLOW: &str = "\x1b[1;33m";
const BLUE:   &str = "\x1b[0;34m";
const PURPLE: &str = "\x1b[0;35m";
const CYAN:   &str = "\x1b[0;36m";

/// Prints one line per event, the way the classroom transcripts read.
///
/// Each line is written with a single locked `write` so lines from different
/// actor threads never interleave mid-line.  Write errors (a closed pipe) are
/// ignored.
pub struct ConsoleObserver {
    color: bool,
}

impl Default for ConsoleObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleObserver {
    /// ANSI-colored output.
    pub fn new() -> Self {
        Self { color: true }
    }

    /// No escape codes, for logs and pipes.
    pub fn plain() -> Self {
        Self { color: false }
    }

    fn paint(&self, color: &str, text: &str) -> String {
        if self.color { format!("{color}{text}{RESET}") } else { text.to_owned() }
    }

    /// The transcript line for `event`, or `None` for events that are only
    /// logged, never printed.
    pub fn format(&self, event: &SimEvent) -> Option<String> {
        let who = &event.actor;
        let n = event.cycle.map(|c| c.0).unwrap_or_default();
        let line = match &event.kind {
            EventKind::Working { progress } => format!(
                "{} Programming {}",
                self.paint(GREEN, &student(who)),
                self.paint(CYAN, &format!("[{progress}% Progress]"))
            ),
            EventKind::EnteredWaitingRoom { taken, chairs } => format!(
                "{} Entered waiting room {}",
                self.paint(GREEN, &student(who)),
                self.paint(PURPLE, &format!("[{taken}/{chairs} chairs taken]"))
            ),
            EventKind::WaitingRoomFull => self.paint(
                BLUE,
                &format!("{} Tried to enter full waiting room, continues programming for a while", student(who)),
            ),
            EventKind::WakingTeacher => format!("{} Waking teacher", self.paint(GREEN, &student(who))),
            EventKind::EnteredOffice => format!("{} Enters teachers office", self.paint(GREEN, &student(who))),
            EventKind::LeftOffice => format!("{} Leaving teachers office", self.paint(GREEN, &student(who))),
            EventKind::Finished => self.paint(YELLOW, &format!("{} PROGRAMMING 100%", student(who))),

            EventKind::TeacherSleeping => format!("{} No waiting students, going to sleep..", self.teacher()),
            EventKind::TeacherWaiting => {
                format!("{} Waiting for student to come into the office..", self.teacher())
            }
            EventKind::Helping { student: s } => {
                format!("{} helping {}", self.teacher(), self.paint(GREEN, &format!("{}..", student(s))))
            }
            EventKind::HelpDone => format!("{} Helping done!", self.teacher()),

            EventKind::EnteredChamber => format!("| {} ATOM {} | enters the reaction chamber..", who.class, who.id),
            EventKind::MoleculeFormed => self.paint(BLUE, "| H2O MOLECULE CREATED |"),
            EventKind::LeftChamber => return None,

            EventKind::Boarding => format!("[{who}] is boarding boat {n}.."),
            EventKind::Rowing => self.paint(BLUE, &format!("[{who}] is rowing boat {n}!")),
            EventKind::Disembarked => format!("[{who}] disembarks boat {n}"),
            EventKind::Stranded => format!("[{who}] is left waiting, no group can form"),
        };
        Some(line)
    }

    fn teacher(&self) -> String {
        self.paint(RED, "|TEACHER|")
    }
}

/// `[Student 3 - Erik]`
fn student(badge: &Badge) -> String {
    match &badge.name {
        Some(name) => format!("[Student {} - {}]", badge.id, name),
        None => format!("[Student {}]", badge.id),
    }
}

impl SimObserver for ConsoleObserver {
    fn on_event(&self, event: &SimEvent) {
        if let Some(mut line) = self.format(event) {
            line.push('\n');
            let _ = io::stdout().lock().write_all(line.as_bytes());
        }
    }
}
