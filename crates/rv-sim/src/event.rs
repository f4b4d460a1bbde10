//! Typed progress events emitted by actor threads.

use rv_core::{Badge, CycleId};

/// One line of a simulation transcript.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimEvent {
    pub actor: Badge,
    /// Group cycle the event belongs to (molecule / boat number), if any.
    pub cycle: Option<CycleId>,
    pub kind:  EventKind,
}

impl SimEvent {
    pub fn new(actor: Badge, kind: EventKind) -> Self {
        Self { actor, cycle: None, kind }
    }

    pub fn in_cycle(actor: Badge, cycle: CycleId, kind: EventKind) -> Self {
        Self { actor, cycle: Some(cycle), kind }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EventKind {
    // ── Office: students ─────────────────────────────────────────────────────
    /// About to work another stretch; `progress` is in percent.
    Working { progress: u32 },
    EnteredWaitingRoom { taken: usize, chairs: usize },
    WaitingRoomFull,
    WakingTeacher,
    EnteredOffice,
    LeftOffice,
    Finished,

    // ── Office: teacher ──────────────────────────────────────────────────────
    TeacherSleeping,
    TeacherWaiting,
    Helping { student: Badge },
    HelpDone,

    // ── Chamber ──────────────────────────────────────────────────────────────
    EnteredChamber,
    MoleculeFormed,
    LeftChamber,

    // ── Dock ─────────────────────────────────────────────────────────────────
    Boarding,
    Rowing,
    Disembarked,
    Stranded,
}

impl EventKind {
    /// Stable machine-readable name, used as the `event` column of CSV logs.
    pub fn label(&self) -> &'static str {
        match self {
            EventKind::Working { .. } => "working",
            EventKind::EnteredWaitingRoom { .. } => "entered_waiting_room",
            EventKind::WaitingRoomFull => "waiting_room_full",
            EventKind::WakingTeacher => "waking_teacher",
            EventKind::EnteredOffice => "entered_office",
            EventKind::LeftOffice => "left_office",
            EventKind::Finished => "finished",
            EventKind::TeacherSleeping => "teacher_sleeping",
            EventKind::TeacherWaiting => "teacher_waiting",
            EventKind::Helping { .. } => "helping",
            EventKind::HelpDone => "help_done",
            EventKind::EnteredChamber => "entered_chamber",
            EventKind::MoleculeFormed => "molecule_formed",
            EventKind::LeftChamber => "left_chamber",
            EventKind::Boarding => "boarding",
            EventKind::Rowing => "rowing",
            EventKind::Disembarked => "disembarked",
            EventKind::Stranded => "stranded",
        }
    }
}
