//! Sleeping teacher: students alternate between programming and asking a
//! teacher for help.
//!
//! ```text
//!  student                               teacher
//!  ───────                               ───────
//!  work 0..9 units, progress += 10×units
//!  waiting_room.try_enter ── full ─► keep working
//!        │ seated                        asleep while the waiting room
//!  teacher asleep? wake them ──────────► and the desk are both empty
//!  office door (capacity 1)
//!  sit at the desk, leave the chair ───► help 0..4 units
//!  wait for "help done" ◄─────────────── help done
//!  leave the desk, reopen the door
//! ```
//!
//! The teacher never polls: every change it cares about (a wake-up, a
//! student sitting down, a student leaving, closing time) is made under the
//! desk lock and followed by a notify.

use std::sync::{Arc, Condvar, Mutex};

use rv_core::{Actor, ActorId, ActorRng, Badge, Occupant, Pace, SimConfig, SimRng, names};
use rv_sync::guard::{lock, wait, wait_while};
use rv_sync::{CountingGate, RendezvousBarrier};
use tracing::{debug, info, warn};

use crate::crew::{Crew, OnUnwind};
use crate::{
    EventKind, OfficeConfig, OfficeReport, SimError, SimEvent, SimObserver, SimResult,
    StudentReport, TeacherReport,
};

/// Progress a student needs before they stop asking for help.
pub const DONE_PERCENT: u32 = 100;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Teacher {
    Asleep,
    Awake,
}

/// How one attempt to get help ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Visit {
    Helped,
    TurnedAway,
    /// Sat at the desk, but the office closed before help came.
    Unattended,
}

struct Desk {
    teacher:   Teacher,
    /// Student currently inside the office.
    student:   Option<Badge>,
    help_done: bool,
    sessions:  u64,
    wakeups:   u64,
    closed:    bool,
}

/// Shared office state: the waiting-room chairs, the door, and the desk.
struct Office {
    waiting_room: CountingGate,
    door:         CountingGate,
    desk:         Mutex<Desk>,
    /// Teacher waits here: wake-ups, students sitting down or leaving, close.
    teacher_cv:   Condvar,
    /// Student at the desk waits here for "help done".
    student_cv:   Condvar,
}

impl Office {
    fn new(chairs: usize) -> Self {
        Self {
            waiting_room: CountingGate::new("waiting room", chairs),
            door:         CountingGate::new("office door", 1),
            desk:         Mutex::new(Desk {
                teacher:   Teacher::Awake,
                student:   None,
                help_done: false,
                sessions:  0,
                wakeups:   0,
                closed:    false,
            }),
            teacher_cv:   Condvar::new(),
            student_cv:   Condvar::new(),
        }
    }

    /// One attempt to get help.
    fn visit(&self, student: &Badge, observer: &dyn SimObserver) -> Visit {
        let emit = |kind| observer.on_event(&SimEvent::new(student.clone(), kind));

        if !self.waiting_room.try_enter() {
            emit(EventKind::WaitingRoomFull);
            return Visit::TurnedAway;
        }
        emit(EventKind::EnteredWaitingRoom {
            taken:  self.waiting_room.occupancy(),
            chairs: self.waiting_room.capacity(),
        });

        {
            let mut desk = lock(&self.desk);
            if desk.teacher == Teacher::Asleep {
                desk.teacher = Teacher::Awake;
                desk.wakeups += 1;
                emit(EventKind::WakingTeacher);
                self.teacher_cv.notify_all();
            }
        }

        let _inside = self.door.pass();
        emit(EventKind::EnteredOffice);

        let mut desk = lock(&self.desk);
        desk.student = Some(student.clone());
        // Leaving the chair under the desk lock means the teacher never sees
        // an empty waiting room and an empty desk in between.
        self.waiting_room.leave();
        self.teacher_cv.notify_all();

        let mut desk = wait_while(&self.student_cv, desk, |d| !d.help_done && !d.closed);
        let visit = if desk.help_done { Visit::Helped } else { Visit::Unattended };
        desk.help_done = false;
        desk.student = None;
        emit(EventKind::LeftOffice);
        self.teacher_cv.notify_all();
        visit
    }

    /// The teacher's loop.  Returns once [`close`](Self::close) is called.
    fn teach(&self, badge: &Badge, mut rng: SimRng, pace: Pace, observer: &dyn SimObserver) -> TeacherReport {
        // A teacher that dies mid-session must not leave a student waiting
        // at the desk.
        let _unwind = OnUnwind(|| self.close());
        let emit = |kind| observer.on_event(&SimEvent::new(badge.clone(), kind));
        let mut announced_wait = false;

        let mut desk = lock(&self.desk);
        loop {
            if desk.closed {
                break;
            }
            if desk.teacher == Teacher::Asleep {
                desk = wait(&self.teacher_cv, desk);
                continue;
            }

            match desk.student.clone() {
                Some(student) if !desk.help_done => {
                    announced_wait = false;
                    emit(EventKind::Helping { student: student.clone() });
                    drop(desk);

                    pace.pause(rng.gen_range(0..5u32));

                    desk = lock(&self.desk);
                    desk.help_done = true;
                    desk.sessions += 1;
                    emit(EventKind::HelpDone);
                    debug!(%student, session = desk.sessions, "help session done");
                    self.student_cv.notify_all();
                }
                None if self.waiting_room.occupancy() == 0 => {
                    announced_wait = false;
                    desk.teacher = Teacher::Asleep;
                    emit(EventKind::TeacherSleeping);
                    desk = wait(&self.teacher_cv, desk);
                }
                _ => {
                    // Someone is on a chair or still leaving the desk.
                    if desk.student.is_none() && !announced_wait {
                        announced_wait = true;
                        emit(EventKind::TeacherWaiting);
                    }
                    desk = wait(&self.teacher_cv, desk);
                }
            }
        }

        TeacherReport { sessions: desk.sessions, wakeups: desk.wakeups }
    }

    /// Send the teacher home and release any student still at the desk.
    fn close(&self) {
        lock(&self.desk).closed = true;
        self.teacher_cv.notify_all();
        self.student_cv.notify_all();
    }
}

/// A student's loop: work, then try for help, until done.
fn study(actor: &Actor<Occupant>, mut rng: ActorRng, pace: Pace, office: &Office, observer: &dyn SimObserver) -> StudentReport {
    let badge = actor.badge();
    let mut report = StudentReport { badge: badge.clone(), progress: 0, visits: 0, turned_away: 0 };

    while report.progress < DONE_PERCENT {
        observer.on_event(&SimEvent::new(badge.clone(), EventKind::Working { progress: report.progress }));
        let work = rng.gen_range(0..10u32);
        report.progress += work * 10;
        pace.pause(work);

        match office.visit(&badge, observer) {
            Visit::Helped => report.visits += 1,
            Visit::TurnedAway => report.turned_away += 1,
            Visit::Unattended => {}
        }
    }

    observer.on_event(&SimEvent::new(badge, EventKind::Finished));
    report
}

/// Run the office simulation until every student reaches
/// [`DONE_PERCENT`], then send the teacher home.
pub fn run(config: &SimConfig, office: &OfficeConfig, observer: Arc<dyn SimObserver>) -> SimResult<OfficeReport> {
    run_on(Crew::with_capacity(office.students), config, office, observer)
}

/// [`run`] with the student threads spawned through `students`.
pub(crate) fn run_on(
    mut students: Crew<SimResult<StudentReport>>,
    config:       &SimConfig,
    office:       &OfficeConfig,
    observer:     Arc<dyn SimObserver>,
) -> SimResult<OfficeReport> {
    config.validate()?;
    office.validate()?;

    let shared = Arc::new(Office::new(office.chairs));
    let start = Arc::new(RendezvousBarrier::new(office.students));
    let pace = config.make_pace();

    info!(students = office.students, chairs = office.chairs, "starting office run");

    // The teacher is not part of the start line: it has to be waiting
    // before the first student can ask for help.
    let teacher = {
        let shared = Arc::clone(&shared);
        let observer = Arc::clone(&observer);
        let rng = SimRng::new(config.seed).child(0);
        let mut crew = Crew::with_capacity(1);
        crew.spawn("teacher".into(), move || {
            let badge = Actor::new(ActorId(0), Occupant::Teacher).badge();
            shared.teach(&badge, rng, pace, observer.as_ref())
        })?;
        crew
    };

    for i in 1..=office.students as u32 {
        let id = ActorId(i);
        let mut rng = ActorRng::new(config.seed, Occupant::Student, id);
        let actor = Actor::named(id, Occupant::Student, names::random_name(&mut rng));
        let spawned = {
            let (shared, start, observer) = (Arc::clone(&shared), Arc::clone(&start), Arc::clone(&observer));
            students.spawn(format!("student-{i}"), move || -> SimResult<StudentReport> {
                start.arrive()?;
                Ok(study(&actor, rng, pace, &shared, observer.as_ref()))
            })
        };
        if let Err(e) = spawned {
            warn!(error = %e, "spawn failed, shutting the office down");
            start.close();
            students.abandon();
            shared.close();
            teacher.abandon();
            return Err(e);
        }
    }

    // Send the teacher home even if a student thread failed.
    let joined = students.join();
    shared.close();
    let teacher = teacher
        .join()?
        .pop()
        .ok_or_else(|| SimError::ActorPanicked("teacher".into()))?;
    let students = joined?.into_iter().collect::<SimResult<Vec<_>>>()?;

    info!(sessions = teacher.sessions, wakeups = teacher.wakeups, "office run finished");
    observer.on_sim_end(teacher.sessions);
    Ok(OfficeReport {
        students,
        teacher,
        peak_waiting: shared.waiting_room.peak(),
        peak_in_office: shared.door.peak(),
    })
}
