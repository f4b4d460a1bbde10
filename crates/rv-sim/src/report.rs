//! Run reports, assembled on the run's thread from joined actor outcomes.

use std::collections::BTreeMap;

use rv_core::{ActorClass, Badge, CycleId};
use rv_quota::{Assignment, ClassCounts};

// ── Group simulations ─────────────────────────────────────────────────────────

/// How one actor's run ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Ride {
    /// Completed one full board → disembark cycle.
    Crossed(Assignment),
    /// Still waiting for a group when the run closed its matcher.
    Stranded,
}

/// One actor of a chamber or dock run and how it ended.
#[derive(Clone, Debug)]
pub struct Rider<C: ActorClass> {
    pub badge: Badge,
    pub class: C,
    pub ride:  Ride,
}

/// One completed group cycle.
#[derive(Clone, Debug)]
pub struct CycleRecord<C: ActorClass> {
    pub cycle:        CycleId,
    /// Everyone who reported the coordinator role for this cycle.  Exactly
    /// one badge in any correct run.
    pub coordinators: Vec<Badge>,
    pub members:      ClassCounts<C>,
}

impl<C: ActorClass> CycleRecord<C> {
    pub fn coordinator(&self) -> Option<&Badge> {
        self.coordinators.first()
    }
}

/// Outcome of a chamber or dock run.
#[derive(Clone, Debug)]
pub struct TransitReport<C: ActorClass> {
    /// In spawn order.
    pub riders: Vec<Rider<C>>,
    /// In cycle order.
    pub cycles: Vec<CycleRecord<C>>,
}

impl<C: ActorClass> TransitReport<C> {
    /// Group the riders' assignments into per-cycle records.
    pub fn from_riders(riders: Vec<Rider<C>>) -> Self {
        let mut cycles: BTreeMap<CycleId, CycleRecord<C>> = BTreeMap::new();
        for rider in &riders {
            let Ride::Crossed(assignment) = rider.ride else { continue };
            let record = cycles.entry(assignment.cycle()).or_insert_with(|| CycleRecord {
                cycle:        assignment.cycle(),
                coordinators: Vec::new(),
                members:      ClassCounts::zero(),
            });
            record.members.add(rider.class, 1);
            if assignment.is_coordinator() {
                record.coordinators.push(rider.badge.clone());
            }
        }
        Self { riders, cycles: cycles.into_values().collect() }
    }

    pub fn stranded(&self) -> impl Iterator<Item = &Rider<C>> + '_ {
        self.riders.iter().filter(|r| r.ride == Ride::Stranded)
    }
}

// ── Office ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct StudentReport {
    pub badge:       Badge,
    /// Final progress in percent.  Can exceed 100: the last stretch of work
    /// is not capped.
    pub progress:    u32,
    /// Help sessions received.
    pub visits:      u32,
    /// Times the waiting room was full.
    pub turned_away: u32,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TeacherReport {
    pub sessions: u64,
    pub wakeups:  u64,
}

#[derive(Clone, Debug)]
pub struct OfficeReport {
    /// In spawn order.
    pub students:       Vec<StudentReport>,
    pub teacher:        TeacherReport,
    /// Most students ever seated in the waiting room at once.
    pub peak_waiting:   usize,
    /// Most students ever inside the office at once.
    pub peak_in_office: usize,
}
