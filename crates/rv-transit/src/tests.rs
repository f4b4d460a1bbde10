//! Unit and concurrency tests for rv-transit.

use std::sync::{Arc, Mutex};
use std::thread;

use rv_core::{CycleId, Element, Faction};
use rv_quota::{Assignment, FullOrHalf, QuotaMatcher, Role, Stoichiometric, Ticket};

use crate::{Phase, TransitError, TwoPhaseTransit};

fn coordinator(cycle: u64) -> Assignment {
    Assignment { ticket: Ticket::new(CycleId(cycle)), role: Role::Coordinator }
}

// ── Single-party cycles ───────────────────────────────────────────────────────

#[cfg(test)]
mod solo_tests {
    use super::*;

    #[test]
    fn one_seat_walks_every_phase() {
        let t = TwoPhaseTransit::new("raft", 1);
        let a = coordinator(1);
        assert_eq!(t.phase(), Phase::Empty);

        assert_eq!(t.board(&a).unwrap(), 1);
        assert_eq!(t.phase(), Phase::Full);
        assert_eq!(t.occupancy(), 1);

        let rowed = t.operate(&a, || "rowed").unwrap();
        assert_eq!(rowed, "rowed");
        assert_eq!(t.phase(), Phase::Draining);

        t.disembark(&a).unwrap();
        assert_eq!(t.phase(), Phase::Empty);
        assert_eq!(t.occupancy(), 0);
        assert_eq!(t.completed(), 1);
        assert_eq!(t.serving(), CycleId(2));
    }

    #[test]
    fn member_cannot_operate() {
        let t = TwoPhaseTransit::new("raft", 1);
        let member = Assignment::member(Ticket::new(CycleId::FIRST));
        t.board(&member).unwrap();
        assert!(matches!(
            t.operate(&member, || ()),
            Err(TransitError::NotCoordinator(c)) if c == CycleId::FIRST
        ));
        assert_eq!(t.phase(), Phase::Full);
    }

    #[test]
    fn operate_before_full_is_rejected() {
        let t = TwoPhaseTransit::new("boat", 2);
        assert!(matches!(
            t.operate(&coordinator(1), || ()),
            Err(TransitError::NotReady { phase: Phase::Empty, .. })
        ));
    }

    #[test]
    fn later_cycle_waits_for_its_turn_and_close_releases_it() {
        let t = Arc::new(TwoPhaseTransit::new("raft", 1));
        let early = {
            let t = Arc::clone(&t);
            thread::spawn(move || t.board(&coordinator(2)))
        };
        thread::sleep(std::time::Duration::from_millis(20));
        assert_eq!(t.occupancy(), 0);
        t.close();
        assert!(matches!(early.join().unwrap(), Err(TransitError::Closed(_))));
    }
}

// ── Groups from a matcher ─────────────────────────────────────────────────────

#[cfg(test)]
mod group_tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Step {
        Aboard,
        Operated,
        Leaving,
    }

    type Log = Arc<Mutex<Vec<(CycleId, Step)>>>;

    /// Steps are logged from the transit's callbacks, which run inside the
    /// phase they describe.
    fn ride(t: &TwoPhaseTransit, a: &Assignment, log: &Log) {
        let note = |step| log.lock().unwrap().push((a.cycle(), step));
        t.board_with(a, |_| note(Step::Aboard)).unwrap();
        if a.is_coordinator() {
            t.operate(a, || note(Step::Operated)).unwrap();
        }
        t.disembark_with(a, || note(Step::Leaving)).unwrap();
    }

    fn check(log: &[(CycleId, Step)], cycles: u64, capacity: usize) {
        for n in 1..=cycles {
            let cycle = CycleId(n);
            let count = |step| log.iter().filter(|&&e| e == (cycle, step)).count();
            assert_eq!(count(Step::Aboard), capacity, "cycle {cycle}");
            assert_eq!(count(Step::Operated), 1, "cycle {cycle}");
            assert_eq!(count(Step::Leaving), capacity, "cycle {cycle}");
        }
        // Nobody of cycle N+1 is aboard before everyone of cycle N has left,
        // and within a cycle nobody leaves before the resource is operated.
        let first = |cycle, step| log.iter().position(|&e| e == (cycle, step)).unwrap();
        let last = |cycle, step| log.iter().rposition(|&e| e == (cycle, step)).unwrap();
        for n in 1..=cycles {
            let cycle = CycleId(n);
            assert!(last(cycle, Step::Aboard) < first(cycle, Step::Operated));
            assert!(first(cycle, Step::Operated) < first(cycle, Step::Leaving));
            if n < cycles {
                assert!(last(cycle, Step::Leaving) < first(cycle.next(), Step::Aboard));
            }
        }
    }

    #[test]
    fn water_molecules_never_share_the_chamber() {
        const MOLECULES: u64 = 12;
        let matcher = Arc::new(QuotaMatcher::new(Stoichiometric::water()));
        let chamber = Arc::new(TwoPhaseTransit::new("chamber", 3));
        let log: Log = Arc::default();

        let classes = (0..2 * MOLECULES)
            .map(|_| Element::Hydrogen)
            .chain((0..MOLECULES).map(|_| Element::Oxygen));
        let handles: Vec<_> = classes
            .map(|class| {
                let (matcher, chamber, log) = (Arc::clone(&matcher), Arc::clone(&chamber), Arc::clone(&log));
                thread::spawn(move || {
                    let a = matcher.arrive(class).unwrap();
                    ride(&chamber, &a, &log);
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }

        assert_eq!(chamber.completed(), MOLECULES);
        assert_eq!(chamber.serving(), CycleId(MOLECULES + 1));
        check(&log.lock().unwrap(), MOLECULES, 3);
    }

    #[test]
    fn boat_crossings_are_serialized() {
        const PER_SIDE: usize = 10;
        let policy = FullOrHalf::new(4, Faction::Hacker, Faction::Peasant).unwrap();
        let matcher = Arc::new(QuotaMatcher::new(policy));
        let boat = Arc::new(TwoPhaseTransit::new("boat", 4));
        let log: Log = Arc::default();

        let handles: Vec<_> = (0..PER_SIDE)
            .flat_map(|_| [Faction::Hacker, Faction::Peasant])
            .map(|class| {
                let (matcher, boat, log) = (Arc::clone(&matcher), Arc::clone(&boat), Arc::clone(&log));
                thread::spawn(move || {
                    let a = matcher.arrive(class).unwrap();
                    ride(&boat, &a, &log);
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }

        let crossings = (2 * PER_SIDE / 4) as u64;
        assert_eq!(boat.completed(), crossings);
        check(&log.lock().unwrap(), crossings, 4);
    }
}
