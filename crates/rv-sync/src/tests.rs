//! Unit and stress tests for rv-sync primitives.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

// ── CountingGate ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod gate_tests {
    use super::*;
    use crate::CountingGate;

    #[test]
    fn try_enter_respects_capacity() {
        let gate = CountingGate::new("chairs", 2);
        assert!(gate.try_enter());
        assert!(gate.try_enter());
        assert!(!gate.try_enter(), "third seat must be refused");
        assert_eq!(gate.occupancy(), 2);
        gate.leave();
        assert!(gate.try_enter());
        assert_eq!(gate.peak(), 2);
    }

    #[test]
    #[should_panic(expected = "left while empty")]
    fn leave_on_empty_gate_panics() {
        let gate = CountingGate::new("door", 1);
        gate.leave();
    }

    #[test]
    #[should_panic(expected = "positive capacity")]
    fn zero_capacity_panics() {
        let _ = CountingGate::new("nothing", 0);
    }

    #[test]
    fn pass_leaves_on_drop() {
        let gate = CountingGate::new("door", 1);
        {
            let _pass = gate.pass();
            assert_eq!(gate.occupancy(), 1);
            assert!(gate.try_pass().is_none());
        }
        assert_eq!(gate.occupancy(), 0);
    }

    #[test]
    fn refused_try_pass_keeps_the_holders_seat() {
        let gate = CountingGate::new("chairs", 2);
        let first = gate.pass();
        let second = gate.try_pass().expect("second chair is free");
        for _ in 0..3 {
            assert!(gate.try_pass().is_none());
            assert_eq!(gate.occupancy(), 2);
        }
        assert!(!gate.try_enter(), "a refused pass must not free a chair");
        drop(second);
        drop(first);
        assert_eq!(gate.occupancy(), 0);
        assert_eq!(gate.peak(), 2);
    }

    #[test]
    fn enter_blocks_until_leave() {
        let gate = Arc::new(CountingGate::new("door", 1));
        gate.enter();

        let entered = Arc::new(AtomicUsize::new(0));
        let handle = {
            let gate = Arc::clone(&gate);
            let entered = Arc::clone(&entered);
            thread::spawn(move || {
                gate.enter();
                entered.store(1, Ordering::SeqCst);
                gate.leave();
            })
        };

        thread::sleep(Duration::from_millis(50));
        assert_eq!(entered.load(Ordering::SeqCst), 0, "must still be blocked");
        gate.leave();
        handle.join().unwrap();
        assert_eq!(entered.load(Ordering::SeqCst), 1);
        assert_eq!(gate.occupancy(), 0);
    }

    /// Many threads hammer `try_enter`/`leave` and a blocking `enter` path;
    /// every thread checks the bound while it holds a seat.
    #[test]
    fn occupancy_stays_within_bounds_under_contention() {
        const CAPACITY: usize = 3;
        let gate = Arc::new(CountingGate::new("chairs", CAPACITY));
        let inside = Arc::new(AtomicUsize::new(0));

        let handles: Vec<_> = (0..16)
            .map(|i| {
                let gate = Arc::clone(&gate);
                let inside = Arc::clone(&inside);
                thread::spawn(move || {
                    for round in 0..200 {
                        let seated = if (i + round) % 3 == 0 {
                            gate.enter();
                            true
                        } else {
                            gate.try_enter()
                        };
                        if seated {
                            let now = inside.fetch_add(1, Ordering::SeqCst) + 1;
                            assert!(now <= CAPACITY, "observed {now} occupants");
                            assert!(gate.occupancy() <= CAPACITY);
                            inside.fetch_sub(1, Ordering::SeqCst);
                            gate.leave();
                        }
                    }
                })
            })
            .collect();

        for h in handles {
            h.join().unwrap();
        }
        assert_eq!(gate.occupancy(), 0);
        assert!(gate.peak() <= CAPACITY);
    }
}

// ── RendezvousBarrier ─────────────────────────────────────────────────────────

#[cfg(test)]
mod barrier_tests {
    use super::*;
    use crate::{RendezvousBarrier, SyncError};

    #[test]
    fn single_party_releases_immediately() {
        let barrier = RendezvousBarrier::new(1);
        assert_eq!(barrier.arrive(), Ok(true));
        assert_eq!(barrier.arrive(), Ok(true));
        assert_eq!(barrier.cycles(), 2);
    }

    #[test]
    fn exactly_one_leader_per_cycle() {
        const K: usize = 4;
        const CYCLES: usize = 25;
        let barrier = Arc::new(RendezvousBarrier::new(K));
        let leaders = Arc::new(AtomicUsize::new(0));

        let handles: Vec<_> = (0..K)
            .map(|_| {
                let barrier = Arc::clone(&barrier);
                let leaders = Arc::clone(&leaders);
                thread::spawn(move || {
                    for _ in 0..CYCLES {
                        if barrier.arrive().unwrap() {
                            leaders.fetch_add(1, Ordering::SeqCst);
                        }
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }

        assert_eq!(leaders.load(Ordering::SeqCst), CYCLES);
        assert_eq!(barrier.cycles(), CYCLES as u64);
        assert_eq!(barrier.waiting(), 0);
    }

    #[test]
    fn nobody_passes_before_the_kth_arrival() {
        let barrier = Arc::new(RendezvousBarrier::new(3));
        let passed = Arc::new(AtomicUsize::new(0));

        let early: Vec<_> = (0..2)
            .map(|_| {
                let barrier = Arc::clone(&barrier);
                let passed = Arc::clone(&passed);
                thread::spawn(move || {
                    barrier.arrive().unwrap();
                    passed.fetch_add(1, Ordering::SeqCst);
                })
            })
            .collect();

        thread::sleep(Duration::from_millis(50));
        assert_eq!(passed.load(Ordering::SeqCst), 0);
        assert_eq!(barrier.waiting(), 2);

        assert_eq!(barrier.arrive(), Ok(true));
        for h in early {
            h.join().unwrap();
        }
        assert_eq!(passed.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn close_releases_stragglers_with_error() {
        let barrier = Arc::new(RendezvousBarrier::new(3));
        let handle = {
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || barrier.arrive())
        };
        thread::sleep(Duration::from_millis(20));
        barrier.close();
        assert_eq!(handle.join().unwrap(), Err(SyncError::Closed("barrier")));
        assert_eq!(barrier.waiting(), 0);
        assert!(barrier.arrive().is_err());
    }
}

// ── TicketSignal ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod signal_tests {
    use super::*;
    use crate::{SyncError, TicketSignal};

    #[test]
    fn tickets_are_fifo() {
        let signal = TicketSignal::new("hydrogen");
        signal.post_many([1, 2, 3]);
        signal.post(4);
        assert_eq!(signal.pending(), 4);
        assert_eq!(signal.wait(), Ok(1));
        assert_eq!(signal.try_wait(), Some(2));
        assert_eq!(signal.wait(), Ok(3));
        assert_eq!(signal.wait(), Ok(4));
        assert_eq!(signal.try_wait(), None);
    }

    #[test]
    fn each_ticket_wakes_exactly_one_waiter() {
        let signal = Arc::new(TicketSignal::<u32>::new("oxygen"));
        let handles: Vec<_> = (0..5)
            .map(|_| {
                let signal = Arc::clone(&signal);
                thread::spawn(move || signal.wait())
            })
            .collect();

        thread::sleep(Duration::from_millis(20));
        signal.post_many(0..3);
        thread::sleep(Duration::from_millis(20));
        signal.close();

        let mut got: Vec<u32> = Vec::new();
        let mut closed = 0;
        for h in handles {
            match h.join().unwrap() {
                Ok(t) => got.push(t),
                Err(SyncError::Closed(_)) => closed += 1,
            }
        }
        got.sort_unstable();
        assert_eq!(got, [0, 1, 2]);
        assert_eq!(closed, 2);
    }

    #[test]
    fn close_still_drains_posted_tickets() {
        let signal = TicketSignal::new("peasant");
        signal.post('a');
        signal.close();
        assert_eq!(signal.wait(), Ok('a'));
        assert_eq!(signal.wait(), Err(SyncError::Closed("peasant")));
    }
}
