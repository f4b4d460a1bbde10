//! `CountingGate` — bounded-occupancy admission.
//!
//! # Protocol
//!
//! Occupancy lives in a single `AtomicUsize`.  [`try_enter`] is one
//! compare-and-swap loop (`fetch_update`) that increments only while the
//! count is below capacity, so it never blocks and never takes a lock.
//!
//! Blocking [`enter`] parks on a condition variable.  The re-check runs while
//! holding the parking mutex and [`leave`] takes that same mutex between its
//! decrement and its `notify_one`, so a vacancy can never slip past a thread
//! that is about to park.
//!
//! [`try_enter`]: CountingGate::try_enter
//! [`enter`]: CountingGate::enter
//! [`leave`]: CountingGate::leave

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Condvar, Mutex};

use tracing::trace;

use crate::guard::{lock, wait_while};

/// A bounded waiting area (chairs, an office door, …).
///
/// Invariant: `0 <= occupancy() <= capacity()` at every instant.
pub struct CountingGate {
    name:      &'static str,
    capacity:  usize,
    occupancy: AtomicUsize,
    /// High-water mark, for display and tests.
    peak:      AtomicUsize,
    parking:   Mutex<()>,
    vacancy:   Condvar,
}

impl CountingGate {
    /// A gate admitting at most `capacity` occupants.
    ///
    /// # Panics
    /// Panics if `capacity` is zero: such a gate could never admit anyone.
    pub fn new(name: &'static str, capacity: usize) -> Self {
        assert!(capacity > 0, "gate `{name}` must have a positive capacity");
        Self {
            name,
            capacity,
            occupancy: AtomicUsize::new(0),
            peak:      AtomicUsize::new(0),
            parking:   Mutex::new(()),
            vacancy:   Condvar::new(),
        }
    }

    /// Take a seat if one is free.  Never blocks.
    pub fn try_enter(&self) -> bool {
        let capacity = self.capacity;
        match self
            .occupancy
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |n| (n < capacity).then_some(n + 1))
        {
            Ok(before) => {
                self.peak.fetch_max(before + 1, Ordering::Relaxed);
                trace!(gate = self.name, occupancy = before + 1, "entered");
                true
            }
            Err(_) => false,
        }
    }

    /// Take a seat, blocking until one is free.
    pub fn enter(&self) {
        if self.try_enter() {
            return;
        }
        let guard = lock(&self.parking);
        let _guard = wait_while(&self.vacancy, guard, |_| !self.try_enter());
    }

    /// Give a seat back and wake one blocked [`enter`](Self::enter).
    ///
    /// # Panics
    /// Panics if the gate is already empty; every `leave` must pair with a
    /// successful `enter`/`try_enter`.
    pub fn leave(&self) {
        let left = self
            .occupancy
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |n| n.checked_sub(1));
        let before = match left {
            Ok(before) => before,
            Err(_) => panic!("gate `{}` left while empty", self.name),
        };
        trace!(gate = self.name, occupancy = before - 1, "left");

        drop(lock(&self.parking));
        self.vacancy.notify_one();
    }

    /// Blocking [`enter`](Self::enter) returning a seat that leaves on drop.
    pub fn pass(&self) -> GatePass<'_> {
        self.enter();
        GatePass { gate: self }
    }

    /// Non-blocking [`try_enter`](Self::try_enter) returning a seat that
    /// leaves on drop.
    pub fn try_pass(&self) -> Option<GatePass<'_>> {
        self.try_enter().then(|| GatePass { gate: self })
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Current number of occupants.  May be stale by the time it is read.
    #[inline]
    pub fn occupancy(&self) -> usize {
        self.occupancy.load(Ordering::Acquire)
    }

    /// The largest occupancy ever reached.
    #[inline]
    pub fn peak(&self) -> usize {
        self.peak.load(Ordering::Relaxed)
    }
}

impl fmt::Debug for CountingGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CountingGate")
            .field("name", &self.name)
            .field("occupancy", &self.occupancy())
            .field("capacity", &self.capacity)
            .finish()
    }
}

/// One occupied seat in a [`CountingGate`].  Dropping it leaves the gate.
#[must_use = "dropping a GatePass immediately gives the seat back"]
pub struct GatePass<'a> {
    gate: &'a CountingGate,
}

impl GatePass<'_> {
    pub fn gate(&self) -> &CountingGate {
        self.gate
    }
}

impl Drop for GatePass<'_> {
    fn drop(&mut self) {
        self.gate.leave();
    }
}
