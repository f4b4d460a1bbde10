//! Simulated time.
//!
//! # Design
//!
//! Actors "work", "react" and "get help" for a random number of abstract
//! *units*.  `Pace` maps units to wall-clock sleeps:
//!
//!   sleep = units * unit_millis
//!
//! The transcript demos run at one second per unit like a classroom
//! exercise; tests run at zero or one millisecond per unit so a full
//! simulation finishes in a blink.  Nothing in the coordination protocol
//! depends on these delays. They only shake up thread interleavings.

use std::thread;
use std::time::Duration;

use crate::{RvError, RvResult};

/// Longest accepted unit.  Anything larger is almost certainly a seconds vs.
/// milliseconds mix-up.
pub const MAX_UNIT_MILLIS: u64 = 60_000;

// ── Pace ──────────────────────────────────────────────────────────────────────

/// Converts abstract work units to thread sleeps.
///
/// `Pace` is `Copy` and holds no heap data; each actor thread gets its own.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Pace {
    unit: Duration,
}

impl Pace {
    pub fn new(unit: Duration) -> Self {
        Self { unit }
    }

    /// A pace that never sleeps.
    pub fn instant() -> Self {
        Self { unit: Duration::ZERO }
    }

    /// Wall-clock duration of `units` work units.
    #[inline]
    pub fn duration(&self, units: u32) -> Duration {
        self.unit * units
    }

    /// Block the calling thread for `units` work units.  Zero is a no-op.
    pub fn pause(&self, units: u32) {
        let d = self.duration(units);
        if !d.is_zero() {
            thread::sleep(d);
        }
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Run-wide configuration shared by all three simulations.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Master RNG seed.  The same seed always gives every actor the same
    /// sequence of delays and names.
    pub seed: u64,

    /// Milliseconds per simulated work unit.  Default: 1000.
    pub unit_millis: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self { seed: 0, unit_millis: 1_000 }
    }
}

impl SimConfig {
    pub fn validate(&self) -> RvResult<()> {
        if self.unit_millis > MAX_UNIT_MILLIS {
            return Err(RvError::Config(format!(
                "unit_millis {} exceeds {MAX_UNIT_MILLIS}",
                self.unit_millis
            )));
        }
        Ok(())
    }

    /// Construct a `Pace` pre-configured for this run.
    pub fn make_pace(&self) -> Pace {
        Pace::new(Duration::from_millis(self.unit_millis))
    }
}
