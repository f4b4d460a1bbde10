//! Per-simulation population and capacity settings.
//!
//! Run-wide settings (seed, unit length) live in [`rv_core::SimConfig`];
//! the structs here only describe who takes part and how much room there is.

use tracing::warn;

use crate::{SimError, SimResult};

// ── OfficeConfig ──────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OfficeConfig {
    /// Students working and queueing for help.  Default: 8.
    pub students: usize,
    /// Chairs in the waiting room.  Default: 5.
    pub chairs: usize,
}

impl Default for OfficeConfig {
    fn default() -> Self {
        Self { students: 8, chairs: 5 }
    }
}

impl OfficeConfig {
    pub fn validate(&self) -> SimResult<()> {
        if self.students == 0 {
            return Err(SimError::Config("office needs at least one student".into()));
        }
        if self.chairs == 0 {
            return Err(SimError::Config("waiting room needs at least one chair".into()));
        }
        Ok(())
    }
}

// ── ChamberConfig ─────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChamberConfig {
    /// Default: 10.
    pub hydrogen: usize,
    /// Default: 5.
    pub oxygen: usize,
}

impl Default for ChamberConfig {
    fn default() -> Self {
        Self { hydrogen: 10, oxygen: 5 }
    }
}

impl ChamberConfig {
    /// Molecules the population can form.
    pub fn molecules(&self) -> usize {
        (self.hydrogen / 2).min(self.oxygen)
    }

    pub fn validate(&self) -> SimResult<()> {
        if self.hydrogen + self.oxygen == 0 {
            return Err(SimError::Config("chamber needs at least one atom".into()));
        }
        let molecules = self.molecules();
        if self.hydrogen != 2 * molecules || self.oxygen != molecules {
            warn!(
                hydrogen = self.hydrogen,
                oxygen = self.oxygen,
                molecules,
                "population is not 2:1, leftover atoms will never react"
            );
        }
        Ok(())
    }
}

// ── DockConfig ────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DockConfig {
    /// Default: 6.
    pub hackers: usize,
    /// Default: 6.
    pub peasants: usize,
    /// Seats per boat.  Must be even.  Default: 4.
    pub capacity: usize,
}

impl Default for DockConfig {
    fn default() -> Self {
        Self { hackers: 6, peasants: 6, capacity: 4 }
    }
}

impl DockConfig {
    /// `true` if every passenger is guaranteed a crossing.
    ///
    /// Each crossing takes a multiple of `capacity / 2` from each side, and
    /// a half load only leaves once the other side has a half load waiting,
    /// so both sides must be multiples of the half load and the total a
    /// multiple of the full one.
    pub fn always_completes(&self) -> bool {
        let half = self.capacity / 2;
        half > 0
            && self.hackers.is_multiple_of(half)
            && self.peasants.is_multiple_of(half)
            && (self.hackers + self.peasants).is_multiple_of(self.capacity)
    }

    pub fn validate(&self) -> SimResult<()> {
        if self.capacity < 2 || !self.capacity.is_multiple_of(2) {
            return Err(SimError::Config(format!(
                "boat capacity must be even and at least 2, got {}",
                self.capacity
            )));
        }
        if self.hackers + self.peasants == 0 {
            return Err(SimError::Config("dock needs at least one passenger".into()));
        }
        if !self.always_completes() {
            warn!(
                hackers = self.hackers,
                peasants = self.peasants,
                capacity = self.capacity,
                "population may leave passengers stranded at the dock"
            );
        }
        Ok(())
    }
}
