//! Occupancy phase of a [`TwoPhaseTransit`](crate::TwoPhaseTransit).

use std::fmt;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Nobody aboard; the serving cycle may start boarding.
    #[default]
    Empty,
    /// Some, but not all, of the serving cycle's members are aboard.
    Filling,
    /// Every member is aboard and the coordinator has not operated yet.
    Full,
    /// The resource has been operated; members are getting off.
    Draining,
}

impl Phase {
    /// `true` while the serving cycle may still board.
    #[inline]
    pub fn admits_boarding(self) -> bool {
        matches!(self, Phase::Empty | Phase::Filling)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Phase::Empty => "empty",
            Phase::Filling => "filling",
            Phase::Full => "full",
            Phase::Draining => "draining",
        })
    }
}
