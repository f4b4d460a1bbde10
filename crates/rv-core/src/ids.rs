//! Strongly typed, zero-cost identifier wrappers.
//!
//! All IDs are `Copy + Ord + Hash` so they can be used as map keys and sorted
//! collection elements without ceremony.  There is no sentinel value: every
//! id that exists was handed out by a run, starting from 1.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);
    };
}

typed_id! {
    /// Per-class actor number.  Numbering starts at 1, matching the labels
    /// printed in the transcript (`HACKER 1`, `STUDENT 1`, …).
    pub struct ActorId(u32);
}

typed_id! {
    /// Sequence number of one group transit through a shared resource.
    ///
    /// The first cycle is `CycleId::FIRST` (1); every released group takes the
    /// next number, so cycle ids double as the boat counter.
    pub struct CycleId(u64);
}

impl CycleId {
    pub const FIRST: CycleId = CycleId(1);

    /// The cycle after `self`.
    #[inline]
    pub fn next(self) -> CycleId {
        CycleId(self.0 + 1)
    }
}

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for CycleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
