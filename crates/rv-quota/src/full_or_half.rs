//! Boat-style matching: a full load of one class, or an even split.

use rv_core::ActorClass;

use crate::{ClassCounts, QuotaError, QuotaPolicy, QuotaResult, Wakeups};

/// Release `capacity` actors of one class, or `capacity / 2` of each of the
/// two classes.
///
/// Only the arrival that makes its own class *reach* a threshold triggers:
///
/// - `pending[arrived] == capacity`                          → K of `arrived`
/// - `pending[arrived] == capacity/2 && pending[other] >= capacity/2`
///                                                           → K/2 of each
///
/// Since pending counts grow by one per arrival and shrink only on release,
/// every reachable threshold is seen by exactly one arrival.
#[derive(Clone, Debug)]
pub struct FullOrHalf<C: ActorClass> {
    capacity: usize,
    first:    C,
    second:   C,
}

impl<C: ActorClass> FullOrHalf<C> {
    /// # Errors
    /// `capacity` must be even and at least 2, and the two classes distinct.
    pub fn new(capacity: usize, first: C, second: C) -> QuotaResult<Self> {
        if capacity < 2 || capacity % 2 != 0 {
            return Err(QuotaError::Policy(format!(
                "capacity must be an even number >= 2, got {capacity}"
            )));
        }
        if first == second {
            return Err(QuotaError::Policy(format!("both classes are {first}")));
        }
        Ok(Self { capacity, first, second })
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn half(&self) -> usize {
        self.capacity / 2
    }

    fn other(&self, class: C) -> Option<C> {
        if class == self.first {
            Some(self.second)
        } else if class == self.second {
            Some(self.first)
        } else {
            None
        }
    }
}

impl<C: ActorClass> QuotaPolicy<C> for FullOrHalf<C> {
    fn group_size(&self) -> usize {
        self.capacity
    }

    fn release(&self, pending: &ClassCounts<C>, arrived: C) -> Option<Wakeups<C>> {
        let other = self.other(arrived)?;
        let mine = pending.of(arrived);

        if mine == self.capacity {
            Some(ClassCounts::from_pairs([(arrived, self.capacity)]))
        } else if mine == self.half() && pending.of(other) >= self.half() {
            Some(ClassCounts::from_pairs([(arrived, self.half()), (other, self.half())]))
        } else {
            None
        }
    }
}
