//! The `QuotaPolicy` trait and the per-class count vector it works on.

use std::fmt;
use std::marker::PhantomData;

use rv_core::ActorClass;

// ── ClassCounts ───────────────────────────────────────────────────────────────

/// One non-negative counter per actor class, indexed by [`ActorClass::index`].
///
/// Used both for the matcher's pending counts and for the composition of a
/// released group ([`Wakeups`]).
#[derive(Clone, PartialEq, Eq)]
pub struct ClassCounts<C: ActorClass> {
    counts: Vec<usize>,
    _class: PhantomData<C>,
}

/// Class → number of actors to wake for one released group.
pub type Wakeups<C> = ClassCounts<C>;

impl<C: ActorClass> ClassCounts<C> {
    /// All counters at zero.
    pub fn zero() -> Self {
        Self { counts: vec![0; C::count()], _class: PhantomData }
    }

    /// Build from `(class, count)` pairs; repeated classes accumulate.
    pub fn from_pairs<I: IntoIterator<Item = (C, usize)>>(pairs: I) -> Self {
        let mut counts = Self::zero();
        for (class, n) in pairs {
            counts.add(class, n);
        }
        counts
    }

    #[inline]
    pub fn of(&self, class: C) -> usize {
        self.counts[class.index()]
    }

    #[inline]
    pub fn add(&mut self, class: C, n: usize) {
        self.counts[class.index()] += n;
    }

    /// Subtract `other` slot by slot.
    ///
    /// # Panics
    /// Panics if any slot would go negative.
    pub fn consume(&mut self, other: &ClassCounts<C>) {
        for class in C::ALL {
            let slot = &mut self.counts[class.index()];
            *slot = slot
                .checked_sub(other.of(*class))
                .unwrap_or_else(|| panic!("{class} count would go negative"));
        }
    }

    /// Sum over all classes.
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Non-zero `(class, count)` pairs in class order.
    pub fn iter(&self) -> impl Iterator<Item = (C, usize)> + '_ {
        C::ALL
            .iter()
            .map(|&class| (class, self.of(class)))
            .filter(|&(_, n)| n > 0)
    }
}

impl<C: ActorClass> fmt::Debug for ClassCounts<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(C::ALL.iter().map(|c| (c, self.of(*c)))).finish()
    }
}

impl<C: ActorClass> fmt::Display for ClassCounts<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (class, n) in self.iter() {
            if !first {
                f.write_str(" + ")?;
            }
            write!(f, "{n} {class}")?;
            first = false;
        }
        if first {
            f.write_str("nobody")?;
        }
        Ok(())
    }
}

// ── QuotaPolicy ───────────────────────────────────────────────────────────────

/// Decides when the pending actors can form a valid group.
///
/// The matcher calls [`release`](Self::release) with its coordination lock
/// held, right after counting the new arrival into `pending`.  Returning
/// `Some(wakeups)` commits the matcher to waking exactly that composition,
/// which must
///
/// - fit inside `pending` slot by slot,
/// - include at least one actor of class `arrived` (the caller becomes the
///   group's coordinator),
/// - sum to [`group_size`](Self::group_size).
///
/// The matcher asserts all three.
pub trait QuotaPolicy<C: ActorClass>: Send + Sync + 'static {
    /// Number of actors in every released group.
    fn group_size(&self) -> usize;

    /// The group to release, if the arrival of `arrived` completed one.
    fn release(&self, pending: &ClassCounts<C>, arrived: C) -> Option<Wakeups<C>>;
}
