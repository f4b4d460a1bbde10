//! Actor class tags.
//!
//! Every simulation sorts its actors into a small, fixed set of classes.  The
//! quota matcher keeps one pending counter and one wake-up signal per class,
//! indexed by [`ActorClass::index`], so the set must be closed and dense.

use std::fmt;
use std::hash::Hash;

/// A closed enumeration of actor kinds that can be counted per class.
///
/// Implementors list every variant in [`ALL`](Self::ALL) in index order:
/// `ALL[c.index()] == c` must hold for every variant `c`.
pub trait ActorClass:
    Copy + Eq + Hash + fmt::Debug + fmt::Display + Send + Sync + 'static
{
    /// Every variant, ordered by [`index`](Self::index).
    const ALL: &'static [Self];

    /// Dense slot in `0..ALL.len()`.
    fn index(self) -> usize;

    /// Upper-case transcript label (`"HYDROGEN"`, `"PEASANT"`, …).
    fn label(self) -> &'static str;

    /// Number of variants.
    #[inline]
    fn count() -> usize {
        Self::ALL.len()
    }
}

/// Generate a class enum together with its `ActorClass` and `Display` impls.
macro_rules! actor_class {
    (
        $(#[$attr:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$vattr:meta])* $variant:ident => $label:literal ),+ $(,)?
        }
    ) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis enum $name {
            $( $(#[$vattr])* $variant ),+
        }

        impl ActorClass for $name {
            const ALL: &'static [Self] = &[$($name::$variant),+];

            #[inline]
            fn index(self) -> usize {
                self as usize
            }

            fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

actor_class! {
    /// Atoms feeding the reaction chamber.
    pub enum Element {
        Oxygen => "OXYGEN",
        Hydrogen => "HYDROGEN",
    }
}

actor_class! {
    /// Passengers waiting at the dock.
    pub enum Faction {
        Hacker => "HACKER",
        Peasant => "PEASANT",
    }
}

actor_class! {
    /// Occupants of the office simulation.
    ///
    /// Only students compete for the office; the teacher is a single service
    /// thread and never registers anywhere.
    pub enum Occupant {
        Student => "STUDENT",
        Teacher => "TEACHER",
    }
}
