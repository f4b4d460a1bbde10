//! Deterministic per-actor and simulation-level RNG wrappers.
//!
//! # Determinism strategy
//!
//! Each actor gets its own independent `SmallRng` seeded by:
//!
//!   seed = global_seed XOR ((class_slot << 32 | actor_id) * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive ids uniformly across the seed space.  Actors
//! never share RNG state, so the random delays an actor draws do not depend
//! on how the OS interleaves threads.  Thread interleaving itself is of
//! course not reproducible.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::{ActorClass, ActorId};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

// ── ActorRng ──────────────────────────────────────────────────────────────────

/// Per-actor deterministic RNG.
///
/// Created on the spawning thread and moved into the actor's worker thread.
pub struct ActorRng(SmallRng);

impl ActorRng {
    /// Seed deterministically from the run's global seed, the actor's class
    /// and its id.
    pub fn new<C: ActorClass>(global_seed: u64, class: C, actor: ActorId) -> Self {
        let key = ((class.index() as u64) << 32) | actor.0 as u64;
        let seed = global_seed ^ key.wrapping_mul(MIXING_CONSTANT);
        ActorRng(SmallRng::seed_from_u64(seed))
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Simulation-level RNG for the few draws that belong to no actor (the
/// teacher's help durations, the run seed when none is configured).
///
/// Owned by a single thread.  If another thread needs randomness, derive a
/// child with [`child`](Self::child).
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Seed from OS entropy.
    pub fn from_entropy() -> Self {
        SimRng(SmallRng::from_entropy())
    }

    /// Derive a child `SimRng` with a different seed offset.
    pub fn child(&mut self, offset: u64) -> SimRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        SimRng(SmallRng::seed_from_u64(child_seed))
    }

    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }
}
