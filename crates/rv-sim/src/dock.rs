//! River crossing: hackers and peasants share one boat that only leaves
//! full, with either a whole boatload of one side or half of each.
//!
//! The boat counter is the transit's cycle number: the first crossing is
//! boat 1 and each fully drained crossing advances it by one.

use std::sync::Arc;

use rv_core::{Actor, ActorId, ActorRng, Faction, SimConfig, names};
use rv_quota::FullOrHalf;

use crate::group::{self, Recruit, Script};
use crate::{DockConfig, EventKind, SimObserver, SimResult, TransitReport};

pub type DockReport = TransitReport<Faction>;

/// Run the dock simulation to completion.
///
/// With a population for which [`DockConfig::always_completes`] holds,
/// every passenger crosses exactly once.  Otherwise whoever is left waiting
/// once the whole population has arrived is reported as stranded.
pub fn run(config: &SimConfig, dock: &DockConfig, observer: Arc<dyn SimObserver>) -> SimResult<DockReport> {
    dock.validate()?;
    let policy = FullOrHalf::new(dock.capacity, Faction::Hacker, Faction::Peasant)?;

    // Alternate sides so neither gets a head start at the start line.
    let hackers = passengers(config.seed, Faction::Hacker, dock.hackers);
    let peasants = passengers(config.seed, Faction::Peasant, dock.peasants);
    let mut recruits = Vec::with_capacity(dock.hackers + dock.peasants);
    let (mut h, mut p) = (hackers.into_iter(), peasants.into_iter());
    loop {
        match (h.next(), p.next()) {
            (None, None) => break,
            (a, b) => recruits.extend(a.into_iter().chain(b)),
        }
    }

    let script = Script {
        sim:           "dock",
        resource:      "boat",
        entered:       EventKind::Boarding,
        operated:      EventKind::Rowing,
        left:          EventKind::Disembarked,
        operate_units: 1..=2,
    };
    group::run(config, recruits, policy, script, observer)
}

fn passengers(seed: u64, side: Faction, n: usize) -> Vec<Recruit<Faction>> {
    (1..=n as u32)
        .map(|i| {
            let id = ActorId(i);
            let mut rng = ActorRng::new(seed, side, id);
            let name = names::random_name(&mut rng);
            Recruit { actor: Actor::named(id, side, name), rng }
        })
        .collect()
}
