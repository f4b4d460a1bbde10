//! Water: hydrogen and oxygen atoms bond in a reaction chamber, two
//! hydrogen and one oxygen at a time.
//!
//! Atoms carry no display name.  Ids are numbered per element from 1, so the
//! default population is `HYDROGEN 1..=10` and `OXYGEN 1..=5`.

use std::sync::Arc;

use rv_core::{Actor, ActorId, ActorRng, Element, SimConfig};
use rv_quota::Stoichiometric;

use crate::group::{self, Recruit, Script};
use crate::{ChamberConfig, EventKind, SimObserver, SimResult, TransitReport};

pub type ChamberReport = TransitReport<Element>;

/// Run the chamber simulation to completion.
///
/// Returns once every atom has either been part of a molecule or been left
/// over with no partner.  `report.cycles` lists the molecules in formation
/// order.
pub fn run(
    config:   &SimConfig,
    chamber:  &ChamberConfig,
    observer: Arc<dyn SimObserver>,
) -> SimResult<ChamberReport> {
    chamber.validate()?;

    let recruits = atoms(config.seed, Element::Hydrogen, chamber.hydrogen)
        .chain(atoms(config.seed, Element::Oxygen, chamber.oxygen))
        .collect();

    let script = Script {
        sim:           "chamber",
        resource:      "reaction chamber",
        entered:       EventKind::EnteredChamber,
        operated:      EventKind::MoleculeFormed,
        left:          EventKind::LeftChamber,
        operate_units: 0..=1,
    };
    group::run(config, recruits, Stoichiometric::water(), script, observer)
}

fn atoms(seed: u64, element: Element, n: usize) -> impl Iterator<Item = Recruit<Element>> {
    (1..=n as u32).map(move |i| {
        let id = ActorId(i);
        Recruit { actor: Actor::new(id, element), rng: ActorRng::new(seed, element, id) }
    })
}
