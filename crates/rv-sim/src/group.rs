//! Shared runner for the group simulations (chamber and dock).
//!
//! ```text
//! per actor thread:
//!   start line
//!   matcher.arrive(class)        → Assignment, or Stranded on close
//!   jitter of 0 or 1 unit
//!   transit.board                → `entered` event once seated
//!   coordinator: transit.operate → `operated` event, then a pause
//!   transit.disembark            → `left` event once off
//! ```
//!
//! A rider that panics closes the start line, the matcher and the transit
//! on its way out, so the rest of the crew returns `Closed` instead of
//! waiting for it.

use std::ops::RangeInclusive;
use std::sync::Arc;

use rv_core::{Actor, ActorClass, ActorRng, SimConfig};
use rv_quota::{QuotaError, QuotaMatcher, QuotaPolicy};
use rv_sync::RendezvousBarrier;
use rv_transit::TwoPhaseTransit;
use tracing::{info, warn};

use crate::crew::{Crew, OnUnwind};
use crate::{EventKind, Ride, Rider, SimError, SimEvent, SimObserver, SimResult, TransitReport};

/// The parts of a group simulation that differ between chamber and dock.
pub(crate) struct Script {
    pub sim:           &'static str,
    pub resource:      &'static str,
    pub entered:       EventKind,
    pub operated:      EventKind,
    pub left:          EventKind,
    /// Units the coordinator spends operating the resource.
    pub operate_units: RangeInclusive<u32>,
}

/// One actor waiting to be spawned: identity plus its own RNG.
pub(crate) struct Recruit<C: ActorClass> {
    pub actor: Actor<C>,
    pub rng:   ActorRng,
}

pub(crate) fn run<C, P>(
    config:   &SimConfig,
    recruits: Vec<Recruit<C>>,
    policy:   P,
    script:   Script,
    observer: Arc<dyn SimObserver>,
) -> SimResult<TransitReport<C>>
where
    C: ActorClass,
    P: QuotaPolicy<C>,
{
    let crew = Crew::with_capacity(recruits.len());
    run_on(crew, config, recruits, policy, script, observer)
}

/// [`run`] with the actor threads spawned through `crew`.
pub(crate) fn run_on<C, P>(
    mut crew: Crew<SimResult<Rider<C>>>,
    config:   &SimConfig,
    recruits: Vec<Recruit<C>>,
    policy:   P,
    script:   Script,
    observer: Arc<dyn SimObserver>,
) -> SimResult<TransitReport<C>>
where
    C: ActorClass,
    P: QuotaPolicy<C>,
{
    config.validate()?;
    let population = recruits.len();
    if population == 0 {
        return Err(SimError::Config(format!("{} run has no actors", script.sim)));
    }
    let capacity = policy.group_size();

    let start = Arc::new(RendezvousBarrier::new(population));
    let matcher = Arc::new(QuotaMatcher::new(policy));
    let transit = Arc::new(TwoPhaseTransit::new(script.resource, capacity));
    let script = Arc::new(script);
    let pace = config.make_pace();

    info!(sim = script.sim, population, capacity, "starting run");

    for Recruit { actor, mut rng } in recruits {
        let name = format!("{}-{}", actor.class().label().to_lowercase(), actor.id());
        let spawned = {
            let (start, matcher, transit, script, observer) = (
                Arc::clone(&start),
                Arc::clone(&matcher),
                Arc::clone(&transit),
                Arc::clone(&script),
                Arc::clone(&observer),
            );
            crew.spawn(name, move || -> SimResult<Rider<C>> {
                let _unwind = OnUnwind(|| {
                    start.close();
                    matcher.close();
                    transit.close();
                });
                let badge = actor.badge();
                let class = actor.class();
                let emit = |cycle, kind: &EventKind| {
                    observer.on_event(&SimEvent::in_cycle(badge.clone(), cycle, kind.clone()));
                };

                start.arrive()?;
                let assignment = match matcher.arrive(class) {
                    Ok(assignment) => assignment,
                    Err(QuotaError::Closed(_)) => {
                        observer.on_event(&SimEvent::new(badge.clone(), EventKind::Stranded));
                        return Ok(Rider { badge, class, ride: Ride::Stranded });
                    }
                    Err(e) => return Err(e.into()),
                };
                let cycle = assignment.cycle();

                pace.pause(rng.gen_range(0..=1u32));
                transit.board_with(&assignment, |_| emit(cycle, &script.entered))?;
                if assignment.is_coordinator() {
                    let units = rng.gen_range(script.operate_units.clone());
                    transit.operate(&assignment, || {
                        emit(cycle, &script.operated);
                        pace.pause(units);
                    })?;
                }
                transit.disembark_with(&assignment, || emit(cycle, &script.left))?;

                Ok(Rider { badge, class, ride: Ride::Crossed(assignment) })
            })
        };

        if let Err(e) = spawned {
            warn!(sim = script.sim, error = %e, "spawn failed, shutting the run down");
            start.close();
            matcher.close();
            transit.close();
            crew.abandon();
            return Err(e);
        }
    }

    // An `Err` here means an unwinding actor closed the matcher; the join
    // below reports the panic.
    if let Ok(stranded) = matcher.wait_registered(population) {
        if !stranded.is_empty() {
            warn!(sim = script.sim, %stranded, "no group can form for the remaining actors");
            matcher.close();
        }
    }

    let riders = crew.join()?.into_iter().collect::<SimResult<Vec<_>>>()?;
    let report = TransitReport::from_riders(riders);

    info!(sim = script.sim, cycles = transit.completed(), "run finished");
    observer.on_sim_end(transit.completed());
    Ok(report)
}
