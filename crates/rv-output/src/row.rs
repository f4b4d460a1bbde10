//! Plain data row type written by event writers.

use rv_sim::SimEvent;

/// One transcript event, flattened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRow {
    /// 1-based position in the order the log received events.
    pub seq:   u64,
    /// Group cycle (molecule / boat number), if the event belongs to one.
    pub cycle: Option<u64>,
    pub actor: u32,
    pub class: &'static str,
    pub event: &'static str,
}

impl EventRow {
    pub fn from_event(seq: u64, event: &SimEvent) -> Self {
        Self {
            seq,
            cycle: event.cycle.map(|c| c.0),
            actor: event.actor.id.0,
            class: event.actor.class,
            event: event.kind.label(),
        }
    }
}
