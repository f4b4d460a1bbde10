//! Fan one observer callback out to two.

use rv_sim::{SimEvent, SimObserver};

/// Forwards every callback to `.0`, then `.1`.  Nest for more than two.
pub struct Tee<A, B>(pub A, pub B);

impl<A: SimObserver, B: SimObserver> SimObserver for Tee<A, B> {
    fn on_event(&self, event: &SimEvent) {
        self.0.on_event(event);
        self.1.on_event(event);
    }

    fn on_sim_end(&self, cycles: u64) {
        self.0.on_sim_end(cycles);
        self.1.on_sim_end(cycles);
    }
}
