//! Coordinator selection.
//!
//! Exactly one member of every released group is its coordinator: the actor
//! whose registration triggered the release.  It performs the group's
//! privileged action (rows the boat, forms the molecule) and is the only
//! party allowed to advance the shared resource past its privileged phase.
//! Everyone else is a plain member and follows the normal path.

use std::fmt;

use rv_core::{ActorClass, CycleId};

use crate::Wakeups;

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Role {
    Coordinator,
    Member,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Role::Coordinator => "coordinator",
            Role::Member => "member",
        })
    }
}

/// Admission to one group cycle.  Members receive theirs through their class
/// signal; the coordinator receives its own directly.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct Ticket {
    cycle: CycleId,
}

impl Ticket {
    pub fn new(cycle: CycleId) -> Self {
        Self { cycle }
    }

    #[inline]
    pub fn cycle(self) -> CycleId {
        self.cycle
    }
}

/// What a released actor learns about its group.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct Assignment {
    pub ticket: Ticket,
    pub role:   Role,
}

impl Assignment {
    pub fn member(ticket: Ticket) -> Self {
        Self { ticket, role: Role::Member }
    }

    #[inline]
    pub fn cycle(&self) -> CycleId {
        self.ticket.cycle
    }

    #[inline]
    pub fn is_coordinator(&self) -> bool {
        self.role == Role::Coordinator
    }
}

/// Numbers group cycles and designates each cycle's coordinator.
///
/// Lives inside the matcher's coordination lock; cycle numbers are therefore
/// handed out in release order.
#[derive(Debug)]
pub struct RoleAssigner {
    next: CycleId,
}

impl Default for RoleAssigner {
    fn default() -> Self {
        Self::new()
    }
}

impl RoleAssigner {
    pub fn new() -> Self {
        Self { next: CycleId::FIRST }
    }

    /// Open the next cycle for a released group that `trigger` completed.
    ///
    /// Returns the trigger's coordinator assignment and the remaining
    /// wake-ups: one ticket per class slot, with the trigger's own slot
    /// already removed.
    ///
    /// # Panics
    /// Panics if `wakeups` has no slot for `trigger`'s class: a group the
    /// trigger is not part of would have no coordinator.
    pub fn open_cycle<C: ActorClass>(
        &mut self,
        wakeups: &Wakeups<C>,
        trigger: C,
    ) -> (Assignment, Vec<(C, usize)>) {
        assert!(
            wakeups.of(trigger) > 0,
            "released group {wakeups} does not include its trigger ({trigger})"
        );
        let ticket = Ticket { cycle: self.next };
        self.next = self.next.next();

        let members = wakeups
            .iter()
            .map(|(class, n)| if class == trigger { (class, n - 1) } else { (class, n) })
            .filter(|&(_, n)| n > 0)
            .collect();

        (Assignment { ticket, role: Role::Coordinator }, members)
    }

    /// Cycles opened so far.
    pub fn opened(&self) -> u64 {
        self.next.0 - CycleId::FIRST.0
    }
}
