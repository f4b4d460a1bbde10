//! Actor identity.
//!
//! An `Actor` is created once at simulation start, moved into its own worker
//! thread, and dropped when that thread returns.  Nothing about it changes in
//! between; coordination state lives in the shared primitives, never here.

use std::fmt;
use std::sync::Arc;

use crate::{ActorClass, ActorId};

/// Immutable identity of one worker thread.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Actor<C: ActorClass> {
    id:    ActorId,
    class: C,
    name:  Option<Arc<str>>,
}

impl<C: ActorClass> Actor<C> {
    /// An anonymous actor (atoms carry no display name).
    pub fn new(id: ActorId, class: C) -> Self {
        Self { id, class, name: None }
    }

    /// A named actor (students, hackers, peasants).
    pub fn named(id: ActorId, class: C, name: impl Into<Arc<str>>) -> Self {
        Self { id, class, name: Some(name.into()) }
    }

    #[inline]
    pub fn id(&self) -> ActorId {
        self.id
    }

    #[inline]
    pub fn class(&self) -> C {
        self.class
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Identity-only reference handed to shared resources and observers.
    ///
    /// A badge never owns the actor's thread; holders can display it and
    /// compare it, nothing more.
    pub fn badge(&self) -> Badge {
        Badge {
            id:    self.id,
            class: self.class.label(),
            name:  self.name.clone(),
        }
    }
}

impl<C: ActorClass> fmt::Display for Actor<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.badge(), f)
    }
}

/// Class-erased identity of an actor: `(class label, id, optional name)`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Badge {
    pub id:    ActorId,
    pub class: &'static str,
    pub name:  Option<Arc<str>>,
}

impl fmt::Display for Badge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{} {}: {}", self.class, self.id, name),
            None => write!(f, "{} {}", self.class, self.id),
        }
    }
}
