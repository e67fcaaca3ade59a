//! Event routing between the battle engine and its consumers.
//!
//! Core emits [`CombatEvent`]s and [`ProgressEvent`]s; the runtime wraps
//! them in a single [`Event`] stream and hands each one to an
//! [`EventObserver`].
mod observer;

pub use observer::{EventLog, EventObserver};

use arena_core::{CombatEvent, ProgressEvent};

/// Topics for event routing
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub enum Topic {
    /// Everything inside a single battle
    Combat,
    /// Rewards, level ups and session boundaries
    Progress,
}

/// Event wrapper that carries the topic and typed event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Combat(CombatEvent),
    Progress(ProgressEvent),
}

impl Event {
    pub fn topic(&self) -> Topic {
        match self {
            Event::Combat(_) => Topic::Combat,
            Event::Progress(_) => Topic::Progress,
        }
    }

    pub fn as_combat(&self) -> Option<&CombatEvent> {
        match self {
            Event::Combat(event) => Some(event),
            Event::Progress(_) => None,
        }
    }

    pub fn as_progress(&self) -> Option<&ProgressEvent> {
        match self {
            Event::Progress(event) => Some(event),
            Event::Combat(_) => None,
        }
    }
}

impl From<CombatEvent> for Event {
    fn from(event: CombatEvent) -> Self {
        Event::Combat(event)
    }
}

impl From<ProgressEvent> for Event {
    fn from(event: ProgressEvent) -> Self {
        Event::Progress(event)
    }
}
