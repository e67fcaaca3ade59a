//! Consumers of the runtime event stream.
use super::{Event, Topic};
use crate::api::Result;

use arena_core::{CombatEvent, ProgressEvent};

/// Receives every event in the order it happened.
///
/// Returning an error aborts the running battle or session.
pub trait EventObserver {
    fn on_event(&mut self, event: &Event) -> Result<()>;
}

impl<O: EventObserver + ?Sized> EventObserver for &mut O {
    fn on_event(&mut self, event: &Event) -> Result<()> {
        (**self).on_event(event)
    }
}

impl<O: EventObserver + ?Sized> EventObserver for Box<O> {
    fn on_event(&mut self, event: &Event) -> Result<()> {
        (**self).on_event(event)
    }
}

/// Discards everything.
impl EventObserver for () {
    fn on_event(&mut self, _event: &Event) -> Result<()> {
        Ok(())
    }
}

/// Fans out to both observers, first one first.
impl<A: EventObserver, B: EventObserver> EventObserver for (A, B) {
    fn on_event(&mut self, event: &Event) -> Result<()> {
        self.0.on_event(event)?;
        self.1.on_event(event)
    }
}

/// Records the stream in memory for later inspection.
#[derive(Debug, Default, Clone)]
pub struct EventLog {
    events: Vec<Event>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn combat(&self) -> impl Iterator<Item = &CombatEvent> {
        self.events.iter().filter_map(Event::as_combat)
    }

    pub fn progress(&self) -> impl Iterator<Item = &ProgressEvent> {
        self.events.iter().filter_map(Event::as_progress)
    }

    pub fn by_topic(&self, topic: Topic) -> impl Iterator<Item = &Event> {
        self.events.iter().filter(move |event| event.topic() == topic)
    }

    pub fn into_events(self) -> Vec<Event> {
        self.events
    }
}

impl EventObserver for EventLog {
    fn on_event(&mut self, event: &Event) -> Result<()> {
        self.events.push(event.clone());
        Ok(())
    }
}
