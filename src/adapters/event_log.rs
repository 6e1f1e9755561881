//! Recording listener that keeps every event in emission order

use serde::{Deserialize, Serialize};

use crate::{engine::Event, ports::EventListener};

/// Engine listener that records events
///
/// The most recent event is always available through [`EventLog::last`],
/// which is how callers observe the outcome of the action they just invoked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
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

    pub fn last(&self) -> Option<&Event> {
        self.events.last()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Drain the recorded events, leaving the log empty
    pub fn take(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }
}

impl EventListener for EventLog {
    fn on_event(&mut self, event: &Event) {
        self.events.push(event.clone());
    }
}

impl IntoIterator for EventLog {
    type Item = Event;
    type IntoIter = std::vec::IntoIter<Event>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_order_and_drains() {
        let mut log = EventLog::new();
        assert!(log.last().is_none());

        log.on_event(&Event::GameStarted { kind: None });
        log.on_event(&Event::GameStopped);
        assert_eq!(log.len(), 2);
        assert_eq!(log.last(), Some(&Event::GameStopped));
        assert_eq!(log.events()[0].name(), "game_started");

        let drained = log.take();
        assert_eq!(drained.len(), 2);
        assert!(log.is_empty());
    }

    #[test]
    fn test_serializes_as_plain_array() {
        let mut log = EventLog::new();
        log.on_event(&Event::GameStopped);
        assert_eq!(
            serde_json::to_string(&log).unwrap(),
            r#"[{"name":"game_stopped"}]"#
        );
    }
}
