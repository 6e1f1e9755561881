//! Listener that logs engine events through `tracing` before forwarding them

use tracing::info;

use super::EventLog;
use crate::{
    engine::{Event, Outcome},
    ports::EventListener,
};

/// Logs each event at `info` level, then hands it to the wrapped listener.
#[derive(Debug, Clone, Default)]
pub struct TracingListener<L = EventLog> {
    inner: L,
}

impl<L: EventListener> TracingListener<L> {
    pub fn new(inner: L) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &L {
        &self.inner
    }

    pub fn inner_mut(&mut self) -> &mut L {
        &mut self.inner
    }

    pub fn into_inner(self) -> L {
        self.inner
    }
}

impl<L: EventListener> EventListener for TracingListener<L> {
    fn on_event(&mut self, event: &Event) {
        match event {
            Event::GameOver {
                outcome: Outcome::Winner { details },
                last_move,
            } => info!(
                event = event.name(),
                winner = %last_move.turn,
                at = %last_move.position(),
                lines = details.len(),
                "game won"
            ),
            Event::GameOver {
                outcome: Outcome::Squashed,
                last_move,
            } => info!(event = event.name(), at = %last_move.position(), "game squashed"),
            Event::NextTurn { last_move } => {
                info!(event = event.name(), turn = %last_move.turn, at = %last_move.position())
            }
            Event::InvalidMove { reason } => info!(event = event.name(), ?reason),
            Event::GameStarted { .. } | Event::GameStopped => info!(event = event.name()),
        }
        self.inner.on_event(event);
    }
}
