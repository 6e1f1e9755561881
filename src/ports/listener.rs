//! Listener port - where the engine pushes its events

use crate::engine::Event;

/// Receives every event a [`crate::engine::GameEngine`] emits, in order.
///
/// Events are pushed synchronously from inside the engine action that
/// produced them. Closures taking `&Event` are listeners too.
///
/// # Examples
///
/// ```
/// use xo::engine::{Event, GameEngine};
/// use xo::tictactoe::Token;
///
/// let mut names = Vec::new();
/// let mut engine = GameEngine::new(|event: &Event| names.push(event.name()));
/// engine.start(Token::X)?;
/// engine.play(2, 2)?;
/// drop(engine);
/// assert_eq!(names, ["game_started", "next_turn"]);
/// # Ok::<(), xo::Error>(())
/// ```
pub trait EventListener {
    fn on_event(&mut self, event: &Event);
}

impl<F> EventListener for F
where
    F: FnMut(&Event),
{
    fn on_event(&mut self, event: &Event) {
        self(event)
    }
}
