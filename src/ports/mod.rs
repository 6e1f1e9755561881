//! Ports (trait boundaries) for external collaborators.
//!
//! The engine and the arena own these traits; adapters implement them.

pub mod listener;
pub mod observer;

pub use listener::EventListener;
pub use observer::MatchObserver;
