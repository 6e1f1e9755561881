//! Adapters implementing the ports.
//!
//! Following hexagonal architecture, adapters depend on the port traits,
//! never the other way around.

pub mod event_log;
pub mod tracing_listener;

pub use event_log::EventLog;
pub use tracing_listener::TracingListener;
