//! Trackvault registry event bus.
//!
//! - [`EventBus`]: in-process publish/subscribe hub backed by
//!   `tokio::sync::broadcast`.
//! - [`RegistryEvent`]: the envelope published after every successful
//!   registry mutation.
//! - [`EventJournal`]: bounded in-memory log of recent events, fed by a
//!   background subscriber.

pub mod bus;
pub mod journal;

pub use bus::{event_types, EventBus, RegistryEvent};
pub use journal::EventJournal;
