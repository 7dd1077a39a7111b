use std::sync::Arc;

use tokio::sync::Mutex;
use trackvault_core::Registry;
use trackvault_events::{EventBus, EventJournal};

use crate::config::ServerConfig;
use crate::sequencer::Sequencer;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// The registry and its sequence counter. One lock holder at a time.
    pub sequencer: Arc<Mutex<Sequencer>>,
    /// Event bus that successful mutations are published to.
    pub event_bus: Arc<EventBus>,
    /// Recent-events journal fed from the bus.
    pub journal: EventJournal,
}

impl AppState {
    /// Build state around a fresh registry administered by `config.registry_admin`.
    pub fn new(config: &ServerConfig, event_bus: Arc<EventBus>, journal: EventJournal) -> Self {
        let registry = Registry::new(config.registry_admin.as_str());
        Self {
            sequencer: Arc::new(Mutex::new(Sequencer::new(registry))),
            event_bus,
            journal,
        }
    }
}
