//! Bounded in-memory journal of recent registry events.
//!
//! [`EventJournal`] keeps the newest `capacity` events received from the
//! [`EventBus`](crate::bus::EventBus). It runs as a background task and shuts
//! down when the bus sender is dropped.

use std::collections::VecDeque;
use std::sync::Arc;

use tokio::sync::{broadcast, RwLock};

use crate::bus::RegistryEvent;

/// Default number of events retained.
pub const DEFAULT_JOURNAL_CAPACITY: usize = 500;

/// Shared handle to the recent-events ring. Cheap to clone.
#[derive(Clone)]
pub struct EventJournal {
    capacity: usize,
    entries: Arc<RwLock<VecDeque<RegistryEvent>>>,
}

impl EventJournal {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            entries: Arc::new(RwLock::new(VecDeque::with_capacity(capacity))),
        }
    }

    /// Append an event, evicting the oldest one when full.
    pub async fn record(&self, event: RegistryEvent) {
        let mut entries = self.entries.write().await;
        if entries.len() == self.capacity {
            entries.pop_front();
        }
        entries.push_back(event);
    }

    /// Up to `limit` of the newest events, oldest first.
    pub async fn recent(&self, limit: usize) -> Vec<RegistryEvent> {
        let entries = self.entries.read().await;
        let skip = entries.len().saturating_sub(limit);
        entries.iter().skip(skip).cloned().collect()
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Consume events from `receiver` until the bus closes.
    pub async fn run(self, mut receiver: broadcast::Receiver<RegistryEvent>) {
        loop {
            match receiver.recv().await {
                Ok(event) => {
                    tracing::debug!(
                        event_type = %event.event_type,
                        asset_id = ?event.asset_id,
                        sequence = event.sequence,
                        "Journaling registry event"
                    );
                    self.record(event).await;
                }
                Err(broadcast::error::RecvError::Lagged(n)) => {
                    tracing::warn!(skipped = n, "Event journal lagged, some events were dropped");
                }
                Err(broadcast::error::RecvError::Closed) => {
                    tracing::info!("Event bus closed, journal shutting down");
                    break;
                }
            }
        }
    }
}

impl Default for EventJournal {
    fn default() -> Self {
        Self::new(DEFAULT_JOURNAL_CAPACITY)
    }
}
