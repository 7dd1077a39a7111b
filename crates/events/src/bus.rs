//! In-process event bus backed by a `tokio::sync::broadcast` channel.
//!
//! [`EventBus`] is the publish/subscribe hub for [`RegistryEvent`]s. It is
//! shared via `Arc<EventBus>` across the application.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use trackvault_core::{AssetId, Principal, Sequence};

// ---------------------------------------------------------------------------
// Event type names
// ---------------------------------------------------------------------------

/// Dot-separated names of the events the registry emits.
pub mod event_types {
    pub const ASSET_MINTED: &str = "asset.minted";
    pub const ASSET_TRANSFERRED: &str = "asset.transferred";
    pub const VERSION_REGISTERED: &str = "version.registered";
    pub const LICENSE_GRANTED: &str = "license.granted";
    pub const LICENSE_REVOKED: &str = "license.revoked";
    pub const CATEGORY_SET: &str = "category.set";
    pub const COLLABORATOR_ADDED: &str = "collaborator.added";
    pub const STATUS_SET: &str = "status.set";
    pub const REVENUE_SHARE_SET: &str = "revenue_share.set";
    pub const REGISTRY_PAUSED: &str = "registry.paused";
    pub const REGISTRY_UNPAUSED: &str = "registry.unpaused";
    pub const REGISTRY_ADMIN_CHANGED: &str = "registry.admin_changed";
}

// ---------------------------------------------------------------------------
// RegistryEvent
// ---------------------------------------------------------------------------

/// A successful registry mutation.
///
/// Constructed via [`RegistryEvent::new`] and enriched with
/// [`with_asset`](RegistryEvent::with_asset) and
/// [`with_payload`](RegistryEvent::with_payload).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryEvent {
    /// One of the [`event_types`] names.
    pub event_type: String,

    /// The asset the mutation applied to, if any (control-plane events have none).
    pub asset_id: Option<AssetId>,

    /// Identity that invoked the operation.
    pub actor: Principal,

    /// Sequence value at which the operation executed.
    pub sequence: Sequence,

    /// Event-specific data.
    pub payload: serde_json::Value,

    /// Wall-clock time the event was created (UTC).
    pub timestamp: DateTime<Utc>,
}

impl RegistryEvent {
    pub fn new(event_type: impl Into<String>, actor: Principal, sequence: Sequence) -> Self {
        Self {
            event_type: event_type.into(),
            asset_id: None,
            actor,
            sequence,
            payload: serde_json::Value::Object(Default::default()),
            timestamp: Utc::now(),
        }
    }

    pub fn with_asset(mut self, asset_id: AssetId) -> Self {
        self.asset_id = Some(asset_id);
        self
    }

    pub fn with_payload(mut self, payload: serde_json::Value) -> Self {
        self.payload = payload;
        self
    }
}

// ---------------------------------------------------------------------------
// EventBus
// ---------------------------------------------------------------------------

/// Default buffer capacity for the broadcast channel.
const DEFAULT_CAPACITY: usize = 1024;

/// In-process fan-out event bus.
///
/// Wraps a [`broadcast::Sender`] so that any number of subscribers can
/// independently receive every published [`RegistryEvent`].
///
/// ```rust
/// use trackvault_core::Principal;
/// use trackvault_events::bus::{event_types, EventBus, RegistryEvent};
///
/// let bus = EventBus::default();
/// let mut rx = bus.subscribe();
///
/// bus.publish(RegistryEvent::new(event_types::ASSET_MINTED, Principal::new("u1"), 1));
/// ```
pub struct EventBus {
    sender: broadcast::Sender<RegistryEvent>,
}

impl EventBus {
    /// Create a bus with a specific channel capacity.
    ///
    /// When the buffer is full the oldest un-consumed messages are dropped
    /// and slow receivers observe `RecvError::Lagged`.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publish an event to all current subscribers.
    ///
    /// With no active subscribers the event is dropped.
    pub fn publish(&self, event: RegistryEvent) {
        // SendError only means there are zero receivers.
        let _ = self.sender.send(event);
    }

    pub fn subscribe(&self) -> broadcast::Receiver<RegistryEvent> {
        self.sender.subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
