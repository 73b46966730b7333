//! Connected-client Presence Registry
//!
//! A process-wide registry of clients currently holding a real-time
//! subscription. Entries are added when a subscriber announces itself and
//! removed by an RAII guard when its stream is dropped, so a disconnect —
//! graceful or not — always clears the entry.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::backend::realtime::broadcast::RealtimeEventBroadcast;
use crate::shared::RealtimeEvent;

/// A client currently connected to the realtime stream
#[derive(Debug, Clone, Serialize)]
pub struct ConnectedClient {
    /// Client-chosen connection id
    pub client_id: Uuid,
    /// Display name announced by the client
    pub username: String,
    /// When the subscription was established
    pub connected_at: DateTime<Utc>,
}

/// Process-wide map of connected clients.
///
/// Cloning is cheap; all clones share the same map.
#[derive(Clone, Default)]
pub struct PresenceRegistry {
    clients: Arc<Mutex<HashMap<Uuid, ConnectedClient>>>,
}

impl PresenceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a client as connected
    pub fn connect(&self, client_id: Uuid, username: impl Into<String>) {
        let client = ConnectedClient {
            client_id,
            username: username.into(),
            connected_at: Utc::now(),
        };
        self.clients.lock().unwrap().insert(client_id, client);
    }

    /// Remove a client, returning its entry if it was connected
    pub fn disconnect(&self, client_id: Uuid) -> Option<ConnectedClient> {
        self.clients.lock().unwrap().remove(&client_id)
    }

    /// Whether a client is currently connected
    pub fn is_online(&self, client_id: Uuid) -> bool {
        self.clients.lock().unwrap().contains_key(&client_id)
    }

    /// All connected clients, oldest connection first
    pub fn online(&self) -> Vec<ConnectedClient> {
        let mut clients: Vec<ConnectedClient> =
            self.clients.lock().unwrap().values().cloned().collect();
        clients.sort_by_key(|c| (c.connected_at, c.client_id));
        clients
    }

    /// Number of connected clients
    pub fn count(&self) -> usize {
        self.clients.lock().unwrap().len()
    }
}

/// RAII handle tying a presence entry to a subscription's lifetime.
///
/// Registers the client on creation and deregisters it on drop, emitting a
/// presence event on both edges.
pub struct PresenceGuard {
    registry: PresenceRegistry,
    events: RealtimeEventBroadcast,
    client_id: Uuid,
    username: String,
}

impl PresenceGuard {
    /// Register a client and return the guard that will deregister it
    pub fn register(
        registry: PresenceRegistry,
        events: RealtimeEventBroadcast,
        client_id: Uuid,
        username: impl Into<String>,
    ) -> Self {
        let username = username.into();
        registry.connect(client_id, username.clone());
        let _ = events.send(RealtimeEvent::presence(&username, true));
        tracing::info!(%client_id, username = %username, "client connected");
        Self {
            registry,
            events,
            client_id,
            username,
        }
    }
}

impl Drop for PresenceGuard {
    fn drop(&mut self) {
        self.registry.disconnect(self.client_id);
        let _ = self.events.send(RealtimeEvent::presence(&self.username, false));
        tracing::info!(client_id = %self.client_id, username = %self.username, "client disconnected");
    }
}
