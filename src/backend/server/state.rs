/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the necessary `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * The `AppState` struct serves as the central state container for the
 * application, holding:
 * - The in-memory Kanban state (boards, lists, cards)
 * - The per-group lock registry serializing reindex operations
 * - The broadcast channel for real-time events
 * - The presence registry of connected clients
 * - Optional services (database)
 *
 * # Thread Safety
 *
 * All state is designed to be thread-safe:
 * - `Arc<RwLock<KanbanState>>` for concurrent Kanban state access
 * - `GroupLocks` and `PresenceRegistry` are cloneable shared registries
 * - `broadcast::Sender` for thread-safe event broadcasting
 * - `Option<PgPool>` for the optional database
 */

use std::sync::Arc;

use axum::extract::FromRef;
use sqlx::PgPool;
use tokio::sync::{broadcast, RwLock};

use crate::backend::kanban::locks::GroupLocks;
use crate::backend::kanban::state::KanbanState;
use crate::backend::realtime::broadcast::RealtimeEventBroadcast;
use crate::backend::realtime::presence::PresenceRegistry;
use crate::shared::RealtimeEvent;

/// Application state shared by every handler
///
/// This struct serves as the central state container for the Axum
/// application. It implements `FromRef` for its fields so handlers can
/// extract just the parts they need.
#[derive(Clone)]
pub struct AppState {
    /// In-memory authoritative Kanban state
    ///
    /// Wrapped in `Arc<RwLock<>>` to allow concurrent reads with exclusive
    /// writes. The database (when configured) is a write-through copy.
    pub kanban: Arc<RwLock<KanbanState>>,

    /// Per-group mutexes serializing reorder/move/delete operations
    pub group_locks: GroupLocks,

    /// Broadcast channel for real-time board events
    pub events: RealtimeEventBroadcast,

    /// Registry of connected SSE clients
    pub presence: PresenceRegistry,

    /// Database connection pool
    ///
    /// This is `None` if the database is not configured (e.g., if the
    /// `DATABASE_URL` environment variable is not set). The server then
    /// runs memory-only.
    pub db_pool: Option<PgPool>,
}

impl AppState {
    /// Create a fresh application state
    ///
    /// The broadcast channel capacity of 1000 leaves ample room for bursts
    /// of board activity before slow subscribers start lagging.
    pub fn new(db_pool: Option<PgPool>) -> Self {
        let (events, _) = broadcast::channel::<RealtimeEvent>(1000);
        Self {
            kanban: Arc::new(RwLock::new(KanbanState::new())),
            group_locks: GroupLocks::new(),
            events,
            presence: PresenceRegistry::new(),
            db_pool,
        }
    }
}

/// Allow handlers to extract the Kanban state directly
impl FromRef<AppState> for Arc<RwLock<KanbanState>> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.kanban.clone()
    }
}

/// Allow handlers to extract the group lock registry directly
impl FromRef<AppState> for GroupLocks {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.group_locks.clone()
    }
}

/// Allow handlers to extract the event broadcast sender directly
impl FromRef<AppState> for RealtimeEventBroadcast {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.events.clone()
    }
}

/// Allow handlers to extract the presence registry directly
impl FromRef<AppState> for PresenceRegistry {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.presence.clone()
    }
}

/// Allow handlers to extract the optional database pool directly
impl FromRef<AppState> for Option<PgPool> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db_pool.clone()
    }
}
