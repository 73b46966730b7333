//! Backend Module
//!
//! This module contains all server-side code for the boardkit application:
//! an Axum HTTP server maintaining dense orderings over Kanban boards.
//!
//! # Architecture
//!
//! The backend is organized into focused submodules:
//!
//! - **`server`** - Server initialization, application state, configuration
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`kanban`** - Board/list/card state, per-group locks, the reindex
//!   operations, persistence, and handlers
//! - **`realtime`** - Event broadcasting, SSE subscriptions, presence
//! - **`error`** - Backend-specific error types
//!
//! # State Management
//!
//! The backend uses shared state (`AppState`) containing the in-memory
//! Kanban state, the per-group lock registry, the event broadcast channel,
//! the presence registry, and the optional database pool. State is shared
//! across request handlers using `Arc` and `RwLock` for thread-safe
//! concurrent access; broadcast channels use `tokio::sync::broadcast`.
//!
//! # Ordering Guarantees
//!
//! Every mutation of a sibling group is serialized by that group's mutex
//! and persisted transactionally before the in-memory commit, so the
//! density invariant (positions exactly `{0, ..., N-1}` per group) holds
//! after every operation, under concurrency and under persistence failure.

/// Backend error types
pub mod error;

/// Kanban domain: state, locks, reindexing, persistence, handlers
pub mod kanban;

/// Real-time update system
pub mod realtime;

/// Route configuration
pub mod routes;

/// Server setup and configuration
pub mod server;

// Re-export commonly used types
pub use error::BackendError;
pub use kanban::{GroupLocks, KanbanState};
pub use realtime::{broadcast_event, RealtimeEventBroadcast};
pub use routes::create_router;
pub use server::{create_app, AppState};
