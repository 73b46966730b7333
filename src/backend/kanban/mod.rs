//! Kanban Backend Module
//!
//! The ordered-collection domain: in-memory state, per-group locking, the
//! reindex operations, write-through persistence, and the HTTP handlers.
//!
//! # Module Structure
//!
//! ```text
//! kanban/
//! ├── mod.rs      - Module exports
//! ├── state.rs    - In-memory boards/lists/cards state
//! ├── locks.rs    - Per-group mutation locks
//! ├── reindex.rs  - Reorder/move/delete operations
//! ├── db.rs       - PostgreSQL write-through
//! └── handlers/   - HTTP handlers
//! ```
//!
//! # The reorder protocol
//!
//! Every mutation of a sibling group (a board's lists, a list's cards)
//! follows the same sequence: take the group's lock, snapshot the group,
//! recompute a dense ordering with `shared::ordering`, persist the result
//! in a single transaction when a database is configured, commit to
//! memory, broadcast an event. Reads take none of the group locks.

/// PostgreSQL persistence
pub mod db;

/// HTTP handlers
pub mod handlers;

/// Per-group lock registry
pub mod locks;

/// Reindex operations
pub mod reindex;

/// In-memory Kanban state
pub mod state;

// Re-export commonly used types
pub use locks::GroupLocks;
pub use state::KanbanState;
