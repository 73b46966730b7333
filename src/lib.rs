//! boardkit - Kanban ordering service
//!
//! boardkit is a web backend for Kanban boards whose core is an ordered
//! collection reindexer: lists within a board and cards within a list carry
//! a dense, zero-based `position`, recomputed on every reorder, cross-list
//! move, and delete.
//!
//! # Module Structure
//!
//! The library is organized into two main modules:
//!
//! - **`shared`** - Platform-agnostic types and pure logic
//!   - Kanban domain types (boards, lists, cards) and request shapes
//!   - The dense-ordering core (`shared::ordering`)
//!   - Real-time event types
//!
//! - **`backend`** - Server-side code
//!   - Axum HTTP server with the board/list/card endpoints
//!   - In-memory state with optional PostgreSQL write-through
//!   - Per-group locking, SSE event broadcasting, presence tracking
//!
//! # Ordering Invariant
//!
//! For any sibling group of N items, the set of positions is exactly
//! `{0, 1, ..., N-1}` after every successful operation. The
//! `shared::ordering` module recomputes assignments; the backend
//! serializes concurrent mutations per group and persists each recompute
//! atomically.
//!
//! # Usage
//!
//! ```rust,no_run
//! use boardkit::backend::server::create_app;
//!
//! # async fn example() {
//! let app = create_app().await;
//! // Use app with an Axum server
//! # }
//! ```

/// Shared types and pure ordering logic
pub mod shared;

/// Backend server-side code
pub mod backend;
