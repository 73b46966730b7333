//! Kanban HTTP Handlers
//!
//! Request handlers for boards, lists, and cards. Anything that changes an
//! ordering delegates to [`crate::backend::kanban::reindex`].

/// Board handlers
pub mod boards;

/// Card handlers
pub mod cards;

/// List handlers
pub mod lists;
