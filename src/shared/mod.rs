//! Shared Module
//!
//! This module contains types and pure logic that do not depend on the
//! server runtime: the Kanban domain types, the ordered-collection core,
//! and the real-time event types. Everything here is serializable and free
//! of I/O.

/// Real-time event system
pub mod event;

/// Kanban domain types
pub mod kanban;

/// Dense ordering core for sibling collections
pub mod ordering;

/// Re-export commonly used types for convenience
pub use event::{EventType, RealtimeEvent};
pub use kanban::{Board, Card, CardPriority, List, ListWithCards};
pub use ordering::{InsertPolicy, OrderedItem, OrderingError};
