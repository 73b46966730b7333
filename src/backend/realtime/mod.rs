//! Real-time Update Module
//!
//! Broadcasting of board events to SSE subscribers, and the presence
//! registry of connected clients.
//!
//! # Module Structure
//!
//! ```text
//! realtime/
//! ├── mod.rs          - Module exports
//! ├── broadcast.rs    - Event broadcasting utilities
//! ├── subscription.rs - SSE subscription handler + presence view
//! └── presence.rs     - Connected-client registry
//! ```
//!
//! # Event Types
//!
//! - `list_reordered` - Lists of a board were reindexed
//! - `card_reordered` - Cards of a list were reindexed
//! - `card_moved` - A card moved between lists
//! - `presence` - A client connected or disconnected
//!
//! Clients can filter events by type with the `types` query parameter on
//! the subscription endpoint.

/// Event broadcasting utilities
pub mod broadcast;

/// Connected-client registry
pub mod presence;

/// Server-Sent Events subscription handler
pub mod subscription;

// Re-export commonly used types and functions
pub use broadcast::{broadcast_event, RealtimeEventBroadcast};
pub use presence::{ConnectedClient, PresenceRegistry};
pub use subscription::{get_presence, handle_realtime_subscription};
