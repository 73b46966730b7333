//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs           - Module exports
//! ├── router.rs        - Main router creation
//! └── kanban_routes.rs - Board/list/card endpoints
//! ```

/// Kanban endpoint wiring
pub mod kanban_routes;

/// Main router creation
pub mod router;

// Re-export commonly used functions
pub use router::create_router;
