//! Server Module
//!
//! This module contains all server-side code for initializing and
//! configuring the Axum HTTP server.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs    - Module exports
//! ├── state.rs  - AppState and FromRef implementations
//! ├── config.rs - Configuration loading (database)
//! └── init.rs   - Server initialization and app creation
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Configuration Loading**: Loads the optional database
//! 2. **State Creation**: Creates the Kanban state, lock registry,
//!    broadcast channel, and presence registry
//! 3. **State Restoration**: Restores Kanban state from the database if
//!    available
//! 4. **Router Creation**: Configures all routes

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

/// Application state management
pub mod state;

// Re-export commonly used types
pub use init::create_app;
pub use state::AppState;
