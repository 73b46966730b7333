//! Board Data Structure
//!
//! A board is the top-level container and the sibling group for its lists.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A Kanban board
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Board {
    /// Unique board ID
    pub id: Uuid,
    /// Board title
    pub title: String,
    /// Optional free-form description
    pub description: Option<String>,
    /// When the board was created
    pub created_at: DateTime<Utc>,
}

impl Board {
    /// Create a new board
    pub fn new(title: impl Into<String>, description: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            description,
            created_at: Utc::now(),
        }
    }
}

/// Request to create a board
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBoardRequest {
    pub title: String,
    pub description: Option<String>,
}

/// Request to update a board's payload fields
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateBoardRequest {
    pub title: Option<String>,
    pub description: Option<String>,
}
