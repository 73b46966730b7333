//! List Data Structure
//!
//! A list belongs to exactly one board and owns a dense position among the
//! board's lists. It is also the sibling group for its cards.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::kanban::card::Card;
use crate::shared::ordering::OrderedItem;

/// A list (column) on a board
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct List {
    /// Unique list ID
    pub id: Uuid,
    /// Board this list belongs to
    pub board_id: Uuid,
    /// List title
    pub title: String,
    /// Zero-based position among the board's lists
    pub position: u32,
    /// When the list was created
    pub created_at: DateTime<Utc>,
}

impl List {
    /// Create a new list at the given position
    pub fn new(board_id: Uuid, title: impl Into<String>, position: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            board_id,
            title: title.into(),
            position,
            created_at: Utc::now(),
        }
    }
}

impl OrderedItem for List {
    fn item_id(&self) -> Uuid {
        self.id
    }

    fn position(&self) -> u32 {
        self.position
    }

    fn set_position(&mut self, position: u32) {
        self.position = position;
    }
}

/// A list together with its cards, ordered by position
///
/// This is the response shape for every endpoint that returns a sibling
/// collection of cards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ListWithCards {
    pub id: Uuid,
    pub board_id: Uuid,
    pub title: String,
    pub position: u32,
    pub created_at: DateTime<Utc>,
    /// Cards of this list, ascending by position
    pub cards: Vec<Card>,
}

impl ListWithCards {
    /// Combine a list with its (already ordered) cards
    pub fn new(list: List, cards: Vec<Card>) -> Self {
        Self {
            id: list.id,
            board_id: list.board_id,
            title: list.title,
            position: list.position,
            created_at: list.created_at,
            cards,
        }
    }
}

/// Request to create a list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateListRequest {
    pub title: String,
    pub board_id: Uuid,
}

/// Request to rename a list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenameListRequest {
    pub title: String,
}

/// Request to move a list to a new position on its board
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateListPositionRequest {
    pub position: i64,
}
