//! Card Data Structure
//!
//! A card belongs to exactly one list at a time (ownership is by foreign
//! key) and owns a dense position among that list's cards. Moving a card to
//! another list reassigns `list_id` and reindexes both lists.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::kanban::list::ListWithCards;
use crate::shared::ordering::OrderedItem;

/// Card priority level
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CardPriority {
    Low,
    Medium,
    High,
}

impl CardPriority {
    /// Parse a priority from its wire representation
    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }

    /// Wire representation of this priority
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// A card on a board
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Card {
    /// Unique card ID
    pub id: Uuid,
    /// List this card currently belongs to
    pub list_id: Uuid,
    /// Board of the owning list
    pub board_id: Uuid,
    /// Card title
    pub title: String,
    /// Optional free-form description
    pub description: Option<String>,
    /// Optional priority
    pub priority: Option<CardPriority>,
    /// Zero-based position among the list's cards
    pub position: u32,
    /// When the card was created
    pub created_at: DateTime<Utc>,
}

impl Card {
    /// Create a new card at the given position
    pub fn new(
        list_id: Uuid,
        board_id: Uuid,
        title: impl Into<String>,
        description: Option<String>,
        priority: Option<CardPriority>,
        position: u32,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            list_id,
            board_id,
            title: title.into(),
            description,
            priority,
            position,
            created_at: Utc::now(),
        }
    }
}

impl OrderedItem for Card {
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

/// Request to create a card (appended at the end of its list)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCardRequest {
    pub title: String,
    pub list_id: Uuid,
    pub description: Option<String>,
    pub priority: Option<CardPriority>,
}

/// Request to update a card's payload fields
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateCardRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub priority: Option<CardPriority>,
}

/// Request to move a card to a new position within a list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateCardPositionRequest {
    pub position: i64,
    pub list_id: Uuid,
}

/// Request to move a card to another list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoveCardRequest {
    pub new_list_id: Uuid,
    pub position: i64,
}

/// Both lists affected by a cross-list move, fully populated
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoveCardResponse {
    pub old_list: ListWithCards,
    pub new_list: ListWithCards,
}
