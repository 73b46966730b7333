/**
 * Real-time Event System
 *
 * This module defines event types for the real-time notification system.
 * Events describe board mutations (reorders, cross-list moves) and presence
 * changes, and are broadcast to all SSE subscribers.
 */
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Type of real-time event
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    /// Lists of a board were reindexed
    ListReordered,
    /// Cards of a list were reindexed
    CardReordered,
    /// A card moved between lists
    CardMoved,
    /// A client connected or disconnected
    Presence,
    /// Custom event type
    Custom(String),
}

impl EventType {
    /// SSE event name for this type
    pub fn name(&self) -> &str {
        match self {
            Self::ListReordered => "list_reordered",
            Self::CardReordered => "card_reordered",
            Self::CardMoved => "card_moved",
            Self::Presence => "presence",
            Self::Custom(name) => name.as_str(),
        }
    }
}

/// Real-time event that can be broadcast to all subscribers
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RealtimeEvent {
    /// Type of event
    pub event_type: EventType,
    /// Event payload (JSON-serializable data)
    pub payload: serde_json::Value,
    /// Timestamp when event occurred
    pub timestamp: String,
}

impl RealtimeEvent {
    /// Create a new real-time event
    pub fn new(event_type: EventType, payload: serde_json::Value) -> Self {
        Self {
            event_type,
            payload,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Create a list-reordered event for a board
    pub fn list_reordered(board_id: Uuid, list_id: Uuid) -> Self {
        Self::new(
            EventType::ListReordered,
            serde_json::json!({
                "board_id": board_id,
                "list_id": list_id,
            }),
        )
    }

    /// Create a card-reordered event for a list
    pub fn card_reordered(list_id: Uuid, card_id: Uuid) -> Self {
        Self::new(
            EventType::CardReordered,
            serde_json::json!({
                "list_id": list_id,
                "card_id": card_id,
            }),
        )
    }

    /// Create a card-moved event covering both affected lists
    pub fn card_moved(card_id: Uuid, from_list_id: Uuid, to_list_id: Uuid) -> Self {
        Self::new(
            EventType::CardMoved,
            serde_json::json!({
                "card_id": card_id,
                "from_list_id": from_list_id,
                "to_list_id": to_list_id,
            }),
        )
    }

    /// Create a presence event
    pub fn presence(username: &str, online: bool) -> Self {
        Self::new(
            EventType::Presence,
            serde_json::json!({
                "username": username,
                "online": online,
            }),
        )
    }
}
