//! Kanban domain types
//!
//! Boards, lists, and cards, plus the request/response shapes used by the
//! HTTP API. `List` and `Card` implement [`OrderedItem`] so the ordering
//! core can reindex them.
//!
//! [`OrderedItem`]: crate::shared::ordering::OrderedItem

/// Board type and board requests
pub mod board;

/// Card type and card requests
pub mod card;

/// List type and list requests
pub mod list;

// Re-export commonly used types for convenience
pub use board::{Board, CreateBoardRequest, UpdateBoardRequest};
pub use card::{
    Card, CardPriority, CreateCardRequest, MoveCardRequest, MoveCardResponse,
    UpdateCardPositionRequest, UpdateCardRequest,
};
pub use list::{
    CreateListRequest, List, ListWithCards, RenameListRequest, UpdateListPositionRequest,
};
