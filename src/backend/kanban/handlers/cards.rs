//! Card HTTP Handlers
//!
//! Creation appends at the end of the owning list; the position endpoints
//! reindex the affected sibling group(s) and return them fully populated.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::backend::error::BackendError;
use crate::backend::kanban::{db, reindex};
use crate::backend::server::state::AppState;
use crate::shared::kanban::{
    Card, CreateCardRequest, ListWithCards, MoveCardRequest, MoveCardResponse,
    UpdateCardPositionRequest, UpdateCardRequest,
};

/// Create a card, appended at the end of its list
pub async fn create_card(
    State(app): State<AppState>,
    Json(request): Json<CreateCardRequest>,
) -> Result<(StatusCode, Json<Card>), BackendError> {
    if request.title.trim().is_empty() {
        return Err(BackendError::validation("title must not be empty"));
    }

    let _guard = app.group_locks.acquire(request.list_id).await;

    let (board_id, position) = {
        let state = app.kanban.read().await;
        let list = state
            .list(request.list_id)
            .ok_or_else(|| BackendError::not_found("list", request.list_id))?;
        (list.board_id, state.count_cards(request.list_id) as u32)
    };

    let card = Card::new(
        request.list_id,
        board_id,
        request.title,
        request.description,
        request.priority,
        position,
    );

    if let Some(pool) = &app.db_pool {
        db::insert_card(pool, &card).await?;
    }
    app.kanban.write().await.upsert_card(card.clone());

    tracing::info!(card_id = %card.id, list_id = %card.list_id, position, "created card");
    Ok((StatusCode::CREATED, Json(card)))
}

/// Update a card's title, description, or priority
pub async fn update_card(
    State(app): State<AppState>,
    Path(card_id): Path<Uuid>,
    Json(request): Json<UpdateCardRequest>,
) -> Result<Json<Card>, BackendError> {
    let mut card = app
        .kanban
        .read()
        .await
        .card(card_id)
        .cloned()
        .ok_or_else(|| BackendError::not_found("card", card_id))?;

    if let Some(title) = request.title {
        if title.trim().is_empty() {
            return Err(BackendError::validation("title must not be empty"));
        }
        card.title = title;
    }
    if let Some(description) = request.description {
        card.description = Some(description);
    }
    if let Some(priority) = request.priority {
        card.priority = Some(priority);
    }

    if let Some(pool) = &app.db_pool {
        db::update_card(pool, &card).await?;
    }
    app.kanban.write().await.upsert_card(card.clone());

    Ok(Json(card))
}

/// Delete a card and close the gap in its list
pub async fn delete_card(
    State(app): State<AppState>,
    Path(card_id): Path<Uuid>,
) -> Result<Json<ListWithCards>, BackendError> {
    let view = reindex::delete_card_and_close_gap(&app, card_id).await?;
    Ok(Json(view))
}

/// Move a card to a new position within the stated list
///
/// Responds with the list and all its cards, densely reindexed.
pub async fn update_card_position(
    State(app): State<AppState>,
    Path(card_id): Path<Uuid>,
    Json(request): Json<UpdateCardPositionRequest>,
) -> Result<Json<ListWithCards>, BackendError> {
    let view = reindex::reorder_card(&app, card_id, request.list_id, request.position).await?;
    Ok(Json(view))
}

/// Move a card to another list
///
/// Responds with both affected lists: the source with its gap closed, the
/// destination with room made at the requested position.
pub async fn move_card_to_list(
    State(app): State<AppState>,
    Path(card_id): Path<Uuid>,
    Json(request): Json<MoveCardRequest>,
) -> Result<Json<MoveCardResponse>, BackendError> {
    let response =
        reindex::move_card_to_list(&app, card_id, request.new_list_id, request.position).await?;
    Ok(Json(response))
}
