//! List HTTP Handlers
//!
//! Creation appends at the end of the board's lists; the position endpoint
//! reindexes the whole sibling group and returns it.

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
    CreateListRequest, List, ListWithCards, RenameListRequest, UpdateListPositionRequest,
};

/// Create a list, appended at the end of its board
pub async fn create_list(
    State(app): State<AppState>,
    Json(request): Json<CreateListRequest>,
) -> Result<(StatusCode, Json<List>), BackendError> {
    if request.title.trim().is_empty() {
        return Err(BackendError::validation("title must not be empty"));
    }

    // Serialize against concurrent creates and reorders on the same board
    // so the appended position stays unique.
    let _guard = app.group_locks.acquire(request.board_id).await;

    let position = {
        let state = app.kanban.read().await;
        state
            .board(request.board_id)
            .ok_or_else(|| BackendError::not_found("board", request.board_id))?;
        state.count_lists(request.board_id) as u32
    };

    let list = List::new(request.board_id, request.title, position);

    if let Some(pool) = &app.db_pool {
        db::insert_list(pool, &list).await?;
    }
    app.kanban.write().await.upsert_list(list.clone());

    tracing::info!(list_id = %list.id, board_id = %list.board_id, position, "created list");
    Ok((StatusCode::CREATED, Json(list)))
}

/// Rename a list
pub async fn rename_list(
    State(app): State<AppState>,
    Path(list_id): Path<Uuid>,
    Json(request): Json<RenameListRequest>,
) -> Result<Json<List>, BackendError> {
    if request.title.trim().is_empty() {
        return Err(BackendError::validation("title must not be empty"));
    }

    let mut list = app
        .kanban
        .read()
        .await
        .list(list_id)
        .cloned()
        .ok_or_else(|| BackendError::not_found("list", list_id))?;
    list.title = request.title;

    if let Some(pool) = &app.db_pool {
        db::update_list_title(pool, list_id, &list.title).await?;
    }
    app.kanban.write().await.upsert_list(list.clone());

    Ok(Json(list))
}

/// Delete a list and close the gap among the board's surviving lists
pub async fn delete_list(
    State(app): State<AppState>,
    Path(list_id): Path<Uuid>,
) -> Result<Json<Vec<ListWithCards>>, BackendError> {
    let view = reindex::delete_list_and_close_gap(&app, list_id).await?;
    Ok(Json(view))
}

/// Move a list to a new position on its board
///
/// Responds with every list of the board, densely reindexed.
pub async fn update_list_position(
    State(app): State<AppState>,
    Path(list_id): Path<Uuid>,
    Json(request): Json<UpdateListPositionRequest>,
) -> Result<Json<Vec<ListWithCards>>, BackendError> {
    let view = reindex::reorder_list(&app, list_id, request.position).await?;
    Ok(Json(view))
}
