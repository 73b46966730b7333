//! Board HTTP Handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::backend::error::BackendError;
use crate::backend::kanban::db;
use crate::backend::server::state::AppState;
use crate::shared::kanban::{Board, CreateBoardRequest, ListWithCards, UpdateBoardRequest};

/// Create a board
pub async fn create_board(
    State(app): State<AppState>,
    Json(request): Json<CreateBoardRequest>,
) -> Result<(StatusCode, Json<Board>), BackendError> {
    if request.title.trim().is_empty() {
        return Err(BackendError::validation("title must not be empty"));
    }

    let board = Board::new(request.title, request.description);

    if let Some(pool) = &app.db_pool {
        db::insert_board(pool, &board).await?;
    }
    app.kanban.write().await.insert_board(board.clone());

    tracing::info!(board_id = %board.id, "created board");
    Ok((StatusCode::CREATED, Json(board)))
}

/// Get all boards
pub async fn get_boards(State(app): State<AppState>) -> Json<Vec<Board>> {
    Json(app.kanban.read().await.boards())
}

/// Get one board
pub async fn get_board(
    State(app): State<AppState>,
    Path(board_id): Path<Uuid>,
) -> Result<Json<Board>, BackendError> {
    let state = app.kanban.read().await;
    let board = state
        .board(board_id)
        .cloned()
        .ok_or_else(|| BackendError::not_found("board", board_id))?;
    Ok(Json(board))
}

/// Update a board's title or description
pub async fn update_board(
    State(app): State<AppState>,
    Path(board_id): Path<Uuid>,
    Json(request): Json<UpdateBoardRequest>,
) -> Result<Json<Board>, BackendError> {
    let mut board = app
        .kanban
        .read()
        .await
        .board(board_id)
        .cloned()
        .ok_or_else(|| BackendError::not_found("board", board_id))?;

    if let Some(title) = request.title {
        if title.trim().is_empty() {
            return Err(BackendError::validation("title must not be empty"));
        }
        board.title = title;
    }
    if let Some(description) = request.description {
        board.description = Some(description);
    }

    if let Some(pool) = &app.db_pool {
        db::update_board(pool, &board).await?;
    }
    app.kanban.write().await.insert_board(board.clone());

    Ok(Json(board))
}

/// Delete a board together with its lists and cards
pub async fn delete_board(
    State(app): State<AppState>,
    Path(board_id): Path<Uuid>,
) -> Result<StatusCode, BackendError> {
    {
        let state = app.kanban.read().await;
        if state.board(board_id).is_none() {
            return Err(BackendError::not_found("board", board_id));
        }
    }

    if let Some(pool) = &app.db_pool {
        db::delete_board(pool, board_id).await?;
    }
    app.kanban.write().await.remove_board(board_id);

    tracing::info!(%board_id, "deleted board");
    Ok(StatusCode::OK)
}

/// Get all lists of a board with their cards, both levels ordered by
/// position
pub async fn get_board_lists(
    State(app): State<AppState>,
    Path(board_id): Path<Uuid>,
) -> Result<Json<Vec<ListWithCards>>, BackendError> {
    let state = app.kanban.read().await;
    state
        .board(board_id)
        .ok_or_else(|| BackendError::not_found("board", board_id))?;
    Ok(Json(state.board_view(board_id)))
}
