//! Reindex operations over sibling groups
//!
//! Each operation here is one unit of the reorder protocol: acquire the
//! group's mutation lock, snapshot the group from the in-memory state, run
//! the pure ordering core, persist the recomputed positions (one
//! transaction when a database is configured), then commit to memory and
//! broadcast an event.
//!
//! The database write happens before the memory commit. A persistence
//! failure therefore leaves the served state exactly as it was, and the
//! caller sees an error with nothing half-applied.

use uuid::Uuid;

use crate::backend::error::BackendError;
use crate::backend::kanban::db;
use crate::backend::realtime::broadcast::broadcast_event;
use crate::backend::server::state::AppState;
use crate::shared::kanban::{Card, ListWithCards, MoveCardResponse};
use crate::shared::ordering::{self, InsertPolicy, OrderingError};
use crate::shared::RealtimeEvent;

/// Move a list to a new position among its board's lists.
///
/// Returns every list of the board, densely reindexed, with cards embedded.
pub async fn reorder_list(
    app: &AppState,
    list_id: Uuid,
    requested: i64,
) -> Result<Vec<ListWithCards>, BackendError> {
    let board_id = app
        .kanban
        .read()
        .await
        .list(list_id)
        .map(|list| list.board_id)
        .ok_or_else(|| BackendError::not_found("list", list_id))?;

    // Lists never change boards, so the group read above cannot go stale
    // while we wait for the lock.
    let _guard = app.group_locks.acquire(board_id).await;

    let mut lists = app.kanban.read().await.lists_of_board(board_id);
    ordering::reorder(&mut lists, list_id, requested, InsertPolicy::Clamp)
        .map_err(|err| remap_not_found(err, "list"))?;

    if let Some(pool) = &app.db_pool {
        db::save_list_positions(pool, &lists).await?;
    }

    let view = {
        let mut state = app.kanban.write().await;
        state.apply_lists(&lists);
        state.board_view(board_id)
    };

    tracing::debug!(%board_id, %list_id, requested, "reindexed board lists");
    broadcast_event(&app.events, RealtimeEvent::list_reordered(board_id, list_id)).await;

    Ok(view)
}

/// Move a card to a new position within the stated list.
///
/// The card must currently belong to `list_id`; a card that lives in
/// another list is reported as not found in the stated group. Returns the
/// list with all its cards densely reindexed.
pub async fn reorder_card(
    app: &AppState,
    card_id: Uuid,
    list_id: Uuid,
    requested: i64,
) -> Result<ListWithCards, BackendError> {
    {
        let state = app.kanban.read().await;
        state
            .list(list_id)
            .ok_or_else(|| BackendError::not_found("list", list_id))?;
    }

    let _guard = app.group_locks.acquire(list_id).await;

    let (list, mut cards) = {
        let state = app.kanban.read().await;
        let list = state
            .list(list_id)
            .cloned()
            .ok_or_else(|| BackendError::not_found("list", list_id))?;
        let cards = state.cards_of_list(list_id);
        (list, cards)
    };

    ordering::reorder(&mut cards, card_id, requested, InsertPolicy::Clamp)
        .map_err(|err| remap_not_found(err, "card"))?;

    if let Some(pool) = &app.db_pool {
        db::save_card_positions(pool, &cards).await?;
    }

    let view = {
        let mut state = app.kanban.write().await;
        state.apply_cards(&cards);
        state.list_with_cards(&list)
    };

    tracing::debug!(%list_id, %card_id, requested, "reindexed list cards");
    broadcast_event(&app.events, RealtimeEvent::card_reordered(list_id, card_id)).await;

    Ok(view)
}

/// Move a card to another list, reindexing both the source (closing the
/// gap) and the destination (making room).
///
/// Returns both lists fully populated. Moving a card "to" its current list
/// degenerates to an in-list reorder. A card moved to a list on another
/// board adopts that board.
pub async fn move_card_to_list(
    app: &AppState,
    card_id: Uuid,
    new_list_id: Uuid,
    requested: i64,
) -> Result<MoveCardResponse, BackendError> {
    let dest_board_id = app
        .kanban
        .read()
        .await
        .list(new_list_id)
        .map(|list| list.board_id)
        .ok_or_else(|| BackendError::not_found("list", new_list_id))?;

    // The card's current list can change while we wait for the pair of
    // locks, so the source group is re-read after acquisition and the
    // whole acquisition retried on a mismatch.
    let (_guards, old_list_id) = loop {
        let old_list_id = app
            .kanban
            .read()
            .await
            .card(card_id)
            .map(|card| card.list_id)
            .ok_or_else(|| BackendError::not_found("card", card_id))?;

        if old_list_id == new_list_id {
            let view = reorder_card(app, card_id, new_list_id, requested).await?;
            return Ok(MoveCardResponse {
                old_list: view.clone(),
                new_list: view,
            });
        }

        let guards = app.group_locks.acquire_pair(old_list_id, new_list_id).await;
        let current = app.kanban.read().await.card(card_id).map(|card| card.list_id);
        match current {
            Some(list_id) if list_id == old_list_id => break (guards, old_list_id),
            Some(_) => continue,
            None => return Err(BackendError::not_found("card", card_id)),
        }
    };

    let (mut source_cards, mut dest_cards) = {
        let state = app.kanban.read().await;
        (state.cards_of_list(old_list_id), state.cards_of_list(new_list_id))
    };

    let (mut moved, _) = ordering::remove_and_close_gap(&mut source_cards, card_id)
        .map_err(|err| remap_not_found(err, "card"))?;
    moved.list_id = new_list_id;
    moved.board_id = dest_board_id;
    ordering::insert_at(&mut dest_cards, moved, requested, InsertPolicy::Clamp)?;

    if let Some(pool) = &app.db_pool {
        // One transaction spanning both groups: the move commits whole or
        // not at all.
        let mut all: Vec<Card> = Vec::with_capacity(source_cards.len() + dest_cards.len());
        all.extend_from_slice(&source_cards);
        all.extend_from_slice(&dest_cards);
        db::save_card_positions(pool, &all).await?;
    }

    let (old_view, new_view) = {
        let mut state = app.kanban.write().await;
        state.apply_cards(&source_cards);
        state.apply_cards(&dest_cards);
        let old_list = state
            .list(old_list_id)
            .cloned()
            .ok_or_else(|| BackendError::not_found("list", old_list_id))?;
        let new_list = state
            .list(new_list_id)
            .cloned()
            .ok_or_else(|| BackendError::not_found("list", new_list_id))?;
        (state.list_with_cards(&old_list), state.list_with_cards(&new_list))
    };

    tracing::debug!(%card_id, %old_list_id, %new_list_id, requested, "moved card across lists");
    broadcast_event(
        &app.events,
        RealtimeEvent::card_moved(card_id, old_list_id, new_list_id),
    )
    .await;

    Ok(MoveCardResponse {
        old_list: old_view,
        new_list: new_view,
    })
}

/// Delete a list (with its cards) and close the gap among the board's
/// surviving lists. Returns the surviving lists, densely reindexed.
pub async fn delete_list_and_close_gap(
    app: &AppState,
    list_id: Uuid,
) -> Result<Vec<ListWithCards>, BackendError> {
    let board_id = app
        .kanban
        .read()
        .await
        .list(list_id)
        .map(|list| list.board_id)
        .ok_or_else(|| BackendError::not_found("list", list_id))?;

    let _guard = app.group_locks.acquire(board_id).await;

    let mut lists = app.kanban.read().await.lists_of_board(board_id);
    ordering::remove_and_close_gap(&mut lists, list_id)
        .map_err(|err| remap_not_found(err, "list"))?;

    if let Some(pool) = &app.db_pool {
        db::delete_list(pool, list_id, &lists).await?;
    }

    let view = {
        let mut state = app.kanban.write().await;
        state.remove_list(list_id);
        state.apply_lists(&lists);
        state.board_view(board_id)
    };

    tracing::debug!(%board_id, %list_id, "deleted list and closed gap");
    Ok(view)
}

/// Delete a card and close the gap among its list's surviving cards.
/// Returns the list with its surviving cards, densely reindexed.
pub async fn delete_card_and_close_gap(
    app: &AppState,
    card_id: Uuid,
) -> Result<ListWithCards, BackendError> {
    // Same stale-group hazard as in `move_card_to_list`: re-check the
    // card's list once the lock is held.
    let (_guard, list_id) = loop {
        let list_id = app
            .kanban
            .read()
            .await
            .card(card_id)
            .map(|card| card.list_id)
            .ok_or_else(|| BackendError::not_found("card", card_id))?;

        let guard = app.group_locks.acquire(list_id).await;
        let current = app.kanban.read().await.card(card_id).map(|card| card.list_id);
        match current {
            Some(current) if current == list_id => break (guard, list_id),
            Some(_) => continue,
            None => return Err(BackendError::not_found("card", card_id)),
        }
    };

    let (list, mut cards) = {
        let state = app.kanban.read().await;
        let list = state
            .list(list_id)
            .cloned()
            .ok_or_else(|| BackendError::not_found("list", list_id))?;
        (list, state.cards_of_list(list_id))
    };

    ordering::remove_and_close_gap(&mut cards, card_id)
        .map_err(|err| remap_not_found(err, "card"))?;

    if let Some(pool) = &app.db_pool {
        db::delete_card(pool, card_id, &cards).await?;
    }

    let view = {
        let mut state = app.kanban.write().await;
        state.remove_card(card_id);
        state.apply_cards(&cards);
        state.list_with_cards(&list)
    };

    tracing::debug!(%list_id, %card_id, "deleted card and closed gap");
    Ok(view)
}

/// Attach the right resource kind to a not-found ordering error.
fn remap_not_found(err: OrderingError, resource: &'static str) -> BackendError {
    match err {
        OrderingError::ItemNotFound { item_id } => BackendError::not_found(resource, item_id),
        other => other.into(),
    }
}
