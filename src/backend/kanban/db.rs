//! Database operations for the Kanban domain
//!
//! Write-through persistence for boards, lists, and cards. The in-memory
//! state stays authoritative for serving; these functions keep the durable
//! copy in step and load it back at startup.
//!
//! Position batches always run inside a single transaction: a reindex
//! touches every row of a group, and either all of those updates commit or
//! none do.

use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::shared::kanban::{Board, Card, CardPriority, List};

/// Insert a new board
pub async fn insert_board(pool: &PgPool, board: &Board) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO boards (id, title, description, created_at)
        VALUES ($1, $2, $3, $4)
        "#,
    )
    .bind(board.id)
    .bind(&board.title)
    .bind(&board.description)
    .bind(board.created_at)
    .execute(pool)
    .await?;

    Ok(())
}

/// Update a board's payload fields
pub async fn update_board(pool: &PgPool, board: &Board) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        UPDATE boards SET title = $1, description = $2 WHERE id = $3
        "#,
    )
    .bind(&board.title)
    .bind(&board.description)
    .bind(board.id)
    .execute(pool)
    .await?;

    Ok(())
}

/// Delete a board together with its lists and cards
pub async fn delete_board(pool: &PgPool, board_id: Uuid) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;

    sqlx::query("DELETE FROM cards WHERE board_id = $1")
        .bind(board_id)
        .execute(&mut *tx)
        .await?;
    sqlx::query("DELETE FROM lists WHERE board_id = $1")
        .bind(board_id)
        .execute(&mut *tx)
        .await?;
    sqlx::query("DELETE FROM boards WHERE id = $1")
        .bind(board_id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;
    Ok(())
}

/// Insert a new list
pub async fn insert_list(pool: &PgPool, list: &List) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO lists (id, board_id, title, position, created_at)
        VALUES ($1, $2, $3, $4, $5)
        "#,
    )
    .bind(list.id)
    .bind(list.board_id)
    .bind(&list.title)
    .bind(list.position as i32)
    .bind(list.created_at)
    .execute(pool)
    .await?;

    Ok(())
}

/// Rename a list
pub async fn update_list_title(pool: &PgPool, list_id: Uuid, title: &str) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE lists SET title = $1 WHERE id = $2")
        .bind(title)
        .bind(list_id)
        .execute(pool)
        .await?;

    Ok(())
}

/// Persist the positions of a recomputed list sequence in one transaction
pub async fn save_list_positions(pool: &PgPool, lists: &[List]) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;

    for list in lists {
        sqlx::query("UPDATE lists SET position = $1 WHERE id = $2")
            .bind(list.position as i32)
            .bind(list.id)
            .execute(&mut *tx)
            .await?;
    }

    tx.commit().await?;
    Ok(())
}

/// Delete a list (with its cards) and persist the survivors' closed-gap
/// positions, all in one transaction
pub async fn delete_list(
    pool: &PgPool,
    list_id: Uuid,
    survivors: &[List],
) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;

    sqlx::query("DELETE FROM cards WHERE list_id = $1")
        .bind(list_id)
        .execute(&mut *tx)
        .await?;
    sqlx::query("DELETE FROM lists WHERE id = $1")
        .bind(list_id)
        .execute(&mut *tx)
        .await?;
    for list in survivors {
        sqlx::query("UPDATE lists SET position = $1 WHERE id = $2")
            .bind(list.position as i32)
            .bind(list.id)
            .execute(&mut *tx)
            .await?;
    }

    tx.commit().await?;
    Ok(())
}

/// Insert a new card
pub async fn insert_card(pool: &PgPool, card: &Card) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO cards (id, list_id, board_id, title, description, priority, position, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        "#,
    )
    .bind(card.id)
    .bind(card.list_id)
    .bind(card.board_id)
    .bind(&card.title)
    .bind(&card.description)
    .bind(card.priority.map(|p| p.as_str()))
    .bind(card.position as i32)
    .bind(card.created_at)
    .execute(pool)
    .await?;

    Ok(())
}

/// Update a card's payload fields
pub async fn update_card(pool: &PgPool, card: &Card) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        UPDATE cards SET title = $1, description = $2, priority = $3 WHERE id = $4
        "#,
    )
    .bind(&card.title)
    .bind(&card.description)
    .bind(card.priority.map(|p| p.as_str()))
    .bind(card.id)
    .execute(pool)
    .await?;

    Ok(())
}

/// Persist the positions (and group membership) of recomputed card
/// sequences in one transaction.
///
/// A cross-list move hands both the source survivors and the destination
/// sequence to this function so the whole move commits atomically.
pub async fn save_card_positions(pool: &PgPool, cards: &[Card]) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;

    for card in cards {
        sqlx::query(
            r#"
            UPDATE cards SET position = $1, list_id = $2, board_id = $3 WHERE id = $4
            "#,
        )
        .bind(card.position as i32)
        .bind(card.list_id)
        .bind(card.board_id)
        .bind(card.id)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;
    Ok(())
}

/// Delete a card and persist the survivors' closed-gap positions in one
/// transaction
pub async fn delete_card(
    pool: &PgPool,
    card_id: Uuid,
    survivors: &[Card],
) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;

    sqlx::query("DELETE FROM cards WHERE id = $1")
        .bind(card_id)
        .execute(&mut *tx)
        .await?;
    for card in survivors {
        sqlx::query("UPDATE cards SET position = $1 WHERE id = $2")
            .bind(card.position as i32)
            .bind(card.id)
            .execute(&mut *tx)
            .await?;
    }

    tx.commit().await?;
    Ok(())
}

/// Load all boards
pub async fn fetch_boards(pool: &PgPool) -> Result<Vec<Board>, sqlx::Error> {
    let rows = sqlx::query(
        r#"
        SELECT id, title, description, created_at FROM boards ORDER BY created_at ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|row| Board {
            id: row.get("id"),
            title: row.get("title"),
            description: row.get("description"),
            created_at: row.get("created_at"),
        })
        .collect())
}

/// Load all lists
pub async fn fetch_lists(pool: &PgPool) -> Result<Vec<List>, sqlx::Error> {
    let rows = sqlx::query(
        r#"
        SELECT id, board_id, title, position, created_at FROM lists ORDER BY position ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|row| List {
            id: row.get("id"),
            board_id: row.get("board_id"),
            title: row.get("title"),
            position: row.get::<i32, _>("position") as u32,
            created_at: row.get("created_at"),
        })
        .collect())
}

/// Load all cards
pub async fn fetch_cards(pool: &PgPool) -> Result<Vec<Card>, sqlx::Error> {
    let rows = sqlx::query(
        r#"
        SELECT id, list_id, board_id, title, description, priority, position, created_at
        FROM cards ORDER BY position ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|row| Card {
            id: row.get("id"),
            list_id: row.get("list_id"),
            board_id: row.get("board_id"),
            title: row.get("title"),
            description: row.get("description"),
            priority: row
                .get::<Option<String>, _>("priority")
                .as_deref()
                .and_then(CardPriority::from_str),
            position: row.get::<i32, _>("position") as u32,
            created_at: row.get("created_at"),
        })
        .collect())
}
