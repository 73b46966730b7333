/**
 * Server Initialization
 *
 * This module handles the initialization and setup of the Axum HTTP server,
 * including state creation, database loading, and route configuration.
 *
 * # Initialization Process
 *
 * 1. Load optional services (database)
 * 2. Create the application state
 * 3. Restore Kanban state from the database if available
 * 4. Create and configure the router
 * 5. Start the periodic lock-registry prune task
 *
 * # State Restoration
 *
 * If a database is available, the server restores boards, lists, and cards
 * from the persisted copy so ordering survives restarts.
 */

use axum::Router;

use crate::backend::kanban::db;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::load_database;
use crate::backend::server::state::AppState;

/// Create and configure the Axum application
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
///
/// # Error Handling
///
/// The function is designed to be resilient:
/// - Missing database: server continues memory-only
/// - State restoration failures: logged but don't prevent startup
pub async fn create_app() -> Router<()> {
    tracing::info!("Initializing boardkit backend server");

    // Step 1: Load optional services
    let db_pool = load_database().await;

    // Step 2: Create app state
    let app_state = AppState::new(db_pool);

    // Step 3: Restore Kanban state from database if available
    if let Some(pool) = app_state.db_pool.clone() {
        restore_kanban_state(&pool, &app_state).await;
    }

    // Step 4: Create router with all routes
    let app = create_router(app_state.clone());

    // Step 5: Periodically drop idle per-group locks so the registry does
    // not grow with every board ever touched
    let locks = app_state.group_locks.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(std::time::Duration::from_secs(300));
        loop {
            interval.tick().await;
            locks.prune();
            tracing::debug!("Pruned idle group locks, {} tracked", locks.tracked());
        }
    });

    tracing::info!("Router configured with periodic lock pruning");

    app
}

/// Restore Kanban state from database
///
/// Loads persisted boards, lists, and cards and rebuilds the in-memory
/// state. Errors are logged but don't prevent server startup; on failure
/// the server starts with an empty state.
async fn restore_kanban_state(pool: &sqlx::PgPool, app_state: &AppState) {
    tracing::info!("Loading Kanban state from database...");

    let boards = match db::fetch_boards(pool).await {
        Ok(boards) => boards,
        Err(e) => {
            tracing::warn!("Failed to load boards from database: {:?}", e);
            tracing::warn!("Starting with empty Kanban state");
            return;
        }
    };
    let lists = match db::fetch_lists(pool).await {
        Ok(lists) => lists,
        Err(e) => {
            tracing::warn!("Failed to load lists from database: {:?}", e);
            Vec::new()
        }
    };
    let cards = match db::fetch_cards(pool).await {
        Ok(cards) => cards,
        Err(e) => {
            tracing::warn!("Failed to load cards from database: {:?}", e);
            Vec::new()
        }
    };

    tracing::info!(
        "Loaded {} boards, {} lists, {} cards from database",
        boards.len(),
        lists.len(),
        cards.len()
    );

    let mut state = app_state.kanban.write().await;
    for board in boards {
        state.insert_board(board);
    }
    for list in lists {
        state.upsert_list(list);
    }
    for card in cards {
        state.upsert_card(card);
    }

    tracing::info!("Kanban state restored from database");
}
