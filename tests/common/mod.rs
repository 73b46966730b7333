//! Common test utilities
//!
//! Helpers for driving the HTTP API against a memory-only server.

use axum_test::TestServer;
use serde_json::json;
use uuid::Uuid;

use boardkit::backend::routes::create_router;
use boardkit::backend::server::state::AppState;
use boardkit::shared::kanban::{Board, Card, List};

/// Build a test server over a fresh memory-only application state
pub fn test_server() -> TestServer {
    let app_state = AppState::new(None);
    TestServer::new(create_router(app_state)).unwrap()
}

/// Create a board through the API and return it
pub async fn create_board(server: &TestServer, title: &str) -> Board {
    let response = server
        .post("/boards")
        .json(&json!({ "title": title, "description": null }))
        .await;
    response.assert_status(axum::http::StatusCode::CREATED);
    response.json::<Board>()
}

/// Create a list through the API and return it
pub async fn create_list(server: &TestServer, board_id: Uuid, title: &str) -> List {
    let response = server
        .post("/lists")
        .json(&json!({ "title": title, "board_id": board_id }))
        .await;
    response.assert_status(axum::http::StatusCode::CREATED);
    response.json::<List>()
}

/// Create a card through the API and return it
pub async fn create_card(server: &TestServer, list_id: Uuid, title: &str) -> Card {
    let response = server
        .post("/cards")
        .json(&json!({ "title": title, "list_id": list_id, "description": null, "priority": null }))
        .await;
    response.assert_status(axum::http::StatusCode::CREATED);
    response.json::<Card>()
}
