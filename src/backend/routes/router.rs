/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Route Order
 *
 * 1. Real-time routes (SSE subscription, presence)
 * 2. Kanban routes (boards, lists, cards, position endpoints)
 * 3. Fallback handler (404)
 */

use axum::{http::StatusCode, Json, Router};

use crate::backend::realtime::{get_presence, handle_realtime_subscription};
use crate::backend::routes::kanban_routes::configure_kanban_routes;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Application state containing the Kanban state, lock
///   registry, broadcast channel, presence registry, and optional database
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub fn create_router(app_state: AppState) -> Router<()> {
    // Real-time routes first
    let router = Router::new()
        .route("/realtime", axum::routing::get(handle_realtime_subscription))
        .route("/presence", axum::routing::get(get_presence));

    // Add Kanban routes
    let router = configure_kanban_routes(router);

    // Fallback handler for 404, same JSON body shape as BackendError
    let router = router.fallback(|| async {
        (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({
                "error": "route not found",
                "status": 404,
            })),
        )
    });

    // Use AppState as router state
    router.with_state(app_state)
}
