/**
 * Kanban Route Handlers
 *
 * This module wires the board, list, and card endpoints, including the
 * three position endpoints that drive the reindexer.
 *
 * # Routes
 *
 * ## Boards
 * - `POST /boards` - Create board
 * - `GET /boards` - All boards
 * - `GET /boards/{board_id}` - One board
 * - `PATCH /boards/{board_id}` - Update title/description
 * - `DELETE /boards/{board_id}` - Delete board with lists and cards
 * - `GET /boards/{board_id}/lists` - Lists with embedded cards, ordered
 *
 * ## Lists
 * - `POST /lists` - Create list (appended)
 * - `PATCH /lists/{list_id}` - Rename
 * - `DELETE /lists/{list_id}` - Delete and close the gap
 * - `PATCH /lists/{list_id}/position` - Reindex the board's lists
 *
 * ## Cards
 * - `POST /cards` - Create card (appended)
 * - `PATCH /cards/{card_id}` - Update payload fields
 * - `DELETE /cards/{card_id}` - Delete and close the gap
 * - `PATCH /cards/{card_id}/position` - Reindex within the stated list
 * - `PATCH /cards/{card_id}/move-to-list` - Move across lists, reindex both
 */

use axum::{routing, Router};

use crate::backend::kanban::handlers::{boards, cards, lists};
use crate::backend::server::state::AppState;

/// Configure Kanban routes
pub fn configure_kanban_routes(router: Router<AppState>) -> Router<AppState> {
    router
        // Board endpoints
        .route(
            "/boards",
            routing::post(boards::create_board).get(boards::get_boards),
        )
        .route(
            "/boards/{board_id}",
            routing::get(boards::get_board)
                .patch(boards::update_board)
                .delete(boards::delete_board),
        )
        .route("/boards/{board_id}/lists", routing::get(boards::get_board_lists))
        // List endpoints
        .route("/lists", routing::post(lists::create_list))
        .route(
            "/lists/{list_id}",
            routing::patch(lists::rename_list).delete(lists::delete_list),
        )
        .route(
            "/lists/{list_id}/position",
            routing::patch(lists::update_list_position),
        )
        // Card endpoints
        .route("/cards", routing::post(cards::create_card))
        .route(
            "/cards/{card_id}",
            routing::patch(cards::update_card).delete(cards::delete_card),
        )
        .route(
            "/cards/{card_id}/position",
            routing::patch(cards::update_card_position),
        )
        .route(
            "/cards/{card_id}/move-to-list",
            routing::patch(cards::move_card_to_list),
        )
}
