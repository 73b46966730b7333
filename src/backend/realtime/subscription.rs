/**
 * Real-time Subscription Handler
 *
 * This module implements the Server-Sent Events (SSE) subscription handler
 * for the `/realtime` endpoint, plus the HTTP view of the presence
 * registry.
 *
 * # Server-Sent Events (SSE)
 *
 * The endpoint provides a one-way stream of board events from server to
 * client. SSE is simpler than WebSockets for one-way communication and
 * works well with HTTP/2.
 *
 * # Event Filtering
 *
 * Clients can filter events by type using the `types` query parameter:
 * - `?types=list_reordered,card_moved` - Subscribe to those types only
 * - No parameter - Subscribe to all event types
 *
 * # Presence
 *
 * A subscriber that announces itself with `?client_id=<uuid>&username=<name>`
 * is entered into the presence registry for the lifetime of its stream; the
 * entry is cleared when the stream is dropped, however the connection ends.
 */

use std::collections::HashMap;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::sse::{Event, KeepAlive, Sse},
    Json,
};
use futures_util::stream;
use serde::Serialize;
use uuid::Uuid;

use crate::backend::realtime::presence::{ConnectedClient, PresenceGuard, PresenceRegistry};
use crate::backend::server::state::AppState;
use crate::shared::event::EventType;

fn parse_event_type(value: &str) -> Option<EventType> {
    match value {
        "list_reordered" => Some(EventType::ListReordered),
        "card_reordered" => Some(EventType::CardReordered),
        "card_moved" => Some(EventType::CardMoved),
        "presence" => Some(EventType::Presence),
        custom if !custom.is_empty() => Some(EventType::Custom(custom.to_string())),
        _ => None,
    }
}

/// Handle real-time subscription (GET /realtime)
///
/// # Query Parameters
///
/// - `types` - Comma-separated list of event types to subscribe to
///   (optional; all types when absent)
/// - `client_id`, `username` - Optional self-identification; when both are
///   present the client is tracked in the presence registry until its
///   stream drops
///
/// # Headers
///
/// - `Subscribe:` - Required header to initiate the subscription
///
/// # Errors
///
/// * `400 Bad Request` - If the Subscribe header is missing or `client_id`
///   is not a UUID
pub async fn handle_realtime_subscription(
    State(app): State<AppState>,
    headers: axum::http::HeaderMap,
    Query(query): Query<HashMap<String, String>>,
) -> Result<Sse<impl tokio_stream::Stream<Item = Result<Event, axum::Error>>>, StatusCode> {
    if !headers.contains_key("subscribe") {
        tracing::warn!("[Realtime] Subscribe header missing");
        return Err(StatusCode::BAD_REQUEST);
    }

    let filter: Option<Vec<EventType>> = query
        .get("types")
        .map(|types| {
            types
                .split(',')
                .map(|s| s.trim())
                .filter_map(parse_event_type)
                .collect()
        })
        .filter(|v: &Vec<_>| !v.is_empty());

    // Register presence when the client announced itself.
    let presence_guard = match (query.get("client_id"), query.get("username")) {
        (Some(client_id), Some(username)) => {
            let client_id = Uuid::parse_str(client_id).map_err(|_| StatusCode::BAD_REQUEST)?;
            Some(PresenceGuard::register(
                app.presence.clone(),
                app.events.clone(),
                client_id,
                username.clone(),
            ))
        }
        _ => None,
    };

    let broadcast_rx = app.events.subscribe();
    tracing::info!("[Realtime] Subscription active");

    // The stream yields only events passing the filter; axum's keep-alive
    // maintains the connection in between. The presence guard rides in the
    // unfold state so dropping the stream deregisters the client.
    let stream = stream::unfold(
        (broadcast_rx, filter, presence_guard),
        move |(mut rx, filter, guard)| async move {
            loop {
                match rx.recv().await {
                    Ok(event) => {
                        if let Some(ref filter_types) = filter {
                            if !filter_types.contains(&event.event_type) {
                                continue;
                            }
                        }

                        let event_data = match serde_json::to_string(&event) {
                            Ok(data) => data,
                            Err(e) => {
                                tracing::error!("[Realtime] Failed to serialize event: {:?}", e);
                                continue;
                            }
                        };

                        let sse_event = Event::default()
                            .event(event.event_type.name().to_string())
                            .data(event_data);

                        return Some((Ok(sse_event), (rx, filter, guard)));
                    }
                    Err(tokio::sync::broadcast::error::RecvError::Lagged(skipped)) => {
                        tracing::warn!("[Realtime] Receiver lagged, skipped {} events", skipped);
                        continue;
                    }
                    Err(tokio::sync::broadcast::error::RecvError::Closed) => {
                        tracing::warn!("[Realtime] Broadcast channel closed, ending stream");
                        return None;
                    }
                }
            }
        },
    );

    Ok(Sse::new(stream).keep_alive(KeepAlive::default()))
}

/// Connected clients as reported by GET /presence
#[derive(Debug, Serialize)]
pub struct PresenceResponse {
    pub clients: Vec<ConnectedClient>,
    pub count: usize,
}

/// Get the currently connected clients (GET /presence)
pub async fn get_presence(State(presence): State<PresenceRegistry>) -> Json<PresenceResponse> {
    let clients = presence.online();
    let count = clients.len();
    Json(PresenceResponse { clients, count })
}
