/**
 * Real-time Event Broadcasting
 *
 * This module provides utilities for broadcasting real-time events to all
 * subscribers. Events are broadcast using `tokio::sync::broadcast`, which
 * provides a multi-producer, multi-consumer channel; every subscriber
 * receives a copy of each event.
 */

use tokio::sync::broadcast;

use crate::shared::RealtimeEvent;

/// Real-time update event broadcast
///
/// This type represents a broadcast channel for real-time events. It can be
/// cloned and shared across handlers to allow broadcasting events from
/// anywhere in the application.
pub type RealtimeEventBroadcast = broadcast::Sender<RealtimeEvent>;

/// Broadcast a real-time event to all subscribers
///
/// # Returns
///
/// Number of active subscribers that received the event (0 if none)
pub async fn broadcast_event(broadcast_tx: &RealtimeEventBroadcast, event: RealtimeEvent) -> usize {
    match broadcast_tx.send(event) {
        Ok(subscriber_count) => {
            tracing::debug!("[Realtime] Event broadcast to {} subscribers", subscriber_count);
            subscriber_count
        }
        Err(e) => {
            // No subscribers, that's okay
            tracing::debug!("[Realtime] No subscribers to receive event: {:?}", e);
            0
        }
    }
}
