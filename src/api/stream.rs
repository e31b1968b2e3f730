// SPDX-License-Identifier: MPL-2.0
//! Live delivery over the notification SSE channel.
//!
//! One connection per subscription. There is no reconnection, heartbeat
//! timeout or resume-from-offset: when the connection ends, a single
//! [`StreamEvent::Closed`] is emitted and the stream finishes.

use super::client::{ApiClient, Endpoint};
use super::sse::{SseDecoder, SseEvent};
use crate::domain::notification::Notification;
use crate::error::ApiError;
use futures_util::{SinkExt, Stream, StreamExt};
use iced::futures::channel::mpsc;

/// Event name carrying one notification record as JSON.
pub const NOTIFICATION_EVENT: &str = "notification";

/// Keep-alive event name. The backend frames it as `event:heartbeat` plus a
/// `:keep-alive` comment with no `data:` line, which the decoder drops.
pub const HEARTBEAT_EVENT: &str = "heartbeat";

/// Messages produced by the live channel.
#[derive(Debug, Clone)]
pub enum StreamEvent {
    /// The server accepted the subscription.
    Connected,
    /// A notification was pushed.
    Delivered(Notification),
    /// Keep-alive received. Only servers that attach data to their
    /// heartbeat produce it.
    Heartbeat,
    /// A `notification` event whose payload could not be decoded.
    /// Only that event is lost.
    Malformed {
        event_id: Option<String>,
        reason: String,
    },
    /// Connection ended; `None` when the server closed it cleanly.
    Closed(Option<ApiError>),
}

/// Maps a raw SSE event to a stream message. Unknown event names yield `None`.
pub fn classify(event: SseEvent) -> Option<StreamEvent> {
    match event.event.as_str() {
        NOTIFICATION_EVENT => Some(match serde_json::from_str::<Notification>(&event.data) {
            Ok(notification) => StreamEvent::Delivered(notification),
            Err(err) => StreamEvent::Malformed {
                event_id: event.id,
                reason: err.to_string(),
            },
        }),
        HEARTBEAT_EVENT => Some(StreamEvent::Heartbeat),
        other => {
            tracing::debug!(event = other, "ignoring unknown stream event");
            None
        }
    }
}

/// Opens the stream and forwards every message into `output` until the
/// connection ends or the receiver goes away.
async fn pump(client: &ApiClient, output: &mut mpsc::Sender<StreamEvent>) {
    let response = match client.open_stream().await {
        Ok(response) => response,
        Err(err) => {
            let _ = output.send(StreamEvent::Closed(Some(err))).await;
            return;
        }
    };

    tracing::info!("notification stream connected");
    if output.send(StreamEvent::Connected).await.is_err() {
        return;
    }

    let mut decoder = SseDecoder::new();
    let mut body = response.bytes_stream();

    let reason = loop {
        match body.next().await {
            Some(Ok(chunk)) => {
                for event in decoder.push(&chunk) {
                    let Some(message) = classify(event) else {
                        continue;
                    };
                    if output.send(message).await.is_err() {
                        // Subscription dropped: the view unmounted.
                        tracing::info!("notification stream closed by client");
                        return;
                    }
                }
            }
            Some(Err(err)) => break Some(ApiError::from_reqwest(&err)),
            None => break None,
        }
    };

    match &reason {
        Some(err) => tracing::warn!(%err, "notification stream failed"),
        None => tracing::info!("notification stream ended by server"),
    }
    let _ = output.send(StreamEvent::Closed(reason)).await;
}

/// Live notifications for `endpoint` as a stream of [`StreamEvent`]s.
///
/// An endpoint that cannot be used yields a single `Closed` with the reason.
pub fn live_events(endpoint: &Endpoint) -> impl Stream<Item = StreamEvent> {
    let endpoint = endpoint.clone();
    iced::stream::channel(100, move |mut output| async move {
        match ApiClient::new(&endpoint) {
            Ok(client) => pump(&client, &mut output).await,
            Err(err) => {
                tracing::warn!(%err, "notification stream not opened");
                let _ = output.send(StreamEvent::Closed(Some(err))).await;
            }
        }
    })
}
