// SPDX-License-Identifier: MPL-2.0
//! Subscriptions for the application: the live channel and the timers.

use super::{Message, Screen};
use crate::api::{stream, Endpoint, StreamEvent};
use futures_util::Stream;
use iced::{time, Subscription};
use std::time::Duration;

/// Identifies one live connection. A new session epoch opens a new one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct StreamKey {
    endpoint: Endpoint,
    epoch: u64,
}

/// Keeps the live channel open while a signed-in screen is shown.
///
/// The connection is not retried: once it closes, the subscription stays
/// idle until the session epoch changes.
pub fn create_stream_subscription(
    endpoint: &Endpoint,
    epoch: u64,
    screen: Screen,
) -> Subscription<Message> {
    if !screen.is_signed_in() {
        return Subscription::none();
    }
    Subscription::run_with(
        StreamKey {
            endpoint: endpoint.clone(),
            epoch,
        },
        connect,
    )
    .map(Message::Stream)
}

fn connect(key: &StreamKey) -> impl Stream<Item = StreamEvent> {
    stream::live_events(&key.endpoint)
}

/// Periodic tick that drives toast phases, only while toasts exist.
pub fn create_tick_subscription(has_toasts: bool) -> Subscription<Message> {
    if has_toasts {
        time::every(Duration::from_millis(100)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

/// Optional unread-count refetch.
pub fn create_refresh_subscription(
    interval: Option<Duration>,
    screen: Screen,
) -> Subscription<Message> {
    match interval {
        Some(every) if screen.is_signed_in() => {
            time::every(every).map(|_| Message::RefreshUnread)
        }
        _ => Subscription::none(),
    }
}

/// Refreshes "time ago" labels twice a minute.
pub fn create_clock_subscription() -> Subscription<Message> {
    time::every(Duration::from_secs(30)).map(|_| Message::ClockTick)
}
