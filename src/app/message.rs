// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::api::StreamEvent;
use crate::domain::notification::{Notification, NotificationId};
use crate::error::ApiError;
use crate::state::{ListKind, LoadTicket};
use crate::ui::toasts::ToastMessage;
use crate::ui::{bell, dropdown, page, sign_in};
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Bell(bell::Message),
    Dropdown(dropdown::Message),
    Page(page::Message),
    SignIn(sign_in::Message),
    Toast(ToastMessage),
    /// Live channel traffic.
    Stream(StreamEvent),
    /// Result of `GET unread-count`, tagged with the session it was sent for.
    UnreadCountFetched {
        epoch: u64,
        result: Result<u64, ApiError>,
    },
    ListLoaded {
        kind: ListKind,
        ticket: LoadTicket,
        result: Result<Vec<Notification>, ApiError>,
    },
    MarkReadDone {
        id: NotificationId,
        result: Result<(), ApiError>,
    },
    MarkAllReadDone(Result<(), ApiError>),
    DeleteDone {
        id: NotificationId,
        result: Result<(), ApiError>,
    },
    /// Periodic unread-count refetch.
    RefreshUnread,
    /// Advances the wall clock used for "time ago" labels.
    ClockTick,
    Tick(Instant), // Toast lifecycle
}

/// Runtime flags passed in from the CLI or launcher to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `ko`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_BELL_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Server base URL, overriding `[server] base_url`.
    pub server: Option<String>,
    /// Session cookie, overriding `[server] session_cookie`.
    pub session: Option<String>,
}
