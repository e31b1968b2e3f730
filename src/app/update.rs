// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Handlers translate component events into API calls (as [`Task`]s) and
//! apply the confirmed results to the [`NotificationCenter`]. Local state
//! only changes after the server has answered.

use super::{Message, Screen};
use crate::api::{ApiClient, StreamEvent};
use crate::domain::notification::{Notification, NotificationId};
use crate::error::ApiError;
use crate::i18n::I18n;
use crate::state::{Filter, ListKind, LoadTicket, NotificationCenter};
use crate::ui::toasts::{self, Toast, ToastTiming};
use crate::ui::{bell, dropdown, page, sign_in};
use iced::Task;

/// Mutable view of the application state handed to every handler.
pub struct UpdateContext<'a> {
    pub screen: &'a mut Screen,
    pub client: Option<&'a ApiClient>,
    pub session_epoch: &'a mut u64,
    pub center: &'a mut NotificationCenter,
    pub dropdown_open: &'a mut bool,
    pub toasts: &'a mut toasts::Manager,
    pub toast_timing: ToastTiming,
    pub i18n: &'a I18n,
}

impl UpdateContext<'_> {
    /// Returns the API client, or reports that none could be built.
    fn client(&mut self) -> Option<ApiClient> {
        let client = self.client.cloned();
        if client.is_none() {
            self.toasts.push(Toast::error("toast-no-client"));
        }
        client
    }

    /// Error toast carrying the localized failure as `$reason`.
    fn report(&mut self, key: &str, err: &ApiError) {
        tracing::warn!(%err, key, "notification request failed");
        let reason = self.i18n.tr(err.i18n_key());
        self.toasts.push(Toast::error(key).with_arg("reason", reason));
    }
}

// =============================================================================
// Tasks
// =============================================================================

pub fn fetch_unread(client: &ApiClient, epoch: u64) -> Task<Message> {
    let client = client.clone();
    Task::perform(async move { client.unread_count().await }, move |result| {
        Message::UnreadCountFetched { epoch, result }
    })
}

fn load(ctx: &mut UpdateContext<'_>, kind: ListKind, filter: Filter) -> Task<Message> {
    let Some(client) = ctx.client() else {
        return Task::none();
    };
    let ticket = ctx.center.begin_load(kind, filter);
    Task::perform(
        async move { client.list(ticket.filter()).await },
        move |result| Message::ListLoaded {
            kind,
            ticket,
            result,
        },
    )
}

fn mark_read(ctx: &mut UpdateContext<'_>, id: NotificationId) -> Task<Message> {
    let Some(client) = ctx.client() else {
        return Task::none();
    };
    Task::perform(
        {
            let id = id.clone();
            async move { client.mark_read(&id).await }
        },
        move |result| Message::MarkReadDone { id, result },
    )
}

fn mark_all_read(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let Some(client) = ctx.client() else {
        return Task::none();
    };
    Task::perform(
        async move { client.mark_all_read().await },
        Message::MarkAllReadDone,
    )
}

fn delete(ctx: &mut UpdateContext<'_>, id: NotificationId) -> Task<Message> {
    let Some(client) = ctx.client() else {
        return Task::none();
    };
    Task::perform(
        {
            let id = id.clone();
            async move { client.delete(&id).await }
        },
        move |result| Message::DeleteDone { id, result },
    )
}

// =============================================================================
// Component messages
// =============================================================================

pub fn handle_bell_message(ctx: &mut UpdateContext<'_>, message: bell::Message) -> Task<Message> {
    match bell::update(message, ctx.dropdown_open) {
        bell::Event::Opened => load(ctx, ListKind::Dropdown, Filter::All),
        bell::Event::Closed => Task::none(),
    }
}

pub fn handle_dropdown_message(
    ctx: &mut UpdateContext<'_>,
    message: dropdown::Message,
) -> Task<Message> {
    match dropdown::update(message, ctx.dropdown_open) {
        dropdown::Event::None => Task::none(),
        dropdown::Event::MarkRead(id) => mark_read(ctx, id),
        dropdown::Event::MarkAllRead => mark_all_read(ctx),
        dropdown::Event::Reload => load(ctx, ListKind::Dropdown, Filter::All),
        dropdown::Event::OpenPage => {
            *ctx.screen = Screen::Notifications;
            let filter = ctx.center.page_filter();
            load(ctx, ListKind::Page, filter)
        }
    }
}

pub fn handle_page_message(ctx: &mut UpdateContext<'_>, message: page::Message) -> Task<Message> {
    match page::update(message, ctx.center.page_filter()) {
        page::Event::Load(filter) => load(ctx, ListKind::Page, filter),
        page::Event::MarkRead(id) => mark_read(ctx, id),
        page::Event::Delete(id) => delete(ctx, id),
        page::Event::Back => {
            *ctx.screen = Screen::Home;
            Task::none()
        }
    }
}

/// Starts a new session: new stream connection and a fresh unread count.
pub fn handle_sign_in_message(
    ctx: &mut UpdateContext<'_>,
    message: sign_in::Message,
) -> Task<Message> {
    match message {
        sign_in::Message::Retry => {
            *ctx.session_epoch += 1;
            *ctx.screen = Screen::Home;
            match ctx.client() {
                Some(client) => fetch_unread(&client, *ctx.session_epoch),
                None => Task::none(),
            }
        }
    }
}

// =============================================================================
// API results
// =============================================================================

pub fn handle_unread_count(
    ctx: &mut UpdateContext<'_>,
    epoch: u64,
    result: Result<u64, ApiError>,
) {
    if epoch != *ctx.session_epoch {
        tracing::debug!(epoch, "ignoring unread count from a previous session");
        return;
    }
    match result {
        Ok(count) => ctx.center.set_unread(count),
        Err(ApiError::Unauthorized) => {
            tracing::info!("session rejected, showing sign-in screen");
            *ctx.dropdown_open = false;
            *ctx.screen = Screen::SignIn;
        }
        Err(err) => {
            // Prior value stays
            ctx.report("toast-unread-failed", &err);
        }
    }
}

pub fn handle_list_loaded(
    ctx: &mut UpdateContext<'_>,
    kind: ListKind,
    ticket: LoadTicket,
    result: Result<Vec<Notification>, ApiError>,
) {
    let failure = result.as_ref().err().cloned();
    if !ctx.center.finish_load(kind, ticket, result) {
        tracing::debug!(?kind, "discarding superseded list response");
        return;
    }
    if let Some(err) = failure {
        ctx.report("toast-load-failed", &err);
    }
}

pub fn handle_mark_read_done(
    ctx: &mut UpdateContext<'_>,
    id: &NotificationId,
    result: Result<(), ApiError>,
) {
    match result {
        Ok(()) => {
            ctx.center.confirm_read(id);
        }
        Err(err) => {
            ctx.report("toast-mark-read-failed", &err);
        }
    }
}

pub fn handle_mark_all_read_done(ctx: &mut UpdateContext<'_>, result: Result<(), ApiError>) {
    match result {
        Ok(()) => {
            ctx.center.confirm_all_read();
            ctx.toasts.push(Toast::success("toast-all-read"));
        }
        Err(err) => {
            ctx.report("toast-mark-all-read-failed", &err);
        }
    }
}

pub fn handle_delete_done(
    ctx: &mut UpdateContext<'_>,
    id: &NotificationId,
    result: Result<(), ApiError>,
) {
    match result {
        Ok(()) => {
            if ctx.center.confirm_deleted(id).is_none() {
                tracing::debug!(%id, "deleted notification was not listed");
            }
        }
        Err(err) => {
            ctx.report("toast-delete-failed", &err);
        }
    }
}

// =============================================================================
// Live channel
// =============================================================================

pub fn handle_stream_event(ctx: &mut UpdateContext<'_>, event: StreamEvent) {
    match event {
        StreamEvent::Connected => tracing::info!("live notifications connected"),
        StreamEvent::Delivered(notification) => {
            tracing::debug!(
                id = %notification.id,
                kind = %notification.kind,
                "notification delivered"
            );
            ctx.toasts.push(Toast::delivered(&notification, ctx.toast_timing));
            ctx.center.deliver(notification);
        }
        StreamEvent::Heartbeat => tracing::trace!("stream heartbeat"),
        StreamEvent::Malformed { event_id, reason } => {
            tracing::warn!(?event_id, %reason, "dropping malformed notification event");
            ctx.toasts.push(Toast::warning("toast-stream-malformed"));
        }
        // The unread-count request reports a rejected session and shows
        // the sign-in screen.
        StreamEvent::Closed(Some(ApiError::Unauthorized)) => {}
        StreamEvent::Closed(_) => {
            ctx.toasts.push(Toast::warning("toast-stream-closed"));
        }
    }
}
