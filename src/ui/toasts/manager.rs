// SPDX-License-Identifier: MPL-2.0
//! Toast lifecycle management.
//!
//! The `Manager` keeps every live toast and drops the ones whose exit phase
//! has finished. Warnings and errors are also written to the log.

use super::toast::{Body, Severity, Toast, ToastId};
use std::collections::VecDeque;
use std::time::Instant;

/// Messages for toast state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Dismiss a specific toast by ID.
    Dismiss(ToastId),
}

/// Manages the live toasts (newest first).
#[derive(Debug, Default)]
pub struct Manager {
    toasts: VecDeque<Toast>,
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes a new toast. It is shown right away, above older ones.
    pub fn push(&mut self, toast: Toast) {
        if let Body::Status { message_key, .. } = toast.body() {
            match toast.severity() {
                Severity::Warning => tracing::warn!(key = %message_key, "warning toast"),
                Severity::Error => tracing::error!(key = %message_key, "error toast"),
                Severity::Success | Severity::Info => {}
            }
        }
        self.toasts.push_front(toast);
    }

    /// Dismisses a toast by its ID.
    ///
    /// Returns `true` if the toast was found and removed.
    pub fn dismiss(&mut self, id: ToastId) -> bool {
        match self.toasts.iter().position(|t| t.id() == id) {
            Some(pos) => {
                self.toasts.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Drops every toast that has expired at `now`.
    pub fn tick_at(&mut self, now: Instant) {
        self.toasts.retain(|t| !t.is_expired_at(now));
    }

    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
        }
    }

    pub fn visible(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    /// Whether a tick subscription is needed.
    #[must_use]
    pub fn has_toasts(&self) -> bool {
        !self.toasts.is_empty()
    }
}
