// SPDX-License-Identifier: MPL-2.0
//! Unread counter shown on the bell badge.
//!
//! The counter is a cache of the server's unread count. It is set from the
//! API, bumped once per streamed notification and cleared after a confirmed
//! "mark all read". Marking a single notification read does NOT decrement it.

/// Values above this are displayed as `"99+"`.
pub const BADGE_MAX: u64 = 99;

/// Session-scoped unread count.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct UnreadCounter {
    count: u64,
}

impl UnreadCounter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the count with the value fetched from the server.
    pub fn set(&mut self, count: u64) {
        self.count = count;
    }

    /// Called exactly once per streamed notification, regardless of its type.
    pub fn on_delivered(&mut self) {
        self.count = self.count.saturating_add(1);
    }

    /// Clears the count after a confirmed mark-all-read round trip.
    pub fn reset(&mut self) {
        self.count = 0;
    }

    #[must_use]
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Text for the bell badge, `None` when no badge should be drawn.
    #[must_use]
    pub fn badge_text(&self) -> Option<String> {
        badge_text(self.count)
    }
}

/// Badge display rule: nothing at 0, the exact number up to 99, `"99+"` above.
#[must_use]
pub fn badge_text(count: u64) -> Option<String> {
    match count {
        0 => None,
        1..=BADGE_MAX => Some(count.to_string()),
        _ => Some(format!("{BADGE_MAX}+")),
    }
}
