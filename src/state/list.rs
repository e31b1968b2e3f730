// SPDX-License-Identifier: MPL-2.0
//! In-memory notification list backing the dropdown and the full page.
//!
//! The list is replaced wholesale by `load`, then mutated locally by
//! confirmed read/delete actions and by streamed arrivals. Identifiers are
//! unique within a list.

use crate::domain::notification::{Notification, NotificationId};
use crate::error::ApiError;

/// Which notifications a list fetch asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Filter {
    #[default]
    All,
    UnreadOnly,
}

impl Filter {
    #[must_use]
    pub fn unread_only(self) -> bool {
        matches!(self, Filter::UnreadOnly)
    }

    /// Whether a record belongs in a list fetched with this filter.
    #[must_use]
    pub fn accepts(self, notification: &Notification) -> bool {
        match self {
            Filter::All => true,
            Filter::UnreadOnly => notification.is_unread(),
        }
    }
}

/// Progress of the most recent `load`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadStatus {
    /// Never loaded.
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed(ApiError),
}

/// Identifies one `load` request so late responses can be recognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
    filter: Filter,
}

impl LoadTicket {
    #[must_use]
    pub fn filter(&self) -> Filter {
        self.filter
    }
}

/// Ordered notifications, newest arrivals first.
#[derive(Debug, Default, Clone)]
pub struct NotificationList {
    items: Vec<Notification>,
    status: LoadStatus,
    generation: u64,
}

impl NotificationList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the list as loading and returns the ticket for the response.
    ///
    /// Any ticket issued earlier becomes stale.
    pub fn begin_load(&mut self, filter: Filter) -> LoadTicket {
        self.generation += 1;
        self.status = LoadStatus::Loading;
        LoadTicket {
            generation: self.generation,
            filter,
        }
    }

    /// Applies a `load` response.
    ///
    /// Returns `false` (and changes nothing) if the ticket was superseded by
    /// a newer `begin_load`.
    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<Vec<Notification>, ApiError>,
    ) -> bool {
        if ticket.generation != self.generation {
            return false;
        }

        match result {
            Ok(items) => {
                self.items = Vec::with_capacity(items.len());
                for item in items {
                    if !self.contains(&item.id) {
                        self.items.push(item);
                    }
                }
                self.status = LoadStatus::Loaded;
            }
            Err(err) => {
                self.status = LoadStatus::Failed(err);
            }
        }
        true
    }

    /// Puts a streamed record at the head.
    ///
    /// A record whose id is already present replaces the old entry.
    pub fn prepend(&mut self, notification: Notification) {
        self.items.retain(|n| n.id != notification.id);
        self.items.insert(0, notification);
    }

    /// Flips one record to read. Returns `false` if the id is unknown.
    pub fn mark_read(&mut self, id: &NotificationId) -> bool {
        match self.items.iter_mut().find(|n| &n.id == id) {
            Some(notification) => {
                notification.mark_read();
                true
            }
            None => false,
        }
    }

    /// Flips every record to read. Returns how many were unread.
    pub fn mark_all_read(&mut self) -> usize {
        let mut flipped = 0;
        for notification in self.items.iter_mut().filter(|n| n.is_unread()) {
            notification.mark_read();
            flipped += 1;
        }
        flipped
    }

    /// Removes the record with this id.
    pub fn remove(&mut self, id: &NotificationId) -> Option<Notification> {
        let pos = self.items.iter().position(|n| &n.id == id)?;
        Some(self.items.remove(pos))
    }

    #[must_use]
    pub fn contains(&self, id: &NotificationId) -> bool {
        self.items.iter().any(|n| &n.id == id)
    }

    #[must_use]
    pub fn get(&self, id: &NotificationId) -> Option<&Notification> {
        self.items.iter().find(|n| &n.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.items.iter()
    }

    #[must_use]
    pub fn head(&self) -> Option<&Notification> {
        self.items.first()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn unread_len(&self) -> usize {
        self.items.iter().filter(|n| n.is_unread()).count()
    }

    #[must_use]
    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.status == LoadStatus::Loading
    }
}
