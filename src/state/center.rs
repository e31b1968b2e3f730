// SPDX-License-Identifier: MPL-2.0
//! Read-state synchronization between the bell, the dropdown and the page.
//!
//! `NotificationCenter` owns the unread counter and both list stores. Every
//! method is a plain state transition called from the UI update loop once
//! the corresponding server event or response is known, so the whole flow
//! can be exercised without a window or a network.

use super::list::{Filter, LoadTicket, NotificationList};
use super::unread::UnreadCounter;
use crate::domain::notification::{Notification, NotificationId};
use crate::error::ApiError;

/// The two list stores kept by the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListKind {
    /// Recent notifications under the bell.
    Dropdown,
    /// The full notification page.
    Page,
}

#[derive(Debug, Default)]
pub struct NotificationCenter {
    unread: UnreadCounter,
    dropdown: NotificationList,
    page: NotificationList,
    page_filter: Filter,
}

impl NotificationCenter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // -------------------------------------------------------------------------
    // Counter
    // -------------------------------------------------------------------------

    /// Applies an unread count fetched from the server.
    pub fn set_unread(&mut self, count: u64) {
        self.unread.set(count);
    }

    #[must_use]
    pub fn unread(&self) -> &UnreadCounter {
        &self.unread
    }

    // -------------------------------------------------------------------------
    // Live delivery
    // -------------------------------------------------------------------------

    /// Fans a streamed notification out to the counter and the list stores.
    ///
    /// The page only receives records its current filter would have fetched.
    pub fn deliver(&mut self, notification: Notification) {
        self.unread.on_delivered();
        if self.page_filter.accepts(&notification) {
            self.page.prepend(notification.clone());
        }
        self.dropdown.prepend(notification);
    }

    // -------------------------------------------------------------------------
    // Loading
    // -------------------------------------------------------------------------

    /// Starts a fetch for one list. The dropdown always fetches everything.
    pub fn begin_load(&mut self, kind: ListKind, filter: Filter) -> LoadTicket {
        match kind {
            ListKind::Dropdown => self.dropdown.begin_load(Filter::All),
            ListKind::Page => {
                self.page_filter = filter;
                self.page.begin_load(filter)
            }
        }
    }

    /// Applies a fetch response. Returns `false` for superseded responses.
    pub fn finish_load(
        &mut self,
        kind: ListKind,
        ticket: LoadTicket,
        result: Result<Vec<Notification>, ApiError>,
    ) -> bool {
        self.list_mut(kind).finish_load(ticket, result)
    }

    // -------------------------------------------------------------------------
    // Confirmed mutations
    // -------------------------------------------------------------------------

    /// A mark-read request succeeded.
    ///
    /// The unread counter is intentionally left untouched; it only changes
    /// through `set_unread`, `deliver` and `confirm_all_read`.
    pub fn confirm_read(&mut self, id: &NotificationId) -> bool {
        let in_dropdown = self.dropdown.mark_read(id);
        let in_page = self.page.mark_read(id);
        in_dropdown || in_page
    }

    /// A mark-all-read request succeeded.
    pub fn confirm_all_read(&mut self) {
        self.dropdown.mark_all_read();
        self.page.mark_all_read();
        self.unread.reset();
    }

    /// A delete request succeeded.
    pub fn confirm_deleted(&mut self, id: &NotificationId) -> Option<Notification> {
        let from_dropdown = self.dropdown.remove(id);
        self.page.remove(id).or(from_dropdown)
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    #[must_use]
    pub fn list(&self, kind: ListKind) -> &NotificationList {
        match kind {
            ListKind::Dropdown => &self.dropdown,
            ListKind::Page => &self.page,
        }
    }

    fn list_mut(&mut self, kind: ListKind) -> &mut NotificationList {
        match kind {
            ListKind::Dropdown => &mut self.dropdown,
            ListKind::Page => &mut self.page,
        }
    }

    #[must_use]
    pub fn page_filter(&self) -> Filter {
        self.page_filter
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::notification::NotificationKind;
    use chrono::Utc;

    fn record(id: &str, kind: NotificationKind) -> Notification {
        Notification::new(id, kind, "title", "message", Utc::now())
    }

    fn with_loaded_dropdown(ids: &[&str]) -> NotificationCenter {
        let mut center = NotificationCenter::new();
        let ticket = center.begin_load(ListKind::Dropdown, Filter::All);
        let items = ids
            .iter()
            .map(|id| record(id, NotificationKind::System))
            .collect();
        assert!(center.finish_load(ListKind::Dropdown, ticket, Ok(items)));
        center
    }

    #[test]
    fn streamed_event_bumps_counter_and_heads_list() {
        let mut center = with_loaded_dropdown(&["a", "b"]);
        center.set_unread(3);

        center.deliver(record("n1", NotificationKind::MatchCompleted));

        assert_eq!(center.unread().count(), 4);
        let dropdown = center.list(ListKind::Dropdown);
        assert_eq!(dropdown.head().unwrap().id.as_str(), "n1");
        assert!(dropdown.head().unwrap().is_unread());
    }

    #[test]
    fn mark_read_does_not_touch_counter() {
        let mut center = with_loaded_dropdown(&[]);
        center.set_unread(3);
        center.deliver(record("n1", NotificationKind::MatchCompleted));

        assert!(center.confirm_read(&"n1".into()));

        let n1 = center.list(ListKind::Dropdown).get(&"n1".into()).unwrap();
        assert!(n1.is_read);
        assert_eq!(center.unread().count(), 4);
    }

    #[test]
    fn n_events_grow_counter_and_list_by_n() {
        let mut center = with_loaded_dropdown(&["x", "y"]);
        center.set_unread(2);

        for i in 0..25 {
            center.deliver(record(&format!("s{i}"), NotificationKind::System));
        }

        assert_eq!(center.unread().count(), 27);
        assert_eq!(center.list(ListKind::Dropdown).len(), 27);
    }

    #[test]
    fn counter_after_reset_counts_only_later_events() {
        let mut center = with_loaded_dropdown(&[]);
        for i in 0..5 {
            center.deliver(record(&format!("a{i}"), NotificationKind::System));
        }
        center.confirm_all_read();
        for i in 0..2 {
            center.deliver(record(&format!("b{i}"), NotificationKind::System));
        }
        assert_eq!(center.unread().count(), 2);
    }

    #[test]
    fn mark_all_read_then_reload_leaves_nothing_unread() {
        let mut center = with_loaded_dropdown(&["a", "b"]);
        center.set_unread(2);

        center.confirm_all_read();
        assert_eq!(center.unread().count(), 0);
        assert_eq!(center.list(ListKind::Dropdown).unread_len(), 0);

        // Server is consistent: it now reports everything as read.
        let ticket = center.begin_load(ListKind::Dropdown, Filter::All);
        let mut a = record("a", NotificationKind::System);
        let mut b = record("b", NotificationKind::System);
        a.mark_read();
        b.mark_read();
        center.finish_load(ListKind::Dropdown, ticket, Ok(vec![a, b]));

        assert_eq!(center.list(ListKind::Dropdown).unread_len(), 0);
        assert_eq!(center.unread().count(), 0);
    }

    #[test]
    fn mark_all_read_covers_page_too() {
        let mut center = NotificationCenter::new();
        let ticket = center.begin_load(ListKind::Page, Filter::All);
        center.finish_load(
            ListKind::Page,
            ticket,
            Ok(vec![record("p", NotificationKind::System)]),
        );

        center.confirm_all_read();
        assert_eq!(center.list(ListKind::Page).unread_len(), 0);
    }

    #[test]
    fn delete_removes_only_matching_id_with_identical_content() {
        let mut center = NotificationCenter::new();
        let ticket = center.begin_load(ListKind::Page, Filter::All);
        let items = vec![
            record("1", NotificationKind::System),
            record("2", NotificationKind::System),
            record("3", NotificationKind::System),
        ];
        center.finish_load(ListKind::Page, ticket, Ok(items));

        let removed = center.confirm_deleted(&"2".into()).expect("present");
        assert_eq!(removed.id.as_str(), "2");

        let ids: Vec<_> = center
            .list(ListKind::Page)
            .iter()
            .map(|n| n.id.as_str())
            .collect();
        assert_eq!(ids, ["1", "3"]);
    }

    #[test]
    fn delete_also_drops_record_from_dropdown() {
        let mut center = with_loaded_dropdown(&["a", "b"]);
        center.set_unread(1);
        center.confirm_deleted(&"a".into());

        assert!(!center.list(ListKind::Dropdown).contains(&"a".into()));
        assert_eq!(center.unread().count(), 1);
    }

    #[test]
    fn page_with_unread_filter_ignores_read_arrivals() {
        let mut center = NotificationCenter::new();
        let ticket = center.begin_load(ListKind::Page, Filter::UnreadOnly);
        center.finish_load(ListKind::Page, ticket, Ok(Vec::new()));

        let mut already_read = record("r", NotificationKind::System);
        already_read.mark_read();
        center.deliver(already_read);
        center.deliver(record("u", NotificationKind::System));

        let page = center.list(ListKind::Page);
        assert_eq!(page.len(), 1);
        assert_eq!(page.head().unwrap().id.as_str(), "u");
        assert_eq!(center.list(ListKind::Dropdown).len(), 2);
        assert_eq!(center.page_filter(), Filter::UnreadOnly);
    }

    #[test]
    fn dropdown_load_ignores_requested_filter() {
        let mut center = NotificationCenter::new();
        let ticket = center.begin_load(ListKind::Dropdown, Filter::UnreadOnly);
        assert_eq!(ticket.filter(), Filter::All);
    }

    #[test]
    fn late_load_overwrites_confirmed_read_but_stale_one_does_not() {
        let mut center = with_loaded_dropdown(&["a"]);

        let stale = center.begin_load(ListKind::Dropdown, Filter::All);
        let fresh = center.begin_load(ListKind::Dropdown, Filter::All);
        center.confirm_read(&"a".into());

        let unread_copy = vec![record("a", NotificationKind::System)];
        assert!(!center.finish_load(ListKind::Dropdown, stale, Ok(unread_copy.clone())));
        assert!(center.list(ListKind::Dropdown).get(&"a".into()).unwrap().is_read);

        // The latest snapshot is server truth and replaces local state.
        assert!(center.finish_load(ListKind::Dropdown, fresh, Ok(unread_copy)));
        assert!(center.list(ListKind::Dropdown).get(&"a".into()).unwrap().is_unread());
    }
}
