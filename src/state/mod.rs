// SPDX-License-Identifier: MPL-2.0
//! Client-side notification state.
//!
//! - [`unread`] - Unread counter and badge display rule
//! - [`list`] - Notification list store with load tracking
//! - [`center`] - Fan-out of streamed and confirmed events across stores

pub mod center;
pub mod list;
pub mod unread;

pub use center::{ListKind, NotificationCenter};
pub use list::{Filter, LoadStatus, LoadTicket, NotificationList};
pub use unread::UnreadCounter;
