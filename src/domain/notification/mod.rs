// SPDX-License-Identifier: MPL-2.0
//! Notification records and their categories.

pub mod kind;
pub mod record;
pub mod timestamp;

pub use kind::NotificationKind;
pub use record::{Notification, NotificationId};
