// SPDX-License-Identifier: MPL-2.0
//! Domain layer - notification records and their wire format.
//!
//! Pure data types with no GUI or network dependencies, so they can be
//! tested in isolation.
//!
//! # Modules
//!
//! - [`notification`]: [`Notification`](notification::Notification) records,
//!   their [`NotificationKind`](notification::NotificationKind) and glyphs

pub mod notification;
