// SPDX-License-Identifier: MPL-2.0
//! `iced_bell` is a desktop notification center built with the Iced GUI
//! framework.
//!
//! It talks to a notification server over REST and a server-sent event
//! stream, and renders a bell with an unread badge, a dropdown of recent
//! notifications, live toasts and a full notification page.

#![doc(html_root_url = "https://docs.rs/iced_bell/0.1.0")]

pub mod api;
pub mod app;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod state;
pub mod ui;
