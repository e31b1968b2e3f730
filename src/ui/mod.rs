// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! takes a `ViewContext`, emits its own `Message`, and where the parent
//! must act, `update` returns an `Event`.
//!
//! # Components
//!
//! - [`bell`] - Bell icon with the unread badge
//! - [`dropdown`] - Recent notifications under the bell
//! - [`page`] - Full notification page with the unread filter
//! - [`feed`] - Loading/error/empty/list body shared by dropdown and page
//! - [`item`] - One notification row
//! - [`sign_in`] - Shown when the session is rejected
//! - [`toasts`] - Toast overlay for deliveries and status feedback
//!
//! # Shared Infrastructure
//!
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod bell;
pub mod design_tokens;
pub mod dropdown;
pub mod feed;
pub mod item;
pub mod page;
pub mod sign_in;
pub mod theming;
pub mod toasts;
