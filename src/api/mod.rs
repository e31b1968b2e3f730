// SPDX-License-Identifier: MPL-2.0
//! Remote notification API.
//!
//! - [`client`] - REST calls (unread count, list, mark read, delete)
//! - [`sse`] - `text/event-stream` decoder
//! - [`stream`] - Live delivery channel built on the two above

pub mod client;
pub mod sse;
pub mod stream;

pub use client::{ApiClient, Endpoint};
pub use stream::{live_events, StreamEvent};
