// SPDX-License-Identifier: MPL-2.0
//! Toast popups.
//!
//! Two kinds of toast share one presenter:
//! - *delivered* toasts announce a notification that just arrived on the
//!   live stream (glyph, title, message)
//! - *status* toasts report the outcome of a user action or a connection
//!   problem, using a localized message key
//!
//! Each toast carries its own [`ToastTiming`]; the [`Manager`] prunes
//! toasts whose exit phase has finished on every tick. There is no cap on
//! the number of toasts shown at once and no de-duplication.
//!
//! ```ignore
//! let mut toasts = Manager::new();
//! toasts.push(Toast::delivered(&record, ToastTiming::default()));
//! toasts.push(Toast::error("toast-delete-failed"));
//!
//! // view
//! let overlay = view::overlay(&toasts, &i18n, Instant::now()).map(Message::Toast);
//! ```

mod manager;
mod toast;
pub mod view;

pub use manager::{Manager, Message as ToastMessage};
pub use toast::{Body, Phase, Severity, Toast, ToastId, ToastTiming};
