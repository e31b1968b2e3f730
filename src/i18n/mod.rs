// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Translations are Fluent (`.ftl`) files embedded from `assets/i18n/`.
//!
//! # Features
//!
//! - Locale resolved from CLI, config, then system settings
//! - Language-only matching (`ko-KR` selects `ko`)
//! - Runtime language switching
//! - Fallback to `en-US`, then to a visible `MISSING:` marker

pub mod fluent;

pub use fluent::I18n;
