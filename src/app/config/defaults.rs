// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Server**: API location and sign-in page
//! - **Toast**: Delivered-toast lifecycle durations
//! - **Refresh**: Periodic unread-count refetch bounds

// ==========================================================================
// Server Defaults
// ==========================================================================

/// Server root used when no `base_url` is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Path of the sign-in page, relative to the base URL.
pub const DEFAULT_LOGIN_PATH: &str = "/login";

// ==========================================================================
// Toast Defaults
// ==========================================================================

/// Delay before a delivered toast becomes visible (milliseconds).
pub const DEFAULT_TOAST_ENTER_DELAY_MS: u64 = 100;

/// Time from creation until a delivered toast starts leaving (milliseconds).
pub const DEFAULT_TOAST_DISPLAY_MS: u64 = 5000;

/// Length of the exit fade (milliseconds).
pub const DEFAULT_TOAST_EXIT_MS: u64 = 300;

/// Upper bound for any configured toast duration (milliseconds).
pub const MAX_TOAST_DURATION_MS: u64 = 60_000;

// ==========================================================================
// Refresh Defaults
// ==========================================================================

/// Shortest accepted unread-count refresh interval (seconds).
pub const MIN_REFRESH_INTERVAL_SECS: u64 = 5;

/// Longest accepted unread-count refresh interval (seconds).
pub const MAX_REFRESH_INTERVAL_SECS: u64 = 3600;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_TOAST_ENTER_DELAY_MS < DEFAULT_TOAST_DISPLAY_MS);
    assert!(DEFAULT_TOAST_DISPLAY_MS <= MAX_TOAST_DURATION_MS);
    assert!(DEFAULT_TOAST_EXIT_MS <= MAX_TOAST_DURATION_MS);
    assert!(MIN_REFRESH_INTERVAL_SECS < MAX_REFRESH_INTERVAL_SECS);
};
