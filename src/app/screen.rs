// SPDX-License-Identifier: MPL-2.0
//! Screen enumeration for application navigation.

/// Screens the user can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// Header with the bell and its dropdown.
    #[default]
    Home,
    /// Full notification page.
    Notifications,
    /// The session was rejected.
    SignIn,
}

impl Screen {
    /// Whether the live channel should be connected on this screen.
    #[must_use]
    pub fn is_signed_in(self) -> bool {
        !matches!(self, Screen::SignIn)
    }
}
