// SPDX-License-Identifier: MPL-2.0
//! Notification categories sent by the server.

use serde::{Deserialize, Serialize};

// =============================================================================
// Glyphs
// =============================================================================

/// Fixed glyph table shown next to each notification.
pub mod glyphs {
    pub const PROMOTED: &str = "🎉";
    pub const APPROVED: &str = "✅";
    pub const REJECTED: &str = "❌";
    pub const MATCH_COMPLETED: &str = "🤝";
    pub const MATCH_REQUEST: &str = "📬";
    /// Used for system announcements and any type this client does not know.
    pub const DEFAULT: &str = "📢";
}

// =============================================================================
// NotificationKind
// =============================================================================

/// The `type` field of a notification record.
///
/// Unrecognized wire values are kept verbatim in [`NotificationKind::Other`]
/// so newer servers never break decoding.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum NotificationKind {
    UserPromoted,
    MaterialApproved,
    MaterialRejected,
    MatchCompleted,
    MatchRequestReceived,
    System,
    Other(String),
}

impl NotificationKind {
    /// Parses the wire representation. Never fails.
    #[must_use]
    pub fn from_wire(raw: &str) -> Self {
        match raw {
            "USER_PROMOTED" => Self::UserPromoted,
            "MATERIAL_APPROVED" => Self::MaterialApproved,
            "MATERIAL_REJECTED" => Self::MaterialRejected,
            "MATCH_COMPLETED" => Self::MatchCompleted,
            "MATCH_REQUEST_RECEIVED" => Self::MatchRequestReceived,
            "SYSTEM" => Self::System,
            other => Self::Other(other.to_string()),
        }
    }

    /// Returns the wire representation.
    #[must_use]
    pub fn as_wire(&self) -> &str {
        match self {
            Self::UserPromoted => "USER_PROMOTED",
            Self::MaterialApproved => "MATERIAL_APPROVED",
            Self::MaterialRejected => "MATERIAL_REJECTED",
            Self::MatchCompleted => "MATCH_COMPLETED",
            Self::MatchRequestReceived => "MATCH_REQUEST_RECEIVED",
            Self::System => "SYSTEM",
            Self::Other(raw) => raw,
        }
    }

    /// Returns the glyph displayed for this kind.
    #[must_use]
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::UserPromoted => glyphs::PROMOTED,
            Self::MaterialApproved => glyphs::APPROVED,
            Self::MaterialRejected => glyphs::REJECTED,
            Self::MatchCompleted => glyphs::MATCH_COMPLETED,
            Self::MatchRequestReceived => glyphs::MATCH_REQUEST,
            Self::System | Self::Other(_) => glyphs::DEFAULT,
        }
    }
}

impl Default for NotificationKind {
    fn default() -> Self {
        Self::Other(String::new())
    }
}

impl From<String> for NotificationKind {
    fn from(raw: String) -> Self {
        Self::from_wire(&raw)
    }
}

impl From<NotificationKind> for String {
    fn from(kind: NotificationKind) -> Self {
        kind.as_wire().to_string()
    }
}

impl std::fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_wire())
    }
}
