// SPDX-License-Identifier: MPL-2.0
//! The notification record as exchanged with the server.

use super::kind::NotificationKind;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

// =============================================================================
// NotificationId
// =============================================================================

/// Stable server-side identifier of a notification.
///
/// The server emits numeric ids; tests and other backends may use strings.
/// Both are kept as opaque text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct NotificationId(String);

impl NotificationId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for NotificationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NotificationId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl<'de> Deserialize<'de> for NotificationId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Unsigned(u64),
            Signed(i64),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Text(text) => Self(text),
            Raw::Unsigned(n) => Self(n.to_string()),
            Raw::Signed(n) => Self(n.to_string()),
        })
    }
}

// =============================================================================
// Notification
// =============================================================================

/// One notification record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: NotificationId,
    #[serde(rename = "type", default)]
    pub kind: NotificationKind,
    #[serde(default, deserialize_with = "nullable_text")]
    pub title: String,
    #[serde(default, deserialize_with = "nullable_text")]
    pub message: String,
    #[serde(default)]
    pub is_read: bool,
    #[serde(with = "super::timestamp")]
    pub created_at: DateTime<Utc>,
    /// Id of the match or study material the notification refers to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_entity_id: Option<String>,
}

impl Notification {
    /// Creates an unread notification, mostly useful for tests and previews.
    pub fn new(
        id: impl Into<NotificationId>,
        kind: NotificationKind,
        title: impl Into<String>,
        message: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            title: title.into(),
            message: message.into(),
            is_read: false,
            created_at,
            related_entity_id: None,
        }
    }

    #[must_use]
    pub fn is_unread(&self) -> bool {
        !self.is_read
    }

    /// Flips read-state to true. Read-state never goes back to false locally.
    pub fn mark_read(&mut self) {
        self.is_read = true;
    }
}

fn nullable_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
