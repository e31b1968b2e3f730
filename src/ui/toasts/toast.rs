// SPDX-License-Identifier: MPL-2.0
//! Toast data and its time-driven lifecycle.

use crate::domain::notification::Notification;
use crate::ui::design_tokens::palette;
use iced::Color;
use std::time::{Duration, Instant};

/// Unique identifier for a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToastId(u64);

impl ToastId {
    /// Creates a new unique toast ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for ToastId {
    fn default() -> Self {
        Self::new()
    }
}

/// Severity level determines accent color and how long status toasts stay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    /// Operation completed successfully (green, 3s duration).
    Success,
    /// Informational message (blue, 3s duration). Delivered toasts use it.
    #[default]
    Info,
    /// Warning that doesn't block operation (orange, 5s duration).
    Warning,
    /// Error requiring attention (red, manual dismiss).
    Error,
}

impl Severity {
    /// Returns the accent color for this severity level.
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Severity::Success => palette::SUCCESS_500,
            Severity::Info => palette::INFO_500,
            Severity::Warning => palette::WARNING_500,
            Severity::Error => palette::ERROR_500,
        }
    }

    /// Returns the auto-dismiss duration for status toasts of this severity.
    /// Returns `None` for errors (manual dismiss required).
    #[must_use]
    pub fn auto_dismiss_duration(&self) -> Option<Duration> {
        match self {
            Severity::Success | Severity::Info => Some(Duration::from_secs(3)),
            Severity::Warning => Some(Duration::from_secs(5)),
            Severity::Error => None,
        }
    }

    /// Text glyph shown in front of status messages.
    #[must_use]
    pub fn glyph(&self) -> &'static str {
        match self {
            Severity::Success => "✔",
            Severity::Info => "ℹ",
            Severity::Warning | Severity::Error => "⚠",
        }
    }
}

/// Lifecycle durations, all measured from the toast's creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastTiming {
    /// Hidden until this much time has passed.
    pub enter_delay: Duration,
    /// Fully shown until this much time has passed. `None` keeps the
    /// toast until it is dismissed.
    pub display: Option<Duration>,
    /// Fade-out length once `display` is reached.
    pub exit: Duration,
}

impl Default for ToastTiming {
    fn default() -> Self {
        Self {
            enter_delay: Duration::from_millis(100),
            display: Some(Duration::from_millis(5000)),
            exit: Duration::from_millis(300),
        }
    }
}

impl ToastTiming {
    /// Timing for a status toast: no entry delay, severity-based display.
    #[must_use]
    pub fn for_severity(severity: Severity) -> Self {
        Self {
            enter_delay: Duration::ZERO,
            display: severity.auto_dismiss_duration(),
            ..Self::default()
        }
    }
}

/// Where a toast is in its lifecycle at a given instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Phase {
    /// Created but not yet visible.
    Entering,
    /// Fully visible.
    Shown,
    /// Fading out; `progress` goes from 0.0 to 1.0.
    Leaving { progress: f32 },
    /// Finished; the manager drops it on the next tick.
    Expired,
}

impl Phase {
    /// Opacity to render with during this phase.
    #[must_use]
    pub fn opacity(&self) -> f32 {
        match self {
            Phase::Entering | Phase::Expired => 0.0,
            Phase::Shown => 1.0,
            Phase::Leaving { progress } => (1.0 - progress).clamp(0.0, 1.0),
        }
    }
}

/// What a toast says.
#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    /// A notification that just arrived.
    Delivered {
        glyph: &'static str,
        title: String,
        message: String,
    },
    /// A localized status line, resolved at render time.
    Status {
        message_key: String,
        message_args: Vec<(String, String)>,
    },
}

/// A toast to be displayed to the user.
#[derive(Debug, Clone)]
pub struct Toast {
    id: ToastId,
    severity: Severity,
    body: Body,
    created_at: Instant,
    timing: ToastTiming,
}

impl Toast {
    /// Announces a freshly delivered notification.
    pub fn delivered(notification: &Notification, timing: ToastTiming) -> Self {
        Self {
            id: ToastId::new(),
            severity: Severity::Info,
            body: Body::Delivered {
                glyph: notification.kind.glyph(),
                title: notification.title.clone(),
                message: notification.message.clone(),
            },
            created_at: Instant::now(),
            timing,
        }
    }

    /// Creates a status toast with the given severity and message key.
    ///
    /// The `message_key` should be a valid i18n key that will be resolved
    /// at render time.
    pub fn status(severity: Severity, message_key: impl Into<String>) -> Self {
        Self {
            id: ToastId::new(),
            severity,
            body: Body::Status {
                message_key: message_key.into(),
                message_args: Vec::new(),
            },
            created_at: Instant::now(),
            timing: ToastTiming::for_severity(severity),
        }
    }

    pub fn success(message_key: impl Into<String>) -> Self {
        Self::status(Severity::Success, message_key)
    }

    pub fn warning(message_key: impl Into<String>) -> Self {
        Self::status(Severity::Warning, message_key)
    }

    pub fn error(message_key: impl Into<String>) -> Self {
        Self::status(Severity::Error, message_key)
    }

    /// Adds an argument for message interpolation. Ignored on delivered toasts.
    #[must_use]
    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        if let Body::Status { message_args, .. } = &mut self.body {
            message_args.push((key.into(), value.into()));
        }
        self
    }

    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn body(&self) -> &Body {
        &self.body
    }

    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    /// Lifecycle phase at `now`.
    #[must_use]
    pub fn phase_at(&self, now: Instant) -> Phase {
        let age = now.saturating_duration_since(self.created_at);
        if age < self.timing.enter_delay {
            return Phase::Entering;
        }
        let Some(display) = self.timing.display else {
            return Phase::Shown;
        };
        if age < display {
            return Phase::Shown;
        }
        let leaving = age - display;
        if leaving < self.timing.exit {
            Phase::Leaving {
                progress: leaving.as_secs_f32() / self.timing.exit.as_secs_f32(),
            }
        } else {
            Phase::Expired
        }
    }

    #[must_use]
    pub fn is_expired_at(&self, now: Instant) -> bool {
        self.phase_at(now) == Phase::Expired
    }
}
