use std::time::Duration;

use crate::macros::id;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Error,
}

impl Severity {
    /// Panel background color used by the presentation layer.
    pub fn color(self) -> &'static str {
        match self {
            Self::Info => "#3b82f6",
            Self::Success => "#10b981",
            Self::Error => "#ef4444",
        }
    }
}

/// A transient, auto-dismissing message panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub severity: Severity,
    pub duration: Duration,
}

impl Toast {
    pub const DEFAULT_DURATION: Duration = Duration::from_secs(5);

    pub fn new(message: impl Into<String>, severity: Severity) -> Self {
        Self {
            message: message.into(),
            severity,
            duration: Self::DEFAULT_DURATION,
        }
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }
}

id!(ToastId);
