use std::time::Duration;

use formsend_models::notification::Severity;

/// Fire-and-forget toast notifications. Each call produces an independent,
/// independently timed panel; overlapping panels are acceptable.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait NotificationService: Send + Sync + 'static {
    /// Shows a toast for the service's default display duration.
    fn show(&self, message: String, severity: Severity);

    fn show_for(&self, message: String, severity: Severity, duration: Duration);
}

#[cfg(feature = "mock")]
impl MockNotificationService {
    pub fn with_show(mut self, message: &str, severity: Severity) -> Self {
        self.expect_show()
            .once()
            .with(
                mockall::predicate::eq(message.to_owned()),
                mockall::predicate::eq(severity),
            )
            .return_const(());
        self
    }

    pub fn with_show_for(mut self, message: &str, severity: Severity, duration: Duration) -> Self {
        self.expect_show_for()
            .once()
            .with(
                mockall::predicate::eq(message.to_owned()),
                mockall::predicate::eq(severity),
                mockall::predicate::eq(duration),
            )
            .return_const(());
        self
    }
}
