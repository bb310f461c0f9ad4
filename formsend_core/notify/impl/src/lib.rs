use std::{sync::Arc, time::Duration};

use formsend_core_notify_contracts::NotificationService;
use formsend_models::notification::{Severity, Toast, ToastId};
use formsend_shared_contracts::delay::DelayService;
use formsend_ui_contracts::FormPage;

/// How long the slide-out animation takes before the panel can be removed
/// from the page.
pub const EXIT_ANIMATION: Duration = Duration::from_millis(300);

#[derive(Debug)]
pub struct NotificationServiceImpl<Page, Delay> {
    page: Arc<Page>,
    delay: Arc<Delay>,
    config: NotificationServiceConfig,
}

#[derive(Debug, Clone)]
pub struct NotificationServiceConfig {
    /// Display duration used by [`NotificationService::show`].
    pub default_duration: Duration,
}

impl Default for NotificationServiceConfig {
    fn default() -> Self {
        Self {
            default_duration: Toast::DEFAULT_DURATION,
        }
    }
}

impl<Page, Delay> NotificationServiceImpl<Page, Delay> {
    pub fn new(page: Arc<Page>, delay: Arc<Delay>, config: NotificationServiceConfig) -> Self {
        Self {
            page,
            delay,
            config,
        }
    }
}

impl<P, D> NotificationService for NotificationServiceImpl<P, D>
where
    P: FormPage,
    D: DelayService,
{
    fn show(&self, message: String, severity: Severity) {
        self.show_for(message, severity, self.config.default_duration);
    }

    fn show_for(&self, message: String, severity: Severity, duration: Duration) {
        tracing::debug!(?severity, message, "show toast");
        let id = self
            .page
            .insert_toast(Toast::new(message, severity).with_duration(duration));
        tokio::spawn(dismiss_after(
            Arc::clone(&self.page),
            Arc::clone(&self.delay),
            id,
            duration,
        ));
    }
}

/// Panel lifecycle after insertion: wait out the display duration, play the
/// exit animation, then drop the panel from the page.
async fn dismiss_after<P, D>(page: Arc<P>, delay: Arc<D>, id: ToastId, duration: Duration)
where
    P: FormPage,
    D: DelayService,
{
    delay.sleep(duration).await;
    page.begin_toast_exit(id);
    delay.sleep(EXIT_ANIMATION).await;
    page.remove_toast(id);
}
