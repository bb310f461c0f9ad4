use std::{future::Future, time::Duration};

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait DelayService: Send + Sync + 'static {
    /// Completes after at least `duration` has elapsed.
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> + Send;
}

#[cfg(feature = "mock")]
impl MockDelayService {
    pub fn with_sleep(mut self, duration: Duration) -> Self {
        self.expect_sleep()
            .once()
            .with(mockall::predicate::eq(duration))
            .return_once(|_| Box::pin(std::future::ready(())));
        self
    }
}
