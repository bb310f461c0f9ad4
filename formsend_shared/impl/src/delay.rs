use std::time::Duration;

use formsend_shared_contracts::delay::DelayService;

#[derive(Debug, Clone, Copy, Default)]
pub struct DelayServiceImpl;

impl DelayService for DelayServiceImpl {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}
