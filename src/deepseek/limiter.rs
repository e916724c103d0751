//! Fixed-interval request pacing.
//!
//! One shared slot serializes the post-call delay across concurrent callers,
//! so N parallel requests finish at least `delay` apart instead of all
//! sleeping at once. Not adaptive: no backoff, no burst credit.

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

#[derive(Debug, Clone)]
pub struct RateLimiter {
    delay: Duration,
    slot: Arc<Mutex<()>>,
}

impl RateLimiter {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            slot: Arc::new(Mutex::new(())),
        }
    }

    /// Hold the shared slot for the configured delay. Called after every
    /// completed API call, streamed or not.
    pub async fn throttle(&self) {
        if self.delay.is_zero() {
            return;
        }
        let _guard = self.slot.lock().await;
        tokio::time::sleep(self.delay).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn concurrent_throttles_serialize() {
        let limiter = RateLimiter::new(Duration::from_millis(100));
        let start = Instant::now();

        let (a, b) = (limiter.clone(), limiter.clone());
        let first = tokio::spawn(async move { a.throttle().await });
        let second = tokio::spawn(async move { b.throttle().await });
        first.await.unwrap();
        second.await.unwrap();

        // Two callers hold the slot back to back: 200ms total, not 100ms.
        assert!(start.elapsed() >= Duration::from_millis(200));
    }

    #[tokio::test(start_paused = true)]
    async fn zero_delay_is_a_noop() {
        let limiter = RateLimiter::new(Duration::ZERO);
        let start = Instant::now();
        limiter.throttle().await;
        assert_eq!(start.elapsed(), Duration::ZERO);
    }
}
