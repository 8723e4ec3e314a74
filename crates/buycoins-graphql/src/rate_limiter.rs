//! Thread-safe rate limiter for Buycoins requests
//!
//! Wraps a [`SlidingWindow`] in a mutex so it can be shared across tasks.
//! Every dispatch awaits [`RateLimiter::acquire`] first; when the window is
//! full the task sleeps until a slot frees instead of failing.

use std::sync::Arc;
use std::time::Duration;

use buycoins_types::{RateLimitConfig, RateLimitResult, SlidingWindow};
use parking_lot::Mutex;
use tokio::time::Instant;
use tracing::{debug, instrument};

/// Thread-safe rate limiter for managing API rate limits
#[derive(Debug)]
pub struct RateLimiter {
    /// Rate limit configuration
    config: RateLimitConfig,
    /// Admission log
    window: Mutex<SlidingWindow>,
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new(RateLimitConfig::buycoins_defaults())
    }
}

impl RateLimiter {
    /// Create a new rate limiter with the given configuration
    pub fn new(config: RateLimitConfig) -> Self {
        Self {
            config,
            window: Mutex::new(config.create_window()),
        }
    }

    /// Create a rate limiter with Buycoins' default limits
    pub fn buycoins_defaults() -> Self {
        Self::new(RateLimitConfig::buycoins_defaults())
    }

    /// Create a permissive rate limiter (for testing)
    pub fn permissive() -> Self {
        Self::new(RateLimitConfig::permissive())
    }

    /// Try to admit one call without waiting
    ///
    /// Returns `RateLimitResult::Allowed` if the call was recorded,
    /// or `RateLimitResult::Limited` with the wait duration.
    pub fn try_acquire(&self) -> RateLimitResult {
        let now = Instant::now().into_std();
        self.window.lock().try_acquire_at(now).into()
    }

    /// Wait until a call can proceed, then record it
    ///
    /// Returns the time spent waiting. The lock is released while sleeping,
    /// so concurrent callers queue on the window rather than on the mutex.
    #[instrument(skip(self), level = "debug")]
    pub async fn acquire(&self) -> Duration {
        let started = Instant::now();
        loop {
            match self.try_acquire() {
                RateLimitResult::Allowed => return started.elapsed(),
                RateLimitResult::Limited { wait } => {
                    debug!(wait_ms = wait.as_millis() as u64, "Rate limit reached, waiting");
                    tokio::time::sleep(wait).await;
                }
            }
        }
    }

    /// Calls that would be admitted right now
    pub fn available(&self) -> u32 {
        let now = Instant::now().into_std();
        self.window.lock().available_at(now)
    }

    /// Forget all recorded calls
    pub fn reset(&self) {
        self.window.lock().reset();
    }

    /// Get the configuration
    pub fn config(&self) -> RateLimitConfig {
        self.config
    }

    /// Window utilization as a fraction (0.0 to 1.0)
    pub fn utilization(&self) -> f64 {
        1.0 - (self.available() as f64 / self.config.max_calls.max(1) as f64)
    }
}

/// Shared rate limiter that can be cloned and used across tasks
pub type SharedRateLimiter = Arc<RateLimiter>;

/// Create a shared rate limiter with default Buycoins limits
pub fn shared_rate_limiter() -> SharedRateLimiter {
    Arc::new(RateLimiter::buycoins_defaults())
}

/// Create a shared rate limiter with custom configuration
pub fn shared_rate_limiter_with_config(config: RateLimitConfig) -> SharedRateLimiter {
    Arc::new(RateLimiter::new(config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use buycoins_types::{MAX_CALLS, WINDOW_SECONDS};

    #[tokio::test(start_paused = true)]
    async fn test_burst_within_limit_does_not_wait() {
        let limiter = RateLimiter::buycoins_defaults();
        let start = Instant::now();

        for _ in 0..MAX_CALLS {
            assert_eq!(limiter.acquire().await, Duration::ZERO);
        }
        assert_eq!(start.elapsed(), Duration::ZERO);
        assert_eq!(limiter.available(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_call_over_limit_waits_for_window() {
        let limiter = RateLimiter::buycoins_defaults();
        let start = Instant::now();

        for _ in 0..MAX_CALLS {
            limiter.acquire().await;
        }

        let waited = limiter.acquire().await;
        assert!(waited >= Duration::from_secs(WINDOW_SECONDS));
        assert!(start.elapsed() >= Duration::from_secs(WINDOW_SECONDS));
    }

    #[tokio::test(start_paused = true)]
    async fn test_slot_frees_when_oldest_call_expires() {
        let limiter = RateLimiter::new(RateLimitConfig::new(2, Duration::from_secs(10)));

        limiter.acquire().await;
        tokio::time::advance(Duration::from_secs(4)).await;
        limiter.acquire().await;

        // Oldest call leaves the window 6 seconds from now
        let waited = limiter.acquire().await;
        assert!(waited >= Duration::from_secs(6));
        assert!(waited < Duration::from_secs(7));
    }

    #[tokio::test(start_paused = true)]
    async fn test_try_acquire_reports_wait() {
        let limiter = RateLimiter::new(RateLimitConfig::new(1, Duration::from_secs(60)));

        assert!(limiter.try_acquire().is_allowed());
        let result = limiter.try_acquire();
        assert!(!result.is_allowed());
        assert_eq!(result.wait_duration(), Some(Duration::from_secs(60)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_concurrent_callers_share_window() {
        let limiter = Arc::new(RateLimiter::new(RateLimitConfig::new(
            5,
            Duration::from_secs(60),
        )));
        let start = Instant::now();

        let handles: Vec<_> = (0..10)
            .map(|_| {
                let limiter = Arc::clone(&limiter);
                tokio::spawn(async move {
                    limiter.acquire().await;
                    Instant::now()
                })
            })
            .collect();

        let mut immediate = 0;
        for handle in handles {
            let admitted_at = handle.await.unwrap();
            if admitted_at.duration_since(start) < Duration::from_secs(60) {
                immediate += 1;
            }
        }
        assert_eq!(immediate, 5);
    }

    #[test]
    fn test_reset_and_utilization() {
        let limiter = RateLimiter::new(RateLimitConfig::new(4, Duration::from_secs(60)));
        assert!(limiter.utilization() < 0.01);

        limiter.try_acquire();
        limiter.try_acquire();
        let util = limiter.utilization();
        assert!(util > 0.4 && util < 0.6);

        limiter.reset();
        assert_eq!(limiter.available(), 4);
    }

    #[test]
    fn test_shared_rate_limiter() {
        let limiter = shared_rate_limiter();
        let limiter2 = Arc::clone(&limiter);

        limiter.try_acquire();
        assert_eq!(limiter.available(), limiter2.available());
        assert_eq!(limiter.config().max_calls, 300);
    }
}
