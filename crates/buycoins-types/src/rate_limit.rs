//! Client-side rate limiting for the Buycoins API
//!
//! Buycoins throttles clients that exceed 300 calls per minute. This module
//! provides the sliding-window bookkeeping used to stay under that limit.
//! It is clock-agnostic: callers pass the current [`Instant`], which keeps it
//! deterministic under test.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Maximum dispatches per window
pub const MAX_CALLS: u32 = 300;

/// Window length in seconds
pub const WINDOW_SECONDS: u64 = 60;

/// Sliding-window rate limiter
///
/// Records the instant of every admitted call and admits a new one only while
/// fewer than `max_calls` fall inside the trailing `window`.
#[derive(Debug, Clone)]
pub struct SlidingWindow {
    /// Maximum calls inside one window
    max_calls: u32,
    /// Window length
    window: Duration,
    /// Admission instants, oldest first
    calls: VecDeque<Instant>,
}

impl SlidingWindow {
    /// Create a new sliding window
    ///
    /// # Arguments
    /// * `max_calls` - Calls admitted per window (at least 1)
    /// * `window` - Length of the trailing window
    pub fn new(max_calls: u32, window: Duration) -> Self {
        let max_calls = max_calls.max(1);
        Self {
            max_calls,
            window,
            calls: VecDeque::new(),
        }
    }

    /// Try to admit a call at `now`
    ///
    /// Returns `Ok(())` and records the call if a slot is free, or
    /// `Err(Duration)` with the time until the oldest recorded call leaves
    /// the window. The wait never exceeds one window length.
    pub fn try_acquire_at(&mut self, now: Instant) -> Result<(), Duration> {
        self.evict(now);

        if (self.calls.len() as u32) < self.max_calls {
            self.calls.push_back(now);
            return Ok(());
        }

        let oldest = self.calls.front().copied().unwrap_or(now);
        let wait = oldest
            .checked_add(self.window)
            .map_or(self.window, |frees_at| frees_at.saturating_duration_since(now));
        Err(wait.min(self.window))
    }

    /// Number of calls that would be admitted at `now`
    pub fn available_at(&mut self, now: Instant) -> u32 {
        self.evict(now);
        self.max_calls - self.calls.len() as u32
    }

    /// Number of calls recorded inside the window as of the last check
    pub fn in_flight(&self) -> u32 {
        self.calls.len() as u32
    }

    /// Get the per-window call limit
    pub fn max_calls(&self) -> u32 {
        self.max_calls
    }

    /// Get the window length
    pub fn window(&self) -> Duration {
        self.window
    }

    /// Forget all recorded calls
    pub fn reset(&mut self) {
        self.calls.clear();
    }

    /// Drop calls that have left the window
    fn evict(&mut self, now: Instant) {
        // A clock reading earlier than a recorded call counts as zero elapsed
        while let Some(&oldest) = self.calls.front() {
            if now.saturating_duration_since(oldest) >= self.window {
                self.calls.pop_front();
            } else {
                break;
            }
        }
    }
}

/// Rate limit configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitConfig {
    /// Calls admitted per window
    pub max_calls: u32,
    /// Window length
    pub window: Duration,
}

impl RateLimitConfig {
    /// Create a new rate limit configuration
    pub const fn new(max_calls: u32, window: Duration) -> Self {
        Self { max_calls, window }
    }

    /// Buycoins' documented limit: 300 calls per minute
    pub const fn buycoins_defaults() -> Self {
        Self::new(MAX_CALLS, Duration::from_secs(WINDOW_SECONDS))
    }

    /// Create a very permissive configuration (for testing)
    pub const fn permissive() -> Self {
        Self::new(1_000_000, Duration::from_secs(1))
    }

    /// Create a sliding window from this configuration
    pub fn create_window(&self) -> SlidingWindow {
        SlidingWindow::new(self.max_calls, self.window)
    }
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self::buycoins_defaults()
    }
}

/// Result of a rate limit check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateLimitResult {
    /// Request is allowed
    Allowed,
    /// Request is rate limited, wait the specified duration
    Limited { wait: Duration },
}

impl RateLimitResult {
    /// Check if the request is allowed
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed)
    }

    /// Get the wait duration if rate limited
    pub fn wait_duration(&self) -> Option<Duration> {
        match self {
            Self::Allowed => None,
            Self::Limited { wait } => Some(*wait),
        }
    }
}

impl From<Result<(), Duration>> for RateLimitResult {
    fn from(result: Result<(), Duration>) -> Self {
        match result {
            Ok(()) => Self::Allowed,
            Err(wait) => Self::Limited { wait },
        }
    }
}
