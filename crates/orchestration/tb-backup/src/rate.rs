//! Request pacing for backup dispatch.
//!
//! The dispatcher calls [`RateLimiter::acquire`] before every backup request.
//! [`IntervalRateLimiter`] grants one permit per fixed interval and never bursts:
//! a slow request pushes later permits back instead of letting them catch up.

use std::time::Duration;

use async_trait::async_trait;
use tb_error::{Result, TbError};
use tokio::time::{Instant, Interval, MissedTickBehavior, interval_at};

/// Documented account quota is 50 backup requests/second.
pub const MIN_INTERVAL: Duration = Duration::from_millis(20);

/// 25 requests/second, leaving headroom under the quota for jitter.
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(40);

/// Gate awaited before each outgoing request.
#[async_trait]
pub trait RateLimiter: Send {
    /// Wait until the next request may be issued.
    async fn acquire(&mut self);
}

/// Fixed-interval [`RateLimiter`] backed by a tokio [`Interval`].
///
/// The first permit is granted one full interval after construction, so
/// consecutive permits are always at least one interval apart.
#[derive(Debug)]
pub struct IntervalRateLimiter {
    ticker: Interval,
    period: Duration,
}

impl IntervalRateLimiter {
    /// Create a limiter granting one permit every `period`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn new(period: Duration) -> Result<Self> {
        if period < MIN_INTERVAL {
            return Err(TbError::Config(format!(
                "rate limit interval {}ms is below {}ms",
                period.as_millis(),
                MIN_INTERVAL.as_millis()
            )));
        }

        let mut ticker = interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        Ok(Self { ticker, period })
    }

    /// Spacing between permits.
    pub fn period(&self) -> Duration {
        self.period
    }
}

#[async_trait]
impl RateLimiter for IntervalRateLimiter {
    async fn acquire(&mut self) {
        self.ticker.tick().await;
    }
}
