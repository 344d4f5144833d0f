// src/aggregate/pacer.rs
// =============================================================================
// Rate limiting between page requests.
//
// The search API allows roughly one request per second on the basic plan,
// so the aggregator waits between pages. The wait is a plain fixed delay:
// no token bucket, no backoff. It sits behind a trait so tests can use a
// zero delay and run instantly.
// =============================================================================

use async_trait::async_trait;
use std::time::Duration;

/// Default pause between two page requests.
pub const DEFAULT_PAGE_DELAY: Duration = Duration::from_secs(1);

/// Decides how long to wait before the next page request.
#[async_trait]
pub trait Pacer: Send + Sync {
    async fn pause(&self);
}

// Sleeps for the same amount of time before every page after the first
#[derive(Debug, Clone, Copy)]
pub struct FixedDelay {
    delay: Duration,
}

impl FixedDelay {
    pub fn new(delay: Duration) -> Self {
        FixedDelay { delay }
    }
}

#[async_trait]
impl Pacer for FixedDelay {
    async fn pause(&self) {
        if self.delay.is_zero() {
            return;
        }
        tokio::time::sleep(self.delay).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[tokio::test]
    async fn test_fixed_delay_waits() {
        let pacer = FixedDelay::new(Duration::from_millis(30));
        let started = Instant::now();
        pacer.pause().await;
        assert!(started.elapsed() >= Duration::from_millis(30));
    }

    #[tokio::test]
    async fn test_zero_delay_returns_immediately() {
        let pacer = FixedDelay::new(Duration::ZERO);
        let started = Instant::now();
        pacer.pause().await;
        assert!(started.elapsed() < Duration::from_millis(500));
    }

    #[test]
    fn test_default_delay_is_one_second() {
        assert_eq!(DEFAULT_PAGE_DELAY, Duration::from_secs(1));
    }
}
