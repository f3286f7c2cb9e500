//! Fixed-window rate limiting for geolocation lookups
//!
//! The service allows 45 requests/minute. Rather than spacing every request,
//! the driver pauses once per window: before the record at each non-zero
//! multiple of the batch size (40, 80, ...), it sleeps for the full window.
//! The check is made before the lookup at that index, not after a count of
//! completed lookups, so records without a host never trigger a pause.

use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

/// Decides at which record indices a pause is taken
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PauseSchedule {
    batch_size: usize,
    pause: Duration,
}

impl PauseSchedule {
    /// `batch_size` must be non-zero (checked by [`crate::EnrichConfig::validate`])
    pub fn new(batch_size: usize, pause: Duration) -> Self {
        Self { batch_size, pause }
    }

    /// True for every index that is a non-zero multiple of the batch size
    pub fn should_pause(&self, index: usize) -> bool {
        self.batch_size > 0 && index > 0 && index % self.batch_size == 0
    }

    pub fn pause(&self) -> Duration {
        self.pause
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }
}

/// Suspends the run during a rate-limit pause
#[async_trait]
pub trait Sleeper {
    async fn sleep(&self, duration: Duration);
}

/// Production sleeper backed by the tokio timer
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioSleeper;

#[async_trait]
impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        debug!("Rate limiting: sleeping {:?}", duration);
        tokio::time::sleep(duration).await;
    }
}
