use std::num::NonZeroU32;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use tracing::info;

/// Pacing policy applied before each match detail request.
#[async_trait]
pub trait Throttle: Send + Sync {
    /// Wait until the next request may be sent.
    async fn acquire(&self);
}

/// Lets `batch_size` requests through, then pauses for `pause` before the
/// next batch.
#[derive(Debug)]
pub struct BatchThrottle {
    batch_size: NonZeroU32,
    pause: Duration,
    sent: AtomicU32,
}

impl BatchThrottle {
    pub fn new(batch_size: NonZeroU32, pause: Duration) -> Self {
        Self {
            batch_size,
            pause,
            sent: AtomicU32::new(0),
        }
    }
}

#[async_trait]
impl Throttle for BatchThrottle {
    async fn acquire(&self) {
        let sent = self.sent.fetch_add(1, Ordering::Relaxed);

        if sent > 0 && sent % self.batch_size.get() == 0 {
            info!(
                sent,
                pause_secs = self.pause.as_secs(),
                "⏳ Batch of {} requests done, pausing",
                self.batch_size
            );
            tokio::time::sleep(self.pause).await;
        }
    }
}

/// No pacing at all.
#[derive(Debug, Default)]
pub struct Unthrottled;

#[async_trait]
impl Throttle for Unthrottled {
    async fn acquire(&self) {}
}
