use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use tracing::{Instrument, info_span};

/// Simple counter used to log the amount of OpenDota API requests performed.
#[derive(Debug)]
pub struct RequestMetrics {
    start: Instant,
    count: AtomicU64,
    name: &'static str,
}

impl RequestMetrics {
    pub fn new(name: &'static str) -> Arc<Self> {
        Arc::new(Self {
            start: Instant::now(),
            count: AtomicU64::new(0),
            name,
        })
    }

    pub fn inc(&self) {
        self.count.fetch_add(1, Ordering::Relaxed);
    }

    pub fn total(&self) -> u64 {
        self.count.load(Ordering::Relaxed)
    }

    /// Average requests per minute since creation.
    pub fn per_minute(&self) -> f64 {
        let elapsed_min = self.start.elapsed().as_secs_f64() / 60.0;
        if elapsed_min > 0.0 {
            self.total() as f64 / elapsed_min
        } else {
            0.0
        }
    }

    pub fn log_summary(&self) {
        tracing::info!(
            client = self.name,
            "📊 {} requests executed (avg {:.2} req/min)",
            self.total(),
            self.per_minute()
        );
    }

    pub async fn log_loop(self: Arc<Self>) {
        let mut interval = tokio::time::interval(Duration::from_secs(60));
        // first tick completes immediately
        interval.tick().await;
        loop {
            let span = info_span!("📊 ", client = self.name);
            async {
                interval.tick().await;
                tracing::info!(
                    "{} requests executed (avg {:.2} req/min)",
                    self.total(),
                    self.per_minute()
                );
            }
            .instrument(span)
            .await
        }
    }
}
