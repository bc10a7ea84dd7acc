//! Pluggable item source behind `load_rows`
//!
//! The demo has no backend: [`SimulatedSource`] only waits a fixed latency.
//! Tests plug in their own sources to control when a load resolves.

use std::fmt;
use std::ops::RangeInclusive;
use std::sync::Arc;
use std::time::Duration;

use futures_util::future::BoxFuture;

use super::load_tracker::LoadRequest;

/// Something that can make a range of items available
pub trait DataSource: Send + Sync + fmt::Debug {
    /// Resolves once every item in `items` is available
    fn load(&self, items: RangeInclusive<usize>) -> BoxFuture<'static, ()>;
}

/// Source that resolves after a fixed delay
#[derive(Debug, Clone, Copy)]
pub struct SimulatedSource {
    latency: Duration,
}

impl SimulatedSource {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }
}

impl Default for SimulatedSource {
    fn default() -> Self {
        Self::new(Duration::from_millis(500))
    }
}

impl DataSource for SimulatedSource {
    fn load(&self, items: RangeInclusive<usize>) -> BoxFuture<'static, ()> {
        let latency = self.latency;
        Box::pin(async move {
            tracing::trace!("Simulating fetch of items {:?} ({:?})", items, latency);
            if !latency.is_zero() {
                tokio::time::sleep(latency).await;
            }
        })
    }
}

/// Await `request` against `source` and hand it back for completion
pub async fn fetch(source: Arc<dyn DataSource>, request: LoadRequest) -> LoadRequest {
    source.load(request.items.clone()).await;
    request
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::load_tracker::{LoadTracker, Universe};

    #[tokio::test(start_paused = true)]
    async fn simulated_source_waits_latency() {
        let source = SimulatedSource::new(Duration::from_millis(500));
        let start = tokio::time::Instant::now();
        source.load(0..=9).await;
        assert!(start.elapsed() >= Duration::from_millis(500));
    }

    #[tokio::test(start_paused = true)]
    async fn fetch_returns_request_for_completion() {
        let mut tracker = LoadTracker::new(Universe::default());
        let source: Arc<dyn DataSource> = Arc::new(SimulatedSource::default());

        let request = tracker.begin(0, 4).unwrap();
        assert_eq!(tracker.loaded_count(), 0);

        let done = fetch(source, request.clone()).await;
        assert_eq!(done, request);
        tracker.complete(&done);
        assert_eq!(tracker.loaded_count(), 10);
    }

    #[tokio::test(start_paused = true)]
    async fn concurrent_fetches_union() {
        let mut tracker = LoadTracker::new(Universe::default());
        let source: Arc<dyn DataSource> = Arc::new(SimulatedSource::default());

        let a = tracker.begin(0, 9).unwrap();
        let b = tracker.begin(5, 14).unwrap();
        let (a, b) = tokio::join!(fetch(source.clone(), a), fetch(source, b));
        tracker.complete(&b);
        tracker.complete(&a);

        assert_eq!(tracker.loaded_count(), 30);
    }
}
