//! Shared fetch-state machinery
//!
//! Every dashboard view needs the same thing: issue an async request,
//! track a loading flag, and end up with either data or a visible
//! failure. `Fetcher` is that wrapper, used by all views instead of
//! per-view copies of the sequence.
//!
//! Requests are tagged with a monotonically increasing sequence number.
//! A completion whose tag is no longer current is discarded, so a rapid
//! dataset switch can never overwrite newer data with a stale response.

use crate::error::CoreError;
use parking_lot::{RwLock, RwLockReadGuard};
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::debug;

/// Lifecycle of one view's data
#[derive(Debug, Clone, Default, PartialEq)]
pub enum FetchState<T> {
    /// No request issued yet
    #[default]
    Idle,
    /// A request is in flight
    Loading,
    /// Latest request resolved with data
    Ready(T),
    /// Latest request failed; views render this instead of hiding it
    Failed(String),
}

impl<T> FetchState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            FetchState::Ready(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FetchState::Failed(msg) => Some(msg),
            _ => None,
        }
    }
}

/// One view's handle to its in-flight and resolved data
pub struct Fetcher<T> {
    slot: Arc<RwLock<FetchState<T>>>,
    seq: Arc<AtomicU64>,
    label: &'static str,
}

impl<T> Clone for Fetcher<T> {
    fn clone(&self) -> Self {
        Self {
            slot: Arc::clone(&self.slot),
            seq: Arc::clone(&self.seq),
            label: self.label,
        }
    }
}

impl<T: Send + Sync + 'static> Fetcher<T> {
    /// Create an idle fetcher; the label only appears in traces
    pub fn new(label: &'static str) -> Self {
        Self {
            slot: Arc::new(RwLock::new(FetchState::Idle)),
            seq: Arc::new(AtomicU64::new(0)),
            label,
        }
    }

    /// Read the current state (cheap, non-blocking in practice)
    pub fn state(&self) -> RwLockReadGuard<'_, FetchState<T>> {
        self.slot.read()
    }

    pub fn is_loading(&self) -> bool {
        self.state().is_loading()
    }

    /// Issue a new request, superseding any in-flight one
    ///
    /// The previous request keeps running (no cancellation) but its
    /// result is compare-and-discarded on arrival.
    pub fn load<F>(&self, fut: F)
    where
        F: Future<Output = Result<T, CoreError>> + Send + 'static,
    {
        let ticket = self.seq.fetch_add(1, Ordering::SeqCst) + 1;
        *self.slot.write() = FetchState::Loading;

        let slot = Arc::clone(&self.slot);
        let seq = Arc::clone(&self.seq);
        let label = self.label;

        tokio::spawn(async move {
            let result = fut.await;

            let mut guard = slot.write();
            // Re-check under the lock: a newer load() may have raced in
            if seq.load(Ordering::SeqCst) != ticket {
                debug!(label, ticket, "Discarding stale response");
                return;
            }

            *guard = match result {
                Ok(data) => FetchState::Ready(data),
                Err(e) => {
                    debug!(label, ticket, error = %e, "Fetch failed");
                    FetchState::Failed(e.to_string())
                }
            };
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test(start_paused = true)]
    async fn test_fetcher_resolves() {
        let fetcher: Fetcher<u32> = Fetcher::new("test");
        assert_eq!(*fetcher.state(), FetchState::Idle);

        fetcher.load(async { Ok(7) });
        assert!(fetcher.is_loading());

        tokio::time::sleep(Duration::from_millis(10)).await;
        assert_eq!(fetcher.state().data(), Some(&7));
    }

    #[tokio::test(start_paused = true)]
    async fn test_fetcher_failure_is_surfaced() {
        let fetcher: Fetcher<u32> = Fetcher::new("test");
        fetcher.load(async { Err(CoreError::fetch_failed("sales", "boom")) });

        tokio::time::sleep(Duration::from_millis(10)).await;
        let state = fetcher.state();
        assert!(state.error().unwrap().contains("boom"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_stale_response_is_discarded() {
        let fetcher: Fetcher<&'static str> = Fetcher::new("test");

        // First request is slow, second is fast: the slow one resolves
        // last but must not overwrite the newer result.
        fetcher.load(async {
            tokio::time::sleep(Duration::from_millis(500)).await;
            Ok("first")
        });
        fetcher.load(async {
            tokio::time::sleep(Duration::from_millis(100)).await;
            Ok("second")
        });

        tokio::time::sleep(Duration::from_secs(1)).await;
        assert_eq!(fetcher.state().data(), Some(&"second"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_reload_replaces_previous_data() {
        let fetcher: Fetcher<u32> = Fetcher::new("test");

        fetcher.load(async { Ok(1) });
        tokio::time::sleep(Duration::from_millis(10)).await;
        assert_eq!(fetcher.state().data(), Some(&1));

        fetcher.load(async { Ok(2) });
        assert!(fetcher.is_loading());
        tokio::time::sleep(Duration::from_millis(10)).await;
        assert_eq!(fetcher.state().data(), Some(&2));
    }
}
