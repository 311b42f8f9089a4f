//! # Fetch Tasks
//!
//! Page fetches run as tokio tasks so the event loop never blocks on a
//! source. Each fetch gets a generation number; the result travels back over
//! a std mpsc channel and the loop drops results whose generation is no
//! longer the one it is waiting for.
//!
//! A `FetchTask` owns the abort handle. Dropping it aborts the task, so
//! replacing the current task or quitting cancels whatever is in flight.

use std::sync::{Arc, mpsc};

use log::{info, warn};

use crate::core::catalog::Page;
use crate::core::source::{BookSource, FetchError};

/// Result of one fetch, as delivered to the event loop.
#[derive(Debug)]
pub struct FetchOutcome {
    pub generation: u64,
    pub page: usize,
    pub result: Result<Page, FetchError>,
}

pub struct FetchTask {
    generation: u64,
    page: usize,
    handle: tokio::task::AbortHandle,
}

impl FetchTask {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Abort the task. Nothing is sent for an aborted fetch.
    pub fn cancel(self) {
        // Drop does the work.
    }
}

impl Drop for FetchTask {
    fn drop(&mut self) {
        if !self.handle.is_finished() {
            info!(
                "Cancelling fetch of page {} (generation {})",
                self.page, self.generation
            );
            self.handle.abort();
        }
    }
}

/// Spawn a fetch of `page` on the current tokio runtime.
pub fn spawn_fetch(
    source: Arc<dyn BookSource>,
    page: usize,
    generation: u64,
    tx: mpsc::Sender<FetchOutcome>,
) -> FetchTask {
    info!(
        "Spawning fetch of page {} from {} (generation {})",
        page,
        source.name(),
        generation
    );
    let handle = tokio::spawn(async move {
        let result = source.fetch_page(page).await;
        if let Err(e) = &result {
            warn!("Fetch of page {} failed: {}", page, e);
        }
        if tx
            .send(FetchOutcome {
                generation,
                page,
                result,
            })
            .is_err()
        {
            warn!("Failed to deliver page {}: receiver dropped", page);
        }
    });
    FetchTask {
        generation,
        page,
        handle: handle.abort_handle(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::Catalog;
    use crate::core::source::MockSource;
    use std::time::Duration;

    #[tokio::test]
    async fn test_fetch_delivers_tagged_outcome() {
        let source: Arc<dyn BookSource> = Arc::new(MockSource::new(Catalog::default(), 10));
        let (tx, rx) = mpsc::channel();
        let task = spawn_fetch(source, 2, 7, tx);
        assert_eq!(task.page(), 2);
        assert_eq!(task.generation(), 7);

        let outcome = tokio::task::spawn_blocking(move || rx.recv_timeout(Duration::from_secs(5)))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(outcome.generation, 7);
        assert_eq!(outcome.page, 2);
        let page = outcome.result.unwrap();
        assert_eq!(page.books.first().map(|b| b.id), Some(11));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_fetch_sends_nothing() {
        let source: Arc<dyn BookSource> = Arc::new(
            MockSource::new(Catalog::default(), 10).with_latency(Duration::from_secs(60)),
        );
        let (tx, rx) = mpsc::channel();
        let task = spawn_fetch(source, 1, 1, tx);
        tokio::task::yield_now().await;
        task.cancel();

        tokio::time::sleep(Duration::from_secs(120)).await;
        // The aborted task dropped its sender without sending.
        assert!(matches!(rx.try_recv(), Err(mpsc::TryRecvError::Disconnected)));
    }
}
