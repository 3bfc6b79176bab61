use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use tracing::debug;

/// Scoped handle on a chart drawn by a render surface.
///
/// The handle counts itself into the surface's live chart counter and is
/// released when dropped, whichever way the owning session ends.
#[derive(Debug)]
pub struct ChartHandle {
    live: Arc<AtomicUsize>
}

impl ChartHandle {
    pub fn acquire(live: Arc<AtomicUsize>) -> Self {
        let count = live.fetch_add(1, Ordering::SeqCst) + 1;
        debug!("Chart handle acquired, [{count}] live");

        Self { live }
    }
}

impl Drop for ChartHandle {
    fn drop(&mut self) {
        let count = self.live.fetch_sub(1, Ordering::SeqCst) - 1;
        debug!("Chart handle released, [{count}] live");
    }
}
