use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use tokio::sync::watch;

use crate::surface::{ChartHandle, Notification, RenderSurface};
use crate::views::Frame;

/// Surface that keeps the latest frame and every notification in memory.
pub struct MemorySurface {
    latest: watch::Sender<Frame>,
    notifications: Mutex<Vec<Notification>>,
    frames_rendered: AtomicUsize,
    live_charts: Arc<AtomicUsize>
}

impl MemorySurface {
    pub fn new() -> Self {
        let (latest, _) = watch::channel(Frame::default());

        Self {
            latest,
            notifications: Mutex::new(Vec::new()),
            frames_rendered: AtomicUsize::new(0),
            live_charts: Arc::new(AtomicUsize::new(0))
        }
    }

    /// The most recently rendered frame.
    pub fn latest(&self) -> Frame {
        self.latest.borrow().clone()
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.notifications.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub fn frames_rendered(&self) -> usize {
        self.frames_rendered.load(Ordering::SeqCst)
    }

    pub fn live_charts(&self) -> usize {
        self.live_charts.load(Ordering::SeqCst)
    }
}

impl RenderSurface for MemorySurface {
    fn render(&self, frame: Frame) {
        self.latest.send_replace(frame);
        self.frames_rendered.fetch_add(1, Ordering::SeqCst);
    }

    fn notify(&self, notification: Notification) {
        self.notifications.lock().unwrap_or_else(PoisonError::into_inner).push(notification);
    }

    fn attach_chart(&self) -> ChartHandle {
        ChartHandle::acquire(self.live_charts.clone())
    }
}
