mod chart;
mod memory_surface;

use crate::models::BudgetWarning;
use crate::views::Frame;

pub use chart::ChartHandle;
pub use memory_surface::MemorySurface;

/// User visible popup raised by the session.
#[derive(Debug, Clone, PartialEq)]
pub enum Notification {
    /// Total expense moved above the budget limit.
    BudgetExceeded(BudgetWarning),
    /// A user action was rejected and nothing changed.
    Rejected {
        reason: String
    }
}

/// Anything that draws the session: receives a frame after every committed event.
pub trait RenderSurface: Send + Sync + 'static {
    fn render(&self, frame: Frame);
    fn notify(&self, notification: Notification);
    /// Acquires the chart handle held for the lifetime of a session.
    fn attach_chart(&self) -> ChartHandle;
}
