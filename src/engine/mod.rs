mod events;
mod session;
mod session_engine;

pub use events::{EventRecord, UserEvent};
pub use session::{Session, SessionConfig};
pub use session_engine::SessionEngine;
