mod session_actor;

pub use session_actor::SessionActor;
