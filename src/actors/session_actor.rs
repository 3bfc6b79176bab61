use std::sync::Arc;

use tokio::spawn;
use tokio::sync::mpsc;
use tokio::task::{JoinError, JoinHandle};
use tracing::debug;

use crate::engine::{Session, UserEvent};
use crate::surface::RenderSurface;

/// Single writer event loop that owns a [`Session`].
///
/// Events are applied strictly one after another, and the surface only ever
/// sees frames computed after an event has fully committed.
pub struct SessionActor {
    sender: mpsc::Sender<UserEvent>,
    handle: JoinHandle<Session>
}

impl SessionActor {
    /// Spawns the event loop and renders the initial frame.
    ///
    /// At most `capacity` events wait in the queue; [`SessionActor::accept`]
    /// waits for room beyond that.
    pub fn new<S: RenderSurface>(mut session: Session, surface: Arc<S>, capacity: usize) -> Self {
        let (sender, mut receiver) = mpsc::channel::<UserEvent>(capacity.max(1));

        let handle = spawn(async move {
            let _chart = surface.attach_chart();
            surface.render(session.frame());

            while let Some(event) = receiver.recv().await {
                debug!("Applying event {event:?}");

                let update = session.apply(event);

                for notification in update.notifications {
                    surface.notify(notification);
                }

                surface.render(update.frame);
            }

            session
        });

        Self { sender, handle }
    }

    /// Queues an event, returning `false` if the loop is no longer running.
    pub async fn accept(&self, event: UserEvent) -> bool {
        self.sender.send(event).await.is_ok()
    }

    /// Closes the queue, waits for pending events and hands back the final session.
    pub async fn despawn(self) -> Result<Session, JoinError> {
        drop(self.sender);
        self.handle.await
    }
}
