use crate::actors::SessionActor;
use crate::engine::{EventRecord, Session, SessionConfig, UserEvent};
use crate::surface::RenderSurface;
use csv::{ReaderBuilder, Trim};
use std::fs::File;
use std::io::BufReader;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::{spawn_blocking, JoinHandle};
use tracing::error;

/// Replays a recorded session file through a [`SessionActor`].
pub struct SessionEngine<S: RenderSurface> {
    surface: Arc<S>,
    config: SessionConfig,
    backpressure: usize
}

impl<S: RenderSurface> SessionEngine<S> {
    /// Creates a new engine that renders into `surface`.
    pub fn new(surface: Arc<S>) -> Self {
        Self {
            surface,
            config: SessionConfig::default(),
            backpressure: 256
        }
    }

    pub fn with_config(mut self, config: SessionConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_backpressure(mut self, backpressure: usize) -> Self {
        self.backpressure = backpressure.max(1);
        self
    }

    /// Reads every event in the CSV at `path`, applies it, and returns the final session.
    pub async fn run(&self, path: &str) -> anyhow::Result<Session> {
        let (sender, receiver) = mpsc::channel::<UserEvent>(self.backpressure);
        let csv_handle = self.spawn_csv_reader(path.to_string(), sender);
        let session = self.process_events(receiver).await;

        if let Err(error) = csv_handle.await {
            error!("CSV ingestion failed: {error}");
        }

        session
    }

    fn spawn_csv_reader(&self, path: String, sender: mpsc::Sender<UserEvent>) -> JoinHandle<()> {
        spawn_blocking(move || {
            let file = match File::open(&path) {
                Ok(file) => file,
                Err(error) => {
                    error!("Error opening CSV at path: {path} | {error}");
                    return;
                }
            };

            let mut reader = ReaderBuilder::new()
                .trim(Trim::All)
                .flexible(true)
                .from_reader(BufReader::new(file));

            for result in reader.deserialize::<EventRecord>() {
                let record = match result {
                    Ok(record) => record,
                    Err(error) => {
                        error!("CSV deserialization error: {error}");
                        continue;
                    }
                };

                let events = match record.into_events() {
                    Ok(events) => events,
                    Err(error) => {
                        error!("Skipping CSV event: {error}");
                        continue;
                    }
                };

                for event in events {
                    if sender.blocking_send(event).is_err() {
                        return;
                    }
                }
            }
        })
    }

    async fn process_events(&self, mut receiver: mpsc::Receiver<UserEvent>) -> anyhow::Result<Session> {
        let actor = SessionActor::new(Session::new(self.config), self.surface.clone(), self.backpressure);

        while let Some(event) = receiver.recv().await {
            if !actor.accept(event).await {
                error!("Session actor could not accept event");
            }
        }

        Ok(actor.despawn().await?)
    }
}
