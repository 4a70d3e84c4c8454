use anyhow::Result;
use futures::channel::oneshot;
use std::path::{Path, PathBuf};

use super::gltf::{load_model, ModelScene};

/// Outcome of polling a pending load
#[derive(Debug)]
pub enum LoadPoll {
    /// Still loading
    Pending,
    /// Finished this poll; the model is handed over exactly once
    Ready(ModelScene),
    /// Already delivered or failed; nothing more will arrive
    Settled,
}

enum State {
    Loading(oneshot::Receiver<Result<ModelScene>>),
    Done,
}

/// One-shot background model load, polled from the frame loop
///
/// A failed load is logged once and never retried.
pub struct PendingModel {
    path: PathBuf,
    state: State,
}

impl PendingModel {
    /// Start loading `path` on a background thread
    pub fn spawn(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        Self::spawn_with(path, |path| load_model(path))
    }

    /// Start a load using a custom loader function
    pub fn spawn_with<F>(path: PathBuf, loader: F) -> Self
    where
        F: FnOnce(&Path) -> Result<ModelScene> + Send + 'static,
    {
        let (sender, receiver) = oneshot::channel();
        let thread_path = path.clone();

        let spawned = std::thread::Builder::new()
            .name("model-loader".to_string())
            .spawn(move || {
                let result = loader(&thread_path);
                // Receiver gone means the app already shut down
                let _ = sender.send(result);
            });

        let state = match spawned {
            Ok(_) => State::Loading(receiver),
            Err(e) => {
                log::error!("Error loading model {:?}: could not start loader thread: {}", path, e);
                State::Done
            }
        };

        Self { path, state }
    }

    pub fn is_settled(&self) -> bool {
        matches!(self.state, State::Done)
    }

    /// Check for a finished load without blocking
    pub fn poll(&mut self) -> LoadPoll {
        let State::Loading(receiver) = &mut self.state else {
            return LoadPoll::Settled;
        };

        let outcome = match receiver.try_recv() {
            Ok(None) => return LoadPoll::Pending,
            Ok(Some(result)) => result,
            Err(oneshot::Canceled) => Err(anyhow::anyhow!("loader thread exited without a result")),
        };

        self.state = State::Done;
        self.deliver(outcome)
    }

    /// Block until the load settles
    pub fn wait(&mut self) -> LoadPoll {
        let State::Loading(receiver) = &mut self.state else {
            return LoadPoll::Settled;
        };

        let outcome = match futures::executor::block_on(receiver) {
            Ok(result) => result,
            Err(oneshot::Canceled) => Err(anyhow::anyhow!("loader thread exited without a result")),
        };

        self.state = State::Done;
        self.deliver(outcome)
    }

    fn deliver(&self, outcome: Result<ModelScene>) -> LoadPoll {
        match outcome {
            Ok(model) => LoadPoll::Ready(model),
            Err(e) => {
                log::error!("Error loading model {:?}: {:#}", self.path, e);
                LoadPoll::Settled
            }
        }
    }
}
