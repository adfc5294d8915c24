use crate::core::value::ValueMap;
use crate::data::api::ApiError;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

enum Completion {
    Fetched(Result<ValueMap, ApiError>),
    Updated(Result<(), ApiError>),
}

/// Lifecycle notices surfaced to the event loop as completions drain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceEvent {
    Fetched,
    FetchFailed(String),
    Updated,
    UpdateFailed(String),
}

/// Background fetch/update collaborator. Work runs on spawned threads and
/// reports back through an mpsc channel; `drain` applies completions on the
/// event loop's tick, so the form state itself never crosses a thread.
pub struct Resource {
    completion_tx: Sender<Completion>,
    completion_rx: Receiver<Completion>,
    data: Option<ValueMap>,
    is_loading: bool,
    is_error: bool,
    is_updating: bool,
}

impl Resource {
    pub fn new() -> Self {
        let (completion_tx, completion_rx) = mpsc::channel::<Completion>();
        Self {
            completion_tx,
            completion_rx,
            data: None,
            is_loading: false,
            is_error: false,
            is_updating: false,
        }
    }

    pub fn data(&self) -> Option<&ValueMap> {
        self.data.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn is_error(&self) -> bool {
        self.is_error
    }

    pub fn is_updating(&self) -> bool {
        self.is_updating
    }

    pub fn is_busy(&self) -> bool {
        self.is_loading || self.is_updating
    }

    pub fn start_fetch<F>(&mut self, loader: F)
    where
        F: FnOnce() -> Result<ValueMap, ApiError> + Send + 'static,
    {
        self.is_loading = true;
        self.is_error = false;
        let completion_tx = self.completion_tx.clone();
        std::thread::spawn(move || {
            let _ = completion_tx.send(Completion::Fetched(loader()));
        });
    }

    pub fn mutate<F>(&mut self, values: ValueMap, updater: F)
    where
        F: FnOnce(ValueMap) -> Result<(), ApiError> + Send + 'static,
    {
        self.is_updating = true;
        let completion_tx = self.completion_tx.clone();
        std::thread::spawn(move || {
            let _ = completion_tx.send(Completion::Updated(updater(values)));
        });
    }

    /// Apply every completion that has arrived since the last tick.
    pub fn drain(&mut self) -> Vec<ResourceEvent> {
        let mut events = Vec::new();
        loop {
            match self.completion_rx.try_recv() {
                Ok(Completion::Fetched(Ok(data))) => {
                    self.is_loading = false;
                    self.data = Some(data);
                    events.push(ResourceEvent::Fetched);
                }
                Ok(Completion::Fetched(Err(error))) => {
                    self.is_loading = false;
                    self.is_error = true;
                    events.push(ResourceEvent::FetchFailed(error.to_string()));
                }
                Ok(Completion::Updated(Ok(()))) => {
                    self.is_updating = false;
                    events.push(ResourceEvent::Updated);
                }
                Ok(Completion::Updated(Err(error))) => {
                    self.is_updating = false;
                    events.push(ResourceEvent::UpdateFailed(error.to_string()));
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        events
    }
}

impl Default for Resource {
    fn default() -> Self {
        Self::new()
    }
}
