/// Background worker that keeps palette store traffic off the UI thread.
use std::sync::mpsc::{Receiver, Sender};
use std::thread;

use tracing::debug;

use super::{StoreClient, StoreError};
use crate::types::{PaletteId, SavedPalette};

/// A fire-and-once request from the UI. Never retried, never cancelled.
#[derive(Clone, Debug, PartialEq)]
pub enum Request {
    List,
    Create { name: String, colors: Vec<String> },
    Delete { id: PaletteId },
}

/// Completion event posted back to the UI thread.
#[derive(Debug)]
pub enum ApiEvent {
    Listed(Result<Vec<SavedPalette>, StoreError>),
    Saved(Result<(), StoreError>),
    Deleted {
        id: PaletteId,
        result: Result<(), StoreError>,
    },
}

/// Spawn the store worker. Requests are served one at a time in submission
/// order; each completion is posted to `events` and drained by the UI on its
/// next tick. The thread exits when the request channel closes.
pub fn spawn_worker(client: StoreClient, requests: Receiver<Request>, events: Sender<ApiEvent>) {
    thread::spawn(move || {
        for request in requests {
            let event = match request {
                Request::List => ApiEvent::Listed(client.list()),
                Request::Create { name, colors } => ApiEvent::Saved(client.create(&name, &colors)),
                Request::Delete { id } => {
                    let result = client.delete(&id);
                    ApiEvent::Deleted { id, result }
                }
            };
            if events.send(event).is_err() {
                debug!("ui side of the api channel closed, stopping worker");
                break;
            }
        }
    });
}
