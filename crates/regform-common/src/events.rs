use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use crate::types::{FormPhase, ImageSlot};

/// Notifications emitted after a form mutation has been applied and the
/// error map recomputed. Field names use their camelCase wire form so
/// observers do not need the form crate's types.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Event {
    FieldChanged { field: String, error_count: usize },
    FieldBlurred { field: String },
    SubmitRejected { error_count: usize },
    FormSubmitted,
    FormReset,
    PhaseChanged(FormPhase),
    ImageSelected { slot: ImageSlot, url: String },
    ImageCleared(ImageSlot),
    #[serde(other)]
    Unknown,
}

pub struct EventBus {
    sender: broadcast::Sender<Event>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.sender.subscribe()
    }

    pub fn publish(&self, event: Event) -> usize {
        self.sender.send(event).unwrap_or(0)
    }
}

impl Clone for EventBus {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}
