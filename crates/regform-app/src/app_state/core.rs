//! RegistrationApp struct definition and constructor.

use std::time::Duration;

use tokio::sync::broadcast;

use regform_common::{Event, EventBus, NotificationQueue};
use regform_config::RegformConfig;
use regform_form::{cover_background, CoverWatcher, FormStore, ImagePreview};

use super::submission::SubmissionLog;

/// Driver state for one registration form.
pub struct RegistrationApp {
    pub(super) config: RegformConfig,
    pub(super) store: FormStore,

    // Image slots. The banner reads the cover only through its watcher.
    pub(super) profile: ImagePreview,
    pub(super) cover: ImagePreview,
    pub(super) banner: CoverWatcher,

    pub(super) events_rx: broadcast::Receiver<Event>,
    pub(super) notifications: NotificationQueue,
    pub(super) submissions: SubmissionLog,
}

impl RegistrationApp {
    pub fn new(config: RegformConfig) -> Self {
        let event_bus = EventBus::new(config.events.capacity as usize);
        let events_rx = event_bus.subscribe();
        let (publisher, banner) = cover_background();

        Self {
            store: FormStore::with_events(event_bus.clone()),
            profile: ImagePreview::profile().with_events(event_bus.clone()),
            cover: ImagePreview::cover(publisher).with_events(event_bus),
            banner,
            events_rx,
            notifications: NotificationQueue::new(config.notifications.capacity as usize),
            submissions: SubmissionLog::default(),
            config,
        }
    }

    pub(super) fn notification_ttl(&self) -> Duration {
        Duration::from_secs(u64::from(self.config.notifications.ttl_secs))
    }

    pub fn store(&self) -> &FormStore {
        &self.store
    }

    pub fn profile(&self) -> &ImagePreview {
        &self.profile
    }

    pub fn cover(&self) -> &ImagePreview {
        &self.cover
    }

    /// Number of submissions handed to the collaborator.
    pub fn submission_count(&self) -> usize {
        self.submissions.len()
    }
}
