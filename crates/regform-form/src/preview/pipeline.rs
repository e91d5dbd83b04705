use regform_common::{Event, EventBus, ImageSlot};
use tracing::debug;

use super::cover::CoverPublisher;
use super::handle::{ImageHandle, SelectedFile};

/// Turns file selections for one image slot into preview handles.
pub struct ImagePreview {
    slot: ImageSlot,
    current: Option<ImageHandle>,
    /// Present only on the cover slot.
    publisher: Option<CoverPublisher>,
    events: Option<EventBus>,
}

impl ImagePreview {
    pub fn profile() -> Self {
        Self {
            slot: ImageSlot::Profile,
            current: None,
            publisher: None,
            events: None,
        }
    }

    /// The cover pipeline takes ownership of the cover background's
    /// publisher.
    pub fn cover(publisher: CoverPublisher) -> Self {
        Self {
            slot: ImageSlot::Cover,
            current: None,
            publisher: Some(publisher),
            events: None,
        }
    }

    pub fn with_events(mut self, events: EventBus) -> Self {
        self.events = Some(events);
        self
    }

    pub fn slot(&self) -> ImageSlot {
        self.slot
    }

    pub fn current(&self) -> Option<&ImageHandle> {
        self.current.as_ref()
    }

    pub fn has_image(&self) -> bool {
        self.current.is_some()
    }

    /// Replace this slot's image with `file`. The previous handle is
    /// released; the last selection always wins.
    pub fn select_file(&mut self, file: SelectedFile) -> ImageHandle {
        let handle = ImageHandle::for_file(file);
        if let Some(old) = self.current.replace(handle.clone()) {
            debug!(slot = %self.slot, url = old.url(), "released preview handle");
        }

        if let Some(publisher) = &self.publisher {
            publisher.publish(Some(handle.clone()));
        }
        if let Some(bus) = &self.events {
            bus.publish(Event::ImageSelected {
                slot: self.slot,
                url: handle.url().to_string(),
            });
        }
        handle
    }

    /// Take the first file of a picker selection. An empty selection
    /// leaves the current image in place.
    pub fn select_files<I>(&mut self, files: I) -> Option<ImageHandle>
    where
        I: IntoIterator<Item = SelectedFile>,
    {
        let file = files.into_iter().next()?;
        Some(self.select_file(file))
    }

    /// Release the current image, if any.
    pub fn clear(&mut self) {
        let Some(old) = self.current.take() else {
            return;
        };
        debug!(slot = %self.slot, url = old.url(), "released preview handle");

        if let Some(publisher) = &self.publisher {
            publisher.publish(None);
        }
        if let Some(bus) = &self.events {
            bus.publish(Event::ImageCleared(self.slot));
        }
    }

    /// Text for the slot's upload control.
    pub fn action_label(&self) -> &'static str {
        match (self.slot, self.has_image()) {
            (ImageSlot::Cover, false) => "Upload Cover Photo",
            (ImageSlot::Cover, true) => "Change Cover Photo",
            (ImageSlot::Profile, _) => "Upload Photo",
        }
    }
}
