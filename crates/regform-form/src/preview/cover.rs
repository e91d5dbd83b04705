//! Shared "current cover background" cell.

use tokio::sync::watch;
use tracing::info;

use super::handle::ImageHandle;

/// Presentation property the cover image is rendered through.
pub const COVER_IMAGE_PROPERTY: &str = "--cover-image-url";

/// Create the cover background cell: one publisher for the cover pipeline,
/// any number of watchers for renderers.
pub fn cover_background() -> (CoverPublisher, CoverWatcher) {
    let (tx, rx) = watch::channel(None);
    (CoverPublisher { tx }, CoverWatcher { rx })
}

/// Write side of the cover background. Not `Clone`: the cover pipeline
/// is the only writer.
#[derive(Debug)]
pub struct CoverPublisher {
    tx: watch::Sender<Option<ImageHandle>>,
}

impl CoverPublisher {
    /// Replace the current cover. Works with or without live watchers.
    pub(crate) fn publish(&self, handle: Option<ImageHandle>) {
        match &handle {
            Some(h) => info!(url = h.url(), "cover background updated"),
            None => info!("cover background cleared"),
        }
        self.tx.send_replace(handle);
    }

    /// Open another read side.
    pub fn watcher(&self) -> CoverWatcher {
        CoverWatcher {
            rx: self.tx.subscribe(),
        }
    }
}

/// Read side of the cover background.
#[derive(Debug, Clone)]
pub struct CoverWatcher {
    rx: watch::Receiver<Option<ImageHandle>>,
}

impl CoverWatcher {
    pub fn current(&self) -> Option<ImageHandle> {
        self.rx.borrow().clone()
    }

    /// `(property, value)` pair for the current cover, e.g.
    /// `("--cover-image-url", "url(blob:regform/...)")`.
    pub fn css_property(&self) -> Option<(&'static str, String)> {
        self.rx
            .borrow()
            .as_ref()
            .map(|h| (COVER_IMAGE_PROPERTY, h.css_value()))
    }

    /// `true` if the cover changed since this watcher last looked.
    pub fn has_changed(&self) -> bool {
        self.rx.has_changed().unwrap_or(false)
    }

    /// Read the current cover and mark it seen (polling readers).
    pub fn take_current(&mut self) -> Option<ImageHandle> {
        self.rx.borrow_and_update().clone()
    }

    /// Wait for the next change. Returns `false` once the publisher is gone.
    pub async fn changed(&mut self) -> bool {
        self.rx.changed().await.is_ok()
    }
}
