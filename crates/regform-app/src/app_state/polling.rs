//! Per-command polling of the event bus and the cover background.

use tokio::sync::broadcast::error::TryRecvError;
use tracing::{debug, info, warn};

use super::core::RegistrationApp;

impl RegistrationApp {
    /// Drain form events published since the last command.
    pub(super) fn poll_events(&mut self) -> usize {
        let mut seen = 0;
        loop {
            match self.events_rx.try_recv() {
                Ok(event) => {
                    debug!(?event, "form event");
                    seen += 1;
                }
                Err(TryRecvError::Lagged(n)) => {
                    warn!("event receiver lagged by {n} events");
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => break,
            }
        }
        seen
    }

    /// Banner side of the cover background: pick up a new cover, if any.
    pub(super) fn poll_banner(&mut self) {
        if !self.banner.has_changed() {
            return;
        }
        match self.banner.take_current() {
            Some(handle) => info!(background = %handle.css_value(), "banner cover updated"),
            None => info!("banner cover removed"),
        }
    }
}
