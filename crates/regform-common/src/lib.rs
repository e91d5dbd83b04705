pub mod errors;
pub mod events;
pub mod id;
pub mod notifications;
pub mod types;

pub use errors::{ConfigError, FormError, RegformError};
pub use events::{Event, EventBus};
pub use id::{new_correlation_id, new_id, HandleId};
pub use notifications::{Notification, NotificationLevel, NotificationQueue};
pub use types::{FormPhase, ImageSlot};

pub type Result<T> = std::result::Result<T, RegformError>;
