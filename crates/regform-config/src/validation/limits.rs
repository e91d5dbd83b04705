//! Capacity and timing limits for the notification queue and event bus.

use crate::schema::RegformConfig;

use super::helpers::validate_range;

pub(crate) fn validate_notifications(errors: &mut Vec<String>, config: &RegformConfig) {
    validate_range(
        errors,
        "notifications.capacity",
        config.notifications.capacity,
        1,
        64,
    );
    validate_range(
        errors,
        "notifications.ttl_secs",
        config.notifications.ttl_secs,
        1,
        60,
    );
}

pub(crate) fn validate_events(errors: &mut Vec<String>, config: &RegformConfig) {
    validate_range(errors, "events.capacity", config.events.capacity, 1, 1024);
}
