// src/engine/filter.rs

//! Adjustments applied to a resolved [`NotificationMap`] before reporting.

use tracing::debug;

use crate::engine::NotificationMap;

/// Drop `subscriber` from the map, e.g. the author of the change.
///
/// Returns the files that subscriber would have been notified about.
pub fn exclude_subscriber(notifs: &mut NotificationMap, subscriber: &str) -> Option<Vec<String>> {
    let removed = notifs.remove(subscriber);
    if removed.is_some() {
        debug!(subscriber, "not notifying excluded subscriber");
    }
    removed
}

/// Drop every subscriber in `subscribers`.
pub fn exclude_subscribers<I, S>(notifs: &mut NotificationMap, subscribers: I)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    for subscriber in subscribers {
        exclude_subscriber(notifs, subscriber.as_ref());
    }
}

/// True if more than `threshold` subscribers would be notified.
///
/// A threshold of 0 disables the check.
pub fn exceeds_threshold(notifs: &NotificationMap, threshold: usize) -> bool {
    threshold > 0 && notifs.len() > threshold
}
