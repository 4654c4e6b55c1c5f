// src/engine/mod.rs

//! Notification resolution.
//!
//! [`resolve`] walks every changed path's ancestor directories, loads the rule
//! file in each, and collects the subscribers of every matching rule. The
//! per-path results are then inverted into a [`NotificationMap`]. The helpers
//! in [`filter`] post-process that map.

pub mod filter;
pub mod resolve;

use std::collections::BTreeMap;

pub use filter::{exceeds_threshold, exclude_subscriber, exclude_subscribers};
pub use resolve::{resolve, subscribers_for_path};

/// Subscriber handle → changed paths it is notified about, in the order the
/// paths were resolved.
pub type NotificationMap = BTreeMap<String, Vec<String>>;
