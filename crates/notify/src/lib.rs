//! Transient user-facing notifications with fixed-lifetime expiry.

pub mod queue;
pub mod sweeper;

pub use queue::{NOTIFICATION_TTL, Notification, NotificationKind, NotificationQueue};
pub use sweeper::Sweeper;
