//! The notification queue: push-only, deadline-swept.

use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use invoicekit_core::NotificationId;

/// Fixed lifetime of a notification from the moment it is pushed.
pub const NOTIFICATION_TTL: Duration = Duration::from_millis(5000);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Error,
    Success,
}

/// A transient status message shown to the user.
#[derive(Debug, Clone)]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    pub kind: NotificationKind,
    pub created_at: DateTime<Utc>,
    expires_at: Instant,
}

impl Notification {
    /// Whether this entry's deadline has passed.
    pub fn expired(&self, now: Instant) -> bool {
        self.expires_at <= now
    }
}

/// Ephemeral queue of timed messages.
///
/// Display order = insertion order (oldest first); no priority reordering.
/// The only removal path is deadline expiry via [`NotificationQueue::sweep`]
/// - there is no manual dismiss.
#[derive(Debug, Default)]
pub struct NotificationQueue {
    entries: Vec<Notification>,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a notification with the fixed TTL from now.
    pub fn push(&mut self, message: impl Into<String>, kind: NotificationKind) -> NotificationId {
        self.push_at(message, kind, Instant::now())
    }

    /// Append with an explicit clock reading.
    ///
    /// Exposed so tests can pin the deadline and so callers batching pushes
    /// can charge them all against one reading.
    pub fn push_at(
        &mut self,
        message: impl Into<String>,
        kind: NotificationKind,
        now: Instant,
    ) -> NotificationId {
        let id = NotificationId::new();
        let message = message.into();
        let created_at = Utc::now();
        debug!(%id, ?kind, %message, %created_at, "notification pushed");
        self.entries.push(Notification {
            id,
            message,
            kind,
            created_at,
            expires_at: now + NOTIFICATION_TTL,
        });
        id
    }

    /// Remove exactly the entries whose deadline has passed.
    ///
    /// Expiry is per entry, never by message text: two notifications pushed
    /// with identical text expire independently.
    pub fn sweep(&mut self, now: Instant) {
        self.entries.retain(|entry| !entry.expired(now));
    }

    /// Entries in insertion order (oldest first).
    pub fn visible(&self) -> &[Notification] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
