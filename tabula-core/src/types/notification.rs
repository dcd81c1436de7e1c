//! 通知队列
//!
//! Short-lived messages surfaced to the user (toast style). Entries expire
//! after [`NOTIFICATION_TTL_SECS`].

use std::collections::VecDeque;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Seconds a notification stays visible.
pub const NOTIFICATION_TTL_SECS: i64 = 3;

/// Oldest entries are dropped once the queue holds this many.
const MAX_NOTIFICATIONS: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationStatus {
    Success,
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: u64,
    pub status: NotificationStatus,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn is_expired(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        now - self.created_at >= ttl
    }
}

/// FIFO of notifications with a fixed time-to-live.
#[derive(Debug, Clone)]
pub struct NotificationQueue {
    items: VecDeque<Notification>,
    next_id: u64,
    ttl: Duration,
}

impl Default for NotificationQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::with_ttl(Duration::seconds(NOTIFICATION_TTL_SECS))
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            items: VecDeque::new(),
            next_id: 1,
            ttl,
        }
    }

    /// Push a notification stamped with the current time. Returns its id.
    pub fn notify(&mut self, status: NotificationStatus, message: impl Into<String>) -> u64 {
        self.notify_at(status, message, Utc::now())
    }

    pub fn notify_at(
        &mut self,
        status: NotificationStatus,
        message: impl Into<String>,
        now: DateTime<Utc>,
    ) -> u64 {
        let id = self.next_id;
        self.next_id += 1;

        if self.items.len() >= MAX_NOTIFICATIONS {
            self.items.pop_front();
        }
        self.items.push_back(Notification {
            id,
            status,
            message: message.into(),
            created_at: now,
        });
        id
    }

    /// Most recent live notification.
    pub fn latest(&self, now: DateTime<Utc>) -> Option<&Notification> {
        self.items
            .iter()
            .rev()
            .find(|n| !n.is_expired(now, self.ttl))
    }

    /// Drop expired entries. Returns whether anything was removed.
    pub fn prune(&mut self, now: DateTime<Utc>) -> bool {
        let before = self.items.len();
        let ttl = self.ttl;
        self.items.retain(|n| !n.is_expired(now, ttl));
        self.items.len() != before
    }

    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        self.items.len() != before
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(secs: i64) -> DateTime<Utc> {
        DateTime::<Utc>::from_timestamp(1_700_000_000 + secs, 0).unwrap_or_default()
    }

    #[test]
    fn latest_returns_newest_live_entry() {
        let mut queue = NotificationQueue::new();
        queue.notify_at(NotificationStatus::Info, "first", at(0));
        queue.notify_at(NotificationStatus::Success, "second", at(1));

        let latest = queue.latest(at(1)).map(|n| n.message.as_str());
        assert_eq!(latest, Some("second"));
    }

    #[test]
    fn entries_expire_after_ttl() {
        let mut queue = NotificationQueue::new();
        queue.notify_at(NotificationStatus::Error, "boom", at(0));

        assert!(queue.latest(at(2)).is_some());
        assert!(queue.latest(at(3)).is_none());
        assert!(queue.prune(at(3)));
        assert!(queue.is_empty());
    }

    #[test]
    fn dismiss_removes_by_id() {
        let mut queue = NotificationQueue::new();
        let keep = queue.notify_at(NotificationStatus::Info, "keep", at(0));
        let drop = queue.notify_at(NotificationStatus::Info, "drop", at(0));

        assert!(queue.dismiss(drop));
        assert!(!queue.dismiss(drop));
        assert_eq!(queue.latest(at(0)).map(|n| n.id), Some(keep));
    }

    #[test]
    fn queue_is_bounded() {
        let mut queue = NotificationQueue::new();
        for i in 0..40 {
            queue.notify_at(NotificationStatus::Info, format!("n{i}"), at(0));
        }
        assert_eq!(queue.len(), MAX_NOTIFICATIONS);
        assert_eq!(queue.latest(at(0)).map(|n| n.message.as_str()), Some("n39"));
    }
}
