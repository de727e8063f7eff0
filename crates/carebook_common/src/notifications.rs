// --- File: crates/carebook_common/src/notifications.rs ---
//! Transient visitor notifications ("toasts").
//!
//! Views raise notifications through the [`NotificationSink`] trait; the
//! per-visitor [`Toaster`] queues them until the next page render drains them.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Default,
    Destructive,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Default => "default",
            Severity::Destructive => "destructive",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub severity: Severity,
}

impl Notification {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity: Severity::Default,
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            severity: Severity::Destructive,
            ..Self::new(title, description)
        }
    }
}

/// Anything that can receive visitor notifications.
pub trait NotificationSink: Send {
    fn notify(&mut self, notification: Notification);
}

/// Bounded queue of pending notifications for one visitor.
#[derive(Debug, Clone)]
pub struct Toaster {
    pending: VecDeque<Notification>,
    limit: usize,
}

impl Toaster {
    /// `limit` is clamped to at least one; the oldest entries are dropped first.
    pub fn new(limit: usize) -> Self {
        Self {
            pending: VecDeque::new(),
            limit: limit.max(1),
        }
    }

    pub fn pending(&self) -> impl Iterator<Item = &Notification> {
        self.pending.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Takes all pending notifications, oldest first.
    pub fn drain(&mut self) -> Vec<Notification> {
        self.pending.drain(..).collect()
    }
}

impl Default for Toaster {
    fn default() -> Self {
        Self::new(1)
    }
}

impl NotificationSink for Toaster {
    fn notify(&mut self, notification: Notification) {
        match notification.severity {
            Severity::Default => info!(
                title = %notification.title,
                "notification: {}", notification.description
            ),
            Severity::Destructive => warn!(
                title = %notification.title,
                "notification: {}", notification.description
            ),
        }

        while self.pending.len() >= self.limit {
            self.pending.pop_front();
        }
        self.pending.push_back(notification);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newest_notification_wins_at_limit() {
        let mut toaster = Toaster::new(1);
        toaster.notify(Notification::new("Doctor Selected", "first"));
        toaster.notify(Notification::destructive("Error", "second"));

        let drained = toaster.drain();
        assert_eq!(drained.len(), 1);
        assert_eq!(drained[0].description, "second");
        assert_eq!(drained[0].severity, Severity::Destructive);
        assert!(toaster.is_empty());
    }

    #[test]
    fn test_larger_limit_keeps_order() {
        let mut toaster = Toaster::new(3);
        for i in 0..4 {
            toaster.notify(Notification::new("n", i.to_string()));
        }

        let descriptions: Vec<_> = toaster.pending().map(|n| n.description.clone()).collect();
        assert_eq!(descriptions, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_zero_limit_is_clamped() {
        let mut toaster = Toaster::new(0);
        toaster.notify(Notification::new("t", "d"));
        assert_eq!(toaster.drain().len(), 1);
    }

    #[test]
    fn test_severity_serializes_lowercase() {
        let json = serde_json::to_string(&Severity::Destructive).unwrap();
        assert_eq!(json, "\"destructive\"");
    }
}
