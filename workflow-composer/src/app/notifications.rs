//! Notification system for user-visible feedback
//!
//! The TUI owns the terminal, so operations and recoverable errors report
//! through these leveled, auto-dismissing messages instead of a log stream.

use std::time::{Duration, Instant};

use super::commands::NotificationLevel;

const AUTO_DISMISS_AFTER: Duration = Duration::from_secs(4);
const MAX_KEPT: usize = 20;

#[derive(Debug, Clone)]
pub struct Notification {
    pub timestamp: Instant,
    pub level: NotificationLevel,
    pub title: String,
    pub message: String,
}

pub struct NotificationManager {
    notifications: Vec<Notification>,
}

impl NotificationManager {
    pub fn new() -> Self {
        Self {
            notifications: Vec::new(),
        }
    }

    pub fn error(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.push(NotificationLevel::Error, title.into(), message.into());
    }

    pub fn success(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.push(NotificationLevel::Success, title.into(), message.into());
    }

    pub fn warning(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.push(NotificationLevel::Warning, title.into(), message.into());
    }

    pub fn info(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.push(NotificationLevel::Info, title.into(), message.into());
    }

    pub fn push(&mut self, level: NotificationLevel, title: String, message: String) {
        self.notifications.push(Notification {
            timestamp: Instant::now(),
            level,
            title,
            message,
        });

        // Keep only recent notifications
        if self.notifications.len() > MAX_KEPT {
            self.notifications.remove(0);
        }
    }

    /// Notifications that have not expired yet, oldest first
    pub fn get_active(&self) -> Vec<&Notification> {
        let now = Instant::now();
        self.notifications
            .iter()
            .filter(|n| now.duration_since(n.timestamp) < AUTO_DISMISS_AFTER)
            .collect()
    }
}

impl Default for NotificationManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_notifications_are_active() {
        let mut manager = NotificationManager::new();
        manager.info("Hello", "world");
        manager.error("Oops", "bad");

        let active = manager.get_active();
        assert_eq!(active.len(), 2);
        assert_eq!(active[0].title, "Hello");
        assert_eq!(active[1].level, NotificationLevel::Error);
    }

    #[test]
    fn backlog_is_bounded() {
        let mut manager = NotificationManager::new();
        for i in 0..(MAX_KEPT + 5) {
            manager.info(format!("n{}", i), "");
        }
        assert!(manager.get_active().len() <= MAX_KEPT);
    }
}
