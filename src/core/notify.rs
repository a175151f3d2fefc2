// Notification sink
// Fire-and-forget user-facing notices, rendered as a toast stack

use std::time::{Duration, Instant};

/// Default time a notification stays on screen.
pub const DEFAULT_NOTIFICATION_SECS: u64 = 3;

/// A user-facing notice. The sink only promises to accept it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub content: String,
    pub duration: Duration,
    /// Symbolic icon name, resolved through the icon table at render time.
    pub icon: Option<String>,
}

impl Notification {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            duration: Duration::from_secs(DEFAULT_NOTIFICATION_SECS),
            icon: None,
        }
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }
}

/// Accepts fire-and-forget notifications.
///
/// The toolkit never inspects delivery; a sink that drops everything is a
/// valid implementation.
pub trait Notifier {
    fn notify(&mut self, notification: Notification);
}

/// A queued notification with its arrival time.
#[derive(Debug, Clone)]
pub struct ActiveNotification {
    pub notification: Notification,
    pub shown_at: Instant,
}

/// Queue-backed notifier that expires entries after their duration.
#[derive(Debug, Default)]
pub struct NotificationCenter {
    active: Vec<ActiveNotification>,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self { active: Vec::new() }
    }

    /// Drop entries whose duration has elapsed as of `now`.
    pub fn prune(&mut self, now: Instant) {
        self.active
            .retain(|entry| now.duration_since(entry.shown_at) < entry.notification.duration);
    }

    /// Notifications currently on screen, oldest first.
    pub fn active(&self) -> &[ActiveNotification] {
        &self.active
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}

impl Notifier for NotificationCenter {
    fn notify(&mut self, notification: Notification) {
        self.active.push(ActiveNotification {
            notification,
            shown_at: Instant::now(),
        });
    }
}
