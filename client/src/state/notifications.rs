//! Transient notification queue.
//!
//! DESIGN
//! ======
//! Notifications are plain data with a monotonically increasing id so the
//! stack can key its list and timers can dismiss exactly the entry they were
//! scheduled for, even after newer entries arrive.

#[cfg(test)]
#[path = "notifications_test.rs"]
mod notifications_test;

/// How long a notification stays on screen in the browser.
pub const AUTO_CLOSE_MS: u32 = 4_000;

/// Visual tone of a notification.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tone {
    #[default]
    Info,
    Success,
    Error,
}

impl Tone {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Info => "notification notification--info",
            Self::Success => "notification notification--success",
            Self::Error => "notification notification--error",
        }
    }
}

/// Content of a notification before it is queued.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub tone: Tone,
    pub title: Option<String>,
    pub message: String,
}

impl Notice {
    #[must_use]
    pub fn info(message: impl Into<String>) -> Self {
        Self { tone: Tone::Info, title: None, message: message.into() }
    }

    #[must_use]
    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self { tone: Tone::Success, title: Some(title.into()), message: message.into() }
    }

    #[must_use]
    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self { tone: Tone::Error, title: Some(title.into()), message: message.into() }
    }
}

/// A queued notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub notice: Notice,
}

/// Notifications currently on screen, oldest first.
#[derive(Clone, Debug, Default)]
pub struct NotificationsState {
    pub items: Vec<Notification>,
    next_id: u64,
}

impl NotificationsState {
    /// Queue `notice` and return its id.
    pub fn push(&mut self, notice: Notice) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Notification { id, notice });
        id
    }

    /// Remove the notification with `id`. Returns whether one was removed.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        self.items.len() != before
    }
}
