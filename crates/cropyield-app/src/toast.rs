//! Ephemeral notifications shown in the corner of the screen

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Most toasts kept at once; older ones are dropped first
pub const MAX_TOASTS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub level: ToastLevel,
    pub message: String,
    pub expires_at: Instant,
}

/// Queue of live toasts, oldest first
#[derive(Debug, Clone)]
pub struct Toasts {
    items: VecDeque<Toast>,
    duration: Duration,
}

impl Default for Toasts {
    fn default() -> Self {
        Self::new(Duration::from_millis(3000))
    }
}

impl Toasts {
    pub fn new(duration: Duration) -> Self {
        Self {
            items: VecDeque::with_capacity(MAX_TOASTS),
            duration,
        }
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push(ToastLevel::Success, message.into(), Instant::now());
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(ToastLevel::Error, message.into(), Instant::now());
    }

    pub fn push(&mut self, level: ToastLevel, message: String, now: Instant) {
        while self.items.len() >= MAX_TOASTS {
            self.items.pop_front();
        }
        self.items.push_back(Toast {
            level,
            message,
            expires_at: now + self.duration,
        });
    }

    /// Drop every toast that has expired at `now`. Returns how many were removed.
    pub fn prune(&mut self, now: Instant) -> usize {
        let before = self.items.len();
        self.items.retain(|t| t.expires_at > now);
        before - self.items.len()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Most recent toast, if any
    pub fn latest(&self) -> Option<&Toast> {
        self.items.back()
    }
}
