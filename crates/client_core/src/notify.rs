//! Transient user notifications ("toasts").

use std::{
    sync::{Arc, Mutex, MutexGuard},
    time::{Duration, Instant},
};

use tracing::{info, warn};

pub trait Notifier: Send + Sync {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPosition {
    TopCenter,
    BottomRight,
}

impl ToastKind {
    /// Success toasts are pinned top-center; errors use the default corner.
    pub fn position(self) -> ToastPosition {
        match self {
            Self::Success => ToastPosition::TopCenter,
            Self::Error => ToastPosition::BottomRight,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
    pub position: ToastPosition,
    pub created_at: Instant,
}

impl Toast {
    pub fn new(kind: ToastKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            position: kind.position(),
            created_at: Instant::now(),
        }
    }

    pub fn is_expired(&self, now: Instant, ttl: Duration) -> bool {
        now.saturating_duration_since(self.created_at) >= ttl
    }
}

/// Shared, cloneable queue of toasts waiting to be rendered.
#[derive(Debug, Clone, Default)]
pub struct ToastQueue {
    inner: Arc<Mutex<Vec<Toast>>>,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Toast>> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn push(&self, kind: ToastKind, message: impl Into<String>) {
        self.lock().push(Toast::new(kind, message));
    }

    pub fn snapshot(&self) -> Vec<Toast> {
        self.lock().clone()
    }

    pub fn drain(&self) -> Vec<Toast> {
        std::mem::take(&mut *self.lock())
    }

    pub fn expire(&self, now: Instant, ttl: Duration) {
        self.lock().retain(|toast| !toast.is_expired(now, ttl));
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

impl Notifier for ToastQueue {
    fn success(&self, message: &str) {
        self.push(ToastKind::Success, message);
    }

    fn error(&self, message: &str) {
        self.push(ToastKind::Error, message);
    }
}

/// Notifier for headless hosts: notifications go to the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn success(&self, message: &str) {
        info!(target: "notify", "{message}");
    }

    fn error(&self, message: &str) {
        warn!(target: "notify", "{message}");
    }
}

#[cfg(test)]
#[path = "tests/notify_tests.rs"]
mod tests;
