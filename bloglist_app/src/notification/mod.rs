//! Transient status message, one at a time.
//!
//! A message expires after its display window. Expiry is checked on read and,
//! inside a tokio runtime, a timer task also clears it. Each message carries a
//! generation so a timer from an older message never clears a newer one.

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub created_at: DateTime<Utc>,
    expires_at: Instant,
}

impl Notification {
    pub fn remaining(&self) -> Duration {
        self.expires_at.saturating_duration_since(Instant::now())
    }

    fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

#[derive(Debug, Default)]
struct State {
    current: Option<Notification>,
    generation: u64,
}

#[derive(Debug, Clone, Default)]
pub struct NotificationStore {
    inner: Arc<Mutex<State>>,
}

impl NotificationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `message` for `duration`, replacing whatever is showing.
    pub fn set_notification(&self, message: impl Into<String>, duration: Duration) {
        let message = message.into();
        let generation = {
            let mut state = self.inner.lock();
            state.generation += 1;
            state.current = Some(Notification {
                message: message.clone(),
                created_at: Utc::now(),
                expires_at: Instant::now() + duration,
            });
            state.generation
        };
        debug!("[Notification] {}", message);

        if let Ok(handle) = tokio::runtime::Handle::try_current() {
            let inner = self.inner.clone();
            handle.spawn(async move {
                tokio::time::sleep(duration).await;
                let mut state = inner.lock();
                if state.generation == generation {
                    state.current = None;
                }
            });
        }
    }

    pub fn current(&self) -> Option<Notification> {
        let mut state = self.inner.lock();
        if state.current.as_ref().is_some_and(Notification::is_expired) {
            state.current = None;
        }
        state.current.clone()
    }

    /// Message text of the active notification.
    pub fn message(&self) -> Option<String> {
        self.current().map(|n| n.message)
    }

    pub fn clear(&self) {
        let mut state = self.inner.lock();
        state.generation += 1;
        state.current = None;
    }
}
