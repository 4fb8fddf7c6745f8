//! Transient user-facing notifications ("toasts").
//!
//! Every visitor owns a FIFO [`Toaster`] inside the process-wide
//! [`NotificationHub`]. Handlers push onto the hub; pages render whatever is
//! still visible. Each toast expires on its own timer and can be dismissed
//! individually.

pub mod scheduler;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    #[default]
    Default,
    Destructive,
}

impl Variant {
    pub fn css_class(&self) -> &'static str {
        match self {
            Variant::Default => "toast",
            Variant::Destructive => "toast toast-destructive",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Toast {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub variant: Variant,
    pub created_at: DateTime<Utc>,
}

/// A message waiting to be pushed. The hub assigns the id and timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub variant: Variant,
}

impl Notice {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self { title: title.into(), description: description.into(), variant: Variant::Default }
    }

    pub fn failure(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self { title: title.into(), description: description.into(), variant: Variant::Destructive }
    }
}

/// Per-visitor queue, oldest first.
#[derive(Debug, Clone, Default)]
pub struct Toaster {
    toasts: Vec<Toast>,
}

impl Toaster {
    pub fn push(&mut self, toast: Toast) {
        self.toasts.push(toast);
    }

    /// Remove a toast by id. Returns false if it was already gone.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    /// Drop expired toasts and return the rest in insertion order.
    pub fn visible(&mut self, now: DateTime<Utc>, ttl: Duration) -> Vec<Toast> {
        self.prune(now, ttl);
        self.toasts.clone()
    }

    pub fn prune(&mut self, now: DateTime<Utc>, ttl: Duration) {
        // A negative age (clock skew) keeps the toast.
        self.toasts.retain(|t| match now.signed_duration_since(t.created_at).to_std() {
            Ok(age) => age < ttl,
            Err(_) => true,
        });
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

#[derive(Default)]
struct HubState {
    next_id: u64,
    queues: HashMap<String, Toaster>,
}

/// Process-wide notification channel, shared through `web::Data`.
#[derive(Clone)]
pub struct NotificationHub {
    state: Arc<Mutex<HubState>>,
    ttl: Duration,
}

impl NotificationHub {
    pub fn new(ttl: Duration) -> Self {
        Self {
            state: Arc::new(Mutex::new(HubState::default())),
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Queue a notice for one visitor. Returns the assigned toast id.
    pub fn push(&self, client: &str, notice: Notice) -> u64 {
        self.push_at(client, notice, Utc::now())
    }

    pub fn push_at(&self, client: &str, notice: Notice, now: DateTime<Utc>) -> u64 {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        state.next_id += 1;
        let id = state.next_id;
        state.queues.entry(client.to_string()).or_default().push(Toast {
            id,
            title: notice.title,
            description: notice.description,
            variant: notice.variant,
            created_at: now,
        });
        id
    }

    pub fn dismiss(&self, client: &str, id: u64) -> bool {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        let Some(queue) = state.queues.get_mut(client) else {
            return false;
        };
        let removed = queue.dismiss(id);
        if queue.is_empty() {
            state.queues.remove(client);
        }
        removed
    }

    pub fn visible(&self, client: &str) -> Vec<Toast> {
        self.visible_at(client, Utc::now())
    }

    pub fn visible_at(&self, client: &str, now: DateTime<Utc>) -> Vec<Toast> {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        let Some(queue) = state.queues.get_mut(client) else {
            return Vec::new();
        };
        let toasts = queue.visible(now, self.ttl);
        if queue.is_empty() {
            state.queues.remove(client);
        }
        toasts
    }

    /// Expire toasts for every visitor and drop empty queues.
    /// Returns the number of queues still holding toasts.
    pub fn sweep(&self, now: DateTime<Utc>) -> usize {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        let ttl = self.ttl;
        state.queues.retain(|_, queue| {
            queue.prune(now, ttl);
            !queue.is_empty()
        });
        state.queues.len()
    }
}
