//! Bounded status log
//!
//! Print outcomes reach the UI as short status messages. The core only
//! ever appends through the [`StatusReporter`] interface; it never reads
//! the log back.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::sync::Mutex;
use tracing::{error, info};

/// Reporting interface the orchestrator appends through
pub trait StatusReporter: Send + Sync {
    fn report(&self, text: &str, is_error: bool);
}

/// One status message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusEntry {
    pub text: String,
    pub is_error: bool,
}

/// Bounded, most-recent-first message log
///
/// Holds at most `capacity` entries (default 10); inserting at capacity
/// evicts the oldest entry. Shareable as `Arc<StatusLog>` across the UI
/// shell and the orchestrator.
pub struct StatusLog {
    entries: Mutex<VecDeque<StatusEntry>>,
    capacity: usize,
}

impl StatusLog {
    pub fn new() -> Self {
        Self::with_capacity(10)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Mutex::new(VecDeque::with_capacity(capacity)),
            capacity,
        }
    }

    /// Current entries, newest first
    pub fn snapshot(&self) -> Vec<StatusEntry> {
        match self.entries.lock() {
            Ok(q) => q.iter().cloned().collect(),
            Err(_) => Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.lock().map(|q| q.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for StatusLog {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusReporter for StatusLog {
    fn report(&self, text: &str, is_error: bool) {
        if is_error {
            error!(message = text, "print status");
        } else {
            info!(message = text, "print status");
        }

        let Ok(mut q) = self.entries.lock() else {
            return;
        };
        q.push_front(StatusEntry {
            text: text.to_string(),
            is_error,
        });
        q.truncate(self.capacity);
    }
}
