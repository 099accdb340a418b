//! Success and failure signals for console mutations
//!
//! Every mutation on the console reports its outcome through a [`Notifier`].
//! The default [`TracingNotifier`] turns each signal into a log event;
//! embedding applications plug in their own toast/alert surface.
//!
//! # Usage
//!
//! ```rust,ignore
//! let recorder = RecordingNotifier::new();
//! let mut console = AdminConsole::new(config).with_notifier(recorder.clone());
//!
//! console.extend_coupon("cp-1")?;
//!
//! assert_eq!(recorder.last().unwrap().kind, NotifyKind::Success);
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Outcome of a mutation as shown to the operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotifyKind {
    Success,
    Failure,
}

impl fmt::Display for NotifyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotifyKind::Success => f.write_str("success"),
            NotifyKind::Failure => f.write_str("failure"),
        }
    }
}

/// A delivered signal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub message: String,
    pub kind: NotifyKind,
    pub timestamp: DateTime<Utc>,
}

impl Notification {
    pub fn new(message: impl Into<String>, kind: NotifyKind) -> Self {
        Self {
            message: message.into(),
            kind,
            timestamp: Utc::now(),
        }
    }
}

/// Capability for surfacing mutation outcomes
pub trait Notifier {
    fn notify(&self, message: &str, kind: NotifyKind);
}

/// Notifier that emits every signal as a `tracing` event
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, message: &str, kind: NotifyKind) {
        match kind {
            NotifyKind::Success => tracing::info!(%kind, "{}", message),
            NotifyKind::Failure => tracing::warn!(%kind, "{}", message),
        }
    }
}

/// Notifier that keeps every signal in memory
///
/// Clones share the same buffer, so a test can hand one clone to the
/// console and inspect the other.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    received: Rc<RefCell<Vec<Notification>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// All signals received so far, oldest first
    pub fn notifications(&self) -> Vec<Notification> {
        self.received.borrow().clone()
    }

    pub fn last(&self) -> Option<Notification> {
        self.received.borrow().last().cloned()
    }

    pub fn len(&self) -> usize {
        self.received.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.received.borrow().is_empty()
    }

    pub fn clear(&self) {
        self.received.borrow_mut().clear();
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str, kind: NotifyKind) {
        self.received
            .borrow_mut()
            .push(Notification::new(message, kind));
    }
}
