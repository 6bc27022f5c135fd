// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Single-slot transient status message with auto-hide.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

/// How long a status message stays visible.
pub const STATUS_VISIBLE: Duration = Duration::from_secs(5);

/// Visual kind of a status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

impl fmt::Display for StatusKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            StatusKind::Success => f.write_str("success"),
            StatusKind::Error => f.write_str("error"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub kind: StatusKind,
}

/// Shared single-slot notice area. Cheap to clone; all clones see the same
/// slot.
#[derive(Clone, Default)]
pub struct StatusSlot {
    current: Arc<Mutex<Option<StatusMessage>>>,
}

impl StatusSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a message, overwriting whatever is currently displayed, and
    /// schedule a hide timer for [`STATUS_VISIBLE`] from now.
    ///
    /// Every call schedules its own independent timer and the timer clears
    /// the slot unconditionally, so a message shown shortly before a
    /// replacement can hide the replacement early. That matches the original
    /// behavior and is accepted.
    ///
    /// Must be called from within a tokio runtime.
    pub fn show(&self, text: impl Into<String>, kind: StatusKind) {
        *self.lock() = Some(StatusMessage {
            text: text.into(),
            kind,
        });

        let slot = Arc::clone(&self.current);
        tokio::spawn(async move {
            tokio::time::sleep(STATUS_VISIBLE).await;
            *slot.lock().unwrap_or_else(PoisonError::into_inner) = None;
        });
    }

    /// The currently visible message, if any.
    pub fn current(&self) -> Option<StatusMessage> {
        self.lock().clone()
    }

    pub fn is_visible(&self) -> bool {
        self.lock().is_some()
    }

    fn lock(&self) -> MutexGuard<'_, Option<StatusMessage>> {
        self.current.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
