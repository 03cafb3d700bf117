//! Alert queue - human-readable notifications for the UI/sound collaborator
//!
//! The engine only pushes; the display side drains at its own pace and shows
//! each alert for a fixed duration before discarding it.

use crate::core::types::Tick;
use std::collections::VecDeque;

/// A single queued notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub message: String,
    /// Tick the alert was raised, for display-duration expiry
    pub raised_at: Tick,
}

/// Append-only notification queue
#[derive(Debug, Clone, Default)]
pub struct AlertQueue {
    entries: VecDeque<Alert>,
}

impl AlertQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: impl Into<String>, now: Tick) {
        let message = message.into();
        tracing::debug!(tick = now, alert = %message, "alert raised");
        self.entries.push_back(Alert {
            message,
            raised_at: now,
        });
    }

    /// Alerts still within their display window, oldest first
    pub fn active(&self, now: Tick, display_ticks: Tick) -> impl Iterator<Item = &Alert> {
        self.entries
            .iter()
            .filter(move |a| now.saturating_sub(a.raised_at) < display_ticks)
    }

    /// Drop alerts whose display window has passed
    pub fn discard_expired(&mut self, now: Tick, display_ticks: Tick) {
        while let Some(front) = self.entries.front() {
            if now.saturating_sub(front.raised_at) >= display_ticks {
                self.entries.pop_front();
            } else {
                break;
            }
        }
    }

    /// Remove and return the oldest alert
    pub fn pop(&mut self) -> Option<Alert> {
        self.entries.pop_front()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Alert> {
        self.entries.iter()
    }
}
