//! Bounded rolling log of typed, timestamped messages.
//!
//! Every append is mirrored to `tracing` at debug level. Hosts print the
//! log themselves, so the mirror only shows up when asked for.

use crate::core::constants::MAX_LOG_ENTRIES;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::VecDeque;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LogKind {
    Info,
    Combat,
    Loot,
    Danger,
    Skill,
}

impl LogKind {
    pub fn label(&self) -> &'static str {
        match self {
            LogKind::Info => "info",
            LogKind::Combat => "combat",
            LogKind::Loot => "loot",
            LogKind::Danger => "danger",
            LogKind::Skill => "skill",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogEntry {
    pub id: u64,
    pub message: String,
    pub kind: LogKind,
    pub timestamp: DateTime<Utc>,
}

/// Keeps the most recent [`MAX_LOG_ENTRIES`] entries, oldest first.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GameLog {
    entries: VecDeque<LogEntry>,
    next_id: u64,
}

impl GameLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: impl Into<String>, kind: LogKind) -> &LogEntry {
        let message = message.into();
        tracing::debug!(kind = kind.label(), "{}", message);

        if self.entries.len() >= MAX_LOG_ENTRIES {
            self.entries.pop_front();
        }
        self.entries.push_back(LogEntry {
            id: self.next_id,
            message,
            kind,
            timestamp: Utc::now(),
        });
        self.next_id += 1;

        &self.entries[self.entries.len() - 1]
    }

    pub fn entries(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&LogEntry> {
        self.entries.back()
    }

    /// Total entries ever appended, including evicted ones
    pub fn total_written(&self) -> u64 {
        self.next_id
    }
}
