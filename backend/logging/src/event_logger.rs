//! Content Event Sinks
//!
//! [`TracingSink`] forwards pipeline events to `tracing`; [`MemorySink`]
//! keeps them in memory so callers (and tests) can inspect what was logged.

use std::sync::Mutex;

use chrono::{DateTime, Utc};
use faqkit_core::{ContentEvent, EventLevel, EventSink};
use serde::Serialize;
use tracing::{error, warn};

/// Sink that writes every event through `tracing` under `faqkit::content`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn emit(&self, event: &ContentEvent) {
        match event {
            ContentEvent::UnknownFormat { format } => {
                warn!(target: "faqkit::content", format = %format, "{event}");
            }
            ContentEvent::MarkdownFailed { engine, error }
            | ContentEvent::SanitizeFailed { engine, error } => {
                error!(target: "faqkit::content", engine = %engine, error = %error, "{event}");
            }
        }
    }
}

/// One captured event.
#[derive(Debug, Clone, Serialize)]
pub struct EventLogEntry {
    pub timestamp: DateTime<Utc>,
    pub level: EventLevel,
    pub message: String,
    pub event: ContentEvent,
}

/// Sink that records events in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    entries: Mutex<Vec<EventLogEntry>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far.
    pub fn entries(&self) -> Vec<EventLogEntry> {
        match self.entries.lock() {
            Ok(entries) => entries.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn events(&self) -> Vec<ContentEvent> {
        self.entries().into_iter().map(|entry| entry.event).collect()
    }

    pub fn len(&self) -> usize {
        self.entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Recorded entries as NDJSON, one event per line.
    pub fn to_ndjson(&self) -> String {
        self.entries()
            .iter()
            .filter_map(|entry| serde_json::to_string(entry).ok())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl EventSink for MemorySink {
    fn emit(&self, event: &ContentEvent) {
        let entry = EventLogEntry {
            timestamp: Utc::now(),
            level: event.level(),
            message: event.to_string(),
            event: event.clone(),
        };
        let mut entries = match self.entries.lock() {
            Ok(entries) => entries,
            Err(poisoned) => poisoned.into_inner(),
        };
        entries.push(entry);
    }
}
