use std::fmt;

use serde::{Deserialize, Serialize};

/// Something the content pipeline wants logged.
///
/// These are the only side effects of processing content. They go through an
/// injected [`EventSink`](crate::traits::EventSink) instead of a global logger.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ContentEvent {
    /// A format value outside `html | markdown | text` was normalized to HTML
    UnknownFormat { format: String },
    /// The markdown engine failed; content fell back to escaped text
    MarkdownFailed { engine: String, error: String },
    /// The sanitizer failed; content fell back to escaped text
    SanitizeFailed { engine: String, error: String },
}

/// Severity of a [`ContentEvent`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum EventLevel {
    Warn,
    Error,
}

impl ContentEvent {
    pub fn level(&self) -> EventLevel {
        match self {
            Self::UnknownFormat { .. } => EventLevel::Warn,
            Self::MarkdownFailed { .. } | Self::SanitizeFailed { .. } => EventLevel::Error,
        }
    }
}

impl fmt::Display for ContentEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownFormat { format } => {
                write!(f, "Invalid content format \"{format}\", defaulting to html")
            }
            Self::MarkdownFailed { engine, error } => {
                write!(f, "Error parsing markdown with {engine}: {error}")
            }
            Self::SanitizeFailed { engine, error } => {
                write!(f, "Error sanitizing HTML with {engine}: {error}")
            }
        }
    }
}

impl fmt::Display for EventLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}
