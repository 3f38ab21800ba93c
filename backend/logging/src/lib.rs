//! Structured logging for faqkit.
//!
//! Sets up the `tracing` subscriber and provides the [`EventSink`]
//! implementations the content pipeline logs through.
//!
//! [`EventSink`]: faqkit_core::EventSink

pub mod event_logger;
pub mod logger;

pub use event_logger::{EventLogEntry, MemorySink, TracingSink};
pub use logger::{LogSettings, init_logger};
