//! Core types shared by the faqkit crates: content formats, pipeline events,
//! the engine and sink seams, and HTML escaping.

pub mod error;
pub mod escape;
pub mod event;
pub mod format;
pub mod traits;
pub mod types;

pub use error::{describe_panic, ContentError};
pub use escape::{escape_html, text_to_html};
pub use event::{ContentEvent, EventLevel};
pub use format::ContentFormat;
pub use traits::{EventSink, MarkdownEngine, NullSink, SanitizeEngine};
pub use types::FaqItem;
