use crate::error::ContentError;
use crate::event::ContentEvent;

/// A markdown-to-HTML engine.
///
/// Output is raw HTML; the pipeline sanitizes it before anyone sees it.
pub trait MarkdownEngine: Send + Sync {
    /// Engine name used in log events (e.g., "pulldown-cmark").
    fn name(&self) -> &str;

    /// Convert markdown source into unsanitized HTML.
    fn render(&self, markdown: &str) -> Result<String, ContentError>;
}

/// An allow-list HTML sanitizer configured with a fixed policy.
pub trait SanitizeEngine: Send + Sync {
    /// Engine name used in log events (e.g., "ammonia").
    fn name(&self) -> &str;

    /// Strip everything the policy does not allow.
    fn sanitize(&self, html: &str) -> Result<String, ContentError>;
}

/// Destination for [`ContentEvent`]s.
///
/// Implementations must not panic: logging can never be allowed to break
/// rendering.
pub trait EventSink: Send + Sync {
    fn emit(&self, event: &ContentEvent);
}

/// Sink that drops every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&self, _event: &ContentEvent) {}
}
