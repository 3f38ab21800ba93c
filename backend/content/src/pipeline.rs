use std::sync::Arc;

use faqkit_core::{
    escape_html, text_to_html, ContentEvent, ContentFormat, EventSink, MarkdownEngine,
    SanitizeEngine,
};
use faqkit_logging::TracingSink;
use faqkit_markdown::PulldownRenderer;
use faqkit_security::AmmoniaSanitizer;

/// Turns untrusted answer content into HTML that is safe to inject.
///
/// Engine failures never escape: they are logged through the sink and the
/// caller gets the input back as escaped text.
#[derive(Clone)]
pub struct ContentPipeline {
    markdown: Arc<dyn MarkdownEngine>,
    sanitizer: Arc<dyn SanitizeEngine>,
    sink: Arc<dyn EventSink>,
}

impl ContentPipeline {
    pub fn new(
        markdown: Arc<dyn MarkdownEngine>,
        sanitizer: Arc<dyn SanitizeEngine>,
        sink: Arc<dyn EventSink>,
    ) -> Self {
        Self {
            markdown,
            sanitizer,
            sink,
        }
    }

    /// GFM markdown with line breaks, the static sanitize policy, and
    /// `tracing` for events.
    pub fn with_defaults() -> Self {
        Self::new(
            Arc::new(PulldownRenderer::default()),
            Arc::new(AmmoniaSanitizer::default()),
            Arc::new(TracingSink),
        )
    }

    /// Replace the event sink, keeping the engines.
    pub fn with_sink(mut self, sink: Arc<dyn EventSink>) -> Self {
        self.sink = sink;
        self
    }

    pub fn sink(&self) -> &dyn EventSink {
        self.sink.as_ref()
    }

    /// Render `content` declared as `format`.
    ///
    /// `format` is untrusted: anything but `html`, `markdown` or `text` is
    /// logged once and rendered as HTML.
    pub fn process(&self, content: &str, format: &str) -> String {
        if content.is_empty() {
            return String::new();
        }
        let format = ContentFormat::normalize(format, self.sink());
        self.process_as(content, format)
    }

    /// Render `content` with an already-validated format.
    pub fn process_as(&self, content: &str, format: ContentFormat) -> String {
        if content.is_empty() {
            return String::new();
        }
        match format {
            ContentFormat::Html => self.sanitize_html(content),
            ContentFormat::Markdown => self.markdown_to_html(content),
            ContentFormat::Text => text_to_html(content),
        }
    }

    /// Sanitize HTML, falling back to escaped text if the engine fails.
    pub fn sanitize_html(&self, html: &str) -> String {
        if html.is_empty() {
            return String::new();
        }
        match self.sanitizer.sanitize(html) {
            Ok(clean) => clean,
            Err(err) => {
                self.sink.emit(&ContentEvent::SanitizeFailed {
                    engine: self.sanitizer.name().to_string(),
                    error: err.to_string(),
                });
                escape_html(html)
            }
        }
    }

    /// Convert markdown and sanitize the result, falling back to the escaped
    /// markdown source if conversion fails.
    pub fn markdown_to_html(&self, markdown: &str) -> String {
        if markdown.is_empty() {
            return String::new();
        }
        match self.markdown.render(markdown) {
            Ok(raw_html) => self.sanitize_html(&raw_html),
            Err(err) => {
                self.sink.emit(&ContentEvent::MarkdownFailed {
                    engine: self.markdown.name().to_string(),
                    error: err.to_string(),
                });
                escape_html(markdown)
            }
        }
    }
}

impl Default for ContentPipeline {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl std::fmt::Debug for ContentPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentPipeline")
            .field("markdown", &self.markdown.name())
            .field("sanitizer", &self.sanitizer.name())
            .finish_non_exhaustive()
    }
}
