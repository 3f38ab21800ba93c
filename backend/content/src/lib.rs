//! Content pipeline for FAQ answers.
//!
//! Routes each answer through the path its format calls for:
//!
//! - `html` is sanitized against the static allow-list policy
//! - `markdown` is rendered (GFM, line breaks kept) and then sanitized
//! - `text` is escaped with newlines turned into `<br>`
//!
//! Alongside rendering, [`get_content_warnings`] reports dangerous or broken
//! markup to authors without ever blocking it.

pub mod faq;
pub mod pipeline;
pub mod warnings;

use std::sync::LazyLock;

pub use faq::RenderedFaqItem;
pub use faqkit_core::{ContentFormat, FaqItem};
pub use pipeline::ContentPipeline;
pub use warnings::{embedded_html_warnings, html_warnings, EMBEDDED_HTML_PREFIX};

static DEFAULT_PIPELINE: LazyLock<ContentPipeline> = LazyLock::new(ContentPipeline::with_defaults);

/// Render untrusted `content` to HTML that is safe to inject.
///
/// Never fails: unknown formats render as HTML and engine failures fall back
/// to escaped text.
pub fn process_content(content: &str, format: &str) -> String {
    DEFAULT_PIPELINE.process(content, format)
}

/// Advisory warnings for `content`; empty for `text` and unknown formats.
pub fn get_content_warnings(content: &str, format: &str) -> Vec<String> {
    DEFAULT_PIPELINE.warnings(content, format)
}
