//! GitHub-flavored Markdown rendering for FAQ answers.
//!
//! Converts markdown into raw HTML with single newlines kept as line breaks.
//! The output is not safe to render until it has been sanitized.

pub mod renderer;

pub use renderer::{PulldownRenderer, RenderOptions};
