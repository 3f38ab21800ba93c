//! Advisory warnings for answer content, chosen by declared format.

use faqkit_core::ContentFormat;
use faqkit_security::{extract_tags, validate_html, validate_html_syntax};

use crate::pipeline::ContentPipeline;

/// Prefix for warnings found in HTML typed inside markdown source.
pub const EMBEDDED_HTML_PREFIX: &str = "Embedded HTML in markdown: ";

impl ContentPipeline {
    /// Warnings for `content` declared as `format`.
    ///
    /// Unlike [`ContentPipeline::process`], an unrecognized format is not
    /// normalized or logged; there is simply nothing to report for it.
    pub fn warnings(&self, content: &str, format: &str) -> Vec<String> {
        match format.parse::<ContentFormat>() {
            Ok(format) => self.warnings_as(content, format),
            Err(_) => Vec::new(),
        }
    }

    /// Warnings for `content` with an already-validated format.
    pub fn warnings_as(&self, content: &str, format: ContentFormat) -> Vec<String> {
        if content.is_empty() {
            return Vec::new();
        }
        match format {
            ContentFormat::Html => html_warnings(content),
            ContentFormat::Markdown => embedded_html_warnings(content),
            ContentFormat::Text => Vec::new(),
        }
    }
}

/// Security findings first, then structural ones.
pub fn html_warnings(html: &str) -> Vec<String> {
    let mut warnings = validate_html(html);
    warnings.extend(validate_html_syntax(html));
    warnings
}

/// Validate only the literal HTML tags inside markdown source.
pub fn embedded_html_warnings(markdown: &str) -> Vec<String> {
    let tags = extract_tags(markdown);
    if tags.is_empty() {
        return Vec::new();
    }
    let embedded = tags.concat();
    html_warnings(&embedded)
        .into_iter()
        .map(|warning| format!("{EMBEDDED_HTML_PREFIX}{warning}"))
        .collect()
}
