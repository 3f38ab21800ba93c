//! Static sanitization policy for FAQ answer content.
//!
//! Headings are left out on purpose: answers sit under the accordion's own
//! heading and must not break the page outline.

use once_cell::sync::Lazy;
use regex::Regex;

/// Elements that survive sanitization.
pub const ALLOWED_TAGS: &[&str] = &[
    // text and inline formatting
    "p", "br", "hr", "strong", "b", "em", "i", "u", "s", "strike", "del", "ins", "mark",
    "small", "sub", "sup", "code", "pre", "blockquote", "abbr", "cite", "q", "kbd", "a",
    // lists
    "ul", "ol", "li", "dl", "dt", "dd",
    // tables
    "table", "caption", "colgroup", "col", "thead", "tbody", "tfoot", "tr", "th", "td",
    // images and media
    "img", "figure", "figcaption", "video", "audio", "source", "track",
    // structure
    "div", "span", "details", "summary",
    // markdown task-list checkboxes
    "input",
];

/// Attributes that survive on any allowed element.
pub const ALLOWED_ATTRIBUTES: &[&str] = &[
    // links and media
    "href", "src", "alt", "title", "target", "width", "height", "controls", "poster",
    "preload", "loop", "muted", "kind", "srclang", "label", "cite", "start", "reversed",
    "open",
    // table layout
    "rowspan", "colspan", "scope", "headers", "align", "valign", "span",
    // styling
    "class", "style",
    // task-list checkboxes
    "type", "checked", "disabled",
];

/// Attributes whose values are URIs and must pass [`SanitizeConfig::allowed_uri_pattern`].
pub const URI_ATTRIBUTES: &[&str] = &["href", "src", "poster", "cite"];

/// CSS properties kept inside `style` attributes.
pub const ALLOWED_STYLE_PROPERTIES: &[&str] = &[
    "color",
    "background-color",
    "text-align",
    "text-decoration",
    "font-weight",
    "font-style",
    "font-size",
    "vertical-align",
    "width",
    "height",
    "margin",
    "padding",
    "border",
    "border-collapse",
];

/// URI schemes allowed in links and media sources.
pub const ALLOWED_URL_SCHEMES: &[&str] =
    &["http", "https", "mailto", "tel", "callto", "sms", "cid", "xmpp"];

/// Elements removed together with their content.
pub const CLEAN_CONTENT_TAGS: &[&str] =
    &["script", "style", "iframe", "object", "noscript", "template"];

/// Scheme allow-list plus relative and scheme-less URIs.
const ALLOWED_URI_PATTERN: &str =
    r"(?i)^(?:(?:https?|mailto|tel|callto|sms|cid|xmpp):|[^a-z]|[a-z+.\-]+(?:[^a-z+.\-:]|$))";

/// Process-wide sanitization policy. Never mutated.
pub static SANITIZE_CONFIG: Lazy<SanitizeConfig> = Lazy::new(SanitizeConfig::default);

/// Allow-list policy consumed by the sanitizer.
#[derive(Debug, Clone)]
pub struct SanitizeConfig {
    pub allowed_tags: &'static [&'static str],
    pub allowed_attributes: &'static [&'static str],
    pub allowed_style_properties: &'static [&'static str],
    pub allowed_url_schemes: &'static [&'static str],
    pub clean_content_tags: &'static [&'static str],
    pub allow_data_attributes: bool,
    pub allowed_uri_pattern: Regex,
}

impl Default for SanitizeConfig {
    fn default() -> Self {
        Self {
            allowed_tags: ALLOWED_TAGS,
            allowed_attributes: ALLOWED_ATTRIBUTES,
            allowed_style_properties: ALLOWED_STYLE_PROPERTIES,
            allowed_url_schemes: ALLOWED_URL_SCHEMES,
            clean_content_tags: CLEAN_CONTENT_TAGS,
            allow_data_attributes: false,
            allowed_uri_pattern: Regex::new(ALLOWED_URI_PATTERN).unwrap(),
        }
    }
}

impl SanitizeConfig {
    /// Whether a URI-valued attribute may keep `value`.
    ///
    /// Whitespace and control characters are ignored, so `java\tscript:` is
    /// judged the way a browser would read it.
    pub fn is_allowed_uri(&self, value: &str) -> bool {
        let compact: String = value
            .chars()
            .filter(|c| !c.is_whitespace() && !c.is_control())
            .collect();
        self.allowed_uri_pattern.is_match(&compact)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headings_and_active_content_are_excluded() {
        for tag in [
            "h1", "h2", "h3", "h4", "h5", "h6", "script", "style", "iframe", "object", "embed",
        ] {
            assert!(!SANITIZE_CONFIG.allowed_tags.contains(&tag), "{tag} must not be allowed");
        }
    }

    #[test]
    fn rel_is_left_to_the_engine() {
        assert!(!SANITIZE_CONFIG.allowed_attributes.contains(&"rel"));
        assert!(!SANITIZE_CONFIG.allow_data_attributes);
    }

    #[test]
    fn uri_pattern_accepts_safe_schemes_and_relative() {
        for uri in [
            "https://example.com",
            "http://example.com/a?b=c",
            "mailto:help@example.com",
            "tel:+15551234",
            "/docs/faq",
            "#answer-3",
            "faq.html",
            "?q=1",
        ] {
            assert!(SANITIZE_CONFIG.is_allowed_uri(uri), "{uri} should be allowed");
        }
    }

    #[test]
    fn uri_pattern_rejects_script_schemes() {
        for uri in [
            "javascript:alert(1)",
            "JavaScript:alert(1)",
            " java\tscript:alert(1)",
            "vbscript:msgbox",
            "data:text/html;base64,PHNjcmlwdD4=",
        ] {
            assert!(!SANITIZE_CONFIG.is_allowed_uri(uri), "{uri} should be rejected");
        }
    }
}
