//! Dangerous-markup scanner: advisory warnings for raw HTML.
//!
//! Pattern checks on raw text, not a parse. The sanitizer enforces; this
//! only tells the author.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

pub const SCRIPT_WARNING: &str = "Script tags are not allowed";
pub const EVENT_HANDLER_WARNING: &str = "Event handlers (onclick, onerror, etc.) are not allowed";
pub const JAVASCRIPT_URL_WARNING: &str = "JavaScript protocol in URLs is not allowed";
pub const DATA_URL_WARNING: &str = "Data URLs are only allowed for images";
pub const IFRAME_WARNING: &str = "Iframe tags are not allowed";
pub const OBJECT_EMBED_WARNING: &str = "Object and embed tags are not allowed";

static SCRIPT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<script\b[^>]*>.*?</script>").unwrap());
static EVENT_HANDLER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\bon\w+\s*=").unwrap());
static JAVASCRIPT_URL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)javascript:").unwrap());
static DATA_URL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)data:").unwrap());
static IFRAME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<iframe\b").unwrap());
static OBJECT_EMBED_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)<(?:object|embed)\b").unwrap());

/// Scan raw HTML for dangerous constructs.
///
/// Returns one message per check that fires, always in the same order.
pub fn validate_html(html: &str) -> Vec<String> {
    if html.is_empty() {
        return Vec::new();
    }

    let checks: [(bool, &str); 6] = [
        (SCRIPT_RE.is_match(html), SCRIPT_WARNING),
        (EVENT_HANDLER_RE.is_match(html), EVENT_HANDLER_WARNING),
        (JAVASCRIPT_URL_RE.is_match(html), JAVASCRIPT_URL_WARNING),
        (has_non_image_data_url(html), DATA_URL_WARNING),
        (IFRAME_RE.is_match(html), IFRAME_WARNING),
        (OBJECT_EMBED_RE.is_match(html), OBJECT_EMBED_WARNING),
    ];

    let warnings: Vec<String> = checks
        .iter()
        .filter(|(hit, _)| *hit)
        .map(|(_, msg)| msg.to_string())
        .collect();

    if !warnings.is_empty() {
        debug!(count = warnings.len(), "Dangerous markup detected");
    }
    warnings
}

/// `data:` anywhere that is not immediately followed by `image`.
fn has_non_image_data_url(html: &str) -> bool {
    DATA_URL_RE.find_iter(html).any(|m| {
        let rest = html[m.end()..].as_bytes();
        !(rest.len() >= 5 && rest[..5].eq_ignore_ascii_case(b"image"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_html_has_no_warnings() {
        let html = concat!(
            r#"<p>See <a href="https://example.com">docs</a>.</p>"#,
            r#"<img src="data:image/png;base64,AAAA">"#,
        );
        assert!(validate_html(html).is_empty());
    }

    #[test]
    fn test_empty_input() {
        assert!(validate_html("").is_empty());
    }

    #[test]
    fn test_script_tag() {
        let warnings = validate_html("<SCRIPT type=\"text/javascript\">\nalert(1)\n</script>");
        assert_eq!(warnings, vec![SCRIPT_WARNING]);
    }

    #[test]
    fn test_unterminated_script_is_not_a_script_element() {
        assert!(validate_html("<script>alert(1)").is_empty());
    }

    #[test]
    fn test_event_handler() {
        let warnings = validate_html(r#"<img src="x.png" OnError = "alert(1)">"#);
        assert_eq!(warnings, vec![EVENT_HANDLER_WARNING]);
    }

    #[test]
    fn test_event_handler_needs_word_boundary() {
        assert!(validate_html(r#"<div class="actions=">x</div>"#).is_empty());
    }

    #[test]
    fn test_javascript_protocol() {
        let warnings = validate_html(r#"<a href="JavaScript:void(0)">x</a>"#);
        assert_eq!(warnings, vec![JAVASCRIPT_URL_WARNING]);
    }

    #[test]
    fn test_data_url() {
        assert_eq!(
            validate_html(r#"<a href="data:text/html,hi">x</a>"#),
            vec![DATA_URL_WARNING]
        );
        assert!(validate_html(r#"<img src="DATA:IMAGE/gif;base64,R0l">"#).is_empty());
    }

    #[test]
    fn test_data_url_at_end_of_input() {
        assert_eq!(validate_html("data:"), vec![DATA_URL_WARNING]);
    }

    #[test]
    fn test_iframe_object_embed() {
        let warnings = validate_html(r#"<iframe src="x"></iframe><embed src="y">"#);
        assert_eq!(warnings, vec![IFRAME_WARNING, OBJECT_EMBED_WARNING]);
    }

    #[test]
    fn test_multiple_checks_keep_order() {
        let html = r#"<object data="x"></object><script>x</script><a onclick="javascript:x()">"#;
        assert_eq!(
            validate_html(html),
            vec![
                SCRIPT_WARNING,
                EVENT_HANDLER_WARNING,
                JAVASCRIPT_URL_WARNING,
                OBJECT_EMBED_WARNING,
            ]
        );
    }
}
