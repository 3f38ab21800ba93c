//! HTML escaping for untrusted text.

/// Escape the five HTML-significant characters.
///
/// The result renders as the literal input when placed in element content or
/// a quoted attribute. Not idempotent: `&amp;` escapes again to `&amp;amp;`.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Escape plain text and turn each `\n` into a `<br>` element.
pub fn text_to_html(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    escape_html(text).replace('\n', "<br>")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_significant_characters() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(escape_html(""), "");
        assert_eq!(text_to_html(""), "");
    }

    #[test]
    fn escaping_is_not_idempotent() {
        let once = escape_html("a & b");
        assert_eq!(once, "a &amp; b");
        assert_eq!(escape_html(&once), "a &amp;amp; b");
        assert_eq!(escape_html(&escape_html("plain")), "plain");
    }

    #[test]
    fn newlines_become_line_breaks() {
        assert_eq!(text_to_html("line one\nline two"), "line one<br>line two");
        assert_eq!(text_to_html("<b>\n\n"), "&lt;b&gt;<br><br>");
    }

    #[test]
    fn multibyte_text_passes_through() {
        assert_eq!(escape_html("café → <ok>"), "café → &lt;ok&gt;");
    }
}
