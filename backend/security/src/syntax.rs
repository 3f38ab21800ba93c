//! Structural HTML checks for author-facing warnings.
//!
//! A linear regex scan with an explicit tag stack, not an HTML parser. It
//! points authors at unbalanced tags and broken attributes; the output never
//! gates rendering.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

/// Longest tag excerpt quoted in a warning before it is cut.
pub const MAX_TAG_PREVIEW_CHARS: usize = 50;

/// Elements that never take a closing tag.
pub const SELF_CLOSING_TAGS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param",
    "source", "track", "wbr",
];

/// Anything that looks like the start of a tag, up to its `>` or to the point
/// where another `<` begins.
static TAG_TOKEN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[a-zA-Z/!][^<>]*>?").unwrap());

/// Complete opening or closing tag with its name captured.
static TAG_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<(/?)([a-zA-Z][a-zA-Z0-9-]*)(?:\s[^<>]*)?/?>").unwrap());

/// `name=` followed by something that is neither a quote nor a word character,
/// whitespace included.
static MALFORMED_ATTR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"\s([\w:-]+=[^"'\w][^\s>]*)"#).unwrap());

/// An opening tag still waiting for its closing tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagStackEntry {
    /// Lowercased element name.
    pub tag_name: String,
    /// Byte offset of the opening tag in the input.
    pub position: usize,
}

/// Every substring of `html` that looks like a tag.
pub fn extract_tags(html: &str) -> Vec<&str> {
    TAG_TOKEN_RE.find_iter(html).map(|m| m.as_str()).collect()
}

/// Check raw HTML for unbalanced tags and broken attribute syntax.
///
/// All passes run; their warnings are concatenated in pass order.
pub fn validate_html_syntax(html: &str) -> Vec<String> {
    if html.is_empty() {
        return Vec::new();
    }

    let tags = extract_tags(html);
    let mut warnings = Vec::new();

    check_tag_tokens(&tags, &mut warnings);
    check_tag_balance(html, &mut warnings);
    check_malformed_attributes(&tags, &mut warnings);

    if !warnings.is_empty() {
        debug!(count = warnings.len(), "HTML syntax issues detected");
    }
    warnings
}

fn check_tag_tokens(tags: &[&str], warnings: &mut Vec<String>) {
    for tag in tags {
        if has_unclosed_quote(tag) {
            warnings.push(format!(
                "Unclosed attribute quote in tag: {}",
                truncate_tag(tag)
            ));
        }
        if !tag.ends_with('>') {
            warnings.push(format!("Unclosed tag bracket: {}", truncate_tag(tag)));
        }
    }
}

fn check_tag_balance(html: &str, warnings: &mut Vec<String>) {
    let mut stack: Vec<TagStackEntry> = Vec::new();

    for caps in TAG_NAME_RE.captures_iter(html) {
        let Some(whole) = caps.get(0) else { continue };
        let is_closing = &caps[1] == "/";
        let tag_name = caps[2].to_lowercase();

        if whole.as_str().ends_with("/>") || SELF_CLOSING_TAGS.contains(&tag_name.as_str()) {
            continue;
        }

        if !is_closing {
            stack.push(TagStackEntry {
                tag_name,
                position: whole.start(),
            });
            continue;
        }

        match stack.last() {
            None => warnings.push(format!("Orphaned closing tag: </{tag_name}>")),
            Some(top) if top.tag_name == tag_name => {
                stack.pop();
            }
            Some(top) => {
                warnings.push(format!(
                    "Mismatched tags: expected closing tag for <{}>, found </{tag_name}>",
                    top.tag_name
                ));
                // Resync on the first (outermost) entry with this name.
                if let Some(idx) = stack.iter().position(|entry| entry.tag_name == tag_name) {
                    stack.remove(idx);
                }
            }
        }
    }

    for entry in &stack {
        debug!(tag = %entry.tag_name, position = entry.position, "Unclosed tag");
        warnings.push(format!(
            "Unclosed tag: <{name}> is missing closing tag </{name}>",
            name = entry.tag_name
        ));
    }
}

fn check_malformed_attributes(tags: &[&str], warnings: &mut Vec<String>) {
    for tag in tags {
        for caps in MALFORMED_ATTR_RE.captures_iter(tag) {
            warnings.push(format!(
                "Malformed attribute syntax: {}",
                truncate_tag(&caps[1])
            ));
        }
    }
}

/// Whether an attribute value in `tag` opens a quote that never closes.
fn has_unclosed_quote(tag: &str) -> bool {
    let bytes = tag.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] != b'=' {
            i += 1;
            continue;
        }
        let mut j = i + 1;
        while j < bytes.len() && bytes[j].is_ascii_whitespace() {
            j += 1;
        }
        match bytes.get(j) {
            Some(&quote) if quote == b'"' || quote == b'\'' => {
                match bytes[j + 1..].iter().position(|&b| b == quote) {
                    Some(offset) => i = j + offset + 2,
                    None => return true,
                }
            }
            _ => i = j,
        }
    }
    false
}

/// Cut a tag excerpt to [`MAX_TAG_PREVIEW_CHARS`] characters plus `...`.
pub fn truncate_tag(tag: &str) -> String {
    match tag.char_indices().nth(MAX_TAG_PREVIEW_CHARS) {
        Some((cut, _)) => format!("{}...", &tag[..cut]),
        None => tag.to_string(),
    }
}
