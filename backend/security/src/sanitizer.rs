//! Allow-list HTML sanitizer over `ammonia`.

use std::borrow::Cow;
use std::collections::{HashMap, HashSet};
use std::panic::{self, AssertUnwindSafe};

use ammonia::{Builder, UrlRelative};
use faqkit_core::{ContentError, SanitizeEngine, describe_panic};
use tracing::debug;

use crate::policy::{SanitizeConfig, URI_ATTRIBUTES};

const ENGINE_NAME: &str = "ammonia";

/// HTML sanitizer built once from a [`SanitizeConfig`].
pub struct AmmoniaSanitizer {
    cleaner: Builder<'static>,
}

impl AmmoniaSanitizer {
    pub fn new(config: &SanitizeConfig) -> Self {
        let mut cleaner = Builder::empty();
        cleaner
            .tags(config.allowed_tags.iter().copied().collect())
            .clean_content_tags(config.clean_content_tags.iter().copied().collect())
            .tag_attributes(HashMap::new())
            .generic_attributes(config.allowed_attributes.iter().copied().collect())
            .url_schemes(config.allowed_url_schemes.iter().copied().collect())
            .url_relative(UrlRelative::PassThrough)
            .link_rel(Some("noopener noreferrer"))
            .strip_comments(true);

        if config.allowed_attributes.contains(&"style") {
            cleaner.filter_style_properties(
                config.allowed_style_properties.iter().copied().collect(),
            );
        }

        if config.allow_data_attributes {
            cleaner.generic_attribute_prefixes(HashSet::from(["data-"]));
        }

        let uri_policy = config.clone();
        cleaner.attribute_filter(move |element, attribute, value| {
            filter_attribute(&uri_policy, element, attribute, value)
        });

        Self { cleaner }
    }
}

impl Default for AmmoniaSanitizer {
    fn default() -> Self {
        Self::new(&crate::policy::SANITIZE_CONFIG)
    }
}

impl SanitizeEngine for AmmoniaSanitizer {
    fn name(&self) -> &str {
        ENGINE_NAME
    }

    fn sanitize(&self, html: &str) -> Result<String, ContentError> {
        if html.is_empty() {
            return Ok(String::new());
        }

        let cleaned =
            panic::catch_unwind(AssertUnwindSafe(|| self.cleaner.clean(html).to_string()))
                .map_err(|payload| {
                    ContentError::sanitize(ENGINE_NAME, describe_panic(payload.as_ref()))
                })?;

        debug!(
            input_len = html.len(),
            output_len = cleaned.len(),
            "Sanitized HTML"
        );
        Ok(cleaned)
    }
}

/// Per-attribute checks the engine's allow-lists cannot express.
fn filter_attribute<'u>(
    policy: &SanitizeConfig,
    element: &str,
    attribute: &str,
    value: &'u str,
) -> Option<Cow<'u, str>> {
    if URI_ATTRIBUTES.contains(&attribute) && !policy.is_allowed_uri(value) {
        return None;
    }
    // Only task-list checkboxes; no text fields or buttons.
    if element == "input" && attribute == "type" && !value.eq_ignore_ascii_case("checkbox") {
        return None;
    }
    Some(Cow::Borrowed(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clean(html: &str) -> String {
        AmmoniaSanitizer::default().sanitize(html).unwrap()
    }

    #[test]
    fn allowed_markup_is_unchanged() {
        assert_eq!(clean("<p>Hello</p>"), "<p>Hello</p>");
        assert_eq!(
            clean("<ul><li><strong>a</strong></li></ul>"),
            "<ul><li><strong>a</strong></li></ul>"
        );
    }

    #[test]
    fn script_is_removed_with_content() {
        let html = clean("<p>ok</p><script>alert(1)</script>");
        assert!(!html.contains("<script"));
        assert!(!html.contains("alert"));
        assert!(html.contains("<p>ok</p>"));
    }

    #[test]
    fn headings_are_unwrapped() {
        assert_eq!(clean("<h1>Title</h1>"), "Title");
    }

    #[test]
    fn event_handlers_are_stripped() {
        let html = clean(r#"<img src="a.png" onerror="alert(1)">"#);
        assert!(!html.contains("onerror"));
        assert!(html.contains(r#"src="a.png""#));
    }

    #[test]
    fn javascript_links_lose_href() {
        let html = clean(r#"<a href="javascript:alert(1)">x</a>"#);
        assert!(!html.contains("javascript"));
        assert!(html.contains(">x</a>"));
    }

    #[test]
    fn safe_links_get_rel() {
        let html = clean(r#"<a href="https://example.com" target="_blank">x</a>"#);
        assert!(html.contains(r#"href="https://example.com""#));
        assert!(html.contains(r#"rel="noopener noreferrer""#));
    }

    #[test]
    fn relative_links_pass_through() {
        let html = clean(r#"<a href="/faq#q1">x</a>"#);
        assert!(html.contains(r#"href="/faq#q1""#));
    }

    #[test]
    fn data_attributes_are_dropped() {
        let html = clean(r#"<div data-id="7" class="note">x</div>"#);
        assert!(!html.contains("data-id"));
        assert!(html.contains(r#"class="note""#));
    }

    #[test]
    fn data_attributes_pass_when_enabled() {
        let config = SanitizeConfig {
            allow_data_attributes: true,
            ..SanitizeConfig::default()
        };
        let html = AmmoniaSanitizer::new(&config)
            .sanitize(r#"<div data-id="7">x</div>"#)
            .unwrap();
        assert!(html.contains(r#"data-id="7""#));
    }

    #[test]
    fn table_layout_attributes_survive() {
        let html = clean(r#"<table><tr><th scope="col" colspan="2">h</th></tr></table>"#);
        assert!(html.contains(r#"scope="col""#));
        assert!(html.contains(r#"colspan="2""#));
    }

    #[test]
    fn iframes_are_removed() {
        let html = clean(r#"<iframe src="https://evil.example"></iframe><p>after</p>"#);
        assert!(!html.contains("iframe"));
        assert!(html.contains("<p>after</p>"));
    }

    #[test]
    fn only_checkbox_inputs_keep_type() {
        let html = clean(r#"<input type="checkbox" checked disabled><input type="password">"#);
        assert!(html.contains(r#"type="checkbox""#));
        assert!(!html.contains("password"));
    }

    #[test]
    fn empty_input() {
        assert_eq!(clean(""), "");
    }
}
