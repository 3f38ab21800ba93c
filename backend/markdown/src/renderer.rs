//! Markdown renderer over `pulldown-cmark`.

use std::panic::{self, AssertUnwindSafe};

use faqkit_core::{ContentError, MarkdownEngine, describe_panic};
use linkify::{LinkFinder, LinkKind};
use pulldown_cmark::{
    CowStr, Event, LinkType, Options, Parser, Tag, TagEnd, TextMergeStream, html,
};
use tracing::debug;

const ENGINE_NAME: &str = "pulldown-cmark";

/// Rendering switches for [`PulldownRenderer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Render every soft break as `<br />`.
    pub hard_breaks: bool,
    /// Tables, strikethrough, task lists and GFM blockquote tags.
    pub gfm: bool,
    /// Turn bare URLs, `www.` hosts and email addresses into links.
    pub autolink: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            hard_breaks: true,
            gfm: true,
            autolink: true,
        }
    }
}

impl RenderOptions {
    fn parser_options(&self) -> Options {
        let mut options = Options::empty();
        if self.gfm {
            options.insert(Options::ENABLE_TABLES);
            options.insert(Options::ENABLE_STRIKETHROUGH);
            options.insert(Options::ENABLE_TASKLISTS);
            options.insert(Options::ENABLE_GFM);
        }
        options
    }
}

/// Markdown engine configured the way FAQ answers are written: GFM syntax
/// and line breaks honored.
#[derive(Debug, Clone, Default)]
pub struct PulldownRenderer {
    options: RenderOptions,
}

impl PulldownRenderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    fn push_html(&self, markdown: &str) -> String {
        let hard_breaks = self.options.hard_breaks;
        let parser = Parser::new_ext(markdown, self.options.parser_options());
        let events = TextMergeStream::new(parser).map(|event| match event {
            Event::SoftBreak if hard_breaks => Event::HardBreak,
            other => other,
        });

        let mut html_output = String::with_capacity(markdown.len() * 3 / 2);
        if self.options.autolink {
            html::push_html(&mut html_output, autolink(events).into_iter());
        } else {
            html::push_html(&mut html_output, events);
        }
        html_output
    }
}

/// Rewrite link-like text into autolink events.
///
/// Text inside links, images and code blocks is left alone.
fn autolink<'a>(events: impl Iterator<Item = Event<'a>>) -> Vec<Event<'a>> {
    let mut finder = LinkFinder::new();
    finder
        .kinds(&[LinkKind::Url, LinkKind::Email])
        .url_must_have_scheme(false);

    let mut out = Vec::new();
    let mut nested = 0usize;
    for event in events {
        match &event {
            Event::Start(Tag::Link { .. } | Tag::Image { .. } | Tag::CodeBlock(_)) => nested += 1,
            Event::End(TagEnd::Link | TagEnd::Image | TagEnd::CodeBlock) => {
                nested = nested.saturating_sub(1);
            }
            Event::Text(text) if nested == 0 => {
                push_linked_text(&finder, text, &mut out);
                continue;
            }
            _ => {}
        }
        out.push(event);
    }
    out
}

fn push_linked_text<'a>(finder: &LinkFinder, text: &str, out: &mut Vec<Event<'a>>) {
    let mut last = 0;
    for link in finder.links(text) {
        let Some((link_type, dest)) = link_target(link.as_str(), link.kind()) else {
            continue;
        };
        if link.start() > last {
            out.push(Event::Text(owned(&text[last..link.start()])));
        }
        out.push(Event::Start(Tag::Link {
            link_type,
            dest_url: dest.into(),
            title: CowStr::Borrowed(""),
            id: CowStr::Borrowed(""),
        }));
        out.push(Event::Text(owned(link.as_str())));
        out.push(Event::End(TagEnd::Link));
        last = link.end();
    }
    if last < text.len() {
        out.push(Event::Text(owned(&text[last..])));
    }
}

/// GFM rules: schemed URLs as-is, `www.` hosts over http, emails via mailto.
fn link_target(found: &str, kind: &LinkKind) -> Option<(LinkType, String)> {
    match kind {
        // the html writer adds the `mailto:` prefix itself
        LinkKind::Email => Some((LinkType::Email, found.to_string())),
        LinkKind::Url if found.contains("://") => Some((LinkType::Autolink, found.to_string())),
        LinkKind::Url if found.starts_with("www.") => {
            Some((LinkType::Autolink, format!("http://{found}")))
        }
        _ => None,
    }
}

fn owned<'a>(text: &str) -> CowStr<'a> {
    CowStr::from(text.to_string())
}

impl MarkdownEngine for PulldownRenderer {
    fn name(&self) -> &str {
        ENGINE_NAME
    }

    fn render(&self, markdown: &str) -> Result<String, ContentError> {
        if markdown.is_empty() {
            return Ok(String::new());
        }

        // A panic inside the parser must become a fallback, not a crash.
        let rendered = panic::catch_unwind(AssertUnwindSafe(|| self.push_html(markdown)))
            .map_err(|payload| {
                ContentError::markdown(ENGINE_NAME, describe_panic(payload.as_ref()))
            })?;

        debug!(
            input_len = markdown.len(),
            output_len = rendered.len(),
            "Rendered markdown"
        );
        Ok(rendered)
    }
}
