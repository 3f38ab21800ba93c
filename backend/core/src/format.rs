use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ContentError;
use crate::event::ContentEvent;
use crate::traits::EventSink;

/// Declared format of a piece of answer content.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum ContentFormat {
    /// Raw HTML, sanitized before rendering
    #[default]
    Html,
    /// GitHub-flavored markdown, converted then sanitized
    Markdown,
    /// Plain text, escaped with line breaks preserved
    Text,
}

impl ContentFormat {
    pub const ALL: [ContentFormat; 3] = [Self::Html, Self::Markdown, Self::Text];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Markdown => "markdown",
            Self::Text => "text",
        }
    }

    /// Parse an untrusted format value, falling back to [`ContentFormat::Html`].
    ///
    /// Format values arrive from widget configuration or database rows, so
    /// anything unrecognized is reported once through `sink` and then handled
    /// as HTML, the most heavily sanitized path.
    pub fn normalize(raw: &str, sink: &dyn EventSink) -> Self {
        match raw.parse() {
            Ok(format) => format,
            Err(_) => {
                sink.emit(&ContentEvent::UnknownFormat {
                    format: raw.to_string(),
                });
                Self::Html
            }
        }
    }
}

impl FromStr for ContentFormat {
    type Err = ContentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "html" => Ok(Self::Html),
            "markdown" => Ok(Self::Markdown),
            "text" => Ok(Self::Text),
            other => Err(ContentError::UnknownFormat(other.to_string())),
        }
    }
}

impl fmt::Display for ContentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::NullSink;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Recorder(Mutex<Vec<ContentEvent>>);

    impl EventSink for Recorder {
        fn emit(&self, event: &ContentEvent) {
            self.0.lock().unwrap().push(event.clone());
        }
    }

    #[test]
    fn parses_known_tags() {
        for format in ContentFormat::ALL {
            assert_eq!(format.as_str().parse::<ContentFormat>().unwrap(), format);
        }
    }

    #[test]
    fn parse_is_case_sensitive() {
        let err = "HTML".parse::<ContentFormat>().unwrap_err();
        assert_eq!(err, ContentError::UnknownFormat("HTML".to_string()));
    }

    #[test]
    fn normalize_known_format_is_silent() {
        let sink = Recorder::default();
        assert_eq!(ContentFormat::normalize("markdown", &sink), ContentFormat::Markdown);
        assert!(sink.0.lock().unwrap().is_empty());
    }

    #[test]
    fn normalize_unknown_format_falls_back_to_html() {
        let sink = Recorder::default();
        assert_eq!(ContentFormat::normalize("wikitext", &sink), ContentFormat::Html);
        let events = sink.0.lock().unwrap();
        assert_eq!(
            events.as_slice(),
            &[ContentEvent::UnknownFormat {
                format: "wikitext".to_string()
            }]
        );
    }

    #[test]
    fn normalize_with_null_sink() {
        assert_eq!(ContentFormat::normalize("", &NullSink), ContentFormat::Html);
        assert_eq!(ContentFormat::normalize("text", &NullSink), ContentFormat::Text);
    }

    #[test]
    fn serde_uses_lowercase_tags() {
        let json = serde_json::to_string(&ContentFormat::Markdown).unwrap();
        assert_eq!(json, "\"markdown\"");
    }
}
