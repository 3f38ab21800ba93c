use thiserror::Error;

/// Error type shared by the content pipeline and its engine adapters.
///
/// None of these ever reach a renderer: the pipeline turns engine errors into
/// escaped-text fallbacks and unknown formats into HTML.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContentError {
    #[error("unrecognized content format: {0:?}")]
    UnknownFormat(String),

    #[error("markdown engine '{engine}' failed: {message}")]
    Markdown { engine: String, message: String },

    #[error("sanitizer '{engine}' failed: {message}")]
    Sanitize { engine: String, message: String },
}

impl ContentError {
    pub fn markdown(engine: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Markdown {
            engine: engine.into(),
            message: message.into(),
        }
    }

    pub fn sanitize(engine: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Sanitize {
            engine: engine.into(),
            message: message.into(),
        }
    }
}

/// Best-effort text of a panic payload caught with `catch_unwind`.
pub fn describe_panic(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        msg.to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "engine panicked".to_string()
    }
}
