//! Structured Logger
//!
//! Wraps `tracing` with a console layer on stderr (plain or JSON) and an
//! optional daily-rolling NDJSON file, with environment-based level control.

use std::path::PathBuf;

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Options for [`init_logger`].
#[derive(Debug, Clone)]
pub struct LogSettings {
    /// Filter used when `RUST_LOG` is not set (e.g. "info", "faqkit=debug").
    pub level: String,
    /// Emit console lines as JSON instead of human-readable text.
    pub json: bool,
    /// Directory for `faqkit.log.YYYY-MM-DD` files; no file output if `None`.
    pub directory: Option<PathBuf>,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            directory: None,
        }
    }
}

/// Initialize the global structured logger.
///
/// Console output goes to stderr so rendered HTML on stdout stays clean.
/// Calling this more than once keeps the first subscriber.
pub fn init_logger(settings: &LogSettings) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&settings.level));

    let (plain_layer, json_layer) = if settings.json {
        let layer = fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true);
        (None, Some(layer))
    } else {
        let layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_ansi(true);
        (Some(layer), None)
    };

    let file_layer = settings.directory.as_ref().map(|dir| {
        let file_appender = RollingFileAppender::new(Rotation::DAILY, dir, "faqkit.log");
        fmt::layer()
            .json()
            .with_writer(file_appender)
            .with_ansi(false)
    });

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(plain_layer)
        .with(json_layer)
        .with(file_layer)
        .try_init();
}
