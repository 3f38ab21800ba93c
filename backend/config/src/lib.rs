//! `faqkit-config` — FAQ widget configuration.
//!
//! Provides:
//! - Typed widget schema (data source, default format, logging, static items)
//! - YAML loading
//! - Default value application
//! - Validation with path-qualified messages

pub mod defaults;
pub mod io;
pub mod schema;
pub mod validation;

pub use defaults::apply_all_defaults;
pub use io::{load_config, parse_config};
pub use schema::{DataSource, FaqItemConfig, LoggingConfig, WidgetConfig};
pub use validation::{validate, ConfigValidationError, ValidationReport};

use anyhow::Result;
use std::path::Path;

/// Load, apply defaults, and validate a config file.
pub fn load_and_prepare(path: &Path) -> Result<WidgetConfig> {
    Ok(prepare(load_config(path)?))
}

/// Apply defaults to a loaded config and log its validation report.
///
/// Errors do not reject the config: the widget still renders whatever it can.
pub fn prepare(config: WidgetConfig) -> WidgetConfig {
    let config = apply_all_defaults(config);

    let report = validate(&config);
    for warning in &report.warnings {
        tracing::warn!(path = %warning.path, message = %warning.message, "Config warning");
    }
    for error in &report.errors {
        tracing::error!(path = %error.path, message = %error.message, "Config error");
    }

    config
}
