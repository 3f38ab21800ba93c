//! Config file loading.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::schema::WidgetConfig;

/// Load and parse the widget config from disk.
///
/// Returns `Ok(Default::default())` if the file doesn't exist.
pub fn load_config(path: &Path) -> Result<WidgetConfig> {
    if !path.exists() {
        debug!(path = %path.display(), "Config file does not exist; using defaults");
        return Ok(WidgetConfig::default());
    }

    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config = parse_config(&raw)
        .with_context(|| format!("Failed to parse config YAML at: {}", path.display()))?;

    info!(path = %path.display(), items = config.items.len(), "Loaded config");
    Ok(config)
}

/// Parse a YAML document; an empty document is the default config.
pub fn parse_config(raw: &str) -> Result<WidgetConfig> {
    if raw.trim().is_empty() {
        return Ok(WidgetConfig::default());
    }
    Ok(serde_yaml::from_str(raw)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = load_config(&dir.path().join("nope.yaml")).unwrap();
        assert!(cfg.items.is_empty());
    }

    #[test]
    fn loads_items_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "items:\n  - summary: Why?\n    content: Because.\n    format: text"
        )
        .unwrap();
        let cfg = load_config(file.path()).unwrap();
        assert_eq!(cfg.items.len(), 1);
        assert_eq!(cfg.items[0].summary, "Why?");
    }

    #[test]
    fn invalid_yaml_names_the_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "items: [unclosed").unwrap();
        let err = load_config(file.path()).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to parse config YAML"));
    }

    #[test]
    fn blank_document_is_default() {
        assert!(parse_config("  \n").unwrap().items.is_empty());
    }
}
