//! Config validation: checks with user-friendly messages.

use std::collections::HashMap;

use faqkit_core::ContentFormat;
use thiserror::Error;

use crate::schema::{DataSource, WidgetConfig};

/// A config validation finding with field path and message.
#[derive(Debug, Error)]
#[error("Config validation error at '{path}': {message}")]
pub struct ConfigValidationError {
    pub path: String,
    pub message: String,
}

/// All errors and warnings found in one pass.
#[derive(Debug, Default)]
pub struct ValidationReport {
    pub errors: Vec<ConfigValidationError>,
    pub warnings: Vec<ConfigValidationError>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    fn error(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ConfigValidationError {
            path: path.into(),
            message: message.into(),
        });
    }

    fn warn(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(ConfigValidationError {
            path: path.into(),
            message: message.into(),
        });
    }
}

/// Validate the config and return a report of all errors and warnings.
pub fn validate(config: &WidgetConfig) -> ValidationReport {
    let mut report = ValidationReport::default();
    validate_default_format(config, &mut report);
    validate_data_source(config, &mut report);
    validate_items(config, &mut report);
    report
}

fn validate_default_format(config: &WidgetConfig, report: &mut ValidationReport) {
    let Some(format) = &config.default_format else { return };
    if format.parse::<ContentFormat>().is_err() {
        report.warn(
            "defaultFormat",
            format!("Unknown format '{format}'; content will be rendered as html"),
        );
    }
}

fn validate_data_source(config: &WidgetConfig, report: &mut ValidationReport) {
    if config.data_source == DataSource::Database && !config.items.is_empty() {
        report.warn(
            "items",
            "Static items are ignored when dataSource is 'database'",
        );
    }
}

fn validate_items(config: &WidgetConfig, report: &mut ValidationReport) {
    let mut seen_orders: HashMap<i64, usize> = HashMap::new();

    for (i, item) in config.items.iter().enumerate() {
        let path = format!("items[{i}]");
        if item.summary.trim().is_empty() {
            report.error(format!("{path}.summary"), "Summary cannot be empty");
        }
        if let Some(format) = &item.format {
            if format.parse::<ContentFormat>().is_err() {
                report.warn(
                    format!("{path}.format"),
                    format!("Unknown format '{format}'; content will be rendered as html"),
                );
            }
        }
        if let Some(order) = item.sort_order {
            if let Some(first) = seen_orders.insert(order, i) {
                report.warn(
                    format!("{path}.sortOrder"),
                    format!("sortOrder {order} is also used by items[{first}]"),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::FaqItemConfig;

    fn item(summary: &str, format: &str, sort_order: i64) -> FaqItemConfig {
        FaqItemConfig {
            summary: summary.to_string(),
            content: "answer".to_string(),
            format: Some(format.to_string()),
            sort_order: Some(sort_order),
        }
    }

    #[test]
    fn empty_config_is_valid() {
        let report = validate(&WidgetConfig::default());
        assert!(report.is_valid(), "errors: {:?}", report.errors);
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn empty_summary_is_error() {
        let cfg = WidgetConfig {
            items: vec![item("  ", "html", 1)],
            ..Default::default()
        };
        let report = validate(&cfg);
        assert!(!report.is_valid());
        assert_eq!(report.errors[0].path, "items[0].summary");
    }

    #[test]
    fn unknown_formats_are_warnings() {
        let cfg = WidgetConfig {
            default_format: Some("wikitext".to_string()),
            items: vec![item("q", "rtf", 1)],
            ..Default::default()
        };
        let report = validate(&cfg);
        assert!(report.is_valid());
        let paths: Vec<_> = report.warnings.iter().map(|w| w.path.as_str()).collect();
        assert_eq!(paths, vec!["defaultFormat", "items[0].format"]);
    }

    #[test]
    fn duplicate_sort_orders_are_warnings() {
        let cfg = WidgetConfig {
            items: vec![item("a", "text", 10), item("b", "text", 20), item("c", "text", 10)],
            ..Default::default()
        };
        let report = validate(&cfg);
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].message.contains("items[0]"));
        assert_eq!(report.warnings[0].path, "items[2].sortOrder");
    }

    #[test]
    fn database_source_with_static_items_warns() {
        let cfg = WidgetConfig {
            data_source: DataSource::Database,
            items: vec![item("a", "html", 1)],
            ..Default::default()
        };
        let report = validate(&cfg);
        assert_eq!(report.warnings[0].path, "items");
    }
}
