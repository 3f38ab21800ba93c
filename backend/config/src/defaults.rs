//! Config defaults: fills in values the widget assumes when unset.

use crate::schema::{LoggingConfig, WidgetConfig};

/// Format used when neither the item nor the widget declares one.
pub const DEFAULT_FORMAT: &str = "html";

/// Default log filter.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Gap between generated sort orders, leaving room to insert items.
pub const SORT_ORDER_STEP: i64 = 10;

/// Apply all defaults to a freshly loaded config.
pub fn apply_all_defaults(config: WidgetConfig) -> WidgetConfig {
    let config = apply_format_defaults(config);
    let config = apply_sort_order_defaults(config);
    apply_logging_defaults(config)
}

/// Widget default format, then per-item formats.
fn apply_format_defaults(mut config: WidgetConfig) -> WidgetConfig {
    let default_format = config
        .default_format
        .get_or_insert_with(|| DEFAULT_FORMAT.to_string())
        .clone();
    for item in &mut config.items {
        if item.format.is_none() {
            item.format = Some(default_format.clone());
        }
    }
    config
}

/// Items without a sort order get `(index + 1) * SORT_ORDER_STEP`.
fn apply_sort_order_defaults(mut config: WidgetConfig) -> WidgetConfig {
    for (index, item) in config.items.iter_mut().enumerate() {
        if item.sort_order.is_none() {
            item.sort_order = Some((index as i64 + 1) * SORT_ORDER_STEP);
        }
    }
    config
}

fn apply_logging_defaults(mut config: WidgetConfig) -> WidgetConfig {
    let logging = config.logging.get_or_insert_with(LoggingConfig::default);
    if logging.level.is_none() {
        logging.level = Some(DEFAULT_LOG_LEVEL.to_string());
    }
    if logging.json.is_none() {
        logging.json = Some(false);
    }
    config
}
