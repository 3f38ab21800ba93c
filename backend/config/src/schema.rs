//! FAQ widget configuration schema.
//!
//! Typed for serde YAML deserialization with camelCase keys, matching how the
//! widget's properties are named in the host application.

use std::path::PathBuf;

use faqkit_core::FaqItem;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Top-level config
// ---------------------------------------------------------------------------

/// Root configuration of one FAQ widget instance.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetConfig {
    /// Where items come from
    #[serde(default)]
    pub data_source: DataSource,

    /// Format for items that do not declare one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_format: Option<String>,

    /// Logging configuration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logging: Option<LoggingConfig>,

    /// Static question/answer pairs
    #[serde(default)]
    pub items: Vec<FaqItemConfig>,
}

/// Source of the FAQ items.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DataSource {
    /// Items listed in this configuration
    #[default]
    Static,
    /// Items loaded by the host from a data collection
    Database,
}

// ---------------------------------------------------------------------------
// Items
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaqItemConfig {
    pub summary: String,

    #[serde(default)]
    pub content: String,

    /// Raw format value; validated, never trusted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i64>,
}

// ---------------------------------------------------------------------------
// Logging
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggingConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub json: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory: Option<PathBuf>,
}

impl WidgetConfig {
    /// Static items as the pipeline sees them.
    ///
    /// Call after defaults are applied; missing formats and sort orders fall
    /// back to `html` and `0` here.
    pub fn faq_items(&self) -> Vec<FaqItem> {
        self.items
            .iter()
            .map(|item| FaqItem {
                summary: item.summary.clone(),
                content: item.content.clone(),
                format: item.format.clone().unwrap_or_else(|| "html".to_string()),
                sort_order: item.sort_order.unwrap_or_default(),
            })
            .collect()
    }
}
