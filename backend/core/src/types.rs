use serde::{Deserialize, Serialize};

/// One question/answer pair as stored by the host application.
///
/// `format` is kept as the raw stored value; the pipeline normalizes it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FaqItem {
    pub summary: String,
    pub content: String,
    pub format: String,
    #[serde(default)]
    pub sort_order: i64,
}

impl FaqItem {
    pub fn new(
        summary: impl Into<String>,
        content: impl Into<String>,
        format: impl Into<String>,
        sort_order: i64,
    ) -> Self {
        Self {
            summary: summary.into(),
            content: content.into(),
            format: format.into(),
            sort_order,
        }
    }
}
