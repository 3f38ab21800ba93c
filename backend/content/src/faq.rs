use faqkit_core::{ContentFormat, FaqItem};
use serde::Serialize;
use tracing::debug;

use crate::pipeline::ContentPipeline;

/// An FAQ item ready for the accordion: safe HTML plus author warnings.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RenderedFaqItem {
    pub summary: String,
    pub html: String,
    pub format: ContentFormat,
    pub sort_order: i64,
    pub warnings: Vec<String>,
}

impl ContentPipeline {
    /// Render items in `sort_order` order (stable for equal orders).
    ///
    /// Each item's format is normalized once; warnings are computed for the
    /// format the item actually renders with.
    pub fn render_items(&self, items: &[FaqItem]) -> Vec<RenderedFaqItem> {
        let mut ordered: Vec<&FaqItem> = items.iter().collect();
        ordered.sort_by_key(|item| item.sort_order);

        let rendered: Vec<RenderedFaqItem> = ordered
            .into_iter()
            .map(|item| {
                let format = ContentFormat::normalize(&item.format, self.sink());
                RenderedFaqItem {
                    summary: item.summary.clone(),
                    html: self.process_as(&item.content, format),
                    format,
                    sort_order: item.sort_order,
                    warnings: self.warnings_as(&item.content, format),
                }
            })
            .collect();

        let flagged = rendered.iter().filter(|item| !item.warnings.is_empty()).count();
        debug!(items = rendered.len(), flagged, "Rendered FAQ items");
        rendered
    }
}
