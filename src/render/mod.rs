//! Deterministic HTML renderer for guide content.
//!
//! Rendering stays content-driven: the guide collections are treated as
//! read-only inputs and the output is a single linear document, so identical
//! content always produces byte-identical markup. No I/O happens here; a
//! missing screenshot asset degrades in the browser rather than aborting the
//! render.

use crate::content::Guide;
use serde::Serialize;

mod format;

use format::{
    append_document_close, append_document_head, append_footer, append_header, append_step_section,
    append_tips_section, append_troubleshooting_section,
};

/// Rendering summary used for metadata and diagnostics.
#[derive(Serialize, Clone, Debug)]
pub struct RenderSummary {
    pub schema_version: u32,
    pub prerequisite_entries: usize,
    pub preparation_entries: usize,
    pub step_sections: usize,
    pub action_items: usize,
    pub tip_cards: usize,
    pub troubleshooting_entries: usize,
}

/// Rendered document plus a summary of its section counts.
pub struct RenderedGuide {
    pub html: String,
    pub summary: RenderSummary,
}

/// Render the guide into a complete HTML document.
pub fn render_guide(guide: &Guide) -> RenderedGuide {
    let mut out = String::new();
    append_document_head(&mut out, &guide.title);
    append_header(&mut out, guide);

    out.push_str("<section class=\"steps\">\n");
    for (idx, step) in guide.steps.iter().enumerate() {
        // Visible step number is the 1-based position, independent of the
        // step's anchor id.
        append_step_section(&mut out, idx + 1, step);
    }
    out.push_str("</section>\n");

    append_tips_section(&mut out, &guide.tips);
    let troubleshooting_entries = append_troubleshooting_section(&mut out);
    append_footer(&mut out, &guide.footer);
    append_document_close(&mut out);

    let action_items = guide.steps.iter().map(|step| step.actions.len()).sum();
    let summary = RenderSummary {
        schema_version: 1,
        prerequisite_entries: guide.prerequisites.len(),
        preparation_entries: guide.preparation.len(),
        step_sections: guide.steps.len(),
        action_items,
        tip_cards: guide.tips.len(),
        troubleshooting_entries,
    };

    RenderedGuide { html: out, summary }
}
