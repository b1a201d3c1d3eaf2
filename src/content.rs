//! Guide content model and loading.
//!
//! The content is a fixed document: ordered collections consumed read-only by
//! the renderer. The built-in guide ships inside the binary; an alternate
//! guide with the same shape can be loaded from JSON.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Built-in tutorial content bundled at compile time.
const BUILTIN_GUIDE_JSON: &str = include_str!("../content/guide.json");

/// Complete content for one tutorial page.
#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct Guide {
    /// Short kicker line shown above the page title.
    pub kicker: String,
    pub title: String,
    pub intro: String,
    /// Rendered as the "What you need" checklist.
    pub prerequisites: Vec<String>,
    /// Rendered as the "Preparation checklist" bulleted list.
    pub preparation: Vec<String>,
    pub steps: Vec<Step>,
    pub tips: Vec<ProTip>,
    pub footer: String,
}

/// One unit of the tutorial.
///
/// Display order is declaration order; the visible step number is the 1-based
/// position in `steps`, never derived from `id`. The `id` is only the anchor.
#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct Step {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub actions: Vec<String>,
    /// Relative path to the step's screenshot asset.
    pub screenshot: String,
}

/// A titled advice card for the tips section.
#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct ProTip {
    pub title: String,
    pub detail: String,
}

/// Parse the bundled guide content.
pub fn builtin_guide() -> Result<Guide> {
    serde_json::from_str(BUILTIN_GUIDE_JSON).context("parse built-in guide content")
}

/// Load guide content from a JSON file with the built-in shape.
pub fn load_guide(path: &Path) -> Result<Guide> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("read guide content {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("parse guide content {}", path.display()))
}
