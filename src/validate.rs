//! Guide invariant checks and asset verification.

use crate::content::Guide;
use serde::Serialize;
use std::collections::BTreeSet;
use std::path::Path;

/// Machine-readable result of a `check` run.
#[derive(Serialize, Debug)]
pub struct CheckReport {
    pub schema_version: u32,
    pub content_source: String,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

/// Validate guide invariants, returning errors if any.
///
/// Errors are collected exhaustively in declaration order so a single run
/// reports every violation.
pub fn validate_guide(guide: &Guide) -> Option<Vec<String>> {
    let mut errors = Vec::new();

    if guide.title.trim().is_empty() {
        errors.push("title is required".to_string());
    }
    if guide.intro.trim().is_empty() {
        errors.push("intro is required".to_string());
    }
    require_entries("prerequisites", &guide.prerequisites, &mut errors);
    require_entries("preparation", &guide.preparation, &mut errors);

    if guide.steps.is_empty() {
        errors.push("steps must not be empty".to_string());
    }
    let mut seen_ids = BTreeSet::new();
    for (idx, step) in guide.steps.iter().enumerate() {
        if step.id.trim().is_empty() {
            errors.push(format!("steps[{idx}].id is required"));
        } else if !seen_ids.insert(step.id.as_str()) {
            errors.push(format!("steps[{idx}].id duplicates anchor '{}'", step.id));
        }
        if step.title.trim().is_empty() {
            errors.push(format!("steps[{idx}].title is required"));
        }
        if step.summary.trim().is_empty() {
            errors.push(format!("steps[{idx}].summary is required"));
        }
        if step.screenshot.trim().is_empty() {
            errors.push(format!("steps[{idx}].screenshot is required"));
        }
        if step.actions.is_empty() {
            errors.push(format!("steps[{idx}].actions must not be empty"));
        }
        for (action_idx, action) in step.actions.iter().enumerate() {
            if action.trim().is_empty() {
                errors.push(format!("steps[{idx}].actions[{action_idx}] is blank"));
            }
        }
    }

    if guide.tips.is_empty() {
        errors.push("tips must not be empty".to_string());
    }
    for (idx, tip) in guide.tips.iter().enumerate() {
        if tip.title.trim().is_empty() {
            errors.push(format!("tips[{idx}].title is required"));
        }
        if tip.detail.trim().is_empty() {
            errors.push(format!("tips[{idx}].detail is required"));
        }
    }

    if errors.is_empty() {
        None
    } else {
        Some(errors)
    }
}

/// Verify that each step's screenshot resolves to a file under `assets_root`.
///
/// Missing assets degrade to a broken-image placeholder in the rendered page,
/// so they are reported as warnings and never fail a render.
pub fn check_assets(guide: &Guide, assets_root: &Path) -> Vec<String> {
    let mut warnings = Vec::new();
    for step in &guide.steps {
        let rel = step.screenshot.trim_start_matches('/');
        let candidate = assets_root.join(rel);
        if !candidate.is_file() {
            warnings.push(format!(
                "screenshot missing for '{}': {}",
                step.id,
                candidate.display()
            ));
        }
    }
    warnings
}

fn require_entries(name: &str, entries: &[String], errors: &mut Vec<String>) {
    if entries.is_empty() {
        errors.push(format!("{name} must not be empty"));
    }
    for (idx, entry) in entries.iter().enumerate() {
        if entry.trim().is_empty() {
            errors.push(format!("{name}[{idx}] is blank"));
        }
    }
}
