//! Output publishing for rendered documents and metadata.
//!
//! Documents are written through a temp-file-then-rename step so a failed
//! write never leaves a truncated page behind.

use crate::render::RenderSummary;
use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

/// Metadata written alongside a rendered document.
#[derive(Serialize)]
pub struct Meta {
    pub schema_version: u32,
    pub generated_at_epoch_ms: u128,
    pub tool_name: String,
    pub tool_version: String,
    pub document_bytes: usize,
    pub render_summary: RenderSummary,
}

/// Build document metadata from a render summary.
pub fn build_meta(summary: RenderSummary, document_bytes: usize) -> Meta {
    let generated_at_epoch_ms = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|duration| duration.as_millis())
        .unwrap_or_default();
    Meta {
        schema_version: 1,
        generated_at_epoch_ms,
        tool_name: env!("CARGO_PKG_NAME").to_string(),
        tool_version: env!("CARGO_PKG_VERSION").to_string(),
        document_bytes,
        render_summary: summary,
    }
}

/// Publish a rendered document to `dest` atomically.
pub fn write_document(dest: &Path, html: &str) -> Result<()> {
    write_via_tmp(dest, html.as_bytes())?;
    tracing::info!(path = %dest.display(), bytes = html.len(), "wrote rendered document");
    Ok(())
}

/// Publish document metadata JSON to `dest`.
pub fn write_meta(dest: &Path, meta: &Meta) -> Result<()> {
    let json = serde_json::to_vec_pretty(meta).context("serialize document metadata")?;
    write_via_tmp(dest, &json)?;
    tracing::info!(path = %dest.display(), "wrote document metadata");
    Ok(())
}

fn write_via_tmp(dest: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = dest.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
        }
    }
    let file_name = dest
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("document");
    let tmp_path = dest
        .parent()
        .unwrap_or_else(|| Path::new("."))
        .join(format!(".{file_name}.tmp"));
    fs::write(&tmp_path, bytes).with_context(|| format!("write {}", tmp_path.display()))?;
    fs::rename(&tmp_path, dest).with_context(|| format!("publish {}", dest.display()))?;
    Ok(())
}
