//! JSON note connector.
//!
//! Reads a JSON array of notes, the shape the browser build keeps in local
//! storage. Stored word counts and reading times are ignored; they are
//! derived from the content instead.

use anyhow::{Context, Result};
use notelink_core::models::Note;

use crate::config::JsonConnectorConfig;

pub fn scan_json(json_config: &JsonConnectorConfig) -> Result<Vec<Note>> {
    let path = &json_config.path;
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read notes file: {}", path.display()))?;
    let notes = parse_notes(&raw)
        .with_context(|| format!("Failed to parse notes file: {}", path.display()))?;
    tracing::debug!(path = %path.display(), count = notes.len(), "json notes loaded");
    Ok(notes)
}

pub fn parse_notes(raw: &str) -> Result<Vec<Note>> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }
    Ok(serde_json::from_str(raw)?)
}
