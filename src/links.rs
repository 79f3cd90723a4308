//! `nl links` and `nl backlinks` command runners.

use anyhow::{anyhow, bail, Result};
use notelink_core::links::suggest_links_for;
use notelink_core::store::NoteStore;
use notelink_core::wikilink;

use crate::config::Config;
use crate::sources;

pub async fn run_links(config: &Config, note_id: &str, json: bool) -> Result<()> {
    if !config.links.enabled {
        bail!("Link suggestion is disabled. Set [links] enabled = true in config.");
    }

    let store = sources::load_store(config)?;
    let suggestions = suggest_links_for(&store, note_id).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&suggestions)?);
        return Ok(());
    }

    if suggestions.is_empty() {
        println!("No link suggestions.");
        return Ok(());
    }

    println!("{:<40} {:<6} SUGGESTED LINK", "TARGET", "CONF");
    for s in &suggestions {
        println!(
            "{:<40} {:<6.2} {}",
            s.target_id,
            s.confidence,
            wikilink::create_wikilink(&s.target_title)
        );
    }
    Ok(())
}

pub async fn run_backlinks(config: &Config, note_id: &str) -> Result<()> {
    let store = sources::load_store(config)?;
    let note = store
        .get_note(note_id)
        .await?
        .ok_or_else(|| anyhow!("note not found: {}", note_id))?;
    let notes = store.list_notes().await?;

    let linking = wikilink::backlinks(&note, &notes);
    if linking.is_empty() {
        println!("No backlinks.");
        return Ok(());
    }

    for other in linking {
        println!("{}  {}", other.id, other.title);
    }
    Ok(())
}
