//! Note retrieval by id.

use anyhow::{anyhow, Result};
use notelink_core::store::NoteStore;
use notelink_core::wikilink;

use crate::config::Config;
use crate::sources;

/// CLI entry point: load the store, find the note, print it to stdout.
pub async fn run_get(config: &Config, id: &str) -> Result<()> {
    let store = sources::load_store(config)?;
    let note = store
        .get_note(id)
        .await?
        .ok_or_else(|| anyhow!("note not found: {}", id))?;

    let tags: Vec<&str> = note.tags.iter().map(String::as_str).collect();
    let outgoing = wikilink::extract_wikilinks(&note.content);

    println!("--- Note ---");
    println!("id:           {}", note.id);
    println!("title:        {}", note.title);
    if let Some(ref folder) = note.folder_id {
        println!("folder:       {}", folder);
    }
    println!("tags:         {}", tags.join(", "));
    println!("created_at:   {}", note.created_at.format("%Y-%m-%dT%H:%M:%SZ"));
    println!("updated_at:   {}", note.updated_at.format("%Y-%m-%dT%H:%M:%SZ"));
    println!("words:        {}", note.word_count());
    println!("reading time: {} min", note.reading_time());
    println!("links:        {}", outgoing.join(", "));
    println!();

    println!("--- Content ---");
    println!("{}", note.content);

    Ok(())
}
