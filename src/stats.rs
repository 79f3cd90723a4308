//! Collection statistics.
//!
//! A quick summary of what was loaded: note, word and link counts plus a
//! per-tag breakdown. Used by `nl stats` to confirm the connectors picked
//! up what was expected.

use anyhow::Result;
use notelink_core::models::Note;
use notelink_core::store::NoteStore;
use notelink_core::wikilink;
use std::collections::BTreeMap;

use crate::config::Config;
use crate::sources;

/// Aggregate counts over a note collection.
#[derive(Debug, Default, PartialEq)]
pub struct CollectionStats {
    pub notes: usize,
    pub words: usize,
    pub reading_minutes: usize,
    pub wikilinks: usize,
    pub daily_notes: usize,
    pub tags: BTreeMap<String, usize>,
}

pub fn collect_stats(notes: &[Note]) -> CollectionStats {
    let mut stats = CollectionStats {
        notes: notes.len(),
        ..Default::default()
    };
    for note in notes {
        stats.words += note.word_count();
        stats.reading_minutes += note.reading_time();
        stats.wikilinks += wikilink::extract_wikilinks(&note.content).len();
        if note.is_daily_note {
            stats.daily_notes += 1;
        }
        for tag in &note.tags {
            *stats.tags.entry(tag.clone()).or_default() += 1;
        }
    }
    stats
}

/// Run the stats command: load every connector and print a summary.
pub async fn run_stats(config: &Config) -> Result<()> {
    let store = sources::load_store(config)?;
    let notes = store.list_notes().await?;
    let stats = collect_stats(&notes);

    println!("Notelink — Collection Stats");
    println!("===========================");
    println!();
    println!("  Notes:        {}", stats.notes);
    println!("  Daily notes:  {}", stats.daily_notes);
    println!("  Words:        {}", stats.words);
    println!("  Reading time: {} min", stats.reading_minutes);
    println!("  Wiki-links:   {}", stats.wikilinks);

    if !stats.tags.is_empty() {
        let mut by_count: Vec<(&String, &usize)> = stats.tags.iter().collect();
        by_count.sort_by(|a, b| b.1.cmp(a.1).then(a.0.cmp(b.0)));

        println!();
        println!("  By tag:");
        println!("  {:<24} {:>6}", "TAG", "NOTES");
        println!("  {}", "-".repeat(31));
        for (tag, count) in by_count {
            println!("  {:<24} {:>6}", tag, count);
        }
    }

    println!();
    Ok(())
}
