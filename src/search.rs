//! `nl search`, `nl suggest`, and `nl filter` command runners.

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, Utc};
use notelink_core::filter::{filter_notes, DateRange, NoteFilter};
use notelink_core::models::SearchResult;
use notelink_core::search::{search_store, suggest_titles_from, SearchOptions};
use notelink_core::store::NoteStore;

use crate::config::Config;
use crate::sources;

/// CLI arguments of `nl filter`, before date parsing.
#[derive(Debug, Default)]
pub struct FilterArgs {
    pub title: Option<String>,
    pub content: Option<String>,
    pub tags: Vec<String>,
    pub folder: Option<String>,
    pub since: Option<String>,
    pub until: Option<String>,
    pub has_backlinks: Option<bool>,
    /// `key=value` pairs; values are read as JSON, falling back to a string.
    pub properties: Vec<(String, String)>,
}

pub async fn run_search(
    config: &Config,
    query: &str,
    limit: Option<usize>,
    tags: Vec<String>,
    folders: Vec<String>,
    json: bool,
) -> Result<()> {
    let store = sources::load_store(config)?;
    let opts = SearchOptions {
        limit: limit.or(config.search.default_limit),
        tag_filter: tags,
        folder_filter: folders,
        ..Default::default()
    };

    let results = search_store(&store, query, &opts).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    if results.is_empty() {
        println!("No results.");
        return Ok(());
    }

    for (i, r) in results.iter().enumerate() {
        print_result(i + 1, r);
    }

    Ok(())
}

fn print_result(rank: usize, r: &SearchResult) {
    println!("{}. [{:.2}] {}", rank, r.relevance_score, r.title);
    println!("    id: {}", r.note_id);
    println!("    updated: {}", r.updated_at.format("%Y-%m-%dT%H:%M:%SZ"));
    if !r.content_snippet.is_empty() {
        let flat = r.content_snippet.replace('\n', " ");
        println!("    > {}", flat);
    }
    println!();
}

pub async fn run_suggest(config: &Config, prefix: &str) -> Result<()> {
    let store = sources::load_store(config)?;
    for title in suggest_titles_from(&store, prefix).await? {
        println!("{}", title);
    }
    Ok(())
}

pub async fn run_filter(config: &Config, args: FilterArgs, json: bool) -> Result<()> {
    let filter = build_filter(args)?;
    let store = sources::load_store(config)?;
    let notes = store.list_notes().await?;
    let found = filter_notes(&notes, &filter);

    if json {
        println!("{}", serde_json::to_string_pretty(&found)?);
        return Ok(());
    }

    if found.is_empty() {
        println!("No matching notes.");
        return Ok(());
    }

    println!("{:<40} {:<20} TITLE", "ID", "UPDATED");
    for note in found {
        println!(
            "{:<40} {:<20} {}",
            note.id,
            note.updated_at.format("%Y-%m-%d %H:%M"),
            note.title
        );
    }
    Ok(())
}

fn build_filter(args: FilterArgs) -> Result<NoteFilter> {
    let date_range = match (args.since.as_deref(), args.until.as_deref()) {
        (None, None) => None,
        (since, until) => Some(DateRange {
            start: match since {
                Some(s) => start_of_day(s)?,
                None => DateTime::<Utc>::MIN_UTC,
            },
            end: match until {
                Some(s) => end_of_day(s)?,
                None => DateTime::<Utc>::MAX_UTC,
            },
        }),
    };

    Ok(NoteFilter {
        title: args.title,
        content: args.content,
        tags: args.tags,
        folder_id: args.folder,
        date_range,
        has_backlinks: args.has_backlinks,
        properties: args
            .properties
            .into_iter()
            .map(|(k, v)| (k, property_value(&v)))
            .collect(),
    })
}

fn property_value(raw: &str) -> serde_json::Value {
    serde_json::from_str(raw).unwrap_or_else(|_| serde_json::Value::String(raw.to_string()))
}

fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", s))
}

fn start_of_day(s: &str) -> Result<DateTime<Utc>> {
    let date = parse_date(s)?;
    let start = date
        .and_hms_opt(0, 0, 0)
        .with_context(|| format!("Invalid date '{}'", s))?;
    Ok(start.and_utc())
}

fn end_of_day(s: &str) -> Result<DateTime<Utc>> {
    let date = parse_date(s)?;
    let end = date
        .and_hms_opt(23, 59, 59)
        .with_context(|| format!("Invalid date '{}'", s))?;
    Ok(end.and_utc())
}
