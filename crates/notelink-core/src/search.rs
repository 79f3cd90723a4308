//! Local full-text search over a note collection.
//!
//! The engine is a case-insensitive substring matcher with two-tier
//! scoring. It operates on a borrowed slice of notes with no I/O; the
//! store-backed wrappers at the bottom of this module fetch a snapshot from
//! a [`NoteStore`] and delegate here.
//!
//! # Scoring
//!
//! 1. Lower-case the query.
//! 2. A note matches if its lower-cased title or content contains the query.
//! 3. Title matches score [`TITLE_MATCH_SCORE`], content-only matches
//!    score [`CONTENT_MATCH_SCORE`].
//! 4. Sort by score (desc). The sort is stable, so equal scores keep the
//!    collection's order.
//! 5. Truncate to `limit`, if set.

use anyhow::Result;
use std::cmp::Ordering;

use crate::models::{Note, SearchResult};
use crate::store::NoteStore;

/// Score for a note whose title contains the query.
pub const TITLE_MATCH_SCORE: f64 = 1.0;
/// Score for a note that matches in its content only.
pub const CONTENT_MATCH_SCORE: f64 = 0.5;
/// Number of content characters kept in a snippet.
pub const SNIPPET_CHARS: usize = 150;
/// Appended to every snippet.
pub const SNIPPET_ELLIPSIS: &str = "...";
/// Maximum number of autocomplete titles.
pub const MAX_TITLE_SUGGESTIONS: usize = 5;
/// Shortest query (in characters) that [`search`] will run.
pub const MIN_QUERY_CHARS: usize = 2;
/// Longest prefix (in characters) that [`suggest_titles`] will complete.
pub const MAX_SUGGESTION_QUERY_CHARS: usize = 9;

/// Optional knobs for a search invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOptions {
    /// Maximum results to return. `None` returns every match.
    pub limit: Option<usize>,
    /// When false, results carry an empty snippet.
    pub include_content: bool,
    /// Only consider notes carrying every one of these tags.
    pub tag_filter: Vec<String>,
    /// Only consider notes in one of these folders.
    pub folder_filter: Vec<String>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            limit: None,
            include_content: true,
            tag_filter: Vec::new(),
            folder_filter: Vec::new(),
        }
    }
}

impl SearchOptions {
    fn admits(&self, note: &Note) -> bool {
        if !self.tag_filter.iter().all(|t| note.tags.contains(t)) {
            return false;
        }
        if self.folder_filter.is_empty() {
            return true;
        }
        note.folder_id
            .as_ref()
            .is_some_and(|f| self.folder_filter.contains(f))
    }
}

/// Rank `notes` against `query`.
///
/// Queries shorter than [`MIN_QUERY_CHARS`] characters return nothing.
/// Ties are broken by position in `notes`: earlier notes come first.
pub fn search(query: &str, notes: &[Note], opts: &SearchOptions) -> Vec<SearchResult> {
    if query.chars().count() < MIN_QUERY_CHARS {
        return Vec::new();
    }

    let q = query.to_lowercase();

    let mut results: Vec<SearchResult> = notes
        .iter()
        .filter(|note| opts.admits(note))
        .filter_map(|note| {
            let in_title = note.title.to_lowercase().contains(&q);
            if !in_title && !note.content.to_lowercase().contains(&q) {
                return None;
            }
            let relevance_score = if in_title {
                TITLE_MATCH_SCORE
            } else {
                CONTENT_MATCH_SCORE
            };
            let content_snippet = if opts.include_content {
                snippet(&note.content)
            } else {
                String::new()
            };
            Some(SearchResult {
                note_id: note.id.clone(),
                title: note.title.clone(),
                content_snippet,
                relevance_score,
                matches: Vec::new(),
                created_at: note.created_at,
                updated_at: note.updated_at,
            })
        })
        .collect();

    // sort_by is stable: equal scores keep collection order.
    results.sort_by(|a, b| {
        b.relevance_score
            .partial_cmp(&a.relevance_score)
            .unwrap_or(Ordering::Equal)
    });

    if let Some(limit) = opts.limit {
        results.truncate(limit);
    }

    tracing::debug!(query, matched = results.len(), "search complete");
    results
}

/// First [`SNIPPET_CHARS`] characters of `content` followed by [`SNIPPET_ELLIPSIS`].
pub fn snippet(content: &str) -> String {
    let mut s: String = content.chars().take(SNIPPET_CHARS).collect();
    s.push_str(SNIPPET_ELLIPSIS);
    s
}

/// Autocomplete: up to [`MAX_TITLE_SUGGESTIONS`] titles starting with `query`.
///
/// Matching is case-insensitive. Queries outside
/// `MIN_QUERY_CHARS..=MAX_SUGGESTION_QUERY_CHARS` characters return nothing.
pub fn suggest_titles(query: &str, notes: &[Note]) -> Vec<String> {
    let len = query.chars().count();
    if !(MIN_QUERY_CHARS..=MAX_SUGGESTION_QUERY_CHARS).contains(&len) {
        return Vec::new();
    }

    let q = query.to_lowercase();
    notes
        .iter()
        .filter(|n| n.title.to_lowercase().starts_with(&q))
        .map(|n| n.title.clone())
        .take(MAX_TITLE_SUGGESTIONS)
        .collect()
}

/// Run [`search`] against every note in `store`.
pub async fn search_store<S: NoteStore + ?Sized>(
    store: &S,
    query: &str,
    opts: &SearchOptions,
) -> Result<Vec<SearchResult>> {
    if query.chars().count() < MIN_QUERY_CHARS {
        return Ok(Vec::new());
    }
    let notes = store.list_notes().await?;
    Ok(search(query, &notes, opts))
}

/// Run [`suggest_titles`] against every note in `store`.
pub async fn suggest_titles_from<S: NoteStore + ?Sized>(
    store: &S,
    query: &str,
) -> Result<Vec<String>> {
    let notes = store.list_notes().await?;
    Ok(suggest_titles(query, &notes))
}
