//! Link suggestion: find other notes whose titles a note mentions.
//!
//! For each other note with a title of at least [`MIN_TITLE_CHARS`]
//! characters, the title is matched against the candidate's content as a
//! case-insensitive whole word. A mention that is not already an explicit
//! `[[Title]]` link or `(id)` reference becomes a [`LinkSuggestion`] with
//! the fixed [`SUGGESTION_CONFIDENCE`].
//!
//! Titles are escaped before being turned into a pattern, so `C++` or
//! `Notes (Draft)` cannot produce an invalid regex. Because the pattern is
//! anchored with `\b` on both ends, a title that starts or ends with a
//! non-word character (`(Draft)`) only matches when a word character sits
//! on the other side of that edge. `\b` is Unicode-aware, so a title
//! ending in a non-ASCII letter such as `Café` is still a whole word when
//! followed by a space.
//!
//! Content is lower-cased once per call and a target is only compiled into
//! a pattern when its lower-cased title occurs in it as a plain substring,
//! so a call over a large collection compiles a handful of patterns at most.

use anyhow::{anyhow, Result};
use regex::{Regex, RegexBuilder};

use crate::models::{LinkSuggestion, Note};
use crate::store::NoteStore;

/// Confidence attached to every suggestion.
pub const SUGGESTION_CONFIDENCE: f64 = 0.85;
/// Titles shorter than this (in characters) are never suggested.
pub const MIN_TITLE_CHARS: usize = 3;

/// Suggest links from `note` to every other note in `notes` it mentions by title.
///
/// Suggestions come out in collection order, at most one per target.
pub fn suggest_links(note: &Note, notes: &[Note]) -> Vec<LinkSuggestion> {
    let content_lower = note.content.to_lowercase();
    notes
        .iter()
        .filter(|target| target.id != note.id)
        .filter(|target| target.title.chars().count() >= MIN_TITLE_CHARS)
        .filter(|target| may_mention(&content_lower, &target.title))
        .filter(|target| mentions(&note.content, &target.title))
        .filter(|target| !is_already_linked(&note.content, target))
        .map(|target| LinkSuggestion {
            source_id: note.id.clone(),
            target_id: target.id.clone(),
            target_title: target.title.clone(),
            confidence: SUGGESTION_CONFIDENCE,
        })
        .collect()
}

/// Case-insensitive whole-word pattern for a literal title.
pub fn title_pattern(title: &str) -> Result<Regex, regex::Error> {
    RegexBuilder::new(&format!(r"\b{}\b", regex::escape(title)))
        .case_insensitive(true)
        .build()
}

/// Cheap substring check run before any pattern is built.
///
/// `content_lower` must already be lower-cased.
pub fn may_mention(content_lower: &str, title: &str) -> bool {
    content_lower.contains(&title.to_lowercase())
}

fn mentions(content: &str, title: &str) -> bool {
    match title_pattern(title) {
        Ok(re) => re.is_match(content),
        Err(e) => {
            tracing::warn!(title, error = %e, "skipping title that does not compile to a pattern");
            false
        }
    }
}

/// True if `content` already has `[[target.title]]` or `(target.id)`.
pub fn is_already_linked(content: &str, target: &Note) -> bool {
    content.contains(&format!("[[{}]]", target.title))
        || content.contains(&format!("({})", target.id))
}

/// Suggest links for the note with id `note_id` against every note in `store`.
pub async fn suggest_links_for<S: NoteStore + ?Sized>(
    store: &S,
    note_id: &str,
) -> Result<Vec<LinkSuggestion>> {
    let note = store
        .get_note(note_id)
        .await?
        .ok_or_else(|| anyhow!("note not found: {}", note_id))?;
    let notes = store.list_notes().await?;
    let suggestions = suggest_links(&note, &notes);
    tracing::debug!(note_id, count = suggestions.len(), "link suggestions computed");
    Ok(suggestions)
}
