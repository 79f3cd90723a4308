//! Wiki-link and block-reference parsing.
//!
//! Notes reference each other with `[[Title]]` wiki-links and reference
//! blocks with `((block-id))`. This module extracts both, builds new links,
//! and answers "which notes link here" for backlink views and filters.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::Note;

static WIKILINK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[\[([^\]]+)\]\]").expect("wikilink pattern is valid"));

static BLOCK_REF_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\(\(([^\)]+)\)\)").expect("block ref pattern is valid"));

/// Targets of every `[[...]]` link in `content`, in order of appearance.
pub fn extract_wikilinks(content: &str) -> Vec<&str> {
    WIKILINK_RE
        .captures_iter(content)
        .filter_map(|cap| cap.get(1).map(|m| m.as_str()))
        .collect()
}

/// Ids of every `((...))` block reference in `content`, in order of appearance.
pub fn extract_block_refs(content: &str) -> Vec<&str> {
    BLOCK_REF_RE
        .captures_iter(content)
        .filter_map(|cap| cap.get(1).map(|m| m.as_str()))
        .collect()
}

pub fn create_wikilink(title: &str) -> String {
    format!("[[{}]]", title)
}

/// Slug form of a title: trimmed, punctuation dropped, lower-cased, spaces as `-`.
pub fn sanitize_link_title(title: &str) -> String {
    title
        .trim()
        .chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, ' ' | '-' | '_'))
        .collect::<String>()
        .to_lowercase()
        .replace(' ', "-")
}

/// True if `content` contains a wiki-link whose target is exactly `title`.
pub fn links_to(content: &str, title: &str) -> bool {
    extract_wikilinks(content).iter().any(|t| *t == title)
}

/// Notes other than `note` that contain a `[[note.title]]` wiki-link.
///
/// Returned in collection order.
pub fn backlinks<'a>(note: &Note, notes: &'a [Note]) -> Vec<&'a Note> {
    notes
        .iter()
        .filter(|other| other.id != note.id && links_to(&other.content, &note.title))
        .collect()
}
