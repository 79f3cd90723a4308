//! Structured note filtering ("advanced search").
//!
//! Unlike [`search`](crate::search::search), filtering does not rank: it
//! returns every note satisfying all the set criteria, in collection order.

use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

use crate::models::Note;
use crate::wikilink;

/// Inclusive `updated_at` window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DateRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl DateRange {
    pub fn contains(&self, ts: DateTime<Utc>) -> bool {
        self.start <= ts && ts <= self.end
    }
}

/// Criteria for [`filter_notes`]. Unset fields match everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NoteFilter {
    /// Case-insensitive substring of the title.
    pub title: Option<String>,
    /// Case-insensitive substring of the content.
    pub content: Option<String>,
    /// Every tag must be present on the note.
    pub tags: Vec<String>,
    /// Exact folder id.
    pub folder_id: Option<String>,
    pub date_range: Option<DateRange>,
    /// `Some(true)` keeps only notes some other note links to with
    /// `[[Title]]`; `Some(false)` keeps only notes nothing links to.
    pub has_backlinks: Option<bool>,
    /// Every key must be present on the note with an equal value.
    pub properties: BTreeMap<String, serde_json::Value>,
}

impl NoteFilter {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Notes in `notes` matching every criterion in `filter`.
pub fn filter_notes<'a>(notes: &'a [Note], filter: &NoteFilter) -> Vec<&'a Note> {
    let title = filter.title.as_deref().map(str::to_lowercase);
    let content = filter.content.as_deref().map(str::to_lowercase);

    notes
        .iter()
        .filter(|n| {
            title
                .as_deref()
                .map_or(true, |t| n.title.to_lowercase().contains(t))
        })
        .filter(|n| {
            content
                .as_deref()
                .map_or(true, |c| n.content.to_lowercase().contains(c))
        })
        .filter(|n| filter.tags.iter().all(|t| n.tags.contains(t)))
        .filter(|n| {
            filter
                .folder_id
                .as_ref()
                .map_or(true, |f| n.folder_id.as_ref() == Some(f))
        })
        .filter(|n| {
            filter
                .properties
                .iter()
                .all(|(k, v)| n.properties.get(k) == Some(v))
        })
        .filter(|n| filter.date_range.map_or(true, |r| r.contains(n.updated_at)))
        .filter(|n| {
            filter
                .has_backlinks
                .map_or(true, |want| !wikilink::backlinks(n, notes).is_empty() == want)
        })
        .collect()
}
