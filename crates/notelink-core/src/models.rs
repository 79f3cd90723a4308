//! Core data models shared by the search and link suggestion engines.
//!
//! Notes are owned by whatever store supplies them; the engines only read
//! borrowed snapshots and produce the result types defined here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Average reading speed used for [`Note::reading_time`], in words per minute.
pub const WORDS_PER_MINUTE: usize = 200;

/// A titled, tagged text document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub tags: BTreeSet<String>,
    #[serde(default)]
    pub folder_id: Option<String>,
    #[serde(default)]
    pub is_daily_note: bool,
    /// Free-form key/value metadata attached by the editor.
    #[serde(default)]
    pub properties: BTreeMap<String, serde_json::Value>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Note {
    /// Create an untagged note with both timestamps set to now.
    pub fn new(id: impl Into<String>, title: impl Into<String>, content: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            title: title.into(),
            content: content.into(),
            tags: BTreeSet::new(),
            folder_id: None,
            is_daily_note: false,
            properties: BTreeMap::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_tags<I, T>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_property(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.properties.insert(key.into(), value);
        self
    }

    pub fn with_folder(mut self, folder_id: impl Into<String>) -> Self {
        self.folder_id = Some(folder_id.into());
        self
    }

    /// Number of whitespace-separated words in the content.
    pub fn word_count(&self) -> usize {
        self.content.split_whitespace().count()
    }

    /// Estimated reading time in whole minutes, rounded up.
    pub fn reading_time(&self) -> usize {
        self.word_count().div_ceil(WORDS_PER_MINUTE)
    }
}

/// Which field of a note a [`SearchMatch`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchField {
    Title,
    Content,
}

/// A highlighted match position inside a search result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchMatch {
    pub field: MatchField,
    pub start: usize,
    pub end: usize,
    pub text: String,
}

/// A note ranked against a query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub note_id: String,
    pub title: String,
    /// Prefix excerpt of the note content.
    pub content_snippet: String,
    /// `1.0` for a title match, `0.5` for a content-only match.
    pub relevance_score: f64,
    /// Match positions. Not populated by the substring engine.
    pub matches: Vec<SearchMatch>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A proposed link from one note to another whose title it mentions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkSuggestion {
    pub source_id: String,
    pub target_id: String,
    pub target_title: String,
    pub confidence: f64,
}
