//! In-memory [`NoteStore`] implementation.
//!
//! Notes live in a `Vec` behind `std::sync::RwLock`, so insertion order is
//! preserved and reads clone a consistent snapshot.

use std::sync::RwLock;

use anyhow::{anyhow, Result};
use async_trait::async_trait;

use crate::models::Note;

use super::NoteStore;

/// In-memory note collection used by the CLI and in tests.
pub struct InMemoryNoteStore {
    notes: RwLock<Vec<Note>>,
}

impl InMemoryNoteStore {
    pub fn new() -> Self {
        Self {
            notes: RwLock::new(Vec::new()),
        }
    }

    /// Build a store from notes, in order. Later duplicates replace earlier ones.
    pub fn from_notes(notes: impl IntoIterator<Item = Note>) -> Result<Self> {
        let store = Self::new();
        for note in notes {
            store.upsert_note(note)?;
        }
        Ok(store)
    }

    /// Insert a note, or replace the note with the same id in place.
    ///
    /// Returns `true` if an existing note was replaced.
    pub fn upsert_note(&self, note: Note) -> Result<bool> {
        let mut notes = self
            .notes
            .write()
            .map_err(|_| anyhow!("note store lock poisoned"))?;
        match notes.iter_mut().find(|n| n.id == note.id) {
            Some(existing) => {
                *existing = note;
                Ok(true)
            }
            None => {
                notes.push(note);
                Ok(false)
            }
        }
    }

    pub fn len(&self) -> usize {
        self.notes.read().map(|n| n.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for InMemoryNoteStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NoteStore for InMemoryNoteStore {
    async fn list_notes(&self) -> Result<Vec<Note>> {
        let notes = self
            .notes
            .read()
            .map_err(|_| anyhow!("note store lock poisoned"))?;
        Ok(notes.clone())
    }

    async fn get_note(&self, id: &str) -> Result<Option<Note>> {
        let notes = self
            .notes
            .read()
            .map_err(|_| anyhow!("note store lock poisoned"))?;
        Ok(notes.iter().find(|n| n.id == id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_list_preserves_insertion_order() {
        let store = InMemoryNoteStore::from_notes(vec![
            Note::new("b", "Bravo", ""),
            Note::new("a", "Alpha", ""),
            Note::new("c", "Charlie", ""),
        ])
        .unwrap();
        let ids: Vec<String> = store
            .list_notes()
            .await
            .unwrap()
            .into_iter()
            .map(|n| n.id)
            .collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
    }

    #[tokio::test]
    async fn test_upsert_replaces_in_place() {
        let store = InMemoryNoteStore::new();
        assert!(!store.upsert_note(Note::new("1", "First", "v1")).unwrap());
        assert!(!store.upsert_note(Note::new("2", "Second", "")).unwrap());
        assert!(store.upsert_note(Note::new("1", "First", "v2")).unwrap());

        assert_eq!(store.len(), 2);
        let notes = store.list_notes().await.unwrap();
        assert_eq!(notes[0].id, "1");
        assert_eq!(notes[0].content, "v2");
    }

    #[tokio::test]
    async fn test_get_note() {
        let store = InMemoryNoteStore::from_notes(vec![Note::new("1", "One", "")]).unwrap();
        assert_eq!(store.get_note("1").await.unwrap().unwrap().title, "One");
        assert!(store.get_note("missing").await.unwrap().is_none());
    }
}
