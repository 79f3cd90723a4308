//! Note collection abstraction.
//!
//! The [`NoteStore`] trait is the only thing the engines need from the
//! outside world: the full collection and lookup by id. Anything that can
//! produce notes (files on disk, a JSON export, a host process) implements
//! it, and the store-backed entry points in [`search`](crate::search) and
//! [`links`](crate::links) work against any of them.
//!
//! Implementations must be `Send + Sync` to work with async runtimes.

pub mod memory;

use anyhow::Result;
use async_trait::async_trait;

use crate::models::Note;

/// Read access to a note collection.
///
/// | Method | Purpose |
/// |--------|---------|
/// | [`list_notes`](NoteStore::list_notes) | Every note, in insertion order |
/// | [`get_note`](NoteStore::get_note) | A single note by id |
#[async_trait]
pub trait NoteStore: Send + Sync {
    /// Return a snapshot of every note in insertion order.
    ///
    /// The order is observable: search ties and link suggestions follow it.
    async fn list_notes(&self) -> Result<Vec<Note>>;

    /// Look up a note by id.
    async fn get_note(&self, id: &str) -> Result<Option<Note>>;
}
