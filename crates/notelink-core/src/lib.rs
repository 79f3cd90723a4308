//! # Notelink Core
//!
//! Pure logic for Notelink: note models, local search, link suggestion,
//! wiki-link parsing, structured filtering, and the note store trait.
//!
//! This crate contains no tokio, filesystem I/O, or other native-only
//! dependencies. Every engine function takes a borrowed note slice and is
//! free of side effects; the `*_store` / `*_for` variants fetch that slice
//! from a [`store::NoteStore`] first.

pub mod filter;
pub mod links;
pub mod models;
pub mod search;
pub mod store;
pub mod wikilink;
