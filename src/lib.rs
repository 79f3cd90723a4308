//! # Notelink
//!
//! Local search and link suggestion for a markdown note collection.
//!
//! Notelink loads notes from one or more connectors into an in-memory
//! store and runs the engines from [`notelink_core`] over it: ranked
//! substring search, title autocomplete, structured filtering, and
//! title-mention link suggestions.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐   ┌────────────────┐   ┌─────────────────────┐
//! │  Connectors  │──▶│ InMemoryNote-  │──▶│   notelink-core     │
//! │  FS / JSON   │   │ Store          │   │ search/links/filter │
//! └──────────────┘   └────────────────┘   └──────────┬──────────┘
//!                                                    ▼
//!                                              ┌──────────┐
//!                                              │ CLI (nl) │
//!                                              └──────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! nl sources                    # check connector health
//! nl search "second brain"      # ranked search
//! nl suggest sec                # title autocomplete
//! nl links notes/brain.md       # suggest wiki-links for a note
//! nl backlinks notes/welcome.md # who links here
//! ```
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | TOML configuration parsing |
//! | [`connector_fs`] | Markdown directory connector |
//! | [`connector_json`] | JSON export connector |
//! | [`sources`] | Connector health and store loading |
//! | [`search`] | `search`, `suggest`, `filter` commands |
//! | [`links`] | `links`, `backlinks` commands |
//! | [`get`] | `get` command |
//! | [`stats`] | `stats` command |

pub mod config;
pub mod connector_fs;
pub mod connector_json;
pub mod get;
pub mod links;
pub mod search;
pub mod sources;
pub mod stats;
