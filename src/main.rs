//! # Notelink CLI (`nl`)
//!
//! Search a note collection and find notes that should link to each other.
//!
//! ## Usage
//!
//! ```bash
//! nl --config ./config/nl.toml <command>
//! ```
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `nl sources` | List configured connectors and their health |
//! | `nl search "<query>"` | Ranked substring search over titles and content |
//! | `nl suggest <prefix>` | Autocomplete note titles |
//! | `nl filter` | Structured filter by title, content, tags, folder, dates, backlinks, properties |
//! | `nl links <id>` | Suggest wiki-links for a note |
//! | `nl backlinks <id>` | List notes that link to a note |
//! | `nl get <id>` | Print a note with its derived metrics |
//! | `nl stats` | Summarize the loaded collection |
//!
//! Logging goes to stderr and is controlled with `RUST_LOG`
//! (e.g. `RUST_LOG=notelink=debug`).

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use notelink::search::FilterArgs;
use notelink::{config, get, links, search, sources, stats};

/// Notelink CLI — local search and link suggestion for a note collection.
///
/// All commands accept a `--config` flag pointing to a TOML configuration
/// file that declares where notes are loaded from.
#[derive(Parser)]
#[command(
    name = "nl",
    about = "Notelink — local search and link suggestion for a note collection",
    version
)]
struct Cli {
    /// Path to configuration file (TOML).
    #[arg(long, global = true, default_value = "./config/nl.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand)]
enum Commands {
    /// List configured note connectors and whether they are reachable.
    Sources,

    /// Search notes by title and content.
    ///
    /// Title matches rank above content-only matches; equal ranks keep
    /// collection order. Queries shorter than two characters return nothing.
    Search {
        /// The search query string.
        query: String,

        /// Maximum number of results to return.
        #[arg(long)]
        limit: Option<usize>,

        /// Only include notes carrying this tag (repeatable; all must match).
        #[arg(long = "tag")]
        tags: Vec<String>,

        /// Only include notes in this folder (repeatable; any may match).
        #[arg(long = "folder")]
        folders: Vec<String>,

        /// Print results as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Autocomplete note titles from a 2–9 character prefix.
    Suggest {
        prefix: String,
    },

    /// Filter notes by structured criteria.
    Filter {
        /// Case-insensitive title substring.
        #[arg(long)]
        title: Option<String>,

        /// Case-insensitive content substring.
        #[arg(long)]
        content: Option<String>,

        /// Required tag (repeatable; all must match).
        #[arg(long = "tag")]
        tags: Vec<String>,

        /// Exact folder id.
        #[arg(long)]
        folder: Option<String>,

        /// Only notes updated on or after this date (YYYY-MM-DD).
        #[arg(long)]
        since: Option<String>,

        /// Only notes updated on or before this date (YYYY-MM-DD).
        #[arg(long)]
        until: Option<String>,

        /// `true` for notes something links to, `false` for orphans.
        #[arg(long)]
        has_backlinks: Option<bool>,

        /// Required property as `KEY=VALUE` (repeatable). VALUE is parsed as
        /// JSON when possible, otherwise compared as a string.
        #[arg(long = "property", value_parser = parse_key_val)]
        properties: Vec<(String, String)>,

        /// Print matching notes as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Suggest wiki-links for a note based on titles it mentions.
    Links {
        /// Note id.
        id: String,

        /// Print suggestions as JSON.
        #[arg(long)]
        json: bool,
    },

    /// List notes linking to a note with `[[Title]]`.
    Backlinks {
        /// Note id.
        id: String,
    },

    /// Print a note by id.
    Get {
        /// Note id.
        id: String,
    },

    /// Show collection statistics.
    Stats,
}

fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let pos = s
        .find('=')
        .ok_or_else(|| format!("invalid KEY=VALUE: no '=' found in '{}'", s))?;
    Ok((s[..pos].to_string(), s[pos + 1..].to_string()))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let cfg = config::load_config(&cli.config)?;

    match cli.command {
        Commands::Sources => {
            sources::list_sources(&cfg)?;
        }
        Commands::Search {
            query,
            limit,
            tags,
            folders,
            json,
        } => {
            search::run_search(&cfg, &query, limit, tags, folders, json).await?;
        }
        Commands::Suggest { prefix } => {
            search::run_suggest(&cfg, &prefix).await?;
        }
        Commands::Filter {
            title,
            content,
            tags,
            folder,
            since,
            until,
            has_backlinks,
            properties,
            json,
        } => {
            let args = FilterArgs {
                title,
                content,
                tags,
                folder,
                since,
                until,
                has_backlinks,
                properties,
            };
            search::run_filter(&cfg, args, json).await?;
        }
        Commands::Links { id, json } => {
            links::run_links(&cfg, &id, json).await?;
        }
        Commands::Backlinks { id } => {
            links::run_backlinks(&cfg, &id).await?;
        }
        Commands::Get { id } => {
            get::run_get(&cfg, &id).await?;
        }
        Commands::Stats => {
            stats::run_stats(&cfg).await?;
        }
    }

    Ok(())
}
