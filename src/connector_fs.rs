//! Filesystem note connector.
//!
//! Walks a directory of markdown/text files and turns each one into a
//! [`Note`]. The note id is the path relative to the root (with `/`
//! separators), the title is the first `# ` heading or else the file stem,
//! and both timestamps come from the file's modification time.

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use globset::{Glob, GlobSet, GlobSetBuilder};
use notelink_core::models::Note;
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use walkdir::WalkDir;

use crate::config::FilesystemConnectorConfig;

pub fn scan_filesystem(fs_config: &FilesystemConnectorConfig) -> Result<Vec<Note>> {
    let root = &fs_config.root;
    if !root.exists() {
        bail!(
            "Filesystem connector root does not exist: {}",
            root.display()
        );
    }

    let include_set = build_globset(&fs_config.include_globs)?;

    let mut default_excludes = vec![
        "**/.git/**".to_string(),
        "**/target/**".to_string(),
        "**/node_modules/**".to_string(),
    ];
    default_excludes.extend(fs_config.exclude_globs.clone());
    let exclude_set = build_globset(&default_excludes)?;

    let mut notes = Vec::new();

    let walker = WalkDir::new(root).follow_links(fs_config.follow_symlinks);
    for entry in walker {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let relative = path.strip_prefix(root).unwrap_or(path);
        let rel_str = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");

        if exclude_set.is_match(&rel_str) {
            continue;
        }

        if !include_set.is_match(&rel_str) {
            continue;
        }

        match file_to_note(path, &rel_str) {
            Ok(note) => notes.push(note),
            Err(e) => tracing::warn!(path = %path.display(), error = %e, "skipping unreadable note"),
        }
    }

    // Sort for deterministic ordering
    notes.sort_by(|a, b| a.id.cmp(&b.id));

    tracing::debug!(root = %root.display(), count = notes.len(), "filesystem scan complete");
    Ok(notes)
}

fn file_to_note(path: &Path, relative_path: &str) -> Result<Note> {
    let metadata = std::fs::metadata(path)?;
    let modified: DateTime<Utc> = metadata
        .modified()
        .unwrap_or(std::time::SystemTime::UNIX_EPOCH)
        .into();

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read note: {}", path.display()))?;

    let stem = path
        .file_stem()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    let title = heading_title(&content).unwrap_or(stem);

    let folder_id = Path::new(relative_path)
        .parent()
        .map(|p| p.to_string_lossy().to_string())
        .filter(|p| !p.is_empty());

    Ok(Note {
        id: relative_path.to_string(),
        title,
        content,
        tags: BTreeSet::new(),
        folder_id,
        is_daily_note: false,
        properties: BTreeMap::new(),
        created_at: modified,
        updated_at: modified,
    })
}

/// Text of the first level-one `# ` heading, if any.
fn heading_title(content: &str) -> Option<String> {
    content
        .lines()
        .find_map(|line| {
            line.strip_prefix("# ")
                .map(str::trim)
                .filter(|t| !t.is_empty())
        })
        .map(str::to_string)
}

fn build_globset(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        builder.add(Glob::new(pattern)?);
    }
    Ok(builder.build()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn fs_config(root: &Path) -> FilesystemConnectorConfig {
        FilesystemConnectorConfig {
            root: root.to_path_buf(),
            include_globs: vec!["**/*.md".to_string()],
            exclude_globs: vec!["drafts/**".to_string()],
            follow_symlinks: false,
        }
    }

    #[test]
    fn test_heading_title() {
        assert_eq!(
            heading_title("intro\n# Second Brain\nbody"),
            Some("Second Brain".to_string())
        );
        assert_eq!(heading_title("## Not level one\n#nospace"), None);
        assert_eq!(heading_title("#   \n"), None);
        assert_eq!(
            heading_title("#   \n# Real Title\n"),
            Some("Real Title".to_string())
        );
    }

    #[test]
    fn test_scan_filesystem() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path();
        fs::create_dir_all(root.join("work")).unwrap();
        fs::create_dir_all(root.join("drafts")).unwrap();
        fs::write(root.join("welcome.md"), "# Welcome to KB Pro\n\nStart here.").unwrap();
        fs::write(root.join("work/brain.md"), "No heading, just text.").unwrap();
        fs::write(root.join("drafts/wip.md"), "# Draft").unwrap();
        fs::write(root.join("ignored.txt"), "not included").unwrap();

        let notes = scan_filesystem(&fs_config(root)).unwrap();
        let ids: Vec<&str> = notes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["welcome.md", "work/brain.md"]);

        assert_eq!(notes[0].title, "Welcome to KB Pro");
        assert_eq!(notes[0].folder_id, None);
        assert_eq!(notes[1].title, "brain");
        assert_eq!(notes[1].folder_id.as_deref(), Some("work"));
    }

    #[test]
    fn test_missing_root() {
        let tmp = TempDir::new().unwrap();
        let err = scan_filesystem(&fs_config(&tmp.path().join("nope"))).unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }
}
