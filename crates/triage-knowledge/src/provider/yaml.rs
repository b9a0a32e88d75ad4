use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{info, warn};
use walkdir::WalkDir;

use triage_core::errors::KnowledgeBaseError;
use triage_core::models::KnowledgeEntry;
use triage_core::traits::KnowledgeBaseProvider;
use triage_observability::events;

use super::collect_entries;

/// Knowledge base loaded from a directory tree of YAML files.
///
/// Each `*.yaml`/`*.yml` file holds one entry (a mapping) or several (a
/// sequence). Files are read in sorted path order, so when two files define
/// the same id the one that sorts first wins.
#[derive(Debug, Clone)]
pub struct YamlKnowledgeBase {
    root: PathBuf,
    name: String,
    entries: Vec<KnowledgeEntry>,
}

impl YamlKnowledgeBase {
    /// Load every entry under `root`.
    ///
    /// A missing directory is an empty knowledge base. Unreadable or
    /// malformed files and invalid entries are logged and skipped.
    pub fn load(root: impl AsRef<Path>) -> Result<Self, KnowledgeBaseError> {
        let root = root.as_ref().to_path_buf();
        let name = root.display().to_string();

        if !root.exists() {
            warn!(path = %name, "knowledge base directory does not exist, using an empty one");
            return Ok(Self {
                root,
                name,
                entries: Vec::new(),
            });
        }
        if !root.is_dir() {
            return Err(KnowledgeBaseError::NotADirectory { path: name });
        }
        if let Err(e) = fs::read_dir(&root) {
            return Err(match e.kind() {
                ErrorKind::PermissionDenied => KnowledgeBaseError::PermissionDenied { path: name },
                _ => KnowledgeBaseError::Io {
                    path: name,
                    reason: e.to_string(),
                },
            });
        }

        let mut candidates = Vec::new();
        let mut file_count = 0usize;
        for path in yaml_files(&root) {
            file_count += 1;
            candidates.extend(read_file(&path));
        }
        let entries = collect_entries(&name, candidates);
        info!(
            path = %name,
            files = file_count,
            entries = entries.len(),
            "knowledge base loaded"
        );

        Ok(Self {
            root,
            name,
            entries,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl KnowledgeBaseProvider for YamlKnowledgeBase {
    fn entries(&self) -> &[KnowledgeEntry] {
        &self.entries
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// YAML files below `root`, sorted, dotfiles and dot-directories skipped.
fn yaml_files(root: &Path) -> Vec<PathBuf> {
    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden(e.file_name()))
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                let item = e
                    .path()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default();
                events::item_skipped("knowledge base path", &item, &e.to_string());
                None
            }
        })
        .filter(|entry| entry.file_type().is_file() && is_yaml(entry.path()))
        .map(walkdir::DirEntry::into_path)
        .collect()
}

fn is_hidden(name: &std::ffi::OsStr) -> bool {
    name.to_str().is_some_and(|s| s.starts_with('.'))
}

fn is_yaml(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("yaml") || e.eq_ignore_ascii_case("yml"))
}

/// Entries of one file paired with their origin (`path` or `path[i]`).
fn read_file(path: &Path) -> Vec<(KnowledgeEntry, String)> {
    let origin = path.display().to_string();
    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            events::item_skipped("knowledge base file", &origin, &e.to_string());
            return Vec::new();
        }
    };
    let document: serde_yaml::Value = match serde_yaml::from_str(&content) {
        Ok(v) => v,
        Err(e) => {
            events::item_skipped("knowledge base file", &origin, &e.to_string());
            return Vec::new();
        }
    };

    let items: Vec<(serde_yaml::Value, String)> = match document {
        serde_yaml::Value::Sequence(items) => items
            .into_iter()
            .enumerate()
            .map(|(i, v)| (v, format!("{origin}[{i}]")))
            .collect(),
        serde_yaml::Value::Null => Vec::new(),
        other => vec![(other, origin)],
    };

    items
        .into_iter()
        .filter_map(|(value, origin)| match serde_yaml::from_value(value) {
            Ok(entry) => Some((entry, origin)),
            Err(e) => {
                events::item_skipped("knowledge entry", &origin, &e.to_string());
                None
            }
        })
        .collect()
}
