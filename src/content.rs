//! Content loading for file descriptions.

use crate::config::{ContentSource, FileSpec};
use crate::error::{Error, Result};
use log::debug;
use std::fs;
use std::path::{Component, Path, PathBuf};

/// Removes `.` and `..` components without touching the filesystem.
///
/// `..` at the root stays at the root; `..` at the start of a relative path
/// is kept.
pub fn normalize_path<P: AsRef<Path>>(path: P) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.as_ref().components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                let last = normalized.components().next_back();
                let has_parent = matches!(last, Some(Component::Normal(_)));
                let at_root = matches!(last, Some(Component::RootDir | Component::Prefix(_)));
                if has_parent {
                    normalized.pop();
                } else if !at_root {
                    normalized.push("..");
                }
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}

/// Resolves a relative template path against the templates directory if one
/// is configured, otherwise against the current working directory.
/// Absolute paths are kept as given apart from normalization.
pub fn resolve_template_path<P: AsRef<Path>>(path: P, templates_dir: Option<&Path>) -> PathBuf {
    let path = path.as_ref();
    let resolved = match templates_dir {
        Some(dir) => dir.join(path),
        None => std::env::current_dir().unwrap_or_default().join(path),
    };
    normalize_path(resolved)
}

/// Returns the literal content of a file description.
///
/// # Arguments
/// * `file` - File description
/// * `templates_dir` - Directory external content paths are relative to
///
/// # Errors
/// * `Error::ContentFileError` if the external content file cannot be read
pub fn load_content(file: &FileSpec, templates_dir: Option<&Path>) -> Result<String> {
    match file.source() {
        ContentSource::External(path) => {
            let full_path = resolve_template_path(path, templates_dir);
            debug!("Loading content of '{}' from {}", file.name, full_path.display());
            fs::read_to_string(&full_path)
                .map_err(|source| Error::ContentFileError { path: full_path, source })
        }
        ContentSource::Inline(content) => Ok(content.to_string()),
        ContentSource::Empty => Ok(String::new()),
    }
}
