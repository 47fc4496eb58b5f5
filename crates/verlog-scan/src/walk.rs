//! Working-directory traversal producing the tracked file list.

use std::ffi::OsStr;
use std::path::Path;

use tracing::debug;
use walkdir::{DirEntry, WalkDir};

use crate::config::Config;
use crate::filter::{has_tracked_extension, should_ignore};

/// Collect the sorted relative paths of every tracked file under `root`.
///
/// A file is tracked when its extension is on the config allowlist and no
/// ignore pattern matches its relative path. The state directory named
/// `state_dir` at the root is pruned from the walk; a sibling that merely
/// shares the name as a prefix is still scanned. Unreadable entries are
/// skipped rather than failing the walk, and paths are returned with `/`
/// separators regardless of platform.
pub fn scan_workdir(root: &Path, config: &Config, state_dir: &str) -> Vec<String> {
    let mut files = Vec::new();
    let walker = WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_entry(|entry| !is_state_dir(entry, state_dir));

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                debug!(error = %err, "skipping unreadable entry");
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let name = match entry.file_name().to_str() {
            Some(name) => name,
            None => continue,
        };
        if !has_tracked_extension(name, &config.extensions) {
            continue;
        }
        let rel = match entry.path().strip_prefix(root) {
            Ok(rel) => rel,
            Err(_) => continue,
        };
        let rel = match rel.to_str() {
            Some(rel) => rel.replace('\\', "/"),
            None => continue,
        };
        if should_ignore(&rel, &config.ignore_patterns) {
            continue;
        }
        files.push(rel);
    }

    files.sort();
    files
}

/// The state directory itself: a directory with the reserved name sitting
/// directly under the walk root.
fn is_state_dir(entry: &DirEntry, state_dir: &str) -> bool {
    entry.depth() == 1 && entry.file_type().is_dir() && entry.file_name() == OsStr::new(state_dir)
}
