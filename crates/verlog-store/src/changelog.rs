//! Append-only per-file changelog documents.
//!
//! Each tracked file gets one markdown log under `changelogs/`, mirroring
//! the file's relative path with a `.log` suffix. Entries are only ever
//! appended; nothing in the tool rewrites history.

use tracing::debug;

use crate::error::StoreResult;
use crate::fsio;
use crate::layout::CheckpointStore;
use crate::version::Version;

/// Header line opening a file's changelog when tracking begins.
pub fn original_header(rel: &str) -> String {
    format!("# {rel} — original v0.0\n")
}

/// A version-stamped entry block.
///
/// Every entry of one checkpoint run carries the same timestamp, so the
/// logs of all files touched by a run line up.
pub fn entry_block(version: Version, timestamp: &str, body: &str) -> String {
    format!("\n## v{version} – {timestamp}\n{body}")
}

/// Append raw text to the changelog of `rel`, creating it as needed.
pub fn append(store: &CheckpointStore, rel: &str, text: &str) -> StoreResult<()> {
    let path = store.changelog_path(rel);
    fsio::append_with_parents(&path, text)?;
    debug!(path = %path.display(), bytes = text.len(), "changelog append");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn header_names_the_file() {
        assert_eq!(original_header("notes/a.txt"), "# notes/a.txt — original v0.0\n");
    }

    #[test]
    fn entry_block_is_version_stamped() {
        let block = entry_block(Version::ZERO.bump(), "2026-08-22 10:30", "New file added.\n");
        assert_eq!(block, "\n## v0.1 – 2026-08-22 10:30\nNew file added.\n");
    }

    #[test]
    fn appends_accumulate_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let store = CheckpointStore::new(dir.path());
        append(&store, "a.txt", &original_header("a.txt")).unwrap();
        append(&store, "a.txt", &entry_block("0.1".parse().unwrap(), "t1", "first\n")).unwrap();
        append(&store, "a.txt", &entry_block("0.2".parse().unwrap(), "t2", "second\n")).unwrap();

        let text = fs::read_to_string(store.changelog_path("a.txt")).unwrap();
        assert!(text.starts_with("# a.txt — original v0.0\n"));
        let first = text.find("## v0.1").unwrap();
        let second = text.find("## v0.2").unwrap();
        assert!(first < second);
    }

    #[test]
    fn nested_paths_get_nested_logs() {
        let dir = tempfile::tempdir().unwrap();
        let store = CheckpointStore::new(dir.path());
        append(&store, "sub/deep/f.md", "entry\n").unwrap();
        assert!(store.changelog_path("sub/deep/f.md").is_file());
    }
}
