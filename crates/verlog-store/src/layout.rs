//! On-disk layout of the checkpoint state directory.

use std::path::{Path, PathBuf};

/// Name of the state directory created at the tracked root.
pub const STATE_DIR: &str = ".verlog";

/// Path layout of one checkpoint store, derived from the tracked root.
///
/// The store is a plain value handed to every operation. All the tool's
/// state sits under `<root>/.verlog/`:
///
/// ```text
/// .verlog/
///   version.txt     one-decimal version counter
///   hashes.json     fingerprint map of the last checkpoint
///   config.json     tracking configuration
///   snapshot/       full-content mirror of every tracked file
///   changelogs/     one append-only .log per tracked file
///   deleted/        last known content of deleted files
/// ```
#[derive(Clone, Debug)]
pub struct CheckpointStore {
    root: PathBuf,
}

impl CheckpointStore {
    /// Create a store rooted at the given working directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The tracked working directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The state directory under the root.
    pub fn state_dir(&self) -> PathBuf {
        self.root.join(STATE_DIR)
    }

    /// `true` once the state directory exists.
    pub fn is_initialized(&self) -> bool {
        self.state_dir().is_dir()
    }

    /// Directory holding the snapshot mirror.
    pub fn snapshot_dir(&self) -> PathBuf {
        self.state_dir().join("snapshot")
    }

    /// Directory holding per-file changelogs.
    pub fn changelog_dir(&self) -> PathBuf {
        self.state_dir().join("changelogs")
    }

    /// Directory holding the content of deleted files.
    pub fn deleted_dir(&self) -> PathBuf {
        self.state_dir().join("deleted")
    }

    /// The persisted fingerprint map.
    pub fn hashes_file(&self) -> PathBuf {
        self.state_dir().join("hashes.json")
    }

    /// The persisted version counter.
    pub fn version_file(&self) -> PathBuf {
        self.state_dir().join("version.txt")
    }

    /// The tracking configuration.
    pub fn config_file(&self) -> PathBuf {
        self.state_dir().join("config.json")
    }

    /// Absolute path of a tracked file in the working directory.
    pub fn workdir_path(&self, rel: &str) -> PathBuf {
        self.root.join(rel)
    }

    /// Mirror copy of a tracked file inside the snapshot.
    pub fn snapshot_path(&self, rel: &str) -> PathBuf {
        self.snapshot_dir().join(rel)
    }

    /// Changelog document of a tracked file.
    pub fn changelog_path(&self, rel: &str) -> PathBuf {
        self.changelog_dir().join(format!("{rel}.log"))
    }

    /// Resting place of a deleted file's last content.
    pub fn deleted_path(&self, rel: &str) -> PathBuf {
        self.deleted_dir().join(rel)
    }
}
