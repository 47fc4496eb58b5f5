//! The snapshot mirror: full-content baseline of every tracked file.
//!
//! The mirror under `snapshot/` holds the content each tracked file had at
//! the last checkpoint; it is what changed files are diffed against. At
//! the end of a checkpoint the whole mirror is replaced in one move.

use std::fs;

use tracing::{debug, warn};

use crate::fsio;
use crate::layout::CheckpointStore;

/// Result of an atomic mirror replacement.
///
/// Callers never observe a half-written mirror: either the new one is in
/// place, or the old one is untouched, or (worst case) the old one was
/// removed and the replacement could not be moved in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SwapOutcome {
    /// The mirror now matches the given file list.
    Committed,
    /// Staging failed before the old mirror was touched; it is intact.
    Aborted(String),
    /// The old mirror was removed but the rename failed; no mirror exists
    /// until the store is reinitialized.
    MirrorLost(String),
}

/// Outcome of preserving a deleted file's last content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RelocateOutcome {
    /// Content now lives in the deleted store.
    Preserved,
    /// There was no snapshot copy to preserve.
    NothingToPreserve,
    /// The copy into the deleted store failed.
    Failed(String),
}

/// Rebuild the snapshot mirror from the current working-directory files.
///
/// The replacement is staged in a fresh temporary directory inside the
/// state directory (same filesystem, so the final rename never crosses
/// devices) and only swapped in once every copy has succeeded.
pub fn rebuild_mirror(store: &CheckpointStore, files: &[String]) -> SwapOutcome {
    let staging = match tempfile::Builder::new()
        .prefix("snapshot-")
        .tempdir_in(store.state_dir())
    {
        Ok(dir) => dir,
        Err(err) => {
            return SwapOutcome::Aborted(format!("could not create staging directory: {err}"))
        }
    };

    for rel in files {
        let src = store.workdir_path(rel);
        let dst = staging.path().join(rel);
        if let Err(err) = fsio::copy_with_parents(&src, &dst) {
            return SwapOutcome::Aborted(format!("could not stage {rel}: {err}"));
        }
    }

    let mirror = store.snapshot_dir();
    if let Err(err) = fs::remove_dir_all(&mirror) {
        return SwapOutcome::Aborted(format!("could not remove old snapshot: {err}"));
    }
    let staged = staging.keep();
    if let Err(err) = fs::rename(&staged, &mirror) {
        warn!(
            from = %staged.display(),
            to = %mirror.display(),
            error = %err,
            "snapshot replacement failed after the old mirror was removed"
        );
        return SwapOutcome::MirrorLost(format!("could not move new snapshot into place: {err}"));
    }
    debug!(files = files.len(), "snapshot mirror rebuilt");
    SwapOutcome::Committed
}

/// Move a deleted file's snapshot copy into the deleted store.
///
/// Copy first, then remove: a failed copy leaves the mirror copy where it
/// was, and a failed removal leaves at worst a stale duplicate that the
/// next mirror rebuild drops anyway.
pub fn relocate_deleted(store: &CheckpointStore, rel: &str) -> RelocateOutcome {
    let from = store.snapshot_path(rel);
    if !from.is_file() {
        return RelocateOutcome::NothingToPreserve;
    }
    let to = store.deleted_path(rel);
    if let Err(err) = fsio::copy_with_parents(&from, &to) {
        warn!(rel = %rel, error = %err, "could not preserve deleted file content");
        return RelocateOutcome::Failed(format!("copy into deleted store failed: {err}"));
    }
    if let Err(err) = fs::remove_file(&from) {
        debug!(rel = %rel, error = %err, "stale snapshot copy left behind");
    }
    RelocateOutcome::Preserved
}
