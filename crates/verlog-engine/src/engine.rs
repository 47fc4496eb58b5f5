//! The checkpoint engine: init, status, update, show.

use std::fs;

use chrono::Local;
use tracing::{debug, info, warn};

use verlog_diff::{render_summary, unified_diff};
use verlog_scan::{scan_workdir, Config};
use verlog_store::{
    bump_version, changelog, fingerprint_file, fsio, is_sentinel, load_fingerprints, read_version,
    rebuild_mirror, relocate_deleted, save_fingerprints, write_version, CheckpointStore,
    FingerprintMap, RelocateOutcome, StoreError, SwapOutcome, Version, STATE_DIR,
};

use crate::classify::classify;
use crate::error::{EngineError, EngineResult};
use crate::report::{
    FileOutcome, InitReport, ShowReport, StatusReport, UpdateOutcome, UpdateReport,
};

/// Changelog body for a newly tracked file.
const NEW_FILE_BODY: &str = "New file added.\n";
/// Changelog body for a deleted file.
const DELETED_BODY: &str = "File was deleted.\n";
/// Changelog body when a changed file has no mirror copy to diff against.
const DIFF_SKIPPED_BODY: &str = "File changed (diff skipped)\n";

/// Timestamp format shared by every changelog entry of one run.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// The checkpoint engine, bound to one store.
///
/// Operations re-derive everything from the working directory and the
/// store on each call; the engine itself holds no mutable state.
pub struct Engine {
    store: CheckpointStore,
}

impl Engine {
    /// Create an engine operating on the given store.
    pub fn new(store: CheckpointStore) -> Self {
        Self { store }
    }

    /// The store this engine reads and writes.
    pub fn store(&self) -> &CheckpointStore {
        &self.store
    }

    /// Start tracking the working directory.
    ///
    /// Creates the state layout, writes the default config when none
    /// exists, mirrors every tracked file into the snapshot, opens each
    /// file's changelog with its header line, and persists the
    /// fingerprint map together with version 0.0. A file that cannot be
    /// mirrored is skipped and reported, not fatal.
    pub fn init(&self) -> EngineResult<InitReport> {
        if self.store.is_initialized() {
            return Err(EngineError::AlreadyInitialized(
                self.store.state_dir().display().to_string(),
            ));
        }
        for dir in [
            self.store.snapshot_dir(),
            self.store.changelog_dir(),
            self.store.deleted_dir(),
        ] {
            fs::create_dir_all(&dir).map_err(StoreError::from)?;
        }
        let config_path = self.store.config_file();
        if !config_path.exists() {
            let body = serde_json::to_string_pretty(&Config::default())
                .map_err(|err| StoreError::Serialization(err.to_string()))?;
            fsio::write_with_parents(&config_path, body.as_bytes()).map_err(StoreError::from)?;
        }

        let mut fingerprints = FingerprintMap::new();
        let mut outcomes = Vec::new();
        for rel in self.tracked_files() {
            let src = self.store.workdir_path(&rel);
            if let Err(err) = fsio::copy_with_parents(&src, &self.store.snapshot_path(&rel)) {
                warn!(rel = %rel, error = %err, "could not mirror file; leaving it untracked");
                outcomes.push(FileOutcome::skipped(rel.as_str(), format!("could not mirror: {err}")));
                continue;
            }
            fingerprints.insert(rel.clone(), fingerprint_file(&src));
            changelog::append(&self.store, &rel, &changelog::original_header(&rel))?;
            outcomes.push(FileOutcome::ok(rel.as_str()));
        }
        save_fingerprints(&self.store, &fingerprints)?;
        write_version(&self.store, Version::ZERO)?;
        info!(tracked = fingerprints.len(), "initialized");

        Ok(InitReport { version: Version::ZERO, tracked: fingerprints.len(), outcomes })
    }

    /// Classify changes since the last checkpoint without writing
    /// anything.
    pub fn status(&self) -> EngineResult<StatusReport> {
        if !self.store.is_initialized() {
            return Err(EngineError::NotInitialized);
        }
        let before = load_fingerprints(&self.store);
        let (current, outcomes) = self.fingerprint_live_files();
        Ok(StatusReport { changes: classify(&before, &current), outcomes })
    }

    /// Take a checkpoint of the working directory.
    ///
    /// When nothing changed this is a no-op. Otherwise the version is
    /// bumped, a changelog entry is appended for every affected file,
    /// deleted files' last content moves to the deleted store, the
    /// snapshot mirror is atomically replaced, and the fingerprint map is
    /// persisted last. If the mirror replacement does not commit, the
    /// fingerprints are left untouched so the next run sees the same
    /// changes again.
    pub fn update(&self) -> EngineResult<UpdateOutcome> {
        if !self.store.is_initialized() {
            return Err(EngineError::NotInitialized);
        }
        let before = load_fingerprints(&self.store);
        let (current, mut outcomes) = self.fingerprint_live_files();
        let changes = classify(&before, &current);
        if changes.is_empty() {
            debug!("no changes detected");
            return Ok(UpdateOutcome::NoChanges);
        }

        let version = bump_version(&self.store)?;
        let timestamp = Local::now().format(TIMESTAMP_FORMAT).to_string();

        for rel in &changes.new_files {
            self.append_entry(rel, version, &timestamp, NEW_FILE_BODY, &mut outcomes);
        }
        for rel in &changes.changed {
            let mirror_copy = self.store.snapshot_path(rel);
            if mirror_copy.is_file() {
                let old_text = fsio::read_text_best_effort(&mirror_copy);
                let new_text = fsio::read_text_best_effort(&self.store.workdir_path(rel));
                let body = render_summary(&unified_diff(&old_text, &new_text));
                self.append_entry(rel, version, &timestamp, &body, &mut outcomes);
            } else {
                outcomes.push(FileOutcome::degraded(rel.as_str(), "no snapshot copy; diff skipped"));
                self.append_entry(rel, version, &timestamp, DIFF_SKIPPED_BODY, &mut outcomes);
            }
        }
        for rel in &changes.deleted {
            self.append_entry(rel, version, &timestamp, DELETED_BODY, &mut outcomes);
            match relocate_deleted(&self.store, rel) {
                RelocateOutcome::Preserved => {}
                RelocateOutcome::NothingToPreserve => {
                    outcomes.push(FileOutcome::degraded(rel.as_str(), "no snapshot copy to preserve"));
                }
                RelocateOutcome::Failed(reason) => {
                    outcomes.push(FileOutcome::degraded(rel.as_str(), reason));
                }
            }
        }

        if !self.store.snapshot_dir().is_dir() {
            return Err(EngineError::SnapshotMissing);
        }
        let live: Vec<String> = current.keys().cloned().collect();
        match rebuild_mirror(&self.store, &live) {
            SwapOutcome::Committed => {}
            SwapOutcome::Aborted(reason) | SwapOutcome::MirrorLost(reason) => {
                return Err(EngineError::SnapshotSwap(reason));
            }
        }
        save_fingerprints(&self.store, &current)?;
        info!(version = %version, tracked = current.len(), "checkpoint recorded");

        Ok(UpdateOutcome::Checkpointed(UpdateReport {
            version,
            changes,
            tracked: current.len(),
            outcomes,
        }))
    }

    /// Report the current version and tracked paths.
    ///
    /// A pure read: works on an uninitialized directory too, where it
    /// reports version 0.0 and no files.
    pub fn show(&self) -> EngineResult<ShowReport> {
        let version = read_version(&self.store)?;
        let tracked: Vec<String> = load_fingerprints(&self.store).into_keys().collect();
        Ok(ShowReport { version, tracked })
    }

    /// Scan the working directory with the persisted config.
    fn tracked_files(&self) -> Vec<String> {
        let config = Config::load_or_default(&self.store.config_file());
        scan_workdir(self.store.root(), &config, STATE_DIR)
    }

    /// Fingerprint every tracked file, collecting sentinel caveats.
    fn fingerprint_live_files(&self) -> (FingerprintMap, Vec<FileOutcome>) {
        let mut current = FingerprintMap::new();
        let mut outcomes = Vec::new();
        for rel in self.tracked_files() {
            let digest = fingerprint_file(&self.store.workdir_path(&rel));
            if is_sentinel(&digest) {
                outcomes.push(FileOutcome::degraded(
                    rel.as_str(),
                    "unreadable; classified by sentinel fingerprint",
                ));
            }
            current.insert(rel, digest);
        }
        (current, outcomes)
    }

    /// Append one version-stamped entry, downgrading failures to caveats.
    fn append_entry(
        &self,
        rel: &str,
        version: Version,
        timestamp: &str,
        body: &str,
        outcomes: &mut Vec<FileOutcome>,
    ) {
        let block = changelog::entry_block(version, timestamp, body);
        if let Err(err) = changelog::append(&self.store, rel, &block) {
            warn!(rel = %rel, error = %err, "changelog append failed");
            outcomes.push(FileOutcome::degraded(rel, format!("changelog append failed: {err}")));
        }
    }
}
