//! On-disk checkpoint state for verlog.
//!
//! Everything the tool persists lives under one state directory at the
//! tracked root: the fingerprint map, the version counter, per-file
//! changelogs, the snapshot mirror, and the resting place for deleted
//! files. [`CheckpointStore`] derives every path from the root; no module
//! reads the state directory through ambient globals, so tests can point a
//! store at any scratch directory.
//!
//! # Key Types
//!
//! - [`CheckpointStore`] -- Path layout of the state directory
//! - [`FingerprintMap`] -- Relative path -> content digest, persisted as `hashes.json`
//! - [`Version`] -- The one-decimal version counter (`version.txt`)
//! - [`SwapOutcome`] -- Result of the atomic snapshot mirror replacement

pub mod changelog;
pub mod error;
pub mod fingerprint;
pub mod fsio;
pub mod layout;
pub mod snapshot;
pub mod version;

pub use error::{StoreError, StoreResult};
pub use fingerprint::{
    fingerprint_file, is_sentinel, load_fingerprints, save_fingerprints, FingerprintMap,
};
pub use layout::{CheckpointStore, STATE_DIR};
pub use snapshot::{rebuild_mirror, relocate_deleted, RelocateOutcome, SwapOutcome};
pub use version::{bump_version, read_version, write_version, Version};
