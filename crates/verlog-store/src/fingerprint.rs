//! Content fingerprinting and the persisted fingerprint map.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::fsio;
use crate::layout::CheckpointStore;

/// Relative path -> content digest for every tracked file.
///
/// A `BTreeMap` keeps iteration (and the serialized `hashes.json`)
/// deterministically ordered.
pub type FingerprintMap = BTreeMap<String, String>;

/// Prefix of the sentinel digest assigned to unreadable files.
const SENTINEL_PREFIX: &str = "unreadable-";

/// Fingerprint a file's content with BLAKE3, as lowercase hex.
///
/// An unreadable file yields a stable sentinel derived from its base name
/// instead of an error, so one bad file never aborts a whole run. The
/// sentinel is identical across runs, which keeps an unreadable-but-stable
/// file from being reported as changed every time.
pub fn fingerprint_file(path: &Path) -> String {
    match fs::read(path) {
        Ok(bytes) => blake3::hash(&bytes).to_hex().to_string(),
        Err(err) => {
            debug!(path = %path.display(), error = %err, "unreadable file; using sentinel digest");
            let base = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            format!("{SENTINEL_PREFIX}{base}")
        }
    }
}

/// `true` when `digest` is an unreadable-file sentinel rather than a hash.
pub fn is_sentinel(digest: &str) -> bool {
    digest.starts_with(SENTINEL_PREFIX)
}

/// Load the persisted fingerprint map.
///
/// An absent or corrupt store reads as empty: the next checkpoint then
/// sees every tracked file as new, which re-establishes a baseline
/// instead of failing.
pub fn load_fingerprints(store: &CheckpointStore) -> FingerprintMap {
    let path = store.hashes_file();
    let text = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) => {
            debug!(path = %path.display(), error = %err, "no fingerprint store; starting empty");
            return FingerprintMap::new();
        }
    };
    match serde_json::from_str(&text) {
        Ok(map) => map,
        Err(err) => {
            debug!(path = %path.display(), error = %err, "corrupt fingerprint store; starting empty");
            FingerprintMap::new()
        }
    }
}

/// Persist the fingerprint map as the next run's "before" state.
///
/// This must stay the final write of a checkpoint: once the map is on
/// disk the run's changes are considered recorded.
pub fn save_fingerprints(store: &CheckpointStore, map: &FingerprintMap) -> StoreResult<()> {
    let body = serde_json::to_string_pretty(map)
        .map_err(|err| StoreError::Serialization(err.to_string()))?;
    fsio::write_with_parents(&store.hashes_file(), body.as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fingerprint_is_stable_for_same_content() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.txt");
        let b = dir.path().join("b.txt");
        fs::write(&a, "same content").unwrap();
        fs::write(&b, "same content").unwrap();
        assert_eq!(fingerprint_file(&a), fingerprint_file(&b));
    }

    #[test]
    fn fingerprint_differs_for_different_content() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.txt");
        fs::write(&a, "one").unwrap();
        let first = fingerprint_file(&a);
        fs::write(&a, "two").unwrap();
        assert_ne!(first, fingerprint_file(&a));
    }

    #[test]
    fn fingerprint_is_lowercase_hex() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.txt");
        fs::write(&a, "content").unwrap();
        let digest = fingerprint_file(&a);
        assert_eq!(digest.len(), 64);
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        assert!(!is_sentinel(&digest));
    }

    #[test]
    fn unreadable_file_gets_stable_sentinel() {
        let dir = tempfile::tempdir().unwrap();
        let gone = dir.path().join("sub").join("gone.txt");
        let digest = fingerprint_file(&gone);
        assert_eq!(digest, "unreadable-gone.txt");
        assert!(is_sentinel(&digest));
        // Stable across repeated attempts.
        assert_eq!(digest, fingerprint_file(&gone));
    }

    #[test]
    fn map_round_trips_through_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = CheckpointStore::new(dir.path());
        let mut map = FingerprintMap::new();
        map.insert("b.txt".to_string(), "bbb".to_string());
        map.insert("a.txt".to_string(), "aaa".to_string());
        save_fingerprints(&store, &map).unwrap();
        assert_eq!(load_fingerprints(&store), map);
    }

    #[test]
    fn missing_store_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = CheckpointStore::new(dir.path());
        assert!(load_fingerprints(&store).is_empty());
    }

    #[test]
    fn corrupt_store_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = CheckpointStore::new(dir.path());
        fsio::write_with_parents(&store.hashes_file(), b"{ broken").unwrap();
        assert!(load_fingerprints(&store).is_empty());
    }

    #[test]
    fn serialized_map_is_sorted_by_path() {
        let dir = tempfile::tempdir().unwrap();
        let store = CheckpointStore::new(dir.path());
        let mut map = FingerprintMap::new();
        map.insert("z.txt".to_string(), "1".to_string());
        map.insert("a.txt".to_string(), "2".to_string());
        save_fingerprints(&store, &map).unwrap();
        let text = fs::read_to_string(store.hashes_file()).unwrap();
        assert!(text.find("a.txt").unwrap() < text.find("z.txt").unwrap());
    }
}
