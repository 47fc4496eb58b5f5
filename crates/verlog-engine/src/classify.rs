//! Change classification between two fingerprint maps.

use verlog_store::FingerprintMap;

/// Files added, changed, and deleted since the last checkpoint.
///
/// The three lists are disjoint and sorted; a path present in either map
/// lands in exactly one of them or is unchanged.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChangeSet {
    /// Present now, unknown at the last checkpoint.
    pub new_files: Vec<String>,
    /// Present in both, with a different fingerprint.
    pub changed: Vec<String>,
    /// Known at the last checkpoint, gone now.
    pub deleted: Vec<String>,
}

impl ChangeSet {
    /// `true` when nothing changed.
    pub fn is_empty(&self) -> bool {
        self.new_files.is_empty() && self.changed.is_empty() && self.deleted.is_empty()
    }

    /// Total number of classified paths.
    pub fn len(&self) -> usize {
        self.new_files.len() + self.changed.len() + self.deleted.len()
    }
}

/// Compare the persisted "before" map against the current fingerprints.
pub fn classify(before: &FingerprintMap, current: &FingerprintMap) -> ChangeSet {
    let mut changes = ChangeSet::default();
    for (path, digest) in current {
        match before.get(path) {
            None => changes.new_files.push(path.clone()),
            Some(old) if old != digest => changes.changed.push(path.clone()),
            Some(_) => {}
        }
    }
    for path in before.keys() {
        if !current.contains_key(path) {
            changes.deleted.push(path.clone());
        }
    }
    changes
}
