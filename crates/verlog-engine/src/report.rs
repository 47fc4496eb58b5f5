//! Typed run reports: what each operation did.

use verlog_store::Version;

use crate::classify::ChangeSet;

/// How one file fared during a best-effort loop.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OutcomeKind {
    /// Handled normally.
    Ok,
    /// Handled, but with a caveat worth surfacing.
    Degraded(String),
    /// Not handled at all; the file is left out of this run.
    Skipped(String),
}

/// A per-file outcome attributed to its relative path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileOutcome {
    pub path: String,
    pub kind: OutcomeKind,
}

impl FileOutcome {
    pub fn ok(path: impl Into<String>) -> Self {
        Self { path: path.into(), kind: OutcomeKind::Ok }
    }

    pub fn degraded(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self { path: path.into(), kind: OutcomeKind::Degraded(reason.into()) }
    }

    pub fn skipped(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self { path: path.into(), kind: OutcomeKind::Skipped(reason.into()) }
    }

    /// `true` for anything other than clean handling.
    pub fn is_caveat(&self) -> bool {
        !matches!(self.kind, OutcomeKind::Ok)
    }
}

/// Result of `init`.
#[derive(Clone, Debug)]
pub struct InitReport {
    /// The version written, always 0.0.
    pub version: Version,
    /// Number of files now tracked.
    pub tracked: usize,
    /// One outcome per discovered file; `Skipped` files are not tracked.
    pub outcomes: Vec<FileOutcome>,
}

/// Result of `status`: the classification, plus per-file caveats.
#[derive(Clone, Debug)]
pub struct StatusReport {
    pub changes: ChangeSet,
    /// Caveats only; files fingerprinted cleanly are not listed.
    pub outcomes: Vec<FileOutcome>,
}

/// Result of `update`.
#[derive(Clone, Debug)]
pub enum UpdateOutcome {
    /// Nothing changed, nothing was written.
    NoChanges,
    /// A checkpoint was recorded.
    Checkpointed(UpdateReport),
}

/// What a recorded checkpoint contained.
#[derive(Clone, Debug)]
pub struct UpdateReport {
    /// The bumped version the checkpoint was recorded under.
    pub version: Version,
    /// The classification the checkpoint acted on.
    pub changes: ChangeSet,
    /// Number of files tracked after the checkpoint.
    pub tracked: usize,
    /// Caveats only; files processed cleanly appear in `changes` alone.
    pub outcomes: Vec<FileOutcome>,
}

/// Result of `show`.
#[derive(Clone, Debug)]
pub struct ShowReport {
    pub version: Version,
    /// Sorted tracked paths from the persisted fingerprint map.
    pub tracked: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caveat_covers_degraded_and_skipped() {
        assert!(!FileOutcome::ok("a").is_caveat());
        assert!(FileOutcome::degraded("a", "why").is_caveat());
        assert!(FileOutcome::skipped("a", "why").is_caveat());
    }

    #[test]
    fn constructors_keep_reasons() {
        let outcome = FileOutcome::degraded("sub/a.txt", "diff skipped");
        assert_eq!(outcome.path, "sub/a.txt");
        assert_eq!(outcome.kind, OutcomeKind::Degraded("diff skipped".to_string()));
    }
}
