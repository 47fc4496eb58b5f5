//! The one-decimal version counter.

use std::fmt;
use std::fs;
use std::str::FromStr;

use crate::error::StoreResult;
use crate::fsio;
use crate::layout::CheckpointStore;

/// A version number with exactly one fractional digit, as in `v1.3`.
///
/// Stored as a float but re-rounded to one decimal on every bump, so a
/// long chain of `+0.1` steps never drifts: after the hundredth bump the
/// counter reads exactly `10.0`, not `9.999...`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Version(f64);

impl Version {
    /// Version 0.0, the state of a freshly initialized store.
    pub const ZERO: Version = Version(0.0);

    /// The next version: +0.1, rounded back to one decimal.
    pub fn bump(self) -> Version {
        Version(((self.0 + 0.1) * 10.0 + 0.5).trunc() / 10.0)
    }

    /// Raw numeric value.
    pub fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

impl FromStr for Version {
    type Err = std::num::ParseFloatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<f64>().map(Version)
    }
}

/// Read the persisted version.
///
/// An absent file reads as 0.0, as does unparsable content; any other
/// I/O failure is surfaced.
pub fn read_version(store: &CheckpointStore) -> StoreResult<Version> {
    match fs::read_to_string(store.version_file()) {
        Ok(text) => Ok(text.parse().unwrap_or(Version::ZERO)),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Version::ZERO),
        Err(err) => Err(err.into()),
    }
}

/// Write the version as one-decimal text.
pub fn write_version(store: &CheckpointStore, version: Version) -> StoreResult<()> {
    fsio::write_with_parents(&store.version_file(), version.to_string().as_bytes())?;
    Ok(())
}

/// Advance the persisted version by one tick and return the new value.
pub fn bump_version(store: &CheckpointStore) -> StoreResult<Version> {
    let next = read_version(store)?.bump();
    write_version(store, next)?;
    Ok(next)
}
