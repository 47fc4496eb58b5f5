//! Working-directory scanner for verlog.
//!
//! Decides which files are tracked: walks the working directory, keeps
//! files whose extension is on the configured allowlist, and drops paths
//! matching the configured ignore patterns. The tool's own state directory
//! is never scanned.
//!
//! # Key Types
//!
//! - [`Config`] -- Extension allowlist and ignore patterns (`config.json`)
//! - [`scan_workdir`] -- Sorted relative paths of every tracked file

pub mod config;
pub mod filter;
pub mod walk;

pub use config::Config;
pub use filter::{has_tracked_extension, should_ignore};
pub use walk::scan_workdir;
