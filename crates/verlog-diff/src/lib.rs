//! Diff engine for verlog.
//!
//! Computes line-oriented unified diffs between two revisions of a file and
//! renders them as the compact, line-annotated summaries that go into
//! changelog entries.
//!
//! # Key Functions
//!
//! - [`unified_diff`] -- Canonical unified diff between two text blobs
//! - [`render_summary`] -- Changelog summary (`### Added` / `### Removed`) from a unified diff

pub mod render;
pub mod unified;

pub use render::{render_summary, NO_READABLE_DIFF};
pub use unified::unified_diff;
