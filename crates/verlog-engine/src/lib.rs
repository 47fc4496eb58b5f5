//! Checkpoint engine for verlog.
//!
//! Ties the scanner, the diff engine, and the stores together into the
//! four user-facing operations: [`Engine::init`], [`Engine::status`],
//! [`Engine::update`], and [`Engine::show`]. The engine owns no state of
//! its own; everything it knows is derived from the working directory and
//! the checkpoint store on each call.
//!
//! # Key Types
//!
//! - [`Engine`] -- The operations, bound to one [`verlog_store::CheckpointStore`]
//! - [`ChangeSet`] -- New / changed / deleted paths since the last checkpoint
//! - [`UpdateOutcome`] -- Either `NoChanges` or a checkpoint report
//! - [`FileOutcome`] -- Per-file caveat (degraded or skipped handling)

pub mod classify;
pub mod engine;
pub mod error;
pub mod report;

pub use classify::{classify, ChangeSet};
pub use engine::Engine;
pub use error::{EngineError, EngineResult};
pub use report::{
    FileOutcome, InitReport, OutcomeKind, ShowReport, StatusReport, UpdateOutcome, UpdateReport,
};
