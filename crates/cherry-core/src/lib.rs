//! cherry-core: tri-state classification of `git cherry` results
//!
//! `git cherry` tells whether each commit on a reference branch has an
//! equivalent patch upstream. This library adds a third answer: a commit with
//! no equivalent patch, but whose title matches an upstream-only commit, is
//! reported as ambiguous.
//!
//! # Main Entry Points
//!
//! - [`classify`] - Classify and filter the commits of one branch pair
//! - [`ClassifierConfig`] - Output level and title stripping rule
//! - [`init_logging`] - Structured logging setup for binaries

pub mod classify;
pub mod config;
pub mod errors;
pub mod events;
pub mod logging;
pub mod oracle;
pub mod source;
pub mod state;
pub mod title;
pub mod upstream;

pub use classify::{
    Classification, ClassifiedRecord, CommitLog, PatchOracle, classify, classify_record,
};
pub use config::{CherryRequest, ClassifierConfig, DEFAULT_REFERENCE};
pub use errors::{CherryError, ClassifyError};
pub use oracle::{CherryRecord, RawState};
pub use state::{ParseStateError, State};
pub use title::{DEFAULT_TITLE_STRIP_PATTERN, TitleStripper, commit_title};
pub use upstream::UpstreamTitleSet;

// Re-export the repository handle so binaries need not depend on cherry-git
pub use cherry_git::GitRepo;

pub use logging::init_logging;
