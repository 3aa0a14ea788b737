//! cherry-git: git plumbing for cherry-tri-state.
//!
//! Repository discovery, revision resolution and the `reference..upstream`
//! log walk go through git2. The patch-equivalence check runs `git cherry`.

pub mod cli;
pub mod errors;
pub mod repo;
pub mod test_support;

pub use errors::GitError;
pub use repo::GitRepo;
