//! Repository handle that keeps git2 types inside this crate.
//!
//! Callers open a [`GitRepo`] once per run and query it with plain strings;
//! object ids come back as hex strings.

use std::path::Path;

use git2::{ErrorCode, Oid, Repository};
use tracing::{debug, info};

use crate::cli;
use crate::errors::GitError;

pub struct GitRepo {
    repo: Repository,
}

impl GitRepo {
    /// Open the repository containing `path`, traversing parent directories.
    ///
    /// Returns `GitError::NotInRepository` when no repository is found, and
    /// `GitError::Git2Error` for anything else (e.g. permission denied).
    pub fn discover(path: &Path) -> Result<Self, GitError> {
        match Repository::discover(path) {
            Ok(repo) => {
                debug!(
                    event = "git.repo.discovered",
                    path = %path.display(),
                    git_dir = %repo.path().display()
                );
                Ok(Self { repo })
            }
            Err(e) if e.code() == ErrorCode::NotFound => Err(GitError::NotInRepository {
                path: path.display().to_string(),
            }),
            Err(e) => Err(GitError::Git2Error { source: e }),
        }
    }

    /// Directory git commands should run in: the worktree, or the git dir
    /// itself for bare repositories.
    pub fn dir(&self) -> &Path {
        self.repo.workdir().unwrap_or_else(|| self.repo.path())
    }

    /// Resolve a revision expression to the full hex id of the commit it names.
    pub fn resolve_commit(&self, spec: &str) -> Result<String, GitError> {
        self.resolve_oid(spec).map(|oid| oid.to_string())
    }

    pub(crate) fn resolve_oid(&self, spec: &str) -> Result<Oid, GitError> {
        let invalid = |e: git2::Error| GitError::InvalidReference {
            reference: spec.to_string(),
            message: e.message().to_string(),
        };

        let commit = self
            .repo
            .revparse_single(spec)
            .and_then(|object| object.peel_to_commit())
            .map_err(invalid)?;

        debug!(
            event = "git.repo.reference_resolved",
            reference = spec,
            oid = %commit.id()
        );
        Ok(commit.id())
    }

    /// Full messages of every commit reachable from `upstream` but not from
    /// `reference` (the `reference..upstream` range), in revwalk order.
    ///
    /// Messages are decoded per their `encoding` header, see [`decode_message`].
    pub fn upstream_exclusive_messages(
        &self,
        upstream: &str,
        reference: &str,
    ) -> Result<Vec<String>, GitError> {
        let upstream_oid = self.resolve_oid(upstream)?;
        let reference_oid = self.resolve_oid(reference)?;

        info!(
            event = "git.log.walk_started",
            upstream = upstream,
            reference = reference
        );

        let mut walk = self.repo.revwalk()?;
        walk.push(upstream_oid)?;
        walk.hide(reference_oid)?;

        let mut messages = Vec::new();
        for oid in walk {
            let commit = self.repo.find_commit(oid?)?;
            messages.push(decode_message(
                commit.message_bytes(),
                commit.message_encoding(),
            ));
        }

        info!(
            event = "git.log.walk_completed",
            upstream = upstream,
            reference = reference,
            count = messages.len()
        );
        Ok(messages)
    }

    /// Raw `git cherry -v --abbrev` output for `reference` against `upstream`.
    ///
    /// Both revisions are resolved here first so a bad name surfaces as
    /// `GitError::InvalidReference`, and only object ids reach the git
    /// command line.
    pub fn cherry(&self, upstream: &str, reference: &str) -> Result<String, GitError> {
        let upstream_id = self.resolve_commit(upstream)?;
        let reference_id = self.resolve_commit(reference)?;
        cli::cherry(self.dir(), &upstream_id, &reference_id)
    }
}

/// Decode a raw commit message to UTF-8, the way `git cherry -v` prints it.
///
/// ISO-8859-1 maps byte-for-byte onto Unicode. Messages without an encoding
/// header, or in any other encoding, are read as UTF-8 lossily.
pub fn decode_message(bytes: &[u8], encoding: Option<&str>) -> String {
    match encoding.map(str::to_ascii_lowercase).as_deref() {
        Some("iso-8859-1" | "iso8859-1" | "latin1" | "latin-1") => {
            bytes.iter().map(|&b| char::from(b)).collect()
        }
        _ => String::from_utf8_lossy(bytes).into_owned(),
    }
}
