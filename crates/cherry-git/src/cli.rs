//! git CLI wrappers.
//!
//! Patch-id comparison is not exposed by git2, so the patch-equivalence check
//! shells out to `git cherry`. Each function logs structured events and maps
//! failures to `GitError`.

use std::path::Path;

use tracing::{info, warn};

use super::errors::GitError;

/// Run `git cherry -v --abbrev <upstream> <head>` in `dir` and return stdout.
///
/// Each output line reads `<+|-> <abbreviated-sha> <subject>`: `-` when an
/// equivalent patch already exists in `upstream`, `+` when it does not.
/// Callers are expected to pass resolved object ids.
pub fn cherry(dir: &Path, upstream: &str, head: &str) -> Result<String, GitError> {
    info!(
        event = "git.cherry.started",
        upstream = upstream,
        head = head,
        path = %dir.display()
    );

    let output = std::process::Command::new("git")
        .current_dir(dir)
        .args(["cherry", "-v", "--abbrev", upstream, head])
        .output()
        .map_err(|e| GitError::CherryFailed {
            message: format!("Failed to execute git: {}", e),
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        warn!(
            event = "git.cherry.failed",
            upstream = upstream,
            head = head,
            code = output.status.code(),
            stderr = %stderr.trim()
        );
        return Err(GitError::CherryFailed {
            message: stderr.trim().to_string(),
        });
    }

    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    info!(
        event = "git.cherry.completed",
        upstream = upstream,
        head = head,
        lines = stdout.lines().count()
    );
    Ok(stdout)
}
