//! git-backed collaborators for the classifier.

use cherry_git::GitRepo;

use crate::classify::{CommitLog, PatchOracle};
use crate::errors::ClassifyError;

impl CommitLog for GitRepo {
    fn upstream_exclusive_messages(
        &self,
        upstream: &str,
        reference: &str,
    ) -> Result<Vec<String>, ClassifyError> {
        Ok(GitRepo::upstream_exclusive_messages(self, upstream, reference)?)
    }
}

impl PatchOracle for GitRepo {
    fn cherry(&self, upstream: &str, reference: &str) -> Result<String, ClassifyError> {
        Ok(GitRepo::cherry(self, upstream, reference)?)
    }
}
