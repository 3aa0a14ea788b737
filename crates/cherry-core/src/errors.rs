use std::error::Error;

use cherry_git::GitError;

/// Base trait for all application errors
pub trait CherryError: Error + Send + Sync + 'static {
    /// Error code for programmatic handling
    fn error_code(&self) -> &'static str;

    /// Whether this error should be logged as an error or warning
    fn is_user_error(&self) -> bool {
        false
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClassifyError {
    #[error("Invalid reference '{reference}': {message}")]
    InvalidReference { reference: String, message: String },

    #[error("Invalid title strip pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        source: regex::Error,
    },

    #[error("Unexpected git cherry output line: '{line}'")]
    UnexpectedOracleOutput { line: String },

    #[error("No git repository found at {path}")]
    RepositoryAccess { path: String },

    #[error("{source}")]
    Git { source: GitError },
}

impl From<GitError> for ClassifyError {
    fn from(error: GitError) -> Self {
        match error {
            GitError::InvalidReference { reference, message } => {
                ClassifyError::InvalidReference { reference, message }
            }
            GitError::NotInRepository { path } => ClassifyError::RepositoryAccess { path },
            source => ClassifyError::Git { source },
        }
    }
}

impl CherryError for ClassifyError {
    fn error_code(&self) -> &'static str {
        match self {
            ClassifyError::InvalidReference { .. } => "INVALID_REFERENCE",
            ClassifyError::InvalidPattern { .. } => "INVALID_PATTERN",
            ClassifyError::UnexpectedOracleOutput { .. } => "UNEXPECTED_ORACLE_OUTPUT",
            ClassifyError::RepositoryAccess { .. } => "REPOSITORY_ACCESS",
            ClassifyError::Git { source } => source.error_code(),
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(
            self,
            ClassifyError::InvalidReference { .. }
                | ClassifyError::InvalidPattern { .. }
                | ClassifyError::RepositoryAccess { .. }
        )
    }
}

impl CherryError for GitError {
    fn error_code(&self) -> &'static str {
        match self {
            GitError::NotInRepository { .. } => "NOT_IN_REPOSITORY",
            GitError::InvalidReference { .. } => "INVALID_REFERENCE",
            GitError::CherryFailed { .. } => "GIT_CHERRY_FAILED",
            GitError::Git2Error { .. } => "GIT2_ERROR",
            GitError::IoError { .. } => "GIT_IO_ERROR",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(
            self,
            GitError::NotInRepository { .. } | GitError::InvalidReference { .. }
        )
    }
}
