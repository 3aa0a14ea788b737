#[derive(Debug, thiserror::Error)]
pub enum GitError {
    #[error("Not in a git repository: {path}")]
    NotInRepository { path: String },

    #[error("Invalid reference '{reference}': {message}")]
    InvalidReference { reference: String, message: String },

    #[error("git cherry failed: {message}")]
    CherryFailed { message: String },

    #[error("Git2 library error: {source}")]
    Git2Error {
        #[from]
        source: git2::Error,
    },

    #[error("IO error during git operation: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },
}
