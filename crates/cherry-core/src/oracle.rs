//! Parsing of patch-equivalence oracle output (`git cherry -v`).

use crate::errors::ClassifyError;

/// The oracle's two-valued verdict for a commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawState {
    /// An equivalent patch exists upstream (`-`).
    Found,
    /// No equivalent patch exists upstream (`+`).
    NotFound,
}

impl RawState {
    pub fn from_marker(marker: &str) -> Option<Self> {
        match marker {
            "-" => Some(RawState::Found),
            "+" => Some(RawState::NotFound),
            _ => None,
        }
    }
}

/// One oracle line: `<marker> <sha> <title>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CherryRecord {
    pub raw_state: RawState,
    pub sha: String,
    pub title: String,
}

impl CherryRecord {
    /// Split on the first two whitespace runs. The remainder is the title and
    /// keeps any whitespace inside it.
    pub fn parse(line: &str) -> Result<Self, ClassifyError> {
        let unexpected = || ClassifyError::UnexpectedOracleOutput {
            line: line.to_string(),
        };

        let (marker, rest) = split_field(line.trim_start()).ok_or_else(unexpected)?;
        let (sha, title) = split_field(rest).ok_or_else(unexpected)?;
        if title.is_empty() {
            return Err(unexpected());
        }
        let raw_state = RawState::from_marker(marker).ok_or_else(unexpected)?;

        Ok(Self {
            raw_state,
            sha: sha.to_string(),
            title: title.to_string(),
        })
    }
}

fn split_field(s: &str) -> Option<(&str, &str)> {
    let end = s.find(char::is_whitespace)?;
    Some((&s[..end], s[end..].trim_start()))
}
