//! Commit title extraction and normalization.

use std::borrow::Cow;

use regex::Regex;
use tracing::debug;

use crate::errors::ClassifyError;

/// Strips a leading bracketed tag such as `[PATCH]` or `[RFC v2]`, plus the
/// whitespace after it.
pub const DEFAULT_TITLE_STRIP_PATTERN: &str = r"^\[.*\]\s*";

/// First line of a commit message with trailing whitespace removed.
///
/// An empty message yields an empty title.
pub fn commit_title(message: &str) -> &str {
    message.lines().next().unwrap_or("").trim_end()
}

/// Optional rule removing a conventional prefix from titles before they are
/// compared. Only the first match is removed.
#[derive(Debug, Clone, Default)]
pub struct TitleStripper {
    pattern: Option<Regex>,
}

impl TitleStripper {
    /// Compile `pattern`. An empty pattern disables stripping.
    pub fn new(pattern: &str) -> Result<Self, ClassifyError> {
        if pattern.is_empty() {
            debug!(event = "core.title.stripping_disabled");
            return Ok(Self::disabled());
        }

        let regex = Regex::new(pattern).map_err(|source| ClassifyError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Self {
            pattern: Some(regex),
        })
    }

    pub fn disabled() -> Self {
        Self { pattern: None }
    }

    pub fn pattern(&self) -> Option<&str> {
        self.pattern.as_ref().map(Regex::as_str)
    }

    pub fn strip<'a>(&self, title: &'a str) -> Cow<'a, str> {
        match &self.pattern {
            Some(regex) => regex.replacen(title, 1, ""),
            None => Cow::Borrowed(title),
        }
    }
}
