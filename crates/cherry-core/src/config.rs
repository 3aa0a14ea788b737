//! Run configuration, built once at startup and passed explicitly.

use tracing::debug;

use crate::errors::ClassifyError;
use crate::state::State;
use crate::title::{DEFAULT_TITLE_STRIP_PATTERN, TitleStripper};

/// Revision used when no reference branch is given.
pub const DEFAULT_REFERENCE: &str = "HEAD";

#[derive(Debug, Clone)]
pub struct ClassifierConfig {
    /// Minimum state a record needs to be emitted.
    pub output_level: State,
    pub title_stripper: TitleStripper,
}

impl ClassifierConfig {
    pub fn new(output_level: State, strip_pattern: &str) -> Result<Self, ClassifyError> {
        let title_stripper = TitleStripper::new(strip_pattern)?;
        debug!(
            event = "core.config.built",
            output_level = %output_level,
            strip_pattern = title_stripper.pattern().unwrap_or("")
        );
        Ok(Self {
            output_level,
            title_stripper,
        })
    }

    /// Show every record, strip bracketed title tags.
    pub fn with_defaults() -> Result<Self, ClassifyError> {
        Self::new(State::default(), DEFAULT_TITLE_STRIP_PATTERN)
    }
}

/// The pair of revisions one run compares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CherryRequest {
    pub upstream: String,
    pub reference: String,
}

impl CherryRequest {
    pub fn new(upstream: impl Into<String>, reference: Option<&str>) -> Self {
        Self {
            upstream: upstream.into(),
            reference: reference.unwrap_or(DEFAULT_REFERENCE).to_string(),
        }
    }
}
