//! Tri-state classification of `git cherry` results.
//!
//! The oracle only says whether an equivalent patch exists upstream. For
//! commits it reports as missing, the classifier also looks for an
//! upstream-only commit with the same normalized title and, when one exists,
//! reports the commit as [`State::Ambiguous`] instead of [`State::NotFound`].

use std::fmt;

use tracing::{debug, info};

use crate::config::{CherryRequest, ClassifierConfig};
use crate::errors::ClassifyError;
use crate::oracle::{CherryRecord, RawState};
use crate::state::State;
use crate::title::TitleStripper;
use crate::upstream::UpstreamTitleSet;

/// Reads commit messages from the `reference..upstream` range.
pub trait CommitLog {
    fn upstream_exclusive_messages(
        &self,
        upstream: &str,
        reference: &str,
    ) -> Result<Vec<String>, ClassifyError>;
}

/// Reports, per commit ahead of upstream on the reference branch, whether an
/// equivalent patch exists upstream. Returns `git cherry -v` formatted text.
pub trait PatchOracle {
    fn cherry(&self, upstream: &str, reference: &str) -> Result<String, ClassifyError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedRecord {
    pub state: State,
    pub sha: String,
    /// Title as reported by the oracle, before stripping.
    pub title: String,
}

impl fmt::Display for ClassifiedRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.state, self.sha, self.title)
    }
}

/// Refine one oracle record. Found records are never downgraded; title
/// matching only applies to records the oracle reports as missing.
pub fn classify_record(
    record: CherryRecord,
    upstream_titles: &UpstreamTitleSet,
    stripper: &TitleStripper,
) -> ClassifiedRecord {
    let state = match record.raw_state {
        RawState::Found => State::Found,
        RawState::NotFound => {
            if upstream_titles.contains(&stripper.strip(&record.title)) {
                State::Ambiguous
            } else {
                State::NotFound
            }
        }
    };

    ClassifiedRecord {
        state,
        sha: record.sha,
        title: record.title,
    }
}

/// Classify the commits of `request.reference` that are ahead of
/// `request.upstream`.
///
/// The upstream title set and the oracle output are fetched eagerly, so
/// reference and repository errors surface here. Oracle lines are parsed and
/// classified lazily by the returned iterator, in oracle order, skipping
/// records below `config.output_level`.
pub fn classify<'c, S>(
    source: &S,
    request: &CherryRequest,
    config: &'c ClassifierConfig,
) -> Result<Classification<'c>, ClassifyError>
where
    S: CommitLog + PatchOracle + ?Sized,
{
    info!(
        event = "core.classify.started",
        upstream = request.upstream.as_str(),
        reference = request.reference.as_str(),
        output_level = %config.output_level
    );

    let messages = source.upstream_exclusive_messages(&request.upstream, &request.reference)?;
    let upstream_titles = UpstreamTitleSet::from_messages(&messages, &config.title_stripper);
    debug!(
        event = "core.classify.upstream_titles_built",
        commits = messages.len(),
        titles = upstream_titles.len()
    );

    let output = source.cherry(&request.upstream, &request.reference)?;
    let lines: Vec<String> = output.lines().map(str::to_string).collect();
    debug!(event = "core.classify.oracle_read", lines = lines.len());

    Ok(Classification {
        lines: lines.into_iter(),
        upstream_titles,
        config,
    })
}

/// Lazy sequence of classified records produced by [`classify`].
///
/// Yields an error for an unparseable oracle line; records before it have
/// already been yielded.
pub struct Classification<'c> {
    lines: std::vec::IntoIter<String>,
    upstream_titles: UpstreamTitleSet,
    config: &'c ClassifierConfig,
}

impl Iterator for Classification<'_> {
    type Item = Result<ClassifiedRecord, ClassifyError>;

    fn next(&mut self) -> Option<Self::Item> {
        for line in self.lines.by_ref() {
            if line.trim().is_empty() {
                continue;
            }

            let record = match CherryRecord::parse(&line) {
                Ok(record) => record,
                Err(e) => return Some(Err(e)),
            };

            let classified =
                classify_record(record, &self.upstream_titles, &self.config.title_stripper);
            if classified.state >= self.config.output_level {
                return Some(Ok(classified));
            }

            debug!(
                event = "core.classify.record_filtered",
                sha = classified.sha.as_str(),
                state = %classified.state
            );
        }
        None
    }
}
