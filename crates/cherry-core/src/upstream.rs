use std::collections::HashSet;

use crate::title::{TitleStripper, commit_title};

/// Normalized titles of the commits reachable from upstream but not from the
/// reference branch. Duplicate titles collapse into one entry.
#[derive(Debug, Clone, Default)]
pub struct UpstreamTitleSet {
    titles: HashSet<String>,
}

impl UpstreamTitleSet {
    pub fn from_messages<I, S>(messages: I, stripper: &TitleStripper) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let titles = messages
            .into_iter()
            .map(|message| stripper.strip(commit_title(message.as_ref())).into_owned())
            .collect();
        Self { titles }
    }

    /// `title` must already be normalized with the same stripper.
    pub fn contains(&self, title: &str) -> bool {
        self.titles.contains(title)
    }

    pub fn len(&self) -> usize {
        self.titles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }
}
