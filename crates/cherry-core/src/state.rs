use std::fmt;
use std::str::FromStr;

/// Classification of a reference-branch commit against upstream.
///
/// Variants are declared in severity order, so the derived `Ord` gives
/// `NotFound < Ambiguous < Found`. Output-level filtering compares with this
/// order, never with the printed characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum State {
    /// No equivalent patch upstream and no upstream commit with the same title.
    #[default]
    NotFound,
    /// No equivalent patch upstream, but an upstream-only commit shares the title.
    Ambiguous,
    /// An equivalent patch exists upstream.
    Found,
}

impl State {
    pub const ALL: [State; 3] = [State::NotFound, State::Ambiguous, State::Found];

    pub fn as_char(self) -> char {
        match self {
            State::NotFound => '-',
            State::Ambiguous => '~',
            State::Found => '+',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        State::ALL.into_iter().find(|state| state.as_char() == c)
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid output level '{value}'. Expected one of: -, ~, +")]
pub struct ParseStateError {
    pub value: String,
}

impl FromStr for State {
    type Err = ParseStateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => State::from_char(c),
            _ => None,
        }
        .ok_or_else(|| ParseStateError {
            value: s.to_string(),
        })
    }
}
