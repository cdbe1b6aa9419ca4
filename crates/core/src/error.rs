//! Error taxonomy for lexicon construction and heterograph queries.

use std::fmt;

/// A dictionary line that could not be turned into an entry.
///
/// The parser collects these as diagnostics and carries on with the next line.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("dictionary line {line}: {reason} ({text:?})")]
pub struct ParseError {
    /// 1-based line number in the dictionary text
    pub line: usize,
    /// The offending line, comment included
    pub text: String,
    pub reason: String,
}

/// Which combinatorial stage ran out of budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Candidates,
    Heterographs,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Candidates => f.write_str("phrase pronunciations"),
            Stage::Heterographs => f.write_str("heterographs"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum HeterographError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("word {0:?} is not in the pronunciation dictionary")]
    UnknownWord(String),

    /// `reached` is how far the stage got before it was stopped; for
    /// candidate generation it is the full product when it fits in `usize`.
    #[error("too many {stage}: reached {reached}, limit is {limit}")]
    CapacityExceeded {
        stage: Stage,
        limit: usize,
        reached: usize,
    },

    #[error("phrase contains no words")]
    EmptyPhrase,
}

pub type Result<T> = std::result::Result<T, HeterographError>;
