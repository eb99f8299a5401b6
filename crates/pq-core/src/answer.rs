//! Yes/no answers.

use std::fmt;
use std::str::FromStr;

use crate::error::QuizError;

/// A normalized yes/no answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    /// The user answered "yes".
    Yes,
    /// The user answered "no".
    No,
}

impl FromStr for Answer {
    type Err = QuizError;

    /// Surrounding whitespace is ignored; the token itself is case-sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "yes" => Ok(Self::Yes),
            "no" => Ok(Self::No),
            other => Err(QuizError::InvalidAnswer(other.to_string())),
        }
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Yes => "yes",
            Self::No => "no",
        })
    }
}
