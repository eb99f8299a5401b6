//! Error types for the quiz engine.

use thiserror::Error;

/// Alias for `Result<T, QuizError>`.
pub type QuizResult<T> = Result<T, QuizError>;

/// Errors that can occur while building a tree or playing a session.
#[derive(Debug, Error)]
pub enum QuizError {
    /// The input was neither `"yes"` nor `"no"`.
    #[error("invalid answer: {0:?}")]
    InvalidAnswer(String),

    /// Two rows of a node table share the same id.
    #[error("duplicate node id: \"{0}\"")]
    DuplicateNode(String),

    /// A reference names a node that is not defined.
    #[error("unknown node id: \"{0}\"")]
    UnknownNode(String),

    /// A node is referenced as a child by more than one parent.
    #[error("node \"{0}\" has more than one parent")]
    SharedNode(String),

    /// A child reference points back at the root, closing a cycle.
    #[error("reference to root node \"{0}\" would close a cycle")]
    CycleDetected(String),

    /// A node cannot be reached from the root.
    #[error("node \"{0}\" is unreachable from the root")]
    UnreachableNode(String),

    /// The session is over and takes no more answers.
    #[error("the session has ended")]
    SessionEnded,
}
