//! Core engine for Patternquiz, a yes/no decision-tree guessing game.
//!
//! The engine walks a fixed binary tree of yes/no questions. Each accepted
//! answer follows one edge; a branch without a follow-up is an outcome leaf,
//! and the leaf's own yes/no answer decides whether the walk starts over from
//! the root or the session ends. Trees are authored as declarative node
//! tables and validated on construction; the built-in design-pattern tree
//! lives in [`patterns`].

/// Yes/no answers.
pub mod answer;
/// Error types for the quiz engine.
pub mod error;
/// The built-in design-pattern question tree.
pub mod patterns;
/// Question nodes.
pub mod question;
/// The interactive session state machine.
pub mod session;
/// The validated question tree and its declarative node table.
pub mod tree;

pub use answer::Answer;
pub use error::{QuizError, QuizResult};
pub use question::Question;
pub use session::{Session, Turn};
pub use tree::{NodeDef, NodeId, QuestionTree};
