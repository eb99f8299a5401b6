//! The interactive session state machine.

use crate::answer::Answer;
use crate::error::{QuizError, QuizResult};
use crate::question::Question;
use crate::tree::{NodeId, QuestionTree};

/// What a single accepted answer did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    /// The answer led to a follow-up question.
    Advanced,
    /// A leaf was reached with "yes": the session is back at the root.
    Restarted,
    /// A leaf was reached with "no": the session is over.
    Ended,
}

/// One run of the game: a question tree plus the current position.
///
/// The session starts at the root and moves one edge per accepted answer.
/// Reaching a branch with no follow-up resolves the same answer a second
/// way: "yes" starts over from the root, "no" ends the session. There is no
/// separate "play again?" prompt; the last question asked carries that
/// decision.
#[derive(Debug, Clone)]
pub struct Session {
    tree: QuestionTree,
    current: Option<NodeId>,
}

impl Session {
    /// Start a session at the tree's root.
    pub fn new(tree: QuestionTree) -> Self {
        let current = Some(tree.root());
        Self { tree, current }
    }

    /// Start a session at an arbitrary node, mainly for tests.
    pub fn at_node(tree: QuestionTree, id: &str) -> QuizResult<Self> {
        let current = tree
            .find(id)
            .ok_or_else(|| QuizError::UnknownNode(id.to_string()))?;
        Ok(Self {
            tree,
            current: Some(current),
        })
    }

    /// The tree this session walks.
    pub fn tree(&self) -> &QuestionTree {
        &self.tree
    }

    /// The question currently being asked, or `None` once the session ended.
    pub fn current(&self) -> Option<&Question> {
        self.current.map(|id| self.tree.node(id))
    }

    /// Whether the session is over.
    pub fn is_ended(&self) -> bool {
        self.current.is_none()
    }

    /// Feed one line of user input to the session.
    ///
    /// Input that is not a yes/no answer fails with
    /// [`QuizError::InvalidAnswer`] and leaves the current question
    /// unchanged, so the caller re-issues the same prompt without consuming
    /// a turn.
    pub fn answer(&mut self, input: &str) -> QuizResult<Turn> {
        let at = self.current.ok_or(QuizError::SessionEnded)?;
        let answer: Answer = input.parse()?;

        match self.tree.node(at).follow_up(answer) {
            Some(next) => {
                self.current = Some(next);
                Ok(Turn::Advanced)
            }
            // Leaf: the same answer decides whether to start over.
            None => match answer {
                Answer::Yes => {
                    self.current = Some(self.tree.root());
                    Ok(Turn::Restarted)
                }
                Answer::No => {
                    self.current = None;
                    Ok(Turn::Ended)
                }
            },
        }
    }
}
