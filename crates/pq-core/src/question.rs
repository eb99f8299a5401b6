//! Question nodes.

use crate::answer::Answer;
use crate::tree::NodeId;

/// A single yes/no question in the tree.
///
/// Nodes are created by [`QuestionTree::from_defs`](crate::QuestionTree::from_defs)
/// and never change afterwards. A missing child marks that branch as a leaf
/// outcome of the traversal.
#[derive(Debug, Clone)]
pub struct Question {
    /// Stable string id from the node table.
    pub id: String,
    /// The prompt shown to the user.
    pub text: String,
    /// Follow-up on a "yes" answer.
    pub yes: Option<NodeId>,
    /// Follow-up on a "no" answer.
    pub no: Option<NodeId>,
}

impl Question {
    /// The child selected by `answer`, or `None` if that branch is a leaf.
    ///
    /// Pure lookup: the same answer always yields the same child.
    pub fn follow_up(&self, answer: Answer) -> Option<NodeId> {
        match answer {
            Answer::Yes => self.yes,
            Answer::No => self.no,
        }
    }

    /// Whether this node has no children at all.
    pub fn is_leaf(&self) -> bool {
        self.yes.is_none() && self.no.is_none()
    }
}
