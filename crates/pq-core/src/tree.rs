//! The validated question tree and its declarative node table.

use std::collections::HashMap;

use crate::error::{QuizError, QuizResult};
use crate::question::Question;

/// Opaque handle to a node in a [`QuestionTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

/// One row of a declarative node table.
///
/// `yes` and `no` name other rows by id; a missing target marks that branch
/// as a leaf outcome.
#[derive(Debug, Clone, Copy)]
pub struct NodeDef<'a> {
    /// Unique id of this node.
    pub id: &'a str,
    /// The prompt shown to the user.
    pub text: &'a str,
    /// Id of the node to follow on "yes".
    pub yes: Option<&'a str>,
    /// Id of the node to follow on "no".
    pub no: Option<&'a str>,
}

/// A finite, acyclic, rooted binary tree of yes/no questions.
///
/// Built once from a node table and immutable afterwards.
#[derive(Debug, Clone)]
pub struct QuestionTree {
    nodes: Vec<Question>,
    root: NodeId,
}

impl QuestionTree {
    /// Build a tree from a node table, rooted at the node named `root`.
    ///
    /// Fails if an id is defined twice, a reference does not resolve, a node
    /// has more than one parent, a reference closes a cycle through the
    /// root, or a node cannot be reached from the root.
    pub fn from_defs(root: &str, defs: &[NodeDef<'_>]) -> QuizResult<Self> {
        let mut index = HashMap::with_capacity(defs.len());
        for (position, def) in defs.iter().enumerate() {
            if index.insert(def.id, NodeId(position)).is_some() {
                return Err(QuizError::DuplicateNode(def.id.to_string()));
            }
        }
        let root = *index
            .get(root)
            .ok_or_else(|| QuizError::UnknownNode(root.to_string()))?;

        let mut nodes = Vec::with_capacity(defs.len());
        for def in defs {
            nodes.push(Question {
                id: def.id.to_string(),
                text: def.text.to_string(),
                yes: def.yes.map(|target| resolve(&index, target)).transpose()?,
                no: def.no.map(|target| resolve(&index, target)).transpose()?,
            });
        }

        let tree = Self { nodes, root };
        tree.check_shape()?;
        Ok(tree)
    }

    /// Verify the tree shape: nothing points back at the root, no node has
    /// two parents, and every node is reachable from the root.
    fn check_shape(&self) -> QuizResult<()> {
        let mut parents = vec![0usize; self.nodes.len()];
        for node in &self.nodes {
            for child in [node.yes, node.no].into_iter().flatten() {
                if child == self.root {
                    return Err(QuizError::CycleDetected(self.node(child).id.clone()));
                }
                parents[child.0] += 1;
                if parents[child.0] > 1 {
                    return Err(QuizError::SharedNode(self.node(child).id.clone()));
                }
            }
        }

        let mut visited = vec![false; self.nodes.len()];
        let mut stack = vec![self.root];
        while let Some(at) = stack.pop() {
            if visited[at.0] {
                continue;
            }
            visited[at.0] = true;
            let node = self.node(at);
            stack.extend([node.yes, node.no].into_iter().flatten());
        }
        if let Some(position) = visited.iter().position(|seen| !seen) {
            return Err(QuizError::UnreachableNode(self.nodes[position].id.clone()));
        }

        Ok(())
    }

    /// Handle of the root node.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// The node behind `id`. The handle must come from this tree.
    pub fn node(&self, id: NodeId) -> &Question {
        &self.nodes[id.0]
    }

    /// Look up a node by its string id.
    pub fn find(&self, id: &str) -> Option<NodeId> {
        self.nodes.iter().position(|node| node.id == id).map(NodeId)
    }

    /// Iterate over all nodes in definition order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Question)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(position, node)| (NodeId(position), node))
    }

    /// Number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree has no nodes. Never true for a built tree, since
    /// construction requires a resolvable root.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

fn resolve(index: &HashMap<&str, NodeId>, target: &str) -> QuizResult<NodeId> {
    index
        .get(target)
        .copied()
        .ok_or_else(|| QuizError::UnknownNode(target.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answer::Answer;

    const TINY: &[NodeDef<'static>] = &[
        NodeDef {
            id: "start",
            text: "Ready?",
            yes: Some("won"),
            no: None,
        },
        NodeDef {
            id: "won",
            text: "You made it. Again?",
            yes: None,
            no: None,
        },
    ];

    #[test]
    fn builds_and_resolves_references() {
        let tree = QuestionTree::from_defs("start", TINY).unwrap();
        assert_eq!(tree.len(), 2);
        assert!(!tree.is_empty());

        let root = tree.node(tree.root());
        assert_eq!(root.id, "start");
        assert!(root.follow_up(Answer::No).is_none());

        let won = root.follow_up(Answer::Yes).unwrap();
        assert_eq!(tree.node(won).text, "You made it. Again?");
        assert!(tree.node(won).is_leaf());
    }

    #[test]
    fn find_by_string_id() {
        let tree = QuestionTree::from_defs("start", TINY).unwrap();
        let won = tree.find("won").unwrap();
        assert_eq!(tree.node(won).id, "won");
        assert!(tree.find("missing").is_none());
    }

    #[test]
    fn follow_up_is_identity_stable() {
        let tree = QuestionTree::from_defs("start", TINY).unwrap();
        let root = tree.node(tree.root());
        assert_eq!(root.follow_up(Answer::Yes), root.follow_up(Answer::Yes));
        assert_eq!(root.follow_up(Answer::Yes), tree.find("won"));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let defs = [
            NodeDef {
                id: "start",
                text: "One",
                yes: None,
                no: None,
            },
            NodeDef {
                id: "start",
                text: "Two",
                yes: None,
                no: None,
            },
        ];
        let err = QuestionTree::from_defs("start", &defs).unwrap_err();
        assert!(matches!(err, QuizError::DuplicateNode(id) if id == "start"));
    }

    #[test]
    fn rejects_unknown_references() {
        let defs = [NodeDef {
            id: "start",
            text: "Ready?",
            yes: Some("ghost"),
            no: None,
        }];
        let err = QuestionTree::from_defs("start", &defs).unwrap_err();
        assert!(matches!(err, QuizError::UnknownNode(id) if id == "ghost"));
    }

    #[test]
    fn rejects_unknown_root() {
        let err = QuestionTree::from_defs("ghost", TINY).unwrap_err();
        assert!(matches!(err, QuizError::UnknownNode(id) if id == "ghost"));
    }

    #[test]
    fn rejects_shared_subnodes() {
        let defs = [
            NodeDef {
                id: "start",
                text: "A",
                yes: Some("middle"),
                no: Some("shared"),
            },
            NodeDef {
                id: "middle",
                text: "B",
                yes: Some("shared"),
                no: None,
            },
            NodeDef {
                id: "shared",
                text: "C",
                yes: None,
                no: None,
            },
        ];
        let err = QuestionTree::from_defs("start", &defs).unwrap_err();
        assert!(matches!(err, QuizError::SharedNode(id) if id == "shared"));
    }

    #[test]
    fn rejects_cycles_through_the_root() {
        let defs = [
            NodeDef {
                id: "start",
                text: "A",
                yes: Some("back"),
                no: None,
            },
            NodeDef {
                id: "back",
                text: "B",
                yes: Some("start"),
                no: None,
            },
        ];
        let err = QuestionTree::from_defs("start", &defs).unwrap_err();
        assert!(matches!(err, QuizError::CycleDetected(id) if id == "start"));
    }

    #[test]
    fn rejects_unreachable_nodes() {
        let defs = [
            NodeDef {
                id: "start",
                text: "A",
                yes: None,
                no: None,
            },
            NodeDef {
                id: "island",
                text: "B",
                yes: None,
                no: None,
            },
        ];
        let err = QuestionTree::from_defs("start", &defs).unwrap_err();
        assert!(matches!(err, QuizError::UnreachableNode(id) if id == "island"));
    }
}
