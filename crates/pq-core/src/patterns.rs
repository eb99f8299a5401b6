//! The built-in design-pattern question tree.
//!
//! The game content as a declarative node table: routing questions narrow
//! down the pattern family, "Is it <X> pattern?" questions commit to a
//! guess, and each guess has its own pair of outcome leaves whose yes/no
//! answer doubles as the restart-or-quit decision.

use crate::tree::{NodeDef, QuestionTree};

/// Id of the root node.
pub const ROOT: &str = "welcome";

const GUESSED: &str = "Woohoo! I guessed it! Try again?";
const MISSED: &str = "Oops! Something went wrong! Try again?";

const fn ask(
    id: &'static str,
    text: &'static str,
    yes: &'static str,
    no: &'static str,
) -> NodeDef<'static> {
    NodeDef {
        id,
        text,
        yes: Some(yes),
        no: Some(no),
    }
}

const fn outcome(id: &'static str, text: &'static str) -> NodeDef<'static> {
    NodeDef {
        id,
        text,
        yes: None,
        no: None,
    }
}

const NODES: &[NodeDef<'static>] = &[
    // Answering "no" here is already a leaf: the game never starts.
    NodeDef {
        id: ROOT,
        text: "Welcome to the game! Think of a design pattern and answer these following yes/no questions. Ready?",
        yes: Some("creational"),
        no: None,
    },
    // Creational patterns
    ask(
        "creational",
        "Does it provide the object creation mechanism that enhance the flexibilities of existing code?",
        "single-instance",
        "behavioral",
    ),
    ask(
        "single-instance",
        "Does it ensure you to have at most one instance of a class in your application?",
        "singleton",
        "builder",
    ),
    ask("singleton", "Is it Singleton pattern?", "singleton-win", "singleton-miss"),
    outcome("singleton-win", GUESSED),
    outcome("singleton-miss", MISSED),
    ask("builder", "Is it Builder pattern?", "builder-win", "builder-miss"),
    outcome("builder-win", GUESSED),
    outcome("builder-miss", MISSED),
    // Behavioral patterns
    ask(
        "behavioral",
        "Is it responsible for how one class communicates with others?",
        "context",
        "structural",
    ),
    ask(
        "context",
        "Does it provide a mechanism to the context to change its behaviour?",
        "scheme",
        "notify",
    ),
    ask(
        "scheme",
        "Is changing behaviour built into its scheme?",
        "state",
        "strategy",
    ),
    ask("state", "Is it State pattern?", "state-win", "state-miss"),
    outcome("state-win", GUESSED),
    outcome("state-miss", MISSED),
    ask("strategy", "Is it Strategy pattern?", "strategy-win", "strategy-miss"),
    outcome("strategy-win", GUESSED),
    outcome("strategy-miss", MISSED),
    ask(
        "notify",
        "Does it allow group of objects to be notified when some state changes?",
        "observer",
        "command",
    ),
    ask("observer", "Is it Observer pattern?", "observer-win", "observer-miss"),
    outcome("observer-win", GUESSED),
    outcome("observer-miss", MISSED),
    ask("command", "Is it Command pattern?", "command-win", "command-miss"),
    outcome("command-win", GUESSED),
    outcome("command-miss", MISSED),
    // Structural patterns
    ask(
        "structural",
        "Does it explain how to assemble objects and classes into a larger structure and simplifies the structure by identifying the relationships?",
        "runtime",
        "structural-miss",
    ),
    outcome("structural-miss", MISSED),
    ask(
        "runtime",
        "Does it attach additional behaviour to object at run-time?",
        "decorator",
        "adapter",
    ),
    ask("decorator", "Is it Decorator pattern?", "decorator-win", "decorator-miss"),
    outcome("decorator-win", GUESSED),
    outcome("decorator-miss", MISSED),
    ask("adapter", "Is it Adapter pattern?", "adapter-win", "adapter-miss"),
    outcome("adapter-win", GUESSED),
    outcome("adapter-miss", MISSED),
];

/// Build the built-in tree.
pub fn tree() -> QuestionTree {
    QuestionTree::from_defs(ROOT, NODES).expect("built-in pattern tree is well-formed")
}
