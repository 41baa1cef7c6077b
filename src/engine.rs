//! Boundary with an external grammar engine.
//!
//! An engine accepts rendered grammar text plus a start symbol name and
//! compiles it; the compiled grammar then parses input strings into a
//! [`SyntaxTree`]. No parsing algorithm lives in this crate.

use smol_str::SmolStr;
use tracing::debug;

use crate::error::Result;
use crate::grammar::Grammar;

/// Compile grammar text and parse input against it.
pub trait GrammarEngine {
    /// Opaque compiled grammar.
    type Compiled;

    /// Compile `text` with `start` as the start symbol.
    ///
    /// Failing on text produced by [`render`](crate::render) indicates a
    /// rendering defect, not a normal runtime condition.
    fn compile(&self, text: &str, start: &str) -> Result<Self::Compiled>;

    /// Parse `input`, failing when it is not derivable from the start symbol.
    fn parse(&self, compiled: &Self::Compiled, input: &str) -> Result<SyntaxTree>;
}

/// A parse tree: interior nodes are labeled by symbol name, leaves hold the
/// consumed input text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyntaxTree {
    Node {
        name: SmolStr,
        children: Vec<SyntaxTree>,
    },
    Leaf(SmolStr),
}

impl SyntaxTree {
    pub fn node(name: impl Into<SmolStr>, children: Vec<SyntaxTree>) -> Self {
        Self::Node {
            name: name.into(),
            children,
        }
    }

    pub fn leaf(text: impl Into<SmolStr>) -> Self {
        Self::Leaf(text.into())
    }

    /// Symbol name for nodes, `None` for leaves.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Node { name, .. } => Some(name.as_str()),
            Self::Leaf(_) => None,
        }
    }

    pub fn children(&self) -> &[SyntaxTree] {
        match self {
            Self::Node { children, .. } => children.as_slice(),
            Self::Leaf(_) => &[],
        }
    }

    /// Leaf texts, left to right.
    pub fn leaves(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_leaves(&mut out);
        out
    }

    /// Concatenated leaf text: the input span this tree covers.
    pub fn text(&self) -> String {
        self.leaves().concat()
    }

    /// Every node labeled `name`, in pre-order.
    pub fn find_all(&self, name: &str) -> Vec<&SyntaxTree> {
        let mut out = Vec::new();
        self.collect_named(name, &mut out);
        out
    }

    fn collect_leaves<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            Self::Leaf(text) => out.push(text.as_str()),
            Self::Node { children, .. } => {
                for child in children {
                    child.collect_leaves(out);
                }
            }
        }
    }

    fn collect_named<'a>(&'a self, name: &str, out: &mut Vec<&'a SyntaxTree>) {
        if self.name() == Some(name) {
            out.push(self);
        }
        for child in self.children() {
            child.collect_named(name, out);
        }
    }
}

impl Grammar {
    /// Render with default options and compile through `engine`.
    pub fn compile_with<E: GrammarEngine>(&self, engine: &E, start: &str) -> Result<E::Compiled> {
        let text = self.to_string();
        debug!(start, bytes = text.len(), "compiling rendered grammar");
        engine.compile(&text, start)
    }
}
