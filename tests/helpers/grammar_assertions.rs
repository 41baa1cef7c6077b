//! Assertion helpers for engine-driven tests.

use ebnf_dsl::{Grammar, GrammarEngine, SyntaxTree};

use super::reference_engine::{BacktrackingEngine, CompiledGrammar};

/// Compile `grammar` rendered with default options, panicking on failure.
pub fn compile(grammar: &Grammar, start: &str) -> CompiledGrammar {
    grammar
        .compile_with(&BacktrackingEngine, start)
        .unwrap_or_else(|e| panic!("Rendered grammar failed to compile: {e}\n{grammar}"))
}

/// Assert that `input` parses and return the tree.
pub fn assert_accepts(compiled: &CompiledGrammar, input: &str) -> SyntaxTree {
    BacktrackingEngine
        .parse(compiled, input)
        .unwrap_or_else(|e| panic!("Expected {input:?} to parse, got {e}"))
}

/// Assert that `input` is rejected.
pub fn assert_rejects(compiled: &CompiledGrammar, input: &str) {
    if let Ok(tree) = BacktrackingEngine.parse(compiled, input) {
        panic!("Expected {input:?} to be rejected, parsed as {tree:?}");
    }
}
