//! # ebnf-dsl
//!
//! Build EBNF grammars from small composable pieces, merge repeated
//! definitions of a symbol into one alternation, and render the result as
//! canonical grammar text for an external Earley-style engine.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! engine    → Compile/parse boundary with an external engine
//!   ↓
//! text      → Logos lexer + reader for rendered grammar text
//!   ↓
//! render    → Canonical grammar text, RenderOptions
//!   ↓
//! dsl       → Construction combinators, CharSource
//!   ↓
//! grammar   → Grammar accumulation and union
//!   ↓
//! charclass → Character classes expanded into literal alternatives
//!   ↓
//! product   → Product expression tree, Production
//!   ↓
//! base      → Symbol, Terminal, TerminalRange
//! ```
//!
//! ## Example
//!
//! ```
//! use ebnf_dsl::dsl::*;
//!
//! let s = nt("S");
//! let grammar = grammar([
//!     s.produces(t("a")),
//!     s.produces(t("b")),
//!     s.produces(t("c")),
//! ]);
//!
//! assert_eq!(grammar.to_string(), r#"S = ("c" | "b" | "a");"#);
//! ```

// ============================================================================
// MODULES (dependency order: base → product → charclass → grammar → dsl → render → text → engine)
// ============================================================================

/// Foundation types: Symbol, Terminal, TerminalRange
pub mod base;

/// Expression tree and productions
pub mod product;

/// Character classes and their expansion
pub mod charclass;

/// Grammar accumulation and union
pub mod grammar;

/// Authoring surface: nt, t, range, chars, ProductExt
pub mod dsl;

/// Canonical grammar text
pub mod render;

/// Reading grammar text back into productions
pub mod text;

/// External engine boundary
pub mod engine;

mod error;

pub use base::{Symbol, Terminal, TerminalRange};
pub use charclass::CharClass;
pub use engine::{GrammarEngine, SyntaxTree};
pub use error::{Error, Result};
pub use grammar::{Grammar, GrammarBuilder};
pub use product::{Alternation, Concatenation, Product, Production};
pub use render::{LineEnding, RenderOptions};
