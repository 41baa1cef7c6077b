//! Reading grammar text back into productions.
//!
//! The inverse of [`render`](crate::render): canonical text is tokenized with
//! logos and read by a small recursive-descent reader.
//!
//! ```text
//! Grammar text
//!     ↓
//! Lexer (logos) → Tokens with TokenKind + offsets
//!     ↓
//! Reader → Productions (one per line, in order)
//!     ↓
//! Grammar::accumulate
//! ```
//!
//! Reading is structural: a nested concatenation renders without
//! parentheses and therefore reads back as one flat concatenation, and
//! `[{x}]` always reads as zero-or-more.

mod errors;
mod lexer;
mod reader;

use tracing::debug;

use crate::error::{Error, Result};
use crate::grammar::Grammar;
use crate::product::{Product, Production};

pub use errors::{ErrorCode, SyntaxError, SyntaxErrorBuilder};
pub use lexer::{Lexer, Token, TokenKind, tokenize};

use reader::Reader;

/// Read every production in `input`, in order, without merging.
pub fn read_productions(input: &str) -> Result<Vec<Production>> {
    let productions = Reader::new(input).productions().map_err(Error::Syntax)?;
    debug!(count = productions.len(), "read productions");
    Ok(productions)
}

/// Read grammar text into a [`Grammar`].
pub fn read_grammar(input: &str) -> Result<Grammar> {
    read_productions(input).map(Grammar::accumulate)
}

/// Read a single expression such as `"a", {b}`.
pub fn read_product(input: &str) -> Result<Product> {
    Reader::new(input)
        .standalone_expression()
        .map_err(|e| Error::Syntax(vec![e]))
}
