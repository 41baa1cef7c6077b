//! Crate error type.
//!
//! Building, merging and rendering grammars cannot fail. Errors only come
//! from reading grammar text back and from the engine boundary.

use thiserror::Error;

use crate::text::SyntaxError;

/// Errors from reading grammar text or from a grammar engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The grammar text is not well-formed.
    #[error("malformed grammar text: {}", summarize(.0))]
    Syntax(Vec<SyntaxError>),

    /// The requested start symbol has no production.
    #[error("unknown start symbol: {0}")]
    UnknownStart(String),

    /// The input is not derivable from the start symbol.
    #[error("input rejected at byte {offset}")]
    Rejected { offset: usize },

    /// Any other failure reported by an engine.
    #[error("engine error: {0}")]
    Engine(String),
}

impl Error {
    /// Create an engine error.
    pub fn engine(message: impl Into<String>) -> Self {
        Self::Engine(message.into())
    }

    /// Syntax errors, if this is a syntax failure.
    pub fn syntax_errors(&self) -> &[SyntaxError] {
        match self {
            Self::Syntax(errors) => errors,
            _ => &[],
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

fn summarize(errors: &[SyntaxError]) -> String {
    match errors {
        [] => "no details".to_string(),
        [only] => only.to_string(),
        [first, rest @ ..] => format!("{first} (and {} more)", rest.len()),
    }
}
