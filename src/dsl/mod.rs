//! Authoring surface for grammars.
//!
//! Precedence follows the usual EBNF reading order, loosest to tightest:
//!
//! ```text
//! produces      symbol = ...
//! or            a | b          (left-associative, flattening)
//! then          a, b           (never flattens)
//! one_or_more   {a}
//! zero_or_more  [{a}]
//! optional      [a]
//! ```
//!
//! Method chaining expresses the grouping directly:
//! `nt("a").then(nt("b")).or(nt("c"))` reads as `(a, b) | c`, and
//! `nt("a").then(nt("b").or(nt("c")))` as `a, (b | c)`.
//!
//! ```
//! use ebnf_dsl::dsl::*;
//!
//! let digit = nt("digit");
//! let number = nt("number");
//!
//! let grammar = grammar([
//!     number.produces(digit.clone().one_or_more()),
//!     digit.produces(range('0', '9')),
//! ]);
//!
//! assert_eq!(grammar.to_string(), "number = {digit};\ndigit = \"0\" ... \"9\";");
//! ```

mod source;

use smol_str::SmolStr;

use crate::base::{Symbol, Terminal, TerminalRange};
use crate::grammar::Grammar;
use crate::product::{Product, Production};

pub use crate::charclass::CharClass;
pub use source::CharSource;

/// A non-terminal named `name`.
pub fn nt(name: impl Into<SmolStr>) -> Symbol {
    Symbol::new(name)
}

/// A literal terminal.
pub fn t(content: impl Into<SmolStr>) -> Terminal {
    Terminal::new(content)
}

/// An inclusive character range.
pub fn range(start: char, end: char) -> TerminalRange {
    TerminalRange::new(start, end)
}

/// The empty terminal.
pub fn epsilon() -> Terminal {
    Terminal::epsilon().clone()
}

/// Literal, character class, or explicit list of literals.
pub fn chars(source: impl Into<CharSource>) -> Product {
    source.into().into_product()
}

/// Collect productions into a grammar, merging repeated symbols.
pub fn grammar(productions: impl IntoIterator<Item = Production>) -> Grammar {
    Grammar::accumulate(productions)
}

/// Combinators available on anything that converts into a [`Product`].
pub trait ProductExt: Into<Product> + Sized {
    /// `self | other`
    fn or(self, other: impl Into<Product>) -> Product {
        Product::alternate(self.into(), other.into())
    }

    /// `self, other`
    fn then(self, other: impl Into<Product>) -> Product {
        Product::concatenate(self.into(), other.into())
    }

    /// `[self]`
    fn optional(self) -> Product {
        Product::optional(self.into())
    }

    /// `[{self}]`
    fn zero_or_more(self) -> Product {
        Product::zero_or_more(self.into())
    }

    /// `{self}`
    fn one_or_more(self) -> Product {
        Product::one_or_more(self.into())
    }
}

impl<T: Into<Product>> ProductExt for T {}

impl Symbol {
    /// A grammar holding the single production `self = product`.
    pub fn produces_grammar(&self, product: impl Into<Product>) -> Grammar {
        Grammar::accumulate([self.produces(product)])
    }
}
