//! Canonical grammar text.
//!
//! One line per production, `<symbol> = <product>;`, in grammar order.
//!
//! ```text
//! symbol          name
//! terminal        "content"        (escaped)
//! range           "a" ... "z"
//! alternation     (x | y | z)
//! concatenation   x, y, z
//! optional        [x]
//! zero or more    [{x}]
//! one or more     {x}
//! ```
//!
//! Only `\` and `"` are escaped inside terminals. Range boundaries are
//! written verbatim.

mod options;

use std::borrow::Cow;
use std::fmt::{self, Write};

use crate::base::{Terminal, TerminalRange};
use crate::grammar::Grammar;
use crate::product::{Product, Production};

pub use options::{LineEnding, RenderOptions};

/// Escape `\` and `"` in terminal content.
pub fn escape_terminal(content: &str) -> Cow<'_, str> {
    if !content.contains(['\\', '"']) {
        return Cow::Borrowed(content);
    }
    let mut escaped = String::with_capacity(content.len() + 2);
    for c in content.chars() {
        match c {
            '\\' => escaped.push_str(r"\\"),
            '"' => escaped.push_str(r#"\""#),
            other => escaped.push(other),
        }
    }
    Cow::Owned(escaped)
}

/// Render a grammar with explicit options.
pub fn render_grammar(grammar: &Grammar, options: &RenderOptions) -> String {
    let separator = options.line_ending.as_str();
    let mut out = String::new();
    for (index, (symbol, product)) in grammar.iter().enumerate() {
        if index > 0 {
            out.push_str(separator);
        }
        // Writing into a String cannot fail
        let _ = write!(out, "{symbol} = {product};");
    }
    if options.trailing_newline && !grammar.is_empty() {
        out.push_str(separator);
    }
    out
}

fn write_joined(f: &mut fmt::Formatter<'_>, items: &[Product], separator: &str) -> fmt::Result {
    for (index, item) in items.iter().enumerate() {
        if index > 0 {
            f.write_str(separator)?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

impl fmt::Display for Terminal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"", escape_terminal(self.content()))
    }
}

impl fmt::Display for TerminalRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\" ... \"{}\"", self.start(), self.end())
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Product::Symbol(symbol) => write!(f, "{symbol}"),
            Product::Terminal(terminal) => write!(f, "{terminal}"),
            Product::Range(range) => write!(f, "{range}"),
            Product::Alternation(alternation) => {
                f.write_str("(")?;
                write_joined(f, alternation.choices(), " | ")?;
                f.write_str(")")
            }
            Product::Concatenation(concatenation) => write_joined(f, concatenation.items(), ", "),
            Product::Optional(inner) => write!(f, "[{inner}]"),
            Product::ZeroOrMore(inner) => write!(f, "[{{{inner}}}]"),
            Product::OneOrMore(inner) => write!(f, "{{{inner}}}"),
        }
    }
}

impl fmt::Display for Production {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {};", self.symbol(), self.product())
    }
}

impl fmt::Display for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_grammar(self, &RenderOptions::default()))
    }
}
