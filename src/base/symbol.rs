//! Non-terminal symbols.

use std::borrow::Borrow;
use std::fmt;

use smol_str::SmolStr;

/// A named non-terminal.
///
/// Names are caller-chosen and taken verbatim; two symbols are the same
/// symbol exactly when their names are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol {
    name: SmolStr,
}

impl Symbol {
    pub fn new(name: impl Into<SmolStr>) -> Self {
        Self { name: name.into() }
    }

    /// The bare name, as it appears in rendered grammar text.
    pub fn name(&self) -> &str {
        &self.name
    }
}

// Hash/Eq are derived from the single name field, so borrowing as `str`
// keeps map lookups by name consistent.
impl Borrow<str> for Symbol {
    fn borrow(&self) -> &str {
        &self.name
    }
}

impl From<&str> for Symbol {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Symbol {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
