//! Literal terminals and character ranges.

use std::sync::LazyLock;

use smol_str::SmolStr;

/// The canonical empty terminal, built once on first use.
static EPSILON: LazyLock<Terminal> = LazyLock::new(|| Terminal::new(""));

/// A literal matched verbatim.
///
/// The empty terminal stands for the empty string (an epsilon production).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Terminal {
    content: SmolStr,
}

impl Terminal {
    pub fn new(content: impl Into<SmolStr>) -> Self {
        Self {
            content: content.into(),
        }
    }

    /// The shared empty terminal.
    pub fn epsilon() -> &'static Terminal {
        &EPSILON
    }

    /// Raw, unescaped content.
    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

impl From<&str> for Terminal {
    fn from(content: &str) -> Self {
        Self::new(content)
    }
}

impl From<String> for Terminal {
    fn from(content: String) -> Self {
        Self::new(content)
    }
}

impl From<char> for Terminal {
    fn from(c: char) -> Self {
        let mut buf = [0u8; 4];
        Self::new(&*c.encode_utf8(&mut buf))
    }
}

/// An inclusive range between two characters, e.g. `'a'` to `'z'`.
///
/// Construction never validates ordering: an inverted range is kept as given
/// and surfaces downstream, where the grammar text is compiled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TerminalRange {
    start: char,
    end: char,
}

impl TerminalRange {
    pub fn new(start: char, end: char) -> Self {
        Self { start, end }
    }

    pub fn start(&self) -> char {
        self.start
    }

    pub fn end(&self) -> char {
        self.end
    }

    /// True when `start` comes after `end`.
    pub fn is_inverted(&self) -> bool {
        self.start > self.end
    }

    /// Whether `c` lies inside the range. Always false for an inverted range.
    pub fn contains(&self, c: char) -> bool {
        self.start <= c && c <= self.end
    }
}
