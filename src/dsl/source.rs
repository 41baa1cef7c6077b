use smol_str::SmolStr;

use crate::base::Terminal;
use crate::charclass::CharClass;
use crate::product::{Alternation, Product};

/// Input accepted by [`chars`](super::chars).
#[derive(Debug, Clone)]
pub enum CharSource {
    /// One literal terminal.
    Literal(SmolStr),
    /// Every member of the class, as single-character terminals.
    Class(CharClass),
    /// One terminal per string, in the given order.
    Choices(Vec<SmolStr>),
}

impl CharSource {
    pub fn into_product(self) -> Product {
        match self {
            CharSource::Literal(content) => Product::Terminal(Terminal::new(content)),
            CharSource::Class(class) => class.expand(),
            CharSource::Choices(choices) => choices
                .into_iter()
                .map(|content| Product::Terminal(Terminal::new(content)))
                .collect::<Alternation>()
                .into(),
        }
    }
}

impl From<&str> for CharSource {
    fn from(content: &str) -> Self {
        CharSource::Literal(content.into())
    }
}

impl From<String> for CharSource {
    fn from(content: String) -> Self {
        CharSource::Literal(content.into())
    }
}

impl From<CharClass> for CharSource {
    fn from(class: CharClass) -> Self {
        CharSource::Class(class)
    }
}

impl From<Vec<&str>> for CharSource {
    fn from(choices: Vec<&str>) -> Self {
        CharSource::Choices(choices.into_iter().map(SmolStr::from).collect())
    }
}

impl From<Vec<String>> for CharSource {
    fn from(choices: Vec<String>) -> Self {
        CharSource::Choices(choices.into_iter().map(SmolStr::from).collect())
    }
}

impl From<&[&str]> for CharSource {
    fn from(choices: &[&str]) -> Self {
        CharSource::Choices(choices.iter().copied().map(SmolStr::from).collect())
    }
}

impl<const N: usize> From<[&str; N]> for CharSource {
    fn from(choices: [&str; N]) -> Self {
        CharSource::Choices(choices.into_iter().map(SmolStr::from).collect())
    }
}
