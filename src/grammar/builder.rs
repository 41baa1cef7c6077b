use crate::base::Symbol;
use crate::product::{Product, Production};

use super::Grammar;

/// Collects productions one at a time, then merges them into a [`Grammar`].
#[derive(Debug, Clone, Default)]
pub struct GrammarBuilder {
    productions: Vec<Production>,
}

impl GrammarBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `symbol = product`.
    pub fn rule(mut self, symbol: &Symbol, product: impl Into<Product>) -> Self {
        self.productions.push(symbol.produces(product));
        self
    }

    pub fn push(&mut self, production: Production) -> &mut Self {
        self.productions.push(production);
        self
    }

    /// Append every production of an existing grammar.
    pub fn include(mut self, grammar: &Grammar) -> Self {
        self.productions.extend(grammar.productions());
        self
    }

    pub fn len(&self) -> usize {
        self.productions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.productions.is_empty()
    }

    pub fn build(self) -> Grammar {
        Grammar::accumulate(self.productions)
    }
}

impl Extend<Production> for GrammarBuilder {
    fn extend<I: IntoIterator<Item = Production>>(&mut self, iter: I) {
        self.productions.extend(iter);
    }
}
