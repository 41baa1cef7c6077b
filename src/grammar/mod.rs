//! Grammar accumulation.
//!
//! A [`Grammar`] holds at most one production per symbol. Repeated
//! definitions are folded into one alternation in authoring order:
//!
//! ```text
//! merged = P1
//! merged = merge_front(P2, merged)   -> [P2, P1]
//! merged = merge_front(P3, merged)   -> [P3, P2, P1]
//! ```
//!
//! Symbols keep the position of their first definition. A grammar is never
//! mutated once built; [`Grammar::union`] produces a new one.

mod builder;

use indexmap::IndexMap;
use indexmap::map::Entry;
use rustc_hash::FxBuildHasher;
use tracing::{debug, trace};

use crate::base::{Symbol, Terminal};
use crate::product::{Alternation, Product, Production};

pub use builder::GrammarBuilder;

/// An ordered collection of productions, one per symbol.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grammar {
    rules: IndexMap<Symbol, Product, FxBuildHasher>,
}

impl Grammar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Group productions by symbol, folding repeats into one alternation.
    pub fn accumulate(productions: impl IntoIterator<Item = Production>) -> Self {
        let mut rules: IndexMap<Symbol, Product, FxBuildHasher> = IndexMap::default();
        let mut merges = 0usize;

        for production in productions {
            let (symbol, product) = production.into_parts();
            match rules.entry(symbol) {
                Entry::Vacant(entry) => {
                    entry.insert(product);
                }
                Entry::Occupied(mut entry) => {
                    trace!(symbol = %entry.key(), "merging repeated definition");
                    let slot = entry.get_mut();
                    let existing =
                        std::mem::replace(slot, Product::Terminal(Terminal::epsilon().clone()));
                    *slot = Product::Alternation(Alternation::merge_front(product, existing));
                    merges += 1;
                }
            }
        }

        debug!(symbols = rules.len(), merges, "accumulated grammar");
        Self { rules }
    }

    /// Accumulate the productions of `self` followed by those of `other`.
    pub fn union(&self, other: &Grammar) -> Grammar {
        Self::accumulate(self.productions().chain(other.productions()))
    }

    /// Same as `left.union(right)`.
    pub fn form_union(left: &Grammar, right: &Grammar) -> Grammar {
        left.union(right)
    }

    /// The merged product for a symbol name.
    pub fn get(&self, name: &str) -> Option<&Product> {
        self.rules.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.rules.contains_key(name)
    }

    /// Symbols in grammar order.
    pub fn symbols(&self) -> impl Iterator<Item = &Symbol> {
        self.rules.keys()
    }

    /// `(symbol, product)` pairs in grammar order.
    pub fn iter(&self) -> impl Iterator<Item = (&Symbol, &Product)> {
        self.rules.iter()
    }

    /// Owned productions in grammar order.
    pub fn productions(&self) -> impl Iterator<Item = Production> + '_ {
        self.rules
            .iter()
            .map(|(symbol, product)| Production::new(symbol.clone(), product.clone()))
    }

    pub fn into_productions(self) -> impl Iterator<Item = Production> {
        self.rules
            .into_iter()
            .map(|(symbol, product)| Production::new(symbol, product))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl FromIterator<Production> for Grammar {
    fn from_iter<I: IntoIterator<Item = Production>>(iter: I) -> Self {
        Self::accumulate(iter)
    }
}

impl From<Production> for Grammar {
    fn from(production: Production) -> Self {
        Self::accumulate([production])
    }
}
