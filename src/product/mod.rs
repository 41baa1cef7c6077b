//! Grammar expressions and productions.
//!
//! A [`Product`] is an immutable expression tree over a closed set of
//! variants. Trees are built bottom-up and never mutated afterwards; the only
//! construction with behavior is alternation, which keeps its choices flat.
//!
//! ## Alternation merge
//!
//! ```text
//! alternate(A[x..], B[y..]) = [x.., y..]
//! alternate(A[x..], b)      = [x.., b]
//! alternate(a, B[y..])      = [y.., a]
//! alternate(a, b)           = [a, b]
//! ```
//!
//! Concatenation does not flatten: `then(then(a, b), c)` keeps the inner
//! concatenation as a single child.

mod alternation;

use crate::base::{Symbol, Terminal, TerminalRange};

pub use alternation::{Alternation, Concatenation};

/// An expression node.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Product {
    /// Reference to a non-terminal
    Symbol(Symbol),
    /// Literal string
    Terminal(Terminal),
    /// Inclusive character range
    Range(TerminalRange),
    /// Ordered sequence, two or more children
    Concatenation(Concatenation),
    /// Flat list of choices
    Alternation(Alternation),
    /// Zero or one occurrence
    Optional(Box<Product>),
    /// Zero or more occurrences
    ZeroOrMore(Box<Product>),
    /// One or more occurrences
    OneOrMore(Box<Product>),
}

impl Product {
    /// Combine two products as alternatives, flattening existing alternations.
    pub fn alternate(left: Product, right: Product) -> Product {
        Product::Alternation(Alternation::merge(left, right))
    }

    /// Sequence two products. Never flattens nested concatenations.
    pub fn concatenate(left: Product, right: Product) -> Product {
        Product::Concatenation(Concatenation::pair(left, right))
    }

    pub fn optional(inner: Product) -> Product {
        Product::Optional(Box::new(inner))
    }

    pub fn zero_or_more(inner: Product) -> Product {
        Product::ZeroOrMore(Box::new(inner))
    }

    pub fn one_or_more(inner: Product) -> Product {
        Product::OneOrMore(Box::new(inner))
    }

    pub fn as_alternation(&self) -> Option<&Alternation> {
        match self {
            Product::Alternation(alternation) => Some(alternation),
            _ => None,
        }
    }

    pub fn as_concatenation(&self) -> Option<&Concatenation> {
        match self {
            Product::Concatenation(concatenation) => Some(concatenation),
            _ => None,
        }
    }

    pub fn as_symbol(&self) -> Option<&Symbol> {
        match self {
            Product::Symbol(symbol) => Some(symbol),
            _ => None,
        }
    }

    pub fn as_terminal(&self) -> Option<&Terminal> {
        match self {
            Product::Terminal(terminal) => Some(terminal),
            _ => None,
        }
    }

    /// The wrapped child of `Optional`, `ZeroOrMore` or `OneOrMore`.
    pub fn inner(&self) -> Option<&Product> {
        match self {
            Product::Optional(inner) | Product::ZeroOrMore(inner) | Product::OneOrMore(inner) => {
                Some(inner)
            }
            _ => None,
        }
    }

    /// Top-level choices: the children of an alternation, or `self` alone.
    pub fn choices(&self) -> &[Product] {
        match self {
            Product::Alternation(alternation) => alternation.choices(),
            other => std::slice::from_ref(other),
        }
    }
}

impl From<Symbol> for Product {
    fn from(symbol: Symbol) -> Self {
        Product::Symbol(symbol)
    }
}

impl From<&Symbol> for Product {
    fn from(symbol: &Symbol) -> Self {
        Product::Symbol(symbol.clone())
    }
}

impl From<Terminal> for Product {
    fn from(terminal: Terminal) -> Self {
        Product::Terminal(terminal)
    }
}

impl From<TerminalRange> for Product {
    fn from(range: TerminalRange) -> Self {
        Product::Range(range)
    }
}

impl From<Alternation> for Product {
    fn from(alternation: Alternation) -> Self {
        Product::Alternation(alternation)
    }
}

impl From<Concatenation> for Product {
    fn from(concatenation: Concatenation) -> Self {
        Product::Concatenation(concatenation)
    }
}

/// "`symbol` may be replaced by `product`".
///
/// Several productions may share a symbol; they are merged into one
/// alternation when collected into a [`Grammar`](crate::grammar::Grammar).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Production {
    symbol: Symbol,
    product: Product,
}

impl Production {
    pub fn new(symbol: Symbol, product: impl Into<Product>) -> Self {
        Self {
            symbol,
            product: product.into(),
        }
    }

    pub fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn into_parts(self) -> (Symbol, Product) {
        (self.symbol, self.product)
    }
}

impl Symbol {
    /// Bind this symbol to an expression.
    pub fn produces(&self, product: impl Into<Product>) -> Production {
        Production::new(self.clone(), product)
    }
}
