//! Composite nodes: alternation and concatenation.

use super::Product;

/// A flat list of choices.
///
/// Alternations built through [`Alternation::merge`] never contain another
/// alternation as a direct child that came from an operand.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Alternation {
    choices: Vec<Product>,
}

impl Alternation {
    /// Wrap an explicit list of choices as given. May be empty.
    pub fn new(choices: Vec<Product>) -> Self {
        Self { choices }
    }

    /// Binary alternation with flattening.
    ///
    /// When only the right operand is an alternation its choices come first,
    /// followed by the left operand: `a | (b | c)` is `[b, c, a]`, not
    /// `[a, b, c]`. Rendered output depends on this order; keep it.
    pub fn merge(left: Product, right: Product) -> Self {
        match (left, right) {
            (Product::Alternation(left), Product::Alternation(right)) => {
                let mut choices = left.choices;
                choices.extend(right.choices);
                Self { choices }
            }
            (Product::Alternation(left), right) => {
                let mut choices = left.choices;
                choices.push(right);
                Self { choices }
            }
            (left, Product::Alternation(right)) => {
                let mut choices = right.choices;
                choices.push(left);
                Self { choices }
            }
            (left, right) => Self {
                choices: vec![left, right],
            },
        }
    }

    /// Put the choices of `newer` in front of the choices of `existing`.
    ///
    /// This is the fold step used when several productions share a symbol:
    /// the latest contribution is listed first, so folding `p1, p2, p3`
    /// yields `[p3, p2, p1]` regardless of how the intermediate steps were
    /// grouped.
    pub fn merge_front(newer: Product, existing: Product) -> Self {
        match (newer, existing) {
            (newer, Product::Alternation(existing)) if !matches!(newer, Product::Alternation(_)) => {
                let mut choices = Vec::with_capacity(existing.choices.len() + 1);
                choices.push(newer);
                choices.extend(existing.choices);
                Self { choices }
            }
            (newer, existing) => Self::merge(newer, existing),
        }
    }

    pub fn choices(&self) -> &[Product] {
        &self.choices
    }

    pub fn into_choices(self) -> Vec<Product> {
        self.choices
    }

    pub fn len(&self) -> usize {
        self.choices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.choices.is_empty()
    }
}

impl FromIterator<Product> for Alternation {
    fn from_iter<I: IntoIterator<Item = Product>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// An ordered sequence of at least two children.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Concatenation {
    items: Vec<Product>,
}

impl Concatenation {
    /// `[left, right]`, each kept as a single child even if it is itself a
    /// concatenation.
    pub fn pair(left: Product, right: Product) -> Self {
        Self {
            items: vec![left, right],
        }
    }

    /// Build from an explicit sequence. Returns `None` for fewer than two items.
    pub fn from_items(items: Vec<Product>) -> Option<Self> {
        (items.len() >= 2).then_some(Self { items })
    }

    pub fn items(&self) -> &[Product] {
        &self.items
    }

    pub fn into_items(self) -> Vec<Product> {
        self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}
