//! A small backtracking engine used to drive rendered grammars end to end.
//!
//! It reads the rendered text back with `ebnf_dsl::text`, then explores every
//! derivation of the start symbol. Exponential in the worst case and unable
//! to handle left recursion; only meant for the short inputs in tests.

use ebnf_dsl::text::read_grammar;
use ebnf_dsl::{Error, Grammar, GrammarEngine, Product, Result, SyntaxTree};

/// Recursion limit guarding against left-recursive grammars.
const MAX_DEPTH: usize = 256;

/// (end offset, trees produced so far)
type Derivation = (usize, Vec<SyntaxTree>);

pub struct BacktrackingEngine;

pub struct CompiledGrammar {
    grammar: Grammar,
    start: String,
}

impl CompiledGrammar {
    pub fn grammar(&self) -> &Grammar {
        &self.grammar
    }
}

impl GrammarEngine for BacktrackingEngine {
    type Compiled = CompiledGrammar;

    fn compile(&self, text: &str, start: &str) -> Result<CompiledGrammar> {
        let grammar = read_grammar(text)?;
        if !grammar.contains(start) {
            return Err(Error::UnknownStart(start.to_string()));
        }
        Ok(CompiledGrammar {
            grammar,
            start: start.to_string(),
        })
    }

    fn parse(&self, compiled: &CompiledGrammar, input: &str) -> Result<SyntaxTree> {
        let matcher = Matcher {
            grammar: &compiled.grammar,
            input,
        };
        let start = Product::Symbol(compiled.start.as_str().into());
        let derivations = matcher.derive(&start, 0, 0);
        let furthest = derivations.iter().map(|(end, _)| *end).max().unwrap_or(0);

        derivations
            .into_iter()
            .find(|(end, _)| *end == input.len())
            .and_then(|(_, mut trees)| trees.pop())
            .ok_or(Error::Rejected { offset: furthest })
    }
}

struct Matcher<'g> {
    grammar: &'g Grammar,
    input: &'g str,
}

impl Matcher<'_> {
    fn derive(&self, product: &Product, pos: usize, depth: usize) -> Vec<Derivation> {
        if depth > MAX_DEPTH {
            return Vec::new();
        }
        let rest = &self.input[pos..];

        match product {
            Product::Symbol(symbol) => {
                let Some(body) = self.grammar.get(symbol.name()) else {
                    return Vec::new();
                };
                self.derive(body, pos, depth + 1)
                    .into_iter()
                    .map(|(end, children)| (end, vec![SyntaxTree::node(symbol.name(), children)]))
                    .collect()
            }
            Product::Terminal(terminal) => {
                let content = terminal.content();
                if !rest.starts_with(content) {
                    return Vec::new();
                }
                let leaves = if content.is_empty() {
                    Vec::new()
                } else {
                    vec![SyntaxTree::leaf(content)]
                };
                vec![(pos + content.len(), leaves)]
            }
            Product::Range(range) => match rest.chars().next() {
                Some(c) if range.contains(c) => {
                    vec![(pos + c.len_utf8(), vec![SyntaxTree::leaf(c.to_string())])]
                }
                _ => Vec::new(),
            },
            Product::Alternation(alternation) => alternation
                .choices()
                .iter()
                .flat_map(|choice| self.derive(choice, pos, depth + 1))
                .collect(),
            Product::Concatenation(concatenation) => {
                self.sequence(concatenation.items(), pos, depth)
            }
            Product::Optional(inner) => {
                let mut out = vec![(pos, Vec::new())];
                out.extend(self.derive(inner, pos, depth + 1));
                out
            }
            Product::ZeroOrMore(inner) => self.repeat(inner, pos, depth),
            Product::OneOrMore(inner) => self
                .derive(inner, pos, depth + 1)
                .into_iter()
                .flat_map(|(mid, first)| {
                    self.repeat(inner, mid, depth)
                        .into_iter()
                        .map(move |(end, more)| (end, [first.clone(), more].concat()))
                })
                .collect(),
        }
    }

    fn sequence(&self, items: &[Product], pos: usize, depth: usize) -> Vec<Derivation> {
        let mut partial: Vec<Derivation> = vec![(pos, Vec::new())];
        for item in items {
            partial = partial
                .into_iter()
                .flat_map(|(at, trees)| {
                    self.derive(item, at, depth + 1)
                        .into_iter()
                        .map(move |(end, more)| (end, [trees.clone(), more].concat()))
                })
                .collect();
            if partial.is_empty() {
                break;
            }
        }
        partial
    }

    /// Zero or more repetitions; iterations that consume nothing are dropped.
    fn repeat(&self, inner: &Product, pos: usize, depth: usize) -> Vec<Derivation> {
        let mut out: Vec<Derivation> = vec![(pos, Vec::new())];
        let mut frontier: Vec<Derivation> = vec![(pos, Vec::new())];
        while let Some((at, trees)) = frontier.pop() {
            for (end, more) in self.derive(inner, at, depth + 1) {
                if end == at {
                    continue;
                }
                let combined = [trees.clone(), more].concat();
                out.push((end, combined.clone()));
                frontier.push((end, combined));
            }
        }
        out
    }
}
