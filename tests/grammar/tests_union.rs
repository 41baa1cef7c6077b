//! Union of grammars compared by alternative membership.

#![allow(clippy::unwrap_used)]

use std::collections::BTreeSet;

use crate::helpers::grammar_fixtures::*;
use ebnf_dsl::dsl::*;
use ebnf_dsl::text::read_grammar;
use ebnf_dsl::{Grammar, GrammarBuilder, Product};

/// Rendered choices of a symbol's product, ignoring order.
fn member_set(grammar: &Grammar, name: &str) -> BTreeSet<String> {
    let product = grammar
        .get(name)
        .unwrap_or_else(|| panic!("Expected symbol '{name}' in grammar"));
    match product.as_alternation() {
        Some(alternation) => alternation.choices().iter().map(Product::to_string).collect(),
        None => BTreeSet::from([product.to_string()]),
    }
}

#[test]
fn test_union_keeps_every_alternative() {
    let s = nt("S");
    let left = grammar([s.produces(t("a")), s.produces(t("b"))]);
    let right = grammar([s.produces(t("c")), nt("T").produces(t("t"))]);
    let union = left.union(&right);

    let expected: BTreeSet<_> = ["\"a\"", "\"b\"", "\"c\""].map(String::from).into();
    assert_eq!(member_set(&union, "S"), expected);
    assert_eq!(member_set(&union, "T"), BTreeSet::from([String::from("\"t\"")]));
}

/// Three grammars that all define `S`; the second contributes an alternation.
fn overlapping_grammars() -> [Grammar; 3] {
    let (s, t_sym) = (nt("S"), nt("T"));
    [
        grammar([s.produces(t("a")), s.produces(t("b"))]),
        grammar([s.produces(t("c").or(t("d"))), t_sym.produces(t("t"))]),
        grammar([s.produces(t("e")), s.produces(t("a")), t_sym.produces(nt("S"))]),
    ]
}

fn assert_same_members(left: &Grammar, right: &Grammar) {
    assert_eq!(left.len(), right.len());
    for symbol in left.symbols() {
        assert_eq!(
            member_set(left, symbol.name()),
            member_set(right, symbol.name()),
            "symbol {symbol}"
        );
    }
}

#[test]
fn test_union_is_commutative_in_membership() {
    let [g1, g2, g3] = overlapping_grammars();
    for (left, right) in [(&g1, &g2), (&g1, &g3), (&g2, &g3)] {
        assert_same_members(&left.union(right), &right.union(left));
    }

    let expected: BTreeSet<_> = ["\"a\"", "\"b\"", "\"c\"", "\"d\""].map(String::from).into();
    assert_eq!(member_set(&g2.union(&g1), "S"), expected);
}

#[test]
fn test_union_is_associative_in_membership() {
    let [g1, g2, g3] = overlapping_grammars();
    let left_first = g1.union(&g2).union(&g3);
    let right_first = g1.union(&g2.union(&g3));
    assert_same_members(&left_first, &right_first);

    let expected: BTreeSet<_> = ["\"a\"", "\"b\"", "\"c\"", "\"d\"", "\"e\""]
        .map(String::from)
        .into();
    assert_eq!(member_set(&left_first, "S"), expected);
    assert_eq!(
        member_set(&left_first, "T"),
        BTreeSet::from([String::from("S"), String::from("\"t\"")])
    );
}

#[test]
fn test_union_survives_render_and_read() {
    let [g1, g2, g3] = overlapping_grammars();
    let union = g1.union(&g2).union(&g3);
    let reread = read_grammar(&union.to_string()).unwrap();
    assert_same_members(&union, &reread);
    assert_eq!(reread.to_string(), union.to_string());
}

#[test]
fn test_union_keeps_shared_symbol_order_of_first_operand() {
    let [g1, g2, _] = overlapping_grammars();
    let names: Vec<_> = g2.union(&g1).symbols().map(|s| s.name().to_string()).collect();
    assert_eq!(names, vec!["S", "T"]);
}

#[test]
fn test_union_with_itself_duplicates_choices() {
    let grammar = abc_grammar();
    let doubled = Grammar::form_union(&grammar, &grammar);
    assert_eq!(doubled.get("S").unwrap().choices().len(), 6);
    assert_eq!(member_set(&doubled, "S"), member_set(&grammar, "S"));
}

#[test]
fn test_builder_matches_grammar_function() {
    let s = nt("S");
    let built = GrammarBuilder::new()
        .rule(&s, t("a"))
        .rule(&s, t("b"))
        .build();

    let folded = grammar([s.produces(t("a")), s.produces(t("b"))]);
    assert_eq!(built, folded);
}
