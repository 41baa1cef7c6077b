//! Rendered text read back through `ebnf_dsl::text`.

#![allow(clippy::unwrap_used)]

use crate::helpers::grammar_fixtures::*;
use ebnf_dsl::render::render_grammar;
use ebnf_dsl::text::{read_grammar, read_productions};
use ebnf_dsl::{Grammar, LineEnding, RenderOptions};
use rstest::rstest;

#[rstest]
#[case(abc_grammar())]
#[case(identifier_list_grammar())]
#[case(doc_comment_grammar())]
fn test_rendered_text_is_stable(#[case] grammar: Grammar) {
    let text = grammar.to_string();
    let reread = read_grammar(&text).unwrap_or_else(|e| panic!("{e}\n{text}"));
    assert_eq!(reread.to_string(), text);
}

#[rstest]
#[case(abc_grammar())]
#[case(doc_comment_grammar())]
fn test_crlf_with_trailing_newline(#[case] grammar: Grammar) {
    let options = RenderOptions {
        line_ending: LineEnding::CrLf,
        trailing_newline: true,
    };
    let text = render_grammar(&grammar, &options);
    assert!(text.ends_with("\r\n"));
    assert_eq!(text.matches("\r\n").count(), grammar.len());

    let reread = read_grammar(&text).unwrap();
    assert_eq!(reread.to_string(), grammar.to_string());
}

#[test]
fn test_one_production_per_symbol() {
    let grammar = identifier_list_grammar();
    let productions = read_productions(&grammar.to_string()).unwrap();
    assert_eq!(productions.len(), grammar.len());
    for (read, (symbol, product)) in productions.iter().zip(grammar.iter()) {
        assert_eq!(read.symbol(), symbol);
        assert_eq!(read.to_string(), format!("{symbol} = {product};"));
    }
}
