//! Grammars shared across integration tests.

use ebnf_dsl::dsl::*;
use ebnf_dsl::{CharClass, Grammar};

/// `S = "a" | "b" | "c"`, built by folding three separate productions.
pub fn abc_grammar() -> Grammar {
    let s = nt("S");
    grammar([s.produces(t("a")), s.produces(t("b")), s.produces(t("c"))])
}

/// Comma separated identifiers with optional surrounding blanks.
pub fn identifier_list_grammar() -> Grammar {
    let (list, ident, start, cont, ws) = (
        nt("list"),
        nt("ident"),
        nt("ident-start"),
        nt("ident-continue"),
        nt("ws"),
    );
    grammar([
        list.produces(
            ident
                .clone()
                .then(ws.clone().then(t(",")).then(ws.clone()).then(ident.clone()).zero_or_more()),
        ),
        ident.produces(start.clone().then(cont.clone().zero_or_more())),
        start.produces(range('a', 'z').or(range('A', 'Z')).or(t("_"))),
        cont.produces(start),
        cont.produces(chars(CharClass::AsciiDigits)),
        ws.produces(t(" ").zero_or_more()),
    ])
}

/// Line-oriented `## doc` comment blocks.
pub fn doc_comment_grammar() -> Grammar {
    let entry = nt("entry");
    let doc = nt("doc");
    let doc_content = nt("doc-content");
    let line_end = nt("line-end");
    let ch = nt("char");
    let new_line = nt("new-line");
    let white_space = nt("white-space");
    let white_space_nl = nt("white-space-nl");

    grammar([
        entry.produces(doc.clone().then(white_space_nl.clone().then(doc.clone()).zero_or_more())),
        doc.produces(t("##").then(doc_content.clone()).then(line_end.clone())),
        doc_content.produces(ch.clone().zero_or_more()),
        line_end.produces(new_line.clone().or(epsilon())),
        ch.produces(range('a', 'z')),
        ch.produces(chars(CharClass::Whitespaces)),
        new_line.produces(t("\n")),
        white_space.produces(chars(CharClass::Whitespaces)),
        white_space_nl.produces(white_space.or(new_line).zero_or_more()),
    ])
}
