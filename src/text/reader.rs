//! Recursive-descent reader for grammar text
//!
//! ```text
//! grammar     = { production } ;
//! production  = name "=" expression ";" ;
//! expression  = sequence { "|" sequence } ;
//! sequence    = atom { "," atom } ;
//! atom        = name | string [ "..." string ]
//!             | "(" [ expression ] ")" | "[" expression "]"
//!             | "[{" expression "}]" | "{" expression "}" ;
//! ```
//!
//! A parenthesized group always reads as an alternation, so `()` is the
//! empty alternation and `("x")` a single-choice one. `[{` only opens a
//! zero-or-more group when its closing `}]` follows; otherwise `[` is read as
//! an optional whose first item is a one-or-more group. The `{ ... }` body is
//! read once either way.
//!
//! Groups may nest at most [`MAX_NESTING`] levels deep.

use text_size::TextSize;

use crate::base::{Symbol, Terminal, TerminalRange};
use crate::product::{Alternation, Concatenation, Product, Production};

use super::errors::{ErrorCode, SyntaxError};
use super::lexer::{Token, TokenKind, tokenize};

type ReadResult<T> = Result<T, SyntaxError>;

/// Deepest accepted nesting of `()`, `[]` and `{}` groups.
pub(super) const MAX_NESTING: usize = 128;

pub(super) struct Reader<'a> {
    tokens: Vec<Token<'a>>,
    pos: usize,
    eof: TextSize,
    depth: usize,
}

impl<'a> Reader<'a> {
    pub(super) fn new(input: &'a str) -> Self {
        let tokens = tokenize(input)
            .into_iter()
            .filter(|t| !t.kind.is_trivia())
            .collect();
        Self {
            tokens,
            pos: 0,
            eof: TextSize::of(input),
            depth: 0,
        }
    }

    /// Read every production, collecting all errors.
    pub(super) fn productions(&mut self) -> Result<Vec<Production>, Vec<SyntaxError>> {
        let mut productions = Vec::new();
        let mut errors = Vec::new();

        while self.peek().is_some() {
            match self.production() {
                Ok(production) => productions.push(production),
                Err(error) => {
                    errors.push(error);
                    self.recover();
                }
            }
        }

        if errors.is_empty() {
            Ok(productions)
        } else {
            Err(errors)
        }
    }

    /// Read a single expression that must span the whole input.
    pub(super) fn standalone_expression(&mut self) -> ReadResult<Product> {
        let product = self.expression()?;
        match self.peek() {
            None => Ok(product),
            Some(token) => Err(self.unexpected(token, ErrorCode::E0402, "end of expression")),
        }
    }

    fn production(&mut self) -> ReadResult<Production> {
        let name = self.expect(TokenKind::Name, ErrorCode::E0301)?;
        let symbol = Symbol::new(name.text);
        self.expect(TokenKind::Eq, ErrorCode::E0302)?;
        let product = self.expression()?;
        self.expect(TokenKind::Semicolon, ErrorCode::E0201)
            .map_err(|e| e.with_hint(format!("end the production for '{}' with ';'", symbol)))?;
        Ok(Production::new(symbol, product))
    }

    fn expression(&mut self) -> ReadResult<Product> {
        let choices = self.choices()?;
        Ok(collapse_choices(choices))
    }

    fn choices(&mut self) -> ReadResult<Vec<Product>> {
        let first = self.sequence()?;
        self.choices_after(first)
    }

    /// Remaining `| sequence` tails after an already-read first choice.
    fn choices_after(&mut self, first: Product) -> ReadResult<Vec<Product>> {
        let mut choices = vec![first];
        while self.eat(TokenKind::Pipe) {
            choices.push(self.sequence()?);
        }
        Ok(choices)
    }

    fn sequence(&mut self) -> ReadResult<Product> {
        let first = self.atom()?;
        self.sequence_after(first)
    }

    /// Remaining `, atom` tails after an already-read first item.
    fn sequence_after(&mut self, first: Product) -> ReadResult<Product> {
        let mut items = vec![first];
        while self.eat(TokenKind::Comma) {
            items.push(self.atom()?);
        }
        if items.len() == 1 {
            if let Some(only) = items.pop() {
                return Ok(only);
            }
        }
        Ok(Concatenation::from_items(items)
            .map(Product::from)
            .unwrap_or_else(|| Alternation::default().into()))
    }

    fn atom(&mut self) -> ReadResult<Product> {
        let Some(token) = self.peek().cloned() else {
            return Err(SyntaxError::at_offset(
                "expected operand, found end of input",
                self.eof,
                ErrorCode::E0402,
            ));
        };
        // Leave separators in place so recovery still sees the ';'
        if token.kind.starts_operand() {
            self.pos += 1;
        }

        match token.kind {
            TokenKind::Name => Ok(Symbol::new(token.text).into()),
            TokenKind::String => self.string_or_range(&token),
            TokenKind::LParen => self.nested(&token, |r| r.group(&token)),
            TokenKind::LBracket => self.nested(&token, |r| r.bracketed(&token)),
            TokenKind::LBrace => self.nested(&token, |r| r.braced(&token)),
            TokenKind::UnterminatedString => Err(SyntaxError::new(
                ErrorCode::E0102.default_message(),
                token.range(),
                ErrorCode::E0102,
            )),
            TokenKind::RParen | TokenKind::RBracket | TokenKind::RBrace => Err(SyntaxError::new(
                format!("unexpected closing {}", token.kind.describe()),
                token.range(),
                ErrorCode::E0205,
            )),
            TokenKind::Error => Err(SyntaxError::new(
                format!("invalid character '{}'", token.text),
                token.range(),
                ErrorCode::E0101,
            )),
            _ => Err(self.unexpected(&token, ErrorCode::E0402, "operand")),
        }
    }

    fn string_or_range(&mut self, token: &Token<'a>) -> ReadResult<Product> {
        let start = unescape(token.text);
        if !self.eat(TokenKind::Ellipsis) {
            return Ok(Terminal::new(start).into());
        }

        let end_token = self.expect(TokenKind::String, ErrorCode::E0407)?;
        // Range boundaries are written verbatim, without escaping
        let start_char = single_char(strip_quotes(token.text), token)?;
        let end_char = single_char(strip_quotes(end_token.text), &end_token)?;
        Ok(TerminalRange::new(start_char, end_char).into())
    }

    fn group(&mut self, open: &Token<'a>) -> ReadResult<Product> {
        if self.eat(TokenKind::RParen) {
            return Ok(Alternation::default().into());
        }
        let choices = self.choices()?;
        self.close(TokenKind::RParen, ErrorCode::E0203, open)?;
        Ok(Alternation::new(choices).into())
    }

    fn bracketed(&mut self, open: &Token<'a>) -> ReadResult<Product> {
        let brace = self
            .peek()
            .filter(|next| next.kind == TokenKind::LBrace && next.offset == open.end())
            .cloned();

        let inner = match brace {
            Some(brace) => {
                self.pos += 1;
                let body = self.nested(&brace, |r| r.braced_body(&brace))?;
                if self.close_bracket_follows(&body.close) {
                    self.pos += 1;
                    return Ok(Product::zero_or_more(body.inner));
                }
                // `[{x}, ...]`: the group was the first item of an optional
                let first = self.sequence_after(Product::one_or_more(body.inner))?;
                collapse_choices(self.choices_after(first)?)
            }
            None => self.expression()?,
        };

        self.close(TokenKind::RBracket, ErrorCode::E0204, open)?;
        Ok(Product::optional(inner))
    }

    fn braced(&mut self, open: &Token<'a>) -> ReadResult<Product> {
        let inner = self.expression()?;
        self.close(TokenKind::RBrace, ErrorCode::E0202, open)?;
        Ok(Product::one_or_more(inner))
    }

    /// The expression inside `{ ... }` plus its closing brace, `{` already consumed.
    fn braced_body(&mut self, open: &Token<'a>) -> ReadResult<BracedBody<'a>> {
        let inner = self.expression()?;
        let close = self.close(TokenKind::RBrace, ErrorCode::E0202, open)?;
        Ok(BracedBody { inner, close })
    }

    /// Whether the next token is a `]` written directly after `close`.
    fn close_bracket_follows(&self, close: &Token<'a>) -> bool {
        self.peek()
            .is_some_and(|next| next.kind == TokenKind::RBracket && next.offset == close.end())
    }

    /// Run `read` one group level deeper, failing past [`MAX_NESTING`].
    fn nested<T>(
        &mut self,
        open: &Token<'a>,
        read: impl FnOnce(&mut Self) -> ReadResult<T>,
    ) -> ReadResult<T> {
        if self.depth >= MAX_NESTING {
            return Err(SyntaxError::builder(ErrorCode::E0403)
                .message(format!(
                    "{} nested more than {MAX_NESTING} levels deep",
                    open.kind.describe()
                ))
                .range(open.range())
                .build());
        }
        self.depth += 1;
        let result = read(self);
        self.depth -= 1;
        result
    }

    // ------------------------------------------------------------------
    // Token helpers
    // ------------------------------------------------------------------

    fn peek(&self) -> Option<&Token<'a>> {
        self.tokens.get(self.pos)
    }

    fn bump(&mut self) -> Option<Token<'a>> {
        let token = self.tokens.get(self.pos).cloned()?;
        self.pos += 1;
        Some(token)
    }

    fn eat(&mut self, kind: TokenKind) -> bool {
        if self.peek().is_some_and(|t| t.kind == kind) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn expect(&mut self, kind: TokenKind, code: ErrorCode) -> ReadResult<Token<'a>> {
        match self.peek() {
            Some(token) if token.kind == kind => {
                let token = token.clone();
                self.pos += 1;
                Ok(token)
            }
            Some(token) => Err(self.unexpected(token, code, kind.describe())),
            None => Err(SyntaxError::at_offset(
                format!("expected {}, found end of input", kind.describe()),
                self.eof,
                code,
            )),
        }
    }

    fn close(&mut self, kind: TokenKind, code: ErrorCode, open: &Token<'a>) -> ReadResult<Token<'a>> {
        self.expect(kind, code).map_err(|e| {
            let hint = format!("{} opened at byte {}", open.kind.describe(), u32::from(open.offset));
            e.with_hint(hint)
        })
    }

    fn unexpected(&self, token: &Token<'a>, code: ErrorCode, expected: &str) -> SyntaxError {
        SyntaxError::builder(code)
            .message(format!("expected {expected}, found {}", token.kind.describe()))
            .range(token.range())
            .build()
    }

    /// Skip past the next `;` so reading resumes at the following production.
    fn recover(&mut self) {
        while let Some(token) = self.bump() {
            if token.kind == TokenKind::Semicolon {
                break;
            }
        }
    }
}

struct BracedBody<'a> {
    inner: Product,
    close: Token<'a>,
}

/// A single choice stands alone, several form an alternation.
fn collapse_choices(mut choices: Vec<Product>) -> Product {
    if choices.len() == 1 {
        if let Some(only) = choices.pop() {
            return only;
        }
    }
    Alternation::new(choices).into()
}

fn strip_quotes(text: &str) -> &str {
    text.strip_prefix('"')
        .and_then(|t| t.strip_suffix('"'))
        .unwrap_or(text)
}

/// Undo terminal escaping: `\\` and `\"`. Other backslashes are literal.
fn unescape(text: &str) -> String {
    let body = strip_quotes(text);
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some(escaped @ ('\\' | '"')) => out.push(escaped),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

fn single_char(body: &str, token: &Token<'_>) -> ReadResult<char> {
    let mut chars = body.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(SyntaxError::builder(ErrorCode::E0407)
            .message(format!(
                "range boundary {} is {} characters",
                token.text,
                body.chars().count()
            ))
            .range(token.range())
            .hint("use a terminal or an alternation for multi-character literals")
            .build()),
    }
}
