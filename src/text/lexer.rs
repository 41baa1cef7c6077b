//! Logos-based lexer for grammar text
//!
//! Tokenization of the canonical text produced by [`render`](crate::render).

use logos::Logos;
use text_size::{TextRange, TextSize};

/// Token categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Whitespace,
    Name,
    String,
    UnterminatedString,
    Eq,
    Semicolon,
    Pipe,
    Comma,
    Ellipsis,
    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,
    Error,
}

impl TokenKind {
    pub fn is_trivia(&self) -> bool {
        matches!(self, Self::Whitespace)
    }

    /// Whether an operand may begin with this token
    pub fn starts_operand(&self) -> bool {
        matches!(
            self,
            Self::Name
                | Self::String
                | Self::UnterminatedString
                | Self::LParen
                | Self::LBracket
                | Self::LBrace
                | Self::Error
        )
    }

    /// Human-readable form for diagnostics
    pub fn describe(&self) -> &'static str {
        match self {
            Self::Whitespace => "whitespace",
            Self::Name => "symbol name",
            Self::String | Self::UnterminatedString => "string",
            Self::Eq => "'='",
            Self::Semicolon => "';'",
            Self::Pipe => "'|'",
            Self::Comma => "','",
            Self::Ellipsis => "'...'",
            Self::LParen => "'('",
            Self::RParen => "')'",
            Self::LBracket => "'['",
            Self::RBracket => "']'",
            Self::LBrace => "'{'",
            Self::RBrace => "'}'",
            Self::Error => "invalid character",
        }
    }
}

/// A token with its kind, text, and position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    pub offset: TextSize,
}

impl Token<'_> {
    pub fn range(&self) -> TextRange {
        TextRange::at(self.offset, TextSize::of(self.text))
    }

    pub fn end(&self) -> TextSize {
        self.range().end()
    }
}

/// Lexer wrapping the logos-generated tokenizer
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, LogosToken>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            inner: LogosToken::lexer(input),
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let logos_token = self.inner.next()?;
        let text = self.inner.slice();
        let offset = TextSize::new(self.inner.span().start as u32);

        let kind = match logos_token {
            Ok(t) => t.into(),
            Err(()) => TokenKind::Error,
        };

        Some(Token { kind, text, offset })
    }
}

/// Tokenize an entire string into a Vec
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    Lexer::new(input).collect()
}

/// Logos token enum - maps to TokenKind
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
pub enum LogosToken {
    #[regex(r"\s+")]
    Whitespace,

    // Anything that is not whitespace, a quote or punctuation.
    #[regex(r#"[^\s"=;|,()\[\]{}]+"#)]
    Name,

    #[regex(r#""([^"\\]|\\(.|\n))*""#)]
    String,

    #[regex(r#""([^"\\]|\\(.|\n))*\\?"#)]
    UnterminatedString,

    #[token("=")]
    Eq,

    #[token(";")]
    Semicolon,

    #[token("|")]
    Pipe,

    #[token(",")]
    Comma,

    #[token("...", priority = 10)]
    Ellipsis,

    #[token("(")]
    LParen,

    #[token(")")]
    RParen,

    #[token("[")]
    LBracket,

    #[token("]")]
    RBracket,

    #[token("{")]
    LBrace,

    #[token("}")]
    RBrace,
}

impl From<LogosToken> for TokenKind {
    fn from(token: LogosToken) -> Self {
        match token {
            LogosToken::Whitespace => Self::Whitespace,
            LogosToken::Name => Self::Name,
            LogosToken::String => Self::String,
            LogosToken::UnterminatedString => Self::UnterminatedString,
            LogosToken::Eq => Self::Eq,
            LogosToken::Semicolon => Self::Semicolon,
            LogosToken::Pipe => Self::Pipe,
            LogosToken::Comma => Self::Comma,
            LogosToken::Ellipsis => Self::Ellipsis,
            LogosToken::LParen => Self::LParen,
            LogosToken::RParen => Self::RParen,
            LogosToken::LBracket => Self::LBracket,
            LogosToken::RBracket => Self::RBracket,
            LogosToken::LBrace => Self::LBrace,
            LogosToken::RBrace => Self::RBrace,
        }
    }
}
