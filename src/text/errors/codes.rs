//! Error code definitions for grammar text diagnostics
//!
//! Error codes follow a naming convention: E{category}{number}
//! - E01xx: Lexical errors (invalid tokens)
//! - E02xx: Structural errors (delimiters, semicolons)
//! - E03xx: Production errors (left-hand side, `=`)
//! - E04xx: Expression errors

use std::fmt;

/// Error codes for grammar text diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // E01xx: Lexical errors
    // =========================================================================
    /// Invalid or unexpected character in source
    E0101,
    /// Unterminated string literal
    E0102,

    // =========================================================================
    // E02xx: Structural errors
    // =========================================================================
    /// Missing semicolon
    E0201,
    /// Unclosed brace `{`
    E0202,
    /// Unclosed parenthesis `(`
    E0203,
    /// Unclosed bracket `[`
    E0204,
    /// Unexpected closing delimiter
    E0205,

    // =========================================================================
    // E03xx: Production errors
    // =========================================================================
    /// Missing symbol name at the start of a production
    E0301,
    /// Missing `=` after the symbol name
    E0302,

    // =========================================================================
    // E04xx: Expression errors
    // =========================================================================
    /// Missing operand
    E0402,
    /// Groups nested too deeply
    E0403,
    /// Range boundary is not a single character
    E0407,
}

impl ErrorCode {
    /// Get the string representation of the error code (e.g., "E0201")
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::E0101 => "E0101",
            Self::E0102 => "E0102",
            Self::E0201 => "E0201",
            Self::E0202 => "E0202",
            Self::E0203 => "E0203",
            Self::E0204 => "E0204",
            Self::E0205 => "E0205",
            Self::E0301 => "E0301",
            Self::E0302 => "E0302",
            Self::E0402 => "E0402",
            Self::E0403 => "E0403",
            Self::E0407 => "E0407",
        }
    }

    /// Get a short description of the error category
    pub fn category_description(&self) -> &'static str {
        match self {
            Self::E0101 | Self::E0102 => "lexical error",
            Self::E0201 | Self::E0202 | Self::E0203 | Self::E0204 | Self::E0205 => {
                "structural error"
            }
            Self::E0301 | Self::E0302 => "production error",
            Self::E0402 | Self::E0403 | Self::E0407 => "expression error",
        }
    }

    /// Get the default message template for this error code
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::E0101 => "invalid character",
            Self::E0102 => "unterminated string literal",
            Self::E0201 => "missing semicolon",
            Self::E0202 => "unclosed brace",
            Self::E0203 => "unclosed parenthesis",
            Self::E0204 => "unclosed bracket",
            Self::E0205 => "unexpected closing delimiter",
            Self::E0301 => "missing symbol name",
            Self::E0302 => "missing '='",
            Self::E0402 => "missing operand",
            Self::E0403 => "groups nested too deeply",
            Self::E0407 => "range boundary must be a single character",
        }
    }

    /// Check if this is a structural error (delimiter-related)
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            Self::E0201 | Self::E0202 | Self::E0203 | Self::E0204 | Self::E0205
        )
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
