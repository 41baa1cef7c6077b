//! Rendering options

/// Separator written between production lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
}

impl LineEnding {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::CrLf => "\r\n",
        }
    }
}

/// Options for rendering a whole grammar.
///
/// The defaults produce the canonical text: `\n`-separated lines with no
/// trailing separator.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Separator between production lines
    pub line_ending: LineEnding,
    /// Append a separator after the last line
    pub trailing_newline: bool,
}
