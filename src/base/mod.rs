//! Foundation types for grammar construction.
//!
//! This module provides the atomic grammar elements:
//! - [`Symbol`] - a named non-terminal
//! - [`Terminal`] - a literal string matched verbatim (possibly empty)
//! - [`TerminalRange`] - an inclusive range between two characters
//!
//! All three are plain values: equality and hashing are by content, and
//! nothing is normalized or escaped at this layer.
//!
//! This module has NO dependencies on other crate modules.

mod symbol;
mod terminal;

pub use symbol::Symbol;
pub use terminal::{Terminal, TerminalRange};

// Names are stored as SmolStr
pub use smol_str::SmolStr;
