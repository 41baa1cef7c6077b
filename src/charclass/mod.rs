//! Character classes and their expansion into literal alternatives.
//!
//! A [`CharClass`] is a membership-testable set of characters. Expansion
//! enumerates every Unicode scalar value that belongs to the class and turns
//! each one into a single-character [`Terminal`], in strictly increasing
//! codepoint order.
//!
//! ## Planes
//!
//! The codepoint space `0..=0x10FFFF` is split into 17 planes of `0x10000`
//! codepoints. A plane is skipped when the class reports no member in it;
//! retained planes are scanned in parallel and concatenated in plane order.
//! Surrogates (`0xD800..=0xDFFF`) are not scalar values and are skipped.

use rayon::prelude::*;
use tracing::{debug, trace};

use crate::base::Terminal;
use crate::product::{Alternation, Product};

/// Number of 16-bit planes covering the Unicode codepoint space.
pub const PLANE_COUNT: u8 = 17;

const PLANE_SIZE: u32 = 0x1_0000;

/// A predicate-backed set of characters.
#[derive(Debug, Clone)]
pub enum CharClass {
    /// Horizontal whitespace: tab plus the space separators (`Zs`).
    Whitespaces,
    /// Line separators: U+000A..=U+000D, U+0085, U+2028, U+2029.
    Newlines,
    /// Everything `char::is_whitespace` accepts.
    WhitespacesAndNewlines,
    /// `0` through `9`.
    AsciiDigits,
    /// Everything `char::is_numeric` accepts.
    Numeric,
    /// Everything `char::is_alphabetic` accepts.
    Letters,
    /// Everything `char::is_alphanumeric` accepts.
    Alphanumerics,
    /// `XID_Start` plus `_`.
    IdentStart,
    /// `XID_Continue`.
    IdentContinue,
    /// Exactly one character.
    Single(char),
    /// Inclusive ranges. Inverted ranges contribute nothing.
    Ranges(Vec<(char, char)>),
    /// Arbitrary predicate.
    Custom(fn(char) -> bool),
    /// Members of any listed class.
    Union(Vec<CharClass>),
}

impl CharClass {
    pub fn contains(&self, c: char) -> bool {
        match self {
            CharClass::Whitespaces => is_horizontal_whitespace(c),
            CharClass::Newlines => is_newline(c),
            CharClass::WhitespacesAndNewlines => c.is_whitespace(),
            CharClass::AsciiDigits => c.is_ascii_digit(),
            CharClass::Numeric => c.is_numeric(),
            CharClass::Letters => c.is_alphabetic(),
            CharClass::Alphanumerics => c.is_alphanumeric(),
            CharClass::IdentStart => c == '_' || unicode_ident::is_xid_start(c),
            CharClass::IdentContinue => unicode_ident::is_xid_continue(c),
            CharClass::Single(member) => *member == c,
            CharClass::Ranges(ranges) => ranges.iter().any(|&(lo, hi)| lo <= c && c <= hi),
            CharClass::Custom(predicate) => predicate(c),
            CharClass::Union(classes) => classes.iter().any(|class| class.contains(c)),
        }
    }

    /// Whether the class may have a member in `plane`.
    ///
    /// Exact for the enumerable classes. Predicate-backed classes answer
    /// `true` for every plane, which only costs a scan.
    pub fn has_member_in_plane(&self, plane: u8) -> bool {
        if plane >= PLANE_COUNT {
            return false;
        }
        match self {
            CharClass::Whitespaces
            | CharClass::Newlines
            | CharClass::WhitespacesAndNewlines
            | CharClass::AsciiDigits => plane == 0,
            CharClass::Single(member) => plane_of(*member) == plane,
            CharClass::Ranges(ranges) => ranges
                .iter()
                .filter(|(lo, hi)| lo <= hi)
                .any(|&(lo, hi)| plane_of(lo) <= plane && plane <= plane_of(hi)),
            CharClass::Union(classes) => classes.iter().any(|class| class.has_member_in_plane(plane)),
            CharClass::Numeric
            | CharClass::Letters
            | CharClass::Alphanumerics
            | CharClass::IdentStart
            | CharClass::IdentContinue
            | CharClass::Custom(_) => true,
        }
    }

    /// All members in increasing codepoint order.
    pub fn members(&self) -> Vec<char> {
        let planes: Vec<Vec<char>> = (0..PLANE_COUNT)
            .into_par_iter()
            .filter(|&plane| {
                let retained = self.has_member_in_plane(plane);
                if !retained {
                    trace!("skipping plane {plane}: no members");
                }
                retained
            })
            .map(|plane| self.plane_members(plane))
            .collect();

        let members: Vec<char> = planes.into_iter().flatten().collect();
        debug!(count = members.len(), "expanded character class");
        members
    }

    /// Expand into an alternation of single-character terminals.
    ///
    /// An empty class yields an empty alternation.
    pub fn expand(&self) -> Product {
        self.members()
            .into_iter()
            .map(|c| Product::Terminal(Terminal::from(c)))
            .collect::<Alternation>()
            .into()
    }

    fn plane_members(&self, plane: u8) -> Vec<char> {
        let lo = u32::from(plane) * PLANE_SIZE;
        (lo..lo + PLANE_SIZE)
            .filter_map(char::from_u32)
            .filter(|&c| self.contains(c))
            .collect()
    }
}

fn plane_of(c: char) -> u8 {
    // Scalar values stop at 0x10FFFF, so the plane always fits in a byte.
    (u32::from(c) / PLANE_SIZE) as u8
}

fn is_horizontal_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | ' '
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
    )
}

fn is_newline(c: char) -> bool {
    matches!(c, '\n'..='\r' | '\u{0085}' | '\u{2028}' | '\u{2029}')
}
