//! Paragraph tokenization with ellipsis canonicalization.

use alloc::string::String;
use alloc::vec::Vec;

use crate::digits::DigitGroup;

/// Glyph written into each box of a canonical two-box ellipsis.
pub const ELLIPSIS_GLYPH: char = '\u{2026}';

/// Atomic layout unit of a paragraph.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token {
    /// One source character.
    Char(char),
    /// Half of a canonical ellipsis. Always produced in pairs.
    Ellipsis,
    /// Packed run of decimal digits sharing one box.
    Digits(DigitGroup),
}

impl Token {
    /// Typed whitespace subject to space-counting rules (space or tab only).
    pub fn is_typed_space(&self) -> bool {
        matches!(self, Self::Char(' ' | '\t'))
    }

    /// The source character for `Char` tokens.
    pub fn as_char(&self) -> Option<char> {
        match self {
            Self::Char(ch) => Some(*ch),
            _ => None,
        }
    }

    /// Append the box text of this token to `out`.
    pub fn write_text(&self, out: &mut String) {
        match self {
            Self::Char(ch) => out.push(*ch),
            Self::Ellipsis => out.push(ELLIPSIS_GLYPH),
            Self::Digits(group) => out.push_str(group.as_str()),
        }
    }

    /// Box text of this token.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        self.write_text(&mut out);
        out
    }
}

/// Split one paragraph into tokens.
///
/// `...`, `……` and `…` are each replaced by exactly two [`Token::Ellipsis`].
/// Matching is left to right, longest spelling first, without backtracking.
pub fn tokenize_paragraph(paragraph: &str) -> Vec<Token> {
    let chars: Vec<char> = paragraph.chars().collect();
    let mut tokens = Vec::with_capacity(chars.len());
    let mut i = 0usize;
    while i < chars.len() {
        let rest = &chars[i..];
        let consumed = if rest.starts_with(&['.', '.', '.']) {
            3
        } else if rest.starts_with(&[ELLIPSIS_GLYPH, ELLIPSIS_GLYPH]) {
            2
        } else if rest[0] == ELLIPSIS_GLYPH {
            1
        } else {
            0
        };
        if consumed > 0 {
            tokens.push(Token::Ellipsis);
            tokens.push(Token::Ellipsis);
            i += consumed;
        } else {
            tokens.push(Token::Char(rest[0]));
            i += 1;
        }
    }
    tokens
}
