//! Packing of consecutive decimal digits into shared boxes.

use alloc::vec::Vec;
use smallvec::SmallVec;

use crate::tokenize::{tokenize_paragraph, Token};

/// Run of ASCII digits that occupies a single box.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct DigitGroup {
    digits: SmallVec<[u8; 4]>,
}

impl DigitGroup {
    /// Build a group from ASCII digits, ignoring any other character.
    pub fn from_digits(digits: &str) -> Self {
        Self {
            digits: digits.bytes().filter(u8::is_ascii_digit).collect(),
        }
    }

    fn push(&mut self, digit: char) {
        if digit.is_ascii_digit() {
            self.digits.push(digit as u8);
        }
    }

    /// Number of digits in the group.
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// Digits as text.
    pub fn as_str(&self) -> &str {
        // Only ASCII digits are ever stored.
        core::str::from_utf8(&self.digits).unwrap_or_default()
    }
}

/// Merge runs of digit tokens into groups of at most `digits_per_box`.
///
/// A non-digit token flushes a pending short group before passing through,
/// so no box mixes digits and other characters. `0` is treated as `1`.
pub fn pack_digits<I>(tokens: I, digits_per_box: usize) -> Vec<Token>
where
    I: IntoIterator<Item = Token>,
{
    let group_size = digits_per_box.max(1);
    let tokens = tokens.into_iter();
    let mut out = Vec::with_capacity(tokens.size_hint().0);
    let mut pending = DigitGroup::default();

    for token in tokens {
        match token {
            Token::Char(ch) if ch.is_ascii_digit() => {
                pending.push(ch);
                if pending.len() >= group_size {
                    out.push(Token::Digits(core::mem::take(&mut pending)));
                }
            }
            other => {
                if !pending.is_empty() {
                    out.push(Token::Digits(core::mem::take(&mut pending)));
                }
                out.push(other);
            }
        }
    }
    if !pending.is_empty() {
        out.push(Token::Digits(pending));
    }
    out
}

/// Tokenize one paragraph and pack its digit runs.
pub fn prepare_paragraph(paragraph: &str, digits_per_box: usize) -> Vec<Token> {
    let tokens = pack_digits(tokenize_paragraph(paragraph), digits_per_box);
    log::trace!(
        "prepared paragraph: bytes={} tokens={} digits_per_box={}",
        paragraph.len(),
        tokens.len(),
        digits_per_box
    );
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::String;
    use alloc::vec;

    fn texts(tokens: &[Token]) -> Vec<String> {
        tokens.iter().map(Token::to_text).collect()
    }

    #[test]
    fn packs_into_fixed_groups_with_short_tail() {
        let tokens = prepare_paragraph("12345", 2);
        assert_eq!(texts(&tokens), vec!["12", "34", "5"]);
    }

    #[test]
    fn non_digit_flushes_short_group() {
        let tokens = prepare_paragraph("第3章12節", 2);
        assert_eq!(texts(&tokens), vec!["第", "3", "章", "12", "節"]);
        assert!(matches!(tokens[1], Token::Digits(_)));
        assert_eq!(tokens[2], Token::Char('章'));
    }

    #[test]
    fn single_digit_groups_keep_one_per_box() {
        let tokens = prepare_paragraph("2024", 1);
        assert_eq!(texts(&tokens), vec!["2", "0", "2", "4"]);
    }

    #[test]
    fn zero_group_size_is_treated_as_one() {
        let tokens = prepare_paragraph("42", 0);
        assert_eq!(texts(&tokens), vec!["4", "2"]);
    }

    #[test]
    fn fullwidth_digits_are_not_packed() {
        let tokens = prepare_paragraph("１２", 2);
        assert_eq!(tokens, vec![Token::Char('１'), Token::Char('２')]);
    }

    #[test]
    fn digits_around_ellipsis_stay_separate() {
        let tokens = prepare_paragraph("1...23", 3);
        assert_eq!(texts(&tokens), vec!["1", "…", "…", "23"]);
    }

    #[test]
    fn group_from_digits_drops_non_digits() {
        let group = DigitGroup::from_digits("1a2");
        assert_eq!(group.as_str(), "12");
        assert_eq!(group.len(), 2);
    }
}
