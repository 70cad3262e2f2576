//! Line-break normalization and paragraph splitting.

use alloc::borrow::Cow;
use alloc::string::String;

/// Rewrite CRLF and lone CR line breaks as `\n`.
///
/// Returns the input unchanged (borrowed) when it contains no `\r`.
pub fn normalize_line_breaks(text: &str) -> Cow<'_, str> {
    if !text.contains('\r') {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '\r' {
            if chars.peek() == Some(&'\n') {
                chars.next();
            }
            out.push('\n');
        } else {
            out.push(ch);
        }
    }
    Cow::Owned(out)
}

/// Split text into paragraphs on any line-break spelling (CRLF, CR, LF).
///
/// Always yields at least one paragraph; empty input yields one empty
/// paragraph and a trailing break yields a trailing empty paragraph.
pub fn split_paragraphs(text: &str) -> Paragraphs<'_> {
    Paragraphs { rest: Some(text) }
}

/// Borrowing iterator over the paragraphs of a text.
#[derive(Clone, Debug)]
pub struct Paragraphs<'a> {
    rest: Option<&'a str>,
}

impl<'a> Iterator for Paragraphs<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let rest = self.rest?;
        match rest.find(['\r', '\n']) {
            Some(pos) => {
                let break_len = if rest[pos..].starts_with("\r\n") { 2 } else { 1 };
                self.rest = Some(&rest[pos + break_len..]);
                Some(&rest[..pos])
            }
            None => {
                self.rest = None;
                Some(rest)
            }
        }
    }
}

impl core::iter::FusedIterator for Paragraphs<'_> {}
