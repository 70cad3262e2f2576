use genko::Token;

/// Glyph written into the second box of a two-box token.
pub const DASH_CONTINUATION: &str = "\u{2014}";

/// Fixed punctuation tables that drive manuscript layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PunctuationRules {
    /// Sentence-ending marks that must be followed by one blank box.
    pub require_blank_after: &'static [char],
    /// Marks that absorb a typed space immediately after them.
    pub forbid_typed_space_after: &'static [char],
    /// Trailing punctuation and closing brackets that may share the
    /// previous box instead of starting a row.
    pub shareable: &'static [char],
    /// Glyphs that always span two boxes on the same row.
    pub two_box: &'static [char],
}

/// Conventional genkouyoushi rules.
pub static MANUSCRIPT_RULES: PunctuationRules = PunctuationRules {
    require_blank_after: &['?', '!'],
    forbid_typed_space_after: &['.', ',', ':', ';'],
    shareable: &[
        '\u{3001}', // 、
        '\u{3002}', // 。
        '\u{FF0C}', // ，
        '\u{FF0E}', // ．
        ',',
        '.',
        '\u{FF1A}', // ：
        '\u{FF1B}', // ；
        ':',
        ';',
        '\u{FF1F}', // ？
        '\u{FF01}', // ！
        '?',
        '!',
        '\u{FF09}', // ）
        ')',
        '\u{FF3D}', // ］
        ']',
        '\u{FF5D}', // ｝
        '}',
        '\u{300D}', // 」
        '\u{300F}', // 』
        '\u{3011}', // 】
        '\u{3015}', // 〕
        '\u{3009}', // 〉
        '\u{300B}', // 》
        '\u{3017}', // 〗
        '\u{3019}', // 〙
        '\u{201D}', // ”
        '\u{2019}', // ’
    ],
    two_box: &['\u{2014}', '\u{2013}', '\u{2015}'],
};

impl Default for PunctuationRules {
    fn default() -> Self {
        MANUSCRIPT_RULES
    }
}

impl PunctuationRules {
    pub fn requires_blank_after(&self, token: &Token) -> bool {
        Self::contains(self.require_blank_after, token)
    }

    pub fn forbids_typed_space_after(&self, token: &Token) -> bool {
        Self::contains(self.forbid_typed_space_after, token)
    }

    pub fn is_shareable(&self, token: &Token) -> bool {
        Self::contains(self.shareable, token)
    }

    pub fn is_two_box(&self, token: &Token) -> bool {
        Self::contains(self.two_box, token)
    }

    fn contains(set: &[char], token: &Token) -> bool {
        token.as_char().is_some_and(|ch| set.contains(&ch))
    }
}
