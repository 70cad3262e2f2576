//! Text preparation for genkouyoushi (manuscript grid paper) layout.
//!
//! This crate turns raw text into the token stream consumed by the grid
//! layout engine in `genko-render`:
//!
//! 1. [`normalize`] unifies line breaks and splits paragraphs.
//! 2. [`tokenize`] splits one paragraph into tokens and canonicalizes
//!    ellipsis spellings.
//! 3. [`digits`] packs runs of decimal digits into fixed-size box groups.
//!
//! Everything here is total over any `&str` input.

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(
    not(test),
    deny(
        clippy::disallowed_methods,
        clippy::expect_used,
        clippy::unwrap_used,
        clippy::panic,
        clippy::panic_in_result_fn,
        clippy::todo,
        clippy::unimplemented
    )
)]

extern crate alloc;

pub mod digits;
pub mod normalize;
pub mod tokenize;

pub use digits::{pack_digits, prepare_paragraph, DigitGroup};
pub use normalize::{normalize_line_breaks, split_paragraphs, Paragraphs};
pub use tokenize::{tokenize_paragraph, Token, ELLIPSIS_GLYPH};
