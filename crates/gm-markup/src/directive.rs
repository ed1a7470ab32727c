//! Alignment directive extraction.
//!
//! A directive is a four-character token `[` sign letter `]`:
//!
//! - sign `-` addresses the horizontal axis, `+` the vertical axis
//! - letter `S`, `C` or `E` (any case) selects start, center or end
//!
//! Tokens are removed from the text wherever they appear. Removing a token can
//! join its neighbours into a new token (`[-[+S]C]` hides `[-C]`), and such
//! tokens are consumed as well.

use crate::alignment::{Alignment, Axis, Placement};

const TOKEN_LEN: usize = 4;

/// Strip every directive token from `text` and collect its alignment flags.
///
/// Text without directives is returned unchanged with an empty [`Alignment`].
/// Bracketed sequences that are not valid tokens are kept verbatim.
///
/// # Examples
///
/// ```
/// use gm_markup::extract_directives;
///
/// let (text, align) = extract_directives("[-C]Jane Doe[+e]");
/// assert_eq!(text, "Jane Doe");
/// assert!(align.h_center && align.v_end);
/// ```
pub fn extract_directives(text: &str) -> (String, Alignment) {
    let mut align = Alignment::default();
    let mut out = String::with_capacity(text.len());

    // `out` acts as a stack: a token can only complete on its closing bracket,
    // so checking the tail after each `]` finds joined tokens as well.
    for ch in text.chars() {
        out.push(ch);
        if ch != ']' {
            continue;
        }
        if let Some((axis, placement)) = trailing_token(out.as_bytes()) {
            align.set(axis, placement);
            out.truncate(out.len() - TOKEN_LEN);
        }
    }

    if !align.is_empty() {
        tracing::debug!(?align, "extracted alignment directives");
    }

    (out, align)
}

/// Decode a directive token at the end of `bytes`.
///
/// Every byte of a token is ASCII, so the tail never splits a multi-byte char.
fn trailing_token(bytes: &[u8]) -> Option<(Axis, Placement)> {
    let start = bytes.len().checked_sub(TOKEN_LEN)?;
    match bytes[start..] {
        [b'[', sign, letter, b']'] => {
            Some((Axis::from_sign(sign)?, Placement::from_letter(letter)?))
        }
        _ => None,
    }
}
