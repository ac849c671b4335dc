//! Keyword resolution for identifier-shaped lexemes.
//!
//! Lookup is a two-level dispatch on the lexeme's bytes:
//! 1. the first byte selects a candidate branch,
//! 2. where several keywords share a first byte (`break`/`bool`,
//!    `float`/`false`, `if`/`int`) the second byte narrows the choice,
//!
//! then the remaining suffix is compared in full. The comparison is exact,
//! so a prefix (`whil`) or an extension (`iffy`, `intake`) of a keyword is
//! always a plain identifier.

use crate::TokenKind;

/// Resolve an identifier-shaped lexeme to its keyword kind.
///
/// Returns [`TokenKind::Ident`] when `text` is not a keyword.
pub fn lookup(text: &str) -> TokenKind {
    match text.as_bytes() {
        [b'b', b'r', rest @ ..] => check_keyword(rest, b"eak", TokenKind::Break),
        [b'b', b'o', rest @ ..] => check_keyword(rest, b"ol", TokenKind::Bool),
        [b'e', rest @ ..] => check_keyword(rest, b"lse", TokenKind::Else),
        [b'f', b'l', rest @ ..] => check_keyword(rest, b"oat", TokenKind::Float),
        [b'f', b'a', rest @ ..] => check_keyword(rest, b"lse", TokenKind::False),
        [b'i', b'f', rest @ ..] => check_keyword(rest, b"", TokenKind::If),
        [b'i', b'n', rest @ ..] => check_keyword(rest, b"t", TokenKind::Int),
        [b'n', rest @ ..] => check_keyword(rest, b"ew", TokenKind::New),
        [b'r', rest @ ..] => check_keyword(rest, b"eturn", TokenKind::Return),
        [b's', rest @ ..] => check_keyword(rest, b"ize", TokenKind::Size),
        [b't', rest @ ..] => check_keyword(rest, b"rue", TokenKind::True),
        [b'v', rest @ ..] => check_keyword(rest, b"oid", TokenKind::Void),
        [b'w', rest @ ..] => check_keyword(rest, b"hile", TokenKind::While),
        _ => TokenKind::Ident,
    }
}

/// Returns `kind` if the unmatched suffix equals `expected` exactly.
#[inline]
fn check_keyword(rest: &[u8], expected: &[u8], kind: TokenKind) -> TokenKind {
    if rest == expected {
        kind
    } else {
        TokenKind::Ident
    }
}
