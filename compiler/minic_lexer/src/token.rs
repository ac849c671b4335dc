//! The scanned token value.

use std::fmt;

use crate::TokenKind;

/// Lexeme carried by every [`TokenKind::Error`] token.
pub const UNEXPECTED_CHARACTER: &str = "Unexpected character";

/// One lexical unit, borrowing its text from the source buffer.
///
/// Tokens never own source text: `lexeme` points into the
/// [`SourceBuffer`](crate::SourceBuffer) the token was scanned from, so the
/// buffer must outlive the token. Error tokens are the exception; their
/// lexeme is the static [`UNEXPECTED_CHARACTER`] message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Token<'src> {
    /// What kind of token this is.
    pub kind: TokenKind,
    /// The exact source text, or a fixed message for error tokens.
    pub lexeme: &'src str,
    /// 1-based line on which the token starts.
    pub line: u32,
    /// Byte offset of the token start. For error tokens, the offending byte.
    pub offset: u32,
}

impl<'src> Token<'src> {
    /// Create a token.
    pub const fn new(kind: TokenKind, lexeme: &'src str, line: u32, offset: u32) -> Self {
        Self {
            kind,
            lexeme,
            line,
            offset,
        }
    }

    /// Create an unexpected-character error token.
    pub const fn error(line: u32, offset: u32) -> Self {
        Self::new(TokenKind::Error, UNEXPECTED_CHARACTER, line, offset)
    }

    /// Create a zero-length end-of-input token.
    pub const fn eof(line: u32, offset: u32) -> Self {
        Self::new(TokenKind::Eof, "", line, offset)
    }

    /// Returns `true` for [`TokenKind::Error`] tokens.
    pub const fn is_error(&self) -> bool {
        matches!(self.kind, TokenKind::Error)
    }

    /// Returns `true` for [`TokenKind::Eof`] tokens.
    pub const fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::Eof)
    }

    /// Source byte range covered by this token.
    ///
    /// Error tokens cover the single offending byte even though their lexeme
    /// is a message.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "lexemes are bounded by the u32 source length"
    )]
    pub fn span(&self) -> std::ops::Range<u32> {
        let len = if self.is_error() {
            1
        } else {
            self.lexeme.len() as u32
        };
        self.offset..self.offset + len
    }
}

/// Trace line format: `<NAME>: line <n>: <lexeme>`.
impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: line {}: {}", self.kind.name(), self.line, self.lexeme)
    }
}
