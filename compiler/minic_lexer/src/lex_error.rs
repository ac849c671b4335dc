//! Structured errors for callers that treat error tokens as failures.
//!
//! The scanner itself never fails; it emits [`TokenKind::Error`] tokens and
//! keeps going. [`LexError`] is the owned, displayable form of one such
//! token, for callers that abort on the first error or report them all.

use std::fmt;

use thiserror::Error;

use crate::{SourceBuffer, Token, TokenKind};

/// A lexical error with its source location.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq, Hash)]
pub enum LexError {
    /// A byte that does not begin any token, including a lone `&` or `|`.
    #[error("line {line}: Unexpected character {byte}")]
    UnexpectedCharacter {
        /// 1-based line of the offending byte.
        line: u32,
        /// Byte offset of the offending byte.
        offset: u32,
        /// The offending byte.
        byte: OffendingByte,
    },
}

impl LexError {
    /// Build the error for an error token scanned from `source`.
    ///
    /// Returns `None` if `token` is not an error token.
    pub fn from_token(token: &Token<'_>, source: &SourceBuffer) -> Option<Self> {
        if token.kind != TokenKind::Error {
            return None;
        }
        let byte = source.byte_at(token.offset).unwrap_or(0);
        Some(LexError::UnexpectedCharacter {
            line: token.line,
            offset: token.offset,
            byte: OffendingByte(byte),
        })
    }

    /// 1-based line where the error occurred.
    pub fn line(&self) -> u32 {
        match self {
            LexError::UnexpectedCharacter { line, .. } => *line,
        }
    }

    /// Byte offset where the error occurred.
    pub fn offset(&self) -> u32 {
        match self {
            LexError::UnexpectedCharacter { offset, .. } => *offset,
        }
    }
}

/// A raw source byte, quoted when printable and hex-escaped otherwise.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct OffendingByte(pub u8);

impl fmt::Display for OffendingByte {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let b = self.0;
        if b.is_ascii_graphic() {
            write!(f, "'{}'", char::from(b))
        } else {
            write!(f, "0x{b:02X}")
        }
    }
}
