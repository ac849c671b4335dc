//! Scanner for the minic language.
//!
//! Converts source text into a lazy sequence of classified tokens for the
//! parser. The crate is byte-oriented and ASCII-only: every non-ASCII byte is
//! an unexpected character.
//!
//! # Architecture
//!
//! ```text
//! bytes ─► SourceBuffer ──► Cursor ──► Scanner ──► Token<'src>
//!          (sentinel)       (bytes)    (pull)      (borrows the buffer)
//! ```
//!
//! - [`SourceBuffer`] copies the source bytes and appends a `0x00` sentinel.
//! - [`Scanner`] skips whitespace and comments, then recognizes one token per
//!   [`Scanner::next_token`] call using maximal munch.
//! - [`lex`] drains a scanner and collects [`LexError`]s for callers that want
//!   the whole token list at once.
//!
//! # Example
//!
//! ```
//! use minic_lexer::{Scanner, SourceBuffer, TokenKind};
//!
//! let source = SourceBuffer::new("x <= 10");
//! let kinds: Vec<_> = Scanner::new(&source).map(|t| t.kind).collect();
//! assert_eq!(
//!     kinds,
//!     [TokenKind::Ident, TokenKind::LessEqual, TokenKind::IntLit, TokenKind::Eof]
//! );
//! ```

mod cursor;
mod keywords;
mod lex_error;
mod scanner;
mod source_buffer;
mod tag;
mod token;

pub use cursor::Cursor;
pub use keywords::lookup as lookup_keyword;
pub use lex_error::{LexError, OffendingByte};
pub use scanner::{is_ident_continue, Scanner};
pub use source_buffer::SourceBuffer;
pub use tag::{token_kind_name, TokenKind, UNRECOGNIZED_KIND_NAME};
pub use token::{Token, UNEXPECTED_CHARACTER};

/// Every token of one source buffer plus the errors among them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LexOutput<'src> {
    /// All tokens in source order, ending with [`TokenKind::Eof`].
    pub tokens: Vec<Token<'src>>,
    /// One entry per [`TokenKind::Error`] token, in source order.
    pub errors: Vec<LexError>,
}

impl<'src> LexOutput<'src> {
    /// Returns `true` if any error token was produced.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// The tokens, or the first error if there was one.
    pub fn into_result(self) -> Result<Vec<Token<'src>>, LexError> {
        match self.errors.first() {
            Some(&err) => Err(err),
            None => Ok(self.tokens),
        }
    }
}

/// Scan all of `source` in one pass.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn lex(source: &SourceBuffer) -> LexOutput<'_> {
    let mut output = LexOutput::default();
    for token in Scanner::new(source) {
        if let Some(err) = LexError::from_token(&token, source) {
            output.errors.push(err);
        }
        output.tokens.push(token);
    }
    tracing::debug!(
        tokens = output.tokens.len(),
        errors = output.errors.len(),
        "lex complete"
    );
    output
}
