//! Hand-written scanner producing one [`Token`] per call.
//!
//! The scanner operates on a sentinel-terminated [`Cursor`] and is pull
//! driven: the caller asks for the next token until it receives
//! [`TokenKind::Eof`]. Whitespace and `//` comments are skipped before each
//! token and never surface as tokens. Errors are encoded as
//! [`TokenKind::Error`] tokens, never as `Result::Err`, and scanning always
//! continues past the offending byte.
//!
//! # State
//!
//! - `start`: offset where the token being recognized begins
//! - the cursor position: offset of the next unconsumed byte
//! - `line`: 1-based line counter, bumped on every `\n` consumed and
//!   saturating at `u32::MAX`
//!
//! `\r` is skipped like a space and never counts as a line break, so CRLF
//! input counts each line exactly once.

use std::iter::FusedIterator;

use tracing::{debug, trace};

use crate::cursor::Cursor;
use crate::keywords;
use crate::{SourceBuffer, Token, TokenKind};

/// Pull-based scanner over one [`SourceBuffer`].
///
/// Each scanner owns its state; scanning several buffers at once takes
/// several scanners. The scanner is also an [`Iterator`] that yields every
/// token up to and including the final EOF, then stops.
#[derive(Clone, Debug)]
pub struct Scanner<'src> {
    cursor: Cursor<'src>,
    /// Offset of the first byte of the token being recognized.
    start: u32,
    line: u32,
    /// Set once the iterator has yielded EOF.
    finished: bool,
}

impl<'src> Scanner<'src> {
    /// Create a scanner positioned at the start of `source`, on line 1.
    pub fn new(source: &'src SourceBuffer) -> Self {
        Self {
            cursor: source.cursor(),
            start: 0,
            line: 1,
            finished: false,
        }
    }

    /// Restart scanning from the beginning of `source`.
    ///
    /// Discards all state from the previous scan. Tokens already produced
    /// stay valid for as long as the buffer they came from.
    pub fn reset(&mut self, source: &'src SourceBuffer) {
        debug!(len = source.len(), "scanner reset");
        *self = Self::new(source);
    }

    /// Current line counter.
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Produce the next token.
    ///
    /// Returns [`TokenKind::Eof`] with an empty lexeme when the source is
    /// exhausted. Subsequent calls after EOF continue to return EOF.
    pub fn next_token(&mut self) -> Token<'src> {
        self.skip_insignificant();
        self.start = self.cursor.offset();
        let token = self.scan_token();
        trace!(
            kind = %token.kind,
            line = token.line,
            offset = token.offset,
            lexeme = token.lexeme,
            "token"
        );
        token
    }

    // ─── Whitespace & Comments ─────────────────────────────────────

    /// Skip spaces, tabs, carriage returns, newlines, and `//` comments.
    ///
    /// A `/` not followed by a second `/` stops skipping; it is the start of
    /// the next token.
    fn skip_insignificant(&mut self) {
        loop {
            match self.cursor.current() {
                b' ' | b'\t' | b'\r' => {
                    self.cursor.bump();
                }
                b'\n' => {
                    self.line = self.line.saturating_add(1);
                    self.cursor.bump();
                }
                // The terminating newline is left for the arm above.
                b'/' if self.cursor.peek() == b'/' => self.cursor.skip_to_newline(),
                _ => return,
            }
        }
    }

    // ─── Dispatch ──────────────────────────────────────────────────

    fn scan_token(&mut self) -> Token<'src> {
        if self.cursor.at_end() {
            return Token::eof(self.line, self.start);
        }

        match self.cursor.bump() {
            b'a'..=b'z' | b'A'..=b'Z' | b'_' => self.identifier(),
            b'0'..=b'9' => self.number(),
            b'(' => self.make(TokenKind::LeftParen),
            b')' => self.make(TokenKind::RightParen),
            b'{' => self.make(TokenKind::LeftBrace),
            b'}' => self.make(TokenKind::RightBrace),
            b';' => self.make(TokenKind::Semicolon),
            b',' => self.make(TokenKind::Comma),
            b'+' => self.make(TokenKind::Plus),
            b'-' => self.make(TokenKind::Minus),
            b'*' => self.make(TokenKind::Star),
            b'/' => self.make(TokenKind::Slash),
            b'%' => self.make(TokenKind::Modulo),
            b'[' => self.make(TokenKind::LeftBracket),
            b']' => self.make(TokenKind::RightBracket),
            b'.' => self.make(TokenKind::Dot),
            b'<' => self.one_or_two(TokenKind::Less, TokenKind::LessEqual),
            b'>' => self.one_or_two(TokenKind::Greater, TokenKind::GreaterEqual),
            b'=' => self.one_or_two(TokenKind::Equal, TokenKind::EqualEqual),
            b'!' => self.one_or_two(TokenKind::Bang, TokenKind::BangEqual),
            b'&' => self.doubled(b'&', TokenKind::AmpAmp),
            b'|' => self.doubled(b'|', TokenKind::PipePipe),
            // Interior nulls, control bytes, non-ASCII bytes, and unused ASCII.
            _ => self.error(),
        }
    }

    // ─── Identifiers & Keywords ────────────────────────────────────

    fn identifier(&mut self) -> Token<'src> {
        self.cursor.eat_while(is_ident_continue);
        let kind = keywords::lookup(self.cursor.lexeme(self.start));
        self.make(kind)
    }

    // ─── Numeric Literals ──────────────────────────────────────────

    /// Decimal integer, or float when a `.` is followed by at least one digit.
    ///
    /// `3.` stays an integer; the dot becomes its own token.
    fn number(&mut self) -> Token<'src> {
        self.cursor.eat_while(|b| b.is_ascii_digit());

        if self.cursor.current() == b'.' && self.cursor.peek().is_ascii_digit() {
            self.cursor.bump(); // '.'
            self.cursor.eat_while(|b| b.is_ascii_digit());
            return self.make(TokenKind::FloatLit);
        }

        self.make(TokenKind::IntLit)
    }

    // ─── Operators ─────────────────────────────────────────────────

    /// `<`, `>`, `=`, `!` with an optional trailing `=`.
    fn one_or_two(&mut self, single: TokenKind, with_equal: TokenKind) -> Token<'src> {
        if self.cursor.eat(b'=') {
            self.make(with_equal)
        } else {
            self.make(single)
        }
    }

    /// `&&` and `||`. The single character has no meaning of its own.
    fn doubled(&mut self, second: u8, kind: TokenKind) -> Token<'src> {
        if self.cursor.eat(second) {
            self.make(kind)
        } else {
            self.error()
        }
    }

    // ─── Token Construction ────────────────────────────────────────

    /// Token of `kind` spanning `start..current`.
    fn make(&self, kind: TokenKind) -> Token<'src> {
        Token::new(kind, self.cursor.lexeme(self.start), self.line, self.start)
    }

    fn error(&self) -> Token<'src> {
        Token::error(self.line, self.start)
    }
}

impl<'src> Iterator for Scanner<'src> {
    type Item = Token<'src>;

    fn next(&mut self) -> Option<Token<'src>> {
        if self.finished {
            return None;
        }
        let token = self.next_token();
        self.finished = token.is_eof();
        Some(token)
    }
}

impl FusedIterator for Scanner<'_> {}

/// Bytes that may continue an identifier.
#[inline]
pub fn is_ident_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}
