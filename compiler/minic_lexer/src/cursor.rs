//! Read position over a [`SourceBuffer`](crate::SourceBuffer).
//!
//! Reads at or past the end of the content return the `0x00` sentinel, so
//! the scanner can look one byte ahead without bounds checks of its own.
//! End-of-input is decided by position alone: a `0x00` inside the content
//! is an ordinary byte.

/// Byte cursor used by the [`Scanner`](crate::Scanner).
///
/// Created with [`SourceBuffer::cursor`](crate::SourceBuffer::cursor).
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// Content followed by at least one `0x00`.
    buf: &'a [u8],
    pos: u32,
    end: u32,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(buf: &'a [u8], end: u32) -> Self {
        debug_assert!(
            buf.get(end as usize) == Some(&0),
            "buffer must hold a 0x00 sentinel at {end}"
        );
        Self { buf, pos: 0, end }
    }

    /// Offset of the next unconsumed byte.
    #[inline]
    pub fn offset(&self) -> u32 {
        self.pos
    }

    /// `true` once every content byte has been consumed.
    #[inline]
    pub fn at_end(&self) -> bool {
        self.pos >= self.end
    }

    /// The next unconsumed byte; the sentinel at the end.
    #[inline]
    pub fn current(&self) -> u8 {
        self.buf[self.pos as usize]
    }

    /// The byte after [`current`](Self::current); the sentinel past the end.
    #[inline]
    pub fn peek(&self) -> u8 {
        if self.at_end() {
            0
        } else {
            self.buf[self.pos as usize + 1]
        }
    }

    /// Consume and return the current byte. At the end nothing moves and
    /// the sentinel is returned.
    #[inline]
    pub fn bump(&mut self) -> u8 {
        let byte = self.current();
        if !self.at_end() {
            self.pos += 1;
        }
        byte
    }

    /// One-byte lookahead-and-consume: take the current byte only if it is
    /// `expected`. Never matches at the end.
    #[inline]
    pub fn eat(&mut self, expected: u8) -> bool {
        let hit = !self.at_end() && self.current() == expected;
        if hit {
            self.pos += 1;
        }
        hit
    }

    /// Consume bytes while `pred` holds.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while !self.at_end() && pred(self.current()) {
            self.pos += 1;
        }
    }

    /// Move to the next `\n` (not consuming it), or to the end.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "the distance is bounded by the u32 content length"
    )]
    pub fn skip_to_newline(&mut self) {
        let rest = &self.buf[self.pos as usize..self.end as usize];
        self.pos = match memchr::memchr(b'\n', rest) {
            Some(distance) => self.pos + distance as u32,
            None => self.end,
        };
    }

    /// Source text from `start` up to the current offset.
    ///
    /// The scanner only asks for runs of ASCII bytes. Anything else yields
    /// an empty string.
    pub fn lexeme(&self, start: u32) -> &'a str {
        let bytes = &self.buf[start as usize..self.pos as usize];
        debug_assert!(bytes.is_ascii(), "lexeme at {start} is not ASCII");
        std::str::from_utf8(bytes).unwrap_or_default()
    }
}
