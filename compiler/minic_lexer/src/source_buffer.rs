//! Sentinel-terminated source buffer.
//!
//! Input is raw bytes: any byte sequence is legal source, and bytes that do
//! not start a token are reported by the scanner as unexpected characters.
//! The content is followed by a `0x00` sentinel and zero padding up to the
//! next 64-byte boundary, so reading one byte past the content is always in
//! bounds. A `0x00` inside the content is an ordinary (unexpected) byte, not
//! end-of-input.

use crate::Cursor;

/// Cache line size in bytes, used for buffer alignment padding.
const CACHE_LINE: usize = 64;

/// Owned copy of one source file, terminated by a `0x00` sentinel.
///
/// ```text
/// [source_bytes..., 0x00, padding_zeros...]
///  0                ^len  ^rounded up to 64 bytes
/// ```
///
/// Tokens borrow their lexemes from this buffer, so it must outlive every
/// scanner and token created over it.
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    buf: Vec<u8>,
    /// Content length, excluding sentinel and padding.
    len: u32,
}

impl SourceBuffer {
    /// Buffer over UTF-8 source text.
    pub fn new(source: &str) -> Self {
        Self::from_bytes(source.as_bytes())
    }

    /// Buffer over arbitrary bytes.
    ///
    /// Content past `u32::MAX` bytes is dropped; offsets and lines are `u32`.
    pub fn from_bytes(source: &[u8]) -> Self {
        let len = u32::try_from(source.len()).unwrap_or(u32::MAX);
        let content = &source[..len as usize];

        // At least one sentinel byte, then round up to the cache line.
        let padded = (content.len() + 1).next_multiple_of(CACHE_LINE);
        let mut buf = vec![0u8; padded];
        buf[..content.len()].copy_from_slice(content);

        Self { buf, len }
    }

    /// The source content without sentinel or padding.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len as usize]
    }

    /// A [`Cursor`] at the first byte.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.buf, self.len)
    }

    /// Content length in bytes.
    pub fn len(&self) -> u32 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The content byte at `offset`, or `None` past the end.
    pub fn byte_at(&self, offset: u32) -> Option<u8> {
        self.as_bytes().get(offset as usize).copied()
    }
}
