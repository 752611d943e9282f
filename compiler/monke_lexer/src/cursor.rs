//! Byte cursor over a source line.
//!
//! The cursor advances through the source byte-by-byte. End of input is an
//! explicit `None` from [`Cursor::current`] rather than a reserved sentinel
//! byte, so an interior NUL in the source is just another byte.
//!
//! # Invariant
//!
//! `pos <= source.len()` at all times. Once the cursor reaches the end,
//! further calls to [`Cursor::advance`] leave it there.

/// Cursor over a borrowed source string.
///
/// The cursor is [`Copy`], so a scanner can snapshot it cheaply.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    source: &'a str,
    /// Current read position (byte index into `source`).
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor positioned on the first byte of `source`.
    pub fn new(source: &'a str) -> Self {
        Self { source, pos: 0 }
    }

    /// Returns the byte at the current position, or `None` at end of input.
    #[inline]
    pub fn current(&self) -> Option<u8> {
        self.source.as_bytes().get(self.pos).copied()
    }

    /// Returns the byte one position ahead of current, or `None` if that is
    /// past the end. Never moves the cursor.
    #[inline]
    pub fn peek(&self) -> Option<u8> {
        self.source.as_bytes().get(self.pos + 1).copied()
    }

    /// Advance the cursor by one byte. No-op at end of input.
    #[inline]
    pub fn advance(&mut self) {
        if self.pos < self.source.len() {
            self.pos += 1;
        }
    }

    /// Returns `true` once every byte of the source has been consumed.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Length of the source in bytes.
    #[inline]
    pub fn source_len(&self) -> usize {
        self.source.len()
    }

    /// Extract a source substring.
    ///
    /// # Contract
    ///
    /// `start..end` must lie within the source and on character boundaries.
    /// Positions recorded by the scanner always do: it only stops between
    /// ASCII bytes or after a whole character (see [`advance_char`](Self::advance_char)).
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        debug_assert!(
            end <= self.source.len(),
            "slice end {end} exceeds source length {}",
            self.source.len()
        );
        &self.source[start..end]
    }

    /// Extract a source substring from `start` to the current position.
    pub fn slice_from(&self, start: usize) -> &'a str {
        self.slice(start, self.pos)
    }

    /// Advance while `pred` returns `true` for the current byte.
    ///
    /// Stops at end of input regardless of `pred`.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while let Some(b) = self.current() {
            if !pred(b) {
                break;
            }
            self.pos += 1;
        }
    }

    /// Returns the number of bytes in the UTF-8 character starting with `byte`.
    ///
    /// - `0xC0..=0xDF`: 2 bytes
    /// - `0xE0..=0xEF`: 3 bytes
    /// - `0xF0..=0xF7`: 4 bytes
    /// - everything else: 1 byte
    #[inline]
    pub fn utf8_char_width(byte: u8) -> usize {
        match byte {
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => 1,
        }
    }

    /// Advance past one full UTF-8 character. No-op at end of input.
    #[inline]
    pub fn advance_char(&mut self) {
        if let Some(b) = self.current() {
            self.pos = (self.pos + Self::utf8_char_width(b)).min(self.source.len());
        }
    }
}
