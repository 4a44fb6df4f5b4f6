//! Byte cursor over borrowed source text.
//!
//! The cursor walks the source one byte at a time. Reads past the end
//! return `0x00` instead of panicking, so lookahead never needs a bounds
//! check at the call site. Use [`Cursor::is_eof`] to tell a real interior
//! null byte apart from the end of input.

/// Newlines skipped by a bulk scan.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct LineBreaks {
    /// Number of `\n` bytes skipped.
    pub count: u32,
    /// Offset just past the last skipped `\n`, i.e. the start of the
    /// line the cursor now sits on.
    pub last_line_start: Option<usize>,
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct Cursor<'a> {
    source: &'a str,
    /// Next unread byte.
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(source: &'a str) -> Self {
        Cursor { source, pos: 0 }
    }

    /// Byte at the current position, or `0x00` at EOF.
    #[inline]
    pub(crate) fn current(&self) -> u8 {
        self.byte_at(self.pos)
    }

    /// Byte one position ahead of current, or `0x00` past EOF.
    #[inline]
    pub(crate) fn peek(&self) -> u8 {
        self.byte_at(self.pos + 1)
    }

    #[inline]
    fn byte_at(&self, index: usize) -> u8 {
        self.source.as_bytes().get(index).copied().unwrap_or(0)
    }

    #[inline]
    pub(crate) fn is_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    #[inline]
    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    /// Advance one byte. No-op at EOF.
    #[inline]
    pub(crate) fn advance(&mut self) {
        if !self.is_eof() {
            self.pos += 1;
        }
    }

    /// Consume and return the current byte.
    #[inline]
    pub(crate) fn bump(&mut self) -> u8 {
        let byte = self.current();
        self.advance();
        byte
    }

    /// Source text in `start..end`.
    ///
    /// Both bounds must fall on character boundaries; the scanner only
    /// slices at ASCII bytes, which always do.
    #[inline]
    pub(crate) fn slice(&self, start: usize, end: usize) -> &'a str {
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        &self.source[start..end]
    }

    /// Source text from `start` to the current position.
    #[inline]
    pub(crate) fn slice_from(&self, start: usize) -> &'a str {
        self.slice(start, self.pos)
    }

    /// Advance while `pred` holds for the current byte.
    #[inline]
    pub(crate) fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while !self.is_eof() && pred(self.current()) {
            self.pos += 1;
        }
    }

    /// Advance to the next `\n` (not consumed) or to EOF.
    pub(crate) fn eat_until_newline_or_eof(&mut self) {
        let remaining = &self.source.as_bytes()[self.pos..];
        match memchr::memchr(b'\n', remaining) {
            Some(offset) => self.pos += offset,
            None => self.pos = self.source.len(),
        }
    }

    /// Advance to the next `"` (not consumed) or to EOF, reporting the
    /// newlines skipped on the way.
    pub(crate) fn eat_until_quote_or_eof(&mut self) -> LineBreaks {
        let from = self.pos;
        let remaining = &self.source.as_bytes()[from..];
        let skipped = match memchr::memchr(b'"', remaining) {
            Some(offset) => &remaining[..offset],
            None => remaining,
        };
        self.pos = from + skipped.len();

        let count = memchr::memchr_iter(b'\n', skipped).count();
        LineBreaks {
            count: u32::try_from(count).unwrap_or(u32::MAX),
            last_line_start: memchr::memrchr(b'\n', skipped).map(|offset| from + offset + 1),
        }
    }
}
