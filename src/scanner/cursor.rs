/// Byte-position cursor over the full input.
///
/// Offsets are bytes; [`Cursor::char_pos`] converts to the 1-based character
/// count used in error messages. The position never moves backwards during a
/// scan, so the conversion only happens on the failure path.
pub(crate) struct Cursor<'i> {
    input: &'i str,
    pos: usize,
}

impl<'i> Cursor<'i> {
    pub(crate) fn new(input: &'i str) -> Self {
        Self { input, pos: 0 }
    }

    /// Cursor already positioned at `pos` (a char boundary).
    pub(crate) fn at(input: &'i str, pos: usize) -> Self {
        debug_assert!(input.is_char_boundary(pos));
        Self { input, pos }
    }

    #[inline]
    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    #[inline]
    pub(crate) fn peek(&self) -> Option<u8> {
        self.input.as_bytes().get(self.pos).copied()
    }

    #[inline]
    pub(crate) fn peek_at(&self, k: usize) -> Option<u8> {
        self.input.as_bytes().get(self.pos + k).copied()
    }

    /// Advance by `n` bytes. The caller is responsible for landing on a char
    /// boundary; all structural advances are over ASCII.
    #[inline]
    pub(crate) fn bump(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.input.len());
    }

    /// Advance past one full character, however many bytes it takes.
    #[inline]
    pub(crate) fn bump_char(&mut self) {
        if let Some(c) = self.rest().chars().next() {
            self.pos += c.len_utf8();
        }
    }

    /// Consume `lit` if the remaining input starts with it (case-sensitive).
    #[inline]
    pub(crate) fn match_literal(&mut self, lit: &[u8]) -> bool {
        if self.remaining_bytes().starts_with(lit) {
            self.pos += lit.len();
            true
        } else {
            false
        }
    }

    #[inline]
    pub(crate) fn rest(&self) -> &'i str {
        &self.input[self.pos..]
    }

    #[inline]
    pub(crate) fn remaining_bytes(&self) -> &'i [u8] {
        &self.input.as_bytes()[self.pos..]
    }

    #[inline]
    pub(crate) fn slice(&self, start: usize, end: usize) -> &'i str {
        &self.input[start..end]
    }

    /// 1-based position of the next unread character, counted in Unicode
    /// scalar values from the start of the input.
    pub(crate) fn char_pos(&self) -> usize {
        self.input[..self.pos].chars().count() + 1
    }
}
