use crate::error::{CodeLoc, ParseError};

/// A position in the input text
///
/// A cursor pairs a reference to the full input with a byte offset into it.
/// Cursors are cheap `Copy` values: advancing never mutates the cursor in
/// place but returns a new one sharing the same input, so any saved cursor
/// can be used to backtrack.
///
/// Invariant: `offset <= input.len()` and `offset` always lies on a UTF-8
/// character boundary.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Cursor<'code> {
    input: &'code str,
    offset: usize,
}

impl<'code> Cursor<'code> {
    /// Create a cursor at the start of `input`
    pub fn new(input: &'code str) -> Self {
        Cursor { input, offset: 0 }
    }

    /// The complete input this cursor points into
    pub fn input(&self) -> &'code str {
        self.input
    }

    /// Byte offset of this cursor in the input
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The input that has not been consumed yet
    pub fn remaining(&self) -> &'code str {
        &self.input[self.offset..]
    }

    /// Check if the cursor is at the end of the input
    pub fn eos(&self) -> bool {
        self.offset >= self.input.len()
    }

    /// Location of this cursor, for error reporting
    pub fn loc(&self) -> CodeLoc<'code> {
        CodeLoc::new(self.input, self.offset)
    }

    /// Get the character at the current position
    ///
    /// Returns an error if the cursor is positioned at the end of the input
    pub fn value(&self) -> Result<char, ParseError<'code>> {
        self.remaining()
            .chars()
            .next()
            .ok_or_else(|| ParseError::new("Unexpected end of input", *self))
    }

    /// Advance the cursor past the current character
    pub fn try_next(self) -> Result<Self, ParseError<'code>> {
        let ch = self.value()?;
        Ok(self.advance_by(ch.len_utf8()))
    }

    /// Advance the cursor by `len` bytes
    ///
    /// Fails if the target lies past the end of the input or inside a
    /// multi-byte character.
    pub fn advance(self, len: usize) -> Result<Self, ParseError<'code>> {
        match self.offset.checked_add(len) {
            Some(offset) => self.seek(offset),
            None => Err(ParseError::new(
                format!("cannot advance by {len} bytes: past end of input"),
                self,
            )),
        }
    }

    /// Move the cursor to an absolute byte offset in the same input
    pub fn seek(self, offset: usize) -> Result<Self, ParseError<'code>> {
        if offset > self.input.len() {
            return Err(ParseError::new(
                format!("cannot move to offset {offset}: past end of input"),
                self,
            ));
        }
        if !self.input.is_char_boundary(offset) {
            return Err(ParseError::new(
                format!("cannot move to offset {offset}: not a character boundary"),
                self,
            ));
        }
        Ok(Cursor {
            input: self.input,
            offset,
        })
    }

    /// The input between this cursor and a later cursor on the same input
    ///
    /// Returns `None` when `later` lies before this cursor or points into
    /// a different input.
    pub fn slice_to(&self, later: &Cursor<'code>) -> Option<&'code str> {
        if !std::ptr::eq(self.input, later.input) {
            return None;
        }
        self.input.get(self.offset..later.offset)
    }

    /// Advance without validation; `len` must keep the cursor on a boundary
    pub(crate) fn advance_by(self, len: usize) -> Self {
        debug_assert!(self.input.is_char_boundary(self.offset + len));
        Cursor {
            input: self.input,
            offset: self.offset + len,
        }
    }
}
