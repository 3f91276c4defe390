//! Character buffer and read position for one parse.

use alloc::string::String;
use alloc::vec::Vec;

/// Input held as indexed characters.
///
/// Offsets everywhere in this crate are character offsets into this
/// buffer, not byte offsets into the source string. The position one past
/// the last character is the end-of-input sentinel: [`peek`](Self::peek)
/// returns `None` there and [`advance`](Self::advance) refuses to move.
#[derive(Clone, Debug)]
pub struct Cursor {
    chars: Vec<char>,
    position: usize,
}

impl Cursor {
    pub fn new(input: &str) -> Self {
        Self {
            chars: input.chars().collect(),
            position: 0,
        }
    }

    /// Current offset.
    pub fn position(&self) -> usize {
        self.position
    }

    /// True at the end-of-input sentinel.
    pub fn at_end(&self) -> bool {
        self.position >= self.chars.len()
    }

    /// Character at the current offset, `None` at the sentinel.
    pub fn peek(&self) -> Option<char> {
        self.chars.get(self.position).copied()
    }

    /// Consume one character. Returns `None` without moving at the sentinel.
    pub fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.position += 1;
        Some(c)
    }

    pub(crate) fn chars(&self) -> &[char] {
        &self.chars
    }

    pub(crate) fn into_chars(self) -> Vec<char> {
        self.chars
    }

    /// Move back to an earlier checkpoint. Only the engine calls this.
    pub(crate) fn reset_to(&mut self, position: usize) {
        debug_assert!(position <= self.chars.len());
        self.position = position;
    }
}

/// Text between two character offsets, clamped to `chars`.
pub fn slice(chars: &[char], begin: usize, end: usize) -> String {
    let end = end.min(chars.len());
    let begin = begin.min(end);
    chars[begin..end].iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_stops_at_sentinel() {
        let mut c = Cursor::new("ab");
        assert_eq!(c.advance(), Some('a'));
        assert_eq!(c.advance(), Some('b'));
        assert!(c.at_end());
        assert_eq!(c.advance(), None);
        assert_eq!(c.position(), 2);
    }

    #[test]
    fn empty_input_starts_at_end() {
        let c = Cursor::new("");
        assert!(c.at_end());
        assert_eq!(c.peek(), None);
        assert_eq!(c.position(), 0);
    }

    #[test]
    fn offsets_count_characters() {
        let mut c = Cursor::new("é=1");
        assert_eq!(c.chars().len(), 3);
        c.advance();
        assert_eq!(c.peek(), Some('='));
        assert_eq!(slice(c.chars(), 0, 1), "é");
    }

    #[test]
    fn slice_clamps_out_of_range() {
        let c = Cursor::new("abc");
        assert_eq!(slice(c.chars(), 1, 10), "bc");
        assert_eq!(slice(c.chars(), 5, 2), "");
    }

    #[test]
    fn reset_moves_back() {
        let mut c = Cursor::new("abc");
        c.advance();
        c.advance();
        c.reset_to(1);
        assert_eq!(c.peek(), Some('b'));
    }
}
