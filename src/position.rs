//! Logical source positions
//!
//! A position is a (line, column) pair. Lines start at 1, columns at 0,
//! and a column counts bytes, not characters.

use std::fmt;

/// Cursor location within a source buffer
///
/// Ordering is lexicographic on (line, column), which is what the
/// replay cursor relies on to detect backwards movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    /// Create a position
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Position of the first byte of any input
    pub fn start() -> Self {
        Self { line: 1, column: 0 }
    }

    /// Step over one byte
    pub fn advance(&mut self, byte: u8) {
        if byte == b'\n' {
            self.line += 1;
            self.column = 0;
        } else {
            self.column += 1;
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::start()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance() {
        let mut pos = Position::start();
        pos.advance(b'a');
        assert_eq!(pos, Position::new(1, 1));
        pos.advance(b'\n');
        assert_eq!(pos, Position::new(2, 0));
        pos.advance(b'\r');
        assert_eq!(pos, Position::new(2, 1));
    }

    #[test]
    fn test_ordering() {
        assert!(Position::new(1, 9) < Position::new(2, 0));
        assert!(Position::new(2, 3) < Position::new(2, 4));
        assert_eq!(Position::new(3, 3).max(Position::new(3, 2)), Position::new(3, 3));
    }

    #[test]
    fn test_display() {
        assert_eq!(Position::new(4, 12).to_string(), "4:12");
    }
}
