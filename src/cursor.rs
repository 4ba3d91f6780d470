//! Position-synchronized byte copying
//!
//! The replay cursor walks the raw input in lockstep with token
//! positions. Every byte it steps over is copied to the output
//! unchanged, so text the lexer never classified survives as-is.

use std::io::Write;

use crate::error::{HighlightError, Result};
use crate::position::Position;

/// Shared state threaded through one highlighting run
///
/// `offset` always indexes the next unconsumed byte and `position`
/// is the logical location of that byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReplayCursor {
    pub offset: usize,
    pub position: Position,
}

impl ReplayCursor {
    /// Create a cursor at the start of input
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy bytes from `data` to `out` until the cursor reaches `target`
    ///
    /// Fails with `UnexpectedEndOfInput` if `data` runs out before
    /// `target` is reached, and with `InvalidLocation` if the cursor
    /// would have to move backwards or step past `target`. Bytes
    /// consumed before a failure are still written.
    pub fn advance_to<W: Write + ?Sized>(
        &mut self,
        data: &[u8],
        out: &mut W,
        target: Position,
    ) -> Result<()> {
        let start = self.offset;
        let result = self.seek(data, target);
        out.write_all(&data[start..self.offset])?;
        result
    }

    /// Copy everything after the cursor, no position tracking needed
    pub fn drain<W: Write + ?Sized>(&mut self, data: &[u8], out: &mut W) -> Result<()> {
        let rest = data.get(self.offset..).unwrap_or_default();
        out.write_all(rest)?;
        self.offset = data.len();
        Ok(())
    }

    fn seek(&mut self, data: &[u8], target: Position) -> Result<()> {
        while self.position != target {
            // Running out of data wins over a bad position
            let Some(&byte) = data.get(self.offset) else {
                return Err(HighlightError::UnexpectedEndOfInput {
                    offset: self.offset,
                    target,
                });
            };
            if self.position > target {
                return Err(HighlightError::InvalidLocation {
                    current: self.position,
                    target,
                });
            }
            self.offset += 1;
            self.position.advance(byte);
        }
        Ok(())
    }
}
