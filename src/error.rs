//! Error types for hilite

use thiserror::Error;

use crate::position::Position;

/// Result type alias for hilite operations
pub type Result<T> = std::result::Result<T, HighlightError>;

/// Highlighter error types
#[derive(Error, Debug)]
pub enum HighlightError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A token position lies past the end of the buffer
    #[error("unexpected end of input at byte {offset} while seeking {target}")]
    UnexpectedEndOfInput { offset: usize, target: Position },

    /// A token position is behind the cursor or skips over it
    #[error("invalid location {target} (cursor at {current})")]
    InvalidLocation { current: Position, target: Position },

    #[error("invalid language definition: {0}")]
    Language(String),

    #[error("unknown language: {0}")]
    UnknownLanguage(String),

    #[error("{0}")]
    Message(String),
}
