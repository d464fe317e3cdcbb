//! Buffer error type.

use thiserror::Error;

/// Error type for buffer operations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BufferError {
    /// A read would consume more bytes than remain between the cursor and
    /// the end of the buffer. The cursor is left unchanged.
    #[error("buffer depleted: needed {needed} bytes, {remaining} remaining")]
    Depleted { needed: usize, remaining: usize },
    /// A string read produced bytes that are not valid UTF-8.
    #[error("invalid UTF-8 sequence")]
    InvalidUtf8,
}
