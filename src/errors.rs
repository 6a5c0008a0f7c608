//! Error type for digit sequence evaluation.
//!
//! Every failure is fatal for the literal it belongs to: callers either get
//! the exact value or one of these variants, never a substituted default.

use thiserror::Error;

/// Reason a byte sequence could not be turned into an unsigned integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DigitError {
    /// A byte outside `b'0'..=b'9'` was found.
    ///
    /// `position` is the zero-based index of the first offending byte,
    /// counted from the most significant end.
    #[error("non-numeral character detected at position {position} (byte 0x{byte:02X})")]
    InvalidDigit {
        /// Index of the offending byte
        position: usize,
        /// The offending byte itself
        byte: u8,
    },
    /// The sequence had no bytes at all.
    #[error("empty digit sequence")]
    Empty,
    /// The value does not fit the requested integer width.
    #[error("digit sequence overflows the target integer width")]
    Overflow,
}

impl DigitError {
    /// Fixed diagnostic used by compile-time assertions.
    ///
    /// Const panics cannot format arguments, so this drops the position
    /// detail carried by [`Display`](core::fmt::Display).
    ///
    /// # Example
    /// ```
    /// # use digit_forge::DigitError;
    /// let err = DigitError::InvalidDigit { position: 2, byte: b'a' };
    /// assert_eq!(err.message(), "non-numeral character detected");
    /// ```
    pub const fn message(self) -> &'static str {
        match self {
            DigitError::InvalidDigit { .. } => "non-numeral character detected",
            DigitError::Empty => "empty digit sequence",
            DigitError::Overflow => "digit sequence overflows the target integer width",
        }
    }

    /// Position of the offending byte for `InvalidDigit`, `None` otherwise.
    pub const fn position(self) -> Option<usize> {
        match self {
            DigitError::InvalidDigit { position, .. } => Some(position),
            _ => None,
        }
    }
}
