//! Typed view over validated digits.
//!
//! [`DigitSequence`] can only be built from input that already passed
//! [`validate`], so holding one means the `InvalidDigit` and `Empty` cases are
//! behind you. Turning it into a number can still overflow.

use crate::{
    DigitError, //
    is_digit,
    read_u8,
    read_u16,
    read_u32,
    read_u64,
    read_u128,
    read_usize,
    validate,
};
use core::fmt;

/// One ASCII decimal digit, `b'0'..=b'9'`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Digit(u8);

impl Digit {
    /// Wrap an ASCII byte, or `None` if it is not a decimal digit.
    ///
    /// # Example
    /// ```
    /// # use digit_forge::Digit;
    /// assert_eq!(Digit::new(b'7').map(Digit::value), Some(7));
    /// assert_eq!(Digit::new(b'x'), None);
    /// ```
    #[inline(always)]
    pub const fn new(byte: u8) -> Option<Digit> {
        if is_digit(byte) { Some(Digit(byte)) } else { None }
    }

    /// Numeric value, `0..=9`.
    #[inline(always)]
    pub const fn value(self) -> u8 {
        self.0 - b'0'
    }

    /// The ASCII byte this digit was built from.
    #[inline(always)]
    pub const fn as_byte(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Digit {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{}", self.0 as char)
    }
}

/// Non-empty, immutable run of decimal digits, most significant first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DigitSequence<'a>(&'a [u8]);

macro_rules! impl_to_unsigned {
    ($($to:ident => $t:ident, $read:ident;)*) => {$(
        #[doc = concat!("Evaluate the sequence as a `", stringify!($t), "`.")]
        ///
        /// Only [`DigitError::Overflow`] can be returned here.
        #[inline(always)]
        pub const fn $to(&self) -> Result<$t, DigitError> {
            $read(self.0)
        }
    )*};
}

impl<'a> DigitSequence<'a> {
    /// Validate `bytes` and wrap them.
    ///
    /// # Example
    /// ```
    /// # use digit_forge::{DigitSequence, DigitError};
    /// let seq = DigitSequence::new(b"1024").unwrap();
    /// assert_eq!(seq.to_usize(), Ok(1024));
    /// assert_eq!(DigitSequence::new(b""), Err(DigitError::Empty));
    /// ```
    #[inline(always)]
    pub const fn new(bytes: &'a [u8]) -> Result<Self, DigitError> {
        match validate(bytes) {
            Ok(()) => Ok(DigitSequence(bytes)),
            Err(e) => Err(e),
        }
    }

    /// Number of digits, always at least 1.
    #[inline(always)]
    #[allow(clippy::len_without_is_empty)]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// The validated ASCII bytes.
    #[inline(always)]
    pub const fn as_bytes(&self) -> &'a [u8] {
        self.0
    }

    /// Most significant digit.
    #[inline(always)]
    pub const fn first(&self) -> Digit {
        Digit(self.0[0])
    }

    /// Split into the most significant digit and the remaining digits.
    ///
    /// The tail is `None` for a single-digit sequence.
    ///
    /// # Example
    /// ```
    /// # use digit_forge::DigitSequence;
    /// let seq = DigitSequence::new(b"512").unwrap();
    /// let (head, tail) = seq.split_first();
    /// assert_eq!(head.value(), 5);
    /// assert_eq!(tail.map(|t| t.as_bytes()), Some(&b"12"[..]));
    /// ```
    #[inline(always)]
    pub const fn split_first(&self) -> (Digit, Option<DigitSequence<'a>>) {
        let (head, tail) = self.0.split_at(1);
        let tail = if tail.is_empty() {
            None
        } else {
            Some(DigitSequence(tail))
        };
        (Digit(head[0]), tail)
    }

    /// Iterate the digits, most significant first.
    pub fn digits(&self) -> impl Iterator<Item = Digit> + 'a {
        self.0.iter().map(|&b| Digit(b))
    }

    impl_to_unsigned! {
        to_u8 => u8, read_u8;
        to_u16 => u16, read_u16;
        to_u32 => u32, read_u32;
        to_u64 => u64, read_u64;
        to_u128 => u128, read_u128;
        to_usize => usize, read_usize;
    }
}

impl<'a> TryFrom<&'a [u8]> for DigitSequence<'a> {
    type Error = DigitError;

    fn try_from(bytes: &'a [u8]) -> Result<Self, Self::Error> {
        DigitSequence::new(bytes)
    }
}

impl<'a> TryFrom<&'a str> for DigitSequence<'a> {
    type Error = DigitError;

    fn try_from(text: &'a str) -> Result<Self, Self::Error> {
        DigitSequence::new(text.as_bytes())
    }
}

impl fmt::Display for DigitSequence<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        // validated ASCII
        let text = core::str::from_utf8(self.0).map_err(|_| fmt::Error)?;
        f.write_str(text)
    }
}
