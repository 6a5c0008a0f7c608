//! Const evaluation of decimal digit sequences.
//!
//! This module turns a byte sequence such as `b"4096"` into the unsigned
//! integer it spells out. Every function here is a `const fn`, so the whole
//! computation can be folded by the compiler and leave only the constant
//! behind.
//!
//! # Evaluation Rules
//!
//! - **Validate first**: every byte is checked before any arithmetic happens
//! - **Head-first recursion**: `value(d, tail) = d * 10^len(tail) + value(tail)`
//! - **Single digit base case**: `value(d) = d - b'0'`
//! - **Checked arithmetic**: overflow is reported as [`DigitError::Overflow`],
//!   never wrapped or saturated
//! - **No separators**: `_`, signs and radix prefixes are rejected like any
//!   other non-digit byte

use crate::DigitError;

/// Check if a byte is an ASCII decimal digit.
///
/// # Example
/// ```
/// # use digit_forge::is_digit;
/// assert!(is_digit(b'0'));
/// assert!(is_digit(b'9'));
/// assert!(!is_digit(b'a'));
/// ```
#[inline(always)]
pub const fn is_digit(b: u8) -> bool {
    b'0' <= b && b <= b'9'
}

/// Check that `digits` is a non-empty run of ASCII decimal digits.
///
/// Scans most significant first and reports the first offending byte.
///
/// # Example
/// ```
/// # use digit_forge::{validate, DigitError};
/// assert_eq!(validate(b"0100"), Ok(()));
/// assert_eq!(validate(b""), Err(DigitError::Empty));
/// assert_eq!(
///     validate(b"12a4"),
///     Err(DigitError::InvalidDigit { position: 2, byte: b'a' })
/// );
/// ```
#[inline(always)]
pub const fn validate(digits: &[u8]) -> Result<(), DigitError> {
    if digits.is_empty() {
        return Err(DigitError::Empty);
    }
    let mut i: usize = 0;
    while i < digits.len() {
        let b = digits[i];
        if !is_digit(b) {
            return Err(DigitError::InvalidDigit {
                position: i,
                byte: b,
            });
        }
        i += 1;
    }
    Ok(())
}

/// Drop leading `b'0'` bytes, keeping at least one digit.
#[inline(always)]
const fn strip_leading_zeros(digits: &[u8]) -> &[u8] {
    let mut start: usize = 0;
    while start + 1 < digits.len() && digits[start] == b'0' {
        start += 1;
    }
    digits.split_at(start).1
}

macro_rules! impl_read_unsigned {
    ($($t:ident => $read:ident, $pow10:ident, $eval:ident;)*) => {$(
        #[doc = concat!("Compute `10^k` as a `", stringify!($t), "`.")]
        ///
        /// Seeded at 1 and multiplied by 10 exactly `k` times.
        /// Returns `None` once the power no longer fits.
        #[inline(always)]
        pub const fn $pow10(k: usize) -> Option<$t> {
            let mut acc: $t = 1;
            let mut i: usize = 0;
            while i < k {
                acc = match acc.checked_mul(10) {
                    Some(v) => v,
                    None => return None,
                };
                i += 1;
            }
            Some(acc)
        }

        // Caller guarantees `digits` passed `validate`.
        const fn $eval(digits: &[u8]) -> Option<$t> {
            match digits {
                [] => Some(0),
                [d] => Some((*d - b'0') as $t),
                [d, tail @ ..] => {
                    let rest = match $eval(tail) {
                        Some(v) => v,
                        None => return None,
                    };
                    let d = (*d - b'0') as $t;
                    // 0 * 10^k is 0 even when 10^k itself would not fit
                    if d == 0 {
                        return Some(rest);
                    }
                    let scale = match $pow10(tail.len()) {
                        Some(v) => v,
                        None => return None,
                    };
                    let head = match d.checked_mul(scale) {
                        Some(v) => v,
                        None => return None,
                    };
                    head.checked_add(rest)
                }
            }
        }

        #[doc = concat!("Evaluate a decimal digit sequence as a `", stringify!($t), "`.")]
        ///
        /// The sequence is validated in full before evaluation. Fails with
        /// [`DigitError::Empty`], [`DigitError::InvalidDigit`] or
        /// [`DigitError::Overflow`]; there is no partial result.
        ///
        /// # Example
        /// ```
        #[doc = concat!("# use digit_forge::{", stringify!($read), ", DigitError};")]
        #[doc = concat!("assert_eq!(", stringify!($read), "(b\"42\"), Ok(42));")]
        #[doc = concat!("assert_eq!(", stringify!($read), "(b\"042\"), Ok(42));")]
        #[doc = concat!("assert!(", stringify!($read), "(b\"4x2\").is_err());")]
        /// ```
        #[inline(always)]
        pub const fn $read(digits: &[u8]) -> Result<$t, DigitError> {
            // decimal digit count of MAX, bounds the recursion depth
            const MAX_DIGITS: usize = {
                let mut max = $t::MAX;
                let mut n: usize = 0;
                while max > 0 {
                    max /= 10;
                    n += 1;
                }
                n
            };
            if let Err(e) = validate(digits) {
                return Err(e);
            }
            let digits = strip_leading_zeros(digits);
            if digits.len() > MAX_DIGITS {
                return Err(DigitError::Overflow);
            }
            match $eval(digits) {
                Some(v) => Ok(v),
                None => Err(DigitError::Overflow),
            }
        }
    )*};
}

impl_read_unsigned! {
    u8 => read_u8, pow10_u8, eval_u8;
    u16 => read_u16, pow10_u16, eval_u16;
    u32 => read_u32, pow10_u32, eval_u32;
    u64 => read_u64, pow10_u64, eval_u64;
    u128 => read_u128, pow10_u128, eval_u128;
    usize => read_usize, pow10_usize, eval_usize;
}
