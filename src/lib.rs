//! # digit-forge
//!
//! Compile-time evaluation of decimal digit literals into unsigned integer constants.
//!
//! A literal such as `1024` is validated and converted entirely by the compiler's
//! const evaluator. Only the resulting constant ends up in the binary; a literal
//! containing anything other than `0`-`9` fails the build with
//! "non-numeral character detected".
//!
//! ## Entry Points
//!
//! - [`digits!`] - literal hook, `digits!(4096u32)`
//! - `forge_*` - const assertion over a byte string, `forge_usize(b"4096")`
//! - `read_*` - fallible const evaluation, `read_usize(b"4096") -> Result`
//! - [`DigitSequence`] - validated typed view, evaluated on demand
//!
//! ## Evaluation Rules
//!
//! - Every byte is validated before any arithmetic
//! - Head-first recursion: `d * 10^len(tail) + value(tail)`
//! - Checked arithmetic: a value too wide for the target type is rejected,
//!   never wrapped
//! - Leading zeros are accepted and do not change the value
//!
//! # Example
//!
//! ```rust
//! use digit_forge::*;
//!
//! // Literal hook, evaluated at compile time
//! let block_size = digits!(4096);
//! assert_eq!(block_size, 4096usize);
//!
//! // A width suffix selects the result type
//! let small: u16 = digits!(512u16);
//! assert_eq!(small, 512);
//!
//! // Const assertion
//! const KIB: usize = forge_usize(b"1024");
//! assert_eq!(KIB, 1024);
//!
//! // Fallible evaluation
//! assert_eq!(read_u64(b"0100"), Ok(100));
//! assert_eq!(
//!     read_u64(b"12a4"),
//!     Err(DigitError::InvalidDigit { position: 2, byte: b'a' })
//! );
//! ```
//!
//! A token with a non-digit character does not build:
//!
//! ```compile_fail
//! let size = digit_forge::digits!(12a4);
//! ```
//!
//! ```compile_fail
//! let size = digit_forge::digits!(1_024);
//! ```
//!
//! Float-shaped tokens are rejected the same way:
//!
//! ```compile_fail
//! let size = digit_forge::digits!(1e3);
//! ```
//!
//! ```compile_fail
//! let size = digit_forge::digits!(12.5);
//! ```

// Macro expansions name `::digit_forge`, including inside this crate.
extern crate self as digit_forge;

pub mod digit;
pub mod errors;
pub mod forge;
pub mod reading;

// Re-export all public items for convenience
pub use digit::*;
pub use errors::*;
pub use forge::*;
pub use reading::*;

pub use digit_forge_macros::digits;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_default_width() {
        let value = digits!(1024);
        let _: usize = value;
        assert_eq!(value, 1024);
        assert_eq!(digits!(0), 0);
        assert_eq!(digits!(9), 9);
        assert_eq!(digits!(0100), 100);
    }

    #[test]
    fn test_digits_width_suffix() {
        let a: u8 = digits!(255u8);
        let b: u16 = digits!(512u16);
        let c: u32 = digits!(4096u32);
        let d: u64 = digits!(18446744073709551615u64);
        let e: u128 = digits!(340282366920938463463374607431768211455u128);
        let f: usize = digits!(8192usize);
        assert_eq!(a, u8::MAX);
        assert_eq!(b, 512);
        assert_eq!(c, 4096);
        assert_eq!(d, u64::MAX);
        assert_eq!(e, u128::MAX);
        assert_eq!(f, 8192);
    }

    #[test]
    fn test_digits_in_const_item() {
        const BUFFER: usize = digits!(8192);
        static TABLE: [u8; digits!(16)] = [0; 16];
        assert_eq!(BUFFER, 8192);
        assert_eq!(TABLE.len(), 16);
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_digits_usize_max() {
        let max = digits!(18446744073709551615usize);
        assert_eq!(max, usize::MAX);
        assert_eq!(digits!(000000000000000000000000018446744073709551615), usize::MAX);
    }

    #[test]
    fn test_entry_points_agree() {
        let from_macro = digits!(65535u64);
        let from_forge = forge_u64(b"65535");
        let from_read = read_u64(b"65535");
        let from_sequence = DigitSequence::new(b"65535").and_then(|s| s.to_u64());
        assert_eq!(from_macro, from_forge);
        assert_eq!(from_read, Ok(from_forge));
        assert_eq!(from_sequence, Ok(from_forge));
    }
}
