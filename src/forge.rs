//! Compile-time assertions over digit sequences.
//!
//! The `forge_*` functions unwrap the matching `read_*` result or panic with
//! [`DigitError::message`]. Bound to a `const` or `static` item the panic
//! happens inside the compiler, so an invalid literal fails the build and no
//! artifact is ever produced with it:
//!
//! ```compile_fail
//! # use digit_forge::forge_usize;
//! const PAGE: usize = forge_usize(b"40k6"); // non-numeral character detected
//! let _ = PAGE;
//! ```
//!
//! Outside a const context the same call is an unrecoverable panic. There is
//! no fallback value.

use crate::{
    DigitError, //
    read_u8,
    read_u16,
    read_u32,
    read_u64,
    read_u128,
    read_usize,
};

/// Abort evaluation with the fixed diagnostic for `error`.
#[inline(never)]
#[track_caller]
const fn reject(error: DigitError) -> ! {
    match error {
        DigitError::InvalidDigit { .. } => panic!("non-numeral character detected"),
        DigitError::Empty => panic!("empty digit sequence"),
        DigitError::Overflow => panic!("digit sequence overflows the target integer width"),
    }
}

macro_rules! impl_forge_unsigned {
    ($($t:ident => $forge:ident, $read:ident;)*) => {$(
        #[doc = concat!("Evaluate `digits` as a `", stringify!($t), "` or fail the build.")]
        ///
        /// # Panics
        ///
        /// On any [`DigitError`]. In a const context that panic is a
        /// compile error.
        ///
        /// # Example
        /// ```
        #[doc = concat!("# use digit_forge::", stringify!($forge), ";")]
        #[doc = concat!("const LIMIT: ", stringify!($t), " = ", stringify!($forge), "(b\"100\");")]
        /// assert_eq!(LIMIT, 100);
        /// ```
        #[inline(always)]
        #[track_caller]
        pub const fn $forge(digits: &[u8]) -> $t {
            match $read(digits) {
                Ok(v) => v,
                Err(e) => reject(e),
            }
        }
    )*};
}

impl_forge_unsigned! {
    u8 => forge_u8, read_u8;
    u16 => forge_u16, read_u16;
    u32 => forge_u32, read_u32;
    u64 => forge_u64, read_u64;
    u128 => forge_u128, read_u128;
    usize => forge_usize, read_usize;
}
