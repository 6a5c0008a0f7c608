//! # digit-forge-macros
//!
//! Literal hook for [`digit-forge`](https://docs.rs/digit-forge). Use it
//! through the `digit_forge::digits!` re-export; the expansion refers to
//! `::digit_forge` paths and does not work on its own.

extern crate proc_macro;
use proc_macro::TokenStream;

mod literal;

/// Evaluate an integer literal token as an unsigned constant at compile time.
///
/// A trailing `u8`, `u16`, `u32`, `u64`, `u128` or `usize` suffix picks the
/// result type; without one the result is a `usize`. Every other character of
/// the token must be a decimal digit, otherwise the build fails with
/// "non-numeral character detected". Float-shaped tokens such as `1e3` are
/// routed the same way and rejected at their first non-digit character.
#[proc_macro]
pub fn digits(input: TokenStream) -> TokenStream {
    let lit = syn::parse_macro_input!(input as syn::Lit);
    literal::expand(&lit)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
