//! Routing of literal tokens to the const evaluator.

use proc_macro2::{
    Ident, //
    Span,
    TokenStream,
};
use quote::{
    format_ident, //
    quote_spanned,
};
use syn::{
    Lit, //
    LitByteStr,
};

/// Suffixes that select the result width. Anything else stays in the token.
const WIDTH_SUFFIXES: &[&str] = &["u8", "u16", "u32", "u64", "u128", "usize"];

/// Width used when the literal carries no recognised suffix.
const DEFAULT_WIDTH: &str = "usize";

/// Split a literal into the digit text to evaluate and the result width.
///
/// Only a recognised width suffix on an integer literal is stripped. Any
/// other suffix, and the whole text of a float literal, is left in place so
/// the evaluator rejects it as a non-numeral character.
pub(crate) fn route(lit: &Lit) -> syn::Result<(String, &'static str)> {
    match lit {
        Lit::Int(int) => Ok(route_text(int.token().to_string(), int.suffix())),
        Lit::Float(float) => Ok((float.token().to_string(), DEFAULT_WIDTH)),
        other => Err(syn::Error::new(
            other.span(),
            "expected integer literal",
        )),
    }
}

fn route_text(
    text: String,
    suffix: &str,
) -> (String, &'static str) {
    let width = WIDTH_SUFFIXES
        .iter()
        .copied()
        .find(|w| !suffix.is_empty() && *w == suffix);
    match width {
        Some(width) => {
            let digits = text
                .strip_suffix(width)
                .unwrap_or(&text)
                .to_owned();
            (digits, width)
        }
        None => (text, DEFAULT_WIDTH),
    }
}

/// Expand to a block whose value is computed by a `const` item, so both the
/// validation and the arithmetic run in the compiler.
pub(crate) fn expand(lit: &Lit) -> syn::Result<TokenStream> {
    let (digits, width) = route(lit)?;
    let span = lit.span();
    let ty = Ident::new(width, Span::call_site());
    let forge = format_ident!("forge_{}", width);
    let bytes = LitByteStr::new(digits.as_bytes(), span);
    Ok(quote_spanned! {span=>
        {
            const VALUE: #ty = ::digit_forge::#forge(#bytes);
            VALUE
        }
    })
}
