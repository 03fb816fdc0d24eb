#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros for the bridge crates.
//!
//! ## Usage
//! ```toml
//! [dependencies]
//! szn-derive = { path = "../infra/derive" }
//! thiserror = "2"
//! ```
//!
//! The examples below are `ignore`d because a proc-macro crate cannot use its own macros.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Attribute macro for crate-level error enums.
///
/// # Features
///
/// * **Derives**: Injects `Debug` and `thiserror::Error` unless already derived.
/// * **Context**: Generates a companion `<Name>Ext` trait with `.context(..)` for
///   `Result<T, Name>` and for `Result<T, Source>` of every source-carrying variant.
/// * **Conversions**: `From<Source>` for every variant with a `source` field (or a field
///   marked `#[source]`/`#[from]`), so `?` works on upstream errors.
/// * **Internal fallback**: `From<&'static str>` and `From<String>` when an `Internal`
///   variant exists.
/// * **Formatting**: a module-local `format_context` helper rendering ` (context)` or nothing.
///
/// # Requirements
///
/// 1. Only enums are accepted.
/// 2. Every variant uses named fields.
/// 3. A `context` field, when present, must be `Option<Cow<'static, str>>`.
/// 4. Variants with a source must also carry a `context` field.
///
/// # Example
///
/// ```rust,ignore
/// use std::borrow::Cow;
///
/// #[szn_derive::szn_error]
/// pub enum LoaderError {
///     #[error("Host failure{}: {source}", format_context(.context))]
///     Host { source: HostError, context: Option<Cow<'static, str>> },
///
///     #[error("Internal loader error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn inject() -> Result<(), LoaderError> {
///     document.append_script(&tag).context("Appending loader script")?;
///     Ok(())
/// }
/// ```
#[proc_macro_attribute]
pub fn szn_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand(input).into()
}
