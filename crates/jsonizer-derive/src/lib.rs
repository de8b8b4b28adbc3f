//! Code generation for the `jsonizer` crate.
//!
//! Provides `#[derive(Encodable)]`, which generates the `Encodable` and
//! `AsNode` impls for composite record structs, and the `Symbolic` and
//! `AsNode` impls for unit-variant enums. Field descriptors and type
//! lineage are thereby fixed at type-definition time instead of being
//! discovered per encode call.

mod encodable;

use proc_macro::TokenStream;

/// `#[derive(Encodable)]` macro for record structs and symbolic enums.
///
/// On a struct with named fields the derive emits fields in declaration
/// order. Helper attributes:
///
/// - `#[encodable(base)]` — marks the single embedded ancestor record;
///   its fields are spliced in at this position and its lineage is
///   appended after the deriving type's own name.
/// - `#[encodable(skip)]` — excludes a field from the document entirely.
///
/// On an enum every variant must be a unit variant; values encode as the
/// variant's name string.
#[proc_macro_derive(Encodable, attributes(encodable))]
pub fn derive_encodable(input: TokenStream) -> TokenStream {
    encodable::derive(input.into())
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
