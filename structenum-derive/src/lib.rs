//! structenum-derive: `#[derive(EnumRecord)]` for structenum.
//!
//! Generates an `EnumRecord` impl that lists the struct's member names in
//! declaration order and rebuilds the struct from resolved values. Records
//! with reference or pointer fields, mixed field types, no fields, or a
//! non-struct shape are rejected with a compile error. The rules themselves
//! live in `structenum-shape`.
//!
//! # Attributes
//!
//! - `#[enum_record(rename = "Name")]` on a field: derive its value from
//!   `Name` instead of the field identifier
//! - `#[enum_record(crate = "path::to::structenum")]` on the struct: path of
//!   the runtime crate when it is re-exported

mod expand;

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

#[proc_macro_derive(EnumRecord, attributes(enum_record))]
pub fn derive_enum_record(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand::expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
