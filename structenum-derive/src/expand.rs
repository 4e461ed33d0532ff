//! `EnumRecord` impl generation.

use proc_macro2::TokenStream;
use quote::quote;
use syn::ext::IdentExt;
use syn::{parse_quote, DeriveInput, Path};

use structenum_shape::{analyze, container_attrs};

pub(crate) fn expand(input: &DeriveInput) -> syn::Result<TokenStream> {
    let container = container_attrs(&input.attrs)?;
    let shape = analyze(input)?;

    let krate: Path = container.krate.unwrap_or_else(|| parse_quote!(::structenum));
    let ident = &input.ident;
    let type_name = ident.unraw().to_string();
    let value_ty = &shape.value_ty;

    let mut generics = input.generics.clone();
    generics
        .make_where_clause()
        .predicates
        .push(parse_quote!(#value_ty: #krate::EnumValue));
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let idents: Vec<_> = shape.members.iter().map(|m| &m.ident).collect();
    let names: Vec<_> = shape.members.iter().map(|m| m.name.as_str()).collect();

    Ok(quote! {
        #[automatically_derived]
        impl #impl_generics #krate::EnumRecord for #ident #ty_generics #where_clause {
            type Value = #value_ty;

            const TYPE_NAME: &'static str = #type_name;

            const FIELD_NAMES: &'static [&'static str] = &[#(#names),*];

            fn resolve_fields<__F>(self, mut __resolve: __F) -> Self
            where
                __F: ::core::ops::FnMut(&'static str, Self::Value) -> Self::Value,
            {
                Self {
                    #(#idents: __resolve(#names, self.#idents),)*
                }
            }
        }
    })
}
