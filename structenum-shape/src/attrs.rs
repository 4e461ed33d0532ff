//! `#[enum_record(...)]` attribute parsing.

use syn::{Attribute, LitStr, Path};

/// Name of the helper attribute.
pub const ATTR: &str = "enum_record";

/// Container-level options.
#[derive(Debug, Default)]
pub struct ContainerAttrs {
    /// Path to the runtime crate, for re-exporting crates.
    pub krate: Option<Path>,
}

/// Field-level options.
#[derive(Debug, Default)]
pub struct FieldAttrs {
    /// Name used for derivation instead of the field identifier.
    pub rename: Option<LitStr>,
}

pub fn container_attrs(attrs: &[Attribute]) -> syn::Result<ContainerAttrs> {
    let mut out = ContainerAttrs::default();
    for attr in attrs.iter().filter(|a| a.path().is_ident(ATTR)) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("crate") {
                let lit: LitStr = meta.value()?.parse()?;
                out.krate = Some(lit.parse()?);
                Ok(())
            } else {
                Err(meta.error("unknown enum_record container attribute, expected `crate`"))
            }
        })?;
    }
    Ok(out)
}

pub fn field_attrs(attrs: &[Attribute]) -> syn::Result<FieldAttrs> {
    let mut out = FieldAttrs::default();
    for attr in attrs.iter().filter(|a| a.path().is_ident(ATTR)) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename") {
                let lit: LitStr = meta.value()?.parse()?;
                if lit.value().is_empty() {
                    return Err(syn::Error::new(lit.span(), "rename must not be empty"));
                }
                out.rename = Some(lit);
                Ok(())
            } else {
                Err(meta.error("unknown enum_record field attribute, expected `rename`"))
            }
        })?;
    }
    Ok(out)
}
