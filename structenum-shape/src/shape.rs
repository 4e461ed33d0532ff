//! Record shape validation.
//!
//! A record must be a struct with at least one named field, every field must
//! hold a value (no references or pointers), and all fields must share one
//! type. Every violation is collected and reported before any code is
//! generated.

use proc_macro2::Span;
use quote::ToTokens;
use syn::ext::IdentExt;
use syn::{Data, DeriveInput, Fields, GenericArgument, Ident, PathArguments, Type};

use crate::attrs::field_attrs;

/// Smart pointers treated as indirect fields.
const POINTER_TYPES: &[&str] = &["Box", "Rc", "Arc", "Cow"];

/// One enum member.
#[derive(Debug, Clone)]
pub struct Member {
    pub ident: Ident,
    /// Name used for derivation: the rename if given, else the unraw identifier.
    pub name: String,
}

/// A validated record.
#[derive(Debug)]
pub struct RecordShape {
    pub value_ty: Type,
    pub members: Vec<Member>,
}

/// Describes why a type is indirect, if it is.
fn indirection(ty: &Type) -> Option<String> {
    match ty {
        Type::Reference(r) if r.mutability.is_some() => Some("a mutable reference".into()),
        Type::Reference(_) => Some("a reference".into()),
        Type::Ptr(_) => Some("a raw pointer".into()),
        Type::Paren(p) => indirection(&p.elem),
        Type::Group(g) => indirection(&g.elem),
        Type::Path(p) if p.qself.is_none() => {
            let last = p.path.segments.last()?;
            let name = last.ident.to_string();
            if POINTER_TYPES.contains(&name.as_str()) {
                return Some(format!("a `{name}` smart pointer"));
            }
            // `Option<&T>` and friends still hold an address.
            if let PathArguments::AngleBracketed(args) = &last.arguments {
                for arg in &args.args {
                    if let GenericArgument::Type(inner) = arg {
                        if let Some(kind) = indirection(inner) {
                            return Some(kind);
                        }
                    }
                }
            }
            None
        }
        _ => None,
    }
}

/// Token spelling used to compare field types.
pub fn type_key(ty: &Type) -> String {
    ty.to_token_stream().to_string()
}

/// Collects errors, combining them into one.
#[derive(Debug, Default)]
struct Errors(Option<syn::Error>);

impl Errors {
    fn push(&mut self, err: syn::Error) {
        match &mut self.0 {
            Some(existing) => existing.combine(err),
            None => self.0 = Some(err),
        }
    }

    fn finish(self) -> syn::Result<()> {
        self.0.map_or(Ok(()), Err)
    }
}

/// A struct's members together with every rule it breaks.
#[derive(Debug, Default)]
pub struct Inspection {
    /// Type shared by the fields; `None` when there are none or they disagree.
    pub value_ty: Option<Type>,
    /// Members in declaration order, including ones with broken rules.
    pub members: Vec<Member>,
    errors: Errors,
}

impl Inspection {
    pub fn is_valid(&self) -> bool {
        self.errors.0.is_none()
    }

    /// One message per broken rule, in source order.
    pub fn problems(&self) -> Vec<String> {
        self.errors.0.iter().flatten().map(|e| e.to_string()).collect()
    }

    pub fn into_shape(self) -> syn::Result<RecordShape> {
        self.errors.finish()?;
        let value_ty = self.value_ty.ok_or_else(|| {
            syn::Error::new(Span::call_site(), "EnumRecord requires at least one field")
        })?;
        Ok(RecordShape {
            value_ty,
            members: self.members,
        })
    }
}

/// Checks the fields of a struct named `ident`.
pub fn inspect_struct(ident: &Ident, fields: &Fields) -> Inspection {
    let mut inspection = Inspection::default();

    let Fields::Named(named) = fields else {
        inspection.errors.push(syn::Error::new_spanned(
            ident,
            "EnumRecord requires a struct with named fields",
        ));
        return inspection;
    };
    let Some(first) = named.named.first() else {
        inspection.errors.push(syn::Error::new_spanned(
            ident,
            "EnumRecord requires at least one field",
        ));
        return inspection;
    };
    let value_key = type_key(&first.ty);
    let mut uniform = true;

    for field in &named.named {
        let Some(ident) = field.ident.clone() else {
            continue;
        };

        if let Some(kind) = indirection(&field.ty) {
            inspection.errors.push(syn::Error::new_spanned(
                &field.ty,
                format!("field `{ident}` holds {kind}; enum record fields must hold values"),
            ));
        } else if type_key(&field.ty) != value_key {
            uniform = false;
            inspection.errors.push(syn::Error::new_spanned(
                &field.ty,
                format!(
                    "field `{ident}` has type `{}` but the first field has type `{value_key}`; \
                     all members must share one type",
                    type_key(&field.ty)
                ),
            ));
        }

        let rename = match field_attrs(&field.attrs) {
            Ok(attrs) => attrs.rename.map(|lit| lit.value()),
            Err(e) => {
                inspection.errors.push(e);
                None
            }
        };
        let name = rename.unwrap_or_else(|| ident.unraw().to_string());
        inspection.members.push(Member { ident, name });
    }

    if uniform {
        inspection.value_ty = Some(first.ty.clone());
    }
    inspection
}

/// Validates a derive input, combining every broken rule into one error.
pub fn analyze(input: &DeriveInput) -> syn::Result<RecordShape> {
    match &input.data {
        Data::Struct(data) => inspect_struct(&input.ident, &data.fields).into_shape(),
        Data::Enum(_) | Data::Union(_) => Err(syn::Error::new_spanned(
            &input.ident,
            "EnumRecord can only be derived for structs",
        )),
    }
}
