//! Enum record extraction from Rust AST.
//!
//! Finds every struct carrying `#[derive(EnumRecord)]` and records its
//! members, the value each unset member would derive under a casing, and any
//! shape problem the derive macro would reject.

use std::path::Path;

use serde::{Deserialize, Serialize};
use structenum::Casing;
use structenum_shape::{inspect_struct, type_key};
use syn::ext::IdentExt;
use syn::punctuated::Punctuated;
use syn::{visit::Visit, Attribute, File, Item, ItemMod, ItemStruct, Token};
use tracing::warn;

/// Type spellings treated as text scalars.
const TEXT_TYPES: &[&str] = &["String", "std :: string :: String", "alloc :: string :: String"];

/// One member of an extracted record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MemberDef {
    /// Field identifier as written
    pub field: String,
    /// Name used for derivation (rename or unraw identifier)
    pub name: String,
    /// Value an unset member resolves to; `None` for non-text scalars (zero)
    pub derived: Option<String>,
}

/// An enum record definition found in source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordDef {
    /// Declared struct name
    pub type_name: String,
    /// Source file path
    pub file: String,
    /// Module path within the file
    pub module_path: String,
    /// Line of the struct identifier (1-indexed)
    pub line: usize,
    /// Shared member type, if the fields agree
    pub value_type: Option<String>,
    /// Members in declaration order
    pub members: Vec<MemberDef>,
    /// Reasons the derive would reject this record
    pub problems: Vec<String>,
}

impl RecordDef {
    pub fn is_valid(&self) -> bool {
        self.problems.is_empty()
    }
}

fn has_enum_record_derive(attrs: &[Attribute]) -> bool {
    attrs.iter().filter(|a| a.path().is_ident("derive")).any(|attr| {
        attr.parse_args_with(Punctuated::<syn::Path, Token![,]>::parse_terminated)
            .map(|paths| {
                paths
                    .iter()
                    .any(|p| p.segments.last().is_some_and(|s| s.ident == "EnumRecord"))
            })
            .unwrap_or(false)
    })
}

/// AST visitor that extracts enum record definitions.
struct RecordExtractor {
    file_path: String,
    casing: Casing,
    results: Vec<RecordDef>,
    current_mod: Vec<String>,
}

impl RecordExtractor {
    fn new(file_path: String, casing: Casing) -> Self {
        Self {
            file_path,
            casing,
            results: Vec::new(),
            current_mod: Vec::new(),
        }
    }

    fn build_module_path(&self) -> String {
        self.current_mod.join("::")
    }

    fn extract(&self, item: &ItemStruct) -> RecordDef {
        let inspection = inspect_struct(&item.ident, &item.fields);
        let value_type = inspection.value_ty.as_ref().map(type_key);
        let is_text = value_type
            .as_deref()
            .is_some_and(|ty| TEXT_TYPES.contains(&ty));

        let members = inspection
            .members
            .iter()
            .map(|m| MemberDef {
                field: m.ident.to_string(),
                name: m.name.clone(),
                derived: is_text.then(|| self.casing.apply(&m.name)),
            })
            .collect();

        RecordDef {
            type_name: item.ident.unraw().to_string(),
            file: self.file_path.clone(),
            module_path: self.build_module_path(),
            line: item.ident.span().start().line,
            value_type,
            members,
            problems: inspection.problems(),
        }
    }
}

impl<'ast> Visit<'ast> for RecordExtractor {
    fn visit_item(&mut self, item: &'ast Item) {
        match item {
            Item::Struct(s) if has_enum_record_derive(&s.attrs) => {
                let record = self.extract(s);
                self.results.push(record);
            }

            Item::Mod(ItemMod {
                ident,
                content: Some((_, items)),
                ..
            }) => {
                self.current_mod.push(ident.to_string());
                for i in items {
                    self.visit_item(i);
                }
                self.current_mod.pop();
                return;
            }

            _ => {}
        }

        syn::visit::visit_item(self, item);
    }
}

/// Extract all enum record definitions from file content.
///
/// On parse error, returns an empty list and logs a warning.
pub fn extract_records(path: &Path, content: &str, casing: Casing) -> Vec<RecordDef> {
    let ast: File = match syn::parse_file(content) {
        Ok(ast) => ast,
        Err(e) => {
            warn!(file = %path.display(), error = %e, "AST parse failed");
            return Vec::new();
        }
    };

    let mut extractor = RecordExtractor::new(path.display().to_string(), casing);
    extractor.visit_file(&ast);
    extractor.results
}
