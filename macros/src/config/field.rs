//! Field information structures and parsing.

use syn::Type;

use crate::config::attr::{extract_doc_comment, get_example, get_inline_doc, has_attr};
use crate::config::types::to_camel_case;

/// Parsed field information.
pub struct FieldInfo {
    pub name: syn::Ident,
    pub toml_name: String,
    pub doc: Option<String>,
    pub inline_doc: Option<String>,
    pub example: Option<String>,
    pub sub: bool,
    pub ty: Type,
}

impl FieldInfo {
    /// Parse field info from a syn::Field.
    pub fn from_field(field: &syn::Field, rename_all: Option<&str>) -> Option<Self> {
        let ident = field.ident.as_ref()?;
        let attrs = &field.attrs;

        let raw = ident.to_string();
        let raw = raw.strip_prefix("r#").unwrap_or(&raw);
        let toml_name = match rename_all {
            Some("camelCase") => to_camel_case(raw),
            _ => raw.to_string(),
        };

        Some(Self {
            name: ident.clone(),
            toml_name,
            doc: extract_doc_comment(attrs),
            inline_doc: get_inline_doc(attrs),
            example: get_example(attrs),
            sub: has_attr(attrs, "sub"),
            ty: field.ty.clone(),
        })
    }
}
