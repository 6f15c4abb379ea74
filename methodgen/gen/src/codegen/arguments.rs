//! Per-argument code: field declarations, constructor parameters and setters.
//!
//! Each [`ArgType`] decides how an argument is stored and how callers set it:
//!
//! | Type | Field | Zero value | Optional setters |
//! |---|---|---|---|
//! | text | `String` | `String::new()` | `name(impl Into<String>)` |
//! | boolean | `bool` | `false` | `name(bool)` |
//! | integer | `i64` | `0` | `name(i64)` |
//! | list | `Vec<X>` | `Vec::new()` | `set_name(Vec<X>)`, `singular(X)` |
//!
//! Lists of `String` take `impl Into<String>` in their append setter, like
//! text setters do.
//! | object | `Option<X>` | `None` | `name(X)` |

use methodgen_define::{ArgType, Argument};
use proc_macro2::{Ident, TokenStream};
use quote::quote;

use crate::errors::GeneratorError;
use crate::naming::{singularize, snake_case, snake_ident};

/// Parses a catalog type string as a Rust type.
///
/// ## Errors
///
/// Returns `GeneratorError::InvalidType` if `ty` does not parse.
pub fn parse_type(endpoint: &str, ty: &str) -> Result<syn::Type, GeneratorError> {
    syn::parse_str(ty).map_err(|e| GeneratorError::InvalidType {
        endpoint: endpoint.to_string(),
        ty: ty.to_string(),
        reason: e.to_string(),
    })
}

/// Storage class of an argument, with element types already parsed.
#[derive(Debug, Clone)]
pub enum FieldKind {
    Text,
    Boolean,
    Integer,
    List(syn::Type),
    Object(syn::Type),
}

/// An argument resolved into the identifiers and types the emitters need.
#[derive(Debug, Clone)]
pub struct ArgumentSpec<'a> {
    pub arg: &'a Argument,
    pub field: Ident,
    pub kind: FieldKind,
}

impl<'a> ArgumentSpec<'a> {
    /// ## Errors
    ///
    /// Returns `GeneratorError::InvalidType` if a list element or object
    /// type does not parse.
    pub fn new(endpoint: &str, arg: &'a Argument) -> Result<Self, GeneratorError> {
        let kind = match &arg.ty {
            ArgType::Text => FieldKind::Text,
            ArgType::Boolean => FieldKind::Boolean,
            ArgType::Integer => FieldKind::Integer,
            ArgType::List(element) => FieldKind::List(parse_type(endpoint, element)?),
            ArgType::Object(ty) => FieldKind::Object(parse_type(endpoint, ty)?),
        };
        Ok(Self {
            arg,
            field: snake_ident(&arg.name),
            kind,
        })
    }

    /// Type of the struct field.
    pub fn field_type(&self) -> TokenStream {
        match &self.kind {
            FieldKind::Text => quote! { String },
            FieldKind::Boolean => quote! { bool },
            FieldKind::Integer => quote! { i64 },
            FieldKind::List(element) => quote! { Vec<#element> },
            FieldKind::Object(ty) => quote! { Option<#ty> },
        }
    }

    /// Expression for the unset value.
    pub fn zero_value(&self) -> TokenStream {
        match &self.kind {
            FieldKind::Text => quote! { String::new() },
            FieldKind::Boolean => quote! { false },
            FieldKind::Integer => quote! { 0 },
            FieldKind::List(_) => quote! { Vec::new() },
            FieldKind::Object(_) => quote! { None },
        }
    }

    /// Constructor parameter declaration for a required argument.
    pub fn param(&self) -> TokenStream {
        let field = &self.field;
        match &self.kind {
            FieldKind::Text => quote! { #field: impl Into<String> },
            FieldKind::Object(ty) => quote! { #field: #ty },
            _ => {
                let ty = self.field_type();
                quote! { #field: #ty }
            }
        }
    }

    /// Field initializer for a required argument taken by the constructor.
    pub fn param_init(&self) -> TokenStream {
        let field = &self.field;
        match &self.kind {
            FieldKind::Text => quote! { #field: #field.into() },
            FieldKind::Object(_) => quote! { #field: Some(#field) },
            _ => quote! { #field },
        }
    }

    /// Field declaration, documented with the argument comment.
    pub fn field_decl(&self) -> TokenStream {
        let field = &self.field;
        let ty = self.field_type();
        let docs = comment_lines(&self.arg.comment);
        quote! {
            #(#[doc = #docs])*
            #field: #ty
        }
    }

    /// Builder methods for an optional argument.
    pub fn setters(&self) -> TokenStream {
        let field = &self.field;
        let docs = self.setter_docs();

        match &self.kind {
            FieldKind::Text => quote! {
                #(#[doc = #docs])*
                pub fn #field(mut self, #field: impl Into<String>) -> Self {
                    self.#field = #field.into();
                    self
                }
            },
            FieldKind::Boolean | FieldKind::Integer => {
                let ty = self.field_type();
                quote! {
                    #(#[doc = #docs])*
                    pub fn #field(mut self, #field: #ty) -> Self {
                        self.#field = #field;
                        self
                    }
                }
            }
            FieldKind::Object(ty) => quote! {
                #(#[doc = #docs])*
                pub fn #field(mut self, #field: #ty) -> Self {
                    self.#field = Some(#field);
                    self
                }
            },
            FieldKind::List(element) => {
                let replace = quote::format_ident!("set_{}", snake_case(&self.arg.name));
                let append = snake_ident(self.singular());
                let append_doc = format!(" Appends one element to `{}`.", self.arg.query_key());
                let (append_ty, append_value) = if is_string(element) {
                    (quote! { impl Into<String> }, quote! { #append.into() })
                } else {
                    (quote! { #element }, quote! { #append })
                };
                quote! {
                    #(#[doc = #docs])*
                    pub fn #replace(mut self, #field: Vec<#element>) -> Self {
                        self.#field = #field;
                        self
                    }

                    #[doc = #append_doc]
                    pub fn #append(mut self, #append: #append_ty) -> Self {
                        self.#field.push(#append_value);
                        self
                    }
                }
            }
        }
    }

    fn singular(&self) -> &str {
        self.arg
            .singular
            .as_deref()
            .unwrap_or_else(|| singularize(&self.arg.name))
    }

    fn setter_docs(&self) -> Vec<String> {
        let mut lines = vec![format!(" Sets the `{}` argument.", self.arg.query_key())];
        let comment = comment_lines(&self.arg.comment);
        if !comment.is_empty() {
            lines.push(String::new());
            lines.extend(comment);
        }
        if !self.arg.default.is_empty() {
            lines.push(String::new());
            lines.push(format!(" Remote default: `{}`.", self.arg.default));
        }
        lines
    }
}

fn is_string(ty: &syn::Type) -> bool {
    matches!(ty, syn::Type::Path(path) if path.qself.is_none() && path.path.is_ident("String"))
}

/// Names of the builder methods generated for `arg`.
///
/// Required arguments are set through the constructor and get none.
pub fn setter_names(arg: &Argument) -> Vec<String> {
    if arg.required {
        return Vec::new();
    }
    match &arg.ty {
        ArgType::List(_) => {
            let singular = arg
                .singular
                .as_deref()
                .unwrap_or_else(|| singularize(&arg.name));
            vec![
                format!("set_{}", snake_case(&arg.name)),
                snake_case(singular),
            ]
        }
        _ => vec![snake_case(&arg.name)],
    }
}

/// Splits free-form text into doc lines with the leading space prettyplease
/// expects.
pub(crate) fn comment_lines(text: &str) -> Vec<String> {
    if text.trim().is_empty() {
        return Vec::new();
    }
    text.trim()
        .lines()
        .map(|line| {
            if line.trim().is_empty() {
                String::new()
            } else {
                format!(" {}", line.trim_end())
            }
        })
        .collect()
}
