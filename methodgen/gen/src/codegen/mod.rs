//! Code generation for methodgen.
//!
//! Each submodule produces one piece of the generated bindings:
//!
//! - [`service`] - One service handle per group, in the `services` unit
//! - [`call`] - Per-endpoint call-state type, constructor and setters
//! - [`arguments`] - Field, parameter and setter shapes per argument type
//! - [`values`] - The `values()` form serializer
//! - [`execute`] - The `execute()` routine and its response decoding
//!
//! ## Output Format
//!
//! All generators return `proc_macro2::TokenStream`, which is then:
//! - Validated with `syn::parse2` to ensure correctness
//! - Formatted with `prettyplease` for consistent style
//!
//! Generated code never imports anything. Runtime items are spelled through
//! the configured runtime path and services through `super::services`, so a
//! unit can be spliced into any module with `include!`.
//!
//! See [`crate::output`] for the assembly and file writing logic.

pub mod arguments;
pub mod call;
pub mod execute;
pub mod service;
pub mod values;

pub use call::{generate_call, generate_unit};
pub use service::{generate_service, generate_services_unit};

use proc_macro2::TokenStream;

use crate::config::GeneratorConfig;
use crate::errors::GeneratorError;

/// Settings every emitter needs.
#[derive(Debug, Clone)]
pub struct CodegenContext {
    /// Path to the runtime crate, e.g. `methodgen_runtime`.
    pub runtime: syn::Path,

    /// Form key the service token is sent under.
    pub token_key: String,
}

impl CodegenContext {
    /// ## Errors
    ///
    /// Returns `GeneratorError::InvalidConfig` if the configuration is invalid.
    pub fn new(config: &GeneratorConfig) -> Result<Self, GeneratorError> {
        config.validate()?;
        Ok(Self {
            runtime: config.runtime_path()?,
            token_key: config.token_key.clone(),
        })
    }
}

impl Default for CodegenContext {
    fn default() -> Self {
        Self {
            runtime: syn::parse_quote!(methodgen_runtime),
            token_key: crate::config::DEFAULT_TOKEN_KEY.to_string(),
        }
    }
}

/// Validates that the generated code is syntactically correct.
///
/// ## Errors
///
/// Returns an error string if the generated code fails to parse.
pub fn validate_generated_code(tokens: &TokenStream) -> Result<(), String> {
    syn::parse2::<syn::File>(tokens.clone()).map_err(|e| e.to_string())?;
    Ok(())
}

/// Formats generated code using prettyplease.
///
/// ## Errors
///
/// Returns an error string if the code fails to parse.
pub fn format_generated_code(tokens: &TokenStream) -> Result<String, String> {
    let file = syn::parse2::<syn::File>(tokens.clone()).map_err(|e| e.to_string())?;
    Ok(prettyplease::unparse(&file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use quote::quote;

    #[test]
    fn context_follows_config() {
        let config = GeneratorConfig::default()
            .with_runtime_crate("crate::rt")
            .with_token_key("access_token");
        let ctx = CodegenContext::new(&config).unwrap();
        let runtime = &ctx.runtime;
        assert_eq!(quote!(#runtime).to_string(), "crate :: rt");
        assert_eq!(ctx.token_key, "access_token");
    }

    #[test]
    fn context_debug_shows_runtime_path() {
        let debug = format!("{:?}", CodegenContext::default());
        assert!(debug.starts_with("CodegenContext"));
        assert!(debug.contains("methodgen_runtime"));
        assert!(debug.contains("token_key: \"token\""));
    }

    #[test]
    fn context_rejects_invalid_config() {
        let config = GeneratorConfig::default().with_token_key("");
        assert!(CodegenContext::new(&config).is_err());
    }

    #[test]
    fn validate_generated_code_rejects_fragments() {
        assert!(validate_generated_code(&quote! { struct A; }).is_ok());
        assert!(validate_generated_code(&quote! { let x = }).is_err());
    }
}
