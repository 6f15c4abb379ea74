//! Generator configuration.

use crate::errors::GeneratorError;

/// Default path of the runtime crate in generated code.
pub const DEFAULT_RUNTIME_CRATE: &str = "methodgen_runtime";

/// Default form key the auth token is sent under.
pub const DEFAULT_TOKEN_KEY: &str = "token";

/// Options controlling what the generator emits.
///
/// ## Examples
///
/// ```
/// use methodgen_gen::config::GeneratorConfig;
///
/// let config = GeneratorConfig::default().with_runtime_crate("crate::runtime");
/// assert!(config.validate().is_ok());
/// assert!(config.runtime_path().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Path generated code uses to reach the runtime crate.
    pub runtime_crate: String,

    /// Form key the service token is sent under.
    pub token_key: String,

    /// Catalog name quoted in the generated-file header.
    pub catalog_label: String,

    /// Whether to emit a `mod.rs` declaring every generated module.
    pub emit_mod_file: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            runtime_crate: DEFAULT_RUNTIME_CRATE.to_string(),
            token_key: DEFAULT_TOKEN_KEY.to_string(),
            catalog_label: "endpoints.json".to_string(),
            emit_mod_file: true,
        }
    }
}

impl GeneratorConfig {
    pub fn with_runtime_crate(mut self, runtime_crate: impl Into<String>) -> Self {
        self.runtime_crate = runtime_crate.into();
        self
    }

    pub fn with_token_key(mut self, token_key: impl Into<String>) -> Self {
        self.token_key = token_key.into();
        self
    }

    pub fn with_catalog_label(mut self, catalog_label: impl Into<String>) -> Self {
        self.catalog_label = catalog_label.into();
        self
    }

    pub fn with_mod_file(mut self, emit_mod_file: bool) -> Self {
        self.emit_mod_file = emit_mod_file;
        self
    }

    /// Parses `runtime_crate` as a Rust path.
    ///
    /// ## Errors
    ///
    /// Returns `GeneratorError::InvalidConfig` if the value is not a path.
    pub fn runtime_path(&self) -> Result<syn::Path, GeneratorError> {
        syn::parse_str(&self.runtime_crate).map_err(|e| {
            GeneratorError::InvalidConfig(format!(
                "runtime crate '{}' is not a Rust path: {}",
                self.runtime_crate, e
            ))
        })
    }

    /// Checks the configuration before any code is generated.
    ///
    /// ## Errors
    ///
    /// Returns `GeneratorError::InvalidConfig` if the runtime crate is not a
    /// path, or the token key is empty or contains characters that would
    /// need escaping in a form body.
    pub fn validate(&self) -> Result<(), GeneratorError> {
        self.runtime_path()?;

        if self.token_key.is_empty() {
            return Err(GeneratorError::InvalidConfig(
                "token key must not be empty".to_string(),
            ));
        }
        if !self
            .token_key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            return Err(GeneratorError::InvalidConfig(format!(
                "token key '{}' must contain only letters, digits, '_' or '-'",
                self.token_key
            )));
        }
        Ok(())
    }
}
