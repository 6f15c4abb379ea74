//! Error types for the methodgen generator.

use methodgen_define::CatalogError;
use thiserror::Error;

/// Errors that can occur while loading a catalog or generating code.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// The catalog could not be read or parsed.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// An endpoint name has no namespace separator.
    #[error("Invalid endpoint name '{0}': expected '<namespace>.<method>'")]
    InvalidEndpointName(String),

    /// Two catalog entries share a name.
    #[error("Duplicate endpoint '{0}'")]
    DuplicateEndpoint(String),

    /// An endpoint declares the same argument twice.
    #[error("Duplicate argument '{argument}' on endpoint '{endpoint}'")]
    DuplicateArgument { endpoint: String, argument: String },

    /// An argument name clashes with a name the generated code needs.
    #[error("Argument '{argument}' on endpoint '{endpoint}' uses reserved name '{reserved}'")]
    ReservedName {
        endpoint: String,
        argument: String,
        reserved: String,
    },

    /// An argument or return type is not a valid Rust type.
    #[error("Invalid type '{ty}' on endpoint '{endpoint}': {reason}")]
    InvalidType {
        endpoint: String,
        ty: String,
        reason: String,
    },

    /// Two generated items would get the same name.
    ///
    /// Happens when distinct endpoints map to the same call type (e.g.
    /// `chat.post_message` and `chat.postMessage`) or two setters on one
    /// call type collide.
    #[error("Naming collision: '{name}' is generated for both '{first}' and '{second}'")]
    NameCollision {
        name: String,
        first: String,
        second: String,
    },

    /// Invalid configuration.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Generated code failed to parse.
    #[error("Code generation failed for unit '{unit}': {message}")]
    CodeGenError { unit: String, message: String },

    /// Failed to write output file.
    #[error("Failed to write output file '{path}': {source}")]
    WriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
