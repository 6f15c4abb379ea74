//! methodgen code generator library.
//!
//! Reads an endpoint catalog (see `methodgen-define`) and generates typed
//! request builders that run on `methodgen-runtime`:
//!
//! - One service type per group, carrying the HTTP client and auth token
//! - One call type per endpoint, created from its service with the
//!   required arguments
//! - Fluent setters for optional arguments
//! - `values()`, serializing the arguments into form values
//! - `execute()`, posting the form and decoding the response envelope
//!
//! ## Modules
//!
//! - [`naming`] - PascalCase, snake_case and singular name derivation
//! - [`plan`] - Grouping of endpoints into services and output units
//! - [`validation`] - Catalog checks that run before generation
//! - [`codegen`] - Token generation for services and calls
//! - [`output`] - Rendering, formatting and writing of output files
//! - [`config`] - Generator configuration
//! - [`errors`] - Error types for the generator
//!
//! ## Example Usage
//!
//! ```no_run
//! use methodgen_define::Catalog;
//! use methodgen_gen::config::GeneratorConfig;
//! use methodgen_gen::output::{FsSink, generate_and_write};
//!
//! let catalog = Catalog::from_file("endpoints.json").unwrap();
//! let mut sink = FsSink::new("src/generated");
//! generate_and_write(&catalog, &GeneratorConfig::default(), &mut sink).unwrap();
//! ```
//!
//! ## Generated Code Structure
//!
//! For `chat.postMessage` with a required `channel` and an optional `text`:
//!
//! ```text
//! // services.rs
//! pub struct ChatService { client, token }
//!
//! // chat.rs
//! pub struct ChatPostMessageCall<'a> { service, channel, text }
//!
//! impl ChatService {
//!     pub fn post_message(&self, channel: impl Into<String>) -> ChatPostMessageCall<'_>;
//! }
//!
//! impl ChatPostMessageCall<'_> {
//!     pub fn text(self, text: impl Into<String>) -> Self;
//!     pub fn values(&self) -> Result<Values, MethodError>;
//!     pub async fn execute(&self, ctx: &Context) -> Result<Message, MethodError>;
//! }
//! ```

pub mod codegen;
pub mod config;
pub mod errors;
pub mod naming;
pub mod output;
pub mod plan;
pub mod validation;

pub use config::GeneratorConfig;
pub use errors::GeneratorError;
pub use output::{
    FsSink, GeneratedFile, GeneratedOutput, MemorySink, OutputSink, generate, generate_and_write,
};
