//! Runtime support for clients generated by `methodgen-gen`.
//!
//! Generated call objects serialize their arguments into [`Values`], post
//! them form-encoded through an [`HttpClient`] and decode the standard
//! [`ResponseEnvelope`]. Everything a generated file refers to lives here,
//! so a generated crate only needs this one dependency.
//!
//! ## Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use methodgen_runtime::{Context, HttpClient};
//!
//! let http = Arc::new(HttpClient::new("https://slack.com/api/")?);
//! // services are constructed by the hand-written client of the generated crate
//! let message = client
//!     .chat()
//!     .post_message("C1")
//!     .text("hi")
//!     .execute(&Context::background())
//!     .await?;
//! ```

pub mod client;
pub mod context;
pub mod encode;
pub mod envelope;
pub mod error;
pub mod values;

pub use client::{HttpClient, HttpClientBuilder};
pub use context::Context;
pub use encode::Encode;
pub use envelope::ResponseEnvelope;
pub use error::{EncodeError, MethodError, TransportError};
pub use values::Values;

// Generated response structs derive through this path.
pub use serde;
