//! Methodgen Definition Library
//!
//! This crate provides the declarative catalog that drives `methodgen-gen`.
//! A catalog is an ordered list of remote procedure endpoints, each named
//! `namespace.method` (e.g. `chat.postMessage`), with typed arguments and an
//! optional payload type for the decoded response.
//!
//! ## Core Types
//!
//! - [`Catalog`] - The full set of endpoints, loaded from JSON
//! - [`Endpoint`] - A single remote procedure definition
//! - [`Argument`] - One named, typed parameter of an endpoint
//! - [`ArgType`] - The argument type classification that drives encoding
//!
//! ## Examples
//!
//! ```
//! use methodgen_define::{ArgType, Catalog};
//!
//! let catalog = Catalog::from_json(r#"[
//!     {
//!         "name": "chat.postMessage",
//!         "json": "message",
//!         "return": "crate::objects::Message",
//!         "args": [
//!             { "name": "channel", "type": "string", "required": true },
//!             { "name": "text", "type": "string" }
//!         ]
//!     }
//! ]"#).unwrap();
//!
//! let endpoint = &catalog.endpoints[0];
//! assert_eq!(endpoint.namespace(), Some("chat"));
//! assert_eq!(endpoint.method_name(), Some("postMessage"));
//! assert_eq!(endpoint.arguments[0].ty, ArgType::Text);
//! ```

pub mod catalog;
pub mod types;

pub use catalog::{Catalog, CatalogError};
pub use types::{ArgType, Argument, Endpoint};
