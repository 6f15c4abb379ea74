//! The standard response wrapper.

use serde::Deserialize;

/// The `{"ok": bool, "error": string}` wrapper every response carries.
///
/// Generated code flattens this into a per-endpoint response struct that
/// adds the payload field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ResponseEnvelope {
    pub ok: bool,

    #[serde(default)]
    pub error: String,

    #[serde(default)]
    pub warning: Option<String>,
}
