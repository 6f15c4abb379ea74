//! Core types for endpoint catalogs.
//!
//! - [`Endpoint`] - One remote procedure definition
//! - [`Argument`] - One parameter of an endpoint
//! - [`ArgType`] - How an argument is stored, tested for emptiness and encoded

use std::fmt;

use serde::{Deserialize, Serialize};

/// One remote procedure definition.
///
/// The JSON keys follow the catalog format consumed by the generator:
/// `json` names the response field holding the payload and `return` names
/// the payload type.
///
/// ## Examples
///
/// ```
/// use methodgen_define::Endpoint;
///
/// let endpoint: Endpoint = serde_json::from_str(
///     r#"{ "name": "users.profile.get", "return": "crate::objects::UserProfile", "json": "profile" }"#,
/// ).unwrap();
///
/// assert_eq!(endpoint.namespace(), Some("users.profile"));
/// assert_eq!(endpoint.method_name(), Some("get"));
/// assert_eq!(endpoint.output_unit().as_deref(), Some("users_profile"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Endpoint {
    /// Dotted endpoint name, e.g. `chat.postMessage`.
    ///
    /// This is also the path the generated code posts to.
    pub name: String,

    /// Service group. Empty means "derive from the namespace".
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub group: String,

    /// Envelope field holding the payload (e.g. `channel`).
    ///
    /// Empty means the payload, if any, is decoded from the envelope itself.
    #[serde(
        default,
        rename = "json",
        alias = "response_field",
        skip_serializing_if = "String::is_empty"
    )]
    pub response_field: String,

    /// Arguments in catalog order.
    #[serde(
        default,
        rename = "args",
        alias = "arguments",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub arguments: Vec<Argument>,

    /// Rust type of the decoded payload. Empty means success/failure only.
    #[serde(
        default,
        rename = "return",
        alias = "return_type",
        skip_serializing_if = "String::is_empty"
    )]
    pub return_type: String,

    /// Omit the implicit auth token parameter.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub skip_token: bool,
}

impl Endpoint {
    /// Returns the part of the name before the last dot.
    ///
    /// `None` if the name has no separator.
    pub fn namespace(&self) -> Option<&str> {
        self.name.rsplit_once('.').map(|(namespace, _)| namespace)
    }

    /// Returns the part of the name after the last dot.
    pub fn method_name(&self) -> Option<&str> {
        self.name.rsplit_once('.').map(|(_, method)| method)
    }

    /// Returns the output unit the endpoint is co-located in: the namespace
    /// with dots replaced by underscores.
    pub fn output_unit(&self) -> Option<String> {
        self.namespace().map(|namespace| namespace.replace('.', "_"))
    }

    /// Returns true if the endpoint declares a payload type.
    pub fn has_return(&self) -> bool {
        !self.return_type.is_empty()
    }
}

/// One parameter of an [`Endpoint`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Argument {
    /// Argument name; also the generated field name.
    pub name: String,

    /// Declared type.
    #[serde(rename = "type")]
    pub ty: ArgType,

    /// Whether the constructor takes this argument.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub required: bool,

    /// Remote default value, for documentation only.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub default: String,

    /// Serialized parameter key. Empty means `name`.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub query_name: String,

    /// Free-form documentation.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub comment: String,

    /// Singular form used for the list append setter, overriding the
    /// suffix-stripping heuristic.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub singular: Option<String>,
}

impl Argument {
    /// Creates an optional argument with no overrides.
    pub fn new(name: impl Into<String>, ty: ArgType) -> Self {
        Self {
            name: name.into(),
            ty,
            required: false,
            default: String::new(),
            query_name: String::new(),
            comment: String::new(),
            singular: None,
        }
    }

    /// Creates a required argument with no overrides.
    pub fn required(name: impl Into<String>, ty: ArgType) -> Self {
        Self {
            required: true,
            ..Self::new(name, ty)
        }
    }

    /// Returns the key the argument is serialized under.
    pub fn query_key(&self) -> &str {
        if self.query_name.is_empty() {
            &self.name
        } else {
            &self.query_name
        }
    }
}

/// Argument type classification.
///
/// Parsed from the catalog `type` string:
///
/// | Catalog string | Variant |
/// |---|---|
/// | `string` | [`ArgType::Text`] |
/// | `bool` | [`ArgType::Boolean`] |
/// | `int` | [`ArgType::Integer`] |
/// | `Vec<X>` | [`ArgType::List`] with element `X` |
/// | anything else | [`ArgType::Object`] |
///
/// ## Examples
///
/// ```
/// use methodgen_define::ArgType;
///
/// assert_eq!(ArgType::from("bool"), ArgType::Boolean);
/// assert_eq!(
///     ArgType::from("Vec<crate::objects::Attachment>"),
///     ArgType::List("crate::objects::Attachment".to_string())
/// );
/// assert_eq!(ArgType::List("Block".to_string()).to_string(), "Vec<Block>");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ArgType {
    Text,
    Boolean,
    Integer,
    /// A list of the given element type.
    List(String),
    /// An opaque, encodable object type.
    Object(String),
}

impl ArgType {
    /// Returns true for [`ArgType::List`].
    pub fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }
}

impl From<&str> for ArgType {
    fn from(value: &str) -> Self {
        let value = value.trim();
        match value {
            "string" => Self::Text,
            "bool" => Self::Boolean,
            "int" => Self::Integer,
            _ => match value
                .strip_prefix("Vec<")
                .and_then(|rest| rest.strip_suffix('>'))
            {
                Some(element) => Self::List(element.trim().to_string()),
                None => Self::Object(value.to_string()),
            },
        }
    }
}

impl From<String> for ArgType {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<ArgType> for String {
    fn from(value: ArgType) -> Self {
        value.to_string()
    }
}

impl fmt::Display for ArgType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => f.write_str("string"),
            Self::Boolean => f.write_str("bool"),
            Self::Integer => f.write_str("int"),
            Self::List(element) => write!(f, "Vec<{element}>"),
            Self::Object(path) => f.write_str(path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_name_parts() {
        let endpoint = Endpoint {
            name: "chat.postMessage".to_string(),
            ..Default::default()
        };
        assert_eq!(endpoint.namespace(), Some("chat"));
        assert_eq!(endpoint.method_name(), Some("postMessage"));
        assert_eq!(endpoint.output_unit().as_deref(), Some("chat"));
    }

    #[test]
    fn endpoint_nested_namespace_uses_last_dot() {
        let endpoint = Endpoint {
            name: "users.profile.set".to_string(),
            ..Default::default()
        };
        assert_eq!(endpoint.namespace(), Some("users.profile"));
        assert_eq!(endpoint.method_name(), Some("set"));
        assert_eq!(endpoint.output_unit().as_deref(), Some("users_profile"));
    }

    #[test]
    fn endpoint_without_separator_has_no_parts() {
        let endpoint = Endpoint {
            name: "ping".to_string(),
            ..Default::default()
        };
        assert_eq!(endpoint.namespace(), None);
        assert_eq!(endpoint.method_name(), None);
        assert_eq!(endpoint.output_unit(), None);
    }

    #[test]
    fn arg_type_parses_scalars() {
        assert_eq!(ArgType::from("string"), ArgType::Text);
        assert_eq!(ArgType::from("bool"), ArgType::Boolean);
        assert_eq!(ArgType::from("int"), ArgType::Integer);
    }

    #[test]
    fn arg_type_parses_lists_and_objects() {
        assert_eq!(
            ArgType::from("Vec< Block >"),
            ArgType::List("Block".to_string())
        );
        assert_eq!(
            ArgType::from("crate::objects::Dialog"),
            ArgType::Object("crate::objects::Dialog".to_string())
        );
        assert!(ArgType::from("Vec<String>").is_list());
        assert!(!ArgType::from("String").is_list());
    }

    #[test]
    fn arg_type_display_round_trips_catalog_strings() {
        for raw in ["string", "bool", "int", "Vec<Block>", "objects::Dialog"] {
            assert_eq!(ArgType::from(raw).to_string(), raw);
        }
    }

    #[test]
    fn argument_query_key_defaults_to_name() {
        let mut arg = Argument::new("markdown", ArgType::Boolean);
        assert_eq!(arg.query_key(), "markdown");

        arg.query_name = "mrkdwn".to_string();
        assert_eq!(arg.query_key(), "mrkdwn");
    }

    #[test]
    fn argument_deserializes_with_defaults() {
        let arg: Argument = serde_json::from_str(r#"{ "name": "count", "type": "int" }"#).unwrap();
        assert_eq!(arg, Argument::new("count", ArgType::Integer));
    }

    #[test]
    fn endpoint_accepts_long_form_keys() {
        let endpoint: Endpoint = serde_json::from_str(
            r#"{
                "name": "channels.info",
                "response_field": "channel",
                "return_type": "Channel",
                "arguments": [{ "name": "channel", "type": "string", "required": true }]
            }"#,
        )
        .unwrap();

        assert_eq!(endpoint.response_field, "channel");
        assert_eq!(endpoint.return_type, "Channel");
        assert_eq!(endpoint.arguments.len(), 1);
        assert!(endpoint.arguments[0].required);
    }
}
