//! Encoding of list and object arguments.

use serde::Serialize;

use crate::error::EncodeError;

/// Encodes a composite argument into its form-parameter string.
///
/// Every serializable type encodes as compact JSON, which is how the remote
/// service expects attachments, blocks and similar structured parameters.
///
/// ## Examples
///
/// ```
/// use methodgen_runtime::Encode;
///
/// let ids = vec!["U1", "U2"];
/// assert_eq!(ids.encode().unwrap(), r#"["U1","U2"]"#);
/// ```
pub trait Encode {
    /// ## Errors
    ///
    /// Returns `EncodeError` if the value cannot be represented as JSON
    /// (e.g. a map with non-string keys).
    fn encode(&self) -> Result<String, EncodeError>;
}

impl<T: Serialize + ?Sized> Encode for T {
    fn encode(&self) -> Result<String, EncodeError> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[derive(Serialize)]
    struct Attachment {
        text: String,
    }

    #[test]
    fn encodes_list_as_json_array() {
        let list = vec![
            Attachment {
                text: "a".to_string(),
            },
            Attachment {
                text: "b".to_string(),
            },
        ];
        assert_eq!(list.encode().unwrap(), r#"[{"text":"a"},{"text":"b"}]"#);
    }

    #[test]
    fn encodes_object_as_json_object() {
        let object = Attachment {
            text: "hi".to_string(),
        };
        assert_eq!(object.encode().unwrap(), r#"{"text":"hi"}"#);
    }

    #[test]
    fn non_string_map_keys_fail() {
        let mut map = HashMap::new();
        map.insert(vec![1u8], 1u8);
        assert!(map.encode().is_err());
    }
}
