//! Optional output-shape descriptors forwarded to structured extraction calls.
//!
//! The descriptor is advisory: it is never validated locally and the service
//! is responsible for conforming to it.
//!
//! ```rust
//! use schemars::JsonSchema;
//! use sgclient::OutputSchema;
//!
//! #[derive(JsonSchema)]
//! #[allow(dead_code)]
//! struct WebsiteInfo {
//!     title: String,
//!     urls: Vec<String>,
//! }
//!
//! let schema = OutputSchema::from_type::<WebsiteInfo>();
//! assert_eq!(schema.name(), Some("WebsiteInfo"));
//! assert!(schema.to_value()["properties"]["urls"].is_object());
//! ```

use schemars::JsonSchema;
use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::JsonMap;

#[derive(Debug, Clone, PartialEq)]
pub enum OutputSchema {
    /// JSON Schema generated from a Rust type.
    Typed { name: String, schema: Value },
    /// Plain nested mapping of field names to type hints.
    Mapping(JsonMap),
}

impl OutputSchema {
    pub fn from_type<T: JsonSchema>() -> Self {
        let schema = schemars::schema_for!(T).to_value();
        Self::Typed {
            name: T::schema_name().into_owned(),
            schema,
        }
    }

    pub fn from_mapping(mapping: JsonMap) -> Self {
        Self::Mapping(mapping)
    }

    /// Builds a mapping descriptor from a JSON object, returning `None` for
    /// any other JSON value.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(mapping) => Some(Self::Mapping(mapping)),
            _ => None,
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Typed { name, .. } => Some(name.as_str()),
            Self::Mapping(_) => None,
        }
    }

    pub fn to_value(&self) -> Value {
        match self {
            Self::Typed { schema, .. } => schema.clone(),
            Self::Mapping(mapping) => Value::Object(mapping.clone()),
        }
    }
}

impl Serialize for OutputSchema {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Typed { schema, .. } => schema.serialize(serializer),
            Self::Mapping(mapping) => mapping.serialize(serializer),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn mapping_descriptor_serializes_as_the_mapping() {
        let schema = OutputSchema::from_value(json!({
            "user_info": {"type": "object", "properties": {"email": {"type": "string"}}}
        }))
        .expect("object should convert");

        assert_eq!(schema.name(), None);
        let rendered = serde_json::to_value(&schema).expect("schema should serialize");
        assert_eq!(rendered["user_info"]["properties"]["email"]["type"], "string");
    }

    #[test]
    fn typed_descriptor_carries_the_generated_schema() {
        #[derive(JsonSchema)]
        #[allow(dead_code)]
        struct Listing {
            title: String,
            price: Option<f64>,
        }

        let schema = OutputSchema::from_type::<Listing>();
        let rendered = schema.to_value();
        assert_eq!(schema.name(), Some("Listing"));
        assert_eq!(rendered["type"], "object");
        assert_eq!(rendered["properties"]["title"]["type"], "string");
    }

    #[test]
    fn non_object_values_are_not_descriptors() {
        assert!(OutputSchema::from_value(json!(["a", "b"])).is_none());
        assert!(OutputSchema::from_value(json!("schema")).is_none());
    }
}
