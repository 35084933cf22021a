//! Declarative input schemas and argument validation.
//!
//! An [`InputSchema`] lists the named fields a tool accepts. Validation is
//! strict about types, applies declared defaults, and ignores fields the
//! schema does not mention.
//!
//! ```rust
//! use serde_json::json;
//! use sgtooling::{FieldSpec, InputSchema};
//!
//! let schema = InputSchema::new()
//!     .field(FieldSpec::string("request_id", "Request to rate").required())
//!     .field(FieldSpec::integer("rating", "Score").required().with_range(1, 5));
//!
//! let args = json!({"request_id": "req-1", "rating": 5});
//! let validated = schema
//!     .validate(args.as_object().expect("object"))
//!     .expect("arguments should validate");
//! assert_eq!(validated.integer("rating"), Some(5));
//!
//! let args = json!({"request_id": "req-1", "rating": 6});
//! assert!(schema.validate(args.as_object().expect("object")).is_err());
//! ```

use std::collections::BTreeMap;

use serde_json::{Map, Number, Value, json};

use crate::ToolError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    String,
    Boolean,
    Integer { min: Option<i64>, max: Option<i64> },
    Object,
    StringList { min_items: usize },
    StringMap,
}

impl FieldKind {
    fn json_type(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Boolean => "boolean",
            Self::Integer { .. } => "integer",
            Self::Object | Self::StringMap => "object",
            Self::StringList { .. } => "array",
        }
    }

    fn describe(self) -> &'static str {
        match self {
            Self::String => "a string",
            Self::Boolean => "a boolean",
            Self::Integer { .. } => "an integer",
            Self::Object => "an object",
            Self::StringList { .. } => "a list of strings",
            Self::StringMap => "an object of string values",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub default: Option<Value>,
}

impl FieldSpec {
    pub fn new(name: &'static str, description: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            description,
            kind,
            required: false,
            default: None,
        }
    }

    pub fn string(name: &'static str, description: &'static str) -> Self {
        Self::new(name, description, FieldKind::String)
    }

    pub fn boolean(name: &'static str, description: &'static str) -> Self {
        Self::new(name, description, FieldKind::Boolean)
    }

    pub fn integer(name: &'static str, description: &'static str) -> Self {
        Self::new(
            name,
            description,
            FieldKind::Integer {
                min: None,
                max: None,
            },
        )
    }

    pub fn object(name: &'static str, description: &'static str) -> Self {
        Self::new(name, description, FieldKind::Object)
    }

    pub fn string_list(name: &'static str, description: &'static str) -> Self {
        Self::new(name, description, FieldKind::StringList { min_items: 0 })
    }

    pub fn string_map(name: &'static str, description: &'static str) -> Self {
        Self::new(name, description, FieldKind::StringMap)
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// Inclusive bounds. Only meaningful for integer fields.
    pub fn with_range(mut self, min: i64, max: i64) -> Self {
        if let FieldKind::Integer { .. } = self.kind {
            self.kind = FieldKind::Integer {
                min: Some(min),
                max: Some(max),
            };
        }
        self
    }

    pub fn with_min(mut self, min: i64) -> Self {
        if let FieldKind::Integer { max, .. } = self.kind {
            self.kind = FieldKind::Integer {
                min: Some(min),
                max,
            };
        }
        self
    }

    /// Requires at least one item. Only meaningful for list fields.
    pub fn non_empty(mut self) -> Self {
        if let FieldKind::StringList { .. } = self.kind {
            self.kind = FieldKind::StringList { min_items: 1 };
        }
        self
    }

    fn check(&self, value: &Value) -> Result<(), ToolError> {
        let name = self.name;
        let mismatch = || {
            ToolError::invalid_arguments(format!(
                "field '{name}' must be {}",
                self.kind.describe()
            ))
        };

        match self.kind {
            FieldKind::String => {
                value.as_str().ok_or_else(mismatch)?;
            }
            FieldKind::Boolean => {
                value.as_bool().ok_or_else(mismatch)?;
            }
            FieldKind::Integer { min, max } => {
                let number = match value {
                    Value::Number(number) => number,
                    _ => return Err(mismatch()),
                };
                let integer = integer_value(number).ok_or_else(mismatch)?;
                check_range(name, integer, min, max)?;
            }
            FieldKind::Object => {
                value.as_object().ok_or_else(mismatch)?;
            }
            FieldKind::StringList { min_items } => {
                let items = value.as_array().ok_or_else(mismatch)?;
                if !items.iter().all(Value::is_string) {
                    return Err(mismatch());
                }
                if items.len() < min_items {
                    return Err(ToolError::invalid_arguments(format!(
                        "field '{name}' must contain at least {min_items} item(s)"
                    )));
                }
            }
            FieldKind::StringMap => {
                let entries = value.as_object().ok_or_else(mismatch)?;
                if !entries.values().all(Value::is_string) {
                    return Err(mismatch());
                }
            }
        }

        Ok(())
    }

    fn json_schema(&self) -> Value {
        let mut property = Map::new();
        property.insert("type".to_string(), self.kind.json_type().into());
        property.insert("description".to_string(), self.description.into());

        match self.kind {
            FieldKind::Integer { min, max } => {
                if let Some(min) = min {
                    property.insert("minimum".to_string(), min.into());
                }
                if let Some(max) = max {
                    property.insert("maximum".to_string(), max.into());
                }
            }
            FieldKind::StringList { min_items } => {
                property.insert("items".to_string(), json!({"type": "string"}));
                if min_items > 0 {
                    property.insert("minItems".to_string(), min_items.into());
                }
            }
            FieldKind::StringMap => {
                property.insert(
                    "additionalProperties".to_string(),
                    json!({"type": "string"}),
                );
            }
            _ => {}
        }

        if let Some(default) = &self.default {
            property.insert("default".to_string(), default.clone());
        }

        Value::Object(property)
    }
}

fn integer_value(number: &Number) -> Option<i64> {
    if number.is_f64() {
        return None;
    }
    // u64 values beyond i64 saturate so the range check reports them.
    number.as_i64().or_else(|| number.as_u64().map(|_| i64::MAX))
}

fn check_range(name: &str, value: i64, min: Option<i64>, max: Option<i64>) -> Result<(), ToolError> {
    let message = match (min, max) {
        (Some(min), Some(max)) if value < min || value > max => {
            format!("field '{name}' must be between {min} and {max} inclusive, got {value}")
        }
        (Some(min), None) if value < min => {
            format!("field '{name}' must be at least {min}, got {value}")
        }
        (None, Some(max)) if value > max => {
            format!("field '{name}' must be at most {max}, got {value}")
        }
        _ => return Ok(()),
    };
    Err(ToolError::invalid_arguments(message))
}

/// A field that becomes required when a boolean flag is `true`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConditionalRequirement {
    pub field: &'static str,
    pub when_true: &'static str,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputSchema {
    fields: Vec<FieldSpec>,
    conditionals: Vec<ConditionalRequirement>,
}

impl InputSchema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, field: FieldSpec) -> Self {
        self.fields.push(field);
        self
    }

    pub fn require_when(mut self, field: &'static str, when_true: &'static str) -> Self {
        self.conditionals
            .push(ConditionalRequirement { field, when_true });
        self
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    pub fn get(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|field| field.name == name)
    }

    pub fn required_fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields
            .iter()
            .filter(|field| field.required)
            .map(|field| field.name)
    }

    /// Checks `args` against every declared field, in declaration order, and
    /// returns the accepted values with defaults filled in.
    pub fn validate(&self, args: &Map<String, Value>) -> Result<ValidatedArgs, ToolError> {
        let mut accepted = Map::new();

        for field in &self.fields {
            match args.get(field.name).filter(|value| !value.is_null()) {
                Some(value) => {
                    field.check(value)?;
                    accepted.insert(field.name.to_string(), value.clone());
                }
                None if field.required => {
                    return Err(ToolError::invalid_arguments(format!(
                        "missing required field '{}'",
                        field.name
                    )));
                }
                None => {
                    if let Some(default) = &field.default {
                        accepted.insert(field.name.to_string(), default.clone());
                    }
                }
            }
        }

        for conditional in &self.conditionals {
            let active = accepted
                .get(conditional.when_true)
                .and_then(Value::as_bool)
                .unwrap_or(false);
            let present = accepted
                .get(conditional.field)
                .is_some_and(|value| value.as_str().is_none_or(|text| !text.trim().is_empty()));

            if active && !present {
                return Err(ToolError::invalid_arguments(format!(
                    "field '{}' is required when '{}' is true",
                    conditional.field, conditional.when_true
                )));
            }
        }

        Ok(ValidatedArgs(accepted))
    }

    /// Renders the schema as a JSON Schema object document.
    pub fn to_json_schema(&self) -> Value {
        let properties = self
            .fields
            .iter()
            .map(|field| (field.name.to_string(), field.json_schema()))
            .collect::<Map<_, _>>();
        let required = self.required_fields().collect::<Vec<_>>();

        let mut schema = json!({
            "type": "object",
            "properties": properties,
            "required": required,
        });

        if !self.conditionals.is_empty() {
            let rules = self
                .conditionals
                .iter()
                .map(|conditional| {
                    json!({
                        "if": {
                            "properties": { conditional.when_true: { "const": true } },
                            "required": [conditional.when_true],
                        },
                        "then": { "required": [conditional.field] },
                    })
                })
                .collect::<Vec<_>>();
            schema["allOf"] = Value::Array(rules);
        }

        schema
    }
}

/// Arguments that passed validation, with declared defaults applied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidatedArgs(Map<String, Value>);

impl ValidatedArgs {
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Value::as_str)
    }

    pub fn string(&self, name: &str) -> Option<String> {
        self.str(name).map(ToString::to_string)
    }

    /// Like [`ValidatedArgs::string`] but reports absence as invalid arguments.
    pub fn required_string(&self, name: &str) -> Result<String, ToolError> {
        self.string(name).ok_or_else(|| {
            ToolError::invalid_arguments(format!("missing required field '{name}'"))
        })
    }

    pub fn bool(&self, name: &str) -> Option<bool> {
        self.get(name).and_then(Value::as_bool)
    }

    pub fn integer(&self, name: &str) -> Option<i64> {
        self.get(name).and_then(Value::as_i64)
    }

    /// Integer narrowed to `u32`; values out of range are reported.
    pub fn u32(&self, name: &str) -> Result<Option<u32>, ToolError> {
        self.integer(name)
            .map(|value| {
                u32::try_from(value).map_err(|_| {
                    ToolError::invalid_arguments(format!(
                        "field '{name}' must fit in an unsigned 32-bit integer"
                    ))
                })
            })
            .transpose()
    }

    pub fn object(&self, name: &str) -> Option<&Map<String, Value>> {
        self.get(name).and_then(Value::as_object)
    }

    pub fn string_list(&self, name: &str) -> Option<Vec<String>> {
        self.get(name).and_then(Value::as_array).map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(ToString::to_string)
                .collect()
        })
    }

    pub fn string_map(&self, name: &str) -> Option<BTreeMap<String, String>> {
        self.object(name).map(|entries| {
            entries
                .iter()
                .filter_map(|(key, value)| value.as_str().map(|text| (key.clone(), text.to_string())))
                .collect()
        })
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}
