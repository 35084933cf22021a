//! JSON argument parsing helpers for tool calls.
//!
//! ```rust
//! use sgtooling::parse_json_object;
//!
//! let args = parse_json_object(r#"{"website_url":"https://example.com"}"#)
//!     .expect("object should parse");
//! assert_eq!(args["website_url"], "https://example.com");
//!
//! assert!(parse_json_object("   ").expect("blank is empty").is_empty());
//! ```

use serde_json::{Map, Value};

use crate::ToolError;

pub fn parse_json_value(args_json: &str) -> Result<Value, ToolError> {
    serde_json::from_str(args_json)
        .map_err(|err| ToolError::invalid_arguments(format!("invalid JSON arguments: {err}")))
}

/// Parses tool-call arguments into an object. Blank input means no arguments.
pub fn parse_json_object(args_json: &str) -> Result<Map<String, Value>, ToolError> {
    if args_json.trim().is_empty() {
        return Ok(Map::new());
    }

    match parse_json_value(args_json)? {
        Value::Object(map) => Ok(map),
        Value::Null => Ok(Map::new()),
        _ => Err(ToolError::invalid_arguments("expected JSON object arguments")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ToolErrorKind;

    #[test]
    fn parse_invalid_json_returns_invalid_arguments() {
        let error = parse_json_value("{").expect_err("json should fail");
        assert_eq!(error.kind, ToolErrorKind::InvalidArguments);
    }

    #[test]
    fn non_object_arguments_are_rejected() {
        let error = parse_json_object("[1, 2]").expect_err("array should fail");
        assert_eq!(error.kind, ToolErrorKind::InvalidArguments);
    }

    #[test]
    fn null_and_blank_arguments_are_empty_objects() {
        assert!(parse_json_object("null").expect("null parses").is_empty());
        assert!(parse_json_object("").expect("blank parses").is_empty());
    }
}
