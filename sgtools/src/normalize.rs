//! Shapes raw service responses into tool output.

use serde_json::Value;
use sgclient::{ClientError, ClientResponse};
use sgtooling::{ToolError, ValidatedArgs};

use crate::OutputShape;

/// Applies `shape` to a successful response. Mode flags are read from the
/// validated arguments, which always carry their declared defaults.
pub fn normalize(
    shape: OutputShape,
    args: &ValidatedArgs,
    mut response: ClientResponse,
) -> Result<Value, ToolError> {
    match shape {
        OutputShape::ResultField => take_result(&mut response),
        OutputShape::Verbatim => Ok(Value::Object(response)),
        OutputShape::SearchMode { flag } if flag_on(args, flag) => take_result(&mut response),
        OutputShape::SearchMode { .. } => {
            let mut markdown = ClientResponse::new();
            markdown.insert(
                "markdown_content".to_string(),
                response
                    .remove("markdown_content")
                    .unwrap_or_else(|| Value::String(String::new())),
            );
            markdown.insert(
                "reference_urls".to_string(),
                response
                    .remove("reference_urls")
                    .unwrap_or_else(|| Value::Array(Vec::new())),
            );
            Ok(Value::Object(markdown))
        }
        OutputShape::ResultWhen { flag } if flag_on(args, flag) => take_result(&mut response),
        OutputShape::ResultWhen { .. } => Ok(Value::Object(response)),
    }
}

fn flag_on(args: &ValidatedArgs, flag: &str) -> bool {
    args.bool(flag).unwrap_or(false)
}

fn take_result(response: &mut ClientResponse) -> Result<Value, ToolError> {
    response.remove("result").ok_or_else(|| {
        ToolError::external(ClientError::malformed_response(
            "service response is missing the 'result' field",
        ))
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use sgclient::ClientErrorKind;
    use sgtooling::{FieldSpec, InputSchema, ToolErrorKind};

    use super::*;

    fn args(value: Value) -> ValidatedArgs {
        InputSchema::new()
            .field(FieldSpec::boolean("extraction_mode", "mode").with_default(true))
            .field(FieldSpec::boolean("ai_extraction", "extract").with_default(false))
            .validate(value.as_object().expect("object"))
            .expect("args should validate")
    }

    fn response(value: Value) -> ClientResponse {
        value.as_object().cloned().expect("object")
    }

    #[test]
    fn result_field_is_returned_unchanged() {
        let output = normalize(
            OutputShape::ResultField,
            &args(json!({})),
            response(json!({"request_id": "r", "result": {"main_heading": "Test"}})),
        )
        .expect("result should be extracted");

        assert_eq!(output, json!({"main_heading": "Test"}));
    }

    #[test]
    fn missing_result_is_a_malformed_response() {
        let error = normalize(
            OutputShape::ResultField,
            &args(json!({})),
            response(json!({"status": "completed"})),
        )
        .expect_err("result is missing");

        assert_eq!(error.kind, ToolErrorKind::External);
        assert_eq!(
            error.client_error().map(|inner| inner.kind),
            Some(ClientErrorKind::MalformedResponse)
        );
    }

    #[test]
    fn search_markdown_mode_keeps_exactly_two_keys() {
        let output = normalize(
            OutputShape::SearchMode {
                flag: "extraction_mode",
            },
            &args(json!({"extraction_mode": false})),
            response(json!({
                "request_id": "r",
                "markdown_content": "# Product",
                "reference_urls": ["https://example.com"],
            })),
        )
        .expect("markdown should be shaped");

        let keys = output
            .as_object()
            .expect("object")
            .keys()
            .cloned()
            .collect::<Vec<_>>();
        assert_eq!(keys, vec!["markdown_content", "reference_urls"]);
    }

    #[test]
    fn search_markdown_mode_fills_missing_fields() {
        let output = normalize(
            OutputShape::SearchMode {
                flag: "extraction_mode",
            },
            &args(json!({"extraction_mode": false})),
            response(json!({})),
        )
        .expect("markdown should be shaped");

        assert_eq!(output, json!({"markdown_content": "", "reference_urls": []}));
    }

    #[test]
    fn result_when_flag_is_off_returns_whole_response() {
        let body = json!({"status": "completed", "result": null});
        let output = normalize(
            OutputShape::ResultWhen {
                flag: "ai_extraction",
            },
            &args(json!({})),
            response(body.clone()),
        )
        .expect("whole response");

        assert_eq!(output, body);
    }
}
