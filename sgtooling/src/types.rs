//! Tool definitions, calls, execution context and results.

use std::collections::BTreeMap;

use serde_json::Value;

/// Metadata an agent framework uses to advertise a tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    /// JSON Schema document describing accepted arguments, as text.
    pub input_schema: String,
    /// Whether the tool output should be handed straight back to the caller.
    pub return_direct: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCall {
    pub id: String,
    pub name: String,
    pub arguments: String,
}

impl ToolCall {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        arguments: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            arguments: arguments.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolExecutionContext {
    pub session_id: String,
    pub trace_id: Option<String>,
    pub metadata: BTreeMap<String, String>,
}

impl ToolExecutionContext {
    pub fn new(session_id: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
            trace_id: None,
            metadata: BTreeMap::new(),
        }
    }

    pub fn with_trace_id(mut self, trace_id: impl Into<String>) -> Self {
        self.trace_id = Some(trace_id.into());
        self
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolExecutionResult {
    pub tool_call_id: String,
    pub tool_name: String,
    pub output: Value,
}

impl ToolExecutionResult {
    pub fn new(tool_call_id: impl Into<String>, tool_name: impl Into<String>, output: Value) -> Self {
        Self {
            tool_call_id: tool_call_id.into(),
            tool_name: tool_name.into(),
            output,
        }
    }

    pub fn from_call(call: &ToolCall, output: Value) -> Self {
        Self::new(call.id.clone(), call.name.clone(), output)
    }

    /// Renders the output for message-based transcripts. Strings are returned
    /// verbatim, everything else as compact JSON.
    pub fn output_text(&self) -> String {
        match &self.output {
            Value::String(text) => text.clone(),
            other => other.to_string(),
        }
    }
}
