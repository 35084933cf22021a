//! The generic tool adapter: one type drives every catalog entry.
//!
//! An invocation validates the arguments against the descriptor schema,
//! builds the typed request, performs exactly one client call and shapes the
//! response. Validation failures never reach the client.
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use serde_json::json;
//! use sgclient::testing::InMemoryScrapeClient;
//! use sgtools::{ScrapeGraphTool, ScrapeToolConfig, ToolKind};
//!
//! let config = ScrapeToolConfig::new()
//!     .with_api_key("sgai-example")
//!     .with_client(Arc::new(InMemoryScrapeClient::new()));
//! let tool = ScrapeGraphTool::new(ToolKind::GetCredits, config).expect("tool should build");
//!
//! let credits = tool.call(json!({})).expect("credits should load");
//! assert_eq!(credits["remaining_credits"], 50);
//! ```

use std::sync::Arc;

use serde_json::{Map, Value};
use sgclient::OutputSchema;
use sgtooling::{Tool, ToolDefinition, ToolError, ToolExecutionContext, ToolFuture};

use crate::{
    ResolvedToolConfig, ScrapeToolConfig, ToolDescriptor, ToolKind, build_request, normalize,
};

#[derive(Debug, Clone)]
pub struct ScrapeGraphTool {
    descriptor: &'static ToolDescriptor,
    config: Arc<ResolvedToolConfig>,
    output_schema: Option<OutputSchema>,
}

impl ScrapeGraphTool {
    /// Resolves `config` and binds the result to `kind`.
    pub fn new(kind: ToolKind, config: ScrapeToolConfig) -> Result<Self, ToolError> {
        Self::from_resolved(kind, config.resolve()?.into_shared())
    }

    /// Binds an already resolved configuration. Fails when an output schema
    /// is configured for a tool that cannot use one.
    pub fn from_resolved(
        kind: ToolKind,
        config: Arc<ResolvedToolConfig>,
    ) -> Result<Self, ToolError> {
        if config.output_schema().is_some() && !kind.supports_output_schema() {
            return Err(ToolError::configuration(format!(
                "tool '{kind}' does not accept an output schema"
            ))
            .with_tool_name(kind.name()));
        }

        Ok(Self::bind(kind, config))
    }

    /// Binds a shared configuration, forwarding its output schema only when
    /// `kind` supports one.
    pub fn bind(kind: ToolKind, config: Arc<ResolvedToolConfig>) -> Self {
        let output_schema = config
            .output_schema()
            .filter(|_| kind.supports_output_schema())
            .cloned();

        Self {
            descriptor: kind.descriptor(),
            config,
            output_schema,
        }
    }

    pub fn kind(&self) -> ToolKind {
        self.descriptor.kind
    }

    pub fn descriptor(&self) -> &'static ToolDescriptor {
        self.descriptor
    }

    pub fn output_schema(&self) -> Option<&OutputSchema> {
        self.output_schema.as_ref()
    }

    pub fn config(&self) -> &Arc<ResolvedToolConfig> {
        &self.config
    }

    /// Synchronous invocation with arbitrary JSON arguments.
    pub fn call(&self, args: Value) -> Result<Value, ToolError> {
        match args {
            Value::Object(args) => self.run(&args),
            Value::Null => self.run(&Map::new()),
            _ => Err(ToolError::invalid_arguments("expected JSON object arguments")
                .with_tool_name(self.descriptor.name)),
        }
    }

    /// Asynchronous counterpart of [`ScrapeGraphTool::call`]. Runs the same
    /// blocking path and surfaces the same errors.
    pub async fn call_async(&self, args: Value) -> Result<Value, ToolError> {
        self.call(args)
    }

    fn execute(&self, args: &Map<String, Value>) -> Result<Value, ToolError> {
        let descriptor = self.descriptor;
        let validated = descriptor.input_schema.validate(args)?;
        let request = build_request(descriptor.kind, &validated, self.output_schema.as_ref())?;
        let operation = request.operation();

        tracing::debug!(
            tool = descriptor.name,
            operation = operation.as_str(),
            output_schema = request.output_schema().is_some(),
            "dispatching tool call"
        );

        let response = self.config.client().execute(request).map_err(|error| {
            tracing::debug!(
                tool = descriptor.name,
                operation = operation.as_str(),
                error_kind = ?error.kind,
                "service call failed"
            );
            ToolError::external(error)
        })?;

        let output = normalize(descriptor.output, &validated, response)?;
        tracing::debug!(tool = descriptor.name, "tool call completed");
        Ok(output)
    }
}

impl Tool for ScrapeGraphTool {
    fn definition(&self) -> ToolDefinition {
        self.descriptor.definition()
    }

    fn run(&self, args: &Map<String, Value>) -> Result<Value, ToolError> {
        self.execute(args)
            .map_err(|error| error.with_tool_name(self.descriptor.name))
    }

    fn invoke<'a>(
        &'a self,
        args: &'a Map<String, Value>,
        context: &'a ToolExecutionContext,
    ) -> ToolFuture<'a, Result<Value, ToolError>> {
        Box::pin(async move {
            tracing::debug!(
                tool = self.descriptor.name,
                session_id = %context.session_id,
                "invoking tool asynchronously"
            );
            self.run(args)
        })
    }
}
