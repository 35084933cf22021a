//! Tracing-based observability hooks for service calls and tool executions.
//!
//! ```rust
//! use sgobserve::TracingObservabilityHooks;
//! use sgtooling::ToolRuntimeHooks;
//!
//! fn accepts_tool_hooks(_hooks: &dyn ToolRuntimeHooks) {}
//!
//! let hooks = TracingObservabilityHooks;
//! accepts_tool_hooks(&hooks);
//! ```

use std::time::Duration;

use sgclient::{ClientCallHooks, ClientError, Operation};
use sgtooling::{
    ToolCall, ToolError, ToolExecutionContext, ToolExecutionResult, ToolRuntimeHooks,
};

#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObservabilityHooks;

impl ClientCallHooks for TracingObservabilityHooks {
    fn on_call_start(&self, operation: Operation) {
        tracing::info!(
            phase = "client",
            event = "call_start",
            operation = operation.as_str()
        );
    }

    fn on_call_success(&self, operation: Operation, elapsed: Duration) {
        tracing::info!(
            phase = "client",
            event = "call_success",
            operation = operation.as_str(),
            elapsed_ms = elapsed.as_millis() as u64
        );
    }

    fn on_call_failure(&self, operation: Operation, error: &ClientError, elapsed: Duration) {
        tracing::error!(
            phase = "client",
            event = "call_failure",
            operation = operation.as_str(),
            elapsed_ms = elapsed.as_millis() as u64,
            error_kind = ?error.kind,
            status = error.status,
            retryable = error.retryable,
            error = %error
        );
    }
}

impl ToolRuntimeHooks for TracingObservabilityHooks {
    fn on_execution_start(&self, tool_call: &ToolCall, context: &ToolExecutionContext) {
        tracing::info!(
            phase = "tool",
            event = "execution_start",
            tool_name = %tool_call.name,
            tool_call_id = %tool_call.id,
            argument_bytes = tool_call.arguments.len(),
            session_id = %context.session_id,
            trace_id = context.trace_id.as_deref()
        );
    }

    fn on_execution_success(
        &self,
        tool_call: &ToolCall,
        context: &ToolExecutionContext,
        result: &ToolExecutionResult,
        elapsed: Duration,
    ) {
        tracing::info!(
            phase = "tool",
            event = "execution_success",
            tool_name = %tool_call.name,
            tool_call_id = %tool_call.id,
            session_id = %context.session_id,
            trace_id = context.trace_id.as_deref(),
            output_bytes = result.output_text().len(),
            elapsed_ms = elapsed.as_millis() as u64
        );
    }

    fn on_execution_failure(
        &self,
        tool_call: &ToolCall,
        context: &ToolExecutionContext,
        error: &ToolError,
        elapsed: Duration,
    ) {
        let service_error = error.client_error();

        tracing::error!(
            phase = "tool",
            event = "execution_failure",
            tool_name = %tool_call.name,
            tool_call_id = %tool_call.id,
            session_id = %context.session_id,
            trace_id = context.trace_id.as_deref(),
            elapsed_ms = elapsed.as_millis() as u64,
            error_kind = ?error.kind,
            service_error_kind = service_error.map(|inner| tracing::field::debug(inner.kind)),
            service_status = service_error.and_then(|inner| inner.status),
            user_error = error.is_user_error(),
            retryable = error.retryable,
            error = %error
        );
    }
}
