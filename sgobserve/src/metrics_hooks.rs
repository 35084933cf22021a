//! Metrics-based observability hooks for service calls and tool executions.
//!
//! ```rust
//! use sgclient::ClientCallHooks;
//! use sgobserve::MetricsObservabilityHooks;
//!
//! fn accepts_client_hooks(_hooks: &dyn ClientCallHooks) {}
//!
//! let hooks = MetricsObservabilityHooks;
//! accepts_client_hooks(&hooks);
//! ```

use std::time::Duration;

use sgclient::{ClientCallHooks, ClientError, Operation};
use sgtooling::{
    ToolCall, ToolError, ToolExecutionContext, ToolExecutionResult, ToolRuntimeHooks,
};

#[derive(Debug, Clone, Copy, Default)]
pub struct MetricsObservabilityHooks;

impl ClientCallHooks for MetricsObservabilityHooks {
    fn on_call_start(&self, operation: Operation) {
        metrics::counter!(
            "sgtools_client_call_start_total",
            "operation" => operation.as_str()
        )
        .increment(1);
    }

    fn on_call_success(&self, operation: Operation, elapsed: Duration) {
        metrics::counter!(
            "sgtools_client_call_success_total",
            "operation" => operation.as_str()
        )
        .increment(1);
        metrics::histogram!(
            "sgtools_client_call_duration_seconds",
            "operation" => operation.as_str(),
            "status" => "success"
        )
        .record(elapsed.as_secs_f64());
    }

    fn on_call_failure(&self, operation: Operation, error: &ClientError, elapsed: Duration) {
        metrics::counter!(
            "sgtools_client_call_failure_total",
            "operation" => operation.as_str(),
            "error_kind" => format!("{:?}", error.kind),
            "retryable" => if error.retryable { "true" } else { "false" }
        )
        .increment(1);
        metrics::histogram!(
            "sgtools_client_call_duration_seconds",
            "operation" => operation.as_str(),
            "status" => "failure"
        )
        .record(elapsed.as_secs_f64());
    }
}

impl ToolRuntimeHooks for MetricsObservabilityHooks {
    fn on_execution_start(&self, tool_call: &ToolCall, _context: &ToolExecutionContext) {
        metrics::counter!(
            "sgtools_tool_execution_start_total",
            "tool_name" => tool_call.name.clone()
        )
        .increment(1);
    }

    fn on_execution_success(
        &self,
        tool_call: &ToolCall,
        _context: &ToolExecutionContext,
        _result: &ToolExecutionResult,
        elapsed: Duration,
    ) {
        metrics::counter!(
            "sgtools_tool_execution_success_total",
            "tool_name" => tool_call.name.clone()
        )
        .increment(1);
        metrics::histogram!(
            "sgtools_tool_execution_duration_seconds",
            "tool_name" => tool_call.name.clone(),
            "status" => "success"
        )
        .record(elapsed.as_secs_f64());
    }

    fn on_execution_failure(
        &self,
        tool_call: &ToolCall,
        _context: &ToolExecutionContext,
        error: &ToolError,
        elapsed: Duration,
    ) {
        metrics::counter!(
            "sgtools_tool_execution_failure_total",
            "tool_name" => tool_call.name.clone(),
            "error_kind" => format!("{:?}", error.kind),
            "error_class" => error_class(error)
        )
        .increment(1);
        metrics::histogram!(
            "sgtools_tool_execution_duration_seconds",
            "tool_name" => tool_call.name.clone(),
            "status" => "failure"
        )
        .record(elapsed.as_secs_f64());
    }
}

/// Coarse failure bucket: caller mistakes, setup problems, or the service.
fn error_class(error: &ToolError) -> &'static str {
    if error.is_user_error() {
        "caller"
    } else if error.is_configuration_error() {
        "configuration"
    } else if error.client_error().is_some() {
        "service"
    } else {
        "internal"
    }
}

#[cfg(test)]
mod tests {
    use sgclient::ClientError;
    use sgtooling::ToolError;

    use super::error_class;

    #[test]
    fn failures_are_bucketed_by_origin() {
        assert_eq!(error_class(&ToolError::invalid_arguments("bad rating")), "caller");
        assert_eq!(error_class(&ToolError::not_found("unknown tool")), "caller");
        assert_eq!(error_class(&ToolError::configuration("no key")), "configuration");
        assert_eq!(
            error_class(&ToolError::external(ClientError::timeout("slow"))),
            "service"
        );
        assert_eq!(error_class(&ToolError::other("boom")), "internal");
    }
}
