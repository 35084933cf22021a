//! Panic-isolating wrappers so a faulty hook never fails a call.

use std::panic::{AssertUnwindSafe, catch_unwind};
use std::time::Duration;

use sgclient::{ClientCallHooks, ClientError, Operation};
use sgtooling::{
    ToolCall, ToolError, ToolExecutionContext, ToolExecutionResult, ToolRuntimeHooks,
};

pub struct SafeClientHooks<H> {
    inner: H,
}

impl<H> SafeClientHooks<H> {
    pub fn new(inner: H) -> Self {
        Self { inner }
    }
}

impl<H> ClientCallHooks for SafeClientHooks<H>
where
    H: ClientCallHooks,
{
    fn on_call_start(&self, operation: Operation) {
        let _ = catch_unwind(AssertUnwindSafe(|| self.inner.on_call_start(operation)));
    }

    fn on_call_success(&self, operation: Operation, elapsed: Duration) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner.on_call_success(operation, elapsed)
        }));
    }

    fn on_call_failure(&self, operation: Operation, error: &ClientError, elapsed: Duration) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner.on_call_failure(operation, error, elapsed)
        }));
    }
}

pub struct SafeToolHooks<H> {
    inner: H,
}

impl<H> SafeToolHooks<H> {
    pub fn new(inner: H) -> Self {
        Self { inner }
    }
}

impl<H> ToolRuntimeHooks for SafeToolHooks<H>
where
    H: ToolRuntimeHooks,
{
    fn on_execution_start(&self, tool_call: &ToolCall, context: &ToolExecutionContext) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner.on_execution_start(tool_call, context)
        }));
    }

    fn on_execution_success(
        &self,
        tool_call: &ToolCall,
        context: &ToolExecutionContext,
        result: &ToolExecutionResult,
        elapsed: Duration,
    ) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner
                .on_execution_success(tool_call, context, result, elapsed)
        }));
    }

    fn on_execution_failure(
        &self,
        tool_call: &ToolCall,
        context: &ToolExecutionContext,
        error: &ToolError,
        elapsed: Duration,
    ) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner
                .on_execution_failure(tool_call, context, error, elapsed)
        }));
    }
}
