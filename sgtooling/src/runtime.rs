//! Tool runtime trait and default registry-backed executor.

use std::sync::Arc;
use std::time::Instant;

use crate::{
    NoopToolRuntimeHooks, ToolCall, ToolError, ToolExecutionContext, ToolExecutionResult,
    ToolFuture, ToolRegistry, ToolRuntimeHooks, parse_json_object,
};

pub trait ToolRuntime: Send + Sync {
    fn execute<'a>(
        &'a self,
        tool_call: ToolCall,
        context: ToolExecutionContext,
    ) -> ToolFuture<'a, Result<ToolExecutionResult, ToolError>>;
}

#[derive(Clone)]
pub struct DefaultToolRuntime {
    registry: Arc<ToolRegistry>,
    hooks: Arc<dyn ToolRuntimeHooks>,
}

impl Default for DefaultToolRuntime {
    fn default() -> Self {
        Self::new(Arc::new(ToolRegistry::new()))
    }
}

impl DefaultToolRuntime {
    pub fn new(registry: Arc<ToolRegistry>) -> Self {
        Self {
            registry,
            hooks: Arc::new(NoopToolRuntimeHooks),
        }
    }

    pub fn with_hooks(mut self, hooks: Arc<dyn ToolRuntimeHooks>) -> Self {
        self.hooks = hooks;
        self
    }

    pub fn registry(&self) -> Arc<ToolRegistry> {
        Arc::clone(&self.registry)
    }

    async fn dispatch(
        &self,
        tool_call: &ToolCall,
        context: &ToolExecutionContext,
    ) -> Result<ToolExecutionResult, ToolError> {
        let tool = self.registry.get(&tool_call.name).ok_or_else(|| {
            ToolError::not_found(format!("tool '{}' is not registered", tool_call.name))
        })?;

        let args = parse_json_object(&tool_call.arguments)?;
        let output = tool.invoke(&args, context).await?;
        Ok(ToolExecutionResult::from_call(tool_call, output))
    }
}

impl std::fmt::Debug for DefaultToolRuntime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DefaultToolRuntime")
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}

impl ToolRuntime for DefaultToolRuntime {
    fn execute<'a>(
        &'a self,
        tool_call: ToolCall,
        context: ToolExecutionContext,
    ) -> ToolFuture<'a, Result<ToolExecutionResult, ToolError>> {
        Box::pin(async move {
            let started = Instant::now();
            self.hooks.on_execution_start(&tool_call, &context);

            match self.dispatch(&tool_call, &context).await {
                Ok(result) => {
                    self.hooks
                        .on_execution_success(&tool_call, &context, &result, started.elapsed());
                    Ok(result)
                }
                Err(error) => {
                    let error = error
                        .with_tool_name(tool_call.name.clone())
                        .with_tool_call_id(tool_call.id.clone());
                    self.hooks
                        .on_execution_failure(&tool_call, &context, &error, started.elapsed());
                    Err(error)
                }
            }
        })
    }
}
