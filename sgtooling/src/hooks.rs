//! Runtime hooks for tool execution lifecycle events.
//!
//! Several hook implementations can observe the same runtime through
//! [`HookSet`].
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use sgtooling::{HookSet, NoopToolRuntimeHooks, ToolRuntimeHooks};
//!
//! fn assert_hooks_trait(_hooks: &dyn ToolRuntimeHooks) {}
//!
//! let hooks = HookSet::new()
//!     .with(Arc::new(NoopToolRuntimeHooks))
//!     .with(Arc::new(NoopToolRuntimeHooks));
//! assert_eq!(hooks.len(), 2);
//! assert_hooks_trait(&hooks);
//! ```

use std::sync::Arc;
use std::time::Duration;

use crate::{ToolCall, ToolError, ToolExecutionContext, ToolExecutionResult};

pub trait ToolRuntimeHooks: Send + Sync {
    fn on_execution_start(&self, _tool_call: &ToolCall, _context: &ToolExecutionContext) {}

    fn on_execution_success(
        &self,
        _tool_call: &ToolCall,
        _context: &ToolExecutionContext,
        _result: &ToolExecutionResult,
        _elapsed: Duration,
    ) {
    }

    fn on_execution_failure(
        &self,
        _tool_call: &ToolCall,
        _context: &ToolExecutionContext,
        _error: &ToolError,
        _elapsed: Duration,
    ) {
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopToolRuntimeHooks;

impl ToolRuntimeHooks for NoopToolRuntimeHooks {}

/// Fans every lifecycle event out to its members, in insertion order.
#[derive(Clone, Default)]
pub struct HookSet {
    hooks: Vec<Arc<dyn ToolRuntimeHooks>>,
}

impl HookSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, hooks: Arc<dyn ToolRuntimeHooks>) -> Self {
        self.hooks.push(hooks);
        self
    }

    pub fn push(&mut self, hooks: Arc<dyn ToolRuntimeHooks>) {
        self.hooks.push(hooks);
    }

    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }
}

impl ToolRuntimeHooks for HookSet {
    fn on_execution_start(&self, tool_call: &ToolCall, context: &ToolExecutionContext) {
        for hooks in &self.hooks {
            hooks.on_execution_start(tool_call, context);
        }
    }

    fn on_execution_success(
        &self,
        tool_call: &ToolCall,
        context: &ToolExecutionContext,
        result: &ToolExecutionResult,
        elapsed: Duration,
    ) {
        for hooks in &self.hooks {
            hooks.on_execution_success(tool_call, context, result, elapsed);
        }
    }

    fn on_execution_failure(
        &self,
        tool_call: &ToolCall,
        context: &ToolExecutionContext,
        error: &ToolError,
        elapsed: Duration,
    ) {
        for hooks in &self.hooks {
            hooks.on_execution_failure(tool_call, context, error, elapsed);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use serde_json::json;

    use super::*;

    #[derive(Default)]
    struct RecordingHooks {
        events: Mutex<Vec<String>>,
    }

    impl ToolRuntimeHooks for RecordingHooks {
        fn on_execution_start(&self, tool_call: &ToolCall, _context: &ToolExecutionContext) {
            self.events
                .lock()
                .expect("events lock")
                .push(format!("start:{}", tool_call.name));
        }

        fn on_execution_success(
            &self,
            tool_call: &ToolCall,
            _context: &ToolExecutionContext,
            _result: &ToolExecutionResult,
            _elapsed: Duration,
        ) {
            self.events
                .lock()
                .expect("events lock")
                .push(format!("success:{}", tool_call.name));
        }
    }

    #[test]
    fn hook_set_fans_out_to_every_member() {
        let first = Arc::new(RecordingHooks::default());
        let second = Arc::new(RecordingHooks::default());
        let hooks = HookSet::new().with(first.clone()).with(second.clone());

        let call = ToolCall::new("call_1", "GetCredits", "{}");
        let context = ToolExecutionContext::new("session-1");
        let result = ToolExecutionResult::from_call(&call, json!({"remaining_credits": 50}));

        hooks.on_execution_start(&call, &context);
        hooks.on_execution_success(&call, &context, &result, Duration::from_millis(3));
        hooks.on_execution_failure(
            &call,
            &context,
            &ToolError::other("ignored by recorder"),
            Duration::ZERO,
        );

        for recorder in [first, second] {
            assert_eq!(
                *recorder.events.lock().expect("events lock"),
                vec!["start:GetCredits".to_string(), "success:GetCredits".to_string()]
            );
        }
    }
}
