//! Capability layer for declaring, validating, registering and executing tools.

mod args;
mod error;
mod hooks;
mod registry;
mod runtime;
mod schema;
mod tool;
mod types;

pub mod prelude {
    pub use crate::{
        DefaultToolRuntime, FieldSpec, InputSchema, Tool, ToolCall, ToolDefinition, ToolError,
        ToolErrorKind, ToolExecutionContext, ToolExecutionResult, ToolFuture, ToolRegistry,
        ToolRuntime, ValidatedArgs,
    };
}

pub use args::{parse_json_object, parse_json_value};
pub use error::{ToolError, ToolErrorKind};
pub use hooks::{HookSet, NoopToolRuntimeHooks, ToolRuntimeHooks};
pub use registry::ToolRegistry;
pub use runtime::{DefaultToolRuntime, ToolRuntime};
pub use schema::{ConditionalRequirement, FieldKind, FieldSpec, InputSchema, ValidatedArgs};
pub use tool::{Tool, ToolFuture};
pub use types::{ToolCall, ToolDefinition, ToolExecutionContext, ToolExecutionResult};
