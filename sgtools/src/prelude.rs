//! Common imports for most sgtools applications.

pub use crate::{
    OutputSchema, ResolvedToolConfig, ScrapeGraphTool, ScrapeToolConfig, ToolDescriptor,
    ToolFamily, ToolKind, Toolkit, catalog, execution_context, parse_tool_kind, tool_call,
};
pub use crate::{
    ClientError, ClientErrorKind, ScrapeClient, ToolCall, ToolDefinition, ToolError,
    ToolErrorKind, ToolExecutionContext, ToolExecutionResult,
};
pub use crate::{DefaultToolRuntime, Tool, ToolRegistry, ToolRuntime, ToolRuntimeHooks};
pub use crate::{sg_call, sg_tools};
