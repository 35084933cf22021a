//! Agent tool adapters for a remote scrape and extraction service.
//!
//! Every service operation is exposed as a tool driven by one generic
//! adapter and a static descriptor table. This crate is designed to be the
//! single dependency for most applications: it re-exports the client and
//! tooling crates and adds configuration, a toolkit builder, and helpers.
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use sgclient::testing::InMemoryScrapeClient;
//! use sgtools::{ScrapeToolConfig, ToolRuntime, Toolkit, execution_context, sg_call};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let toolkit = Toolkit::new(
//!     ScrapeToolConfig::new()
//!         .with_api_key("sgai-example")
//!         .with_client(Arc::new(InMemoryScrapeClient::new())),
//! )
//! .expect("toolkit should build");
//!
//! let call = sg_call!("call-1", SmartScraper, {
//!     "user_prompt": "Extract the main heading",
//!     "website_url": "https://example.com",
//!     "website_html": "<html><body><h1>Test</h1></body></html>"
//! });
//!
//! let result = toolkit
//!     .runtime()
//!     .execute(call, execution_context("session-1"))
//!     .await
//!     .expect("tool should run");
//! assert_eq!(result.output["main_heading"], "Test");
//! # }
//! ```

mod adapter;
mod catalog;
mod config;
mod macros;
mod normalize;
mod request;
mod toolkit;

pub mod prelude;
pub mod util;

pub use serde_json;
pub use sgclient;
pub use sgtooling;

pub use sgclient::{
    API_KEY_ENV_VAR, ApiKey, ClientCallHooks, ClientError, ClientErrorKind, ClientFactory,
    ClientRequest, ClientResponse, JsonMap, ObservedClient, Operation, OutputSchema, ScrapeClient,
};
pub use sgtooling::{
    DefaultToolRuntime, FieldSpec, HookSet, InputSchema, NoopToolRuntimeHooks, Tool, ToolCall,
    ToolDefinition, ToolError, ToolErrorKind, ToolExecutionContext, ToolExecutionResult,
    ToolFuture, ToolRegistry, ToolRuntime, ToolRuntimeHooks, ValidatedArgs,
};

pub use adapter::ScrapeGraphTool;
pub use catalog::{OutputShape, ToolDescriptor, ToolFamily, ToolKind, catalog};
pub use config::{ResolvedToolConfig, ScrapeToolConfig};
pub use normalize::normalize;
pub use request::build_request;
pub use toolkit::Toolkit;
pub use util::{execution_context, parse_tool_kind, tool_call};

#[cfg(test)]
mod tests {
    use crate::ToolKind;

    #[test]
    fn sg_call_macro_builds_named_call() {
        let call = crate::sg_call!("call-1", Markdownify, {"website_url": "https://example.com"});
        assert_eq!(call.id, "call-1");
        assert_eq!(call.name, "Markdownify");
        assert!(call.arguments.contains("https://example.com"));
    }

    #[test]
    fn sg_tools_macro_lists_kinds() {
        let kinds = crate::sg_tools![GetCredits, SubmitFeedback];
        assert_eq!(kinds, [ToolKind::GetCredits, ToolKind::SubmitFeedback]);
    }
}
