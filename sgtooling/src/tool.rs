//! Tool trait contract for registry-managed capabilities.
//!
//! A tool exposes one synchronous entry point, [`Tool::run`]. The
//! asynchronous [`Tool::invoke`] used by runtimes delegates to it unless a
//! tool overrides it.
//!
//! ```rust
//! use serde_json::{Map, Value, json};
//! use sgtooling::{Tool, ToolDefinition, ToolError};
//!
//! struct Echo;
//!
//! impl Tool for Echo {
//!     fn definition(&self) -> ToolDefinition {
//!         ToolDefinition {
//!             name: "echo".to_string(),
//!             description: "Echoes its arguments".to_string(),
//!             input_schema: r#"{"type":"object"}"#.to_string(),
//!             return_direct: true,
//!         }
//!     }
//!
//!     fn run(&self, args: &Map<String, Value>) -> Result<Value, ToolError> {
//!         Ok(Value::Object(args.clone()))
//!     }
//! }
//!
//! let args = json!({"text": "hi"});
//! let output = Echo.run(args.as_object().expect("object")).expect("echo runs");
//! assert_eq!(output["text"], "hi");
//! ```

use std::future::Future;
use std::pin::Pin;

use serde_json::{Map, Value};

use crate::{ToolDefinition, ToolError, ToolExecutionContext};

pub type ToolFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

pub trait Tool: Send + Sync {
    fn definition(&self) -> ToolDefinition;

    fn run(&self, args: &Map<String, Value>) -> Result<Value, ToolError>;

    /// Runs the tool from an async context. The default performs the
    /// blocking call inline and resolves on first poll.
    fn invoke<'a>(
        &'a self,
        args: &'a Map<String, Value>,
        _context: &'a ToolExecutionContext,
    ) -> ToolFuture<'a, Result<Value, ToolError>> {
        Box::pin(async move { self.run(args) })
    }
}
