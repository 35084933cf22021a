//! Name-keyed tool lookup used by the runtime.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::{Tool, ToolDefinition};

/// Tools keyed by their definition name, iterated in name order.
#[derive(Default, Clone)]
pub struct ToolRegistry {
    tools: BTreeMap<String, Arc<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<T>(&mut self, tool: T) -> Option<Arc<dyn Tool>>
    where
        T: Tool + 'static,
    {
        self.register_arc(Arc::new(tool))
    }

    /// Registers a shared tool, returning the tool it displaced if one was
    /// already registered under the same name.
    pub fn register_arc(&mut self, tool: Arc<dyn Tool>) -> Option<Arc<dyn Tool>> {
        let name = tool.definition().name;
        self.tools.insert(name, tool)
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.remove(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tools.keys().map(String::as_str)
    }

    pub fn definitions(&self) -> Vec<ToolDefinition> {
        self.tools.values().map(|tool| tool.definition()).collect()
    }

    /// Names of tools whose output should go straight back to the caller
    /// instead of feeding further reasoning.
    pub fn return_direct_names(&self) -> Vec<String> {
        self.definitions()
            .into_iter()
            .filter(|definition| definition.return_direct)
            .map(|definition| definition.name)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl std::fmt::Debug for ToolRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolRegistry")
            .field("tools", &self.tools.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{Map, Value, json};

    use super::*;
    use crate::ToolError;

    struct FixedTool {
        name: &'static str,
        return_direct: bool,
        output: Value,
    }

    impl Tool for FixedTool {
        fn definition(&self) -> ToolDefinition {
            ToolDefinition {
                name: self.name.to_string(),
                description: "Returns a fixed value".to_string(),
                input_schema: r#"{"type":"object","properties":{}}"#.to_string(),
                return_direct: self.return_direct,
            }
        }

        fn run(&self, _args: &Map<String, Value>) -> Result<Value, ToolError> {
            Ok(self.output.clone())
        }
    }

    fn fixed(name: &'static str, return_direct: bool, output: Value) -> FixedTool {
        FixedTool {
            name,
            return_direct,
            output,
        }
    }

    #[test]
    fn same_name_replaces_the_previous_tool() {
        let mut registry = ToolRegistry::new();
        assert!(registry.register(fixed("GetCredits", true, json!(1))).is_none());

        let displaced = registry
            .register(fixed("GetCredits", true, json!(2)))
            .expect("first tool is displaced");
        assert_eq!(displaced.run(&Map::new()), Ok(json!(1)));

        let current = registry.get("GetCredits").expect("tool is registered");
        assert_eq!(current.run(&Map::new()), Ok(json!(2)));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn names_are_sorted_and_direct_tools_are_listed() {
        let mut registry = ToolRegistry::new();
        registry.register(fixed("SmartScraper", true, Value::Null));
        registry.register(fixed("GetScheduledJobs", false, Value::Null));
        registry.register(fixed("Markdownify", true, Value::Null));

        assert_eq!(
            registry.names().collect::<Vec<_>>(),
            vec!["GetScheduledJobs", "Markdownify", "SmartScraper"]
        );
        assert_eq!(
            registry.return_direct_names(),
            vec!["Markdownify".to_string(), "SmartScraper".to_string()]
        );

        assert!(registry.remove("Markdownify").is_some());
        assert!(!registry.contains("Markdownify"));
        assert_eq!(format!("{registry:?}"), r#"ToolRegistry { tools: ["GetScheduledJobs", "SmartScraper"] }"#);
    }
}
