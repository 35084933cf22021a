//! Builds a set of tools from one resolved configuration and wires them
//! into a registry and runtime.
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use sgclient::testing::InMemoryScrapeClient;
//! use sgtools::{ScrapeToolConfig, ToolKind, Toolkit};
//!
//! let toolkit = Toolkit::with_kinds(
//!     ScrapeToolConfig::new()
//!         .with_api_key("sgai-example")
//!         .with_client(Arc::new(InMemoryScrapeClient::new())),
//!     &[ToolKind::SmartScraper, ToolKind::GetCredits],
//! )
//! .expect("toolkit should build");
//!
//! assert_eq!(toolkit.len(), 2);
//! assert!(toolkit.registry().contains("GetCredits"));
//! ```

use std::sync::Arc;

use sgtooling::{DefaultToolRuntime, ToolDefinition, ToolError, ToolRegistry, ToolRuntimeHooks};

use crate::{ResolvedToolConfig, ScrapeGraphTool, ScrapeToolConfig, ToolKind};

#[derive(Debug, Clone)]
pub struct Toolkit {
    config: Arc<ResolvedToolConfig>,
    tools: Vec<Arc<ScrapeGraphTool>>,
    registry: Arc<ToolRegistry>,
}

impl Toolkit {
    /// Every catalog tool.
    pub fn new(config: ScrapeToolConfig) -> Result<Self, ToolError> {
        Self::with_kinds(config, &ToolKind::ALL)
    }

    pub fn with_kinds(config: ScrapeToolConfig, kinds: &[ToolKind]) -> Result<Self, ToolError> {
        Ok(Self::from_resolved(config.resolve()?.into_shared(), kinds))
    }

    /// Builds `kinds` over a shared configuration. A configured output
    /// schema is only applied to tools that accept one.
    pub fn from_resolved(config: Arc<ResolvedToolConfig>, kinds: &[ToolKind]) -> Self {
        let mut kinds = kinds.to_vec();
        kinds.sort_unstable();
        kinds.dedup();

        let tools = kinds
            .into_iter()
            .map(|kind| Arc::new(ScrapeGraphTool::bind(kind, Arc::clone(&config))))
            .collect::<Vec<_>>();

        let mut registry = ToolRegistry::new();
        for tool in &tools {
            registry.register_arc(Arc::clone(tool) as Arc<dyn sgtooling::Tool>);
        }

        tracing::debug!(tools = tools.len(), "built scrape toolkit");

        Self {
            config,
            tools,
            registry: Arc::new(registry),
        }
    }

    pub fn config(&self) -> &Arc<ResolvedToolConfig> {
        &self.config
    }

    pub fn tool(&self, kind: ToolKind) -> Option<Arc<ScrapeGraphTool>> {
        self.tools.iter().find(|tool| tool.kind() == kind).cloned()
    }

    pub fn tools(&self) -> &[Arc<ScrapeGraphTool>] {
        &self.tools
    }

    pub fn kinds(&self) -> Vec<ToolKind> {
        self.tools.iter().map(|tool| tool.kind()).collect()
    }

    pub fn definitions(&self) -> Vec<ToolDefinition> {
        self.registry.definitions()
    }

    pub fn registry(&self) -> Arc<ToolRegistry> {
        Arc::clone(&self.registry)
    }

    pub fn runtime(&self) -> DefaultToolRuntime {
        DefaultToolRuntime::new(self.registry())
    }

    pub fn runtime_with_hooks(&self, hooks: Arc<dyn ToolRuntimeHooks>) -> DefaultToolRuntime {
        self.runtime().with_hooks(hooks)
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use sgclient::testing::InMemoryScrapeClient;
    use sgclient::{JsonMap, OutputSchema};

    use super::*;

    fn config(client: Arc<InMemoryScrapeClient>) -> ScrapeToolConfig {
        ScrapeToolConfig::new()
            .with_api_key("sgai-toolkit")
            .with_client(client)
    }

    #[test]
    fn full_toolkit_registers_every_catalog_tool() {
        let toolkit = Toolkit::new(config(Arc::new(InMemoryScrapeClient::new())))
            .expect("toolkit should build");

        assert_eq!(toolkit.len(), ToolKind::ALL.len());
        assert_eq!(toolkit.definitions().len(), ToolKind::ALL.len());
        for kind in ToolKind::ALL {
            assert!(toolkit.registry().contains(kind.name()));
        }
    }

    #[test]
    fn duplicate_kinds_are_collapsed() {
        let toolkit = Toolkit::with_kinds(
            config(Arc::new(InMemoryScrapeClient::new())),
            &[ToolKind::Scrape, ToolKind::Scrape, ToolKind::Markdownify],
        )
        .expect("toolkit should build");

        assert_eq!(toolkit.kinds(), vec![ToolKind::Markdownify, ToolKind::Scrape]);
    }

    #[test]
    fn output_schema_only_reaches_supporting_tools() {
        let mut mapping = JsonMap::new();
        mapping.insert("title".to_string(), json!({"type": "string"}));
        let toolkit = Toolkit::new(
            config(Arc::new(InMemoryScrapeClient::new()))
                .with_output_schema(OutputSchema::from_mapping(mapping)),
        )
        .expect("toolkit should build");

        for tool in toolkit.tools() {
            assert_eq!(
                tool.output_schema().is_some(),
                tool.kind().supports_output_schema(),
                "{}",
                tool.kind()
            );
        }
    }

    #[test]
    fn credits_tool_ignores_the_schema_while_scraper_keeps_it() {
        let schema = OutputSchema::from_value(json!({"title": {"type": "string"}}))
            .expect("object should convert");
        let toolkit = Toolkit::new(
            config(Arc::new(InMemoryScrapeClient::new())).with_output_schema(schema.clone()),
        )
        .expect("toolkit should build");

        let credits = toolkit.tool(ToolKind::GetCredits).expect("tool is registered");
        assert!(credits.output_schema().is_none());
        let scraper = toolkit.tool(ToolKind::SmartScraper).expect("tool is registered");
        assert_eq!(scraper.output_schema(), Some(&schema));
    }

    #[test]
    fn tools_share_one_client() {
        let client = Arc::new(InMemoryScrapeClient::new());
        let toolkit = Toolkit::new(config(client.clone())).expect("toolkit should build");

        for kind in [ToolKind::GetCredits, ToolKind::Markdownify] {
            let tool = toolkit.tool(kind).expect("tool is registered");
            let args = if kind == ToolKind::Markdownify {
                json!({"website_url": "https://example.com"})
            } else {
                json!({})
            };
            tool.call(args).expect("call should succeed");
        }

        assert_eq!(client.call_count(), 2);
    }
}
