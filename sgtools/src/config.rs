//! Two-phase tool configuration: collect inputs, then resolve them once.
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use sgclient::testing::InMemoryScrapeClient;
//! use sgtools::ScrapeToolConfig;
//!
//! let resolved = ScrapeToolConfig::new()
//!     .with_api_key("sgai-example")
//!     .with_client(Arc::new(InMemoryScrapeClient::new()))
//!     .resolve()
//!     .expect("configuration should resolve");
//!
//! assert_eq!(resolved.api_key().expose(), "sgai-example");
//! ```

use std::sync::Arc;

use sgclient::{
    API_KEY_ENV_VAR, ApiKey, ClientCallHooks, ClientError, ClientFactory, ObservedClient,
    OutputSchema, ScrapeClient, SecretString, resolve_api_key_with,
};
use sgtooling::ToolError;

#[derive(Clone)]
pub struct ScrapeToolConfig {
    api_key: Option<SecretString>,
    api_key_env_var: String,
    client: Option<Arc<dyn ScrapeClient>>,
    factory: Option<Arc<dyn ClientFactory>>,
    client_hooks: Option<Arc<dyn ClientCallHooks>>,
    output_schema: Option<OutputSchema>,
}

impl Default for ScrapeToolConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_key_env_var: API_KEY_ENV_VAR.to_string(),
            client: None,
            factory: None,
            client_hooks: None,
            output_schema: None,
        }
    }
}

impl ScrapeToolConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(SecretString::new(api_key));
        self
    }

    /// Environment variable consulted when no explicit key is set.
    pub fn with_api_key_env_var(mut self, name: impl Into<String>) -> Self {
        self.api_key_env_var = name.into();
        self
    }

    /// Pre-built client. Takes precedence over any factory.
    pub fn with_client(mut self, client: Arc<dyn ScrapeClient>) -> Self {
        self.client = Some(client);
        self
    }

    pub fn with_client_factory(mut self, factory: Arc<dyn ClientFactory>) -> Self {
        self.factory = Some(factory);
        self
    }

    /// Reports every service call made through the resolved client.
    pub fn with_client_hooks(mut self, hooks: Arc<dyn ClientCallHooks>) -> Self {
        self.client_hooks = Some(hooks);
        self
    }

    pub fn with_output_schema(mut self, output_schema: OutputSchema) -> Self {
        self.output_schema = Some(output_schema);
        self
    }

    pub fn api_key_env_var(&self) -> &str {
        &self.api_key_env_var
    }

    pub fn output_schema(&self) -> Option<&OutputSchema> {
        self.output_schema.as_ref()
    }

    /// Resolves against the process environment.
    pub fn resolve(self) -> Result<ResolvedToolConfig, ToolError> {
        self.resolve_with(|name| std::env::var(name).ok())
    }

    /// Resolves the credential and client, reading the environment through
    /// `lookup`. The lookup is skipped entirely when an explicit key is set.
    pub fn resolve_with<F>(self, lookup: F) -> Result<ResolvedToolConfig, ToolError>
    where
        F: FnOnce(&str) -> Option<String>,
    {
        let explicit = self.api_key.as_ref().map(SecretString::expose);
        let api_key = resolve_api_key_with(explicit, &self.api_key_env_var, lookup)
            .map_err(configuration_error)?;

        let client = match (self.client, self.factory) {
            (Some(client), _) => client,
            (None, Some(factory)) => factory.build(&api_key).map_err(configuration_error)?,
            (None, None) => {
                return Err(ToolError::configuration(
                    "no scrape client or client factory configured",
                ));
            }
        };

        let client = match self.client_hooks {
            Some(hooks) => Arc::new(ObservedClient::new(client, hooks)) as Arc<dyn ScrapeClient>,
            None => client,
        };

        tracing::debug!(
            env_var = %self.api_key_env_var,
            output_schema = self.output_schema.is_some(),
            "resolved scrape tool configuration"
        );

        Ok(ResolvedToolConfig {
            api_key,
            client,
            output_schema: self.output_schema,
        })
    }
}

impl std::fmt::Debug for ScrapeToolConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrapeToolConfig")
            .field("api_key", &self.api_key)
            .field("api_key_env_var", &self.api_key_env_var)
            .field("client", &self.client)
            .field("factory", &self.factory.is_some())
            .field("client_hooks", &self.client_hooks.is_some())
            .field("output_schema", &self.output_schema)
            .finish()
    }
}

fn configuration_error(error: ClientError) -> ToolError {
    let mut wrapped = ToolError::configuration(error.message.clone());
    wrapped.client_error = Some(error);
    wrapped
}

/// Credential and client held by every tool built from one configuration.
#[derive(Debug, Clone)]
pub struct ResolvedToolConfig {
    api_key: ApiKey,
    client: Arc<dyn ScrapeClient>,
    output_schema: Option<OutputSchema>,
}

impl ResolvedToolConfig {
    pub fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    pub fn client(&self) -> &Arc<dyn ScrapeClient> {
        &self.client
    }

    pub fn output_schema(&self) -> Option<&OutputSchema> {
        self.output_schema.as_ref()
    }

    pub fn into_shared(self) -> Arc<Self> {
        Arc::new(self)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use sgclient::testing::InMemoryScrapeClient;
    use sgclient::{ClientErrorKind, ClientRequest};

    use super::*;

    fn in_memory() -> Arc<dyn ScrapeClient> {
        Arc::new(InMemoryScrapeClient::new())
    }

    #[test]
    fn missing_key_and_variable_is_a_configuration_error() {
        let error = ScrapeToolConfig::new()
            .with_client(in_memory())
            .resolve_with(|_| None)
            .expect_err("no credential is available");

        assert!(error.is_configuration_error());
        assert!(error.message.contains(API_KEY_ENV_VAR));
    }

    #[test]
    fn explicit_key_skips_the_environment() {
        let consulted = Cell::new(false);
        let resolved = ScrapeToolConfig::new()
            .with_api_key("sgai-explicit")
            .with_client(in_memory())
            .resolve_with(|_| {
                consulted.set(true);
                Some("sgai-env".to_string())
            })
            .expect("explicit key should resolve");

        assert_eq!(resolved.api_key().expose(), "sgai-explicit");
        assert!(!consulted.get());
    }

    #[test]
    fn custom_variable_name_is_used_for_lookup() {
        let resolved = ScrapeToolConfig::new()
            .with_api_key_env_var("CUSTOM_KEY")
            .with_client(in_memory())
            .resolve_with(|name| (name == "CUSTOM_KEY").then(|| "sgai-custom".to_string()))
            .expect("custom variable should resolve");

        assert_eq!(resolved.api_key().expose(), "sgai-custom");
    }

    #[test]
    fn factory_builds_a_client_bound_to_the_key() {
        let factory = |api_key: &ApiKey| -> Result<Arc<dyn ScrapeClient>, ClientError> {
            assert_eq!(api_key.expose(), "sgai-factory");
            Ok(Arc::new(InMemoryScrapeClient::new()))
        };

        let resolved = ScrapeToolConfig::new()
            .with_api_key("sgai-factory")
            .with_client_factory(Arc::new(factory))
            .resolve_with(|_| None)
            .expect("factory should build");

        let credits = resolved
            .client()
            .execute(ClientRequest::GetCredits)
            .expect("client should work");
        assert_eq!(credits["remaining_credits"], 50);
    }

    #[test]
    fn factory_failure_is_reported_as_configuration() {
        let factory = |_: &ApiKey| -> Result<Arc<dyn ScrapeClient>, ClientError> {
            Err(ClientError::authentication("key rejected"))
        };

        let error = ScrapeToolConfig::new()
            .with_api_key("sgai-bad")
            .with_client_factory(Arc::new(factory))
            .resolve_with(|_| None)
            .expect_err("factory fails");

        assert!(error.is_configuration_error());
        assert_eq!(
            error.client_error().map(|inner| inner.kind),
            Some(ClientErrorKind::Authentication)
        );
    }

    #[test]
    fn missing_client_source_is_a_configuration_error() {
        let error = ScrapeToolConfig::new()
            .with_api_key("sgai-key")
            .resolve_with(|_| None)
            .expect_err("no client source");

        assert!(error.is_configuration_error());
    }

    #[test]
    fn debug_output_redacts_the_key() {
        let config = ScrapeToolConfig::new().with_api_key("sgai-very-secret");
        let rendered = format!("{config:?}");

        assert!(!rendered.contains("sgai-very-secret"));
        assert!(rendered.contains("REDACTED"));
    }
}
