//! Lifecycle hooks around individual service calls.
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use sgclient::{NoopClientCallHooks, ObservedClient, ScrapeClient};
//!
//! fn wrap(client: Arc<dyn ScrapeClient>) -> Arc<dyn ScrapeClient> {
//!     Arc::new(ObservedClient::new(client, Arc::new(NoopClientCallHooks)))
//! }
//! # let _ = wrap;
//! ```

use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::{ClientError, ClientRequest, ClientResponse, Operation, ScrapeClient};

pub trait ClientCallHooks: Send + Sync {
    fn on_call_start(&self, _operation: Operation) {}

    fn on_call_success(&self, _operation: Operation, _elapsed: Duration) {}

    fn on_call_failure(&self, _operation: Operation, _error: &ClientError, _elapsed: Duration) {}
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopClientCallHooks;

impl ClientCallHooks for NoopClientCallHooks {}

/// Decorates a client so every call is reported to `hooks`. Results and
/// errors pass through untouched.
#[derive(Clone)]
pub struct ObservedClient {
    inner: Arc<dyn ScrapeClient>,
    hooks: Arc<dyn ClientCallHooks>,
}

impl ObservedClient {
    pub fn new(inner: Arc<dyn ScrapeClient>, hooks: Arc<dyn ClientCallHooks>) -> Self {
        Self { inner, hooks }
    }

    pub fn inner(&self) -> &Arc<dyn ScrapeClient> {
        &self.inner
    }
}

impl std::fmt::Debug for ObservedClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObservedClient")
            .field("inner", &self.inner)
            .finish_non_exhaustive()
    }
}

impl ScrapeClient for ObservedClient {
    fn execute(&self, request: ClientRequest) -> Result<ClientResponse, ClientError> {
        let operation = request.operation();
        let started = Instant::now();
        self.hooks.on_call_start(operation);

        let outcome = self.inner.execute(request);
        match &outcome {
            Ok(_) => self.hooks.on_call_success(operation, started.elapsed()),
            Err(error) => self
                .hooks
                .on_call_failure(operation, error, started.elapsed()),
        }
        outcome
    }
}
