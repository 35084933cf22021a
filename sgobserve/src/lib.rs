//! Production-friendly observability hooks for service calls and tool executions.
//!
//! ```rust
//! use sgobserve::{MetricsObservabilityHooks, SafeClientHooks, TracingObservabilityHooks};
//!
//! let _client_hooks = SafeClientHooks::new(TracingObservabilityHooks);
//! let _metrics = MetricsObservabilityHooks;
//! ```

mod metrics_hooks;
mod safe_hooks;
mod tracing_hooks;

pub use metrics_hooks::MetricsObservabilityHooks;
pub use safe_hooks::{SafeClientHooks, SafeToolHooks};
pub use tracing_hooks::TracingObservabilityHooks;

pub mod prelude {
    pub use crate::{
        MetricsObservabilityHooks, SafeClientHooks, SafeToolHooks, TracingObservabilityHooks,
    };
}
