//! Client contract for the remote scrape and extraction service.
//!
//! The service itself is an external collaborator: this crate only defines
//! the typed requests it accepts, the errors it reports, how credentials are
//! resolved, and the trait a concrete client implements.
//!
//! ```rust
//! use sgclient::{ClientRequest, FeedbackRequest, Operation};
//!
//! let request = ClientRequest::SubmitFeedback(FeedbackRequest {
//!     request_id: "req-1".to_string(),
//!     rating: 5,
//!     feedback_text: "Great result".to_string(),
//! });
//!
//! assert_eq!(request.operation(), Operation::SubmitFeedback);
//! ```

mod client;
mod credentials;
mod error;
mod hooks;
mod request;
mod schema;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use schemars;

/// JSON object used for service payloads and responses.
pub type JsonMap = serde_json::Map<String, serde_json::Value>;

pub use client::{ClientFactory, ClientResponse, ScrapeClient};
pub use credentials::{
    API_KEY_ENV_VAR, ApiKey, SecretString, resolve_api_key, resolve_api_key_with,
};
pub use error::{ClientError, ClientErrorKind};
pub use hooks::{ClientCallHooks, NoopClientCallHooks, ObservedClient};
pub use request::{
    AgenticScraperRequest, ClientRequest, CreateJobRequest, FeedbackRequest,
    JobExecutionsRequest, JobRef, ListJobsRequest, LocalScraperRequest, MarkdownifyRequest,
    Operation, ScrapeRequest, SearchScraperRequest, SmartCrawlerRequest, SmartScraperRequest,
    UpdateJobRequest,
};
pub use schema::OutputSchema;

pub mod prelude {
    pub use crate::{
        ApiKey, ClientError, ClientErrorKind, ClientFactory, ClientRequest, ClientResponse,
        JsonMap, Operation, OutputSchema, ScrapeClient,
    };
}
