//! Typed request variants, one per scrape service operation.
//!
//! ```rust
//! use sgclient::{ClientRequest, MarkdownifyRequest, Operation};
//!
//! let request = ClientRequest::Markdownify(MarkdownifyRequest {
//!     website_url: "https://example.com".to_string(),
//! });
//!
//! assert_eq!(request.operation(), Operation::Markdownify);
//! let payload = request.payload().expect("payload should serialize");
//! assert_eq!(payload["website_url"], "https://example.com");
//! ```

use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

use serde::Serialize;
use serde_json::Value;

use crate::{ClientError, JsonMap, OutputSchema};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Operation {
    SmartScraper,
    LocalScraper,
    SmartCrawler,
    Markdownify,
    Scrape,
    SearchScraper,
    AgenticScraper,
    GetCredits,
    SubmitFeedback,
    CreateScheduledJob,
    GetScheduledJobs,
    GetScheduledJob,
    UpdateScheduledJob,
    PauseScheduledJob,
    ResumeScheduledJob,
    TriggerScheduledJob,
    DeleteScheduledJob,
    GetJobExecutions,
}

impl Operation {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SmartScraper => "smartscraper",
            Self::LocalScraper => "localscraper",
            Self::SmartCrawler => "smartcrawler",
            Self::Markdownify => "markdownify",
            Self::Scrape => "scrape",
            Self::SearchScraper => "searchscraper",
            Self::AgenticScraper => "agenticscraper",
            Self::GetCredits => "get_credits",
            Self::SubmitFeedback => "submit_feedback",
            Self::CreateScheduledJob => "create_scheduled_job",
            Self::GetScheduledJobs => "get_scheduled_jobs",
            Self::GetScheduledJob => "get_scheduled_job",
            Self::UpdateScheduledJob => "update_scheduled_job",
            Self::PauseScheduledJob => "pause_scheduled_job",
            Self::ResumeScheduledJob => "resume_scheduled_job",
            Self::TriggerScheduledJob => "trigger_scheduled_job",
            Self::DeleteScheduledJob => "delete_scheduled_job",
            Self::GetJobExecutions => "get_job_executions",
        }
    }

    /// Whether the operation accepts an output-shape descriptor.
    pub fn supports_output_schema(self) -> bool {
        matches!(
            self,
            Self::SmartScraper
                | Self::LocalScraper
                | Self::SmartCrawler
                | Self::SearchScraper
                | Self::AgenticScraper
        )
    }
}

impl Display for Operation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SmartScraperRequest {
    pub website_url: String,
    pub user_prompt: String,
    /// Literal HTML that replaces the URL fetch inside the service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website_html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_schema: Option<OutputSchema>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocalScraperRequest {
    pub website_html: String,
    pub user_prompt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_schema: Option<OutputSchema>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SmartCrawlerRequest {
    pub url: String,
    pub prompt: String,
    pub cache_website: bool,
    pub depth: u32,
    pub max_pages: u32,
    pub same_domain_only: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_schema: Option<OutputSchema>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MarkdownifyRequest {
    pub website_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScrapeRequest {
    pub website_url: String,
    pub render_heavy_js: bool,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub headers: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchScraperRequest {
    pub user_prompt: String,
    pub extraction_mode: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_schema: Option<OutputSchema>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgenticScraperRequest {
    pub url: String,
    pub steps: Vec<String>,
    pub use_session: bool,
    pub ai_extraction: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_prompt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_schema: Option<OutputSchema>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedbackRequest {
    pub request_id: String,
    pub rating: u8,
    pub feedback_text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateJobRequest {
    pub job_name: String,
    pub service_type: String,
    pub cron_expression: String,
    pub job_config: JsonMap,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListJobsRequest {
    pub page: u32,
    pub page_size: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdateJobRequest {
    pub job_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cron_expression: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_config: Option<JsonMap>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobRef {
    pub job_id: String,
}

impl JobRef {
    pub fn new(job_id: impl Into<String>) -> Self {
        Self {
            job_id: job_id.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobExecutionsRequest {
    pub job_id: String,
    pub page: u32,
    pub page_size: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ClientRequest {
    SmartScraper(SmartScraperRequest),
    LocalScraper(LocalScraperRequest),
    SmartCrawler(SmartCrawlerRequest),
    Markdownify(MarkdownifyRequest),
    Scrape(ScrapeRequest),
    SearchScraper(SearchScraperRequest),
    AgenticScraper(AgenticScraperRequest),
    GetCredits,
    SubmitFeedback(FeedbackRequest),
    CreateScheduledJob(CreateJobRequest),
    GetScheduledJobs(ListJobsRequest),
    GetScheduledJob(JobRef),
    UpdateScheduledJob(UpdateJobRequest),
    PauseScheduledJob(JobRef),
    ResumeScheduledJob(JobRef),
    TriggerScheduledJob(JobRef),
    DeleteScheduledJob(JobRef),
    GetJobExecutions(JobExecutionsRequest),
}

impl ClientRequest {
    pub fn operation(&self) -> Operation {
        match self {
            Self::SmartScraper(_) => Operation::SmartScraper,
            Self::LocalScraper(_) => Operation::LocalScraper,
            Self::SmartCrawler(_) => Operation::SmartCrawler,
            Self::Markdownify(_) => Operation::Markdownify,
            Self::Scrape(_) => Operation::Scrape,
            Self::SearchScraper(_) => Operation::SearchScraper,
            Self::AgenticScraper(_) => Operation::AgenticScraper,
            Self::GetCredits => Operation::GetCredits,
            Self::SubmitFeedback(_) => Operation::SubmitFeedback,
            Self::CreateScheduledJob(_) => Operation::CreateScheduledJob,
            Self::GetScheduledJobs(_) => Operation::GetScheduledJobs,
            Self::GetScheduledJob(_) => Operation::GetScheduledJob,
            Self::UpdateScheduledJob(_) => Operation::UpdateScheduledJob,
            Self::PauseScheduledJob(_) => Operation::PauseScheduledJob,
            Self::ResumeScheduledJob(_) => Operation::ResumeScheduledJob,
            Self::TriggerScheduledJob(_) => Operation::TriggerScheduledJob,
            Self::DeleteScheduledJob(_) => Operation::DeleteScheduledJob,
            Self::GetJobExecutions(_) => Operation::GetJobExecutions,
        }
    }

    pub fn output_schema(&self) -> Option<&OutputSchema> {
        match self {
            Self::SmartScraper(request) => request.output_schema.as_ref(),
            Self::LocalScraper(request) => request.output_schema.as_ref(),
            Self::SmartCrawler(request) => request.output_schema.as_ref(),
            Self::SearchScraper(request) => request.output_schema.as_ref(),
            Self::AgenticScraper(request) => request.output_schema.as_ref(),
            _ => None,
        }
    }

    /// Request body as the service expects it on the wire.
    pub fn payload(&self) -> Result<Value, ClientError> {
        let payload = match self {
            Self::SmartScraper(request) => serde_json::to_value(request),
            Self::LocalScraper(request) => serde_json::to_value(request),
            Self::SmartCrawler(request) => serde_json::to_value(request),
            Self::Markdownify(request) => serde_json::to_value(request),
            Self::Scrape(request) => serde_json::to_value(request),
            Self::SearchScraper(request) => serde_json::to_value(request),
            Self::AgenticScraper(request) => serde_json::to_value(request),
            Self::GetCredits => Ok(Value::Object(JsonMap::new())),
            Self::SubmitFeedback(request) => serde_json::to_value(request),
            Self::CreateScheduledJob(request) => serde_json::to_value(request),
            Self::GetScheduledJobs(request) => serde_json::to_value(request),
            Self::UpdateScheduledJob(request) => serde_json::to_value(request),
            Self::GetJobExecutions(request) => serde_json::to_value(request),
            Self::GetScheduledJob(job)
            | Self::PauseScheduledJob(job)
            | Self::ResumeScheduledJob(job)
            | Self::TriggerScheduledJob(job)
            | Self::DeleteScheduledJob(job) => serde_json::to_value(job),
        };

        payload.map_err(|error| {
            ClientError::invalid_request(format!(
                "failed to serialize '{}' request body: {error}",
                self.operation().as_str()
            ))
        })
    }
}
