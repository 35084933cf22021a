//! Static table of every tool the adapter exposes.
//!
//! Each [`ToolKind`] has exactly one [`ToolDescriptor`], built once on first
//! access, that carries its name, description, input schema, return-direct
//! flag, and the rule used to shape the service response.
//!
//! ```rust
//! use sgtools::{ToolKind, catalog};
//!
//! let feedback = ToolKind::SubmitFeedback.descriptor();
//! assert_eq!(feedback.name, "SubmitFeedback");
//! assert!(feedback.return_direct);
//! assert_eq!(catalog().len(), ToolKind::ALL.len());
//! ```

use once_cell::sync::Lazy;
use sgclient::Operation;
use sgtooling::{FieldSpec, InputSchema, ToolDefinition};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ToolKind {
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

impl ToolKind {
    pub const ALL: [ToolKind; 18] = [
        ToolKind::SmartScraper,
        ToolKind::LocalScraper,
        ToolKind::SmartCrawler,
        ToolKind::Markdownify,
        ToolKind::Scrape,
        ToolKind::SearchScraper,
        ToolKind::AgenticScraper,
        ToolKind::GetCredits,
        ToolKind::SubmitFeedback,
        ToolKind::CreateScheduledJob,
        ToolKind::GetScheduledJobs,
        ToolKind::GetScheduledJob,
        ToolKind::UpdateScheduledJob,
        ToolKind::PauseScheduledJob,
        ToolKind::ResumeScheduledJob,
        ToolKind::TriggerScheduledJob,
        ToolKind::DeleteScheduledJob,
        ToolKind::GetJobExecutions,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::SmartScraper => "SmartScraper",
            Self::LocalScraper => "LocalScraper",
            Self::SmartCrawler => "SmartCrawler",
            Self::Markdownify => "Markdownify",
            Self::Scrape => "Scrape",
            Self::SearchScraper => "SearchScraper",
            Self::AgenticScraper => "AgenticScraper",
            Self::GetCredits => "GetCredits",
            Self::SubmitFeedback => "SubmitFeedback",
            Self::CreateScheduledJob => "CreateScheduledJob",
            Self::GetScheduledJobs => "GetScheduledJobs",
            Self::GetScheduledJob => "GetScheduledJob",
            Self::UpdateScheduledJob => "UpdateScheduledJob",
            Self::PauseScheduledJob => "PauseScheduledJob",
            Self::ResumeScheduledJob => "ResumeScheduledJob",
            Self::TriggerScheduledJob => "TriggerScheduledJob",
            Self::DeleteScheduledJob => "DeleteScheduledJob",
            Self::GetJobExecutions => "GetJobExecutions",
        }
    }

    pub fn operation(self) -> Operation {
        match self {
            Self::SmartScraper => Operation::SmartScraper,
            Self::LocalScraper => Operation::LocalScraper,
            Self::SmartCrawler => Operation::SmartCrawler,
            Self::Markdownify => Operation::Markdownify,
            Self::Scrape => Operation::Scrape,
            Self::SearchScraper => Operation::SearchScraper,
            Self::AgenticScraper => Operation::AgenticScraper,
            Self::GetCredits => Operation::GetCredits,
            Self::SubmitFeedback => Operation::SubmitFeedback,
            Self::CreateScheduledJob => Operation::CreateScheduledJob,
            Self::GetScheduledJobs => Operation::GetScheduledJobs,
            Self::GetScheduledJob => Operation::GetScheduledJob,
            Self::UpdateScheduledJob => Operation::UpdateScheduledJob,
            Self::PauseScheduledJob => Operation::PauseScheduledJob,
            Self::ResumeScheduledJob => Operation::ResumeScheduledJob,
            Self::TriggerScheduledJob => Operation::TriggerScheduledJob,
            Self::DeleteScheduledJob => Operation::DeleteScheduledJob,
            Self::GetJobExecutions => Operation::GetJobExecutions,
        }
    }

    pub fn family(self) -> ToolFamily {
        match self {
            Self::SmartScraper | Self::LocalScraper | Self::SmartCrawler => {
                ToolFamily::SingleExtraction
            }
            Self::Markdownify | Self::Scrape => ToolFamily::RawContent,
            Self::SearchScraper => ToolFamily::SearchExtract,
            Self::AgenticScraper => ToolFamily::AgenticBrowsing,
            Self::GetCredits | Self::SubmitFeedback => ToolFamily::Account,
            _ => ToolFamily::ScheduledJobs,
        }
    }

    /// Whether an output-shape descriptor can be configured for this tool.
    pub fn supports_output_schema(self) -> bool {
        self.operation().supports_output_schema()
    }

    pub fn descriptor(self) -> &'static ToolDescriptor {
        &CATALOG[self as usize]
    }
}

impl std::fmt::Display for ToolKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolFamily {
    SingleExtraction,
    RawContent,
    SearchExtract,
    AgenticBrowsing,
    Account,
    ScheduledJobs,
}

/// How a successful service response becomes the tool output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputShape {
    /// The `result` field, which must be present.
    ResultField,
    /// The response mapping as returned.
    Verbatim,
    /// `result` when the named flag is on, otherwise
    /// `{markdown_content, reference_urls}`.
    SearchMode { flag: &'static str },
    /// `result` when the named flag is on, otherwise the whole response.
    ResultWhen { flag: &'static str },
}

#[derive(Debug, Clone)]
pub struct ToolDescriptor {
    pub kind: ToolKind,
    pub name: &'static str,
    pub description: &'static str,
    pub input_schema: InputSchema,
    pub return_direct: bool,
    pub output: OutputShape,
}

impl ToolDescriptor {
    pub fn operation(&self) -> Operation {
        self.kind.operation()
    }

    pub fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: self.name.to_string(),
            description: self.description.to_string(),
            input_schema: self.input_schema.to_json_schema().to_string(),
            return_direct: self.return_direct,
        }
    }
}

static CATALOG: Lazy<Vec<ToolDescriptor>> =
    Lazy::new(|| ToolKind::ALL.iter().copied().map(build_descriptor).collect());

/// Every descriptor, in [`ToolKind::ALL`] order.
pub fn catalog() -> &'static [ToolDescriptor] {
    &CATALOG
}

fn job_id_schema() -> InputSchema {
    InputSchema::new().field(FieldSpec::string("job_id", "ID of the scheduled job").required())
}

fn page_fields(schema: InputSchema) -> InputSchema {
    schema
        .field(
            FieldSpec::integer("page", "Page number, starting at 1")
                .with_min(1)
                .with_default(1),
        )
        .field(
            FieldSpec::integer("page_size", "Number of items per page")
                .with_range(1, 100)
                .with_default(20),
        )
}

fn build_descriptor(kind: ToolKind) -> ToolDescriptor {
    let (description, input_schema, output) = match kind {
        ToolKind::SmartScraper => (
            "Useful when you need to extract structured data from a webpage, applying also some \
             reasoning using LLM, by providing a webpage URL and an extraction prompt",
            InputSchema::new()
                .field(
                    FieldSpec::string(
                        "user_prompt",
                        "Prompt describing what to extract from the webpage and how to structure the output",
                    )
                    .required(),
                )
                .field(
                    FieldSpec::string("website_url", "Url of the webpage to extract data from")
                        .required(),
                )
                .field(FieldSpec::string(
                    "website_html",
                    "Optional HTML content to process instead of fetching from the URL",
                )),
            OutputShape::ResultField,
        ),
        ToolKind::LocalScraper => (
            "Useful when you need to extract structured data from a HTML webpage, applying also \
             some reasoning using LLM, by providing an HTML string and an extraction prompt",
            InputSchema::new()
                .field(
                    FieldSpec::string(
                        "user_prompt",
                        "Prompt describing what to extract from the webpage and how to structure the output",
                    )
                    .required(),
                )
                .field(
                    FieldSpec::string("website_html", "HTML of the webpage to extract data from")
                        .required(),
                ),
            OutputShape::ResultField,
        ),
        ToolKind::SmartCrawler => (
            "Useful when you need to extract structured data from multiple pages of a website by \
             crawling from a starting URL with an extraction prompt",
            InputSchema::new()
                .field(FieldSpec::string("url", "URL of the website to start crawling from").required())
                .field(
                    FieldSpec::string("prompt", "Prompt describing what to extract from the crawled pages")
                        .required(),
                )
                .field(
                    FieldSpec::boolean("cache_website", "Whether to cache crawled pages")
                        .with_default(false),
                )
                .field(
                    FieldSpec::integer("depth", "Maximum link depth to follow")
                        .with_range(1, 10)
                        .with_default(2),
                )
                .field(
                    FieldSpec::integer("max_pages", "Maximum number of pages to crawl")
                        .with_range(1, 100)
                        .with_default(2),
                )
                .field(
                    FieldSpec::boolean("same_domain_only", "Only follow links on the starting domain")
                        .with_default(true),
                ),
            OutputShape::ResultField,
        ),
        ToolKind::Markdownify => (
            "Useful when you need to convert a webpage to clean markdown format",
            InputSchema::new().field(
                FieldSpec::string("website_url", "Url of the webpage to convert to markdown")
                    .required(),
            ),
            OutputShape::ResultField,
        ),
        ToolKind::Scrape => (
            "Useful when you need to fetch the raw HTML of a webpage, optionally rendering heavy \
             JavaScript and sending custom headers",
            InputSchema::new()
                .field(FieldSpec::string("website_url", "Url of the webpage to fetch").required())
                .field(
                    FieldSpec::boolean("render_heavy_js", "Render JavaScript-heavy pages before capture")
                        .with_default(false),
                )
                .field(FieldSpec::string_map("headers", "Custom HTTP headers to send with the request")),
            OutputShape::Verbatim,
        ),
        ToolKind::SearchScraper => (
            "Useful when you need to search and extract structured information from the web about \
             a specific topic or query",
            InputSchema::new()
                .field(
                    FieldSpec::string(
                        "user_prompt",
                        "Prompt describing what information to search for and extract from the web",
                    )
                    .required(),
                )
                .field(
                    FieldSpec::boolean(
                        "extraction_mode",
                        "If true, use AI extraction mode. If false, return markdown content",
                    )
                    .with_default(true),
                ),
            OutputShape::SearchMode {
                flag: "extraction_mode",
            },
        ),
        ToolKind::AgenticScraper => (
            "Useful when you need to navigate a website through a sequence of browser steps and \
             optionally extract structured data from the final page",
            InputSchema::new()
                .field(FieldSpec::string("url", "URL of the website to start from").required())
                .field(
                    FieldSpec::string_list("steps", "Browser steps to perform, in order")
                        .required()
                        .non_empty(),
                )
                .field(
                    FieldSpec::boolean("use_session", "Keep a browser session across steps")
                        .with_default(true),
                )
                .field(
                    FieldSpec::boolean("ai_extraction", "Extract structured data after the steps")
                        .with_default(false),
                )
                .field(FieldSpec::string(
                    "user_prompt",
                    "Extraction prompt, required when ai_extraction is true",
                ))
                .field(FieldSpec::object(
                    "output_schema",
                    "Optional schema describing the structure of the extracted data",
                ))
                .require_when("user_prompt", "ai_extraction"),
            OutputShape::ResultWhen {
                flag: "ai_extraction",
            },
        ),
        ToolKind::GetCredits => (
            "Get the current credits available in your ScrapeGraph AI account",
            InputSchema::new(),
            OutputShape::Verbatim,
        ),
        ToolKind::SubmitFeedback => (
            "Submit feedback for a previous ScrapeGraph AI request",
            InputSchema::new()
                .field(
                    FieldSpec::string("request_id", "The ID of the request to provide feedback for")
                        .required(),
                )
                .field(
                    FieldSpec::integer("rating", "Rating from 1-5")
                        .required()
                        .with_range(1, 5),
                )
                .field(FieldSpec::string("feedback_text", "Detailed feedback text").required()),
            OutputShape::Verbatim,
        ),
        ToolKind::CreateScheduledJob => (
            "Create a scheduled job that runs a scraping service on a cron schedule",
            InputSchema::new()
                .field(FieldSpec::string("job_name", "Name of the scheduled job").required())
                .field(
                    FieldSpec::string("service_type", "Service to run, e.g. smartscraper")
                        .required(),
                )
                .field(
                    FieldSpec::string("cron_expression", "Cron expression for the schedule")
                        .required(),
                )
                .field(
                    FieldSpec::object("job_config", "Configuration payload for the service")
                        .required(),
                )
                .field(
                    FieldSpec::boolean("is_active", "Whether the job starts active")
                        .with_default(true),
                ),
            OutputShape::Verbatim,
        ),
        ToolKind::GetScheduledJobs => (
            "List scheduled jobs with optional filtering and pagination",
            page_fields(InputSchema::new())
                .field(FieldSpec::string("service_type", "Only list jobs for this service"))
                .field(FieldSpec::boolean("is_active", "Only list active or inactive jobs")),
            OutputShape::Verbatim,
        ),
        ToolKind::GetScheduledJob => (
            "Get the details of a scheduled job",
            job_id_schema(),
            OutputShape::Verbatim,
        ),
        ToolKind::UpdateScheduledJob => (
            "Update the name, schedule, configuration or status of a scheduled job",
            job_id_schema()
                .field(FieldSpec::string("job_name", "New job name"))
                .field(FieldSpec::string("cron_expression", "New cron expression"))
                .field(FieldSpec::object("job_config", "New configuration payload"))
                .field(FieldSpec::boolean("is_active", "New active status")),
            OutputShape::Verbatim,
        ),
        ToolKind::PauseScheduledJob => (
            "Pause a scheduled job",
            job_id_schema(),
            OutputShape::Verbatim,
        ),
        ToolKind::ResumeScheduledJob => (
            "Resume a paused scheduled job",
            job_id_schema(),
            OutputShape::Verbatim,
        ),
        ToolKind::TriggerScheduledJob => (
            "Trigger an immediate run of a scheduled job",
            job_id_schema(),
            OutputShape::Verbatim,
        ),
        ToolKind::DeleteScheduledJob => (
            "Delete a scheduled job",
            job_id_schema(),
            OutputShape::Verbatim,
        ),
        ToolKind::GetJobExecutions => (
            "Get the execution history of a scheduled job",
            page_fields(job_id_schema())
                .field(FieldSpec::string("status", "Only list executions with this status")),
            OutputShape::Verbatim,
        ),
    };

    let return_direct = !matches!(
        kind,
        ToolKind::GetScheduledJobs | ToolKind::GetScheduledJob | ToolKind::GetJobExecutions
    );

    ToolDescriptor {
        kind,
        name: kind.name(),
        description,
        input_schema,
        return_direct,
        output,
    }
}
