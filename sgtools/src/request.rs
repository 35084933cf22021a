//! Turns validated tool arguments into typed service requests.

use sgclient::{
    AgenticScraperRequest, ClientRequest, CreateJobRequest, FeedbackRequest, JobExecutionsRequest,
    JobRef, ListJobsRequest, LocalScraperRequest, MarkdownifyRequest, OutputSchema, ScrapeRequest,
    SearchScraperRequest, SmartCrawlerRequest, SmartScraperRequest, UpdateJobRequest,
};
use sgtooling::{ToolError, ValidatedArgs};

use crate::ToolKind;

/// Builds the request for `kind`. `output_schema` is the descriptor
/// configured on the tool; it is only forwarded to operations that accept one.
pub fn build_request(
    kind: ToolKind,
    args: &ValidatedArgs,
    output_schema: Option<&OutputSchema>,
) -> Result<ClientRequest, ToolError> {
    let schema = || output_schema.cloned();

    let request = match kind {
        ToolKind::SmartScraper => ClientRequest::SmartScraper(SmartScraperRequest {
            website_url: args.required_string("website_url")?,
            user_prompt: args.required_string("user_prompt")?,
            website_html: args.string("website_html"),
            output_schema: schema(),
        }),
        ToolKind::LocalScraper => ClientRequest::LocalScraper(LocalScraperRequest {
            website_html: args.required_string("website_html")?,
            user_prompt: args.required_string("user_prompt")?,
            output_schema: schema(),
        }),
        ToolKind::SmartCrawler => ClientRequest::SmartCrawler(SmartCrawlerRequest {
            url: args.required_string("url")?,
            prompt: args.required_string("prompt")?,
            cache_website: args.bool("cache_website").unwrap_or(false),
            depth: args.u32("depth")?.unwrap_or(2),
            max_pages: args.u32("max_pages")?.unwrap_or(2),
            same_domain_only: args.bool("same_domain_only").unwrap_or(true),
            output_schema: schema(),
        }),
        ToolKind::Markdownify => ClientRequest::Markdownify(MarkdownifyRequest {
            website_url: args.required_string("website_url")?,
        }),
        ToolKind::Scrape => ClientRequest::Scrape(ScrapeRequest {
            website_url: args.required_string("website_url")?,
            render_heavy_js: args.bool("render_heavy_js").unwrap_or(false),
            headers: args.string_map("headers").unwrap_or_default(),
        }),
        ToolKind::SearchScraper => {
            let extraction_mode = args.bool("extraction_mode").unwrap_or(true);
            ClientRequest::SearchScraper(SearchScraperRequest {
                user_prompt: args.required_string("user_prompt")?,
                extraction_mode,
                // Markdown mode has nothing to shape.
                output_schema: if extraction_mode { schema() } else { None },
            })
        }
        ToolKind::AgenticScraper => {
            let ai_extraction = args.bool("ai_extraction").unwrap_or(false);
            // Without extraction the service returns no result to shape.
            let output_schema = ai_extraction
                .then(|| {
                    args.object("output_schema")
                        .map(|mapping| OutputSchema::from_mapping(mapping.clone()))
                        .or_else(schema)
                })
                .flatten();
            ClientRequest::AgenticScraper(AgenticScraperRequest {
                url: args.required_string("url")?,
                steps: args.string_list("steps").unwrap_or_default(),
                use_session: args.bool("use_session").unwrap_or(true),
                ai_extraction,
                user_prompt: args.string("user_prompt"),
                output_schema,
            })
        }
        ToolKind::GetCredits => ClientRequest::GetCredits,
        ToolKind::SubmitFeedback => ClientRequest::SubmitFeedback(FeedbackRequest {
            request_id: args.required_string("request_id")?,
            rating: rating(args)?,
            feedback_text: args.required_string("feedback_text")?,
        }),
        ToolKind::CreateScheduledJob => ClientRequest::CreateScheduledJob(CreateJobRequest {
            job_name: args.required_string("job_name")?,
            service_type: args.required_string("service_type")?,
            cron_expression: args.required_string("cron_expression")?,
            job_config: args.object("job_config").cloned().unwrap_or_default(),
            is_active: args.bool("is_active").unwrap_or(true),
        }),
        ToolKind::GetScheduledJobs => ClientRequest::GetScheduledJobs(ListJobsRequest {
            page: args.u32("page")?.unwrap_or(1),
            page_size: args.u32("page_size")?.unwrap_or(20),
            service_type: args.string("service_type"),
            is_active: args.bool("is_active"),
        }),
        ToolKind::GetScheduledJob => ClientRequest::GetScheduledJob(job_ref(args)?),
        ToolKind::UpdateScheduledJob => ClientRequest::UpdateScheduledJob(UpdateJobRequest {
            job_id: args.required_string("job_id")?,
            job_name: args.string("job_name"),
            cron_expression: args.string("cron_expression"),
            job_config: args.object("job_config").cloned(),
            is_active: args.bool("is_active"),
        }),
        ToolKind::PauseScheduledJob => ClientRequest::PauseScheduledJob(job_ref(args)?),
        ToolKind::ResumeScheduledJob => ClientRequest::ResumeScheduledJob(job_ref(args)?),
        ToolKind::TriggerScheduledJob => ClientRequest::TriggerScheduledJob(job_ref(args)?),
        ToolKind::DeleteScheduledJob => ClientRequest::DeleteScheduledJob(job_ref(args)?),
        ToolKind::GetJobExecutions => ClientRequest::GetJobExecutions(JobExecutionsRequest {
            job_id: args.required_string("job_id")?,
            page: args.u32("page")?.unwrap_or(1),
            page_size: args.u32("page_size")?.unwrap_or(20),
            status: args.string("status"),
        }),
    };

    Ok(request)
}

fn job_ref(args: &ValidatedArgs) -> Result<JobRef, ToolError> {
    args.required_string("job_id").map(JobRef::new)
}

fn rating(args: &ValidatedArgs) -> Result<u8, ToolError> {
    let value = args
        .integer("rating")
        .ok_or_else(|| ToolError::invalid_arguments("missing required field 'rating'"))?;
    u8::try_from(value)
        .map_err(|_| ToolError::invalid_arguments(format!("rating {value} is out of range")))
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};
    use sgclient::JsonMap;

    use super::*;

    fn validated(kind: ToolKind, args: Value) -> ValidatedArgs {
        kind.descriptor()
            .input_schema
            .validate(args.as_object().expect("test args are objects"))
            .expect("test args should validate")
    }

    fn configured_schema() -> OutputSchema {
        let mut mapping = JsonMap::new();
        mapping.insert("title".to_string(), json!({"type": "string"}));
        OutputSchema::from_mapping(mapping)
    }

    #[test]
    fn smart_crawler_gets_schema_defaults() {
        let args = validated(
            ToolKind::SmartCrawler,
            json!({"url": "https://example.com", "prompt": "Company info"}),
        );

        let request =
            build_request(ToolKind::SmartCrawler, &args, None).expect("request should build");
        let ClientRequest::SmartCrawler(crawl) = request else {
            panic!("expected a crawl request");
        };
        assert!(!crawl.cache_website);
        assert_eq!(crawl.depth, 2);
        assert_eq!(crawl.max_pages, 2);
        assert!(crawl.same_domain_only);
    }

    #[test]
    fn search_markdown_mode_never_forwards_the_schema() {
        let schema = configured_schema();

        let markdown = validated(
            ToolKind::SearchScraper,
            json!({"user_prompt": "Product X", "extraction_mode": false}),
        );
        let request = build_request(ToolKind::SearchScraper, &markdown, Some(&schema))
            .expect("request should build");
        assert!(request.output_schema().is_none());

        let extraction = validated(ToolKind::SearchScraper, json!({"user_prompt": "Product X"}));
        let request = build_request(ToolKind::SearchScraper, &extraction, Some(&schema))
            .expect("request should build");
        assert_eq!(request.output_schema(), Some(&schema));
    }

    #[test]
    fn agentic_per_call_schema_overrides_the_configured_one() {
        let args = validated(
            ToolKind::AgenticScraper,
            json!({
                "url": "https://example.com",
                "steps": ["click login"],
                "ai_extraction": true,
                "user_prompt": "Extract the dashboard",
                "output_schema": {"dashboard": {"type": "object"}},
            }),
        );

        let request = build_request(ToolKind::AgenticScraper, &args, Some(&configured_schema()))
            .expect("request should build");
        let payload = request.payload().expect("payload should serialize");
        assert!(payload["output_schema"].get("dashboard").is_some());
        assert!(payload["output_schema"].get("title").is_none());
        assert_eq!(payload["use_session"], true);
    }

    #[test]
    fn agentic_without_extraction_drops_every_schema() {
        let args = validated(
            ToolKind::AgenticScraper,
            json!({
                "url": "https://example.com",
                "steps": ["click login"],
                "ai_extraction": false,
                "output_schema": {"x": {}},
            }),
        );

        let request = build_request(ToolKind::AgenticScraper, &args, Some(&configured_schema()))
            .expect("request should build");
        assert!(request.output_schema().is_none());
        let payload = request.payload().expect("payload should serialize");
        assert!(payload.get("output_schema").is_none());
        assert_eq!(payload["ai_extraction"], false);
    }

    #[test]
    fn job_listing_keeps_optional_filters() {
        let args = validated(
            ToolKind::GetScheduledJobs,
            json!({"service_type": "smartscraper", "is_active": true}),
        );

        let request =
            build_request(ToolKind::GetScheduledJobs, &args, None).expect("request should build");
        assert_eq!(
            request.payload().expect("payload should serialize"),
            json!({"page": 1, "page_size": 20, "service_type": "smartscraper", "is_active": true})
        );
    }

    #[test]
    fn update_job_sends_only_supplied_fields() {
        let args = validated(
            ToolKind::UpdateScheduledJob,
            json!({"job_id": "job-1", "cron_expression": "0 9 * * 1"}),
        );

        let request = build_request(ToolKind::UpdateScheduledJob, &args, None)
            .expect("request should build");
        assert_eq!(
            request.payload().expect("payload should serialize"),
            json!({"job_id": "job-1", "cron_expression": "0 9 * * 1"})
        );
    }
}
