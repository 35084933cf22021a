//! Deterministic in-memory scrape client for tests and offline demos.
//!
//! Every call is recorded. Extraction operations return fixed payloads,
//! scheduled jobs live in memory, and the client can be switched into a
//! failing mode to check error propagation.
//!
//! ```rust
//! # #[cfg(feature = "testing")]
//! # {
//! use sgclient::testing::InMemoryScrapeClient;
//! use sgclient::{ClientRequest, ScrapeClient};
//!
//! let client = InMemoryScrapeClient::new();
//! let credits = client.execute(ClientRequest::GetCredits).expect("credits should load");
//!
//! assert_eq!(credits["remaining_credits"], 50);
//! assert_eq!(client.call_count(), 1);
//! # }
//! ```

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use serde_json::{Value, json};

use crate::{
    AgenticScraperRequest, ClientError, ClientRequest, ClientResponse, CreateJobRequest,
    FeedbackRequest, JobExecutionsRequest, JobRef, JsonMap, ListJobsRequest, LocalScraperRequest,
    Operation, ScrapeClient, ScrapeRequest, SearchScraperRequest, SmartCrawlerRequest,
    SmartScraperRequest, UpdateJobRequest,
};

pub const DEFAULT_MAIN_HEADING: &str = "Example Domain";

#[derive(Debug, Default)]
struct InMemoryState {
    calls: Vec<ClientRequest>,
    jobs: BTreeMap<u64, JsonMap>,
    executions: Vec<JsonMap>,
    next_id: u64,
}

impl InMemoryState {
    fn next_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    fn timestamp(&self) -> String {
        let tick = self.next_id;
        format!("2025-01-01T09:{:02}:{:02}Z", (tick / 60) % 60, tick % 60)
    }
}

#[derive(Debug, Default)]
pub struct InMemoryScrapeClient {
    state: Mutex<InMemoryState>,
    failure: Option<ClientError>,
}

impl InMemoryScrapeClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Client whose every call fails with `error` after being recorded.
    pub fn failing(error: ClientError) -> Self {
        Self {
            state: Mutex::new(InMemoryState::default()),
            failure: Some(error),
        }
    }

    pub fn calls(&self) -> Vec<ClientRequest> {
        self.lock().calls.clone()
    }

    pub fn operations(&self) -> Vec<Operation> {
        self.lock()
            .calls
            .iter()
            .map(ClientRequest::operation)
            .collect()
    }

    pub fn call_count(&self) -> usize {
        self.lock().calls.len()
    }

    pub fn last_call(&self) -> Option<ClientRequest> {
        self.lock().calls.last().cloned()
    }

    fn lock(&self) -> MutexGuard<'_, InMemoryState> {
        self.state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn smartscraper(state: &mut InMemoryState, request: &SmartScraperRequest) -> ClientResponse {
        let main_heading = request
            .website_html
            .as_deref()
            .and_then(first_heading)
            .unwrap_or_else(|| DEFAULT_MAIN_HEADING.to_string());
        let request_id = format!("req-{}", state.next_id());

        into_map(json!({
            "request_id": request_id,
            "status": "completed",
            "website_url": request.website_url,
            "user_prompt": request.user_prompt,
            "result": {
                "main_heading": main_heading,
                "first_paragraph": "Test paragraph",
            },
            "error": "",
        }))
    }

    fn localscraper(state: &mut InMemoryState, request: &LocalScraperRequest) -> ClientResponse {
        let request_id = format!("req-{}", state.next_id());

        into_map(json!({
            "request_id": request_id,
            "status": "completed",
            "user_prompt": request.user_prompt,
            "result": {
                "main_heading": first_heading(&request.website_html).unwrap_or_default(),
            },
            "error": "",
        }))
    }

    fn smartcrawler(state: &mut InMemoryState, request: &SmartCrawlerRequest) -> ClientResponse {
        let request_id = format!("crawl-{}", state.next_id());

        into_map(json!({
            "request_id": request_id,
            "status": "success",
            "result": {
                "url": request.url,
                "pages_crawled": request.max_pages,
                "depth": request.depth,
                "same_domain_only": request.same_domain_only,
                "company_description": "Example company",
            },
        }))
    }

    fn scrape(state: &mut InMemoryState, request: &ScrapeRequest) -> ClientResponse {
        let request_id = format!("scrape-{}", state.next_id());

        into_map(json!({
            "scrape_request_id": request_id,
            "status": "success",
            "html": format!(
                "<html><body><h1>{DEFAULT_MAIN_HEADING}</h1><p>{}</p></body></html>",
                request.website_url
            ),
            "render_heavy_js": request.render_heavy_js,
            "headers": request.headers,
            "error": Value::Null,
        }))
    }

    fn searchscraper(state: &mut InMemoryState, request: &SearchScraperRequest) -> ClientResponse {
        let request_id = format!("search-{}", state.next_id());
        let reference_urls = json!(["https://example.com/product", "https://example.com/pricing"]);

        if !request.extraction_mode {
            return into_map(json!({
                "request_id": request_id,
                "status": "completed",
                "user_prompt": request.user_prompt,
                "markdown_content": "# Product X\n\n- Feature A\n- Feature B",
                "reference_urls": reference_urls,
            }));
        }

        into_map(json!({
            "request_id": request_id,
            "status": "completed",
            "user_prompt": request.user_prompt,
            "result": {
                "product": {"name": "Product X"},
                "features": [{"name": "Feature A"}, {"name": "Feature B"}],
                "reference_urls": reference_urls,
            },
            "reference_urls": reference_urls,
        }))
    }

    fn agenticscraper(
        state: &mut InMemoryState,
        request: &AgenticScraperRequest,
    ) -> ClientResponse {
        let request_id = format!("agentic-{}", state.next_id());
        let result = if request.ai_extraction {
            json!({
                "url": request.url,
                "steps_completed": request.steps.len(),
            })
        } else {
            Value::Null
        };

        into_map(json!({
            "request_id": request_id,
            "status": "completed",
            "url": request.url,
            "steps_executed": request.steps,
            "use_session": request.use_session,
            "result": result,
        }))
    }

    fn feedback(state: &mut InMemoryState, request: &FeedbackRequest) -> ClientResponse {
        let feedback_id = format!("feedback-{}", state.next_id());

        into_map(json!({
            "feedback_id": feedback_id,
            "request_id": request.request_id,
            "rating": request.rating,
            "message": "Feedback submitted successfully",
            "feedback_timestamp": state.timestamp(),
        }))
    }

    fn create_job(state: &mut InMemoryState, request: &CreateJobRequest) -> ClientResponse {
        let id = state.next_id();
        let now = state.timestamp();
        let mut job = into_map(json!({
            "id": format!("job-{id}"),
            "job_name": request.job_name,
            "service_type": request.service_type,
            "cron_expression": request.cron_expression,
            "job_config": request.job_config,
            "is_active": request.is_active,
            "created_at": now,
            "updated_at": now,
        }));
        if request.is_active {
            job.insert("next_run_at".to_string(), now.into());
        }

        state.jobs.insert(id, job.clone());
        job
    }

    fn list_jobs(state: &InMemoryState, request: &ListJobsRequest) -> ClientResponse {
        let matching = state
            .jobs
            .values()
            .filter(|job| {
                request
                    .service_type
                    .as_deref()
                    .is_none_or(|service| job["service_type"] == service)
            })
            .filter(|job| {
                request
                    .is_active
                    .is_none_or(|active| job["is_active"] == active)
            })
            .cloned()
            .map(Value::Object)
            .collect::<Vec<_>>();

        paginate("jobs", matching, request.page, request.page_size)
    }

    fn job_mut<'s>(
        state: &'s mut InMemoryState,
        job_id: &str,
    ) -> Result<&'s mut JsonMap, ClientError> {
        parse_job_id(job_id)
            .and_then(|id| state.jobs.get_mut(&id))
            .ok_or_else(|| ClientError::not_found(format!("scheduled job '{job_id}' not found")))
    }

    fn update_job(
        state: &mut InMemoryState,
        request: &UpdateJobRequest,
    ) -> Result<ClientResponse, ClientError> {
        let now = state.timestamp();
        let job = Self::job_mut(state, &request.job_id)?;

        if let Some(job_name) = &request.job_name {
            job.insert("job_name".to_string(), job_name.clone().into());
        }
        if let Some(cron_expression) = &request.cron_expression {
            job.insert("cron_expression".to_string(), cron_expression.clone().into());
        }
        if let Some(job_config) = &request.job_config {
            job.insert("job_config".to_string(), Value::Object(job_config.clone()));
        }
        if let Some(is_active) = request.is_active {
            job.insert("is_active".to_string(), is_active.into());
        }
        job.insert("updated_at".to_string(), now.into());

        Ok(job.clone())
    }

    fn set_active(
        state: &mut InMemoryState,
        job: &JobRef,
        active: bool,
    ) -> Result<ClientResponse, ClientError> {
        let now = state.timestamp();
        let record = Self::job_mut(state, &job.job_id)?;
        record.insert("is_active".to_string(), active.into());
        if active {
            record.insert("next_run_at".to_string(), now.clone().into());
        } else {
            record.remove("next_run_at");
        }

        let message = if active {
            "Job resumed successfully"
        } else {
            "Job paused successfully"
        };
        let mut response = into_map(json!({
            "job_id": job.job_id,
            "is_active": active,
            "message": message,
        }));
        if active {
            response.insert("next_run_at".to_string(), now.into());
        }

        Ok(response)
    }

    fn trigger_job(state: &mut InMemoryState, job: &JobRef) -> Result<ClientResponse, ClientError> {
        Self::job_mut(state, &job.job_id)?;
        let execution_id = format!("exec-{}", state.next_id());
        let now = state.timestamp();

        state.executions.push(into_map(json!({
            "id": execution_id,
            "job_id": job.job_id,
            "status": "pending",
            "started_at": now,
        })));

        Ok(into_map(json!({
            "job_id": job.job_id,
            "execution_id": execution_id,
            "message": "Job triggered successfully",
            "triggered_at": now,
        })))
    }

    fn delete_job(state: &mut InMemoryState, job: &JobRef) -> Result<ClientResponse, ClientError> {
        let removed = parse_job_id(&job.job_id).and_then(|id| state.jobs.remove(&id));
        if removed.is_none() {
            return Err(ClientError::not_found(format!(
                "scheduled job '{}' not found",
                job.job_id
            )));
        }

        state
            .executions
            .retain(|execution| execution["job_id"] != job.job_id.as_str());

        Ok(into_map(json!({
            "job_id": job.job_id,
            "message": "Job deleted successfully",
        })))
    }

    fn list_executions(
        state: &mut InMemoryState,
        request: &JobExecutionsRequest,
    ) -> Result<ClientResponse, ClientError> {
        Self::job_mut(state, &request.job_id)?;

        let matching = state
            .executions
            .iter()
            .filter(|execution| execution["job_id"] == request.job_id.as_str())
            .filter(|execution| {
                request
                    .status
                    .as_deref()
                    .is_none_or(|status| execution["status"] == status)
            })
            .cloned()
            .map(Value::Object)
            .collect::<Vec<_>>();

        Ok(paginate(
            "executions",
            matching,
            request.page,
            request.page_size,
        ))
    }
}

impl ScrapeClient for InMemoryScrapeClient {
    fn execute(&self, request: ClientRequest) -> Result<ClientResponse, ClientError> {
        let mut state = self.lock();
        state.calls.push(request.clone());

        if let Some(error) = &self.failure {
            return Err(error.clone());
        }

        let state = &mut *state;
        match &request {
            ClientRequest::SmartScraper(request) => Ok(Self::smartscraper(state, request)),
            ClientRequest::LocalScraper(request) => Ok(Self::localscraper(state, request)),
            ClientRequest::SmartCrawler(request) => Ok(Self::smartcrawler(state, request)),
            ClientRequest::Markdownify(request) => Ok(into_map(json!({
                "request_id": format!("md-{}", state.next_id()),
                "status": "completed",
                "website_url": request.website_url,
                "result": "# Example Domain\n\nThis domain is for use in illustrative examples.",
                "error": "",
            }))),
            ClientRequest::Scrape(request) => Ok(Self::scrape(state, request)),
            ClientRequest::SearchScraper(request) => Ok(Self::searchscraper(state, request)),
            ClientRequest::AgenticScraper(request) => Ok(Self::agenticscraper(state, request)),
            ClientRequest::GetCredits => Ok(into_map(json!({
                "remaining_credits": 50,
                "total_credits_used": 543,
            }))),
            ClientRequest::SubmitFeedback(request) => Ok(Self::feedback(state, request)),
            ClientRequest::CreateScheduledJob(request) => Ok(Self::create_job(state, request)),
            ClientRequest::GetScheduledJobs(request) => Ok(Self::list_jobs(state, request)),
            ClientRequest::GetScheduledJob(job) => Self::job_mut(state, &job.job_id).cloned(),
            ClientRequest::UpdateScheduledJob(request) => Self::update_job(state, request),
            ClientRequest::PauseScheduledJob(job) => Self::set_active(state, job, false),
            ClientRequest::ResumeScheduledJob(job) => Self::set_active(state, job, true),
            ClientRequest::TriggerScheduledJob(job) => Self::trigger_job(state, job),
            ClientRequest::DeleteScheduledJob(job) => Self::delete_job(state, job),
            ClientRequest::GetJobExecutions(request) => Self::list_executions(state, request),
        }
    }
}

fn into_map(value: Value) -> JsonMap {
    match value {
        Value::Object(map) => map,
        _ => JsonMap::new(),
    }
}

fn parse_job_id(job_id: &str) -> Option<u64> {
    job_id.strip_prefix("job-")?.parse().ok()
}

fn paginate(key: &str, items: Vec<Value>, page: u32, page_size: u32) -> ClientResponse {
    let total = items.len();
    let skip = (page.saturating_sub(1) as usize).saturating_mul(page_size as usize);
    let page_items = items
        .into_iter()
        .skip(skip)
        .take(page_size as usize)
        .collect::<Vec<_>>();

    let mut response = JsonMap::new();
    response.insert(key.to_string(), Value::Array(page_items));
    response.insert("total".to_string(), total.into());
    response.insert("page".to_string(), page.into());
    response.insert("page_size".to_string(), page_size.into());
    response
}

/// Text of the first `<h1>` element, if any.
fn first_heading(html: &str) -> Option<String> {
    // ASCII lowercasing keeps byte offsets aligned with the original text.
    let lowered = html.to_ascii_lowercase();
    let open = lowered.find("<h1")?;
    let content_start = open + lowered[open..].find('>')? + 1;
    let content_len = lowered[content_start..].find("</h1>")?;
    Some(html[content_start..content_start + content_len].trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ClientErrorKind;

    fn create(client: &InMemoryScrapeClient, name: &str, service: &str, active: bool) -> String {
        let job = client
            .execute(ClientRequest::CreateScheduledJob(CreateJobRequest {
                job_name: name.to_string(),
                service_type: service.to_string(),
                cron_expression: "0 9 * * *".to_string(),
                job_config: JsonMap::new(),
                is_active: active,
            }))
            .expect("create should succeed");

        job["id"].as_str().expect("job id").to_string()
    }

    #[test]
    fn first_heading_reads_h1_contents() {
        assert_eq!(
            first_heading("<html><body><h1>Test</h1></body></html>").as_deref(),
            Some("Test")
        );
        assert_eq!(
            first_heading("<h1 class=\"title\"> Spaced </h1>").as_deref(),
            Some("Spaced")
        );
        assert_eq!(
            first_heading("<BODY><H1>Upper</H1></BODY>").as_deref(),
            Some("Upper")
        );
        assert_eq!(first_heading("<p>no heading</p>"), None);
    }

    #[test]
    fn listing_filters_and_counts_matching_jobs() {
        let client = InMemoryScrapeClient::new();
        create(&client, "a", "smartscraper", true);
        create(&client, "b", "smartscraper", false);
        create(&client, "c", "searchscraper", true);
        create(&client, "d", "smartscraper", true);

        let response = client
            .execute(ClientRequest::GetScheduledJobs(ListJobsRequest {
                page: 1,
                page_size: 10,
                service_type: Some("smartscraper".to_string()),
                is_active: Some(true),
            }))
            .expect("listing should succeed");

        let jobs = response["jobs"].as_array().expect("jobs array");
        assert_eq!(jobs.len(), 2);
        assert_eq!(response["total"], 2);
        assert!(jobs.iter().all(|job| job["service_type"] == "smartscraper"));
        assert!(jobs.iter().all(|job| job["is_active"] == true));
    }

    #[test]
    fn listing_paginates_after_filtering() {
        let client = InMemoryScrapeClient::new();
        for index in 0..5 {
            create(&client, &format!("job {index}"), "markdownify", true);
        }

        let response = client
            .execute(ClientRequest::GetScheduledJobs(ListJobsRequest {
                page: 2,
                page_size: 2,
                service_type: None,
                is_active: None,
            }))
            .expect("listing should succeed");

        assert_eq!(response["jobs"].as_array().map(Vec::len), Some(2));
        assert_eq!(response["total"], 5);
        assert_eq!(response["jobs"][0]["job_name"], "job 2");
    }

    #[test]
    fn pause_resume_and_trigger_track_job_state() {
        let client = InMemoryScrapeClient::new();
        let job_id = create(&client, "daily", "smartscraper", true);

        let paused = client
            .execute(ClientRequest::PauseScheduledJob(JobRef::new(&job_id)))
            .expect("pause should succeed");
        assert_eq!(paused["is_active"], false);

        let resumed = client
            .execute(ClientRequest::ResumeScheduledJob(JobRef::new(&job_id)))
            .expect("resume should succeed");
        assert_eq!(resumed["is_active"], true);
        assert!(resumed.contains_key("next_run_at"));

        client
            .execute(ClientRequest::TriggerScheduledJob(JobRef::new(&job_id)))
            .expect("trigger should succeed");
        let executions = client
            .execute(ClientRequest::GetJobExecutions(JobExecutionsRequest {
                job_id: job_id.clone(),
                page: 1,
                page_size: 5,
                status: None,
            }))
            .expect("executions should list");
        assert_eq!(executions["total"], 1);
        assert_eq!(executions["executions"][0]["status"], "pending");
    }

    #[test]
    fn unknown_jobs_are_not_found() {
        let client = InMemoryScrapeClient::new();
        let error = client
            .execute(ClientRequest::GetScheduledJob(JobRef::new("job-404")))
            .expect_err("lookup should fail");
        assert_eq!(error.kind, ClientErrorKind::NotFound);

        let delete = client
            .execute(ClientRequest::DeleteScheduledJob(JobRef::new("not-a-job")))
            .expect_err("delete should fail");
        assert_eq!(delete.kind, ClientErrorKind::NotFound);
    }

    #[test]
    fn failing_client_records_and_returns_configured_error() {
        let client = InMemoryScrapeClient::failing(ClientError::from_status(401, "bad key"));
        let error = client
            .execute(ClientRequest::GetCredits)
            .expect_err("call should fail");

        assert_eq!(error.kind, ClientErrorKind::Authentication);
        assert_eq!(client.operations(), vec![Operation::GetCredits]);
    }
}
