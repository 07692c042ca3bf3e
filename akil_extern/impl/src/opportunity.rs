use std::sync::Arc;

use akil_extern_contracts::opportunity::{OpportunityApiService, OpportunityGetError};
use akil_models::job::{Job, JobDetail, JobId, JobTitle};
use anyhow::Context;
use chrono::{DateTime, Utc};
use reqwest::StatusCode;
use serde::Deserialize;
use url::Url;

use crate::http::{endpoint, HttpClient};

#[derive(Debug, Clone)]
pub struct OpportunityApiServiceImpl {
    config: OpportunityApiServiceConfig,
    client: HttpClient,
}

impl OpportunityApiServiceImpl {
    pub fn new(config: OpportunityApiServiceConfig, client: HttpClient) -> Self {
        Self { config, client }
    }
}

#[derive(Debug, Clone)]
pub struct OpportunityApiServiceConfig {
    base_url: Arc<Url>,
}

impl OpportunityApiServiceConfig {
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

impl OpportunityApiService for OpportunityApiServiceImpl {
    async fn search(&self) -> anyhow::Result<Vec<Job>> {
        let url = endpoint(&self.config.base_url, &["opportunities", "search"]);
        self.client
            .get(url)
            .send()
            .await
            .context("Failed to send opportunity search request")?
            .error_for_status()
            .context("Opportunity search request returned an error")?
            .json::<SearchResponse>()
            .await
            .context("Failed to deserialize opportunity search response")?
            .data
            .into_iter()
            .map(Job::try_from)
            .collect()
    }

    async fn get(&self, job_id: JobId) -> Result<JobDetail, OpportunityGetError> {
        let url = endpoint(&self.config.base_url, &["opportunities", job_id.as_str()]);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .context("Failed to send opportunity request")?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(OpportunityGetError::NotFound);
        }

        response
            .error_for_status()
            .context("Opportunity request returned an error")?
            .json::<DetailResponse>()
            .await
            .context("Failed to deserialize opportunity response")?
            .data
            .try_into()
            .map_err(Into::into)
    }
}

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(default)]
    data: Vec<JobDto>,
}

#[derive(Deserialize)]
struct DetailResponse {
    data: JobDetailDto,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct JobDto {
    id: JobId,
    #[serde(default)]
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    org_name: String,
    #[serde(default)]
    categories: Vec<String>,
    #[serde(default)]
    op_type: String,
    #[serde(default)]
    location: Vec<String>,
    #[serde(default)]
    logo_url: String,
}

impl TryFrom<JobDto> for Job {
    type Error = anyhow::Error;

    fn try_from(dto: JobDto) -> anyhow::Result<Self> {
        Ok(Self {
            id: dto.id,
            title: JobTitle::try_new(dto.title).context("Invalid job title in response")?,
            description: dto.description,
            org_name: dto.org_name,
            categories: dto.categories,
            op_type: dto.op_type,
            location: dto.location,
            // The remote uses an empty string for "no logo".
            logo_url: Some(dto.logo_url)
                .filter(|logo_url| !logo_url.is_empty())
                .and_then(|logo_url| logo_url.parse().ok()),
        })
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct JobDetailDto {
    #[serde(flatten)]
    job: JobDto,
    #[serde(default)]
    responsibilities: String,
    #[serde(default)]
    ideal_candidate: String,
    #[serde(default)]
    when_and_where: String,
    #[serde(default)]
    required_skills: Vec<String>,
    #[serde(default)]
    date_posted: Option<DateTime<Utc>>,
    #[serde(default)]
    deadline: Option<DateTime<Utc>>,
    #[serde(default)]
    start_date: Option<DateTime<Utc>>,
    #[serde(default)]
    end_date: Option<DateTime<Utc>>,
}

impl TryFrom<JobDetailDto> for JobDetail {
    type Error = anyhow::Error;

    fn try_from(dto: JobDetailDto) -> anyhow::Result<Self> {
        Ok(Self {
            job: dto.job.try_into()?,
            responsibilities: dto.responsibilities,
            ideal_candidate: dto.ideal_candidate,
            when_and_where: dto.when_and_where,
            required_skills: dto.required_skills,
            date_posted: dto.date_posted,
            deadline: dto.deadline,
            start_date: dto.start_date,
            end_date: dto.end_date,
        })
    }
}
