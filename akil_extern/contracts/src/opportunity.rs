use std::future::Future;

use akil_models::job::{Job, JobDetail, JobId};
use thiserror::Error;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait OpportunityApiService: Send + Sync + 'static {
    /// Fetch the full list of job postings.
    fn search(&self) -> impl Future<Output = anyhow::Result<Vec<Job>>> + Send;

    /// Fetch the extended posting for a single job.
    fn get(
        &self,
        job_id: JobId,
    ) -> impl Future<Output = Result<JobDetail, OpportunityGetError>> + Send;
}

#[derive(Debug, Error)]
pub enum OpportunityGetError {
    #[error("The job posting does not exist.")]
    NotFound,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(feature = "mock")]
impl MockOpportunityApiService {
    pub fn with_search(mut self, result: anyhow::Result<Vec<Job>>) -> Self {
        self.expect_search()
            .once()
            .return_once(move || Box::pin(std::future::ready(result)));
        self
    }

    pub fn with_get(
        mut self,
        job_id: JobId,
        result: Result<JobDetail, OpportunityGetError>,
    ) -> Self {
        self.expect_get()
            .once()
            .with(mockall::predicate::eq(job_id))
            .return_once(|_| Box::pin(std::future::ready(result)));
        self
    }
}
