use std::future::Future;

use akil_models::{job::JobId, session::AccessToken};

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait BookmarkApiService: Send + Sync + 'static {
    /// Fetch the ids of all jobs bookmarked by the token's owner.
    fn list(
        &self,
        access_token: AccessToken,
    ) -> impl Future<Output = anyhow::Result<Vec<JobId>>> + Send;

    /// Bookmark the given job for the token's owner.
    fn add(
        &self,
        access_token: AccessToken,
        job_id: JobId,
    ) -> impl Future<Output = anyhow::Result<()>> + Send;

    /// Remove the given job from the token owner's bookmarks.
    fn remove(
        &self,
        access_token: AccessToken,
        job_id: JobId,
    ) -> impl Future<Output = anyhow::Result<()>> + Send;
}

#[cfg(feature = "mock")]
impl MockBookmarkApiService {
    pub fn with_list(
        mut self,
        access_token: AccessToken,
        result: anyhow::Result<Vec<JobId>>,
    ) -> Self {
        self.expect_list()
            .once()
            .with(mockall::predicate::eq(access_token))
            .return_once(|_| Box::pin(std::future::ready(result)));
        self
    }

    pub fn with_add(
        mut self,
        access_token: AccessToken,
        job_id: JobId,
        result: anyhow::Result<()>,
    ) -> Self {
        self.expect_add()
            .once()
            .with(
                mockall::predicate::eq(access_token),
                mockall::predicate::eq(job_id),
            )
            .return_once(|_, _| Box::pin(std::future::ready(result)));
        self
    }

    pub fn with_remove(
        mut self,
        access_token: AccessToken,
        job_id: JobId,
        result: anyhow::Result<()>,
    ) -> Self {
        self.expect_remove()
            .once()
            .with(
                mockall::predicate::eq(access_token),
                mockall::predicate::eq(job_id),
            )
            .return_once(|_, _| Box::pin(std::future::ready(result)));
        self
    }
}
