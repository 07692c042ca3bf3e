use std::future::Future;

use akil_extern_contracts::opportunity::OpportunityGetError;
use akil_models::{
    job::{Job, JobDetail, JobId},
    session::Session,
    SearchTerm,
};
use thiserror::Error;

/// The dashboard state machine: the fetched job list merged with the session
/// owner's bookmark set, with optimistic per-job bookmark toggling.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait BoardService: Send + Sync + 'static {
    /// Fetch the job list and replace the board's jobs wholesale. On failure
    /// the job list is cleared, the error is recorded for the view, and no
    /// retry is attempted.
    fn load_jobs(&self) -> impl Future<Output = Result<(), JobsLoadError>> + Send;

    /// Fetch the session owner's bookmarks and replace the bookmark set with
    /// the returned ids, restricted to jobs in the current list. Does nothing
    /// for sessions without a bearer token. Failures are logged but not
    /// returned unless the board is configured to surface them.
    fn load_bookmarks(
        &self,
        session: &Session,
    ) -> impl Future<Output = Result<(), BookmarksLoadError>> + Send;

    /// Optimistically flip the bookmark state of the given job, then reconcile
    /// with the remote bookmark source, undoing the flip if the request fails.
    /// While the request is in flight the job is pending and further toggles
    /// for the same job are rejected; toggles for other jobs proceed
    /// independently.
    fn toggle_bookmark(
        &self,
        session: &Session,
        job_id: JobId,
    ) -> impl Future<Output = Result<(), ToggleBookmarkError>> + Send;

    /// Fetch the extended posting for a single job.
    fn job_detail(
        &self,
        job_id: JobId,
    ) -> impl Future<Output = Result<JobDetail, OpportunityGetError>> + Send;

    /// Current card state in job-list order.
    fn cards(&self) -> Vec<JobCardView>;

    /// Cards whose title contains the query, case-insensitively. A pure
    /// projection; never touches the underlying state.
    fn cards_filtered(&self, query: &SearchTerm) -> Vec<JobCardView>;

    /// The recorded job-list load failure, if any.
    fn load_error(&self) -> Option<String>;

    /// Hands the transient bookmark failure notice to the view, at most once.
    fn take_notice(&self) -> Option<BoardNotice>;
}

/// Per-job card state for the presentation layer, which must disable the
/// toggle affordance while `is_pending` is set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobCardView {
    pub job: Job,
    pub is_bookmarked: bool,
    pub is_pending: bool,
}

/// Transient, non-blocking failure notice produced by a rolled-back toggle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardNotice {
    pub job_id: JobId,
    pub message: String,
}

#[derive(Debug, Error)]
#[error("Failed to load opportunities.")]
pub struct JobsLoadError(#[source] pub anyhow::Error);

#[derive(Debug, Error)]
#[error("Failed to load bookmarks.")]
pub struct BookmarksLoadError(#[source] pub anyhow::Error);

#[derive(Debug, Error)]
pub enum ToggleBookmarkError {
    #[error("The session is not authenticated.")]
    Unauthenticated,
    #[error("The job is not part of the current list.")]
    UnknownJob,
    #[error("A bookmark request for this job is already in flight.")]
    AlreadyPending,
    /// The remote rejected the mutation or the transport failed; the
    /// optimistic flip has been undone.
    #[error("Failed to update the bookmark.")]
    MutationFailed(#[source] anyhow::Error),
}

#[cfg(feature = "mock")]
impl MockBoardService {
    pub fn with_load_jobs(mut self, result: Result<(), JobsLoadError>) -> Self {
        self.expect_load_jobs()
            .once()
            .return_once(move || Box::pin(std::future::ready(result)));
        self
    }

    pub fn with_load_bookmarks(
        mut self,
        session: Session,
        result: Result<(), BookmarksLoadError>,
    ) -> Self {
        self.expect_load_bookmarks()
            .once()
            .with(mockall::predicate::eq(session))
            .return_once(|_| Box::pin(std::future::ready(result)));
        self
    }

    pub fn with_toggle_bookmark(
        mut self,
        session: Session,
        job_id: JobId,
        result: Result<(), ToggleBookmarkError>,
    ) -> Self {
        self.expect_toggle_bookmark()
            .once()
            .with(mockall::predicate::eq(session), mockall::predicate::eq(job_id))
            .return_once(|_, _| Box::pin(std::future::ready(result)));
        self
    }

    pub fn with_cards(mut self, result: Vec<JobCardView>) -> Self {
        self.expect_cards().once().return_once(move || result);
        self
    }
}
