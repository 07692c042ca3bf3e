use std::{
    collections::HashSet,
    sync::{Mutex, MutexGuard, PoisonError},
};

use akil_core_board_contracts::board::{
    BoardNotice, BoardService, BookmarksLoadError, JobCardView, JobsLoadError, ToggleBookmarkError,
};
use akil_extern_contracts::{
    bookmark::BookmarkApiService,
    opportunity::{OpportunityApiService, OpportunityGetError},
};
use akil_models::{
    job::{Job, JobDetail, JobId},
    session::Session,
    SearchTerm,
};

/// Message recorded for the view when the job list cannot be fetched.
pub const JOBS_LOAD_ERROR_MESSAGE: &str = "Failed to load opportunities. Please try again later.";

/// Message attached to the transient notice after a rolled-back toggle.
pub const BOOKMARK_FAILED_MESSAGE: &str = "Could not update the bookmark. Please try again.";

#[derive(Debug)]
pub struct BoardServiceImpl<OpportunityApi, BookmarkApi> {
    opportunity_api: OpportunityApi,
    bookmark_api: BookmarkApi,
    config: BoardServiceConfig,
    state: Mutex<BoardState>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BoardServiceConfig {
    /// Report bookmark fetch failures to the caller instead of only logging
    /// them.
    pub surface_bookmark_errors: bool,
}

/// All board state lives behind one lock. State transitions are short
/// synchronous critical sections; the lock is never held across a network
/// await, so in-flight operations interleave freely.
#[derive(Debug, Default)]
struct BoardState {
    jobs: Vec<Job>,
    bookmarked: HashSet<JobId>,
    pending: HashSet<JobId>,
    load_error: Option<String>,
    notice: Option<BoardNotice>,
}

impl BoardState {
    /// The bookmark set only ever contains ids of the current job list.
    fn drop_unknown_bookmarks(&mut self) {
        let known = self.jobs.iter().map(|job| &job.id).collect::<HashSet<_>>();
        self.bookmarked.retain(|id| known.contains(id));
    }
}

impl<OpportunityApi, BookmarkApi> BoardServiceImpl<OpportunityApi, BookmarkApi> {
    pub fn new(
        opportunity_api: OpportunityApi,
        bookmark_api: BookmarkApi,
        config: BoardServiceConfig,
    ) -> Self {
        Self {
            opportunity_api,
            bookmark_api,
            config,
            state: Mutex::default(),
        }
    }

    fn state(&self) -> MutexGuard<'_, BoardState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<OpportunityApi, BookmarkApi> BoardService for BoardServiceImpl<OpportunityApi, BookmarkApi>
where
    OpportunityApi: OpportunityApiService,
    BookmarkApi: BookmarkApiService,
{
    #[tracing::instrument(skip(self))]
    async fn load_jobs(&self) -> Result<(), JobsLoadError> {
        match self.opportunity_api.search().await {
            Ok(jobs) => {
                let mut state = self.state();
                state.jobs = jobs;
                state.load_error = None;
                state.drop_unknown_bookmarks();
                Ok(())
            }
            Err(err) => {
                let mut state = self.state();
                state.jobs.clear();
                state.load_error = Some(JOBS_LOAD_ERROR_MESSAGE.into());
                state.drop_unknown_bookmarks();
                Err(JobsLoadError(err))
            }
        }
    }

    #[tracing::instrument(skip(self, session))]
    async fn load_bookmarks(&self, session: &Session) -> Result<(), BookmarksLoadError> {
        let Some(access_token) = session.access_token() else {
            return Ok(());
        };

        match self.bookmark_api.list(access_token.clone()).await {
            Ok(ids) => {
                let mut guard = self.state();
                let state = &mut *guard;
                let known = state.jobs.iter().map(|job| &job.id).collect::<HashSet<_>>();
                state.bookmarked = ids.into_iter().filter(|id| known.contains(id)).collect();
                Ok(())
            }
            Err(err) if self.config.surface_bookmark_errors => Err(BookmarksLoadError(err)),
            Err(err) => {
                tracing::warn!("Failed to load bookmarks: {err:#}");
                Ok(())
            }
        }
    }

    #[tracing::instrument(skip(self, session))]
    async fn toggle_bookmark(
        &self,
        session: &Session,
        job_id: JobId,
    ) -> Result<(), ToggleBookmarkError> {
        let Some(access_token) = session.access_token() else {
            return Err(ToggleBookmarkError::Unauthenticated);
        };

        let was_bookmarked = {
            let mut state = self.state();
            if !state.jobs.iter().any(|job| job.id == job_id) {
                return Err(ToggleBookmarkError::UnknownJob);
            }
            if !state.pending.insert(job_id.clone()) {
                return Err(ToggleBookmarkError::AlreadyPending);
            }

            // The optimistic half of the contract: the flip must be visible
            // to readers before the request resolves.
            let was_bookmarked = state.bookmarked.contains(&job_id);
            if was_bookmarked {
                state.bookmarked.remove(&job_id);
            } else {
                state.bookmarked.insert(job_id.clone());
            }
            was_bookmarked
        };

        let result = if was_bookmarked {
            self.bookmark_api
                .remove(access_token.clone(), job_id.clone())
                .await
        } else {
            self.bookmark_api
                .add(access_token.clone(), job_id.clone())
                .await
        };

        // Pending is cleared on every completion path; requests cannot be
        // cancelled, so there is no other way out.
        let mut state = self.state();
        state.pending.remove(&job_id);
        match result {
            Ok(()) => Ok(()),
            Err(err) => {
                // Undo only this job's membership bit so that overlapping
                // toggles on other jobs keep their own state.
                if was_bookmarked {
                    state.bookmarked.insert(job_id.clone());
                } else {
                    state.bookmarked.remove(&job_id);
                }
                state.notice = Some(BoardNotice {
                    job_id,
                    message: BOOKMARK_FAILED_MESSAGE.into(),
                });
                Err(ToggleBookmarkError::MutationFailed(err))
            }
        }
    }

    async fn job_detail(&self, job_id: JobId) -> Result<JobDetail, OpportunityGetError> {
        self.opportunity_api.get(job_id).await
    }

    fn cards(&self) -> Vec<JobCardView> {
        let state = self.state();
        state
            .jobs
            .iter()
            .map(|job| JobCardView {
                job: job.clone(),
                is_bookmarked: state.bookmarked.contains(&job.id),
                is_pending: state.pending.contains(&job.id),
            })
            .collect()
    }

    fn cards_filtered(&self, query: &SearchTerm) -> Vec<JobCardView> {
        self.cards()
            .into_iter()
            .filter(|card| card.job.title_matches(query))
            .collect()
    }

    fn load_error(&self) -> Option<String> {
        self.state().load_error.clone()
    }

    fn take_notice(&self) -> Option<BoardNotice> {
        self.state().notice.take()
    }
}
