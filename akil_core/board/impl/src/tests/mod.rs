use akil_core_board_contracts::board::{BoardService, JobCardView};
use akil_demo::job::{DESIGNER, ENGINEER, OPERATOR};
use akil_extern_contracts::{
    bookmark::MockBookmarkApiService, opportunity::MockOpportunityApiService,
};
use akil_models::job::JobId;

use crate::board::{BoardServiceConfig, BoardServiceImpl};

mod load_bookmarks;
mod load_jobs;

type Sut = BoardServiceImpl<MockOpportunityApiService, MockBookmarkApiService>;

fn make_sut(
    opportunity_api: MockOpportunityApiService,
    bookmark_api: MockBookmarkApiService,
) -> Sut {
    BoardServiceImpl::new(opportunity_api, bookmark_api, BoardServiceConfig::default())
}

/// Board with the three demo jobs loaded and an empty bookmark set.
async fn make_loaded_sut(bookmark_api: MockBookmarkApiService) -> Sut {
    let opportunity_api = MockOpportunityApiService::new().with_search(Ok(vec![
        ENGINEER.clone(),
        DESIGNER.clone(),
        OPERATOR.clone(),
    ]));
    let sut = make_sut(opportunity_api, bookmark_api);
    sut.load_jobs().await.unwrap();
    sut
}

fn card(sut: &impl BoardService, job_id: &JobId) -> JobCardView {
    sut.cards()
        .into_iter()
        .find(|card| &card.job.id == job_id)
        .unwrap()
}
