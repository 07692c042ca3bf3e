use akil_demo::job::{DESIGNER, ENGINEER};
use akil_extern_contracts::{
    bookmark::MockBookmarkApiService, opportunity::MockOpportunityApiService,
};
use anyhow::anyhow;
use pretty_assertions::assert_eq;

use super::make_sut;
use crate::board::JOBS_LOAD_ERROR_MESSAGE;
use akil_core_board_contracts::board::BoardService;

#[tokio::test]
async fn replaces_the_job_list_wholesale() {
    // Arrange
    let opportunity_api =
        MockOpportunityApiService::new().with_search(Ok(vec![ENGINEER.clone(), DESIGNER.clone()]));
    let sut = make_sut(opportunity_api, MockBookmarkApiService::new());

    // Act
    let result = sut.load_jobs().await;

    // Assert
    result.unwrap();
    let cards = sut.cards();
    assert_eq!(
        cards.iter().map(|card| &card.job).collect::<Vec<_>>(),
        [&*ENGINEER, &*DESIGNER]
    );
    assert!(cards
        .iter()
        .all(|card| !card.is_bookmarked && !card.is_pending));
    assert_eq!(sut.load_error(), None);
}

#[tokio::test]
async fn failure_leaves_the_list_empty_and_records_the_error() {
    // Arrange
    let opportunity_api = MockOpportunityApiService::new().with_search(Err(anyhow!("boom")));
    let sut = make_sut(opportunity_api, MockBookmarkApiService::new());

    // Act
    let result = sut.load_jobs().await;

    // Assert
    result.unwrap_err();
    assert!(sut.cards().is_empty());
    assert_eq!(sut.load_error().as_deref(), Some(JOBS_LOAD_ERROR_MESSAGE));
}
