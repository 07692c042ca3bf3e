use akil_demo::{
    job::{DESIGNER, ENGINEER},
    session::{ACCESS_TOKEN, FOO, GUEST},
};
use akil_extern_contracts::{
    bookmark::MockBookmarkApiService, opportunity::MockOpportunityApiService,
};
use akil_models::job::JobId;
use anyhow::anyhow;
use pretty_assertions::assert_eq;

use super::{card, make_loaded_sut};
use crate::board::{BoardServiceConfig, BoardServiceImpl};
use akil_core_board_contracts::board::BoardService;

#[tokio::test]
async fn replaces_the_set_restricted_to_known_jobs() {
    // Arrange
    let bookmark_api = MockBookmarkApiService::new().with_list(
        ACCESS_TOKEN.clone(),
        Ok(vec![
            ENGINEER.id.clone(),
            JobId::try_new("job-id-404").unwrap(),
        ]),
    );
    let sut = make_loaded_sut(bookmark_api).await;

    // Act
    let result = sut.load_bookmarks(&FOO).await;

    // Assert
    result.unwrap();
    assert!(card(&sut, &ENGINEER.id).is_bookmarked);
    assert!(!card(&sut, &DESIGNER.id).is_bookmarked);
    assert_eq!(
        sut.cards()
            .iter()
            .filter(|card| card.is_bookmarked)
            .count(),
        1
    );
}

#[tokio::test]
async fn unauthenticated_session_is_a_noop() {
    // Arrange
    let sut = make_loaded_sut(MockBookmarkApiService::new()).await;

    // Act
    let result = sut.load_bookmarks(&GUEST).await;

    // Assert
    result.unwrap();
    assert!(sut.cards().iter().all(|card| !card.is_bookmarked));
}

#[tokio::test]
async fn failure_is_swallowed_and_keeps_the_set() {
    // Arrange
    let bookmark_api = MockBookmarkApiService::new()
        .with_add(ACCESS_TOKEN.clone(), ENGINEER.id.clone(), Ok(()))
        .with_list(ACCESS_TOKEN.clone(), Err(anyhow!("boom")));
    let sut = make_loaded_sut(bookmark_api).await;
    sut.toggle_bookmark(&FOO, ENGINEER.id.clone()).await.unwrap();

    // Act
    let result = sut.load_bookmarks(&FOO).await;

    // Assert
    result.unwrap();
    assert!(card(&sut, &ENGINEER.id).is_bookmarked);
}

#[tokio::test]
async fn failure_is_surfaced_when_configured() {
    // Arrange
    let opportunity_api =
        MockOpportunityApiService::new().with_search(Ok(vec![ENGINEER.clone()]));
    let bookmark_api =
        MockBookmarkApiService::new().with_list(ACCESS_TOKEN.clone(), Err(anyhow!("boom")));
    let sut = BoardServiceImpl::new(
        opportunity_api,
        bookmark_api,
        BoardServiceConfig {
            surface_bookmark_errors: true,
        },
    );
    sut.load_jobs().await.unwrap();

    // Act
    let result = sut.load_bookmarks(&FOO).await;

    // Assert
    result.unwrap_err();
}
