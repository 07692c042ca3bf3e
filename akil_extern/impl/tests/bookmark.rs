use akil_demo::session::ACCESS_TOKEN;
use akil_extern_contracts::bookmark::BookmarkApiService;
use akil_models::job::JobId;
use akil_extern_impl::{
    bookmark::{BookmarkApiServiceConfig, BookmarkApiServiceImpl},
    http::HttpClient,
};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::{
    matchers::{header, method, path},
    Mock, MockServer, ResponseTemplate,
};

#[tokio::test]
async fn list_returns_bookmarked_ids() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/bookmarks"))
        .and(header("Authorization", "Bearer the-access-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{ "eventID": "job-id-1" }, { "eventID": "job-id-3" }]
        })))
        .mount(&server)
        .await;

    let sut = make_sut(&server);

    let bookmarks = sut.list(ACCESS_TOKEN.clone()).await.unwrap();

    assert_eq!(
        bookmarks,
        ["job-id-1", "job-id-3"].map(|id| JobId::try_new(id).unwrap())
    );
}

#[tokio::test]
async fn list_fails_without_valid_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/bookmarks"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let sut = make_sut(&server);

    sut.list(ACCESS_TOKEN.clone()).await.unwrap_err();
}

#[tokio::test]
async fn add_posts_to_the_job_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/bookmarks/job-id-1"))
        .and(header("Authorization", "Bearer the-access-token"))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let sut = make_sut(&server);

    sut.add(ACCESS_TOKEN.clone(), "job-id-1".try_into().unwrap())
        .await
        .unwrap();
}

#[tokio::test]
async fn add_fails_on_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/bookmarks/job-id-1"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let sut = make_sut(&server);

    sut.add(ACCESS_TOKEN.clone(), "job-id-1".try_into().unwrap())
        .await
        .unwrap_err();
}

#[tokio::test]
async fn remove_deletes_the_job_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/bookmarks/job-id-1"))
        .and(header("Authorization", "Bearer the-access-token"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let sut = make_sut(&server);

    sut.remove(ACCESS_TOKEN.clone(), "job-id-1".try_into().unwrap())
        .await
        .unwrap();
}

fn make_sut(server: &MockServer) -> BookmarkApiServiceImpl {
    let config = BookmarkApiServiceConfig::new(server.uri().parse().unwrap());
    BookmarkApiServiceImpl::new(config, HttpClient::default())
}
