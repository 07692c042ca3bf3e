use akil_core_account_contracts::account::{AccountService, LoginError};
use akil_demo::session::ACCESS_TOKEN;
use akil_extern_contracts::{
    identity::{IdentityApiError, MockIdentityApiService},
    oauth2::MockOAuth2ApiService,
};
use akil_models::session::Session;
use akil_utils::assert_matches;
use pretty_assertions::assert_eq;

use super::{make_sut, password};

#[tokio::test]
async fn returns_an_authenticated_session() {
    // Arrange
    let identity_api = MockIdentityApiService::new().with_login(
        "foo@example.com".parse().unwrap(),
        password("correct horse battery staple"),
        Ok(ACCESS_TOKEN.clone().into()),
    );
    let sut = make_sut(identity_api, MockOAuth2ApiService::new());

    // Act
    let result = sut
        .login(
            "foo@example.com".parse().unwrap(),
            password("correct horse battery staple"),
        )
        .await;

    // Assert
    assert_eq!(result.unwrap(), Session::authenticated(ACCESS_TOKEN.clone()));
}

#[tokio::test]
async fn rejection_is_passed_through() {
    // Arrange
    let identity_api = MockIdentityApiService::new().with_login(
        "foo@example.com".parse().unwrap(),
        password("wrong"),
        Err(IdentityApiError::Rejected("Invalid credentials".into())),
    );
    let sut = make_sut(identity_api, MockOAuth2ApiService::new());

    // Act
    let result = sut
        .login("foo@example.com".parse().unwrap(), password("wrong"))
        .await;

    // Assert
    assert_matches!(result, Err(LoginError::Rejected(message)) if message == "Invalid credentials");
}
