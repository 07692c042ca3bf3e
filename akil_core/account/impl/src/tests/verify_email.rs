use akil_core_account_contracts::account::{AccountService, VerifyEmailError};
use akil_extern_contracts::{
    identity::{IdentityApiError, MockIdentityApiService},
    oauth2::MockOAuth2ApiService,
};
use akil_utils::assert_matches;

use super::make_sut;

#[tokio::test]
async fn forwards_email_and_otp() {
    // Arrange
    let identity_api = MockIdentityApiService::new().with_verify_email(
        "foo@example.com".parse().unwrap(),
        "1234".try_into().unwrap(),
        Ok(()),
    );
    let sut = make_sut(identity_api, MockOAuth2ApiService::new());

    // Act
    let result = sut
        .verify_email("foo@example.com".parse().unwrap(), "1234".try_into().unwrap())
        .await;

    // Assert
    result.unwrap();
}

#[tokio::test]
async fn rejection_is_passed_through() {
    // Arrange
    let identity_api = MockIdentityApiService::new().with_verify_email(
        "foo@example.com".parse().unwrap(),
        "0000".try_into().unwrap(),
        Err(IdentityApiError::Rejected("Invalid OTP".into())),
    );
    let sut = make_sut(identity_api, MockOAuth2ApiService::new());

    // Act
    let result = sut
        .verify_email("foo@example.com".parse().unwrap(), "0000".try_into().unwrap())
        .await;

    // Assert
    assert_matches!(result, Err(VerifyEmailError::Rejected(message)) if message == "Invalid OTP");
}
