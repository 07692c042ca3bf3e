use std::future::Future;

use akil_models::{
    account::{SignupRole, UserName, UserPassword, VerificationOtp},
    session::AccessToken,
    Sensitive,
};
use email_address::EmailAddress;
use thiserror::Error;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait IdentityApiService: Send + Sync + 'static {
    /// Register a new account. The remote service sends the verification OTP
    /// to the given email address.
    fn signup(
        &self,
        request: SignupRequest,
    ) -> impl Future<Output = Result<(), IdentityApiError>> + Send;

    /// Exchange credentials for a bearer token.
    fn login(
        &self,
        email: EmailAddress,
        password: Sensitive<UserPassword>,
    ) -> impl Future<Output = Result<Sensitive<AccessToken>, IdentityApiError>> + Send;

    /// Confirm the OTP sent to the given email address.
    fn verify_email(
        &self,
        email: EmailAddress,
        otp: VerificationOtp,
    ) -> impl Future<Output = Result<(), IdentityApiError>> + Send;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupRequest {
    pub name: UserName,
    pub email: EmailAddress,
    pub password: Sensitive<UserPassword>,
    pub password_confirmation: Sensitive<UserPassword>,
    pub role: SignupRole,
}

#[derive(Debug, Error)]
pub enum IdentityApiError {
    /// The remote service rejected the request. The message is taken from the
    /// response body and shown to the user verbatim.
    #[error("{0}")]
    Rejected(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(feature = "mock")]
impl MockIdentityApiService {
    pub fn with_signup(
        mut self,
        request: SignupRequest,
        result: Result<(), IdentityApiError>,
    ) -> Self {
        self.expect_signup()
            .once()
            .with(mockall::predicate::eq(request))
            .return_once(|_| Box::pin(std::future::ready(result)));
        self
    }

    pub fn with_login(
        mut self,
        email: EmailAddress,
        password: Sensitive<UserPassword>,
        result: Result<Sensitive<AccessToken>, IdentityApiError>,
    ) -> Self {
        self.expect_login()
            .once()
            .with(
                mockall::predicate::eq(email),
                mockall::predicate::eq(password),
            )
            .return_once(|_, _| Box::pin(std::future::ready(result)));
        self
    }

    pub fn with_verify_email(
        mut self,
        email: EmailAddress,
        otp: VerificationOtp,
        result: Result<(), IdentityApiError>,
    ) -> Self {
        self.expect_verify_email()
            .once()
            .with(mockall::predicate::eq(email), mockall::predicate::eq(otp))
            .return_once(|_, _| Box::pin(std::future::ready(result)));
        self
    }
}
