use std::future::Future;

use akil_models::{
    account::{SignupRole, UserName, UserPassword, VerificationOtp},
    oauth2::{OAuth2AuthorizationCode, OAuth2UserInfo},
    session::Session,
    Sensitive,
};
use email_address::EmailAddress;
use thiserror::Error;
use url::Url;

/// Account flows against the remote identity collaborator. The identity
/// provider itself is external; this service only drives its endpoints.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait AccountService: Send + Sync + 'static {
    /// Register a new account. The remote sends a verification OTP to the
    /// given email address on success.
    fn signup(&self, cmd: SignupCommand) -> impl Future<Output = Result<(), SignupError>> + Send;

    /// Exchange credentials for an authenticated session.
    fn login(
        &self,
        email: EmailAddress,
        password: Sensitive<UserPassword>,
    ) -> impl Future<Output = Result<Session, LoginError>> + Send;

    /// Confirm the OTP sent to the given email address.
    fn verify_email(
        &self,
        email: EmailAddress,
        otp: VerificationOtp,
    ) -> impl Future<Output = Result<(), VerifyEmailError>> + Send;

    /// The configured provider's authorization URL to open in a browser.
    fn oauth2_authorize_url(&self) -> Result<Url, OAuth2LoginError>;

    /// Resolve an authorization code to the remote identity. This yields no
    /// bearer token for the job API; only a credentials login does.
    fn oauth2_login(
        &self,
        code: OAuth2AuthorizationCode,
    ) -> impl Future<Output = Result<OAuth2UserInfo, OAuth2LoginError>> + Send;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupCommand {
    pub name: UserName,
    pub email: EmailAddress,
    pub password: Sensitive<UserPassword>,
    pub password_confirmation: Sensitive<UserPassword>,
    pub role: SignupRole,
}

#[derive(Debug, Error)]
pub enum SignupError {
    #[error("The passwords do not match.")]
    PasswordMismatch,
    /// Rejection message from the remote identity service, shown verbatim.
    #[error("{0}")]
    Rejected(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[derive(Debug, Error)]
pub enum LoginError {
    #[error("{0}")]
    Rejected(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[derive(Debug, Error)]
pub enum VerifyEmailError {
    #[error("{0}")]
    Rejected(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[derive(Debug, Error)]
pub enum OAuth2LoginError {
    #[error("No OAuth2 provider is configured.")]
    NotConfigured,
    #[error("The authorization code is invalid.")]
    InvalidCode,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(feature = "mock")]
impl MockAccountService {
    pub fn with_signup(mut self, cmd: SignupCommand, result: Result<(), SignupError>) -> Self {
        self.expect_signup()
            .once()
            .with(mockall::predicate::eq(cmd))
            .return_once(|_| Box::pin(std::future::ready(result)));
        self
    }

    pub fn with_login(
        mut self,
        email: EmailAddress,
        password: Sensitive<UserPassword>,
        result: Result<Session, LoginError>,
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
}
