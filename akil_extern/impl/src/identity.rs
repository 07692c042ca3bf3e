use std::sync::Arc;

use akil_extern_contracts::identity::{IdentityApiError, IdentityApiService, SignupRequest};
use akil_models::{
    account::{UserPassword, VerificationOtp},
    session::AccessToken,
    Sensitive,
};
use anyhow::Context;
use email_address::EmailAddress;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::http::{endpoint, HttpClient};

#[derive(Debug, Clone)]
pub struct IdentityApiServiceImpl {
    config: IdentityApiServiceConfig,
    client: HttpClient,
}

impl IdentityApiServiceImpl {
    pub fn new(config: IdentityApiServiceConfig, client: HttpClient) -> Self {
        Self { config, client }
    }
}

#[derive(Debug, Clone)]
pub struct IdentityApiServiceConfig {
    base_url: Arc<Url>,
}

impl IdentityApiServiceConfig {
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

impl IdentityApiService for IdentityApiServiceImpl {
    async fn signup(&self, request: SignupRequest) -> Result<(), IdentityApiError> {
        let url = endpoint(&self.config.base_url, &["signup"]);
        let response = self
            .client
            .post(url)
            .json(&SignupRequestDto {
                name: request.name.as_str(),
                email: request.email.as_ref(),
                password: request.password.as_str(),
                confirm_password: request.password_confirmation.as_str(),
                // The remote expects the role uppercased.
                role: request.role.to_uppercase(),
            })
            .send()
            .await
            .context("Failed to send signup request")?;

        ensure_accepted(response).await
    }

    async fn login(
        &self,
        email: EmailAddress,
        password: Sensitive<UserPassword>,
    ) -> Result<Sensitive<AccessToken>, IdentityApiError> {
        let url = endpoint(&self.config.base_url, &["login"]);
        let response = self
            .client
            .post(url)
            .json(&LoginRequestDto {
                email: email.as_ref(),
                password: password.as_str(),
            })
            .send()
            .await
            .context("Failed to send login request")?;

        if !response.status().is_success() {
            return Err(rejection(response).await);
        }

        let response = response
            .json::<LoginResponse>()
            .await
            .context("Failed to deserialize login response")?;

        let access_token = AccessToken::try_new(response.data.access_token)
            .context("Invalid access token in login response")?;
        Ok(access_token.into())
    }

    async fn verify_email(
        &self,
        email: EmailAddress,
        otp: VerificationOtp,
    ) -> Result<(), IdentityApiError> {
        let url = endpoint(&self.config.base_url, &["verify-email"]);
        let response = self
            .client
            .post(url)
            .json(&VerifyEmailRequestDto {
                email: email.as_ref(),
                otp: otp.as_str(),
            })
            .send()
            .await
            .context("Failed to send email verification request")?;

        ensure_accepted(response).await
    }
}

async fn ensure_accepted(response: reqwest::Response) -> Result<(), IdentityApiError> {
    if response.status().is_success() {
        Ok(())
    } else {
        Err(rejection(response).await)
    }
}

/// Extracts the user-facing rejection message: the JSON `message` field, then
/// `error`, then the raw body, then the status code.
async fn rejection(response: reqwest::Response) -> IdentityApiError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&body)
        .ok()
        .and_then(|body| body.message.or(body.error))
        .filter(|message| !message.is_empty())
        .or_else(|| Some(body.trim().to_owned()).filter(|body| !body.is_empty()))
        .unwrap_or_else(|| format!("Request failed with status {status}"));
    IdentityApiError::Rejected(message)
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SignupRequestDto<'a> {
    name: &'a str,
    email: &'a str,
    password: &'a str,
    confirm_password: &'a str,
    role: String,
}

#[derive(Serialize)]
struct LoginRequestDto<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct VerifyEmailRequestDto<'a> {
    email: &'a str,
    otp: &'a str,
}

#[derive(Deserialize)]
struct LoginResponse {
    data: LoginData,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LoginData {
    access_token: String,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
    error: Option<String>,
}
