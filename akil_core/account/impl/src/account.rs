use akil_core_account_contracts::account::{
    AccountService, LoginError, OAuth2LoginError, SignupCommand, SignupError, VerifyEmailError,
};
use akil_extern_contracts::{
    identity::{IdentityApiError, IdentityApiService, SignupRequest},
    oauth2::{OAuth2ApiService, OAuth2ResolveCodeError},
};
use akil_models::{
    account::{UserPassword, VerificationOtp},
    oauth2::{OAuth2AuthorizationCode, OAuth2Provider, OAuth2UserInfo},
    session::Session,
    Sensitive,
};
use email_address::EmailAddress;
use url::Url;

#[derive(Debug)]
pub struct AccountServiceImpl<IdentityApi, OAuth2Api> {
    identity_api: IdentityApi,
    oauth2_api: OAuth2Api,
    config: AccountServiceConfig,
}

#[derive(Debug, Clone)]
pub struct AccountServiceConfig {
    pub oauth2: Option<AccountOAuth2Config>,
}

#[derive(Debug, Clone)]
pub struct AccountOAuth2Config {
    pub provider: OAuth2Provider,
    pub redirect_url: Url,
}

impl<IdentityApi, OAuth2Api> AccountServiceImpl<IdentityApi, OAuth2Api> {
    pub fn new(
        identity_api: IdentityApi,
        oauth2_api: OAuth2Api,
        config: AccountServiceConfig,
    ) -> Self {
        Self {
            identity_api,
            oauth2_api,
            config,
        }
    }

    fn oauth2_config(&self) -> Result<&AccountOAuth2Config, OAuth2LoginError> {
        self.config.oauth2.as_ref().ok_or(OAuth2LoginError::NotConfigured)
    }
}

impl<IdentityApi, OAuth2Api> AccountService for AccountServiceImpl<IdentityApi, OAuth2Api>
where
    IdentityApi: IdentityApiService,
    OAuth2Api: OAuth2ApiService,
{
    #[tracing::instrument(skip(self, cmd))]
    async fn signup(&self, cmd: SignupCommand) -> Result<(), SignupError> {
        // Checked locally; the mismatch never reaches the network.
        if cmd.password != cmd.password_confirmation {
            return Err(SignupError::PasswordMismatch);
        }

        self.identity_api
            .signup(SignupRequest {
                name: cmd.name,
                email: cmd.email,
                password: cmd.password,
                password_confirmation: cmd.password_confirmation,
                role: cmd.role,
            })
            .await
            .map_err(|err| match err {
                IdentityApiError::Rejected(message) => SignupError::Rejected(message),
                IdentityApiError::Other(err) => err.into(),
            })
    }

    #[tracing::instrument(skip(self, password))]
    async fn login(
        &self,
        email: EmailAddress,
        password: Sensitive<UserPassword>,
    ) -> Result<Session, LoginError> {
        let access_token = self
            .identity_api
            .login(email, password)
            .await
            .map_err(|err| match err {
                IdentityApiError::Rejected(message) => LoginError::Rejected(message),
                IdentityApiError::Other(err) => err.into(),
            })?;

        Ok(Session::Authenticated { access_token })
    }

    #[tracing::instrument(skip(self, otp))]
    async fn verify_email(
        &self,
        email: EmailAddress,
        otp: VerificationOtp,
    ) -> Result<(), VerifyEmailError> {
        self.identity_api
            .verify_email(email, otp)
            .await
            .map_err(|err| match err {
                IdentityApiError::Rejected(message) => VerifyEmailError::Rejected(message),
                IdentityApiError::Other(err) => err.into(),
            })
    }

    fn oauth2_authorize_url(&self) -> Result<Url, OAuth2LoginError> {
        let config = self.oauth2_config()?;
        Ok(self.oauth2_api.generate_auth_url(&config.provider))
    }

    #[tracing::instrument(skip(self, code))]
    async fn oauth2_login(
        &self,
        code: OAuth2AuthorizationCode,
    ) -> Result<OAuth2UserInfo, OAuth2LoginError> {
        let config = self.oauth2_config()?.clone();
        self.oauth2_api
            .resolve_code(config.provider, code, config.redirect_url)
            .await
            .map_err(|err| match err {
                OAuth2ResolveCodeError::InvalidCode => OAuth2LoginError::InvalidCode,
                OAuth2ResolveCodeError::Other(err) => err.into(),
            })
    }
}
