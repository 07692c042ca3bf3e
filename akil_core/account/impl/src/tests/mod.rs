use akil_core_account_contracts::account::SignupCommand;
use akil_extern_contracts::{identity::MockIdentityApiService, oauth2::MockOAuth2ApiService};
use akil_models::{
    account::UserPassword,
    oauth2::OAuth2Provider,
    Sensitive,
};
use url::Url;

use crate::account::{AccountOAuth2Config, AccountServiceConfig, AccountServiceImpl};

mod login;
mod verify_email;

type Sut = AccountServiceImpl<MockIdentityApiService, MockOAuth2ApiService>;

fn make_sut(identity_api: MockIdentityApiService, oauth2_api: MockOAuth2ApiService) -> Sut {
    AccountServiceImpl::new(
        identity_api,
        oauth2_api,
        AccountServiceConfig {
            oauth2: Some(AccountOAuth2Config {
                provider: make_provider(),
                redirect_url: redirect_url(),
            }),
        },
    )
}

fn make_provider() -> OAuth2Provider {
    OAuth2Provider {
        name: "google".into(),
        client_id: "the-client-id".into(),
        client_secret: None,
        auth_url: "https://oauth2.provider/auth".parse().unwrap(),
        token_url: "https://oauth2.provider/token".parse().unwrap(),
        userinfo_url: "https://oauth2.provider/userinfo".parse().unwrap(),
        userinfo_id_key: "sub".into(),
        userinfo_name_key: "name".into(),
        scopes: vec!["openid".into()],
    }
}

fn redirect_url() -> Url {
    "http://localhost:8080/oauth2/callback".parse().unwrap()
}

fn password(password: &str) -> Sensitive<UserPassword> {
    Sensitive(password.try_into().unwrap())
}

fn make_signup_command() -> SignupCommand {
    SignupCommand {
        name: "Foo Bar".try_into().unwrap(),
        email: "foo@example.com".parse().unwrap(),
        password: password("correct horse battery staple"),
        password_confirmation: password("correct horse battery staple"),
        role: "applicant".try_into().unwrap(),
    }
}
