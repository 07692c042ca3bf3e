use std::io::Write;

use akil_config::Config;
use akil_core_account_contracts::account::{AccountService, SignupCommand};
use akil_models::{
    account::{SignupRole, UserName, UserPassword, VerificationOtp},
    oauth2::OAuth2AuthorizationCode,
    Sensitive,
};
use anyhow::anyhow;
use clap::Subcommand;
use email_address::EmailAddress;

use crate::environment::build_environment;

#[derive(Debug, Subcommand)]
pub enum AccountCommand {
    /// Create a new account; a verification code is sent to the email address
    Signup {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: EmailAddress,
        #[arg(long)]
        password: String,
        #[arg(long)]
        confirm_password: String,
        #[arg(long, default_value = "applicant")]
        role: String,
    },
    /// Log in with credentials and print the access token
    Login {
        #[arg(long)]
        email: EmailAddress,
        #[arg(long)]
        password: String,
    },
    /// Confirm the verification code sent to the email address
    VerifyEmail {
        #[arg(long)]
        email: EmailAddress,
        #[arg(long)]
        otp: String,
    },
    /// Print the OAuth2 authorization URL to open in a browser
    Oauth2Url,
    /// Resolve an OAuth2 authorization code to the remote identity
    Oauth2Login {
        #[arg(long)]
        code: String,
    },
}

impl AccountCommand {
    pub async fn invoke(self, config: Config) -> anyhow::Result<()> {
        let env = build_environment(&config);
        let mut stdout = std::io::stdout().lock();
        match self {
            Self::Signup {
                name,
                email,
                password,
                confirm_password,
                role,
            } => {
                let cmd = SignupCommand {
                    name: parse::<UserName>(name, "name")?,
                    email,
                    password: Sensitive(parse::<UserPassword>(password, "password")?),
                    password_confirmation: Sensitive(parse::<UserPassword>(
                        confirm_password,
                        "password confirmation",
                    )?),
                    role: parse::<SignupRole>(role, "role")?,
                };
                let email = cmd.email.clone();
                env.account.signup(cmd).await?;
                writeln!(
                    stdout,
                    "Account created. A verification code has been sent to {email}."
                )?;
            }
            Self::Login { email, password } => {
                login(
                    &env.account,
                    email,
                    Sensitive(parse::<UserPassword>(password, "password")?),
                    &mut stdout,
                )
                .await?;
            }
            Self::VerifyEmail { email, otp } => {
                env.account
                    .verify_email(email, parse::<VerificationOtp>(otp, "verification code")?)
                    .await?;
                writeln!(stdout, "Email verified successfully!")?;
            }
            Self::Oauth2Url => {
                let url = env.account.oauth2_authorize_url()?;
                writeln!(stdout, "{url}")?;
            }
            Self::Oauth2Login { code } => {
                let user_info = env
                    .account
                    .oauth2_login(parse::<OAuth2AuthorizationCode>(code, "authorization code")?)
                    .await?;
                writeln!(stdout, "Signed in as {}.", user_info.name.as_str())?;
                writeln!(
                    stdout,
                    "Bookmark sync requires a credentials login; OAuth2 sessions carry no API token."
                )?;
            }
        }
        Ok(())
    }
}

async fn login(
    account: &impl AccountService,
    email: EmailAddress,
    password: Sensitive<UserPassword>,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let session = account.login(email, password).await?;
    if let Some(access_token) = session.access_token() {
        writeln!(out, "{}", access_token.as_str())?;
    }
    Ok(())
}

fn parse<T: TryFrom<String>>(value: String, what: &str) -> anyhow::Result<T>
where
    T::Error: std::fmt::Display,
{
    T::try_from(value).map_err(|err| anyhow!("Invalid {what}: {err}"))
}

#[cfg(test)]
mod tests {
    use akil_core_account_contracts::account::MockAccountService;
    use akil_demo::session::{ACCESS_TOKEN, FOO};

    use super::*;

    #[tokio::test]
    async fn login_prints_the_access_token() {
        // Arrange
        let password = Sensitive(UserPassword::try_new("pw").unwrap());
        let account = MockAccountService::new().with_login(
            "foo@example.com".parse().unwrap(),
            password.clone(),
            Ok(FOO.clone()),
        );
        let mut out = Vec::new();

        // Act
        login(
            &account,
            "foo@example.com".parse().unwrap(),
            password,
            &mut out,
        )
        .await
        .unwrap();

        // Assert
        assert_eq!(
            String::from_utf8(out).unwrap(),
            format!("{}\n", ACCESS_TOKEN.as_str())
        );
    }
}
