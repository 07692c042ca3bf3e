use akil_config::Config;
use akil_core_account_impl::account::{
    AccountOAuth2Config, AccountServiceConfig, AccountServiceImpl,
};
use akil_core_board_impl::board::{BoardServiceConfig, BoardServiceImpl};
use akil_extern_impl::{
    bookmark::{BookmarkApiServiceConfig, BookmarkApiServiceImpl},
    http::HttpClient,
    identity::{IdentityApiServiceConfig, IdentityApiServiceImpl},
    oauth2::OAuth2ApiServiceImpl,
    opportunity::{OpportunityApiServiceConfig, OpportunityApiServiceImpl},
};

pub type Board = BoardServiceImpl<OpportunityApiServiceImpl, BookmarkApiServiceImpl>;
pub type Account = AccountServiceImpl<IdentityApiServiceImpl, OAuth2ApiServiceImpl>;

pub struct Environment {
    pub board: Board,
    pub account: Account,
}

/// Composes the concrete service implementations from the configuration.
pub fn build_environment(config: &Config) -> Environment {
    let client = HttpClient::new(config.api.timeout.map(Into::into));

    let board = BoardServiceImpl::new(
        OpportunityApiServiceImpl::new(
            OpportunityApiServiceConfig::new(config.api.base_url.clone()),
            client.clone(),
        ),
        BookmarkApiServiceImpl::new(
            BookmarkApiServiceConfig::new(config.api.base_url.clone()),
            client.clone(),
        ),
        BoardServiceConfig {
            surface_bookmark_errors: config.board.surface_bookmark_errors,
        },
    );

    let account = AccountServiceImpl::new(
        IdentityApiServiceImpl::new(
            IdentityApiServiceConfig::new(config.api.base_url.clone()),
            client.clone(),
        ),
        OAuth2ApiServiceImpl::new(client),
        AccountServiceConfig {
            oauth2: config.oauth2.as_ref().map(|oauth2| AccountOAuth2Config {
                provider: oauth2.provider(),
                redirect_url: oauth2.redirect_url.clone(),
            }),
        },
    );

    Environment { board, account }
}
