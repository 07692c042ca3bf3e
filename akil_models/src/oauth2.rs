use url::Url;

use crate::macros::nutype_string;

nutype_string!(OAuth2AuthorizationCode(validate(
    len_char_min = 1,
    len_char_max = 2048
)));

nutype_string!(OAuth2RemoteUserId(validate(len_char_min = 1, len_char_max = 256)));
nutype_string!(OAuth2RemoteUserName(validate(
    len_char_min = 1,
    len_char_max = 256
)));

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OAuth2Provider {
    pub name: String,
    pub client_id: String,
    pub client_secret: Option<String>,
    pub auth_url: Url,
    pub token_url: Url,
    pub userinfo_url: Url,
    /// Key of the user id in the userinfo endpoint response.
    pub userinfo_id_key: String,
    /// Key of the username in the userinfo endpoint response.
    pub userinfo_name_key: String,
    pub scopes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OAuth2UserInfo {
    pub id: OAuth2RemoteUserId,
    pub name: OAuth2RemoteUserName,
}
