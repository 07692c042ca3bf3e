use crate::{macros::nutype_string, Sensitive};

nutype_string!(AccessToken(validate(len_char_min = 1, len_char_max = 4096)));

/// Authentication state owned by the identity collaborator. The job board
/// client only ever reads it.
///
/// Only a credentials login produces a bearer token for the job API; an
/// OAuth2 login yields a remote identity without one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Session {
    Unauthenticated,
    Loading,
    Authenticated {
        access_token: Sensitive<AccessToken>,
    },
}

impl Session {
    pub fn authenticated(access_token: AccessToken) -> Self {
        Self::Authenticated {
            access_token: access_token.into(),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated { .. })
    }

    pub fn access_token(&self) -> Option<&AccessToken> {
        match self {
            Self::Authenticated { access_token } => Some(access_token),
            Self::Unauthenticated | Self::Loading => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn access_token_only_while_authenticated() {
        let token = AccessToken::try_new("the-access-token").unwrap();

        assert_eq!(Session::Unauthenticated.access_token(), None);
        assert_eq!(Session::Loading.access_token(), None);
        assert_eq!(
            Session::authenticated(token.clone()).access_token(),
            Some(&token)
        );
    }

    #[test]
    fn debug_does_not_leak_the_token() {
        let session = Session::authenticated("the-access-token".try_into().unwrap());
        let debug = format!("{session:?}");
        assert!(!debug.contains("the-access-token"), "{debug}");
    }
}
