use std::sync::LazyLock;

use akil_models::session::{AccessToken, Session};

pub static ACCESS_TOKEN: LazyLock<AccessToken> =
    LazyLock::new(|| "the-access-token".try_into().unwrap());

pub static FOO: LazyLock<Session> =
    LazyLock::new(|| Session::authenticated(ACCESS_TOKEN.clone()));

pub static GUEST: LazyLock<Session> = LazyLock::new(|| Session::Unauthenticated);
