use std::{ops::Deref, sync::LazyLock, time::Duration};

use akil_utils::{akil_version, Apply};
use url::Url;

pub static USER_AGENT: LazyLock<String> = LazyLock::new(|| {
    let homepage = env!("CARGO_PKG_HOMEPAGE");
    let repository = env!("CARGO_PKG_REPOSITORY");
    let version = akil_version();

    format!("Akil Job Board Client ({homepage}, {repository}, Version {version})")
});

const _: () = {
    assert!(!env!("CARGO_PKG_HOMEPAGE").is_empty());
    assert!(!env!("CARGO_PKG_REPOSITORY").is_empty());
};

#[derive(Debug, Clone)]
pub struct HttpClient(reqwest::Client);

impl Deref for HttpClient {
    type Target = reqwest::Client;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl HttpClient {
    /// Client with an optional request timeout; the transport default applies
    /// otherwise.
    pub fn new(timeout: Option<Duration>) -> Self {
        Self(
            reqwest::Client::builder()
                .user_agent(&*USER_AGENT)
                .apply_map(timeout, |builder, timeout| builder.timeout(timeout))
                .build()
                .unwrap(),
        )
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new(None)
    }
}

/// Appends path segments to the configured API base URL.
pub(crate) fn endpoint(base: &Url, segments: &[&str]) -> Url {
    let mut url = base.clone();
    url.path_segments_mut()
        .expect("API base URL must be able to be a base")
        .pop_if_empty()
        .extend(segments);
    url
}
