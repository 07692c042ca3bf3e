use std::sync::Arc;

use akil_extern_contracts::bookmark::BookmarkApiService;
use akil_models::{job::JobId, session::AccessToken};
use anyhow::Context;
use serde::Deserialize;
use url::Url;

use crate::http::{endpoint, HttpClient};

#[derive(Debug, Clone)]
pub struct BookmarkApiServiceImpl {
    config: BookmarkApiServiceConfig,
    client: HttpClient,
}

impl BookmarkApiServiceImpl {
    pub fn new(config: BookmarkApiServiceConfig, client: HttpClient) -> Self {
        Self { config, client }
    }
}

#[derive(Debug, Clone)]
pub struct BookmarkApiServiceConfig {
    base_url: Arc<Url>,
}

impl BookmarkApiServiceConfig {
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

impl BookmarkApiService for BookmarkApiServiceImpl {
    async fn list(&self, access_token: AccessToken) -> anyhow::Result<Vec<JobId>> {
        let url = endpoint(&self.config.base_url, &["bookmarks"]);
        let response = self
            .client
            .get(url)
            .bearer_auth(access_token.as_str())
            .send()
            .await
            .context("Failed to send bookmark list request")?
            .error_for_status()
            .context("Bookmark list request returned an error")?
            .json::<BookmarkListResponse>()
            .await
            .context("Failed to deserialize bookmark list response")?;

        Ok(response
            .data
            .into_iter()
            .map(|entry| entry.event_id)
            .collect())
    }

    async fn add(&self, access_token: AccessToken, job_id: JobId) -> anyhow::Result<()> {
        let url = endpoint(&self.config.base_url, &["bookmarks", job_id.as_str()]);
        self.client
            .post(url)
            .bearer_auth(access_token.as_str())
            .send()
            .await
            .context("Failed to send bookmark add request")?
            .error_for_status()
            .context("Bookmark add request returned an error")?;
        Ok(())
    }

    async fn remove(&self, access_token: AccessToken, job_id: JobId) -> anyhow::Result<()> {
        let url = endpoint(&self.config.base_url, &["bookmarks", job_id.as_str()]);
        self.client
            .delete(url)
            .bearer_auth(access_token.as_str())
            .send()
            .await
            .context("Failed to send bookmark remove request")?
            .error_for_status()
            .context("Bookmark remove request returned an error")?;
        Ok(())
    }
}

#[derive(Deserialize)]
struct BookmarkListResponse {
    #[serde(default)]
    data: Vec<BookmarkEntry>,
}

/// Bookmarks are keyed by the job's event id on the wire.
#[derive(Deserialize)]
struct BookmarkEntry {
    #[serde(rename = "eventID")]
    event_id: JobId,
}
