//! go.dev download index implementation

use tracing::debug;

use crate::config::USER_AGENT;
use crate::release::error::FetchError;
use crate::release::index::ReleaseIndex;
use crate::release::types::Release;

/// ReleaseIndex implementation for the go.dev `/dl/?mode=json` endpoint
pub struct GoDevIndex {
    client: reqwest::Client,
    index_url: String,
}

impl GoDevIndex {
    /// Creates a new GoDevIndex fetching from a custom URL
    pub fn new(index_url: &str) -> Result<Self, FetchError> {
        Ok(Self {
            client: reqwest::Client::builder().user_agent(USER_AGENT).build()?,
            index_url: index_url.to_string(),
        })
    }
}

#[async_trait::async_trait]
impl ReleaseIndex for GoDevIndex {
    async fn fetch_releases(&self) -> Result<Vec<Release>, FetchError> {
        debug!("Fetching release index from {}", self.index_url);

        let response = self.client.get(&self.index_url).send().await?;

        let status = response.status();
        if !status.is_success() {
            debug!("Release index returned status {}: {}", status, self.index_url);
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.text().await?;

        let releases: Vec<Release> = serde_json::from_str(&body)?;

        debug!("Release index listed {} releases", releases.len());

        Ok(releases)
    }
}
