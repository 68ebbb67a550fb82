use crate::{
    config::FetchConfig,
    domain::{Issue, RepoId},
    error::{BoardError, Result},
    fetch::{decode_issues, IssueFetcher},
};
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use tracing::debug;

/// Fetches issues from the GitHub REST API (or a compatible server)
pub struct GitHubFetcher {
    client: reqwest::Client,
    config: FetchConfig,
}

impl GitHubFetcher {
    const ACCEPT_HEADER: &'static str = "application/vnd.github+json";

    /// Creates a fetcher whose requests are bounded by the configured timeout
    pub fn new(config: FetchConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| BoardError::ConfigError(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    /// Issues endpoint of a repository, without the query string
    pub fn issues_url(&self, repo: &RepoId) -> String {
        format!(
            "{}/repos/{}/{}/issues",
            self.config.base_url,
            repo.owner(),
            repo.name()
        )
    }
}

#[async_trait]
impl IssueFetcher for GitHubFetcher {
    async fn fetch_issues(&self, repo: &RepoId) -> Result<Vec<Issue>> {
        let url = self.issues_url(repo);
        debug!(%url, "Requesting issues");

        let response = self
            .client
            .get(&url)
            .header(ACCEPT, Self::ACCEPT_HEADER)
            .query(&[("state", "all")])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(BoardError::Status {
                status: status.as_u16(),
                url,
            });
        }

        let payload: serde_json::Value = response.json().await?;
        decode_issues(payload)
    }
}
