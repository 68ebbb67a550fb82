//! Configuration for fetching issues from the remote tracker

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Issue fetch configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// API root, without a trailing slash
    pub base_url: String,

    /// Upper bound on a single fetch, in milliseconds
    pub timeout_ms: u64,

    /// Sent as `User-Agent`; the GitHub API rejects requests without one
    pub user_agent: String,
}

impl FetchConfig {
    pub const DEFAULT_BASE_URL: &'static str = "https://api.github.com";
    pub const DEFAULT_TIMEOUT_MS: u64 = 2000;

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            base_url: Self::DEFAULT_BASE_URL.to_string(),
            timeout_ms: Self::DEFAULT_TIMEOUT_MS,
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}
