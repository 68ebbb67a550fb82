use crate::{
    domain::{Issue, RepoId},
    error::{BoardError, Result},
};
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, warn};

#[cfg(feature = "github")]
pub mod github;

/// Source of raw issue records for a repository
#[async_trait]
pub trait IssueFetcher: Send + Sync {
    /// Fetches every issue of the repository, open and closed
    async fn fetch_issues(&self, repo: &RepoId) -> Result<Vec<Issue>>;
}

/// Result of a fetch after failures have been degraded.
///
/// `issues` is what the board is built from; it is empty when the fetch
/// failed. `failure` keeps the reason so a caller can tell a failed fetch
/// apart from a repository without issues.
#[derive(Debug, Default)]
pub struct FetchOutcome {
    pub issues: Vec<Issue>,
    pub failure: Option<BoardError>,
}

impl FetchOutcome {
    pub fn is_failure(&self) -> bool {
        self.failure.is_some()
    }
}

/// Fetches issues with a bounded wait, degrading any failure to an empty list
pub async fn load_issues<F>(fetcher: &F, repo: &RepoId, timeout: Duration) -> FetchOutcome
where
    F: IssueFetcher + ?Sized,
{
    debug!(%repo, ?timeout, "Fetching issues");

    let result = match tokio::time::timeout(timeout, fetcher.fetch_issues(repo)).await {
        Ok(result) => result,
        Err(_) => Err(BoardError::Timeout(timeout)),
    };

    match result {
        Ok(issues) => {
            debug!(%repo, count = issues.len(), "Fetched issues");
            FetchOutcome {
                issues,
                failure: None,
            }
        }
        Err(error) => {
            warn!(%repo, %error, "Issue fetch failed, loading an empty board");
            FetchOutcome {
                issues: Vec::new(),
                failure: Some(error),
            }
        }
    }
}

/// Decodes an issue list payload one record at a time.
///
/// The payload must be a JSON array. An element is skipped only when it has
/// no numeric `id`; other mistyped fields decode as absent.
pub fn decode_issues(payload: serde_json::Value) -> Result<Vec<Issue>> {
    let records = match payload {
        serde_json::Value::Array(records) => records,
        other => {
            return Err(BoardError::UnexpectedPayload(format!(
                "expected an array of issues, got {}",
                json_kind(&other)
            )))
        }
    };

    let mut issues = Vec::with_capacity(records.len());
    for (position, record) in records.into_iter().enumerate() {
        match serde_json::from_value::<Issue>(record) {
            Ok(issue) => issues.push(issue),
            Err(error) => warn!(position, %error, "Skipping malformed issue record"),
        }
    }
    Ok(issues)
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    /// Always returns the same issues
    pub struct StaticFetcher(pub Vec<Issue>);

    #[async_trait]
    impl IssueFetcher for StaticFetcher {
        async fn fetch_issues(&self, _repo: &RepoId) -> Result<Vec<Issue>> {
            Ok(self.0.clone())
        }
    }

    /// Always fails with a non-2xx status
    pub struct FailingFetcher;

    #[async_trait]
    impl IssueFetcher for FailingFetcher {
        async fn fetch_issues(&self, repo: &RepoId) -> Result<Vec<Issue>> {
            Err(BoardError::Status {
                status: 404,
                url: format!("https://api.github.com/repos/{}/issues", repo),
            })
        }
    }

    /// Never answers within any reasonable timeout
    pub struct SlowFetcher;

    #[async_trait]
    impl IssueFetcher for SlowFetcher {
        async fn fetch_issues(&self, _repo: &RepoId) -> Result<Vec<Issue>> {
            tokio::time::sleep(Duration::from_secs(3600)).await;
            Ok(vec![Issue::new(1, "Too late")])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::*;
    use super::*;
    use crate::domain::{IssueId, Stage};
    use serde_json::json;

    fn repo() -> RepoId {
        RepoId::new("octocat", "Hello-World")
    }

    #[tokio::test]
    async fn test_load_issues_success() {
        let fetcher = StaticFetcher(vec![Issue::new(1, "A"), Issue::new(2, "B")]);

        let outcome = load_issues(&fetcher, &repo(), Duration::from_secs(2)).await;

        assert!(!outcome.is_failure());
        assert_eq!(outcome.issues.len(), 2);
    }

    #[tokio::test]
    async fn test_load_issues_degrades_error_to_empty() {
        let outcome = load_issues(&FailingFetcher, &repo(), Duration::from_secs(2)).await;

        assert!(outcome.issues.is_empty());
        assert!(matches!(
            outcome.failure,
            Some(BoardError::Status { status: 404, .. })
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn test_load_issues_times_out() {
        let timeout = Duration::from_millis(2000);

        let outcome = load_issues(&SlowFetcher, &repo(), timeout).await;

        assert!(outcome.issues.is_empty());
        assert!(matches!(outcome.failure, Some(BoardError::Timeout(t)) if t == timeout));
    }

    #[tokio::test]
    async fn test_load_issues_through_trait_object() {
        let fetcher: Box<dyn IssueFetcher> = Box::new(StaticFetcher(vec![Issue::new(5, "E")]));

        let outcome = load_issues(fetcher.as_ref(), &repo(), Duration::from_secs(1)).await;

        assert_eq!(outcome.issues, vec![Issue::new(5, "E")]);
    }

    #[test]
    fn test_decode_issues_skips_malformed_records() {
        let payload = json!([
            { "id": 1, "title": "Good", "state": "open" },
            { "title": "No id" },
            "not an object",
            { "id": "abc" },
            { "id": 2, "state": "closed", "assignee": { "login": "bob" } }
        ]);

        let issues = decode_issues(payload).unwrap();

        let ids: Vec<u64> = issues.iter().map(|issue| issue.id.get()).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_decode_issues_keeps_records_with_mistyped_fields() {
        let payload = json!([
            { "id": 1, "state": "open", "created_at": "yesterday" },
            { "id": 2, "state": 0 },
            { "id": 3, "state": "open", "assignee": false },
            { "id": 4, "title": 42, "state": "open" },
            { "id": 5, "state": "open", "assignee": "" },
            { "id": 6, "state": ["open"], "assignee": 1, "number": "x", "updated_at": {} }
        ]);

        let issues = decode_issues(payload).unwrap();

        let ids: Vec<u64> = issues.iter().map(|issue| issue.id.get()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);

        let board = crate::domain::classify(issues);
        let to_do: Vec<IssueId> = [1, 3, 4, 5].into_iter().map(IssueId::new).collect();
        assert_eq!(board.issue_ids(Stage::ToDo), to_do);
        assert!(board.lane(Stage::InProgress).is_empty());
        assert_eq!(board.issue_ids(Stage::Done), vec![IssueId::new(2), IssueId::new(6)]);
    }

    #[test]
    fn test_decode_issues_requires_array() {
        let error = decode_issues(json!({ "message": "Not Found" })).unwrap_err();

        assert!(matches!(error, BoardError::UnexpectedPayload(_)));
        assert!(error.to_string().contains("an object"));
    }
}
