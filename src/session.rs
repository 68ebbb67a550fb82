//! State container driving a board from user input.
//!
//! A view owns one [`BoardSession`]: it forwards repository submissions and
//! completed drag gestures, and renders whatever [`BoardSession::state`]
//! holds afterwards.

use crate::{
    config::FetchConfig,
    domain::{BoardState, DragEnd, RepoId},
    error::{BoardError, Result},
    fetch::{load_issues, IssueFetcher},
};
use tracing::info;

pub struct BoardSession<F> {
    fetcher: F,
    config: FetchConfig,
    repo: Option<RepoId>,
    state: BoardState,
    last_failure: Option<BoardError>,
}

impl<F: IssueFetcher> BoardSession<F> {
    pub fn new(fetcher: F, config: FetchConfig) -> Self {
        Self {
            fetcher,
            config,
            repo: None,
            state: BoardState::Unloaded,
            last_failure: None,
        }
    }

    pub fn state(&self) -> &BoardState {
        &self.state
    }

    /// Repository of the most recent accepted submission
    pub fn repo(&self) -> Option<&RepoId> {
        self.repo.as_ref()
    }

    /// Why the most recent fetch produced an empty board, if it failed
    pub fn last_failure(&self) -> Option<&BoardError> {
        self.last_failure.as_ref()
    }

    /// Loads the board for a repository identifier typed by the user.
    ///
    /// Input that is not a repository identifier is rejected and leaves the
    /// session untouched. Otherwise the current board is replaced by the
    /// newly classified one, which is empty when the fetch failed.
    pub async fn submit(&mut self, input: &str) -> Result<&BoardState> {
        let repo: RepoId = input.parse()?;

        let outcome = load_issues(&self.fetcher, &repo, self.config.timeout()).await;
        info!(
            %repo,
            issues = outcome.issues.len(),
            failed = outcome.is_failure(),
            "Loaded board"
        );

        self.state = BoardState::load(outcome.issues);
        self.last_failure = outcome.failure;
        self.repo = Some(repo);
        Ok(&self.state)
    }

    /// Applies a completed drag gesture to the current board
    pub fn on_drag_end(&mut self, event: DragEnd) -> &BoardState {
        self.state = self.state.apply(event);
        &self.state
    }
}
