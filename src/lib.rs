//! # Issue Board
//!
//! Board state model for arranging a repository's issues into kanban stages.
//!
//! Issues fetched from a remote tracker are classified into three ordered
//! lanes (`toDo`, `inProgress`, `done`) and rearranged by drag-and-drop
//! moves. Every move produces a new board snapshot; no issue is ever
//! duplicated or lost between lanes. Rendering and gesture handling stay
//! with the caller.

pub mod config;
pub mod domain;
pub mod error;
pub mod fetch;
pub mod session;

// Re-export commonly used types
pub use config::FetchConfig;
pub use domain::{
    board::{Board, Position},
    classify::classify,
    gesture::DragEnd,
    issue::{Assignee, Issue, IssueId, IssueState, RepoId},
    stage::Stage,
    state::BoardState,
};
pub use error::{BoardError, Result};
pub use fetch::{load_issues, FetchOutcome, IssueFetcher};
pub use session::BoardSession;

#[cfg(feature = "github")]
pub use fetch::github::GitHubFetcher;
