pub mod board;
pub mod classify;
pub mod gesture;
pub mod issue;
pub mod stage;
pub mod state;

pub use board::{Board, Position};
pub use classify::classify;
pub use gesture::DragEnd;
pub use issue::{Assignee, Issue, IssueId, IssueState, RepoId};
pub use stage::Stage;
pub use state::BoardState;
