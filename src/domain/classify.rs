use crate::domain::{board::Board, issue::Issue, stage::Stage};
use tracing::debug;

/// Partitions fetched issues into a freshly loaded board.
///
/// Closed issues (anything not exactly `open`) go to `done`, open issues go
/// to `inProgress` when assigned and `toDo` otherwise. The partition is
/// stable: issues keep their input order within each lane.
///
/// An absent issue list classifies like an empty one:
/// ```
/// use issue_board::{classify, Issue};
///
/// let fetched: Option<Vec<Issue>> = None;
/// let board = classify(fetched.into_iter().flatten());
/// assert!(board.is_vacant());
/// ```
pub fn classify(issues: impl IntoIterator<Item = Issue>) -> Board {
    let mut board = Board::new();
    for issue in issues {
        board.push(Stage::for_issue(&issue), issue);
    }

    debug!(
        to_do = board.lane(Stage::ToDo).len(),
        in_progress = board.lane(Stage::InProgress).len(),
        done = board.lane(Stage::Done).len(),
        "Classified issues"
    );
    board
}
